use crate::classifier::{classify, classify_joined, WordShape};
use crate::lexicon::{ElisionPolicy, FrenchLexicon};

/// Capitalize one token given its zero-based position in the sentence.
///
/// Steps, in order: Unicode lower-fold, elision rewrite, hyphen compound,
/// dotted abbreviation, then positional rules. The elision step does not
/// return; it rewrites the token and falls through, so a position-0
/// "l'autre" still gets its head force-capitalized ("L'Autre") and an
/// elided compound like "l'avant-garde" still reaches the hyphen step.
pub fn capitalize_word(lexicon: &FrenchLexicon, token: &str, position: usize) -> String {
    let mut word = token.to_lowercase();
    let mut composed = false;

    if let WordShape::Elided { head, tail } = classify(&word) {
        word = capitalize_elided(lexicon, &head, &tail);
        composed = true;
    }

    match classify_joined(&word) {
        WordShape::Hyphenated { left, right } => {
            // the left side always capitalizes, function word or not
            return format!(
                "{}-{}",
                capitalize_first(&left),
                capitalize_first_if_needed(lexicon, &right)
            );
        }
        WordShape::Dotted(segments) => {
            // every segment force-capitalizes, single letters included
            let segments: Vec<String> =
                segments.iter().map(|s| capitalize_first(s)).collect();
            return segments.join(".");
        }
        _ => {}
    }

    if position == 0 {
        return capitalize_first(&word);
    }

    if lexicon.is_function_word(&word) {
        return word.to_lowercase();
    }

    if composed {
        // already cased by the elision rewrite
        return word;
    }

    capitalize_first(&word)
}

/// Rebuild an elided token from its lower-cased head and tail.
///
/// The four conditions are evaluated in sequence and are not mutually
/// exclusive: a later match overwrites an earlier one, so a single-character
/// tail wins over the head's elision policy ("c's" becomes "C's", not
/// "c's"). This layering is kept as-is for compatibility with the historical
/// behavior. Lengths are character counts, not byte counts.
fn capitalize_elided(lexicon: &FrenchLexicon, head: &str, tail: &str) -> String {
    let head_len = head.chars().count();
    let tail_len = tail.chars().count();

    let mut result = format!("{head}'{tail}");

    if head_len == 1 {
        // could be l' or d', as in "l'Autre"
        if let Some(letter) = head.chars().next() {
            match lexicon.elision_policy(letter) {
                Some(ElisionPolicy::CapitalizeTail) => {
                    result = format!("{head}'{}", capitalize_first_if_needed(lexicon, tail));
                }
                // could be c', j', m', n', s', t', as in "c'est"
                Some(ElisionPolicy::LowerBoth) => {
                    result = format!("{head}'{tail}");
                }
                None => {}
            }
        }
    }

    // could be an English-style possessive, as in "martin's"
    if tail_len == 1 {
        result = format!("{}'{tail}", capitalize_first_if_needed(lexicon, head));
    }

    // could be "jusqu'au"
    if head_len > 1 && tail_len > 1 {
        result = format!(
            "{}'{}",
            capitalize_first_if_needed(lexicon, head),
            capitalize_first_if_needed(lexicon, tail)
        );
    }

    result
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower the segment when it is a function word, otherwise capitalize its
/// first character
fn capitalize_first_if_needed(lexicon: &FrenchLexicon, text: &str) -> String {
    if lexicon.is_function_word(text) {
        text.to_lowercase()
    } else {
        capitalize_first(text)
    }
}
