/// Shape of a single token, decided before any casing is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordShape {
    Plain,
    /// Exactly one apostrophe with non-empty text on both sides
    Elided { head: String, tail: String },
    /// Exactly one hyphen with non-empty text on both sides
    Hyphenated { left: String, right: String },
    /// At least one period; segments are kept verbatim, empty ones included,
    /// so a trailing dot round-trips ("a.b." -> ["a", "b", ""])
    Dotted(Vec<String>),
}

/// Classify a token. Precedence: apostrophe, then hyphen, then period.
///
/// Total over all inputs; anything that fails the structural checks is
/// `Plain`, including the empty string. Tokens with two or more hyphens
/// deliberately fall through to `Plain` (dotted tokens, by contrast, accept
/// any segment count).
pub fn classify(word: &str) -> WordShape {
    let parts: Vec<&str> = word.split('\'').collect();
    if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        return WordShape::Elided {
            head: parts[0].to_string(),
            tail: parts[1].to_string(),
        };
    }

    classify_joined(word)
}

/// Hyphen and period shapes only. Used on its own after an elision rewrite,
/// where the apostrophe is already consumed but a hyphen or period may still
/// apply ("l'avant-garde").
pub fn classify_joined(word: &str) -> WordShape {
    let parts: Vec<&str> = word.split('-').collect();
    if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        return WordShape::Hyphenated {
            left: parts[0].to_string(),
            right: parts[1].to_string(),
        };
    }

    if word.contains('.') {
        return WordShape::Dotted(word.split('.').map(str::to_string).collect());
    }

    WordShape::Plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_plain_words() {
        assert_eq!(classify(""), WordShape::Plain);
        assert_eq!(classify("chat"), WordShape::Plain);
    }

    #[test]
    fn single_apostrophe_with_two_parts_is_elided() {
        assert_eq!(
            classify("c'est"),
            WordShape::Elided {
                head: "c".to_string(),
                tail: "est".to_string()
            }
        );
    }

    #[test]
    fn degenerate_apostrophes_are_plain() {
        // leading, trailing, bare, and doubled apostrophes all fall through
        assert_eq!(classify("'abc"), WordShape::Plain);
        assert_eq!(classify("abc'"), WordShape::Plain);
        assert_eq!(classify("'"), WordShape::Plain);
        assert_eq!(classify("d'aujourd'hui"), WordShape::Plain);
    }

    #[test]
    fn single_hyphen_with_two_parts_is_hyphenated() {
        assert_eq!(
            classify("avant-hier"),
            WordShape::Hyphenated {
                left: "avant".to_string(),
                right: "hier".to_string()
            }
        );
    }

    #[test]
    fn multi_hyphen_words_fall_through_to_plain() {
        // only two-segment compounds get the hyphen treatment
        assert_eq!(classify("arc-en-ciel"), WordShape::Plain);
        assert_eq!(classify("-x"), WordShape::Plain);
    }

    #[test]
    fn dotted_words_keep_every_segment() {
        assert_eq!(
            classify("s.n.c.f."),
            WordShape::Dotted(vec![
                "s".to_string(),
                "n".to_string(),
                "c".to_string(),
                "f".to_string(),
                String::new()
            ])
        );
    }

    #[test]
    fn apostrophe_wins_over_hyphen_and_period() {
        assert!(matches!(classify("l'avant-garde"), WordShape::Elided { .. }));
        assert!(matches!(
            classify_joined("l'avant-garde"),
            WordShape::Hyphenated { .. }
        ));
    }
}
