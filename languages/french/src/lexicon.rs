use std::collections::HashSet;

/// Grammatical function words that stay lower-case outside sentence-initial
/// position. Membership is tested against already lower-cased tokens.
const FUNCTION_WORDS: &[&str] = &[
    // definite articles
    "le", "la", "les",
    // indefinite articles
    "un", "une", "des",
    // partitive articles
    "du", "de",
    // contracted articles
    "au", "aux",
    // demonstrative adjectives
    "ce", "cet", "cette", "ces",
    // exclamative adjectives
    "quel", "quels", "quelle", "quelles",
    // possessive adjectives
    "mon", "ton", "son", "notre", "votre", "leur", "ma", "ta", "sa", "mes", "tes", "ses", "nos",
    "vos", "leurs",
    // coordinating conjunctions
    "mais", "ou", "et", "donc", "or", "ni", "car", "voire",
    // subordinating conjunctions
    "que", "qu", "quand", "comme", "si", "lorsque", "lorsqu", "puisque", "puisqu", "quoique",
    "quoiqu",
    // prepositions
    "à", "chez", "dans", "entre", "jusque", "jusqu", "hors", "par", "pour", "sans", "vers", "sur",
    "pas", "parmi", "avec", "sous", "en",
    // personal pronouns
    "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "me", "te", "se", "y",
    // relative pronouns
    "qui", "quoi", "dont", "où",
    // others
    "ne",
];

/// Elided letters that keep both sides lower-case (c'est, j'ai, n'est)
const LOWER_BOTH_LETTERS: &[char] = &['c', 'j', 'm', 'n', 's', 't'];

/// Elided letters that capitalize the following segment (l'Autre, d'Artagnan)
const CAPITALIZE_TAIL_LETTERS: &[char] = &['l', 'd'];

/// Accented capitals folded to plain ASCII after casing. Source characters
/// are all distinct, so application order does not matter.
const DIACRITIC_PAIRS: &[(char, char)] = &[
    ('À', 'A'),
    ('Â', 'A'),
    ('Ä', 'A'),
    ('É', 'E'),
    ('È', 'E'),
    ('Ê', 'E'),
    ('Ë', 'E'),
    ('Ç', 'C'),
    ('Î', 'I'),
    ('Ï', 'I'),
    ('Ô', 'O'),
    ('Ö', 'O'),
    ('Û', 'U'),
    ('Ü', 'U'),
    ('Ù', 'U'),
];

/// Casing policy applied to a single elided letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElisionPolicy {
    /// Both sides of the apostrophe stay lower-case
    LowerBoth,
    /// The head stays lower-case; the tail is capitalized unless it is a
    /// function word
    CapitalizeTail,
}

/// Lexical tables for French title casing.
///
/// An owned value injected into the caser at construction time. Mutation is
/// a configuration step on the owned lexicon; once the caser holds it, the
/// tables are immutable and shared reads are safe.
#[derive(Debug, Clone)]
pub struct FrenchLexicon {
    function_words: HashSet<String>,
    lower_both: HashSet<char>,
    capitalize_tail: HashSet<char>,
    diacritic_pairs: Vec<(char, char)>,
    kept_diacritics: HashSet<char>,
}

impl FrenchLexicon {
    /// Empty tables, useful for tests and fully custom configurations
    pub fn new() -> Self {
        Self {
            function_words: HashSet::new(),
            lower_both: HashSet::new(),
            capitalize_tail: HashSet::new(),
            diacritic_pairs: Vec::new(),
            kept_diacritics: HashSet::new(),
        }
    }

    /// Standard French tables
    pub fn with_defaults() -> Self {
        Self {
            function_words: FUNCTION_WORDS.iter().map(|w| w.to_string()).collect(),
            lower_both: LOWER_BOTH_LETTERS.iter().copied().collect(),
            capitalize_tail: CAPITALIZE_TAIL_LETTERS.iter().copied().collect(),
            diacritic_pairs: DIACRITIC_PAIRS.to_vec(),
            kept_diacritics: HashSet::new(),
        }
    }

    /// Case-sensitive membership test; callers pass lower-cased tokens
    pub fn is_function_word(&self, word: &str) -> bool {
        self.function_words.contains(word)
    }

    /// Policy for a single elided letter, `None` when the letter is not a
    /// recognized elision prefix. The two letter sets are disjoint.
    pub fn elision_policy(&self, letter: char) -> Option<ElisionPolicy> {
        if self.capitalize_tail.contains(&letter) {
            Some(ElisionPolicy::CapitalizeTail)
        } else if self.lower_both.contains(&letter) {
            Some(ElisionPolicy::LowerBoth)
        } else {
            None
        }
    }

    /// Add words to the function-word list
    pub fn add_function_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            let word = word.into();
            if !word.is_empty() {
                self.function_words.insert(word);
            }
        }
    }

    /// Remove words from the function-word list
    pub fn remove_function_words<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for word in words {
            self.function_words.remove(word);
        }
    }

    /// Exclude accented capitals from the folding pass, keeping them as-is
    pub fn keep_diacritics<I>(&mut self, letters: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.kept_diacritics.extend(letters);
    }

    /// Replace every mapped accented capital with its ASCII equivalent,
    /// skipping the kept ones
    pub fn fold_diacritics(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        text.chars()
            .map(|c| {
                if self.kept_diacritics.contains(&c) {
                    return c;
                }
                self.diacritic_pairs
                    .iter()
                    .find(|(input, _)| *input == c)
                    .map_or(c, |(_, output)| *output)
            })
            .collect()
    }
}

impl Default for FrenchLexicon {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_know_common_function_words() {
        let lexicon = FrenchLexicon::with_defaults();
        for word in ["le", "et", "jusqu", "où", "à"] {
            assert!(lexicon.is_function_word(word), "missing {word}");
        }
        assert!(!lexicon.is_function_word("chat"));
        // membership is case-sensitive against lower-cased input
        assert!(!lexicon.is_function_word("Le"));
    }

    #[test]
    fn elision_letter_sets_are_disjoint() {
        let lexicon = FrenchLexicon::with_defaults();
        assert_eq!(
            lexicon.elision_policy('l'),
            Some(ElisionPolicy::CapitalizeTail)
        );
        assert_eq!(lexicon.elision_policy('c'), Some(ElisionPolicy::LowerBoth));
        assert_eq!(lexicon.elision_policy('x'), None);

        for letter in LOWER_BOTH_LETTERS {
            assert!(!CAPITALIZE_TAIL_LETTERS.contains(letter));
        }
    }

    #[test]
    fn add_and_remove_function_words() {
        let mut lexicon = FrenchLexicon::with_defaults();
        lexicon.add_function_words(["lez", ""]);
        assert!(lexicon.is_function_word("lez"));
        // empty strings are never stored
        assert!(!lexicon.is_function_word(""));

        lexicon.remove_function_words(["lez", "le"]);
        assert!(!lexicon.is_function_word("lez"));
        assert!(!lexicon.is_function_word("le"));
    }

    #[test]
    fn fold_diacritics_maps_accented_capitals() {
        let lexicon = FrenchLexicon::with_defaults();
        assert_eq!(lexicon.fold_diacritics("École Élémentaire"), "Ecole Elémentaire");
        // only capitals fold; lower-case accents pass through
        assert_eq!(lexicon.fold_diacritics("Çà Et Là"), "Cà Et Là");
        assert_eq!(lexicon.fold_diacritics(""), "");
    }

    #[test]
    fn kept_diacritics_are_skipped_by_the_fold() {
        let mut lexicon = FrenchLexicon::with_defaults();
        lexicon.keep_diacritics(['É']);
        assert_eq!(lexicon.fold_diacritics("École Âgée"), "École Agée");
    }
}
