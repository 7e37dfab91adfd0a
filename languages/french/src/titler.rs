use titrage_core::language::TitleCaser;

use crate::capitalizer::capitalize_word;
use crate::lexicon::FrenchLexicon;

/// French title caser.
///
/// Holds its lexical tables by value; configure the [`FrenchLexicon`] before
/// construction, after which the caser is immutable and safe to share across
/// threads.
pub struct FrenchTitleCaser {
    lexicon: FrenchLexicon,
}

impl FrenchTitleCaser {
    /// Caser with the standard French tables
    pub fn new() -> Self {
        Self::with_lexicon(FrenchLexicon::with_defaults())
    }

    /// Caser with a caller-configured lexicon
    pub fn with_lexicon(lexicon: FrenchLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &FrenchLexicon {
        &self.lexicon
    }
}

impl Default for FrenchTitleCaser {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleCaser for FrenchTitleCaser {
    fn language_code(&self) -> &str {
        "fr"
    }

    /// Tokenize on single spaces, capitalize each token in order, rejoin,
    /// then run the diacritic fold over the whole result. Empty tokens from
    /// consecutive spaces are carried through, so output spacing reproduces
    /// input spacing exactly.
    fn title(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let words: Vec<String> = self
            .tokenize(text)
            .iter()
            .map(|token| capitalize_word(&self.lexicon, &token.surface, token.position))
            .collect();

        self.lexicon.fold_diacritics(&words.join(" "))
    }
}
