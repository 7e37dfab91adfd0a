use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default FR preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFC) so precomposed accents match the
        // lexical tables
        text = text.nfc().collect();

        // Newlines become word boundaries
        text = text.replace(['\n', '\r'], " ").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_combining_accents() {
        // "e" + U+0301 combining acute becomes precomposed "é"
        let processed = DefaultPreprocessor.process("e\u{301}cole");
        assert_eq!(processed, "école");
    }

    #[test]
    fn trims_and_flattens_newlines() {
        assert_eq!(DefaultPreprocessor.process("  le chat\n"), "le chat");
        assert_eq!(DefaultPreprocessor.process(""), "");
    }
}
