/// Title-casing interface for language implementations
pub trait TitleCaser: Send + Sync {
    /// Language identifier (ISO 639-1 code: "fr", "en", etc.)
    fn language_code(&self) -> &str;

    /// Render text following the language's title-casing conventions.
    ///
    /// Total over all inputs: every string in, string out, no error path.
    fn title(&self, text: &str) -> String;

    /// Break text into space-separated tokens.
    ///
    /// Splits on single spaces, so runs of consecutive spaces produce empty
    /// tokens. They are kept positionally: rejoining the surfaces with single
    /// spaces reproduces the input spacing exactly.
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split(' ')
            .enumerate()
            .map(|(position, surface)| Token {
                surface: surface.to_string(),
                position,
            })
            .collect()
    }
}

/// A maximal run of non-space characters, with its zero-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub position: usize,
}
