//! Whitespace tokenization

/// Split text into tokens on runs of whitespace.
///
/// Whitespace is Unicode White_Space plus the ASCII information separators
/// U+001C..=U+001F. Tokens are returned exactly as they appear; case and
/// punctuation are kept.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Form a token takes in the vocabulary file
pub fn normalize(token: &str) -> String {
    token.to_lowercase()
}
