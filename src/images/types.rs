//! Image lookup types shared by the providers and the core.

/// Outcome of an image lookup for one card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageResult {
    /// Reference to a real image (URL or path).
    Image(String),
    /// Emoji placeholder glyph.
    Emoji(String),
    #[default]
    None,
}

impl ImageResult {
    /// Short text the terminal can show for this result.
    pub fn label(&self) -> Option<&str> {
        match self {
            ImageResult::Image(reference) => Some(reference),
            ImageResult::Emoji(glyph) => Some(glyph),
            ImageResult::None => None,
        }
    }
}

/// Derive the single-word lookup key from a card's back text: the first
/// whitespace-delimited token with non-word characters removed, lowercased.
pub fn lookup_key(back_text: &str) -> Option<String> {
    let token = back_text.split_whitespace().next()?;
    let key: String = token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .flat_map(char::to_lowercase)
        .collect();
    if key.is_empty() { None } else { Some(key) }
}
