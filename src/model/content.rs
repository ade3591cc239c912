//! Plain-text cell content.

/// Cell content as a list of plain-text paragraphs.
///
/// This is the content type used by the CLI and the WASM entry point. Callers
/// with a real document model use their own content type and
/// [`ContentWriter`](crate::export::ContentWriter) instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct TextBlocks(pub Vec<String>);

impl TextBlocks {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// A single paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self(vec![text.into()])
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.0.push(text.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TextBlocks {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for TextBlocks {
    fn from(paragraphs: [S; N]) -> Self {
        paragraphs.into_iter().collect()
    }
}

impl From<&str> for TextBlocks {
    fn from(text: &str) -> Self {
        Self::paragraph(text)
    }
}
