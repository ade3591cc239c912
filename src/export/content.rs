//! Cell content rendering boundary.

use std::fmt::Write;

use crate::model::TextBlocks;
use crate::util::escape_xml;

/// Renders the content of one cell as HTML.
///
/// The table writer knows nothing about paragraphs, runs or images; it
/// hands each cell's content to an implementation of this trait. Closures
/// of the form `Fn(&C, &mut String)` implement it directly.
pub trait ContentWriter<C: ?Sized> {
    /// Append the HTML for `content` to `out`.
    ///
    /// Writing nothing is valid and means the content is empty.
    fn write_content(&self, content: &C, out: &mut String);
}

impl<C: ?Sized, F> ContentWriter<C> for F
where
    F: Fn(&C, &mut String),
{
    fn write_content(&self, content: &C, out: &mut String) {
        self(content, out)
    }
}

/// Writes [`TextBlocks`] as one escaped `<p>` per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphWriter;

impl ContentWriter<TextBlocks> for ParagraphWriter {
    fn write_content(&self, content: &TextBlocks, out: &mut String) {
        for text in content.iter() {
            let _ = writeln!(out, "<p>{}</p>", escape_xml(text));
        }
    }
}
