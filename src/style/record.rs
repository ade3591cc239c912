//! Property views consumed by the translator.

use crate::model::{Borders, Shading, TableLayout, VerticalJc};

/// The translatable properties a style exposes.
///
/// Table and cell styles share most, but not all, properties. A `None`
/// field means the style kind does not carry that property (or leaves it
/// unset); the translator skips it either way.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleRecord<'a> {
    pub layout: Option<TableLayout>,
    /// Width in fiftieths of a percent.
    pub width: Option<f64>,
    pub v_align: Option<VerticalJc>,
    pub borders: Option<&'a Borders>,
    pub shading: Option<&'a Shading>,
}

/// A style argument: either a named class or a structured record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleRef<'a> {
    /// Opaque class name; rendered as a `class` attribute.
    ClassName(&'a str),
    /// Structured properties; rendered as an inline `style` attribute.
    Record(StyleRecord<'a>),
}

impl<'a> From<StyleRecord<'a>> for StyleRef<'a> {
    fn from(record: StyleRecord<'a>) -> Self {
        StyleRef::Record(record)
    }
}
