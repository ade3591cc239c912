//! Style translation from Word table formatting to inline CSS.
//!
//! This module contains:
//! - The `ToCss` trait and CSS-facing value types (Color, VerticalAlign)
//! - `StyleRecord`, the per-property view over table and cell styles
//! - The declaration builder with border-side ownership rules

mod properties;
mod record;
mod to_css;

pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

// Re-export property types
pub use properties::{Color, VerticalAlign};

// Re-export style views
pub use record::{StyleRecord, StyleRef};

// Re-export translator entry points
pub use to_css::{style_attribute, style_declarations};

// Re-export macro for internal use
pub(crate) use properties::enum_property;
