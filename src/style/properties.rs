//! Keyword property types and the enum_property! macro.
//!
//! Word stores most table formatting as short keywords (`fixed`, `center`,
//! `restart`, `clear`, ...). Each keyword family becomes a Rust enum that
//! round-trips through its keyword, so the model can be deserialized from
//! and displayed as the exact source vocabulary.

use std::fmt::{self, Write};

use super::ToCss;

/// Macro for defining keyword enums with parsing and display.
///
/// Inspired by lightningcss's `enum_property!` macro, this reduces boilerplate
/// for enums that map one-to-one onto keywords.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Table layout algorithm.
///     pub enum TableLayout {
///         Fixed => "fixed",
///         #[default]
///         Auto => "autofit",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $keyword:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[cfg_attr(feature = "json", serde(rename = $keyword))]
                $variant,
            )*
        }

        impl $name {
            /// Returns the keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $keyword,)*
                }
            }

            /// Parse a keyword into this enum.
            #[inline]
            pub fn from_keyword(s: &str) -> Option<Self> {
                match s {
                    $($keyword => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                Self::from_keyword(s).ok_or_else(|| $crate::error::Error::UnknownKeyword {
                    kind: stringify!($name),
                    value: s.to_string(),
                })
            }
        }
    };
}

// Export the macro for use within the crate
pub(crate) use enum_property;

enum_property! {
    /// CSS vertical-align values emitted for table cells.
    pub enum VerticalAlign {
        #[default]
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
    }
}

impl ToCss for VerticalAlign {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(self.as_str());
    }
}

/// Opaque RGB color (8 bits per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Luminance above which dark text stays readable without an override.
    pub const LIGHT_THRESHOLD: f64 = 186.0;

    /// Create a new color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit hex color, with or without a leading `#`.
    ///
    /// Returns `None` for anything else, including Word's `auto` sentinel.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Weighted perceptual luminance on the 0-255 scale.
    ///
    /// `0.299R + 0.587G + 0.114B`. This is not WCAG relative luminance.
    pub fn luminance(&self) -> f64 {
        f64::from(self.r) * 0.299 + f64::from(self.g) * 0.587 + f64::from(self.b) * 0.114
    }

    /// Foreground override for text drawn on this background.
    ///
    /// Light backgrounds keep the inherited (dark) text color; everything at
    /// or below the threshold gets white text.
    pub fn contrast_foreground(&self) -> Option<Color> {
        if self.luminance() > Self::LIGHT_THRESHOLD {
            None
        } else {
            Some(Color::WHITE)
        }
    }
}

impl ToCss for Color {
    fn to_css(&self, buf: &mut String) {
        let _ = write!(buf, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}
