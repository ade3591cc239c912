//! Table, row and cell styles as stored by the word processor.
//!
//! Values are kept in their raw source form (twips, eighths of a point,
//! keyword strings). Translation to CSS happens in [`crate::style`].

use crate::style::{StyleRecord, enum_property};

enum_property! {
    /// Table layout algorithm.
    pub enum TableLayout {
        Fixed => "fixed",
        #[default]
        #[cfg_attr(feature = "json", serde(alias = "auto"))]
        Auto => "autofit",
    }
}

enum_property! {
    /// Vertical justification of cell content.
    pub enum VerticalJc {
        #[default]
        Top => "top",
        Center => "center",
        Both => "both",
        Bottom => "bottom",
    }
}

enum_property! {
    /// Vertical merge state of a cell.
    ///
    /// A cell without a merge state is neither: it stands on its own.
    /// Cells hold `Option<VMerge>`, so the `Default` here is never used to
    /// mean "no merge".
    pub enum VMerge {
        /// First cell of a vertically merged group.
        #[default]
        Restart => "restart",
        /// Cell swallowed by the group started above it.
        Continue => "continue",
    }
}

enum_property! {
    /// Shading fill pattern (ST_Shd).
    pub enum ShadingPattern {
        #[default]
        Clear => "clear",
        Solid => "solid",
        Nil => "nil",
        HorzStripe => "horzStripe",
        VertStripe => "vertStripe",
        ReverseDiagStripe => "reverseDiagStripe",
        DiagStripe => "diagStripe",
        HorzCross => "horzCross",
        DiagCross => "diagCross",
        ThinHorzStripe => "thinHorzStripe",
        ThinVertStripe => "thinVertStripe",
        ThinReverseDiagStripe => "thinReverseDiagStripe",
        ThinDiagStripe => "thinDiagStripe",
        ThinHorzCross => "thinHorzCross",
        ThinDiagCross => "thinDiagCross",
        Pct5 => "pct5",
        Pct10 => "pct10",
        Pct12 => "pct12",
        Pct15 => "pct15",
        Pct20 => "pct20",
        Pct25 => "pct25",
        Pct30 => "pct30",
        Pct35 => "pct35",
        Pct37 => "pct37",
        Pct40 => "pct40",
        Pct45 => "pct45",
        Pct50 => "pct50",
        Pct55 => "pct55",
        Pct60 => "pct60",
        Pct62 => "pct62",
        Pct65 => "pct65",
        Pct70 => "pct70",
        Pct75 => "pct75",
        Pct80 => "pct80",
        Pct85 => "pct85",
        Pct87 => "pct87",
        Pct90 => "pct90",
        Pct95 => "pct95",
    }
}

/// Background shading of a table or cell.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct Shading {
    pub pattern: ShadingPattern,
    /// Background fill, used by the `clear` pattern.
    pub fill: Option<String>,
    /// Pattern color, used as the background by the `solid` pattern.
    pub color: Option<String>,
}

impl Shading {
    /// Flat fill with the given hex color.
    pub fn clear(fill: impl Into<String>) -> Self {
        Self {
            pattern: ShadingPattern::Clear,
            fill: Some(fill.into()),
            color: None,
        }
    }

    /// Solid pattern in the given hex color.
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            pattern: ShadingPattern::Solid,
            fill: None,
            color: Some(color.into()),
        }
    }
}

/// One side of a border, untranslated.
///
/// `style` and `color` are free-form strings because documents in the wild
/// carry values outside the schema; the translator decides what is usable.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct BorderSide {
    /// Line style keyword (`single`, `dashed`, `nil`, ...).
    #[cfg_attr(feature = "json", serde(deserialize_with = "scalar_string"))]
    pub style: Option<String>,
    /// Named color, hex digits, or `auto`.
    #[cfg_attr(feature = "json", serde(deserialize_with = "scalar_string"))]
    pub color: Option<String>,
    /// Line width in eighths of a point.
    pub size: Option<f64>,
}

impl BorderSide {
    /// A border with all three properties set.
    pub fn new(style: impl Into<String>, color: impl Into<String>, size: f64) -> Self {
        Self {
            style: Some(style.into()),
            color: Some(color.into()),
            size: Some(size),
        }
    }

    /// True when no property is set.
    pub fn is_empty(&self) -> bool {
        self.style.is_none() && self.color.is_none() && self.size.is_none()
    }
}

/// Accept a string or a number; anything else reads as unset.
#[cfg(feature = "json")]
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Edge of a table or cell box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

impl Side {
    /// CSS side name as used in `border-{side}-*`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Left => "left",
            Side::Bottom => "bottom",
            Side::Right => "right",
        }
    }
}

/// Borders on all four sides.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct Borders {
    pub top: BorderSide,
    pub left: BorderSide,
    pub bottom: BorderSide,
    pub right: BorderSide,
}

impl Borders {
    /// The same border on every side.
    pub fn all(side: BorderSide) -> Self {
        Self {
            top: side.clone(),
            left: side.clone(),
            bottom: side.clone(),
            right: side,
        }
    }

    pub fn side(&self, side: Side) -> &BorderSide {
        match side {
            Side::Top => &self.top,
            Side::Left => &self.left,
            Side::Bottom => &self.bottom,
            Side::Right => &self.right,
        }
    }
}

/// Table-level style.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct TableStyle {
    pub layout: Option<TableLayout>,
    /// Preferred width in fiftieths of a percent.
    pub width: Option<f64>,
    pub borders: Borders,
    pub shading: Option<Shading>,
}

impl TableStyle {
    /// Translatable view of this style. Tables have no vertical alignment.
    pub fn record(&self) -> StyleRecord<'_> {
        StyleRecord {
            layout: self.layout,
            width: self.width,
            v_align: None,
            borders: Some(&self.borders),
            shading: self.shading.as_ref(),
        }
    }
}

/// Row-level style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct RowStyle {
    /// Repeat as header row (`tblHeader`).
    pub header: bool,
}

impl RowStyle {
    pub fn header() -> Self {
        Self { header: true }
    }
}

/// Cell-level style.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct CellStyle {
    /// Preferred width in fiftieths of a percent.
    pub width: Option<f64>,
    pub v_align: Option<VerticalJc>,
    /// Number of grid columns spanned.
    pub grid_span: Option<u32>,
    pub v_merge: Option<VMerge>,
    /// Hex background color, or `auto`.
    pub bg_color: Option<String>,
    pub borders: Borders,
    pub shading: Option<Shading>,
}

impl CellStyle {
    /// Translatable view of this style.
    ///
    /// Cells always expose vertical alignment; an unset value reads as top.
    pub fn record(&self) -> StyleRecord<'_> {
        StyleRecord {
            layout: None,
            width: self.width,
            v_align: Some(self.v_align.unwrap_or_default()),
            borders: Some(&self.borders),
            shading: self.shading.as_ref(),
        }
    }

    /// Background color with the `auto` sentinel resolved away.
    pub fn background(&self) -> Option<&str> {
        self.bg_color
            .as_deref()
            .map(|c| c.strip_prefix('#').unwrap_or(c))
            .filter(|c| !c.is_empty() && *c != "auto")
    }

    /// Column span, if greater than one.
    pub fn col_span(&self) -> Option<u32> {
        self.grid_span.filter(|&n| n > 1)
    }

    pub fn is_merge_restart(&self) -> bool {
        self.v_merge == Some(VMerge::Restart)
    }

    pub fn is_merge_continue(&self) -> bool {
        self.v_merge == Some(VMerge::Continue)
    }
}
