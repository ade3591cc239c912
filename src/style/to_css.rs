//! Word style to CSS declaration translation.
//!
//! Adjacent cells share edges. To avoid doubled borders each interior edge
//! is owned by one side only: a cell always writes its bottom and right
//! borders, and writes top/left only on the table's outer frame (first row,
//! first column). Callers pass that decision in as `use_border_top` /
//! `use_border_left`.

use std::fmt::Write;

use super::ToCss;
use super::properties::VerticalAlign;
use super::record::{StyleRecord, StyleRef};
use crate::model::{BorderSide, ShadingPattern, Side, TableLayout, VerticalJc};
use crate::util::escape_xml;

/// Border sides always translated, then the gated ones.
const OWNED_SIDES: [Side; 2] = [Side::Bottom, Side::Right];

/// Append one `name: value;` declaration, space-separated from the previous one.
macro_rules! emit {
    ($buf:expr, $($arg:tt)*) => {{
        if !$buf.is_empty() {
            $buf.push(' ');
        }
        let _ = write!($buf, $($arg)*);
    }};
}

impl From<VerticalJc> for VerticalAlign {
    fn from(jc: VerticalJc) -> Self {
        match jc {
            VerticalJc::Center => VerticalAlign::Middle,
            VerticalJc::Bottom => VerticalAlign::Bottom,
            VerticalJc::Top | VerticalJc::Both => VerticalAlign::Top,
        }
    }
}

impl ToCss for TableLayout {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(match self {
            TableLayout::Fixed => "fixed",
            TableLayout::Auto => "auto",
        });
    }
}

/// Build the HTML attribute for a style.
///
/// Returns ` style="..."` for a record, ` class="..."` for a class name, and
/// an empty string when there is no style, an empty class name, or nothing
/// translatable in the record.
pub fn style_attribute(
    style: Option<StyleRef<'_>>,
    use_border_top: bool,
    use_border_left: bool,
) -> String {
    match style {
        None | Some(StyleRef::ClassName("")) => String::new(),
        Some(StyleRef::ClassName(name)) => format!(" class=\"{}\"", escape_xml(name)),
        Some(StyleRef::Record(record)) => {
            let css = style_declarations(&record, use_border_top, use_border_left);
            if css.is_empty() {
                String::new()
            } else {
                format!(" style=\"{}\"", escape_xml(&css))
            }
        }
    }
}

/// Build the CSS declaration list for a style record.
pub fn style_declarations(
    record: &StyleRecord<'_>,
    use_border_top: bool,
    use_border_left: bool,
) -> String {
    let mut buf = String::new();

    if let Some(layout) = record.layout {
        emit!(buf, "table-layout: {};", layout.to_css_string());
    }

    if let Some(width) = record.width.filter(|&w| w > 0.0) {
        emit!(buf, "width: {}%;", width / 50.0);
    }

    if let Some(jc) = record.v_align {
        emit!(
            buf,
            "vertical-align: {};",
            VerticalAlign::from(jc).to_css_string()
        );
    }

    if let Some(borders) = record.borders {
        let gated = [
            (Side::Top, use_border_top),
            (Side::Left, use_border_left),
        ];
        let sides = OWNED_SIDES.into_iter().chain(
            gated
                .into_iter()
                .filter_map(|(side, enabled)| enabled.then_some(side)),
        );
        for side in sides {
            border_side_declarations(&mut buf, side, borders.side(side));
        }
    }

    if let Some(shading) = record.shading {
        let background = match shading.pattern {
            ShadingPattern::Clear => shading.fill.as_deref(),
            ShadingPattern::Solid => shading.color.as_deref(),
            _ => None,
        };
        if let Some(hex) = background
            .map(|c| c.strip_prefix('#').unwrap_or(c))
            .filter(|c| !c.is_empty() && *c != "auto")
        {
            emit!(buf, "background-color: #{};", hex);
        }
    }

    buf
}

/// Translate one border side. Each of style, color and size is independent.
fn border_side_declarations(buf: &mut String, side: Side, border: &BorderSide) {
    let name = side.as_str();

    if let Some(style) = border.style.as_deref().filter(|s| is_keyword(s)) {
        let css = match style {
            "single" => "solid",
            "nil" => "none",
            other => other,
        };
        emit!(buf, "border-{}-style: {};", name, css);
    }

    if let Some(color) = border.color.as_deref() {
        if is_keyword(color) {
            let css = if color == "auto" { "#000000" } else { color };
            emit!(buf, "border-{}-color: {};", name, css);
        } else if is_hex_digits(color) {
            emit!(buf, "border-{}-color: #{};", name, color);
        }
    }

    // Border sizes are eighths of a point, unlike the twips used elsewhere.
    if let Some(size) = border.size.filter(|s| s.is_finite()) {
        emit!(buf, "border-{}-width: {}pt;", name, size / 8.0);
    }
}

/// Lowercase ASCII letters only.
fn is_keyword(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

fn is_hex_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}
