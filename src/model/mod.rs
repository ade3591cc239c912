//! Read-only table model.
//!
//! This module contains:
//! - Table, row and cell containers, generic over the cell content type
//! - Table/row/cell styles with Word's raw property values
//! - A plain-text content type for callers without a richer document model
//!
//! With the `json` feature the whole model (de)serializes with serde, and
//! tables can be loaded with [`Table::from_json`] / [`Table::from_json_file`].

mod content;
mod style;

pub use content::TextBlocks;
pub use style::{
    BorderSide, Borders, CellStyle, RowStyle, Shading, ShadingPattern, Side, TableLayout,
    TableStyle, VMerge, VerticalJc,
};

use crate::style::StyleRef;

/// Table-level style: a named style class or structured properties.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum TableStyleSource {
    ClassName(String),
    Structured(TableStyle),
}

impl TableStyleSource {
    pub fn as_style_ref(&self) -> StyleRef<'_> {
        match self {
            TableStyleSource::ClassName(name) => StyleRef::ClassName(name),
            TableStyleSource::Structured(style) => StyleRef::Record(style.record()),
        }
    }
}

impl From<TableStyle> for TableStyleSource {
    fn from(style: TableStyle) -> Self {
        TableStyleSource::Structured(style)
    }
}

impl From<&str> for TableStyleSource {
    fn from(name: &str) -> Self {
        TableStyleSource::ClassName(name.to_string())
    }
}

impl From<String> for TableStyleSource {
    fn from(name: String) -> Self {
        TableStyleSource::ClassName(name)
    }
}

/// A table: ordered rows plus an optional table style.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Table<C> {
    #[cfg_attr(feature = "json", serde(default))]
    pub style: Option<TableStyleSource>,
    #[cfg_attr(feature = "json", serde(default))]
    pub rows: Vec<Row<C>>,
}

impl<C> Table<C> {
    /// Create an empty, unstyled table.
    pub fn new() -> Self {
        Self {
            style: None,
            rows: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: impl Into<TableStyleSource>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_row(mut self, row: Row<C>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn push_row(&mut self, row: Row<C>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `(row, index)`, where `index` counts cells within the row.
    pub fn cell(&self, row: usize, index: usize) -> Option<&Cell<C>> {
        self.rows.get(row)?.cells.get(index)
    }
}

#[cfg(feature = "json")]
impl<C: serde::de::DeserializeOwned + Default> Table<C> {
    /// Parse a table from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON table file.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Row<C> {
    #[cfg_attr(feature = "json", serde(default))]
    pub style: RowStyle,
    #[cfg_attr(feature = "json", serde(default))]
    pub cells: Vec<Cell<C>>,
}

impl<C> Row<C> {
    pub fn new() -> Self {
        Self {
            style: RowStyle::default(),
            cells: Vec::new(),
        }
    }

    /// A row marked as a repeating header row.
    pub fn header() -> Self {
        Self {
            style: RowStyle::header(),
            cells: Vec::new(),
        }
    }

    pub fn with_cell(mut self, cell: Cell<C>) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn is_header(&self) -> bool {
        self.style.header
    }
}

/// A table cell: opaque content plus its style.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<C> {
    #[cfg_attr(feature = "json", serde(default))]
    pub style: CellStyle,
    #[cfg_attr(feature = "json", serde(default))]
    pub content: C,
}

impl<C> Cell<C> {
    pub fn new(content: C) -> Self {
        Self {
            style: CellStyle::default(),
            content,
        }
    }

    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    /// Mark this cell as the start of a vertical merge.
    pub fn merge_restart(mut self) -> Self {
        self.style.v_merge = Some(VMerge::Restart);
        self
    }

    /// Mark this cell as continuing the vertical merge above it.
    pub fn merge_continue(mut self) -> Self {
        self.style.v_merge = Some(VMerge::Continue);
        self
    }

    pub fn with_grid_span(mut self, span: u32) -> Self {
        self.style.grid_span = Some(span);
        self
    }

    pub fn with_bg_color(mut self, color: impl Into<String>) -> Self {
        self.style.bg_color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let table = Table::new()
            .with_style("Grid")
            .with_row(
                Row::header()
                    .with_cell(Cell::new("a").merge_restart())
                    .with_cell(Cell::new("b").with_grid_span(2)),
            )
            .with_row(Row::new().with_cell(Cell::new("").merge_continue()));

        assert_eq!(table.rows.len(), 2);
        assert!(table.rows[0].is_header());
        assert!(!table.rows[1].is_header());
        assert!(table.cell(0, 0).unwrap().style.is_merge_restart());
        assert!(table.cell(1, 0).unwrap().style.is_merge_continue());
        assert_eq!(table.cell(0, 1).unwrap().style.col_span(), Some(2));
        assert!(table.cell(1, 1).is_none());
        assert!(table.cell(5, 0).is_none());
    }

    #[test]
    fn test_style_source() {
        let named = TableStyleSource::from("MyTableStyle");
        assert_eq!(named.as_style_ref(), StyleRef::ClassName("MyTableStyle"));

        let structured = TableStyleSource::from(TableStyle {
            layout: Some(TableLayout::Fixed),
            ..Default::default()
        });
        match structured.as_style_ref() {
            StyleRef::Record(record) => assert_eq!(record.layout, Some(TableLayout::Fixed)),
            other => panic!("expected record, got {:?}", other),
        }
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json() {
        let json = r#"{
            "style": "LightGrid",
            "rows": [
                {
                    "style": { "header": true },
                    "cells": [
                        { "style": { "v_merge": "restart", "bg_color": "000000" }, "content": ["Name"] },
                        { "content": ["Score"] }
                    ]
                },
                {
                    "cells": [
                        { "style": { "v_merge": "continue" } },
                        { "style": { "grid_span": 2, "v_align": "center" }, "content": ["10"] }
                    ]
                }
            ]
        }"#;

        let table: Table<TextBlocks> = Table::from_json(json).unwrap();
        assert_eq!(
            table.style,
            Some(TableStyleSource::ClassName("LightGrid".into()))
        );
        assert!(table.rows[0].is_header());
        assert_eq!(table.rows[0].cells[0].style.v_merge, Some(VMerge::Restart));
        assert_eq!(table.rows[0].cells[0].content, TextBlocks::from(["Name"]));
        assert!(table.rows[1].cells[0].content.is_empty());
        assert_eq!(table.rows[1].cells[1].style.v_align, Some(VerticalJc::Center));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_structured_style() {
        let json = r#"{
            "style": {
                "layout": "fixed",
                "width": 5000,
                "borders": { "top": { "style": "single", "color": "auto", "size": 4 } },
                "shading": { "pattern": "clear", "fill": "F2F2F2" }
            },
            "rows": []
        }"#;

        let table: Table<TextBlocks> = Table::from_json(json).unwrap();
        let Some(TableStyleSource::Structured(style)) = table.style else {
            panic!("expected structured style");
        };
        assert_eq!(style.layout, Some(TableLayout::Fixed));
        assert_eq!(style.width, Some(5000.0));
        assert_eq!(style.borders.top.size, Some(4.0));
        assert_eq!(style.shading, Some(Shading::clear("F2F2F2")));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_autofit_layout() {
        for keyword in ["autofit", "auto"] {
            let json = format!(r#"{{ "style": {{ "layout": "{keyword}" }}, "rows": [] }}"#);
            let table: Table<TextBlocks> = Table::from_json(&json).unwrap();
            let Some(TableStyleSource::Structured(style)) = table.style else {
                panic!("expected structured style for {keyword}");
            };
            assert_eq!(style.layout, Some(TableLayout::Auto));
        }
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_numeric_border_values() {
        let json = r#"{ "rows": [ { "cells": [ { "style": { "borders": {
            "bottom": { "style": 12, "color": 0, "size": 8 },
            "right": { "style": null, "color": ["x"] }
        } } } ] } ] }"#;
        let table: Table<TextBlocks> = Table::from_json(json).unwrap();
        let borders = &table.rows[0].cells[0].style.borders;
        assert_eq!(borders.bottom.style.as_deref(), Some("12"));
        assert_eq!(borders.bottom.size, Some(8.0));
        assert!(borders.right.is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_rejects_unknown_merge_keyword() {
        let json = r#"{ "rows": [ { "cells": [ { "style": { "v_merge": "sideways" } } ] } ] }"#;
        assert!(Table::<TextBlocks>::from_json(json).is_err());
    }
}
