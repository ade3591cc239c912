//! # twip
//!
//! Converts Word-style tables into HTML with inline CSS.
//!
//! ## Features
//!
//! - Vertical merges (`restart`/`continue` on each cell) become `rowspan`
//! - Grid spans become `colspan`
//! - Border sides, shading, widths and vertical alignment become inline CSS,
//!   with each shared edge drawn once
//! - Positional and banding classes (`firstRow`, `band1Horz`, `lastCol`, ...)
//!   for table-style stylesheets
//! - Cell content is rendered by a pluggable [`ContentWriter`]
//!
//! ## Quick Start
//!
//! ```
//! use twip::{Cell, CellStyle, Row, Table, TextBlocks, table_to_html};
//!
//! let header = CellStyle {
//!     bg_color: Some("1F3864".into()),
//!     ..Default::default()
//! };
//!
//! let table = Table::new()
//!     .with_style("GridTable4")
//!     .with_row(Row::header().with_cell(Cell::new(TextBlocks::from("Item")).with_style(header)))
//!     .with_row(Row::new().with_cell(Cell::new(TextBlocks::from("Tea"))));
//!
//! let html = table_to_html(&table);
//! assert!(html.contains("<th class=\"firstCol\""));
//! assert!(html.contains("bgcolor=\"#1F3864\" color=\"#ffffff\""));
//! ```
//!
//! ## Loading JSON
//!
//! With the `json` feature (enabled by default through `cli`), tables can be
//! read from JSON:
//!
//! ```
//! # #[cfg(feature = "json")]
//! # {
//! use twip::{Table, TextBlocks, table_to_html};
//!
//! let table: Table<TextBlocks> = Table::from_json(
//!     r#"{ "style": "Plain", "rows": [ { "cells": [ { "content": ["hi"] } ] } ] }"#,
//! )
//! .unwrap();
//! assert!(table_to_html(&table).contains("<p>hi</p>"));
//! # }
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod style;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use export::{
    ContentWriter, ParagraphWriter, TableHtmlConfig, TableHtmlWriter, table_to_html,
};
pub use model::{
    BorderSide, Borders, Cell, CellStyle, Row, RowStyle, Shading, ShadingPattern, Table,
    TableLayout, TableStyle, TableStyleSource, TextBlocks, VMerge, VerticalJc,
};
pub use style::{StyleRecord, StyleRef, style_attribute, style_declarations};
