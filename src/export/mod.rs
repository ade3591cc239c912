//! HTML export for Word tables.
//!
//! # Architecture
//!
//! One pass over the rows drives four stages:
//! - `classify`: positional (`firstRow`, `lastCol`, ...) and banding classes
//! - `merge`: vertical merge runs collapsed into `rowspan`
//! - [`crate::style`]: cell and table styles translated to inline CSS
//! - `table`: markup assembly, delegating cell content to a [`ContentWriter`]
//!
//! # Example
//!
//! ```
//! use twip::export::table_to_html;
//! use twip::model::{Cell, Row, Table, TextBlocks};
//!
//! let table = Table::new()
//!     .with_row(
//!         Row::header()
//!             .with_cell(Cell::new(TextBlocks::from("Region")).merge_restart())
//!             .with_cell(Cell::new(TextBlocks::from("Sales"))),
//!     )
//!     .with_row(
//!         Row::new()
//!             .with_cell(Cell::new(TextBlocks::new()).merge_continue())
//!             .with_cell(Cell::new(TextBlocks::from("42"))),
//!     );
//!
//! let html = table_to_html(&table);
//! assert!(html.contains("rowspan=\"2\""));
//! ```

mod classify;
mod content;
mod merge;
mod table;

pub use classify::{RowClasses, band_class, col_position_class, row_position_class};
pub use content::{ContentWriter, ParagraphWriter};
pub use merge::{MergeGrid, Slot};
pub use table::{TableHtmlConfig, TableHtmlWriter, table_to_html};

pub use crate::util::escape_xml;
