//! WASM bindings for browser-based table conversion.
//!
//! This module exposes the JSON-to-HTML conversion to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::export::{ParagraphWriter, TableHtmlConfig, TableHtmlWriter};
use crate::model::{Table, TextBlocks};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Convert a JSON table to an HTML fragment.
///
/// Takes the table as JSON text (cell content as arrays of paragraph strings)
/// and returns the HTML with default settings.
#[wasm_bindgen]
pub fn table_json_to_html(json: &str) -> Result<String, JsValue> {
    table_json_to_html_with(json, true, true)
}

/// Convert a JSON table to HTML with explicit output settings.
///
/// `header_cells` selects `<th>` for header rows; `legacy_colors` keeps the
/// `bgcolor`/`color` cell attributes.
#[wasm_bindgen]
pub fn table_json_to_html_with(
    json: &str,
    header_cells: bool,
    legacy_colors: bool,
) -> Result<String, JsValue> {
    let table: Table<TextBlocks> =
        Table::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let config = TableHtmlConfig {
        header_cells,
        legacy_color_attributes: legacy_colors,
    };
    Ok(TableHtmlWriter::new(&ParagraphWriter)
        .with_config(config)
        .write(&table))
}
