//! HTML table writer.
//!
//! Walks the rows once, emitting `<table>`, `<tr>` and `<td>`/`<th>` with
//! inline styles. Vertical merges are collapsed into `rowspan` via
//! [`MergeGrid`]; cell content comes from a [`ContentWriter`].
//!
//! # Example
//!
//! ```
//! use twip::export::{ParagraphWriter, TableHtmlWriter};
//! use twip::model::{Cell, Row, Table, TextBlocks};
//!
//! let table = Table::new()
//!     .with_style("LightGrid")
//!     .with_row(Row::new().with_cell(Cell::new(TextBlocks::from("Total"))));
//!
//! let html = TableHtmlWriter::new(&ParagraphWriter).write(&table);
//! assert!(html.starts_with("<table class=\"LightGrid\">\n"));
//! ```

use std::fmt::Write;
use std::io;

use log::{debug, warn};

use super::classify::{RowClasses, col_position_class};
use super::content::{ContentWriter, ParagraphWriter};
use super::merge::MergeGrid;
use crate::model::{Cell, Table, TableStyleSource, TextBlocks};
use crate::style::{Color, style_attribute};
use crate::util::escape_xml;

/// Configuration for HTML table output.
///
/// The defaults reproduce the classic output exactly.
#[derive(Debug, Clone)]
pub struct TableHtmlConfig {
    /// Emit `<th>` for cells in header rows. When false, header rows use `<td>`.
    pub header_cells: bool,
    /// Emit the presentational `bgcolor` / `color` cell attributes.
    pub legacy_color_attributes: bool,
}

impl Default for TableHtmlConfig {
    fn default() -> Self {
        Self {
            header_cells: true,
            legacy_color_attributes: true,
        }
    }
}

/// Converts [`Table`]s to HTML fragments.
pub struct TableHtmlWriter<'w, W: ?Sized> {
    content: &'w W,
    config: TableHtmlConfig,
}

impl<'w, W: ?Sized> TableHtmlWriter<'w, W> {
    /// Create a writer with default configuration.
    pub fn new(content: &'w W) -> Self {
        Self {
            content,
            config: TableHtmlConfig::default(),
        }
    }

    /// Configure the writer with custom settings.
    pub fn with_config(mut self, config: TableHtmlConfig) -> Self {
        self.config = config;
        self
    }

    /// Convert a table to an HTML fragment.
    ///
    /// A table without rows produces an empty string.
    pub fn write<C>(&self, table: &Table<C>) -> String
    where
        W: ContentWriter<C>,
    {
        let mut out = String::new();
        self.write_to(table, &mut out);
        out
    }

    /// Append the HTML for a table to `out`.
    pub fn write_to<C>(&self, table: &Table<C>, out: &mut String)
    where
        W: ContentWriter<C>,
    {
        let row_count = table.rows.len();
        if row_count == 0 {
            return;
        }

        let grid = MergeGrid::build(table);
        debug!(
            "writing table: {} rows, up to {} cells per row",
            row_count,
            grid.width()
        );

        // The table's own frame owns all four border sides.
        let table_style = table.style.as_ref().map(TableStyleSource::as_style_ref);
        let _ = writeln!(out, "<table{}>", style_attribute(table_style, true, true));

        for (i, row) in table.rows.iter().enumerate() {
            let _ = writeln!(out, "<tr class=\"{}\">", RowClasses::new(i, row_count));

            let tag = if row.is_header() && self.config.header_cells {
                "th"
            } else {
                "td"
            };
            let cell_count = row.cells.len();

            for (j, cell) in row.cells.iter().enumerate() {
                if grid.is_swallowed(i, j) {
                    continue;
                }

                let continuation = grid.continuation_rows(i, j);
                let attrs = self.cell_attributes(cell, i, j, cell_count, continuation.len() + 1);
                let _ = writeln!(out, "<{tag}{attrs}>");

                self.content.write_content(&cell.content, out);
                for k in continuation {
                    self.fold_continuation(table, k, j, out);
                }

                let _ = writeln!(out, "</{tag}>");
            }

            out.push_str("</tr>\n");
        }

        out.push_str("</table>\n");
    }

    /// Write a table to any `io::Write` destination.
    pub fn export<C, O: io::Write>(&self, table: &Table<C>, writer: &mut O) -> io::Result<()>
    where
        W: ContentWriter<C>,
    {
        writer.write_all(self.write(table).as_bytes())
    }

    /// Attributes in order: class, style, colspan, rowspan, bgcolor, color.
    fn cell_attributes<C>(
        &self,
        cell: &Cell<C>,
        row: usize,
        index: usize,
        cell_count: usize,
        row_span: usize,
    ) -> String {
        let mut attrs = String::new();
        let _ = write!(attrs, " class=\"{}\"", col_position_class(index, cell_count));

        // Cells own their bottom and right edges; top and left only on the frame.
        attrs.push_str(&style_attribute(
            Some(cell.style.record().into()),
            row == 0,
            index == 0,
        ));

        if let Some(col_span) = cell.style.col_span() {
            let _ = write!(attrs, " colspan=\"{col_span}\"");
        }
        if row_span > 1 {
            let _ = write!(attrs, " rowspan=\"{row_span}\"");
        }

        if self.config.legacy_color_attributes
            && let Some(background) = cell.style.background()
        {
            let _ = write!(attrs, " bgcolor=\"#{}\"", escape_xml(background));
            if let Some(foreground) =
                Color::from_hex(background).and_then(|c| c.contrast_foreground())
            {
                let _ = write!(attrs, " color=\"{foreground}\"");
            }
        }

        attrs
    }

    /// Append content found on a swallowed cell to its owning cell.
    fn fold_continuation<C>(&self, table: &Table<C>, row: usize, index: usize, out: &mut String)
    where
        W: ContentWriter<C>,
    {
        let Some(cell) = table.cell(row, index) else {
            return;
        };
        let mut stray = String::new();
        self.content.write_content(&cell.content, &mut stray);
        if !stray.is_empty() {
            warn!("merged cell ({row}, {index}) carries content; appending it to the cell above");
            out.push_str(&stray);
        }
    }
}

/// Convert a plain-text table to HTML with the default configuration.
pub fn table_to_html(table: &Table<TextBlocks>) -> String {
    TableHtmlWriter::new(&ParagraphWriter).write(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BorderSide, Borders, CellStyle, Row, TableStyle, VerticalJc};

    fn text(s: &str) -> Cell<TextBlocks> {
        Cell::new(TextBlocks::from(s))
    }

    #[test]
    fn test_empty_table() {
        let table: Table<TextBlocks> = Table::new().with_style("Grid");
        assert_eq!(table_to_html(&table), "");
    }

    #[test]
    fn test_single_cell_exact_output() {
        let table = Table::new().with_row(Row::new().with_cell(text("Hello")));
        assert_eq!(
            table_to_html(&table),
            "<table>\n\
             <tr class=\"firstRow\">\n\
             <td class=\"firstCol\" style=\"vertical-align: top;\">\n\
             <p>Hello</p>\n\
             </td>\n\
             </tr>\n\
             </table>\n"
        );
    }

    #[test]
    fn test_row_and_col_classes() {
        let row = || {
            Row::new()
                .with_cell(text("a"))
                .with_cell(text("b"))
                .with_cell(text("c"))
        };
        let table = Table::new().with_row(row()).with_row(row()).with_row(row());
        let html = table_to_html(&table);

        assert!(html.contains("<tr class=\"firstRow\">"));
        assert!(html.contains("<tr class=\"row band1Horz\">"));
        assert!(html.contains("<tr class=\"lastRow band2Horz\">"));
        assert_eq!(html.matches("class=\"firstCol\"").count(), 3);
        assert_eq!(html.matches("class=\"col\"").count(), 3);
        assert_eq!(html.matches("class=\"lastCol\"").count(), 3);
    }

    #[test]
    fn test_header_row() {
        let table = Table::new()
            .with_row(Row::header().with_cell(text("Name")))
            .with_row(Row::new().with_cell(text("Ada")));
        let html = table_to_html(&table);

        assert!(html.contains("<th class=\"firstCol\""));
        assert!(html.contains("</th>\n"));
        assert_eq!(html.matches("<td ").count(), 1);

        let plain = TableHtmlWriter::new(&ParagraphWriter)
            .with_config(TableHtmlConfig {
                header_cells: false,
                ..Default::default()
            })
            .write(&table);
        assert!(!plain.contains("<th"));
        assert_eq!(plain.matches("<td ").count(), 2);
    }

    #[test]
    fn test_vertical_merge() {
        let table = Table::new()
            .with_row(
                Row::new()
                    .with_cell(text("Region").merge_restart())
                    .with_cell(text("Q1")),
            )
            .with_row(
                Row::new()
                    .with_cell(Cell::new(TextBlocks::new()).merge_continue())
                    .with_cell(text("Q2")),
            );
        let html = table_to_html(&table);

        assert!(html.contains(" rowspan=\"2\""));
        assert_eq!(html.matches("<td ").count(), 3);
        // The second row keeps only its own cell, which is no longer first
        let second_row = html.split("<tr class=\"lastRow band1Horz\">").nth(1).unwrap();
        assert!(second_row.contains("class=\"lastCol\""));
        assert!(!second_row.contains("Region"));
    }

    #[test]
    fn test_stray_continuation_content_is_folded() {
        let table = Table::new()
            .with_row(Row::new().with_cell(text("top").merge_restart()))
            .with_row(Row::new().with_cell(text("middle").merge_continue()))
            .with_row(Row::new().with_cell(text("bottom").merge_continue()));
        let html = table_to_html(&table);

        assert!(html.contains("<p>top</p>\n<p>middle</p>\n<p>bottom</p>\n</td>"));
        assert_eq!(html.matches("<td ").count(), 1);
        assert!(html.contains(" rowspan=\"3\""));
    }

    #[test]
    fn test_orphan_continuation_is_emitted() {
        let table = Table::new()
            .with_row(Row::new().with_cell(text("stray").merge_continue()));
        let html = table_to_html(&table);

        assert!(html.contains("<p>stray</p>"));
        assert!(!html.contains("rowspan"));
    }

    #[test]
    fn test_colspan() {
        let table = Table::new().with_row(
            Row::new()
                .with_cell(text("wide").with_grid_span(3))
                .with_cell(text("narrow").with_grid_span(1)),
        );
        let html = table_to_html(&table);
        assert_eq!(html.matches(" colspan=\"3\"").count(), 1);
        assert_eq!(html.matches("colspan").count(), 1);
    }

    #[test]
    fn test_attribute_order() {
        let style = CellStyle {
            grid_span: Some(2),
            bg_color: Some("000000".into()),
            ..Default::default()
        };
        let table = Table::new()
            .with_row(Row::new().with_cell(text("x").with_style(style).merge_restart()))
            .with_row(Row::new().with_cell(Cell::new(TextBlocks::new()).merge_continue()));
        let html = table_to_html(&table);

        assert!(html.contains(
            "<td class=\"firstCol\" style=\"vertical-align: top;\" colspan=\"2\" \
             rowspan=\"2\" bgcolor=\"#000000\" color=\"#ffffff\">"
        ));
    }

    #[test]
    fn test_background_colors() {
        let dark = text("dark").with_bg_color("1F3864");
        let light = text("light").with_bg_color("FFFFFF");
        let auto = text("auto").with_bg_color("auto");
        let table = Table::new().with_row(
            Row::new().with_cell(dark).with_cell(light).with_cell(auto),
        );
        let html = table_to_html(&table);

        assert!(html.contains("bgcolor=\"#1F3864\" color=\"#ffffff\""));
        assert!(html.contains("bgcolor=\"#FFFFFF\">"));
        assert!(!html.contains("#auto"));
        assert_eq!(html.matches("bgcolor").count(), 2);

        let bare = TableHtmlWriter::new(&ParagraphWriter)
            .with_config(TableHtmlConfig {
                legacy_color_attributes: false,
                ..Default::default()
            })
            .write(&table);
        assert!(!bare.contains("bgcolor"));
        assert!(!bare.contains(" color="));
    }

    #[test]
    fn test_non_hex_background_gets_no_foreground() {
        let table = Table::new().with_row(Row::new().with_cell(text("x").with_bg_color("red")));
        let html = table_to_html(&table);
        assert!(html.contains("bgcolor=\"#red\">"));
        assert!(!html.contains(" color="));
    }

    #[test]
    fn test_border_ownership() {
        let bordered = || {
            text("x").with_style(CellStyle {
                borders: Borders::all(BorderSide::new("single", "auto", 8.0)),
                v_align: Some(VerticalJc::Center),
                ..Default::default()
            })
        };
        let row = || Row::new().with_cell(bordered()).with_cell(bordered());
        let table = Table::new().with_row(row()).with_row(row());
        let html = table_to_html(&table);
        let cells: Vec<&str> = html.lines().filter(|l| l.starts_with("<td")).collect();
        assert_eq!(cells.len(), 4);

        // (0,0): full frame
        assert!(cells[0].contains("border-top-style") && cells[0].contains("border-left-style"));
        // (0,1): top only
        assert!(cells[1].contains("border-top-style") && !cells[1].contains("border-left-"));
        // (1,0): left only
        assert!(!cells[2].contains("border-top-") && cells[2].contains("border-left-style"));
        // (1,1): interior
        assert!(!cells[3].contains("border-top-") && !cells[3].contains("border-left-"));
        for cell in &cells {
            assert!(cell.contains("border-bottom-width: 1pt;"));
            assert!(cell.contains("vertical-align: middle;"));
        }
    }

    #[test]
    fn test_table_style_attribute() {
        let table = Table::new()
            .with_style(TableStyle {
                width: Some(2500.0),
                borders: Borders::all(BorderSide::new("single", "auto", 4.0)),
                ..Default::default()
            })
            .with_row(Row::new().with_cell(text("x")));
        let html = table_to_html(&table);
        let first = html.lines().next().unwrap();

        assert!(first.starts_with("<table style=\"width: 50%;"));
        assert!(first.contains("border-top-width: 0.5pt;"));
        assert!(first.contains("border-left-width: 0.5pt;"));
    }

    #[test]
    fn test_class_name_table_style() {
        let table = Table::new()
            .with_style("MyTableStyle")
            .with_row(Row::new().with_cell(text("x")));
        let html = table_to_html(&table);
        assert!(html.starts_with("<table class=\"MyTableStyle\">\n"));
    }

    #[test]
    fn test_custom_content_writer() {
        let writer = |n: &u32, out: &mut String| {
            let _ = writeln!(out, "<span>{n}</span>");
        };
        let table = Table::new()
            .with_row(Row::new().with_cell(Cell::new(1u32)).with_cell(Cell::new(2u32)));
        let html = TableHtmlWriter::new(&writer).write(&table);
        assert!(html.contains("<span>1</span>"));
        assert!(html.contains("<span>2</span>"));
    }

    #[test]
    fn test_export_to_io() {
        let table = Table::new().with_row(Row::new().with_cell(text("io")));
        let mut buf = Vec::new();
        TableHtmlWriter::new(&ParagraphWriter)
            .export(&table, &mut buf)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), table_to_html(&table));
    }
}
