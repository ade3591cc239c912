//! Vertical merge reconstruction.
//!
//! Word marks every cell of a vertical merge: the top cell says `restart`,
//! each cell below says `continue`. HTML instead puts a `rowspan` on the top
//! cell and omits the rest. [`MergeGrid`] lays the merge states out as a
//! row-major grid indexed by (row, cell index) so the span of a run is a
//! single bounded scan down one column.

use std::ops::Range;

use log::warn;

use crate::model::{Table, VMerge};

/// Merge state of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The row has no cell at this index.
    Absent,
    /// A cell that is not part of a merge.
    Plain,
    /// Top cell of a merge run.
    Restart,
    /// Cell swallowed by the run above it.
    Continue,
    /// A `continue` cell with no run above it. Emitted as a plain cell.
    Orphan,
}

impl Slot {
    /// Whether a `continue` directly below this slot joins its run.
    fn carries_run(self) -> bool {
        matches!(self, Slot::Restart | Slot::Continue)
    }
}

/// Resolved merge states for a whole table.
#[derive(Debug, Clone)]
pub struct MergeGrid {
    rows: usize,
    width: usize,
    slots: Vec<Slot>,
}

impl MergeGrid {
    /// Build the grid in two passes: record each cell's state, then resolve
    /// every `continue` against the slot above it, top to bottom.
    pub fn build<C>(table: &Table<C>) -> Self {
        let rows = table.rows.len();
        let width = table.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
        let mut slots = vec![Slot::Absent; rows * width];

        for (i, row) in table.rows.iter().enumerate() {
            for (j, cell) in row.cells.iter().enumerate() {
                slots[i * width + j] = match cell.style.v_merge {
                    None => Slot::Plain,
                    Some(VMerge::Restart) => Slot::Restart,
                    Some(VMerge::Continue) => Slot::Continue,
                };
            }
        }

        for i in 0..rows {
            for j in 0..width {
                if slots[i * width + j] != Slot::Continue {
                    continue;
                }
                let joins = i > 0 && slots[(i - 1) * width + j].carries_run();
                if !joins {
                    warn!("cell ({i}, {j}) continues a merge that never started; emitting it unmerged");
                    slots[i * width + j] = Slot::Orphan;
                }
            }
        }

        Self { rows, width, slots }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Maximum number of cells in any row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn slot(&self, row: usize, index: usize) -> Slot {
        if row >= self.rows || index >= self.width {
            return Slot::Absent;
        }
        self.slots[row * self.width + index]
    }

    /// True for cells folded into a run above; they get no element of their own.
    pub fn is_swallowed(&self, row: usize, index: usize) -> bool {
        self.slot(row, index) == Slot::Continue
    }

    /// Rows whose cell at `index` is swallowed by the run starting at `row`.
    ///
    /// Empty unless `(row, index)` is a `restart`. The scan stops at the
    /// first row where the index is absent or not a continuation.
    pub fn continuation_rows(&self, row: usize, index: usize) -> Range<usize> {
        let start = row + 1;
        if self.slot(row, index) != Slot::Restart {
            return start..start;
        }
        let mut end = start;
        while self.slot(end, index) == Slot::Continue {
            end += 1;
        }
        start..end
    }

    /// HTML rowspan for the cell at `(row, index)`.
    pub fn row_span(&self, row: usize, index: usize) -> usize {
        1 + self.continuation_rows(row, index).len()
    }
}
