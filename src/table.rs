use log::trace;

use crate::error::{HermiteError, Result};

/// Number of columns of the working table: interpolated values and interpolated derivatives.
pub const TABLE_COLUMNS: usize = 2;

/// Length of scratch buffer required to evaluate `n` samples.
pub fn scratch_len(n: usize) -> usize {
    TABLE_COLUMNS * 2 * n
}

/// Maps a row of the theoretical interpolation table to the physical abscissa it stands for.
///
/// The theoretical table has `2n` rows because every abscissa appears twice (once for its value,
/// once for its derivative). Rows are 0-based, so rows `2k` and `2k + 1` both belong to abscissa `k`.
/// In the 1-based notation of the textbook construction this is `ceil(i / 2)`.
///
/// # Example
/// ```
/// use hermite_interp::abscissa_index;
///
/// assert_eq!(0, abscissa_index(0));
/// assert_eq!(0, abscissa_index(1));
/// assert_eq!(1, abscissa_index(2));
/// assert_eq!(3, abscissa_index(7));
/// ```
#[inline]
pub fn abscissa_index(row: usize) -> usize {
    row / 2
}

/// Two-column view over a caller supplied scratch buffer, `2n` rows each.
pub(crate) struct WorkTable<'a> {
    pub(crate) value: &'a mut [f64],
    pub(crate) derivative: &'a mut [f64],
}

impl<'a> WorkTable<'a> {
    /// Splits `scratch` into the value and derivative columns. Nothing is written.
    pub(crate) fn new(scratch: &'a mut [f64], n: usize) -> Result<Self> {
        let rows = 2 * n;
        if scratch.len() < scratch_len(n) {
            return Err(HermiteError::InvalidSize {
                what: "scratch buffer",
                required: scratch_len(n),
                actual: scratch.len(),
            });
        }

        let (value, rest) = scratch.split_at_mut(rows);
        Ok(WorkTable { value, derivative: &mut rest[..rows] })
    }

    pub(crate) fn rows(&self) -> usize {
        self.value.len()
    }

    pub(crate) fn cell(&self, order: usize, row: usize) -> TableCell {
        TableCell {
            order,
            row,
            value: self.value[row],
            derivative: self.derivative[row],
        }
    }
}

/// Snapshot of one freshly written entry of the interpolation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableCell {
    /// Column of the table, i.e. degree of the interpolant this entry belongs to.
    pub order: usize,
    /// 0-based row within the column.
    pub row: usize,
    pub value: f64,
    pub derivative: f64,
}

/// Receives every table entry of order one and above as soon as it is computed.
pub trait TableObserver {
    fn on_cell(&mut self, cell: TableCell);
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TableObserver for NoopObserver {
    #[inline(always)]
    fn on_cell(&mut self, _cell: TableCell) {}
}

/// Observer that forwards each table entry to the `log` facade at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl TableObserver for LogObserver {
    fn on_cell(&mut self, cell: TableCell) {
        trace!(
            "hermite table order {} row {}: value = {:e}, derivative = {:e}",
            cell.order,
            cell.row,
            cell.value,
            cell.derivative
        );
    }
}

impl<F: FnMut(TableCell)> TableObserver for F {
    fn on_cell(&mut self, cell: TableCell) {
        self(cell)
    }
}
