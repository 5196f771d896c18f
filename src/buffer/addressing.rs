//! Row/column to linear offset arithmetic.

use super::{BufferGeometry, LinearOffset};
use std::ops::Range;

/// Full-row range for `raw_row` in a store of `total_rows` rows.
///
/// `start = (raw_row mod total_rows) * columns`, `end = start + columns`.
/// Returns `None` for a zero dimension or when the range would overflow.
#[must_use]
pub fn row_range(raw_row: usize, total_rows: usize, columns: usize) -> Option<Range<LinearOffset>> {
    if total_rows == 0 || columns == 0 {
        return None;
    }
    let start = (raw_row % total_rows).checked_mul(columns)?;
    let end = start.checked_add(columns)?;
    Some(start..end)
}

/// Range covering every row in use, `[0, rows_in_use * columns)`.
///
/// Rows in use are clamped to the geometry's row count, so the range never
/// leaves the addressable space.
#[must_use]
pub fn document_range(geometry: &BufferGeometry, rows_in_use: usize) -> Range<LinearOffset> {
    0..rows_in_use.min(geometry.total_rows()) * geometry.columns()
}

/// Offset of a cell, or `None` if the cell is outside the buffer.
#[must_use]
pub fn offset_of(geometry: &BufferGeometry, row: usize, column: usize) -> Option<LinearOffset> {
    if row >= geometry.total_rows() || column >= geometry.columns() {
        return None;
    }
    Some(row * geometry.columns() + column)
}

/// `(row, column)` of an offset, or `None` past the addressable space.
#[must_use]
pub fn position_of(geometry: &BufferGeometry, offset: LinearOffset) -> Option<(usize, usize)> {
    if offset >= geometry.capacity() {
        return None;
    }
    Some((offset / geometry.columns(), offset % geometry.columns()))
}
