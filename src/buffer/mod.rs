//! Wraparound line buffer geometry and linear addressing.
//!
//! The buffer is a fixed-height circular row store. Every cell slot has a
//! linear offset `row * columns + column`, so the addressable space is
//! `[0, total_rows * columns)`. Callers express positions and extents as
//! half-open offset ranges and never see how rows are stored.
//!
//! # Examples
//!
//! ```
//! use buffer_a11y::buffer::BufferGeometry;
//!
//! let geometry = BufferGeometry::new(5, 10, 3, 4).unwrap();
//!
//! // Viewport rows wrap around the end of the row store.
//! let rows: Vec<_> = geometry.viewport_rows().collect();
//! assert_eq!(rows, vec![3, 4, 0, 1]);
//! assert_eq!(geometry.row_range(7), 20..30);
//! ```

mod addressing;

pub use addressing::{document_range, offset_of, position_of, row_range};

use crate::error::{Error, Result};
use std::ops::Range;

/// Flat address of one cell slot.
pub type LinearOffset = usize;

/// Immutable per-query snapshot of buffer dimensions.
///
/// # Invariants
///
/// - `total_rows > 0` and `columns > 0`
/// - `total_rows * columns` does not overflow
/// - `viewport_height <= total_rows`
///
/// `viewport_top` is a raw row index and may exceed `total_rows` until it
/// is reduced modulo the row count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferGeometry {
    total_rows: usize,
    columns: usize,
    viewport_top: usize,
    viewport_height: usize,
}

impl BufferGeometry {
    /// Validate and create a geometry snapshot.
    pub fn new(
        total_rows: usize,
        columns: usize,
        viewport_top: usize,
        viewport_height: usize,
    ) -> Result<Self> {
        let valid = total_rows > 0
            && columns > 0
            && viewport_height <= total_rows
            && total_rows.checked_mul(columns).is_some();
        if !valid {
            return Err(Error::InvalidGeometry {
                total_rows,
                columns,
                viewport_height,
            });
        }
        Ok(Self {
            total_rows,
            columns,
            viewport_top,
            viewport_height,
        })
    }

    /// Rows in the circular store, scrollback included.
    #[must_use]
    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Fixed row width.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// First visible row, before wraparound reduction.
    #[must_use]
    pub const fn viewport_top(&self) -> usize {
        self.viewport_top
    }

    /// Number of visible rows.
    #[must_use]
    pub const fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Size of the addressable offset space.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        // Checked in `new`.
        self.total_rows * self.columns
    }

    /// Canonical (wrapped) row index for a raw row.
    #[must_use]
    pub const fn canonical_row(&self, raw_row: usize) -> usize {
        raw_row % self.total_rows
    }

    /// Full-row offset range for a raw row, with wraparound.
    #[must_use]
    pub const fn row_range(&self, raw_row: usize) -> Range<LinearOffset> {
        let start = self.canonical_row(raw_row) * self.columns;
        start..start + self.columns
    }

    /// Canonical rows of the viewport, top to bottom.
    #[must_use]
    pub const fn viewport_rows(&self) -> ViewportRows {
        ViewportRows {
            next: self.viewport_top,
            remaining: self.viewport_height,
            total_rows: self.total_rows,
        }
    }
}

/// Iterator over the canonical row indices of a viewport.
#[derive(Clone, Debug)]
pub struct ViewportRows {
    next: usize,
    remaining: usize,
    total_rows: usize,
}

impl Iterator for ViewportRows {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let row = self.next % self.total_rows;
        self.next = row + 1;
        self.remaining -= 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ViewportRows {}
