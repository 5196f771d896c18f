//! Text ranges and the single-range factory.
//!
//! A [`TextRange`] is a half-open span of linear offsets plus a counted
//! reference to the provider that built it. Offsets are coordinates, not
//! cached text: if the buffer changes after construction, the same range
//! addresses whatever now occupies those cells.
//!
//! Every range is built through [`make_range`], which acquires the provider
//! reference first and only then resolves the selector. A selector that fails
//! to resolve drops the reference on the way out, so a failed construction
//! never leaves the provider's count raised.

mod aggregate;

pub use aggregate::{make_ranges, selection_ranges, visible_ranges};

use crate::buffer::{LinearOffset, document_range, offset_of};
use crate::config::PointQuantization;
use crate::error::{ConstructionError, Result};
use crate::provider::collaborators::{QuerySnapshot, ScreenPoint};
use crate::provider::lifetime::{ProviderHandle, ProviderRef};
use std::ops::Range;

/// What a single range should cover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeSelector {
    /// Explicit `[start, end)` offsets.
    Offsets { start: LinearOffset, end: LinearOffset },
    /// A full buffer row. Rows past the store are rejected, not wrapped.
    Row(usize),
    /// A full row counted from the raw viewport origin; wraps around the store.
    ViewportRow(usize),
    /// The cell under a screen point, as a degenerate range.
    Point(ScreenPoint),
    /// Every row in use.
    Document,
}

/// A span of the buffer handed to the automation client.
#[derive(Clone, Debug)]
pub struct TextRange {
    start: LinearOffset,
    end: LinearOffset,
    owner: ProviderRef,
}

impl TextRange {
    #[must_use]
    pub const fn start(&self) -> LinearOffset {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> LinearOffset {
        self.end
    }

    /// The range as `start..end`.
    #[must_use]
    pub const fn span(&self) -> Range<LinearOffset> {
        self.start..self.end
    }

    /// Number of cell slots covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range is degenerate (`start == end`).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` lies inside the range.
    #[must_use]
    pub const fn contains(&self, offset: LinearOffset) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The provider this range keeps alive.
    #[must_use]
    pub const fn provider(&self) -> &ProviderRef {
        &self.owner
    }
}

/// Build one range, acquiring a provider reference for it.
pub fn make_range(
    owner: &ProviderHandle,
    snapshot: &QuerySnapshot,
    selector: RangeSelector,
) -> Result<TextRange> {
    let provider = owner.acquire()?;
    let span = resolve_span(snapshot, selector, provider.config().quantization)?;
    Ok(TextRange {
        start: span.start,
        end: span.end,
        owner: provider,
    })
}

/// Offsets a selector covers against one snapshot.
pub fn resolve_span(
    snapshot: &QuerySnapshot,
    selector: RangeSelector,
    quantization: PointQuantization,
) -> std::result::Result<Range<LinearOffset>, ConstructionError> {
    let geometry = &snapshot.geometry;
    match selector {
        RangeSelector::Offsets { start, end } => {
            if start > end {
                return Err(ConstructionError::ReversedOffsets { start, end });
            }
            if end > geometry.capacity() {
                return Err(ConstructionError::OffsetOutOfBounds {
                    offset: end,
                    limit: geometry.capacity(),
                });
            }
            Ok(start..end)
        }
        RangeSelector::Row(row) => {
            if row >= geometry.total_rows() {
                return Err(ConstructionError::RowOutOfBounds {
                    row,
                    total_rows: geometry.total_rows(),
                });
            }
            Ok(geometry.row_range(row))
        }
        RangeSelector::ViewportRow(raw_row) => Ok(geometry.row_range(raw_row)),
        RangeSelector::Point(point) => {
            let offset = point_offset(snapshot, point, quantization)?;
            Ok(offset..offset)
        }
        RangeSelector::Document => Ok(document_range(geometry, snapshot.rows_in_use)),
    }
}

/// Offset of the visible cell under `point`, clamped into the viewport.
fn point_offset(
    snapshot: &QuerySnapshot,
    point: ScreenPoint,
    quantization: PointQuantization,
) -> std::result::Result<LinearOffset, ConstructionError> {
    let cell = snapshot.cell_size;
    if cell.width == 0 || cell.height == 0 {
        return Err(ConstructionError::InvalidCellSize {
            width: cell.width,
            height: cell.height,
        });
    }
    let geometry = &snapshot.geometry;
    if geometry.viewport_height() == 0 {
        return Err(ConstructionError::EmptyViewport);
    }
    let origin = snapshot.client_origin;

    let column = quantization
        .apply((point.x - origin.x) / f64::from(cell.width))
        .min(geometry.columns() - 1);
    let visible_row = quantization
        .apply((point.y - origin.y) / f64::from(cell.height))
        .min(geometry.viewport_height() - 1);

    // top + visible_row can exceed usize::MAX when total_rows is huge, so
    // wrap by comparing against the rows left below the top instead.
    let top = geometry.canonical_row(geometry.viewport_top());
    let rows_below_top = geometry.total_rows() - top;
    let row = if visible_row >= rows_below_top {
        visible_row - rows_below_top
    } else {
        top + visible_row
    };

    offset_of(geometry, row, column).ok_or_else(|| ConstructionError::OffsetOutOfBounds {
        offset: row.saturating_mul(geometry.columns()).saturating_add(column),
        limit: geometry.capacity(),
    })
}
