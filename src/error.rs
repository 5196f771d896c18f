//! Error types for buffer range construction.

use std::fmt;

/// Result type alias for buffer_a11y operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for provider queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The owning provider has been torn down (or never initialized).
    ///
    /// Not retryable: the accessibility session should be treated as ended.
    Unavailable,
    /// An aggregate could not reserve storage for its ranges.
    OutOfResources { requested: usize },
    /// A single range failed after its provider reference was acquired.
    Construction(ConstructionError),
    /// Buffer geometry rejected (zero rows or columns, oversized viewport).
    InvalidGeometry {
        total_rows: usize,
        columns: usize,
        viewport_height: usize,
    },
}

/// Why an individual range could not be built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstructionError {
    /// Explicit offsets with `start > end`.
    ReversedOffsets { start: usize, end: usize },
    /// An endpoint past the addressable space.
    OffsetOutOfBounds { offset: usize, limit: usize },
    /// A buffer row that does not exist (buffer rows do not wrap).
    RowOutOfBounds { row: usize, total_rows: usize },
    /// Cell size from font metrics cannot quantize a point.
    InvalidCellSize { width: u32, height: u32 },
    /// A hit-test against a viewport with no visible rows.
    EmptyViewport,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "provider unavailable"),
            Self::OutOfResources { requested } => {
                write!(f, "out of resources allocating {requested} ranges")
            }
            Self::Construction(e) => write!(f, "range construction failed: {e}"),
            Self::InvalidGeometry {
                total_rows,
                columns,
                viewport_height,
            } => write!(
                f,
                "invalid geometry: {total_rows} rows x {columns} columns, viewport height {viewport_height}"
            ),
        }
    }
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReversedOffsets { start, end } => {
                write!(f, "start {start} is after end {end}")
            }
            Self::OffsetOutOfBounds { offset, limit } => {
                write!(f, "offset {offset} out of bounds (limit {limit})")
            }
            Self::RowOutOfBounds { row, total_rows } => {
                write!(f, "row {row} out of bounds for {total_rows} rows")
            }
            Self::InvalidCellSize { width, height } => {
                write!(f, "invalid cell size {width}x{height}")
            }
            Self::EmptyViewport => write!(f, "viewport has no visible rows"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Construction(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for ConstructionError {}

impl From<ConstructionError> for Error {
    fn from(e: ConstructionError) -> Self {
        Self::Construction(e)
    }
}
