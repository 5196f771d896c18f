//! Contracts for the host objects a provider reads from.
//!
//! Each query captures one [`QuerySnapshot`] up front and works from it, so
//! a concurrent buffer mutation can never tear a single query. Buffer state
//! and selection come from one [`ScreenBuffer::state_with_selection`] call;
//! making that call atomic is up to the host.

use crate::buffer::BufferGeometry;
use std::sync::Arc;

/// Dimensions and usage of the screen buffer at one moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferState {
    pub geometry: BufferGeometry,
    /// Logical rows in use (less than `total_rows` before scrollback fills).
    pub rows_in_use: usize,
}

/// One selected rectangle: a row and an inclusive column span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionRect {
    pub top: usize,
    pub left: usize,
    pub right: usize,
}

impl SelectionRect {
    #[must_use]
    pub const fn new(top: usize, left: usize, right: usize) -> Self {
        Self { top, left, right }
    }
}

/// Size of one character cell in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A point in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// Source of buffer dimensions.
pub trait ScreenBuffer: Send + Sync {
    /// Current geometry and rows in use, read together.
    fn state(&self) -> BufferState;

    /// Buffer state and selection captured at one moment.
    ///
    /// The default makes two separate reads, so a mutation landing between
    /// them can pair selection rows with another geometry. Hosts that keep
    /// the selection under the same lock as the buffer should override this
    /// and answer from their own state.
    fn state_with_selection(
        &self,
        selection: &dyn Selection,
    ) -> (BufferState, Option<Vec<SelectionRect>>) {
        (self.state(), selection.current())
    }
}

/// Source of the current selection.
pub trait Selection: Send + Sync {
    /// Selected rectangles top to bottom, or `None` with no active selection.
    fn current(&self) -> Option<Vec<SelectionRect>>;
}

/// Source of the cell size used for hit-testing.
pub trait FontMetrics: Send + Sync {
    fn cell_size(&self) -> CellSize;
}

/// The window hosting the buffer.
pub trait HostWindow: Send + Sync {
    /// Window bounds on screen.
    fn rect(&self) -> ScreenRect;
    /// Screen position of the buffer's first visible cell.
    fn client_origin(&self) -> ScreenPoint;
}

/// Everything a provider reads from its host.
#[derive(Clone)]
pub struct Collaborators {
    pub buffer: Arc<dyn ScreenBuffer>,
    pub selection: Arc<dyn Selection>,
    pub metrics: Arc<dyn FontMetrics>,
    pub window: Option<Arc<dyn HostWindow>>,
}

impl Collaborators {
    #[must_use]
    pub fn new(
        buffer: Arc<dyn ScreenBuffer>,
        selection: Arc<dyn Selection>,
        metrics: Arc<dyn FontMetrics>,
    ) -> Self {
        Self {
            buffer,
            selection,
            metrics,
            window: None,
        }
    }

    /// Attach a host window for bounds and hit-test origin.
    #[must_use]
    pub fn with_window(mut self, window: Arc<dyn HostWindow>) -> Self {
        self.window = Some(window);
        self
    }

    /// Capture every collaborator value a query may need.
    #[must_use]
    pub fn snapshot(&self) -> QuerySnapshot {
        let (state, selection) = self.buffer.state_with_selection(self.selection.as_ref());
        QuerySnapshot {
            geometry: state.geometry,
            rows_in_use: state.rows_in_use,
            selection,
            cell_size: self.metrics.cell_size(),
            client_origin: self
                .window
                .as_ref()
                .map_or_else(ScreenPoint::default, |w| w.client_origin()),
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("has_window", &self.window.is_some())
            .finish_non_exhaustive()
    }
}

/// Values captured once at the start of a query.
#[derive(Clone, Debug, PartialEq)]
pub struct QuerySnapshot {
    pub geometry: BufferGeometry,
    pub rows_in_use: usize,
    pub selection: Option<Vec<SelectionRect>>,
    pub cell_size: CellSize,
    pub client_origin: ScreenPoint,
}

impl QuerySnapshot {
    /// Snapshot with no selection, a 1x1 cell and origin at zero.
    #[must_use]
    pub const fn from_geometry(geometry: BufferGeometry, rows_in_use: usize) -> Self {
        Self {
            geometry,
            rows_in_use,
            selection: None,
            cell_size: CellSize::new(1, 1),
            client_origin: ScreenPoint::new(0.0, 0.0),
        }
    }
}
