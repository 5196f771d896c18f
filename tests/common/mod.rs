//! Shared test infrastructure: a mutable mock host and logging setup.

#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use buffer_a11y::buffer::BufferGeometry;
use buffer_a11y::provider::{
    BufferState, CellSize, Collaborators, FontMetrics, HostWindow, ScreenBuffer, ScreenPoint,
    ScreenRect, Selection, SelectionRect,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// A host whose buffer, selection and font can be changed mid-test,
/// e.g. from a thread standing in for the renderer.
pub struct MockHost {
    // Buffer state and selection share one lock, like a real console.
    screen: Mutex<Screen>,
    cell: Mutex<CellSize>,
    origin: ScreenPoint,
    state_reads: AtomicUsize,
}

struct Screen {
    state: BufferState,
    selection: Option<Vec<SelectionRect>>,
}

impl MockHost {
    pub fn new(
        total_rows: usize,
        columns: usize,
        viewport_top: usize,
        viewport_height: usize,
    ) -> Arc<Self> {
        Arc::new(Self {
            screen: Mutex::new(Screen {
                state: BufferState {
                    geometry: BufferGeometry::new(
                        total_rows,
                        columns,
                        viewport_top,
                        viewport_height,
                    )
                    .expect("valid test geometry"),
                    rows_in_use: total_rows,
                },
                selection: None,
            }),
            cell: Mutex::new(CellSize::new(8, 16)),
            origin: ScreenPoint::new(0.0, 0.0),
            state_reads: AtomicUsize::new(0),
        })
    }

    pub fn set_geometry(&self, geometry: BufferGeometry) {
        self.screen.lock().unwrap().state.geometry = geometry;
    }

    pub fn set_rows_in_use(&self, rows: usize) {
        self.screen.lock().unwrap().state.rows_in_use = rows;
    }

    pub fn select(&self, rects: Vec<SelectionRect>) {
        self.screen.lock().unwrap().selection = Some(rects);
    }

    pub fn clear_selection(&self) {
        self.screen.lock().unwrap().selection = None;
    }

    /// Replace geometry and selection in one step.
    pub fn resize_with_selection(&self, geometry: BufferGeometry, rects: Vec<SelectionRect>) {
        let mut screen = self.screen.lock().unwrap();
        screen.state = BufferState {
            geometry,
            rows_in_use: geometry.total_rows(),
        };
        screen.selection = Some(rects);
    }

    pub fn set_cell_size(&self, cell: CellSize) {
        *self.cell.lock().unwrap() = cell;
    }

    pub fn state_reads(&self) -> usize {
        self.state_reads.load(Ordering::SeqCst)
    }

    pub fn collaborators(self: &Arc<Self>) -> Collaborators {
        Collaborators::new(self.clone(), self.clone(), self.clone()).with_window(self.clone())
    }
}

impl ScreenBuffer for MockHost {
    fn state(&self) -> BufferState {
        self.state_reads.fetch_add(1, Ordering::SeqCst);
        self.screen.lock().unwrap().state
    }

    fn state_with_selection(
        &self,
        _selection: &dyn Selection,
    ) -> (BufferState, Option<Vec<SelectionRect>>) {
        self.state_reads.fetch_add(1, Ordering::SeqCst);
        let screen = self.screen.lock().unwrap();
        (screen.state, screen.selection.clone())
    }
}

impl Selection for MockHost {
    fn current(&self) -> Option<Vec<SelectionRect>> {
        self.screen.lock().unwrap().selection.clone()
    }
}

impl FontMetrics for MockHost {
    fn cell_size(&self) -> CellSize {
        *self.cell.lock().unwrap()
    }
}

impl HostWindow for MockHost {
    fn rect(&self) -> ScreenRect {
        ScreenRect {
            left: 0,
            top: 0,
            width: 800,
            height: 600,
        }
    }

    fn client_origin(&self) -> ScreenPoint {
        self.origin
    }
}
