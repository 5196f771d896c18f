//! Fixed collaborators for unit tests.

use crate::buffer::BufferGeometry;
use crate::config::ProviderConfig;
use crate::provider::collaborators::{
    BufferState, CellSize, Collaborators, FontMetrics, ScreenBuffer, Selection, SelectionRect,
};
use crate::provider::lifetime::ProviderHandle;
use std::sync::Arc;

/// A 5x10 buffer with the viewport at rows 3..7 and no selection.
pub(crate) struct Fixed;

impl ScreenBuffer for Fixed {
    fn state(&self) -> BufferState {
        BufferState {
            geometry: BufferGeometry::new(5, 10, 3, 4).unwrap(),
            rows_in_use: 5,
        }
    }
}

impl Selection for Fixed {
    fn current(&self) -> Option<Vec<SelectionRect>> {
        None
    }
}

impl FontMetrics for Fixed {
    fn cell_size(&self) -> CellSize {
        CellSize::new(8, 16)
    }
}

pub(crate) fn fixed_collaborators() -> Collaborators {
    let fixed = Arc::new(Fixed);
    Collaborators::new(fixed.clone(), fixed.clone(), fixed)
}

pub(crate) fn fixed_handle() -> ProviderHandle {
    fixed_handle_with_config(ProviderConfig::default())
}

pub(crate) fn fixed_handle_with_config(config: ProviderConfig) -> ProviderHandle {
    ProviderHandle::new(fixed_collaborators(), config)
}
