//! The text provider exposed to an accessibility session.
//!
//! A [`Provider`] answers the session's range queries (selection, visible
//! rows, hit-test, whole document) and its element-property queries. Each
//! range query captures one [`QuerySnapshot`] from the collaborators, then
//! builds ranges through [`crate::range`].
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use buffer_a11y::buffer::BufferGeometry;
//! use buffer_a11y::provider::{
//!     BufferState, CellSize, Collaborators, FontMetrics, Provider, ScreenBuffer, Selection,
//!     SelectionRect,
//! };
//!
//! struct Host;
//!
//! impl ScreenBuffer for Host {
//!     fn state(&self) -> BufferState {
//!         BufferState {
//!             geometry: BufferGeometry::new(5, 10, 3, 4).unwrap(),
//!             rows_in_use: 5,
//!         }
//!     }
//! }
//!
//! impl Selection for Host {
//!     fn current(&self) -> Option<Vec<SelectionRect>> {
//!         None
//!     }
//! }
//!
//! impl FontMetrics for Host {
//!     fn cell_size(&self) -> CellSize {
//!         CellSize::new(8, 16)
//!     }
//! }
//!
//! let host = Arc::new(Host);
//! let provider = Provider::new(Collaborators::new(host.clone(), host.clone(), host));
//!
//! let spans: Vec<_> = provider
//!     .visible_ranges()?
//!     .iter()
//!     .map(|r| r.span())
//!     .collect();
//! assert_eq!(spans, vec![30..40, 40..50, 0..10, 10..20]);
//! assert_eq!(provider.document_range()?.span(), 0..50);
//! # Ok::<(), buffer_a11y::Error>(())
//! ```

pub mod collaborators;
pub mod lifetime;
pub mod properties;

#[cfg(test)]
pub(crate) mod test_support;

pub use collaborators::{
    BufferState, CellSize, Collaborators, FontMetrics, HostWindow, QuerySnapshot, ScreenBuffer,
    ScreenPoint, ScreenRect, Selection, SelectionRect,
};
pub use lifetime::{ProviderHandle, ProviderRef};
pub use properties::{
    APPEND_RUNTIME_ID, ControlType, NavigateDirection, PatternId, PropertyId, PropertyValue,
    ProviderOptions, SupportedTextSelection,
};

use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use crate::event::{AutomationEvent, raise_automation_event};
use crate::range::{self, RangeSelector, TextRange};
use std::sync::Arc;

/// One accessibility session's view of a screen buffer.
#[derive(Debug)]
pub struct Provider {
    handle: ProviderHandle,
}

impl Provider {
    /// Create a provider with default configuration.
    #[must_use]
    pub fn new(collaborators: Collaborators) -> Self {
        Self::with_config(collaborators, ProviderConfig::default())
    }

    /// Create a provider with custom configuration.
    #[must_use]
    pub fn with_config(collaborators: Collaborators, config: ProviderConfig) -> Self {
        Self {
            handle: ProviderHandle::new(collaborators, config),
        }
    }

    /// The owning handle ranges are built against.
    #[must_use]
    pub const fn handle(&self) -> &ProviderHandle {
        &self.handle
    }

    /// Take a shared reference to this provider.
    pub fn acquire(&self) -> Result<ProviderRef> {
        self.handle.acquire()
    }

    /// End the session's use of this provider.
    ///
    /// New queries fail with [`Error::Unavailable`]; ranges already handed
    /// out keep their reference until dropped.
    pub fn teardown(&self) {
        self.handle.teardown();
    }

    /// Whether the provider still accepts queries.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.handle.is_live()
    }

    /// Ranges currently holding a reference to this provider.
    #[must_use]
    pub fn outstanding_refs(&self) -> usize {
        self.handle.outstanding_refs()
    }

    /// Configuration fixed at creation.
    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.handle.state().config
    }

    fn ensure_live(&self) -> Result<()> {
        if self.handle.is_live() {
            Ok(())
        } else {
            Err(Error::Unavailable)
        }
    }

    /// Capture the collaborators' current values for one query.
    pub fn snapshot(&self) -> Result<QuerySnapshot> {
        self.ensure_live()?;
        Ok(self.handle.state().collaborators.snapshot())
    }

    // ============================================
    // Range queries
    // ============================================

    /// One full-row range per selected rectangle.
    ///
    /// Returns an empty vector when nothing is selected.
    pub fn selection_ranges(&self) -> Result<Vec<TextRange>> {
        let snapshot = self.snapshot()?;
        range::selection_ranges(&self.handle, &snapshot)
    }

    /// One full-row range per visible row, top to bottom.
    pub fn visible_ranges(&self) -> Result<Vec<TextRange>> {
        let snapshot = self.snapshot()?;
        range::visible_ranges(&self.handle, &snapshot)
    }

    /// Degenerate range at the visible cell under a screen point.
    pub fn range_from_point(&self, point: ScreenPoint) -> Result<TextRange> {
        self.make_range(RangeSelector::Point(point))
    }

    /// Range over every row in use.
    pub fn document_range(&self) -> Result<TextRange> {
        self.make_range(RangeSelector::Document)
    }

    /// Range for a child element.
    ///
    /// The text area has no children of its own, so every child resolves to
    /// the whole document.
    pub fn range_from_child(&self, _child_runtime_id: &[i32]) -> Result<TextRange> {
        self.document_range()
    }

    /// Build a single range against a fresh snapshot.
    pub fn make_range(&self, selector: RangeSelector) -> Result<TextRange> {
        let snapshot = self.snapshot()?;
        range::make_range(&self.handle, &snapshot, selector)
    }

    /// Build several ranges against one fresh snapshot, all or nothing.
    pub fn make_ranges<I>(&self, selectors: I) -> Result<Vec<TextRange>>
    where
        I: IntoIterator<Item = RangeSelector>,
        I::IntoIter: ExactSizeIterator,
    {
        let snapshot = self.snapshot()?;
        range::make_ranges(&self.handle, &snapshot, selectors)
    }

    // ============================================
    // Element properties
    // ============================================

    /// Hosting flags; the provider always runs server side.
    pub fn provider_options(&self) -> Result<ProviderOptions> {
        self.ensure_live()?;
        Ok(ProviderOptions::SERVER_SIDE)
    }

    /// Value of an element property, `None` to keep the client default.
    pub fn property_value(&self, id: PropertyId) -> Result<Option<PropertyValue>> {
        self.ensure_live()?;
        Ok(properties::property_value(self.config(), id))
    }

    /// Selection mode offered to the client: one contiguous selection.
    pub fn supported_text_selection(&self) -> Result<SupportedTextSelection> {
        self.ensure_live()?;
        Ok(SupportedTextSelection::Single)
    }

    /// Runtime id; the client appends the host window's id.
    pub fn runtime_id(&self) -> Result<[i32; 2]> {
        self.ensure_live()?;
        Ok([APPEND_RUNTIME_ID, -1])
    }

    /// Screen bounds of the hosting window.
    pub fn bounding_rectangle(&self) -> Result<ScreenRect> {
        self.ensure_live()?;
        self.handle
            .state()
            .collaborators
            .window
            .as_ref()
            .map(|window| window.rect())
            .ok_or(Error::Unavailable)
    }

    /// The provider implementing `pattern`, if any.
    ///
    /// Only the text pattern is supported, and the provider serves it itself.
    pub fn pattern_provider(&self, pattern: PatternId) -> Result<Option<&Self>> {
        self.ensure_live()?;
        Ok((pattern == PatternId::Text).then_some(self))
    }

    /// Neighbouring element in `direction`.
    ///
    /// The text area is a leaf whose parent is the host window; it has no
    /// siblings or children.
    pub fn navigate(&self, direction: NavigateDirection) -> Result<Option<Arc<dyn HostWindow>>> {
        self.ensure_live()?;
        match direction {
            NavigateDirection::Parent => Ok(self.host_window()),
            NavigateDirection::NextSibling
            | NavigateDirection::PreviousSibling
            | NavigateDirection::FirstChild
            | NavigateDirection::LastChild => Ok(None),
        }
    }

    /// Root of the fragment tree: the host window.
    pub fn fragment_root(&self) -> Result<Option<Arc<dyn HostWindow>>> {
        self.ensure_live()?;
        Ok(self.host_window())
    }

    /// Fragment roots embedded in this element. The text area embeds none.
    pub fn embedded_fragment_roots(&self) -> Result<Vec<Arc<dyn HostWindow>>> {
        self.ensure_live()?;
        Ok(Vec::new())
    }

    fn host_window(&self) -> Option<Arc<dyn HostWindow>> {
        self.handle.state().collaborators.window.clone()
    }

    /// Raise a focus-changed automation event for this element.
    pub fn set_focus(&self) -> Result<()> {
        let runtime_id = self.runtime_id()?;
        raise_automation_event(AutomationEvent::FocusChanged, &runtime_id);
        Ok(())
    }
}
