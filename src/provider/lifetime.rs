//! Shared ownership between a provider and the ranges it hands out.
//!
//! The hosting session owns the [`Provider`](crate::provider::Provider), which
//! wraps a [`ProviderHandle`]. Every range owns a
//! [`ProviderRef`], an `Arc` clone of the same state. Teardown flips the
//! provider to unavailable so new acquisitions fail, but the state itself is
//! released only when the session and every outstanding range have let go.
//!
//! # Invariants
//!
//! - `acquire` and `teardown` are serialized by one `RwLock`: an acquisition
//!   either completes before teardown or fails with `Unavailable`.
//! - A `ProviderRef` is never invalidated by teardown.

use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::provider::collaborators::Collaborators;
use std::sync::{Arc, PoisonError, RwLock};

/// State shared by a provider and all of its references.
#[derive(Debug)]
pub(crate) struct SharedState {
    live: RwLock<bool>,
    pub(crate) collaborators: Collaborators,
    pub(crate) config: ProviderConfig,
}

impl Drop for SharedState {
    fn drop(&mut self) {
        emit_log(LogLevel::Debug, "provider state released");
    }
}

/// Owning handle held by the accessibility session.
#[derive(Debug)]
pub struct ProviderHandle {
    shared: Arc<SharedState>,
}

impl ProviderHandle {
    pub(crate) fn new(collaborators: Collaborators, config: ProviderConfig) -> Self {
        emit_log(LogLevel::Debug, "provider created");
        Self {
            shared: Arc::new(SharedState {
                live: RwLock::new(true),
                collaborators,
                config,
            }),
        }
    }

    /// Take a new shared reference, or fail once torn down.
    pub fn acquire(&self) -> Result<ProviderRef> {
        let live = self.shared.live.read().unwrap_or_else(PoisonError::into_inner);
        if !*live {
            return Err(Error::Unavailable);
        }
        Ok(ProviderRef {
            shared: Arc::clone(&self.shared),
        })
    }

    /// Mark the provider unavailable. Outstanding references stay valid.
    ///
    /// Blocks only while an `acquire` is in flight.
    pub fn teardown(&self) {
        let mut live = self.shared.live.write().unwrap_or_else(PoisonError::into_inner);
        if *live {
            *live = false;
            emit_log(LogLevel::Debug, "provider teardown requested");
        }
    }

    /// Whether new references can still be acquired.
    #[must_use]
    pub fn is_live(&self) -> bool {
        *self.shared.live.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of references held outside this handle.
    #[must_use]
    pub fn outstanding_refs(&self) -> usize {
        Arc::strong_count(&self.shared) - 1
    }

    pub(crate) fn state(&self) -> &SharedState {
        &self.shared
    }
}

impl Drop for ProviderHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// A counted reference to a provider, held by each range.
#[derive(Clone, Debug)]
pub struct ProviderRef {
    shared: Arc<SharedState>,
}

impl ProviderRef {
    /// Whether the owning provider still accepts new acquisitions.
    #[must_use]
    pub fn is_live(&self) -> bool {
        *self.shared.live.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Configuration of the owning provider.
    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.shared.config
    }

    /// Whether this reference points at the provider behind `handle`.
    #[must_use]
    pub fn belongs_to(&self, handle: &ProviderHandle) -> bool {
        Arc::ptr_eq(&self.shared, &handle.shared)
    }

    /// Whether two references share one provider.
    #[must_use]
    pub fn same_provider(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}
