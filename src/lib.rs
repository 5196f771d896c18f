//! `buffer_a11y` - text ranges over a wraparound terminal line buffer
//!
//! Lets an accessibility client enumerate, select and hit-test text in a
//! fixed-height circular screen buffer without seeing how rows are stored.
//! Positions are flat linear offsets (`row * columns + column`), ranges are
//! half-open offset spans, and every range keeps its provider alive through
//! a counted shared reference.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Pixel math on cell coordinates
#![allow(clippy::module_name_repetitions)] // Allow provider::ProviderRef etc
#![allow(clippy::missing_errors_doc)] // Error variants are documented on the enum
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Query methods return Result already
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod provider;
pub mod range;
pub mod unicode;

// Re-export core types at crate root
pub use buffer::{BufferGeometry, LinearOffset};
pub use config::{PointQuantization, ProviderConfig};
pub use error::{ConstructionError, Error, Result};
pub use event::{
    AutomationEvent, LogLevel, emit_event, emit_log, set_event_callback, set_log_callback,
};
pub use provider::{Collaborators, Provider, ProviderRef};
pub use range::{RangeSelector, TextRange};
pub use unicode::{CodepointGroup, segment};
