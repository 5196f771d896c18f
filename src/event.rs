//! Log and automation-event callbacks.
//!
//! The core never owns a logger or an event pump. Hosts register callbacks
//! here and receive provider lifecycle messages and automation events
//! (currently only focus changes) as plain strings.

use std::sync::{Mutex, OnceLock};

/// Log level for lifecycle messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Automation events a provider can raise toward the accessibility client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutomationEvent {
    /// Keyboard focus moved onto the text area.
    FocusChanged,
}

impl AutomationEvent {
    /// Event name as passed to the event callback.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FocusChanged => "automation_focus_changed",
        }
    }
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback, replacing any previous one.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = event_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global event callback.
pub fn clear_event_callback() {
    if let Ok(mut guard) = event_callback().lock() {
        *guard = None;
    }
}

/// Emit a named event with a data payload.
pub fn emit_event(name: &str, data: &str) {
    if let Ok(guard) = event_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(name, data);
        }
    }
}

/// Raise an automation event for the element identified by `runtime_id`.
pub fn raise_automation_event(event: AutomationEvent, runtime_id: &[i32]) {
    let data = runtime_id
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    emit_event(event.name(), &format!("[{data}]"));
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

// Callbacks are process-global; tests that swap them take this lock.
#[cfg(test)]
pub(crate) static CALLBACK_TEST_LOCK: Mutex<()> = Mutex::new(());

/// Emit a log message.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}
