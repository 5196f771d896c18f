//! Element properties reported to the automation client.

use crate::config::ProviderConfig;
use bitflags::bitflags;

/// Runtime-id marker asking the client to append the host window's own id.
pub const APPEND_RUNTIME_ID: i32 = 3;

bitflags! {
    /// How the provider is hosted, as reported to the automation client.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct ProviderOptions: u32 {
        const CLIENT_SIDE             = 0x01;
        const SERVER_SIDE             = 0x02;
        const NON_CLIENT_AREA         = 0x04;
        const OVERRIDE                = 0x08;
        const PROVIDER_OWNS_SET_FOCUS = 0x10;
        const USE_COM_THREADING       = 0x20;
    }
}

/// Automation control types this crate reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlType {
    /// A complex text surface supporting the text pattern.
    Document,
}

/// Properties the client may ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyId {
    ControlType,
    Name,
    AutomationId,
    ProviderDescription,
    IsControlElement,
    IsContentElement,
    IsKeyboardFocusable,
    HasKeyboardFocus,
    IsEnabled,
    HelpText,
    ClassName,
}

/// A property value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyValue {
    ControlType(ControlType),
    Text(String),
    Bool(bool),
}

/// Text selection modes the provider supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SupportedTextSelection {
    None,
    #[default]
    Single,
    Multiple,
}

/// Control patterns a client may ask the element for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternId {
    Text,
    Value,
    Scroll,
    Selection,
    Invoke,
}

/// Directions for walking the automation element tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigateDirection {
    Parent,
    NextSibling,
    PreviousSibling,
    FirstChild,
    LastChild,
}

/// Value for `id`, or `None` to leave the client's default in place.
#[must_use]
pub fn property_value(config: &ProviderConfig, id: PropertyId) -> Option<PropertyValue> {
    match id {
        PropertyId::ControlType => Some(PropertyValue::ControlType(ControlType::Document)),
        PropertyId::Name => Some(PropertyValue::Text(config.name.clone())),
        PropertyId::AutomationId => Some(PropertyValue::Text(config.automation_id.clone())),
        PropertyId::ProviderDescription => Some(PropertyValue::Text(config.description.clone())),
        PropertyId::IsControlElement
        | PropertyId::IsContentElement
        | PropertyId::IsKeyboardFocusable
        | PropertyId::HasKeyboardFocus
        | PropertyId::IsEnabled => Some(PropertyValue::Bool(true)),
        PropertyId::HelpText | PropertyId::ClassName => None,
    }
}
