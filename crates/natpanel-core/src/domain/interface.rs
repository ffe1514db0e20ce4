//! Host interface records and the gateway-interface choice list.
//!
//! The OS assigns every network interface a positive index.  The form offers
//! one choice per live interface plus a trailing "none selected" entry which
//! is also the initial selection, so the administrator has to pick one
//! explicitly.

use serde::Serialize;

/// Submitted value of the "none selected" choice.  Never parses as an index.
pub const NONE_SELECTED_VALUE: &str = "none";

/// Label of the "none selected" choice.
pub const NONE_SELECTED_LABEL: &str = "Select..";

/// A network interface reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceInfo {
    /// OS-assigned interface index (1-based).
    pub index: u32,
    /// Interface name, e.g. `eth0`.
    pub name: String,
}

/// One `(value, label)` entry of the gateway-interface selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceChoice {
    /// Text submitted back to the validator.
    pub value: String,
    /// Text shown to the administrator.
    pub label: String,
}

impl InterfaceChoice {
    /// The trailing "none selected" choice.
    pub fn none_selected() -> Self {
        Self {
            value: NONE_SELECTED_VALUE.to_string(),
            label: NONE_SELECTED_LABEL.to_string(),
        }
    }

    /// Returns `true` for the "none selected" choice.
    pub fn is_none_selected(&self) -> bool {
        self.value == NONE_SELECTED_VALUE
    }
}

impl From<&InterfaceInfo> for InterfaceChoice {
    fn from(info: &InterfaceInfo) -> Self {
        Self {
            value: info.index.to_string(),
            label: info.name.clone(),
        }
    }
}

/// Builds the selector choices: one per interface in enumeration order,
/// followed by the "none selected" choice.
pub fn interface_choices(interfaces: &[InterfaceInfo]) -> Vec<InterfaceChoice> {
    interfaces
        .iter()
        .map(InterfaceChoice::from)
        .chain(std::iter::once(InterfaceChoice::none_selected()))
        .collect()
}
