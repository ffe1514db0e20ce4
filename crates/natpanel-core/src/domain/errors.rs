//! Field identifiers and validation errors.
//!
//! Validation never stops at the first problem.  Every failed check records a
//! [`ValidationError`] against the [`Field`] it concerns, and the resulting
//! [`FieldErrors`] map is handed back to the caller so each message can be
//! shown next to its input.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A form field of the network configuration.
///
/// Serialized in `snake_case`, which is also the key used in JSON error maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    NetworkName,
    BridgeName,
    Cidr,
    HostIp,
    DhcpStart,
    DhcpEnd,
    Interface,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 7] = [
        Field::NetworkName,
        Field::BridgeName,
        Field::Cidr,
        Field::HostIp,
        Field::DhcpStart,
        Field::DhcpEnd,
        Field::Interface,
    ];

    /// Returns the `snake_case` field key.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::NetworkName => "network_name",
            Field::BridgeName => "bridge_name",
            Field::Cidr => "cidr",
            Field::HostIp => "host_ip",
            Field::DhcpStart => "dhcp_start",
            Field::DhcpEnd => "dhcp_end",
            Field::Interface => "interface",
        }
    }

    /// Returns the human-readable form label.
    pub fn label(self) -> &'static str {
        match self {
            Field::NetworkName => "Network name",
            Field::BridgeName => "Bridge name",
            Field::Cidr => "Network CIDR",
            Field::HostIp => "Host assigned IP in new network",
            Field::DhcpStart => "DHCP starting IP",
            Field::DhcpEnd => "DHCP ending IP",
            Field::Interface => "Gateway interface",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level validation failure.
///
/// The `Display` text is the message shown to the administrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field was empty after trimming whitespace.
    #[error("This field is required.")]
    Required,

    /// The field exceeds the maximum accepted length.
    #[error("Ensure this value has at most {max} characters (it has {length}).")]
    TooLong { max: usize, length: usize },

    /// The interface selector is not an integer, or not a live interface index.
    #[error("Interface does not seem to exist in the OS.")]
    InvalidInterface,

    /// The CIDR text does not parse as an IP network.
    #[error("This is not a valid IP network range.")]
    InvalidNetworkFormat,

    /// The text does not parse as an IP address.
    #[error("This is not a valid IP address.")]
    InvalidAddressFormat,

    /// A DHCP bound lies outside the configured network.
    #[error("This IP does not belong to given network.")]
    AddressOutOfNetwork,

    /// The DHCP end is not strictly after the DHCP start.
    #[error("This IP cannot be below the starting one.")]
    InvalidRangeOrder,

    /// A DHCP bound equals the network, broadcast, or host address.
    #[error(
        "This IP cannot be a network or broadcast address of the network \
         as well as host assigned IP."
    )]
    ReservedAddressConflict,
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Every validation failure of one call, grouped by field.
///
/// A field present in the map always carries at least one error.  Fields are
/// kept in form order, so iteration and JSON output are deterministic.
///
/// Serializes as `{"cidr": ["This is not a valid IP network range."], ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<Field, Vec<ValidationError>>,
}

impl FieldErrors {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` against `field`.
    pub fn add(&mut self, field: Field, error: ValidationError) {
        self.errors.entry(field).or_default().push(error);
    }

    /// Returns `true` if no error has been recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields carrying at least one error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the errors recorded for `field` (empty if none).
    pub fn get(&self, field: Field) -> &[ValidationError] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if `field` carries `error`.
    pub fn contains(&self, field: Field, error: &ValidationError) -> bool {
        self.get(field).contains(error)
    }

    /// Returns `true` if `field` carries any error.
    pub fn has_errors(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Iterates over the fields carrying errors, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Iterates over `(field, errors)` pairs, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[ValidationError])> {
        self.errors.iter().map(|(f, e)| (*f, e.as_slice()))
    }

    /// Returns the user-visible messages recorded for `field`.
    pub fn messages(&self, field: Field) -> Vec<String> {
        self.get(field).iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid network configuration:")?;
        for (field, errors) in self.iter() {
            for error in errors {
                write!(f, " {field}: {error}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_errors_is_empty() {
        let errors = FieldErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert!(errors.get(Field::Cidr).is_empty());
    }

    #[test]
    fn test_add_groups_multiple_errors_under_one_field() {
        // Arrange
        let mut errors = FieldErrors::new();

        // Act
        errors.add(Field::DhcpStart, ValidationError::AddressOutOfNetwork);
        errors.add(Field::DhcpStart, ValidationError::ReservedAddressConflict);

        // Assert
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::DhcpStart).len(), 2);
        assert!(errors.contains(Field::DhcpStart, &ValidationError::ReservedAddressConflict));
    }

    #[test]
    fn test_fields_iterate_in_form_order() {
        let mut errors = FieldErrors::new();
        errors.add(Field::Interface, ValidationError::InvalidInterface);
        errors.add(Field::Cidr, ValidationError::InvalidNetworkFormat);
        errors.add(Field::DhcpEnd, ValidationError::InvalidRangeOrder);

        let order: Vec<Field> = errors.fields().collect();

        assert_eq!(order, vec![Field::Cidr, Field::DhcpEnd, Field::Interface]);
    }

    #[test]
    fn test_validation_error_messages_match_form_text() {
        assert_eq!(
            ValidationError::InvalidInterface.to_string(),
            "Interface does not seem to exist in the OS."
        );
        assert_eq!(
            ValidationError::ReservedAddressConflict.to_string(),
            "This IP cannot be a network or broadcast address of the network as well as host assigned IP."
        );
        assert_eq!(
            ValidationError::TooLong { max: 255, length: 300 }.to_string(),
            "Ensure this value has at most 255 characters (it has 300)."
        );
    }

    #[test]
    fn test_field_errors_serialize_as_message_map() {
        // Arrange
        let mut errors = FieldErrors::new();
        errors.add(Field::HostIp, ValidationError::InvalidAddressFormat);

        // Act
        let json = serde_json::to_value(&errors).expect("serialize");

        // Assert
        assert_eq!(
            json,
            serde_json::json!({ "host_ip": ["This is not a valid IP address."] })
        );
    }

    #[test]
    fn test_display_lists_every_field() {
        let mut errors = FieldErrors::new();
        errors.add(Field::Cidr, ValidationError::InvalidNetworkFormat);
        errors.add(Field::Interface, ValidationError::InvalidInterface);

        let text = errors.to_string();

        assert!(text.contains("cidr: This is not a valid IP network range."));
        assert!(text.contains("interface: Interface does not seem to exist in the OS."));
    }

    #[test]
    fn test_field_keys_are_snake_case() {
        for field in Field::ALL {
            let json = serde_json::to_value(field).expect("serialize");
            assert_eq!(json, serde_json::Value::String(field.as_str().to_string()));
        }
    }
}
