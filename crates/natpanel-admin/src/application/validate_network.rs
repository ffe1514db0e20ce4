//! ValidateNetworkUseCase: checks a submitted network against the live host.
//!
//! The domain validator in `natpanel-core` only needs to know how many
//! interfaces the host has.  This use case obtains that number from an
//! [`InterfaceEnumerator`] (the OS adapter lives in
//! `infrastructure::interfaces`) and then runs the validator.
//!
//! # Freshness
//!
//! [`validate_network`] enumerates exactly once per call and keeps nothing
//! between calls.  An interface unplugged after the previous submission is
//! gone for the next one.
//!
//! # Two kinds of failure
//!
//! - [`ValidateNetworkError::Invalid`] – the administrator's input is wrong.
//!   Every problem is listed per field so the form can show them all at once.
//! - [`ValidateNetworkError::Enumeration`] – the host could not be queried.
//!   This is a system fault, not a form error; no field is to blame.

use natpanel_core::{
    validate_network as validate_candidate, CandidateNetworkConfig, FieldErrors, InterfaceInfo,
    ValidatedNetworkConfig,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error type for interface enumeration.
#[derive(Debug, Error)]
pub enum InterfaceError {
    /// The platform API call to enumerate interfaces failed.
    ///
    /// The inner string is a human-readable description of the OS error.
    #[error("platform API error while enumerating interfaces: {0}")]
    Platform(String),
}

/// Port for listing the host's network interfaces.
///
/// Implementations must query the OS on every call; the result is never
/// cached by callers either.
#[cfg_attr(test, mockall::automock)]
pub trait InterfaceEnumerator: Send + Sync {
    /// Returns the interfaces currently present on the host, in OS order.
    ///
    /// # Errors
    ///
    /// Returns [`InterfaceError::Platform`] if the OS query fails.
    fn enumerate_interfaces(&self) -> Result<Vec<InterfaceInfo>, InterfaceError>;
}

/// Error type for the validate use case.
#[derive(Debug, Error)]
pub enum ValidateNetworkError {
    /// One or more fields failed validation.
    #[error("{0}")]
    Invalid(FieldErrors),

    /// The interface list could not be obtained.
    #[error("interface enumeration failed: {0}")]
    Enumeration(#[from] InterfaceError),
}

impl ValidateNetworkError {
    /// Returns the field errors when the input itself was rejected.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidateNetworkError::Invalid(errors) => Some(errors),
            ValidateNetworkError::Enumeration(_) => None,
        }
    }
}

/// Validates `candidate` against the interfaces present right now.
///
/// # Errors
///
/// Returns [`ValidateNetworkError::Enumeration`] if the enumerator fails, and
/// [`ValidateNetworkError::Invalid`] with every field problem otherwise.
pub fn validate_network(
    enumerator: &dyn InterfaceEnumerator,
    candidate: &CandidateNetworkConfig,
) -> Result<ValidatedNetworkConfig, ValidateNetworkError> {
    debug!("validating network '{}'", candidate.network_name.trim());

    let interfaces = enumerator.enumerate_interfaces()?;
    debug!("{} interfaces present on host", interfaces.len());

    match validate_candidate(candidate, interfaces.len()) {
        Ok(validated) => {
            info!(
                "network '{}' accepted: {}/{} on bridge {} via interface {}",
                validated.network_name(),
                validated.network().network,
                validated.network().prefix,
                validated.bridge_name(),
                validated.interface_index()
            );
            Ok(validated)
        }
        Err(errors) => {
            let fields: Vec<&str> = errors.fields().map(|f| f.as_str()).collect();
            warn!(
                "network '{}' rejected: {} invalid field(s) [{}]",
                candidate.network_name.trim(),
                fields.len(),
                fields.join(", ")
            );
            Err(ValidateNetworkError::Invalid(errors))
        }
    }
}
