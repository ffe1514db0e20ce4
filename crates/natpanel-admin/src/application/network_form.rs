//! NetworkFormUseCase: initial state of the "new NAT network" form.
//!
//! An empty form is pre-filled with the configured suggestions and offers one
//! gateway choice per live interface, followed by "Select..".  Nothing is
//! validated here; the values only become binding once submitted to
//! [`validate_network`](super::validate_network::validate_network).

use natpanel_core::{interface_choices, CandidateNetworkConfig, InterfaceChoice, NetworkDefaults};
use serde::Serialize;

use super::validate_network::{InterfaceEnumerator, InterfaceError};

/// Initial form values plus the gateway choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkForm {
    pub initial: CandidateNetworkConfig,
    pub interface_choices: Vec<InterfaceChoice>,
}

/// Builds the initial form from `defaults` and the live interface list.
///
/// # Errors
///
/// Propagates any error from the enumerator.
pub fn build_network_form(
    enumerator: &dyn InterfaceEnumerator,
    defaults: &NetworkDefaults,
) -> Result<NetworkForm, InterfaceError> {
    let interfaces = enumerator.enumerate_interfaces()?;
    Ok(NetworkForm {
        initial: defaults.to_candidate(),
        interface_choices: interface_choices(&interfaces),
    })
}
