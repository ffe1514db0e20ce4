//! Default suggestions for an empty network form.
//!
//! These values pre-fill the form when no prior input exists.  They are
//! suggestions only: nothing here is validated until the form is submitted.
//!
//! | Field        | Default          |
//! |--------------|------------------|
//! | network_name | `alpha-nat`      |
//! | bridge_name  | `vibr1000`       |
//! | cidr         | `10.10.10.10/24` |
//! | host_ip      | `10.10.10.1`     |
//! | dhcp_start   | `10.10.10.10`    |
//! | dhcp_end     | `10.10.10.254`   |

use serde::{Deserialize, Serialize};

use super::interface::NONE_SELECTED_VALUE;
use super::network::CandidateNetworkConfig;

/// Pre-filled form values.
///
/// Deserializable so the admin configuration file can override any of them;
/// absent keys keep the built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDefaults {
    #[serde(default = "default_network_name")]
    pub network_name: String,
    #[serde(default = "default_bridge_name")]
    pub bridge_name: String,
    #[serde(default = "default_cidr")]
    pub cidr: String,
    #[serde(default = "default_host_ip")]
    pub host_ip: String,
    #[serde(default = "default_dhcp_start")]
    pub dhcp_start: String,
    #[serde(default = "default_dhcp_end")]
    pub dhcp_end: String,
}

fn default_network_name() -> String {
    "alpha-nat".to_string()
}
fn default_bridge_name() -> String {
    "vibr1000".to_string()
}
fn default_cidr() -> String {
    "10.10.10.10/24".to_string()
}
fn default_host_ip() -> String {
    "10.10.10.1".to_string()
}
fn default_dhcp_start() -> String {
    "10.10.10.10".to_string()
}
fn default_dhcp_end() -> String {
    "10.10.10.254".to_string()
}

impl Default for NetworkDefaults {
    fn default() -> Self {
        Self {
            network_name: default_network_name(),
            bridge_name: default_bridge_name(),
            cidr: default_cidr(),
            host_ip: default_host_ip(),
            dhcp_start: default_dhcp_start(),
            dhcp_end: default_dhcp_end(),
        }
    }
}

impl NetworkDefaults {
    /// Builds the initial form candidate.  The interface starts unselected.
    pub fn to_candidate(&self) -> CandidateNetworkConfig {
        CandidateNetworkConfig {
            network_name: self.network_name.clone(),
            bridge_name: self.bridge_name.clone(),
            cidr: self.cidr.clone(),
            host_ip: self.host_ip.clone(),
            dhcp_start: self.dhcp_start.clone(),
            dhcp_end: self.dhcp_end.clone(),
            interface: NONE_SELECTED_VALUE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::Field;
    use crate::domain::network::validate_network;

    #[test]
    fn test_defaults_use_private_slash_24() {
        let defaults = NetworkDefaults::default();
        assert_eq!(defaults.cidr, "10.10.10.10/24");
        assert_eq!(defaults.host_ip, "10.10.10.1");
    }

    #[test]
    fn test_default_candidate_starts_with_no_interface_selected() {
        let candidate = NetworkDefaults::default().to_candidate();
        assert_eq!(candidate.interface, NONE_SELECTED_VALUE);
    }

    #[test]
    fn test_default_candidate_only_fails_on_interface() {
        // The suggested addresses are consistent; only the unselected
        // interface must be rejected.
        let candidate = NetworkDefaults::default().to_candidate();

        let errors = validate_network(&candidate, 3).expect_err("interface is unselected");

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Interface]);
    }

    #[test]
    fn test_partial_defaults_deserialize_keeps_builtin_values() {
        let json = r#"{ "network_name": "beta-nat" }"#;

        let defaults: NetworkDefaults = serde_json::from_str(json).expect("deserialize");

        assert_eq!(defaults.network_name, "beta-nat");
        assert_eq!(defaults.bridge_name, "vibr1000");
        assert_eq!(defaults.dhcp_end, "10.10.10.254");
    }
}
