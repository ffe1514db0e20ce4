//! Integration tests for the natpanel-core network validator.
//!
//! These tests drive [`validate_network`] through the public API with the
//! administrator scenarios the form has to handle, plus property-style sweeps
//! over addresses and interface indices.

use std::net::{IpAddr, Ipv4Addr};

use natpanel_core::{
    validate_network, CandidateNetworkConfig, Field, NetworkDefaults, NetworkRange,
    ValidationError,
};

/// A host with three interfaces.
const INTERFACES: usize = 3;

fn base_candidate() -> CandidateNetworkConfig {
    CandidateNetworkConfig {
        network_name: "alpha-nat".to_string(),
        bridge_name: "vibr1000".to_string(),
        cidr: "10.10.10.10/24".to_string(),
        host_ip: "10.10.10.1".to_string(),
        dhcp_start: "10.10.10.10".to_string(),
        dhcp_end: "10.10.10.254".to_string(),
        interface: "1".to_string(),
    }
}

#[test]
fn test_scenario_valid_network_resolves_boundaries() {
    let validated = validate_network(&base_candidate(), INTERFACES).expect("must be accepted");

    assert_eq!(
        validated.network().network,
        IpAddr::V4(Ipv4Addr::new(10, 10, 10, 0))
    );
    assert_eq!(
        validated.network().broadcast,
        IpAddr::V4(Ipv4Addr::new(10, 10, 10, 255))
    );
    assert_eq!(validated.network().prefix, 24);
}

#[test]
fn test_scenario_dhcp_start_on_network_address_conflicts() {
    let input = CandidateNetworkConfig {
        dhcp_start: "10.10.10.0".to_string(),
        ..base_candidate()
    };

    let errors = validate_network(&input, INTERFACES).expect_err("must be rejected");

    assert_eq!(
        errors.get(Field::DhcpStart),
        &[ValidationError::ReservedAddressConflict]
    );
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_scenario_reversed_range_flags_dhcp_end() {
    let input = CandidateNetworkConfig {
        dhcp_start: "10.10.10.200".to_string(),
        dhcp_end: "10.10.10.100".to_string(),
        ..base_candidate()
    };

    let errors = validate_network(&input, INTERFACES).expect_err("must be rejected");

    assert_eq!(errors.get(Field::DhcpEnd), &[ValidationError::InvalidRangeOrder]);
    assert!(!errors.has_errors(Field::DhcpStart));
}

#[test]
fn test_scenario_start_outside_network() {
    let input = CandidateNetworkConfig {
        cidr: "10.10.10.0/24".to_string(),
        dhcp_start: "10.10.20.5".to_string(),
        ..base_candidate()
    };

    let errors = validate_network(&input, INTERFACES).expect_err("must be rejected");

    assert_eq!(
        errors.get(Field::DhcpStart),
        &[ValidationError::AddressOutOfNetwork]
    );
}

#[test]
fn test_scenario_non_integer_interface() {
    let input = CandidateNetworkConfig {
        interface: "abc".to_string(),
        ..base_candidate()
    };

    let errors = validate_network(&input, INTERFACES).expect_err("must be rejected");

    assert_eq!(errors.messages(Field::Interface), vec![
        "Interface does not seem to exist in the OS.".to_string()
    ]);
}

#[test]
fn test_scenario_interface_beyond_enumeration() {
    let input = CandidateNetworkConfig {
        interface: "7".to_string(),
        ..base_candidate()
    };

    let errors = validate_network(&input, INTERFACES).expect_err("must be rejected");

    assert_eq!(errors.get(Field::Interface), &[ValidationError::InvalidInterface]);
}

#[test]
fn test_two_invalid_fields_are_both_reported() {
    let input = CandidateNetworkConfig {
        interface: "0".to_string(),
        dhcp_start: "10.10.20.5".to_string(),
        ..base_candidate()
    };

    let errors = validate_network(&input, INTERFACES).expect_err("must be rejected");

    assert!(errors.has_errors(Field::Interface));
    assert!(errors.has_errors(Field::DhcpStart));
}

#[test]
fn test_containment_matches_numeric_bounds_across_a_slash_28() {
    // 192.168.50.16/28 spans .16 ..= .31
    let range = NetworkRange::parse("192.168.50.20/28").expect("parse");

    for last_octet in 0u8..=255 {
        let addr = IpAddr::V4(Ipv4Addr::new(192, 168, 50, last_octet));
        let expected = (16..=31).contains(&last_octet);
        assert_eq!(range.contains(addr), expected, "octet {last_octet}");
    }
}

#[test]
fn test_equal_bounds_never_pass() {
    for octet in [2u8, 50, 200] {
        let addr = format!("10.10.10.{octet}");
        let input = CandidateNetworkConfig {
            dhcp_start: addr.clone(),
            dhcp_end: addr,
            ..base_candidate()
        };
        let errors = validate_network(&input, INTERFACES).expect_err("equal bounds");
        assert!(errors.contains(Field::DhcpEnd, &ValidationError::InvalidRangeOrder));
    }
}

#[test]
fn test_interface_bound_sweep() {
    for count in 1..=5usize {
        for selector in 0..=count + 1 {
            let input = CandidateNetworkConfig {
                interface: selector.to_string(),
                ..base_candidate()
            };
            let accepted = validate_network(&input, count).is_ok();
            assert_eq!(
                accepted,
                (1..=count).contains(&selector),
                "selector {selector} with {count} interfaces"
            );
        }
    }
}

#[test]
fn test_default_suggestions_validate_once_interface_is_chosen() {
    let mut candidate = NetworkDefaults::default().to_candidate();
    candidate.interface = "2".to_string();

    assert!(validate_network(&candidate, INTERFACES).is_ok());
}

#[test]
fn test_validated_config_serializes_addresses_as_text() {
    let validated = validate_network(&base_candidate(), INTERFACES).expect("valid");

    let json = serde_json::to_value(&validated).expect("serialize");

    assert_eq!(json["host_ip"], "10.10.10.1");
    assert_eq!(json["network"]["broadcast"], "10.10.10.255");
    assert_eq!(json["interface_index"], 1);
}
