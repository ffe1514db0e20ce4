//! # natpanel-core
//!
//! Shared library for NatPanel containing the network configuration types and
//! the validator that decides whether a set of user-supplied parameters
//! describes a usable NAT network.
//!
//! This crate has zero dependencies on OS APIs, UI frameworks, or storage.
//! The set of live host interfaces is supplied by the caller as a plain count,
//! so every function here can be tested without touching the host.
//!
//! # Architecture overview (for beginners)
//!
//! NatPanel provisions isolated virtual-machine networks: a private subnet,
//! NAT'd through a chosen physical interface and attached to a host bridge.
//! Before anything is provisioned, the administrator's form input has to be
//! checked for consistency.  That check lives here:
//!
//! - **`domain::network`** – The validator itself.  Takes a
//!   [`CandidateNetworkConfig`] (raw text fields) and returns either a typed
//!   [`ValidatedNetworkConfig`] or every field-level problem it found.
//!
//! - **`domain::errors`** – The error taxonomy and the [`FieldErrors`]
//!   accumulator returned on rejection.
//!
//! - **`domain::interface`** – Interface records and the choice list offered
//!   to the form.
//!
//! - **`domain::defaults`** – Non-binding suggestions for an empty form.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `natpanel_core::validate_network` instead of the full module path.
pub use domain::defaults::NetworkDefaults;
pub use domain::errors::{Field, FieldErrors, ValidationError};
pub use domain::interface::{interface_choices, InterfaceChoice, InterfaceInfo};
pub use domain::network::{
    validate_network, CandidateNetworkConfig, NetworkRange, ValidatedNetworkConfig,
};
