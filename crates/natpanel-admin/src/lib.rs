//! natpanel-admin library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does natpanel-admin do? (for beginners)
//!
//! Before a NAT network is provisioned, the administrator's parameters are
//! checked against two things: each other (is the DHCP range inside the
//! subnet? does it avoid the host address?) and the host itself (does the
//! chosen gateway interface exist right now?).  The first kind of check is
//! pure and lives in `natpanel-core`; this crate adds the second kind by
//! enumerating the host's interfaces for every validation, and wraps both in a
//! command-line tool.

/// Application layer: validation and form use cases.
pub mod application;

/// Infrastructure layer: OS interface enumeration and config file storage.
pub mod infrastructure;
