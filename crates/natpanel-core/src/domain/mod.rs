//! Domain entities for NatPanel.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain**.  Domain code:
//!
//! - Contains the core business rules of the application.
//! - Has **no** imports from OS APIs, network libraries, database drivers, or UI
//!   frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Here the business rules are the six consistency checks that make a NAT
//! network acceptable.  The host interface list is an outer-layer concern; the
//! domain only ever sees how many interfaces exist.

/// Non-binding default suggestions for an empty network form.
pub mod defaults;

/// Field identifiers, the validation error taxonomy, and the error accumulator.
pub mod errors;

/// Interface records and form choices.
pub mod interface;

/// The network configuration validator.
///
/// See [`network::validate_network`] for the entry point.
pub mod network;
