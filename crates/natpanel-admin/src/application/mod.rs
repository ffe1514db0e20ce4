//! Application layer use cases for the admin tool.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules) and the infrastructure (OS/network/storage).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain functions to fulfil a user goal.
//! - **Depend on abstractions** (traits) rather than concrete implementations,
//!   so the infrastructure can be swapped without changing this code.
//! - **Contain no OS calls and no file system access**.
//!
//! # Sub-modules
//!
//! - **`validate_network`** – Defines the [`InterfaceEnumerator`] port, queries
//!   it once per submission and runs the domain validator with the live
//!   interface count.
//!
//! - **`network_form`** – Assembles the initial state of the network form:
//!   default suggestions plus the live interface choices.
//!
//! [`InterfaceEnumerator`]: validate_network::InterfaceEnumerator

pub mod network_form;
pub mod validate_network;
