//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module handles:
//!
//! - Reading the TOML configuration file from the platform-appropriate directory
//!   (or an explicit path given on the command line).
//! - Writing a fresh default file on request.
//! - Providing sensible defaults when the file does not exist yet (first run).
//!
//! Validated networks are not stored here; persisting them belongs to the
//! caller of the validator.

pub mod config;
