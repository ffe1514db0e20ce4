//! Infrastructure layer for the admin tool.
//!
//! Contains OS-facing adapters: host interface enumeration and file-system
//! storage of the tool's configuration.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `natpanel_core`, but MUST NOT be imported by the `application` or domain
//! layers.
//!
//! # Sub-modules
//!
//! - **`interfaces`** – Implementations of the `InterfaceEnumerator` port.
//!   On Unix hosts it calls `if_nameindex(3)`; a static enumerator is always
//!   compiled for tests and for hosts without support.
//!
//! - **`storage`** – TOML configuration file: log level and the default
//!   suggestions shown on an empty network form.

pub mod interfaces;
pub mod storage;
