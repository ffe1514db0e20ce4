//! Interface enumeration via `if_nameindex(3)`.
//!
//! `if_nameindex` returns every interface known to the kernel, up or down,
//! with its index.  The `nix` wrapper frees the returned array when the
//! `Interfaces` value is dropped.

use nix::net::if_::if_nameindex;
use tracing::debug;

use super::{InterfaceEnumerator, InterfaceError};
use natpanel_core::InterfaceInfo;

/// Unix implementation of [`InterfaceEnumerator`].
#[derive(Debug, Default)]
pub struct NixInterfaceEnumerator;

impl NixInterfaceEnumerator {
    /// Creates a new `NixInterfaceEnumerator`.
    pub fn new() -> Self {
        Self
    }
}

impl InterfaceEnumerator for NixInterfaceEnumerator {
    fn enumerate_interfaces(&self) -> Result<Vec<InterfaceInfo>, InterfaceError> {
        let interfaces = if_nameindex()
            .map_err(|e| InterfaceError::Platform(format!("if_nameindex failed: {e}")))?;

        let list: Vec<InterfaceInfo> = interfaces
            .iter()
            .map(|iface| InterfaceInfo {
                index: iface.index(),
                name: iface.name().to_string_lossy().into_owned(),
            })
            .collect();

        debug!("if_nameindex reported {} interfaces", list.len());
        Ok(list)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
