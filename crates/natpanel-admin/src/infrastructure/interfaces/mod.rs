//! Platform-specific network interface enumeration.
//!
//! Implements the application layer's [`InterfaceEnumerator`] port.  Every
//! call goes to the OS; nothing is cached.
//!
//! # Platform implementations
//!
//! | Module | OS                          | API used           |
//! |--------|-----------------------------|--------------------|
//! | `unix` | Linux, Android, macOS, BSDs | `if_nameindex(3)`  |
//!
//! The correct implementation is re-exported as `NativeInterfaceEnumerator`.
//! On other platforms `NativeInterfaceEnumerator` always reports an error.
//!
//! A [`StaticInterfaceEnumerator`] is always compiled (not guarded by
//! `#[cfg]`) so tests on any platform can use it without touching the host.

use natpanel_core::InterfaceInfo;

pub use crate::application::validate_network::{InterfaceEnumerator, InterfaceError};

// ── Unix implementation ───────────────────────────────────────────────────────

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd"
))]
pub mod unix;

/// Re-export the `if_nameindex` enumerator as `NativeInterfaceEnumerator`.
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd"
))]
pub use unix::NixInterfaceEnumerator as NativeInterfaceEnumerator;

// ── Fallback for unsupported platforms ────────────────────────────────────────

/// Enumerator for platforms without an implementation.  Always fails.
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd"
)))]
#[derive(Debug, Default)]
pub struct NativeInterfaceEnumerator;

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd"
)))]
impl NativeInterfaceEnumerator {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd"
)))]
impl InterfaceEnumerator for NativeInterfaceEnumerator {
    fn enumerate_interfaces(&self) -> Result<Vec<InterfaceInfo>, InterfaceError> {
        Err(InterfaceError::Platform(format!(
            "interface enumeration is not supported on {}",
            std::env::consts::OS
        )))
    }
}

// ── Static implementation (always compiled) ───────────────────────────────────

/// An enumerator that returns a fixed interface list.
///
/// Does not make any OS calls; the list is provided at construction time.
///
/// # Example
///
/// ```
/// use natpanel_admin::infrastructure::interfaces::{
///     InterfaceEnumerator, StaticInterfaceEnumerator,
/// };
///
/// let enumerator = StaticInterfaceEnumerator::with_count(3);
/// assert_eq!(enumerator.enumerate_interfaces().unwrap().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticInterfaceEnumerator {
    /// The list returned by every call.
    pub interfaces: Vec<InterfaceInfo>,
}

impl StaticInterfaceEnumerator {
    /// Creates an enumerator returning `interfaces`.
    pub fn new(interfaces: Vec<InterfaceInfo>) -> Self {
        Self { interfaces }
    }

    /// Creates an enumerator with `count` interfaces: `lo` at index 1, then
    /// `eth0`, `eth1`, ...
    pub fn with_count(count: u32) -> Self {
        let interfaces = (1..=count)
            .map(|index| InterfaceInfo {
                index,
                name: if index == 1 {
                    "lo".to_string()
                } else {
                    format!("eth{}", index - 2)
                },
            })
            .collect();
        Self { interfaces }
    }
}

impl InterfaceEnumerator for StaticInterfaceEnumerator {
    /// Returns the interfaces provided at construction time (never fails).
    fn enumerate_interfaces(&self) -> Result<Vec<InterfaceInfo>, InterfaceError> {
        Ok(self.interfaces.clone())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
