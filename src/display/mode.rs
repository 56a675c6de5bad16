//! Mode change data model
//!
//! Plain types exchanged between the negotiator and a display backend: the
//! requested mode, the field mask of a change request, the scope of an apply
//! call and its outcome.

use bitflags::bitflags;
use std::fmt;

/// A requested display mode.
///
/// Constructed per negotiation call and never kept around; the live mode is
/// re-queried from the OS every time instead of being cached here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
}

impl DisplayMode {
    pub fn new(width: u32, height: u32, refresh_rate: u32) -> Self {
        Self {
            width,
            height,
            refresh_rate,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@{}Hz", self.width, self.height, self.refresh_rate)
    }
}

bitflags! {
    /// Fields of a mode-change request the OS is asked to honor.
    ///
    /// Everything outside the mask is carried over from the queried current
    /// descriptor, so color depth, orientation and position survive a change
    /// untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldMask: u32 {
        const WIDTH = 1 << 0;
        const HEIGHT = 1 << 1;
        const REFRESH_RATE = 1 << 2;

        /// Width and height without the refresh rate.
        const RESOLUTION = Self::WIDTH.bits() | Self::HEIGHT.bits();
    }
}

bitflags! {
    /// Scope of an apply call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ApplyScope: u32 {
        /// Write the accepted mode to the OS configuration store.
        const PERSIST = 1 << 0;
        /// Apply system-wide rather than for the calling process only.
        const GLOBAL = 1 << 1;
    }
}

impl Default for ApplyScope {
    fn default() -> Self {
        ApplyScope::PERSIST | ApplyScope::GLOBAL
    }
}

/// Result of one apply attempt.
///
/// The failure code is OS-defined; it is logged but never branched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Success,
    Failure(i32),
}

impl ApplyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ApplyOutcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_mask_drops_refresh_rate() {
        assert_eq!(FieldMask::RESOLUTION, FieldMask::WIDTH | FieldMask::HEIGHT);
        assert!(!FieldMask::RESOLUTION.contains(FieldMask::REFRESH_RATE));
        assert!(FieldMask::all().contains(FieldMask::REFRESH_RATE));
    }

    #[test]
    fn test_default_scope_is_persistent_and_global() {
        let scope = ApplyScope::default();
        assert!(scope.contains(ApplyScope::PERSIST));
        assert!(scope.contains(ApplyScope::GLOBAL));
    }

    #[test]
    fn test_apply_outcome_success_predicate() {
        assert!(ApplyOutcome::Success.is_success());
        assert!(!ApplyOutcome::Failure(-2).is_success());
    }

    #[test]
    fn test_display_mode_formatting() {
        let mode = DisplayMode::new(2560, 1440, 144);
        assert_eq!(mode.to_string(), "2560x1440@144Hz");
    }
}
