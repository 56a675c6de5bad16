//! Portable fallback backend
//!
//! Platforms without a system-wide mode-set call still answer mode queries
//! through the `display-info` crate; apply attempts come back rejected, so
//! the negotiator above degrades exactly as it would against a driver that
//! refuses the request.

use anyhow::{Result, anyhow};
use display_info::DisplayInfo as OsDisplayInfo;
use log::warn;

use crate::display::{ApplyOutcome, ApplyScope, DisplayControl, FieldMask, ModeDescriptor};

/// Code reported for apply attempts on platforms without mode switching.
pub const UNSUPPORTED: i32 = -1;

/// Portable snapshot of the primary display's active mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericModeDescriptor {
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
    pub position: (i32, i32),
}

impl ModeDescriptor for GenericModeDescriptor {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn refresh_rate(&self) -> u32 {
        self.refresh_rate
    }
    fn set_width(&mut self, width: u32) {
        self.width = width;
    }
    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
    fn set_refresh_rate(&mut self, refresh_rate: u32) {
        self.refresh_rate = refresh_rate;
    }
}

pub struct GenericDisplayControl;

impl GenericDisplayControl {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayControl for GenericDisplayControl {
    type Descriptor = GenericModeDescriptor;

    fn current_mode(&self) -> Result<GenericModeDescriptor> {
        let displays =
            OsDisplayInfo::all().map_err(|e| anyhow!("Failed to enumerate displays: {}", e))?;
        let primary = displays
            .iter()
            .find(|d| d.is_primary)
            .or_else(|| displays.first())
            .ok_or_else(|| anyhow!("No displays found"))?;

        Ok(GenericModeDescriptor {
            width: primary.width,
            height: primary.height,
            refresh_rate: primary.frequency.round() as u32,
            position: (primary.x, primary.y),
        })
    }

    fn apply_mode(
        &self,
        descriptor: &GenericModeDescriptor,
        mask: FieldMask,
        _scope: ApplyScope,
    ) -> ApplyOutcome {
        warn!(
            "No mode-set call on this platform, rejecting {}x{} (mask {:?})",
            descriptor.width, descriptor.height, mask
        );
        ApplyOutcome::Failure(UNSUPPORTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_reports_unsupported() {
        let control = GenericDisplayControl::new();
        let descriptor = GenericModeDescriptor {
            width: 1920,
            height: 1080,
            refresh_rate: 60,
            position: (0, 0),
        };

        let outcome = control.apply_mode(&descriptor, FieldMask::all(), ApplyScope::default());

        assert_eq!(outcome, ApplyOutcome::Failure(UNSUPPORTED));
    }
}
