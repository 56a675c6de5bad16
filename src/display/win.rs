//! Windows display backend
//!
//! Query and apply go through the GDI display-settings calls. The descriptor
//! wraps the raw `DEVMODEW` it was read into, so every field outside the
//! negotiated set travels back to the OS exactly as the driver reported it.

use std::mem::size_of;

use anyhow::{Result, anyhow};
use windows::Win32::Graphics::Gdi::{
    CDS_GLOBAL, CDS_TYPE, CDS_UPDATEREGISTRY, ChangeDisplaySettingsExW, DEVMODE_FIELD_FLAGS,
    DEVMODEW, DISP_CHANGE_SUCCESSFUL, DM_DISPLAYFREQUENCY, DM_PELSHEIGHT, DM_PELSWIDTH,
    ENUM_CURRENT_SETTINGS, EnumDisplaySettingsW,
};
use windows::core::PCWSTR;

use crate::display::{ApplyOutcome, ApplyScope, DisplayControl, FieldMask, ModeDescriptor};

pub struct WinModeDescriptor {
    raw: DEVMODEW,
}

impl ModeDescriptor for WinModeDescriptor {
    fn width(&self) -> u32 {
        self.raw.dmPelsWidth
    }
    fn height(&self) -> u32 {
        self.raw.dmPelsHeight
    }
    fn refresh_rate(&self) -> u32 {
        self.raw.dmDisplayFrequency
    }
    fn set_width(&mut self, width: u32) {
        self.raw.dmPelsWidth = width;
    }
    fn set_height(&mut self, height: u32) {
        self.raw.dmPelsHeight = height;
    }
    fn set_refresh_rate(&mut self, refresh_rate: u32) {
        self.raw.dmDisplayFrequency = refresh_rate;
    }
}

/// Display control over the primary display.
pub struct WinDisplayControl;

impl WinDisplayControl {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayControl for WinDisplayControl {
    type Descriptor = WinModeDescriptor;

    fn current_mode(&self) -> Result<WinModeDescriptor> {
        let mut raw = DEVMODEW {
            dmSize: size_of::<DEVMODEW>() as u16,
            ..Default::default()
        };
        // Null device name targets the primary display.
        let ok = unsafe { EnumDisplaySettingsW(PCWSTR::null(), ENUM_CURRENT_SETTINGS, &mut raw) };
        if !ok.as_bool() {
            return Err(anyhow!("EnumDisplaySettingsW failed for the primary display"));
        }
        Ok(WinModeDescriptor { raw })
    }

    fn apply_mode(
        &self,
        descriptor: &WinModeDescriptor,
        mask: FieldMask,
        scope: ApplyScope,
    ) -> ApplyOutcome {
        let mut raw = descriptor.raw;
        raw.dmFields = devmode_fields(mask);

        let result = unsafe {
            ChangeDisplaySettingsExW(PCWSTR::null(), Some(&raw), None, cds_flags(scope), None)
        };
        if result == DISP_CHANGE_SUCCESSFUL {
            ApplyOutcome::Success
        } else {
            ApplyOutcome::Failure(result.0)
        }
    }
}

fn devmode_fields(mask: FieldMask) -> DEVMODE_FIELD_FLAGS {
    let mut fields = DEVMODE_FIELD_FLAGS(0);
    if mask.contains(FieldMask::WIDTH) {
        fields |= DM_PELSWIDTH;
    }
    if mask.contains(FieldMask::HEIGHT) {
        fields |= DM_PELSHEIGHT;
    }
    if mask.contains(FieldMask::REFRESH_RATE) {
        fields |= DM_DISPLAYFREQUENCY;
    }
    fields
}

fn cds_flags(scope: ApplyScope) -> CDS_TYPE {
    let mut flags = CDS_TYPE(0);
    if scope.contains(ApplyScope::PERSIST) {
        flags |= CDS_UPDATEREGISTRY;
    }
    // CDS_GLOBAL is only honored together with CDS_UPDATEREGISTRY.
    if scope.contains(ApplyScope::GLOBAL) {
        flags |= CDS_GLOBAL;
    }
    flags
}
