//! Contracts consumed by the mode negotiator
//!
//! The OS display subsystem and the log backend are reached through these
//! traits so the negotiation protocol can be exercised against fakes.

use crate::display::{ApplyOutcome, ApplyScope, FieldMask};
use anyhow::Result;
use log::info;

/// A display's mode descriptor as the backend holds it.
///
/// Only the three negotiated fields are visible here; a backend keeps
/// whatever else its OS structure carries and sends it back unchanged.
pub trait ModeDescriptor {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn refresh_rate(&self) -> u32;

    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);
    fn set_refresh_rate(&mut self, refresh_rate: u32);
}

/// Query/apply access to the target display.
pub trait DisplayControl {
    type Descriptor: ModeDescriptor;

    /// Reads the active mode of the primary display.
    fn current_mode(&self) -> Result<Self::Descriptor>;

    /// Asks the OS to adopt `descriptor` for the fields named in `mask`.
    ///
    /// Blocks for as long as the OS takes to retime the display; a rejected
    /// request is reported through the outcome, never through a panic.
    fn apply_mode(
        &self,
        descriptor: &Self::Descriptor,
        mask: FieldMask,
        scope: ApplyScope,
    ) -> ApplyOutcome;
}

/// Sink for the negotiator's progress lines.
pub trait LogSink {
    /// Appends one message line.
    fn line(&mut self, message: &str);
}

/// Forwards lines to the global logger at info level.
pub struct LoggerSink;

impl LogSink for LoggerSink {
    fn line(&mut self, message: &str) {
        info!("{}", message);
    }
}
