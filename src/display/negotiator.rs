//! Display mode negotiation
//!
//! Drives the OS to the closest acceptable mode for a streaming session:
//! a full change (resolution + refresh rate) first, then a resolution-only
//! change for virtual drivers that reject refresh-rate enforcement.

use crate::display::{
    ApplyOutcome, ApplyScope, DisplayControl, DisplayMode, FieldMask, LogSink, ModeDescriptor,
};

/// Tag carried by every line the negotiator logs.
const LOG_TAG: &str = "ModeNegotiator";

/// Terminal state of one negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationOutcome {
    /// Resolution and refresh rate both accepted.
    Full,
    /// Resolution accepted, refresh rate left to the driver.
    ResolutionOnly,
    /// Both attempts rejected; holds the code of the final rejection.
    Rejected(i32),
    /// The current mode could not be read; nothing was attempted.
    QueryFailed,
}

impl NegotiationOutcome {
    /// Whether the display ended up at the requested resolution.
    pub fn changed_resolution(&self) -> bool {
        matches!(
            self,
            NegotiationOutcome::Full | NegotiationOutcome::ResolutionOnly
        )
    }
}

/// Negotiates display modes against a [`DisplayControl`] backend.
///
/// Single-shot and blocking: one `negotiate` call performs at most one query
/// and two apply attempts, then reaches a terminal outcome. Nothing survives
/// between calls; the live mode is re-queried every time.
pub struct ModeNegotiator<D: DisplayControl, S: LogSink> {
    display: D,
    sink: S,
}

impl<D: DisplayControl, S: LogSink> ModeNegotiator<D, S> {
    pub fn new(display: D, sink: S) -> Self {
        Self { display, sink }
    }

    /// Drives the display to `mode`, degrading to a resolution-only change
    /// when the driver rejects the refresh rate.
    ///
    /// Every step is logged; failures never propagate as errors.
    pub fn negotiate(&mut self, mode: DisplayMode) -> NegotiationOutcome {
        let mut descriptor = match self.display.current_mode() {
            Ok(descriptor) => descriptor,
            Err(e) => {
                self.log(format!("cannot read the current display mode: {e}"));
                return NegotiationOutcome::QueryFailed;
            }
        };

        // Candidate = live descriptor with only the requested fields
        // overwritten, so unrelated settings travel back unchanged.
        descriptor.set_width(mode.width);
        descriptor.set_height(mode.height);
        descriptor.set_refresh_rate(mode.refresh_rate);

        let scope = ApplyScope::default();

        match self.display.apply_mode(&descriptor, FieldMask::all(), scope) {
            ApplyOutcome::Success => {
                self.log(format!("applied {mode}"));
                return NegotiationOutcome::Full;
            }
            ApplyOutcome::Failure(code) => {
                self.log(format!(
                    "full change to {mode} rejected ({code}), retrying with resolution only"
                ));
            }
        }

        // The refresh-rate value stays in the descriptor; dropping it from
        // the mask is what tells the OS not to enforce it.
        match self
            .display
            .apply_mode(&descriptor, FieldMask::RESOLUTION, scope)
        {
            ApplyOutcome::Success => {
                self.log(format!(
                    "applied {}x{} resolution only, refresh rate not enforced",
                    mode.width, mode.height
                ));
                NegotiationOutcome::ResolutionOnly
            }
            ApplyOutcome::Failure(code) => {
                self.log(format!("resolution change rejected, error code {code}"));
                NegotiationOutcome::Rejected(code)
            }
        }
    }

    fn log(&mut self, message: String) {
        self.sink.line(&format!("{LOG_TAG}: {message}"));
    }
}
