//! Display mode negotiation module
//!
//! Provides the mode negotiation protocol over platform-specific display
//! backends (GDI display settings on Windows, query-only fallback elsewhere).

#[cfg(target_os = "windows")]
mod win;
#[cfg(target_os = "windows")]
pub use win::WinDisplayControl as DisplayControlImpl;

#[cfg(not(target_os = "windows"))]
mod generic;
#[cfg(not(target_os = "windows"))]
pub use generic::GenericDisplayControl as DisplayControlImpl;

mod mode;
mod negotiator;
mod traits;

pub use mode::{ApplyOutcome, ApplyScope, DisplayMode, FieldMask};
pub use negotiator::{ModeNegotiator, NegotiationOutcome};
pub use traits::{DisplayControl, LogSink, LoggerSink, ModeDescriptor};
