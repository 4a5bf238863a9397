//! Unified error type for pocketnav.
//!
//! We avoid `alloc` - all error variants are fieldless.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Error type shared by the display and scan collaborators.
///
/// The navigator never propagates these past the poll loop: a failed
/// commit drops one frame, a failed scan browses an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Pushing the frame buffer to the panel failed.
    Display,

    /// The radio could not complete a network scan.
    ScanFailed,
}

impl Error {
    /// Short tag for log lines (usable with both `log` and `defmt`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Error::Display => "display",
            Error::ScanFailed => "scan",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Display => f.write_str("display commit failed"),
            Error::ScanFailed => f.write_str("network scan failed"),
        }
    }
}
