//! Unified error type for loadbutton.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Top-level error type used across the application.
///
/// The button widget itself has no failure modes; errors only come from
/// resolving what to download and from the display hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Download request
    /// The download button was clicked with no source checked.
    NoSelection,

    /// The custom URL is not a well-formed web URL.
    InvalidUrl,

    /// The URL does not fit in a request buffer.
    UrlTooLong,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,
}

impl Error {
    /// Short message shown to the user as a toast.
    pub const fn message(&self) -> &'static str {
        match self {
            Error::NoSelection => "Please select one option",
            Error::InvalidUrl => "Please enter a valid Url",
            Error::UrlTooLong => "Url is too long",
            Error::Display => "Display error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
