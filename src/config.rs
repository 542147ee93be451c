//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, timing parameters and widget styling live here
//! so they can be tuned in one place.

// Animation

/// Length of one progress sweep, 0 → full width (ms).
pub const ANIMATION_DURATION_MS: u32 = 2000;

/// Frame interval of the UI loop (ms). ~30 fps keeps the I²C flush
/// (≈25 ms for a full 128×64 buffer at 400 kHz) inside one frame.
pub const FRAME_INTERVAL_MS: u64 = 33;

// Display

/// SSD1306 panel size in pixels.
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

/// Height of one row in the source list (FONT_6X10 line height).
pub const LIST_ROW_HEIGHT: u32 = 10;

/// Top edge of the download button on the panel; the button spans the
/// remaining rows down to the bottom edge.
pub const BUTTON_TOP: i32 = 42;

/// Diameter of the progress pie drawn next to the label (px).
pub const CIRCLE_DIAMETER: u32 = 12;

/// Button labels. The OLED font is ASCII only, so the loading label uses
/// three dots instead of an ellipsis.
pub const IDLE_LABEL: &str = "Download";
pub const LOADING_LABEL: &str = "Loading...";

// Download sources

/// URL used for the "Custom Download" entry. A three-button device has
/// no text entry, so the custom URL is provisioned at build time.
pub const CUSTOM_URL: &str = "https://github.com/embassy-rs/embassy";

/// Capacity of a download request URL.
pub const URL_CAPACITY: usize = 128;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*`
// are picked in `main.rs`.  Adjust for your custom PCB.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button SELECT  → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   Job START      → P0.05  (output, pulsed high to request a download)
//   Job DONE       → P0.03  (input, rising edge when the transfer ends)
//   Job STATUS     → P0.04  (input, sampled on DONE; high = success)

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Width of the START pulse sent to the download coprocessor (ms).
pub const START_PULSE_MS: u64 = 5;
