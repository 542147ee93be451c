//! Host-testable library for loadbutton.
//!
//! Everything the firmware shows and decides lives here: the animated
//! download button (state machine, clock, renderer, painter), the
//! download source catalog and the screen logic. None of it needs the
//! nRF52840, so it builds and tests on the host.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and pulls these modules in through the `loadbutton` crate.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod button;
pub mod config;
pub mod detail;
pub mod error;
pub mod screen;
pub mod source;

pub use button::LoadingButton;
pub use error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// UI input
// ═══════════════════════════════════════════════════════════════════════════

#[path = "ui/input_logic.rs"]
mod ui_input_logic_impl;

pub mod ui {
    /// Physical button events (after debouncing).
    ///
    /// Three buttons for the whole UI:
    ///   - UP/DOWN: move the cursor over sources and the download button
    ///   - SELECT: check a source / click download / open notice / go back
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum ButtonEvent {
        Up,
        Down,
        Select,
    }

    pub mod input_logic {
        pub use crate::ui_input_logic_impl::{select_next, select_prev};
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - widget tests live in button/tests.rs
// ═══════════════════════════════════════════════════════════════════════════
