//! loadbutton firmware entry point.
//!
//! Wires the nRF52840 peripherals to the host-testable `loadbutton`
//! library and spawns the tasks:
//!
//! - `button_task` ×3: debounced UP / DOWN / SELECT presses
//! - `job_task`: DONE / STATUS lines from the download coprocessor
//! - `ui_task`: app state, frame ticker, OLED rendering, START pulses

#![no_std]
#![no_main]

mod job;
mod ui;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pin, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use loadbutton::ui::ButtonEvent;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("loadbutton starting");

    // Buttons
    unwrap!(spawner.spawn(ui::buttons::button_task(p.P0_11.degrade(), ButtonEvent::Up)));
    unwrap!(spawner.spawn(ui::buttons::button_task(p.P0_12.degrade(), ButtonEvent::Down)));
    unwrap!(spawner.spawn(ui::buttons::button_task(p.P0_24.degrade(), ButtonEvent::Select)));

    // Download coprocessor lines
    let done = Input::new(p.P0_03.degrade(), Pull::Down);
    let status = Input::new(p.P0_04.degrade(), Pull::Down);
    unwrap!(spawner.spawn(job::job_task(done, status)));
    let start = Output::new(p.P0_05.degrade(), Level::Low, OutputDrive::Standard);

    // Display
    let mut config = twim::Config::default();
    config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, config);
    let display = ui::display::init(i2c);

    unwrap!(spawner.spawn(ui::ui_task(display, start)));
}
