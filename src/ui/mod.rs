//! User interface subsystem - OLED display + physical buttons.
//!
//! The UI task owns the [`App`] and reacts to button presses and
//! download completions, ticking the button animation every frame and
//! rendering the current screen on the SSD1306 OLED.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 3 tactile switches with debouncing (UP, DOWN, SELECT)

pub mod buttons;
pub mod display;

use defmt::{info, warn};
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::Output;
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::Twim;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Ticker, Timer};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use loadbutton::button::render::ButtonStyle;
use loadbutton::config::{
    CIRCLE_DIAMETER, CUSTOM_URL, FRAME_INTERVAL_MS, IDLE_LABEL, LOADING_LABEL, START_PULSE_MS,
};
use loadbutton::screen::{App, Command, UiEvent};
use loadbutton::LoadingButton;

use display::Display;

/// Button presses and coprocessor completions, consumed by [`ui_task`].
pub static UI_EVENTS: Channel<CriticalSectionRawMutex, UiEvent, 8> = Channel::new();

/// Concrete display type on the board.
pub type BoardDisplay = Display<Twim<'static, TWISPI0>>;

/// Monochrome look: the sweep and the pie light up pixels over a dark
/// container.
fn button_style() -> ButtonStyle<BinaryColor> {
    ButtonStyle {
        container: BinaryColor::Off,
        sweep: BinaryColor::On,
        text: BinaryColor::On,
        circle: BinaryColor::On,
        font: &FONT_6X10,
        idle_label: IDLE_LABEL,
        loading_label: LOADING_LABEL,
        circle_diameter: CIRCLE_DIAMETER,
    }
}

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

/// Owns the app state and the display; pulses START for new downloads.
#[embassy_executor::task]
pub async fn ui_task(mut display: BoardDisplay, mut start: Output<'static>) -> ! {
    let mut app = App::new(LoadingButton::new(button_style()));
    app.button_mut().layout(display::button_size());
    if let Err(err) = app.set_custom_url(CUSTOM_URL) {
        warn!("custom url: {}", err);
    }

    let mut ticker = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));

    loop {
        match select(UI_EVENTS.receive(), ticker.next()).await {
            Either::First(event) => {
                if let Some(Command::StartDownload(request)) = app.handle(event, now_ms()) {
                    info!("START {} <{}>", request.title(), request.url.as_str());
                    start.set_high();
                    Timer::after(Duration::from_millis(START_PULSE_MS)).await;
                    start.set_low();
                }
            }
            Either::Second(()) => app.tick(now_ms()),
        }

        if let Err(err) = display::draw(&mut display, &app) {
            warn!("display: {}", err);
        }
    }
}
