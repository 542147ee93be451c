//! GPIO button input with async debouncing.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - UP     - move the cursor up
//!   - DOWN   - move the cursor down
//!   - SELECT - check source / click download / open notice / back
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, and sends a `UiEvent::Button` to the UI channel.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Timer};
use loadbutton::config::BUTTON_DEBOUNCE_MS;
use loadbutton::screen::UiEvent;
use loadbutton::ui::ButtonEvent;

use super::UI_EVENTS;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the event,
/// then waits for release before repeating.
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(pin: AnyPin, event: ButtonEvent) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("Button: {}", event);
            UI_EVENTS.send(UiEvent::Button(event)).await;

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
