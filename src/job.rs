//! Completion lines from the download coprocessor.
//!
//! The coprocessor raises DONE when a transfer ends and holds STATUS
//! high for success / low for failure while DONE is high.

use defmt::info;
use embassy_nrf::gpio::Input;
use loadbutton::screen::UiEvent;

use crate::ui::UI_EVENTS;

/// Forward every DONE edge to the UI as `UiEvent::DownloadFinished`.
#[embassy_executor::task]
pub async fn job_task(mut done: Input<'static>, status: Input<'static>) -> ! {
    loop {
        done.wait_for_rising_edge().await;

        let success = status.is_high();
        info!("Job: done, success={}", success);
        UI_EVENTS
            .send(UiEvent::DownloadFinished { success })
            .await;

        // Re-arm once the coprocessor drops DONE.
        done.wait_for_low().await;
    }
}
