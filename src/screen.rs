//! Application state: the source list, the download button, the
//! completion notice and the detail screen.
//!
//! [`App`] is driven by [`UiEvent`]s from the button tasks and the
//! download coprocessor, and by per-frame ticks. It never touches the
//! hardware; requests for the outside world come back as [`Command`]s.

use heapless::String;

use crate::button::LoadingButton;
use crate::config::URL_CAPACITY;
use crate::detail::{DetailView, Outcome};
use crate::error::Error;
use crate::source::{self, DownloadRequest, DownloadSource};
use crate::ui::input_logic::{select_next, select_prev};
use crate::ui::ButtonEvent;

use embedded_graphics::prelude::PixelColor;

/// Row of the download button; rows above it are the sources.
pub const BUTTON_ROW: usize = DownloadSource::ALL.len();

/// Sources plus the button.
pub const ROW_COUNT: usize = BUTTON_ROW + 1;

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Source list + download button.
    Main,
    /// Result of the last finished download.
    Detail(DetailView),
}

/// Everything the UI reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEvent {
    Button(ButtonEvent),
    /// DONE line from the download coprocessor; `success` is STATUS.
    DownloadFinished { success: bool },
}

/// Side effects the firmware must carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    StartDownload(DownloadRequest),
}

pub struct App<C> {
    button: LoadingButton<C>,
    screen: Screen,
    cursor: usize,
    checked: Option<DownloadSource>,
    custom_url: String<URL_CAPACITY>,
    in_flight: Option<DownloadSource>,
    notice: Option<Outcome>,
    toast: Option<Error>,
}

impl<C: PixelColor> App<C> {
    pub fn new(button: LoadingButton<C>) -> Self {
        Self {
            button,
            screen: Screen::Main,
            cursor: 0,
            checked: None,
            custom_url: String::new(),
            in_flight: None,
            notice: None,
            toast: None,
        }
    }

    /// URL used when [`DownloadSource::Custom`] is checked.
    pub fn set_custom_url(&mut self, url: &str) -> Result<(), Error> {
        let mut buf = String::new();
        buf.push_str(url).map_err(|()| Error::UrlTooLong)?;
        self.custom_url = buf;
        Ok(())
    }

    pub fn custom_url(&self) -> &str {
        &self.custom_url
    }

    /// Custom URL without its scheme, cut to at most `max_chars` characters
    /// so it fits in a list row.
    pub fn custom_url_preview(&self, max_chars: usize) -> &str {
        let url = self.custom_url.as_str();
        let rest = match url.split_once("://") {
            Some((_, rest)) => rest,
            None => url,
        };
        match rest.char_indices().nth(max_chars) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn checked(&self) -> Option<DownloadSource> {
        self.checked
    }

    /// Pending "download finished" notice, until opened.
    pub fn notice(&self) -> Option<Outcome> {
        self.notice
    }

    /// Message for the last rejected click, until the next button press.
    pub fn toast(&self) -> Option<Error> {
        self.toast
    }

    pub fn in_flight(&self) -> Option<DownloadSource> {
        self.in_flight
    }

    pub fn button(&self) -> &LoadingButton<C> {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut LoadingButton<C> {
        &mut self.button
    }

    /// Advance the button animation.
    pub fn tick(&mut self, now_ms: u64) {
        self.button.tick(now_ms);
    }

    pub fn handle(&mut self, event: UiEvent, now_ms: u64) -> Option<Command> {
        match event {
            UiEvent::DownloadFinished { success } => {
                self.finish(success);
                None
            }
            UiEvent::Button(button) => {
                self.toast = None;
                match self.screen {
                    Screen::Main => self.handle_main(button, now_ms),
                    Screen::Detail(_) => {
                        if button == ButtonEvent::Select {
                            self.screen = Screen::Main;
                        }
                        None
                    }
                }
            }
        }
    }

    fn handle_main(&mut self, event: ButtonEvent, now_ms: u64) -> Option<Command> {
        match event {
            ButtonEvent::Up => {
                self.cursor = select_prev(self.cursor);
                None
            }
            ButtonEvent::Down => {
                self.cursor = select_next(self.cursor, ROW_COUNT);
                None
            }
            ButtonEvent::Select => {
                if let Some(outcome) = self.notice.take() {
                    self.screen = Screen::Detail(DetailView::new(outcome));
                    return None;
                }
                if self.cursor < BUTTON_ROW {
                    self.checked = DownloadSource::from_index(self.cursor);
                    return None;
                }
                self.click(now_ms)
            }
        }
    }

    fn click(&mut self, now_ms: u64) -> Option<Command> {
        if !self.button.on_click(now_ms) {
            return None;
        }
        match source::resolve(self.checked, &self.custom_url) {
            Ok(request) => {
                info!("download requested: {}", request.url.as_str());
                self.in_flight = Some(request.source);
                Some(Command::StartDownload(request))
            }
            Err(err) => {
                warn!("download rejected: {}", err);
                self.button.stop();
                self.toast = Some(err);
                None
            }
        }
    }

    fn finish(&mut self, success: bool) {
        let Some(source) = self.in_flight.take() else {
            warn!("completion with no download in flight");
            return;
        };
        self.button.stop();
        self.notice = Some(Outcome { source, success });
        info!("download finished: {} success={}", source, success);
    }
}
