//! SSD1306 OLED display wrapper.

use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use loadbutton::config::{BUTTON_TOP, DISPLAY_HEIGHT, DISPLAY_WIDTH, LIST_ROW_HEIGHT};
use loadbutton::detail::{DetailView, Outcome};
use loadbutton::screen::{App, Screen, BUTTON_ROW};
use loadbutton::source::DownloadSource;
use loadbutton::Error;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

/// Size handed to the button on layout: full width, below the list.
pub fn button_size() -> Size {
    Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT - BUTTON_TOP as u32)
}

/// Characters left for the custom URL after the cursor and radio marker.
const LIST_URL_CHARS: usize = (DISPLAY_WIDTH / 6) as usize - 5;

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn small_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_5X8)
        .text_color(BinaryColor::On)
        .build()
}

fn inverted_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::Off)
        .background_color(BinaryColor::On)
        .build()
}

/// Render whichever screen the app is on and flush it.
pub fn draw<I2C>(display: &mut Display<I2C>, app: &App<BinaryColor>) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    match app.screen() {
        Screen::Main => draw_main(display, app),
        Screen::Detail(view) => draw_detail(display, &view),
    }

    display.flush().map_err(|_| Error::Display)
}

/// Source list (or toast / notice) on top, download button below.
fn draw_main<I2C>(display: &mut Display<I2C>, app: &App<BinaryColor>)
where
    I2C: embedded_hal::i2c::I2c,
{
    if let Some(err) = app.toast() {
        let _ = Text::new(err.message(), Point::new(0, 16), small_style()).draw(display);
    } else if let Some(outcome) = app.notice() {
        draw_notice(display, outcome);
    } else {
        draw_source_list(display, app);
    }

    let origin = Point::new(0, BUTTON_TOP);
    let _ = app.button().paint(origin, display);

    if app.cursor() == BUTTON_ROW {
        let _ = Rectangle::new(origin, button_size())
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(display);
    }
}

fn draw_source_list<I2C>(display: &mut Display<I2C>, app: &App<BinaryColor>)
where
    I2C: embedded_hal::i2c::I2c,
{
    for (row, source) in DownloadSource::ALL.iter().enumerate() {
        let cursor = if row == app.cursor() { ">" } else { " " };
        let radio = if app.checked() == Some(*source) {
            "(*)"
        } else {
            "( )"
        };
        let mut line: heapless::String<24> = heapless::String::new();
        let _ = line.push_str(cursor);
        let _ = line.push_str(radio);
        let _ = line.push_str(" ");
        let label = if *source == DownloadSource::Custom && app.checked() == Some(*source) {
            app.custom_url_preview(LIST_URL_CHARS)
        } else {
            source.title()
        };
        let _ = line.push_str(label);
        let y = 8 + (row as i32 * LIST_ROW_HEIGHT as i32);
        let _ = Text::new(line.as_str(), Point::new(0, y), text_style()).draw(display);
    }
}

/// The notification: tells the user a download ended and how to open it.
fn draw_notice<I2C>(display: &mut Display<I2C>, outcome: Outcome)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Text::new("Download finished", Point::new(0, 8), text_style()).draw(display);
    let _ = Text::new(outcome.source.title(), Point::new(0, 20), text_style()).draw(display);
    let _ = Text::new("SEL: details", Point::new(0, 32), small_style()).draw(display);
}

fn draw_detail<I2C>(display: &mut Display<I2C>, view: &DetailView)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Text::new("File name:", Point::new(0, 10), small_style()).draw(display);
    let _ = Text::new(view.file_name(), Point::new(0, 22), text_style()).draw(display);
    let _ = Text::new("Status:", Point::new(0, 36), small_style()).draw(display);

    let status_style = if view.failed() {
        inverted_style()
    } else {
        text_style()
    };
    let _ = Text::new(view.status(), Point::new(48, 36), status_style).draw(display);

    let _ = Text::new("SEL: back", Point::new(0, 58), small_style()).draw(display);
}
