//! Frame geometry for the loading button.
//!
//! [`render`] is a pure function of state, progress, geometry and style.
//! It returns a fixed-size [`Frame`] of draw commands; nothing here
//! touches a display, so it runs (and is tested) on the host.

use core::fmt;

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::{PixelColor, Point, Size};

use super::state::{ButtonState, Label};

/// Pie start angle: 12 o'clock, with 0° at 3 o'clock and angles growing
/// clockwise (y points down).
pub const PIE_START_DEGREES: f32 = 270.0;

/// Vertical divisor for the label baseline (`height / 1.7`).
const LABEL_BASELINE_DIVISOR: f32 = 1.7;

/// Construction-time look of the button.
#[derive(Clone, Copy)]
pub struct ButtonStyle<C> {
    /// Color under everything.
    pub container: C,
    /// Color of the left-to-right fill sweep.
    pub sweep: C,
    pub text: C,
    /// Color of the progress pie.
    pub circle: C,
    /// Label font; its glyph size is the text size.
    pub font: &'static MonoFont<'static>,
    pub idle_label: &'static str,
    pub loading_label: &'static str,
    pub circle_diameter: u32,
}

impl<C: fmt::Debug> fmt::Debug for ButtonStyle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonStyle")
            .field("container", &self.container)
            .field("sweep", &self.sweep)
            .field("text", &self.text)
            .field("circle", &self.circle)
            .field("font_size", &self.font.character_size)
            .field("idle_label", &self.idle_label)
            .field("loading_label", &self.loading_label)
            .field("circle_diameter", &self.circle_diameter)
            .finish()
    }
}

impl<C> ButtonStyle<C> {
    pub fn label_text(&self, label: Label) -> &'static str {
        match label {
            Label::Download => self.idle_label,
            Label::Loading => self.loading_label,
        }
    }

    /// Pixel width of `text` in the label font.
    pub fn text_width(&self, text: &str) -> u32 {
        let glyphs = text.chars().count() as u32;
        glyphs * self.font.character_size.width
            + glyphs.saturating_sub(1) * self.font.character_spacing
    }
}

/// Widget size from the last layout pass plus the fixed pie diameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WidgetGeometry {
    pub width: u32,
    pub height: u32,
    pub circle_diameter: u32,
}

impl WidgetGeometry {
    pub const fn new(width: u32, height: u32, circle_diameter: u32) -> Self {
        Self {
            width,
            height,
            circle_diameter,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// `progress / width`, clamped to `[0, 1]`; 0 for a zero-width widget.
    pub fn ratio(&self, progress: f32) -> f32 {
        if self.width == 0 {
            return 0.0;
        }
        let width = self.width as f32;
        progress.clamp(0.0, width) / width
    }
}

/// One primitive, in widget-local coordinates (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand<C> {
    /// Fill the whole widget.
    Fill { size: Size, color: C },
    /// Progress rectangle anchored at x = 0.
    Sweep { size: Size, color: C },
    /// Text centered on `anchor.x` with its baseline on `anchor.y`.
    Label {
        text: &'static str,
        anchor: Point,
        color: C,
    },
    /// Filled pie slice inside the square at `top_left`.
    Pie {
        top_left: Point,
        diameter: u32,
        start_degrees: f32,
        sweep_degrees: f32,
        color: C,
    },
}

/// Number of commands in every frame.
pub const FRAME_LEN: usize = 4;

/// Ordered draw list: fill, sweep, label, pie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<C> {
    commands: [DrawCommand<C>; FRAME_LEN],
}

impl<C: Copy> Frame<C> {
    pub fn commands(&self) -> &[DrawCommand<C>] {
        &self.commands
    }

    /// Width of the sweep rectangle.
    pub fn fill_width(&self) -> u32 {
        match self.commands[1] {
            DrawCommand::Sweep { size, .. } => size.width,
            _ => 0,
        }
    }

    pub fn sweep_degrees(&self) -> f32 {
        match self.commands[3] {
            DrawCommand::Pie { sweep_degrees, .. } => sweep_degrees,
            _ => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.commands[2] {
            DrawCommand::Label { text, .. } => text,
            _ => "",
        }
    }
}

impl<'a, C> IntoIterator for &'a Frame<C> {
    type Item = &'a DrawCommand<C>;
    type IntoIter = core::slice::Iter<'a, DrawCommand<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Compute the frame for the current state and progress.
pub fn render<C: PixelColor>(
    state: ButtonState,
    progress: f32,
    geometry: WidgetGeometry,
    style: &ButtonStyle<C>,
) -> Frame<C> {
    let WidgetGeometry {
        width,
        height,
        circle_diameter,
    } = geometry;
    let ratio = geometry.ratio(progress);

    let text = style.label_text(state.label());
    let center_x = i64::from(width / 2);
    let baseline_y = (height as f32 / LABEL_BASELINE_DIVISOR) as i32;

    let fill_width = (ratio * width as f32) as u32;
    let pie_left = center_x + i64::from(style.text_width(text) / 2);
    let pie_top = i64::from(height / 2) - i64::from(circle_diameter / 2);

    Frame {
        commands: [
            DrawCommand::Fill {
                size: geometry.size(),
                color: style.container,
            },
            DrawCommand::Sweep {
                size: Size::new(fill_width, height),
                color: style.sweep,
            },
            DrawCommand::Label {
                text,
                anchor: Point::new(to_coord(center_x), baseline_y),
                color: style.text,
            },
            DrawCommand::Pie {
                top_left: Point::new(to_coord(pie_left), to_coord(pie_top)),
                diameter: circle_diameter,
                start_degrees: PIE_START_DEGREES,
                sweep_degrees: ratio * 360.0,
                color: style.circle,
            },
        ],
    }
}

/// Pixel coordinate from widened arithmetic, saturating at the `i32` range.
fn to_coord(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
