//! Replays a [`Frame`] onto an `embedded-graphics` draw target.

use embedded_graphics::geometry::Angle;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Sector};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use super::render::{DrawCommand, Frame};

/// Draw `frame` with its top-left corner at `origin`.
pub fn paint<C, D>(
    frame: &Frame<C>,
    font: &MonoFont<'_>,
    origin: Point,
    target: &mut D,
) -> Result<(), D::Error>
where
    C: PixelColor,
    D: DrawTarget<Color = C>,
{
    for command in frame {
        match *command {
            DrawCommand::Fill { size, color } | DrawCommand::Sweep { size, color } => {
                Rectangle::new(origin, size)
                    .into_styled(PrimitiveStyle::with_fill(color))
                    .draw(target)?;
            }
            DrawCommand::Label {
                text,
                anchor,
                color,
            } => {
                let character_style = MonoTextStyle::new(font, color);
                let text_style = TextStyleBuilder::new()
                    .alignment(Alignment::Center)
                    .baseline(Baseline::Alphabetic)
                    .build();
                Text::with_text_style(text, origin + anchor, character_style, text_style)
                    .draw(target)?;
            }
            DrawCommand::Pie {
                top_left,
                diameter,
                start_degrees,
                sweep_degrees,
                color,
            } => {
                // Nothing to show until the first tick moves the sweep.
                if diameter == 0 || sweep_degrees <= 0.0 {
                    continue;
                }
                Sector::new(
                    origin + top_left,
                    diameter,
                    Angle::from_degrees(start_degrees),
                    Angle::from_degrees(sweep_degrees),
                )
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(target)?;
            }
        }
    }
    Ok(())
}
