//! Animated download button.
//!
//! [`LoadingButton`] ties the pieces together:
//!
//! - [`state`]: Completed / Clicked / Loading and the transition table
//! - [`clock`]: elapsed time → progress, sampled once per frame
//! - [`render`]: progress + geometry → four draw commands
//! - [`paint`]: draw commands → any `embedded-graphics` target
//!
//! The host owns the button, forwards clicks and `stop` calls, reports
//! its size on layout, ticks it every frame and paints what `render`
//! returns. Everything runs on one task; nothing blocks.

pub mod clock;
pub mod paint;
pub mod render;
pub mod state;

#[cfg(test)]
mod tests;

use embedded_graphics::prelude::{DrawTarget, PixelColor, Point, Size};

use clock::{AnimationClock, Sample};
use render::{ButtonStyle, Frame, WidgetGeometry};
use state::{ButtonState, ButtonStateMachine, Effects, Label, SideEffect};

/// Progress button with a looping sweep animation.
#[derive(Clone, Debug)]
pub struct LoadingButton<C> {
    machine: ButtonStateMachine,
    clock: AnimationClock,
    style: ButtonStyle<C>,
    geometry: WidgetGeometry,
    progress: f32,
    label: Label,
    enabled: bool,
}

impl<C: PixelColor> LoadingButton<C> {
    /// Button with the default endless clock. Size is zero until the
    /// first [`layout`](Self::layout).
    pub fn new(style: ButtonStyle<C>) -> Self {
        Self::with_clock(style, AnimationClock::default())
    }

    pub fn with_clock(style: ButtonStyle<C>, clock: AnimationClock) -> Self {
        Self {
            machine: ButtonStateMachine::new(),
            clock,
            geometry: WidgetGeometry::new(0, 0, style.circle_diameter),
            style,
            progress: 0.0,
            label: Label::Download,
            enabled: true,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.machine.state()
    }

    pub fn is_loading(&self) -> bool {
        self.machine.state() == ButtonState::Loading
    }

    /// False while the animation runs.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn label(&self) -> &'static str {
        self.style.label_text(self.label)
    }

    pub fn geometry(&self) -> WidgetGeometry {
        self.geometry
    }

    pub fn style(&self) -> &ButtonStyle<C> {
        &self.style
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Record the size handed out by the host's layout pass.
    pub fn layout(&mut self, size: Size) {
        self.geometry = WidgetGeometry::new(size.width, size.height, self.style.circle_diameter);
    }

    /// Click intake. Returns `true` when the click started a new
    /// animation, `false` when it was ignored (already loading).
    pub fn on_click(&mut self, now_ms: u64) -> bool {
        if !self.enabled {
            return false;
        }
        let effects = self.machine.on_click();
        let accepted = !effects.is_empty();
        self.run(effects, now_ms);
        accepted
    }

    /// Force the idle state and cancel the clock. Safe to call at any
    /// time; does nothing when already idle.
    pub fn stop(&mut self) {
        let effects = self.machine.stop();
        if !effects.is_empty() {
            info!("button: stopped at {}px", self.progress);
        }
        self.run(effects, 0);
    }

    /// Sample the clock. Call once per frame before rendering.
    pub fn tick(&mut self, now_ms: u64) {
        if self.machine.state() != ButtonState::Loading {
            return;
        }
        match self.clock.sample(now_ms, self.geometry.width) {
            Sample::Running(progress) => self.progress = progress,
            Sample::Finished => {
                let effects = self.machine.on_animation_complete();
                self.run(effects, now_ms);
            }
            Sample::Idle => {}
        }
    }

    /// Geometry of the current frame.
    pub fn render(&self) -> Frame<C> {
        render::render(self.machine.state(), self.progress, self.geometry, &self.style)
    }

    /// Render and draw the current frame at `origin`.
    pub fn paint<D>(&self, origin: Point, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        paint::paint(&self.render(), self.style.font, origin, target)
    }

    fn run(&mut self, effects: Effects, now_ms: u64) {
        for effect in effects {
            match effect {
                SideEffect::DisableInput => self.enabled = false,
                SideEffect::EnableInput => self.enabled = true,
                SideEffect::ResetProgress => self.progress = 0.0,
                SideEffect::StartClock => self.clock.start(now_ms),
                SideEffect::CancelClock => self.clock.cancel(),
                SideEffect::ShowLabel(label) => self.label = label,
            }
        }
    }
}
