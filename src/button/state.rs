//! Button state machine.
//!
//! Transitions are computed by [`transition`], a pure function that
//! returns the next state plus the ordered side effects the widget must
//! execute. Nothing fires on plain state writes; the only way to move is
//! through [`ButtonStateMachine`]'s methods.

use heapless::Vec;

/// Upper bound on effects emitted by one call (click emits four).
pub const MAX_EFFECTS: usize = 4;

/// Visual / interaction state of the button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Idle, ready for the next click.
    #[default]
    Completed,
    /// A click just landed; exists only long enough to start the clock.
    Clicked,
    /// Animation running, clicks ignored.
    Loading,
}

/// Which label the button shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Label {
    Download,
    Loading,
}

impl ButtonState {
    /// Label shown while in this state. `Clicked` never survives a call,
    /// so it shares the idle label.
    pub const fn label(self) -> Label {
        match self {
            ButtonState::Loading => Label::Loading,
            ButtonState::Completed | ButtonState::Clicked => Label::Download,
        }
    }
}

/// Inputs accepted by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    Click,
    /// The clock has started ticking (moves Clicked → Loading).
    AnimationStarted,
    /// The clock ran its last cycle to the end.
    AnimationComplete,
    Stop,
}

/// Side effect the widget executes after a transition, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SideEffect {
    DisableInput,
    EnableInput,
    ResetProgress,
    StartClock,
    CancelClock,
    ShowLabel(Label),
}

pub type Effects = Vec<SideEffect, MAX_EFFECTS>;

/// Result of applying one input to one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: ButtonState,
    pub effects: Effects,
}

impl Transition {
    fn stay(state: ButtonState) -> Self {
        Self {
            next: state,
            effects: Effects::new(),
        }
    }

    fn to(next: ButtonState, effects: &[SideEffect]) -> Self {
        let mut list = Effects::new();
        for effect in effects {
            // Every table entry below has at most MAX_EFFECTS items.
            let _ = list.push(*effect);
        }
        Self {
            next,
            effects: list,
        }
    }
}

/// Transition table. Any pair not listed is a no-op.
pub fn transition(state: ButtonState, input: Input) -> Transition {
    use ButtonState::*;
    use SideEffect::*;

    match (state, input) {
        (Completed, Input::Click) => Transition::to(
            Clicked,
            &[DisableInput, ResetProgress, StartClock],
        ),
        (Clicked, Input::AnimationStarted) => {
            Transition::to(Loading, &[ShowLabel(Label::Loading)])
        }
        (Loading, Input::AnimationComplete) => Transition::to(
            Completed,
            &[EnableInput, ResetProgress, ShowLabel(Label::Download)],
        ),
        (Clicked | Loading, Input::Stop) => Transition::to(
            Completed,
            &[CancelClock, EnableInput, ResetProgress, ShowLabel(Label::Download)],
        ),
        _ => Transition::stay(state),
    }
}

/// Holds the current [`ButtonState`] and applies inputs to it.
#[derive(Clone, Debug, Default)]
pub struct ButtonStateMachine {
    state: ButtonState,
}

impl ButtonStateMachine {
    pub const fn new() -> Self {
        Self {
            state: ButtonState::Completed,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Click intake. From `Completed` this runs Completed → Clicked →
    /// Loading and returns the effects of both steps in order; anywhere
    /// else it is ignored.
    pub fn on_click(&mut self) -> Effects {
        let clicked = self.apply(Input::Click);
        if clicked.is_empty() {
            return clicked;
        }
        let mut effects = clicked;
        for effect in self.apply(Input::AnimationStarted) {
            // Click (3) + start (1) == MAX_EFFECTS.
            let _ = effects.push(effect);
        }
        effects
    }

    /// Natural end of a finite animation: Loading → Completed.
    pub fn on_animation_complete(&mut self) -> Effects {
        self.apply(Input::AnimationComplete)
    }

    /// Forces `Completed`. Idempotent: no effects when already there.
    pub fn stop(&mut self) -> Effects {
        self.apply(Input::Stop)
    }

    fn apply(&mut self, input: Input) -> Effects {
        let Transition { next, effects } = transition(self.state, input);
        if next != self.state {
            debug!("button: {} -> {}", self.state, next);
        }
        self.state = next;
        effects
    }
}
