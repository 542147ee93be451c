//! Host tests for the loading button.

use embedded_graphics::mock_display::MockDisplay;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::clock::{AnimationClock, Repeat, Sample};
use super::render::{render, ButtonStyle, DrawCommand, WidgetGeometry, PIE_START_DEGREES};
use super::state::{transition, ButtonState, ButtonStateMachine, Input, Label, SideEffect};
use super::LoadingButton;

fn style() -> ButtonStyle<BinaryColor> {
    ButtonStyle {
        container: BinaryColor::Off,
        sweep: BinaryColor::On,
        text: BinaryColor::On,
        circle: BinaryColor::On,
        font: &FONT_6X10,
        idle_label: "Download",
        loading_label: "Loading…",
        circle_diameter: 8,
    }
}

fn button(width: u32, height: u32) -> LoadingButton<BinaryColor> {
    let mut button = LoadingButton::new(style());
    button.layout(Size::new(width, height));
    button
}

// ════════════════════════════════════════════════════════════════════════
// State machine
// ════════════════════════════════════════════════════════════════════════

#[test]
fn machine_starts_completed() {
    assert_eq!(ButtonStateMachine::new().state(), ButtonState::Completed);
}

#[test]
fn click_from_completed_emits_effects_in_order() {
    let mut machine = ButtonStateMachine::new();
    let effects = machine.on_click();
    assert_eq!(machine.state(), ButtonState::Loading);
    assert_eq!(
        effects.as_slice(),
        &[
            SideEffect::DisableInput,
            SideEffect::ResetProgress,
            SideEffect::StartClock,
            SideEffect::ShowLabel(Label::Loading),
        ]
    );
}

#[test]
fn click_while_loading_is_ignored() {
    let mut machine = ButtonStateMachine::new();
    machine.on_click();
    for _ in 0..5 {
        assert!(machine.on_click().is_empty());
        assert_eq!(machine.state(), ButtonState::Loading);
    }
}

#[test]
fn stop_from_loading_cancels_clock_first() {
    let mut machine = ButtonStateMachine::new();
    machine.on_click();
    let effects = machine.stop();
    assert_eq!(machine.state(), ButtonState::Completed);
    assert_eq!(effects.first(), Some(&SideEffect::CancelClock));
    assert!(effects.contains(&SideEffect::ResetProgress));
    assert!(effects.contains(&SideEffect::ShowLabel(Label::Download)));
}

#[test]
fn stop_when_completed_is_idempotent() {
    let mut machine = ButtonStateMachine::new();
    assert!(machine.stop().is_empty());
    assert!(machine.stop().is_empty());
    assert_eq!(machine.state(), ButtonState::Completed);
}

#[test]
fn animation_complete_only_leaves_loading() {
    let mut machine = ButtonStateMachine::new();
    assert!(machine.on_animation_complete().is_empty());

    machine.on_click();
    let effects = machine.on_animation_complete();
    assert_eq!(machine.state(), ButtonState::Completed);
    assert_eq!(effects.first(), Some(&SideEffect::EnableInput));
    assert!(!effects.contains(&SideEffect::CancelClock));
}

#[test]
fn transition_table_has_no_hidden_edges() {
    let states = [ButtonState::Completed, ButtonState::Clicked, ButtonState::Loading];
    let inputs = [
        Input::Click,
        Input::AnimationStarted,
        Input::AnimationComplete,
        Input::Stop,
    ];
    let legal = [
        (ButtonState::Completed, Input::Click, ButtonState::Clicked),
        (ButtonState::Clicked, Input::AnimationStarted, ButtonState::Loading),
        (ButtonState::Clicked, Input::Stop, ButtonState::Completed),
        (ButtonState::Loading, Input::AnimationComplete, ButtonState::Completed),
        (ButtonState::Loading, Input::Stop, ButtonState::Completed),
    ];

    for state in states {
        for input in inputs {
            let t = transition(state, input);
            match legal.iter().find(|(s, i, _)| *s == state && *i == input) {
                Some((_, _, next)) => assert_eq!(t.next, *next),
                None => {
                    assert_eq!(t.next, state, "{state:?} + {input:?} must be a no-op");
                    assert!(t.effects.is_empty());
                }
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════
// Clock
// ════════════════════════════════════════════════════════════════════════

#[test]
fn idle_clock_reports_idle() {
    let mut clock = AnimationClock::default();
    assert!(!clock.is_running());
    assert_eq!(clock.sample(500, 200), Sample::Idle);
}

#[test]
fn endless_clock_wraps_every_duration() {
    let mut clock = AnimationClock::new(2000, Repeat::Forever);
    clock.start(100);
    assert_eq!(clock.sample(100, 200), Sample::Running(0.0));
    assert_eq!(clock.sample(1100, 200), Sample::Running(100.0));
    assert_eq!(clock.sample(2100, 200), Sample::Running(0.0));
    assert_eq!(clock.sample(1_000_100, 200), Sample::Running(0.0));
    assert!(clock.is_running());
}

#[test]
fn sample_before_start_time_is_zero() {
    let mut clock = AnimationClock::default();
    clock.start(1000);
    assert_eq!(clock.sample(10, 200), Sample::Running(0.0));
}

#[test]
fn finite_clock_finishes_and_stops() {
    let mut clock = AnimationClock::new(1000, Repeat::Times(2));
    clock.start(0);
    assert_eq!(clock.sample(1500, 100), Sample::Running(50.0));
    assert_eq!(clock.sample(2000, 100), Sample::Finished);
    assert!(!clock.is_running());
    assert_eq!(clock.sample(2500, 100), Sample::Idle);
}

#[test]
fn cancel_stops_without_finishing() {
    let mut clock = AnimationClock::default();
    clock.start(0);
    clock.cancel();
    assert_eq!(clock.sample(10_000, 200), Sample::Idle);
}

#[test]
fn zero_duration_is_clamped() {
    let clock = AnimationClock::new(0, Repeat::Forever);
    assert_eq!(clock.duration_ms(), 1);
}

#[test]
fn samples_iterator_is_endless_and_restartable() {
    let clock = AnimationClock::new(2000, Repeat::Forever);
    let mut samples = clock.samples(200, 500);

    let first: heapless::Vec<f32, 6> = samples.by_ref().take(6).collect();
    assert_eq!(first.as_slice(), &[0.0, 50.0, 100.0, 150.0, 0.0, 50.0]);
    assert_eq!(samples.elapsed_ms(), 3000);

    samples.restart();
    assert_eq!(samples.next(), Some(0.0));
}

#[test]
fn samples_iterator_ends_for_finite_clock() {
    let clock = AnimationClock::new(1000, Repeat::Times(1));
    assert_eq!(clock.samples(10, 250).count(), 4);
}

// ════════════════════════════════════════════════════════════════════════
// Renderer
// ════════════════════════════════════════════════════════════════════════

#[test]
fn frame_order_is_fill_sweep_label_pie() {
    let frame = render(
        ButtonState::Completed,
        0.0,
        WidgetGeometry::new(100, 40, 8),
        &style(),
    );
    let commands = frame.commands();
    assert!(matches!(commands[0], DrawCommand::Fill { .. }));
    assert!(matches!(commands[1], DrawCommand::Sweep { .. }));
    assert!(matches!(commands[2], DrawCommand::Label { .. }));
    assert!(matches!(commands[3], DrawCommand::Pie { .. }));
}

#[test]
fn zero_width_renders_empty_sweep() {
    let frame = render(
        ButtonState::Loading,
        50.0,
        WidgetGeometry::new(0, 40, 8),
        &style(),
    );
    assert_eq!(frame.fill_width(), 0);
    assert_eq!(frame.sweep_degrees(), 0.0);
}

#[test]
fn progress_past_width_is_clamped() {
    let frame = render(
        ButtonState::Loading,
        500.0,
        WidgetGeometry::new(100, 40, 8),
        &style(),
    );
    assert_eq!(frame.fill_width(), 100);
    assert_eq!(frame.sweep_degrees(), 360.0);
}

#[test]
fn label_and_pie_positions() {
    let style = style();
    let frame = render(
        ButtonState::Completed,
        0.0,
        WidgetGeometry::new(200, 80, 8),
        &style,
    );

    match frame.commands()[2] {
        DrawCommand::Label { text, anchor, .. } => {
            assert_eq!(text, "Download");
            // 80 / 1.7 = 47.05
            assert_eq!(anchor, Point::new(100, 47));
        }
        _ => panic!("expected label"),
    }

    match frame.commands()[3] {
        DrawCommand::Pie {
            top_left,
            diameter,
            start_degrees,
            ..
        } => {
            // "Download" is 8 glyphs of 6 px.
            assert_eq!(style.text_width("Download"), 48);
            assert_eq!(top_left, Point::new(100 + 24, 40 - 4));
            assert_eq!(diameter, 8);
            assert_eq!(start_degrees, PIE_START_DEGREES);
        }
        _ => panic!("expected pie"),
    }
}

#[test]
fn huge_geometry_saturates_positions() {
    let frame = render(
        ButtonState::Loading,
        1.0,
        WidgetGeometry::new(u32::MAX, u32::MAX, 8),
        &style(),
    );

    match frame.commands()[2] {
        DrawCommand::Label { anchor, .. } => assert_eq!(anchor, Point::new(i32::MAX, i32::MAX)),
        _ => panic!("expected label"),
    }
    match frame.commands()[3] {
        DrawCommand::Pie { top_left, .. } => {
            assert_eq!(top_left, Point::new(i32::MAX, i32::MAX - 4));
        }
        _ => panic!("expected pie"),
    }
}

#[test]
fn sweep_angle_is_monotonic_within_a_cycle() {
    let geometry = WidgetGeometry::new(200, 80, 8);
    let mut last = -1.0;
    for progress in AnimationClock::default().samples(200, 100).take(20) {
        let angle = render(ButtonState::Loading, progress, geometry, &style()).sweep_degrees();
        assert!(angle >= last);
        last = angle;
    }
    let wrapped = render(ButtonState::Loading, 0.0, geometry, &style()).sweep_degrees();
    assert_eq!(wrapped, 0.0);
}

// ════════════════════════════════════════════════════════════════════════
// Widget
// ════════════════════════════════════════════════════════════════════════

#[test]
fn click_disables_input_until_stopped() {
    let mut button = button(200, 80);
    assert!(button.is_enabled());

    assert!(button.on_click(0));
    assert!(button.is_loading());
    assert!(!button.is_enabled());
    assert!(!button.on_click(10));

    button.stop();
    assert!(button.is_enabled());
    assert!(button.on_click(20));
}

#[test]
fn repeated_clicks_do_not_restart_the_clock() {
    let mut button = button(200, 80);
    button.on_click(0);
    button.on_click(900);
    button.tick(1000);
    assert_eq!(button.progress(), 100.0);
}

#[test]
fn progress_increases_then_restarts() {
    let mut button = button(200, 80);
    button.on_click(0);

    let mut last = -1.0;
    for now in (0..2000).step_by(100) {
        button.tick(now);
        assert!(button.progress() > last);
        last = button.progress();
    }
    button.tick(2000);
    assert_eq!(button.progress(), 0.0);
    assert_eq!(button.state(), ButtonState::Loading);
}

#[test]
fn stop_always_resets() {
    let mut idle = button(200, 80);
    idle.stop();
    assert_eq!(idle.state(), ButtonState::Completed);
    assert_eq!(idle.progress(), 0.0);

    let mut loading = button(200, 80);
    loading.on_click(0);
    loading.tick(1500);
    loading.stop();
    assert_eq!(loading.state(), ButtonState::Completed);
    assert_eq!(loading.progress(), 0.0);
    assert!(!loading.clock().is_running());

    // Ticks after stop leave it alone.
    loading.tick(1700);
    assert_eq!(loading.progress(), 0.0);
}

#[test]
fn finite_clock_completes_on_its_own() {
    let mut button = LoadingButton::with_clock(style(), AnimationClock::new(1000, Repeat::Times(1)));
    button.layout(Size::new(100, 20));

    button.on_click(0);
    button.tick(500);
    assert_eq!(button.progress(), 50.0);

    button.tick(1000);
    assert_eq!(button.state(), ButtonState::Completed);
    assert_eq!(button.progress(), 0.0);
    assert!(button.is_enabled());
    assert_eq!(button.label(), "Download");
}

#[test]
fn layout_change_rescales_progress() {
    let mut button = button(200, 80);
    button.on_click(0);
    button.tick(1000);
    assert_eq!(button.progress(), 100.0);

    button.layout(Size::new(100, 80));
    button.tick(1000);
    assert_eq!(button.progress(), 50.0);
    assert_eq!(button.geometry().circle_diameter, 8);
}

#[test]
fn half_way_scenario() {
    let mut button = button(200, 80);
    button.on_click(0);
    button.tick(1000);

    let frame = button.render();
    assert_eq!(frame.fill_width(), 100);
    assert_eq!(frame.sweep_degrees(), 180.0);
    assert_eq!(frame.label(), "Loading…");

    button.stop();
    assert_eq!(button.progress(), 0.0);
    assert_eq!(button.label(), "Download");
    assert_eq!(button.render().label(), "Download");
    assert_eq!(button.state(), ButtonState::Completed);
}

// ════════════════════════════════════════════════════════════════════════
// Painter
// ════════════════════════════════════════════════════════════════════════

fn mock_display() -> MockDisplay<BinaryColor> {
    let mut display = MockDisplay::new();
    display.set_allow_overdraw(true);
    display.set_allow_out_of_bounds_drawing(true);
    display
}

#[test]
fn paint_draws_sweep_from_left_edge() {
    let mut button = button(64, 16);
    button.on_click(0);
    button.tick(1000);
    assert_eq!(button.progress(), 32.0);

    let mut display = mock_display();
    button.paint(Point::zero(), &mut display).unwrap();

    assert_eq!(display.get_pixel(Point::new(5, 0)), Some(BinaryColor::On));
    assert_eq!(display.get_pixel(Point::new(31, 15)), Some(BinaryColor::On));
    assert_eq!(display.get_pixel(Point::new(60, 0)), Some(BinaryColor::Off));
    assert_eq!(display.get_pixel(Point::new(5, 20)), None);
}

#[test]
fn paint_idle_button_leaves_sweep_area_clear() {
    let button = button(64, 16);
    let mut display = mock_display();
    button.paint(Point::zero(), &mut display).unwrap();

    assert_eq!(display.get_pixel(Point::new(5, 0)), Some(BinaryColor::Off));
    assert_eq!(display.get_pixel(Point::new(63, 15)), Some(BinaryColor::Off));
}

#[test]
fn paint_honours_origin() {
    let mut button = button(64, 16);
    button.on_click(0);
    button.tick(1000);

    let mut display = mock_display();
    button.paint(Point::new(0, 40), &mut display).unwrap();

    assert_eq!(display.get_pixel(Point::new(0, 39)), None);
    assert_eq!(display.get_pixel(Point::new(1, 40)), Some(BinaryColor::On));
    assert_eq!(display.get_pixel(Point::new(40, 40)), Some(BinaryColor::Off));
    assert_eq!(display.get_pixel(Point::new(1, 56)), None);
}
