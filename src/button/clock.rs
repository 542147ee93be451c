//! Animation clock.
//!
//! Progress is a pure function of elapsed time: the host samples the
//! clock once per frame instead of the clock pushing values. That keeps
//! the renderer a pure reader and lets tests drive time by hand.

use crate::config::ANIMATION_DURATION_MS;

/// How many sweeps the clock runs before finishing on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Repeat {
    /// Restart from 0 forever; only `cancel` ends it.
    #[default]
    Forever,
    /// Finish after this many full sweeps.
    Times(u32),
}

/// One clock reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    /// Clock is not running.
    Idle,
    /// Progress in `[0, width)` for the current sweep.
    Running(f32),
    /// A `Repeat::Times` clock ran out.
    Finished,
}

/// Sweep timer driving the progress value from 0 to the widget width.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    duration_ms: u32,
    repeat: Repeat,
    started_at: Option<u64>,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(ANIMATION_DURATION_MS, Repeat::Forever)
    }
}

impl AnimationClock {
    /// A zero duration is bumped to 1 ms so sampling never divides by zero.
    pub const fn new(duration_ms: u32, repeat: Repeat) -> Self {
        Self {
            duration_ms: if duration_ms == 0 { 1 } else { duration_ms },
            repeat,
            started_at: None,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start (or restart) the sweep at `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.started_at = Some(now_ms);
    }

    /// Stop without finishing. No completion is reported.
    pub fn cancel(&mut self) {
        self.started_at = None;
    }

    /// Read the clock at `now_ms` for a widget `width` pixels wide.
    ///
    /// A `Finished` reading also stops the clock.
    pub fn sample(&mut self, now_ms: u64, width: u32) -> Sample {
        let Some(started_at) = self.started_at else {
            return Sample::Idle;
        };
        let elapsed = now_ms.saturating_sub(started_at);
        match progress_at(elapsed, self.duration_ms, self.repeat, width) {
            Some(progress) => Sample::Running(progress),
            None => {
                self.started_at = None;
                Sample::Finished
            }
        }
    }

    /// Lazy sequence of progress values taken every `step_ms`, starting
    /// at the beginning of a sweep.
    pub fn samples(&self, width: u32, step_ms: u32) -> ProgressSamples {
        ProgressSamples {
            duration_ms: self.duration_ms,
            repeat: self.repeat,
            width,
            step_ms: step_ms.max(1),
            elapsed_ms: 0,
        }
    }
}

/// Progress after `elapsed_ms`, or `None` once a finite clock is done.
fn progress_at(elapsed_ms: u64, duration_ms: u32, repeat: Repeat, width: u32) -> Option<f32> {
    let duration = u64::from(duration_ms);
    if let Repeat::Times(times) = repeat {
        if elapsed_ms / duration >= u64::from(times) {
            return None;
        }
    }
    let phase = elapsed_ms % duration;
    Some(phase as f32 / duration as f32 * width as f32)
}

/// Iterator over clock samples at a fixed step.
///
/// Infinite for `Repeat::Forever`; ends after the last sweep otherwise.
#[derive(Clone, Debug)]
pub struct ProgressSamples {
    duration_ms: u32,
    repeat: Repeat,
    width: u32,
    step_ms: u32,
    elapsed_ms: u64,
}

impl ProgressSamples {
    /// Rewind to the start of the first sweep.
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }
}

impl Iterator for ProgressSamples {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let progress = progress_at(self.elapsed_ms, self.duration_ms, self.repeat, self.width)?;
        self.elapsed_ms += u64::from(self.step_ms);
        Some(progress)
    }
}
