//! Transition timing.
//!
//! The core never owns a timer. A [`TransitionDriver`] turns host ticks into
//! progress values; [`Timeline`] is the bundled frame-counting driver.

use crate::interpolate::Easing;

/// What a driver produced for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DriverStep {
    /// No transition is running
    Idle,
    /// Transition in flight with eased progress in `[0, 1]`
    Progress(f64),
    /// The final tick of a transition
    Complete,
}

/// Scheduler that owns timing for one transition at a time.
pub trait TransitionDriver {
    /// Start a new run, discarding any run in progress.
    fn begin(&mut self);

    /// Advance by one tick.
    fn tick(&mut self) -> DriverStep;

    /// Stop the current run without completing it.
    fn cancel(&mut self);

    /// Check whether a run is in progress.
    fn is_running(&self) -> bool;
}

/// Current state of the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineState {
    /// No run started, or the run was cancelled
    Stopped,
    /// Run in progress
    Running,
    /// Run reached its last frame
    Finished,
}

/// Frame-counting driver for fixed-duration transitions.
///
/// This driver does not handle timing directly. The caller is responsible
/// for calling `tick()` at the rate returned by `interval_ms()`.
///
/// ## Example
///
/// ```rust
/// use glyph_morph::{DriverStep, Timeline, TimelineState, TransitionDriver};
///
/// let mut timeline = Timeline::new(100, 50); // 100 ms at 50 FPS = 5 frames
/// timeline.begin();
/// assert_eq!(timeline.state(), TimelineState::Running);
///
/// for _ in 0..4 {
///     assert!(matches!(timeline.tick(), DriverStep::Progress(_)));
/// }
/// assert_eq!(timeline.tick(), DriverStep::Complete);
/// assert_eq!(timeline.tick(), DriverStep::Idle);
/// ```
#[derive(Clone, Debug)]
pub struct Timeline {
    /// Frames elapsed in the current run
    frame: u32,
    /// Frames in a full run
    frame_count: u32,
    /// Frames per second
    fps: u32,
    /// Run length in milliseconds
    duration_ms: u32,
    /// Curve applied to elapsed time
    easing: Easing,
    state: TimelineState,
}

impl Timeline {
    /// Create a timeline running `duration_ms` at `fps` with the default easing.
    pub fn new(duration_ms: u32, fps: u32) -> Self {
        let mut timeline = Self {
            frame: 0,
            frame_count: 1,
            fps: fps.max(1),
            duration_ms,
            easing: Easing::default(),
            state: TimelineState::Stopped,
        };
        timeline.recompute_frame_count();
        timeline
    }

    /// Builder-style easing override.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    fn recompute_frame_count(&mut self) {
        let frames = (self.duration_ms as u64 * self.fps as u64).div_ceil(1000);
        self.frame_count = frames.clamp(1, u32::MAX as u64) as u32;
    }

    /// Set the tick rate. Takes effect on the next run.
    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.max(1);
        self.recompute_frame_count();
    }

    /// Get the current FPS.
    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    #[inline]
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Number of ticks in one run. Always at least 1.
    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Frames elapsed in the current run.
    #[inline]
    pub fn current_frame(&self) -> u32 {
        self.frame
    }

    /// Get the interval in milliseconds between frames.
    ///
    /// Use this to configure your timer.
    #[inline]
    pub fn interval_ms(&self) -> u32 {
        (1000.0 / self.fps as f64).max(1.0) as u32
    }

    #[inline]
    pub fn state(&self) -> TimelineState {
        self.state
    }

    /// Elapsed fraction of the current run (0.0 - 1.0), before easing.
    pub fn position(&self) -> f64 {
        (self.frame as f64 / self.frame_count as f64).min(1.0)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(300, 60)
    }
}

impl TransitionDriver for Timeline {
    fn begin(&mut self) {
        self.frame = 0;
        self.state = TimelineState::Running;
    }

    fn tick(&mut self) -> DriverStep {
        if self.state != TimelineState::Running {
            return DriverStep::Idle;
        }

        self.frame += 1;
        if self.frame >= self.frame_count {
            self.state = TimelineState::Finished;
            DriverStep::Complete
        } else {
            DriverStep::Progress(self.easing.apply(self.position()))
        }
    }

    fn cancel(&mut self) {
        if self.state == TimelineState::Running {
            self.state = TimelineState::Stopped;
        }
    }

    #[inline]
    fn is_running(&self) -> bool {
        self.state == TimelineState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count_rounds_up() {
        assert_eq!(Timeline::new(300, 60).frame_count(), 18);
        assert_eq!(Timeline::new(100, 24).frame_count(), 3); // 2.4 -> 3
        assert_eq!(Timeline::new(0, 60).frame_count(), 1);
    }

    #[test]
    fn test_run_to_completion() {
        let mut timeline = Timeline::new(100, 40).with_easing(Easing::Linear);
        assert_eq!(timeline.frame_count(), 4);
        assert_eq!(timeline.tick(), DriverStep::Idle);

        timeline.begin();
        assert_eq!(timeline.tick(), DriverStep::Progress(0.25));
        assert_eq!(timeline.tick(), DriverStep::Progress(0.5));
        assert_eq!(timeline.tick(), DriverStep::Progress(0.75));
        assert_eq!(timeline.tick(), DriverStep::Complete);
        assert_eq!(timeline.state(), TimelineState::Finished);
        assert!(!timeline.is_running());
    }

    #[test]
    fn test_eased_progress_is_monotonic() {
        let mut timeline = Timeline::default();
        timeline.begin();
        let mut last = 0.0;
        while let DriverStep::Progress(t) = timeline.tick() {
            assert!(t >= last);
            assert!((0.0..=1.0).contains(&t));
            last = t;
        }
        assert_eq!(timeline.state(), TimelineState::Finished);
    }

    #[test]
    fn test_cancel_and_restart() {
        let mut timeline = Timeline::new(100, 40);
        timeline.begin();
        timeline.tick();
        timeline.cancel();
        assert_eq!(timeline.state(), TimelineState::Stopped);
        assert_eq!(timeline.tick(), DriverStep::Idle);

        timeline.begin();
        assert_eq!(timeline.current_frame(), 0);
        assert!(timeline.is_running());
    }

    #[test]
    fn test_interval_ms() {
        assert_eq!(Timeline::new(300, 24).interval_ms(), 41); // 1000/24 ≈ 41.67
        assert_eq!(Timeline::new(300, 60).interval_ms(), 16); // 1000/60 ≈ 16.67

        let mut timeline = Timeline::new(300, 0);
        assert_eq!(timeline.fps(), 1);
        timeline.set_fps(100);
        assert_eq!(timeline.frame_count(), 30);
    }
}
