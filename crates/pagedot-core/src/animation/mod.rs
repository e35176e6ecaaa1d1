//! Animation coordinator: the state machine that turns page-change events
//! into a single progress value for the active style.
//!
//! Two drive modes share one progress scalar. `basic()` runs on an injected
//! clock — the host feeds `Instant`s into `tick()` each frame — while
//! `interactive()` is fed progress synchronously from scroll offsets and
//! never touches the clock. Only one mode is active at a time; starting a
//! new transition supersedes whatever is in flight.

pub mod easing;

pub use easing::Easing;

use std::time::{Duration, Instant};

/// Drive mode of the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Basic,
    Interactive,
}

/// Active time-driven run state.
#[derive(Debug, Clone)]
struct BasicRun {
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl BasicRun {
    /// Raw progress ratio at `now`, clamped to [0, 1]. Zero durations are
    /// complete immediately.
    fn ratio(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Coordinator over `(mode, progress)`.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    mode: Mode,
    progress: f32,
    run: Option<BasicRun>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current transition progress. Reads 1.0 once settled.
    pub fn progress(&self) -> f32 {
        if self.mode == Mode::Idle { 1.0 } else { self.progress }
    }

    /// True while a time-driven run still needs `tick()` calls.
    pub fn is_running(&self) -> bool {
        self.mode == Mode::Basic && self.run.is_some()
    }

    /// Start a discrete, time-driven transition. Supersedes any transition
    /// already in flight (last call wins; nothing is queued).
    pub fn basic(&mut self, now: Instant, duration: Duration, easing: Easing) {
        self.run = Some(BasicRun { started: now, duration, easing });
        self.mode = Mode::Basic;
        self.progress = 0.0;
        // A zero duration settles on the spot.
        self.tick(now);
    }

    /// Advance a time-driven run to `now`. Returns true while the frame is
    /// still changing (including the settling frame itself).
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(run) = &self.run else {
            return false;
        };
        if self.mode != Mode::Basic {
            self.run = None;
            return false;
        }

        let ratio = run.ratio(now);
        self.progress = run.easing.apply(ratio);

        if ratio >= 1.0 {
            self.progress = 1.0;
            self.run = None;
            self.mode = Mode::Idle;
        }
        true
    }

    /// Drive the transition from an externally supplied progress value.
    /// Cancels any time-driven run. Backward motion is accepted only when
    /// the active style reports itself reverse-capable. Reaching 1.0
    /// settles back to idle; anything below never commits.
    pub fn interactive(&mut self, progress: f32, reverse_capable: bool) -> f32 {
        self.run = None;
        let progress = progress.clamp(0.0, 1.0);

        if self.mode == Mode::Interactive && !reverse_capable && progress < self.progress {
            return self.progress;
        }

        self.progress = progress;
        self.mode = if progress >= 1.0 { Mode::Idle } else { Mode::Interactive };
        progress
    }

    /// Immediate, synchronous settle — no time-based or incremental step.
    pub fn end(&mut self) {
        self.run = None;
        self.mode = Mode::Idle;
        self.progress = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_basic_run_advances_and_settles() {
        let start = Instant::now();
        let mut anim = Animator::new();
        anim.basic(start, ms(100), Easing::Linear);

        assert_eq!(anim.mode(), Mode::Basic);
        assert!(anim.tick(start + ms(50)));
        assert!((anim.progress() - 0.5).abs() < 1e-6);

        assert!(anim.tick(start + ms(100)));
        assert_eq!(anim.mode(), Mode::Idle);
        assert_eq!(anim.progress(), 1.0);
        assert!(!anim.tick(start + ms(150)));
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let start = Instant::now();
        let mut anim = Animator::new();
        anim.basic(start, ms(0), Easing::Cubic);
        assert_eq!(anim.mode(), Mode::Idle);
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_new_basic_supersedes_running_one() {
        let start = Instant::now();
        let mut anim = Animator::new();
        anim.basic(start, ms(100), Easing::Linear);
        anim.tick(start + ms(60));

        // Restarting wins; progress restarts from zero on the new clock.
        anim.basic(start + ms(60), ms(100), Easing::Linear);
        anim.tick(start + ms(70));
        assert!((anim.progress() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_interactive_commits_exactly_at_one() {
        let mut anim = Animator::new();
        anim.interactive(0.0, true);
        assert_eq!(anim.mode(), Mode::Interactive);
        anim.interactive(0.5, true);
        assert_eq!(anim.mode(), Mode::Interactive);
        anim.interactive(1.0, true);
        assert_eq!(anim.mode(), Mode::Idle);
    }

    #[test]
    fn test_interactive_reversal() {
        let mut anim = Animator::new();
        anim.interactive(0.7, true);
        assert_eq!(anim.interactive(0.3, true), 0.3);

        // Without reverse capability backward motion is held.
        anim.interactive(0.7, false);
        assert_eq!(anim.interactive(0.3, false), 0.7);
    }

    #[test]
    fn test_interactive_is_idempotent() {
        let mut anim = Animator::new();
        anim.interactive(0.4, true);
        let first = anim.progress();
        anim.interactive(0.4, true);
        assert_eq!(anim.progress(), first);
    }

    #[test]
    fn test_interactive_cancels_basic_run() {
        let start = Instant::now();
        let mut anim = Animator::new();
        anim.basic(start, ms(100), Easing::Linear);
        anim.interactive(0.2, true);
        assert_eq!(anim.mode(), Mode::Interactive);
        assert!(!anim.is_running());
    }

    #[test]
    fn test_end_settles_from_any_mode() {
        let start = Instant::now();
        let mut anim = Animator::new();
        anim.basic(start, ms(100), Easing::Linear);
        anim.end();
        assert_eq!(anim.mode(), Mode::Idle);
        assert_eq!(anim.progress(), 1.0);

        anim.interactive(0.3, true);
        anim.end();
        assert_eq!(anim.mode(), Mode::Idle);
    }
}
