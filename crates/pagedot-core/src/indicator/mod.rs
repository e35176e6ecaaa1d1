//! The indicator controller: owns the state record and the animation
//! coordinator, and exposes the operations a host wires its paged container
//! into.

pub mod coords;
pub mod state;

use std::time::Instant;

use crate::animation::{Animator, Mode};
use crate::config::IndicatorConfig;
use crate::layout::{self, Point, Size};
use crate::style::{self, AnimationKind, Frame};

use state::Indicator;

/// One indicator strip: state, coordinator, and geometry behind a single
/// owning handle. The host holds exactly one of these per strip and calls
/// in; the core holds no references back to the host.
#[derive(Debug, Clone, Default)]
pub struct PageIndicator {
    state: Indicator,
    animator: Animator,
    /// The host-level interactive setting. The discrete path temporarily
    /// clears the state flag; this is what scroll-idle restores.
    interaction_enabled: bool,
}

impl PageIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &IndicatorConfig) -> Self {
        let mut this = Self::new();
        config.apply(&mut this.state);
        this.interaction_enabled = this.state.interactive();
        this
    }

    pub fn indicator(&self) -> &Indicator {
        &self.state
    }

    pub fn indicator_mut(&mut self) -> &mut Indicator {
        &mut self.state
    }

    pub fn mode(&self) -> Mode {
        self.animator.mode()
    }

    /// True while a time-driven transition still needs `tick()` calls.
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Enable or disable interactive (scrub-driven) animation.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interaction_enabled = interactive;
        self.state.set_interactive(interactive);
    }

    /// Discrete selection with a time-driven transition. Out-of-range
    /// positions clamp to the nearest end; re-selecting the current or
    /// in-flight target is a no-op.
    pub fn select(&mut self, position: usize, now: Instant) {
        let Some(position) = self.adjust(position) else {
            return;
        };
        if Some(position) == self.state.selected() || Some(position) == self.state.selecting() {
            return;
        }

        // Scroll events from the container echo a discrete selection; keep
        // them from fighting the running transition until the scroll idles.
        self.state.set_interactive(false);

        self.state.set_last_selected(self.state.selected());
        self.state.set_selecting(Some(position));
        self.state.set_selected(Some(position));
        tracing::debug!(position, "page selected");

        self.animator
            .basic(now, self.state.animation_duration(), self.state.easing());
    }

    /// Selection without any animation.
    pub fn select_immediate(&mut self, position: usize) {
        let Some(position) = self.adjust(position) else {
            return;
        };
        if Some(position) == self.state.selected() || Some(position) == self.state.selecting() {
            return;
        }

        self.state.set_last_selected(self.state.selected());
        self.state.set_selecting(Some(position));
        self.state.set_selected(Some(position));
        self.animator.end();
    }

    /// Clear the selection of all indicators.
    pub fn clear_selection(&mut self) {
        self.state.set_interactive(false);
        self.state.set_last_selected(None);
        self.state.set_selecting(None);
        self.state.set_selected(None);
        self.animator.end();
    }

    /// Interactive path: drive the transition toward `selecting` at
    /// `progress`. A no-op while interactive animation is disabled. Commits
    /// exactly when progress reaches 1.
    pub fn set_progress(&mut self, selecting: usize, progress: f32) {
        if !self.state.interactive() {
            return;
        }
        let Some(selecting) = self.adjust(selecting) else {
            return;
        };
        let progress = progress.clamp(0.0, 1.0);

        if progress >= 1.0 {
            self.state.set_last_selected(self.state.selected());
            self.state.set_selected(Some(selecting));
        }
        self.state.set_selecting(Some(selecting));

        let reverse_capable = self.state.animation().style().is_reverse_capable();
        self.animator.interactive(progress, reverse_capable);
    }

    /// Container event: a page was selected (discretely).
    pub fn on_page_selected(&mut self, position: usize, now: Instant) {
        self.select(position, now);
    }

    /// Container event: scroll moved. Forwarded into the interactive path
    /// only when interactive tracking is on and a style is active.
    pub fn on_page_scrolled(&mut self, position: usize, offset: f32, reversed: bool) {
        if !self.state.interactive() || self.state.animation() == AnimationKind::None {
            return;
        }
        let (selecting, progress) = coords::progress(&self.state, position, offset, reversed);
        self.set_progress(selecting, progress);
    }

    /// Container event: scrolling settled. Restores the host-configured
    /// interactive flag that the discrete path temporarily cleared.
    pub fn on_scroll_idle(&mut self) {
        self.state.set_interactive(self.interaction_enabled);
    }

    /// Container event: the page set changed. Re-derives count and
    /// selection and settles immediately, superseding any transition.
    pub fn sync(&mut self, count: usize, selected: usize) {
        self.state.set_count(count);
        if count > 0 {
            let position = selected.min(count - 1);
            self.state.set_selected(Some(position));
            self.state.set_selecting(Some(position));
            self.state.set_last_selected(Some(position));
        }
        tracing::debug!(count, "page set changed");
        self.animator.end();
    }

    /// Advance a running time-driven transition. Returns true while the
    /// frame is still changing and a repaint is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.animator.tick(now)
    }

    /// Render attributes for the current instant, computed from one
    /// consistent snapshot of the transition positions and progress.
    pub fn frame(&self) -> Frame {
        match self.animator.mode() {
            Mode::Idle => style::settled_frame(&self.state),
            Mode::Basic => style::frame(
                &self.state,
                self.state.last_selected(),
                self.state.selecting(),
                self.animator.progress(),
            ),
            Mode::Interactive => style::frame(
                &self.state,
                self.state.selected(),
                self.state.selecting(),
                self.animator.progress(),
            ),
        }
    }

    pub fn measure(&self, max: Size) -> Size {
        layout::measure(&self.state, max)
    }

    /// Resolve a point in strip-local coordinates to a dot index.
    pub fn index_at(&self, point: Point) -> Option<usize> {
        layout::index_at(&self.state, &self.frame(), point)
    }

    /// Auto-visibility: a strip with one page or fewer has nothing to
    /// navigate.
    pub fn visible(&self) -> bool {
        !self.state.auto_visibility() || self.state.count() > 1
    }

    fn adjust(&self, position: usize) -> Option<usize> {
        if self.state.count() == 0 {
            None
        } else {
            Some(position.min(self.state.count() - 1))
        }
    }
}
