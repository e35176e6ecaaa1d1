use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use pagedot_core::{layout, AnimationKind, AppConfig, Insets, Orientation, PageIndicator, Point};

use crate::theme::Theme;

/// One page of the demo deck.
pub struct Page {
    pub title: String,
    pub lines: Vec<String>,
}

const DECK: &[(&str, &[&str])] = &[
    (
        "Welcome",
        &[
            "A tiny paged tour of the indicator strip below.",
            "",
            "Use h/l or the arrow keys to move between pages.",
        ],
    ),
    (
        "Click & scrub",
        &[
            "Click a dot to jump straight to its page.",
            "",
            "With interactive mode on (press i), drag across the",
            "strip to scrub pages in lock-step with the pointer.",
        ],
    ),
    (
        "Styles",
        &[
            "Press s to cycle through the transition styles:",
            "color, scale, worm, slide, fill, thin-worm, drop, swap.",
            "",
            "Each one recomputes the strip from a single progress value.",
        ],
    ),
    (
        "Orientation",
        &["Press o to flip the strip between horizontal and vertical."],
    ),
    (
        "The end",
        &[
            "That's the whole tour.",
            "",
            "Edit ~/.config/pagedot/config.toml to make any of this the default.",
        ],
    ),
];

fn demo_deck(count: usize) -> Vec<Page> {
    (0..count)
        .map(|i| match DECK.get(i) {
            Some((title, lines)) => Page {
                title: (*title).to_string(),
                lines: lines.iter().map(|s| (*s).to_string()).collect(),
            },
            None => Page {
                title: format!("Page {}", i + 1),
                lines: vec![format!("Demo page {} of {}.", i + 1, count)],
            },
        })
        .collect()
}

/// Application state for the demo pager.
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub pages: Vec<Page>,
    pub indicator: PageIndicator,
    pub current_page: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub status_message: Option<String>,
    status_ticks: u8,

    /// Cells the indicator strip was last drawn into; set by the widget so
    /// mouse coordinates can be translated into strip-local units.
    pub strip: Option<Rect>,

    /// The user-facing interactive toggle (the indicator's own flag is
    /// cleared and restored around discrete transitions).
    interactive_enabled: bool,
    /// Continuous dot-space position while a scrub drag is in flight.
    scrub_pos: Option<f32>,
    last_interaction: Instant,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        let pages = demo_deck(config.ui.pages.max(1));
        let mut indicator = PageIndicator::from_config(&config.indicator);
        // Breathing room at both ends of the strip.
        indicator
            .indicator_mut()
            .set_insets(Insets { left: 1.0, top: 0.0, right: 1.0, bottom: 0.0 });
        indicator.sync(pages.len(), 0);
        let interactive_enabled = indicator.indicator().interactive();

        Self {
            config,
            theme,
            pages,
            indicator,
            current_page: 0,
            should_quit: false,
            show_help: false,
            status_message: None,
            status_ticks: 0,
            strip: None,
            interactive_enabled,
            scrub_pos: None,
            last_interaction: Instant::now(),
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(AppConfig::default(), Theme::default())
    }

    // ── Navigation ────────────────────────────────────────────────────

    pub fn next_page(&mut self, now: Instant) {
        if self.current_page + 1 < self.pages.len() {
            self.goto_page(self.current_page + 1, now);
        }
    }

    pub fn prev_page(&mut self, now: Instant) {
        if self.current_page > 0 {
            self.goto_page(self.current_page - 1, now);
        }
    }

    pub fn goto_page(&mut self, index: usize, now: Instant) {
        let index = index.min(self.pages.len().saturating_sub(1));
        if index == self.current_page {
            return;
        }
        self.current_page = index;
        self.indicator.on_page_selected(index, now);
        self.touch(now);
    }

    // ── Runtime toggles ───────────────────────────────────────────────

    pub fn cycle_style(&mut self, backward: bool) {
        let all = AnimationKind::ALL;
        let current = self.indicator.indicator().animation();
        let idx = all.iter().position(|k| *k == current).unwrap_or(0);
        let next = if backward {
            all[(idx + all.len() - 1) % all.len()]
        } else {
            all[(idx + 1) % all.len()]
        };
        self.indicator.indicator_mut().set_animation(next);
        tracing::debug!(style = next.name(), "animation style changed");
        self.set_status(format!("Style: {}", next.name()));
    }

    pub fn toggle_orientation(&mut self) {
        let next = match self.indicator.indicator().orientation() {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        };
        self.indicator.indicator_mut().set_orientation(next);
        self.strip = None;
        self.set_status(format!("Orientation: {}", next.name()));
    }

    /// Grow the deck by one page; only honored while the indicator follows
    /// count changes.
    pub fn add_page(&mut self) {
        if !self.indicator.indicator().dynamic_count() {
            self.set_status("Dynamic count is off");
            return;
        }
        let n = self.pages.len() + 1;
        self.pages.push(Page {
            title: format!("Page {}", n),
            lines: vec![format!("Demo page {} of {}.", n, n)],
        });
        self.indicator.sync(self.pages.len(), self.current_page);
        self.set_status(format!("{} pages", self.pages.len()));
    }

    /// Shrink the deck by one page. The selection snaps back onto the deck
    /// when it was on the removed page.
    pub fn remove_page(&mut self) {
        if !self.indicator.indicator().dynamic_count() {
            self.set_status("Dynamic count is off");
            return;
        }
        if self.pages.len() <= 1 {
            return;
        }
        self.pages.pop();
        self.current_page = self.current_page.min(self.pages.len() - 1);
        self.indicator.sync(self.pages.len(), self.current_page);
        self.set_status(format!("{} pages", self.pages.len()));
    }

    pub fn toggle_interactive(&mut self) {
        self.interactive_enabled = !self.interactive_enabled;
        self.indicator.set_interactive(self.interactive_enabled);
        self.set_status(if self.interactive_enabled {
            "Interactive scrubbing on — drag across the strip"
        } else {
            "Interactive scrubbing off"
        });
    }

    // ── Status line ───────────────────────────────────────────────────

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = 25;
    }

    /// Decay the status message; called on idle ticks.
    pub fn tick_status(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    // ── Frame advancement ─────────────────────────────────────────────

    /// Advance the indicator's time-driven animation and the idle fade.
    /// Returns true while a transition still needs fast redraws.
    pub fn advance(&mut self, now: Instant) -> bool {
        let animating = self.indicator.tick(now);
        if !animating {
            // The pager settled; restore the configured interactive flag.
            self.indicator.on_scroll_idle();
        }

        let ind = self.indicator.indicator();
        if ind.fade_on_idle()
            && !ind.idle()
            && now.duration_since(self.last_interaction) >= ind.idle_duration()
        {
            self.indicator.indicator_mut().set_idle(true);
        }

        animating
    }

    fn touch(&mut self, now: Instant) {
        self.last_interaction = now;
        if self.indicator.indicator().idle() {
            self.indicator.indicator_mut().set_idle(false);
        }
    }

    // ── Mouse ─────────────────────────────────────────────────────────

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(point) = self.strip_point(mouse.column, mouse.row) {
                    if let Some(index) = self.indicator.index_at(point) {
                        self.goto_page(index, now);
                    } else if self.interactive_enabled {
                        self.scrub_pos = self.scrub_position(point);
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if !self.interactive_enabled {
                    return;
                }
                if let Some(point) = self.strip_point(mouse.column, mouse.row) {
                    if let Some(pos) = self.scrub_position(point) {
                        self.scrub_pos = Some(pos);
                        let position = pos.floor() as usize;
                        self.indicator.on_page_scrolled(position, pos.fract(), false);
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(pos) = self.scrub_pos.take() {
                    self.indicator.on_scroll_idle();
                    let index = (pos.round() as usize).min(self.pages.len().saturating_sub(1));
                    if index != self.current_page {
                        self.goto_page(index, now);
                    } else {
                        // Snap the half-finished scrub back onto the page.
                        self.indicator.set_progress(index, 1.0);
                    }
                }
            }
            _ => {}
        }
        self.touch(now);
    }

    /// Translate terminal cell coordinates into strip-local layout units.
    /// The strip renders one cell per layout unit along its axis, so the
    /// translation is a plain offset onto the dots' center line.
    fn strip_point(&self, column: u16, row: u16) -> Option<Point> {
        let rect = self.strip?;
        let inside = column >= rect.x
            && column < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height;
        if !inside {
            return None;
        }

        let ind = self.indicator.indicator();
        let point = match ind.orientation() {
            Orientation::Horizontal => Point::new(
                (column - rect.x) as f32 + 0.5,
                ind.insets().top + ind.radius(),
            ),
            Orientation::Vertical => Point::new(
                ind.insets().left + ind.radius(),
                (row - rect.y) as f32 + 0.5,
            ),
        };
        Some(point)
    }

    /// Continuous dot-space position of a strip-local point, clamped to
    /// the dot range.
    fn scrub_position(&self, point: Point) -> Option<f32> {
        let ind = self.indicator.indicator();
        if ind.count() == 0 {
            return None;
        }
        let along = match ind.orientation() {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        };
        let stride = ind.radius() * 2.0 + ind.spacing();
        let first = layout::axis_center(ind, 0);
        Some(((along - first) / stride).clamp(0.0, (ind.count() - 1) as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_clamps_to_deck() {
        let mut app = App::for_tests();
        let now = Instant::now();

        app.prev_page(now);
        assert_eq!(app.current_page, 0);

        app.goto_page(99, now);
        assert_eq!(app.current_page, app.pages.len() - 1);

        app.next_page(now);
        assert_eq!(app.current_page, app.pages.len() - 1);
    }

    #[test]
    fn test_goto_drives_the_indicator() {
        let mut app = App::for_tests();
        app.goto_page(2, Instant::now());
        assert_eq!(app.indicator.indicator().selected(), Some(2));
        assert_eq!(app.indicator.indicator().last_selected(), Some(0));
    }

    #[test]
    fn test_cycle_style_wraps() {
        let mut app = App::for_tests();
        let start = app.indicator.indicator().animation();
        for _ in 0..AnimationKind::ALL.len() {
            app.cycle_style(false);
        }
        assert_eq!(app.indicator.indicator().animation(), start);
    }

    #[test]
    fn test_click_on_dot_selects_page() {
        let mut app = App::for_tests();
        app.strip = Some(Rect::new(10, 5, 30, 2));

        let ind = app.indicator.indicator();
        let center = layout::axis_center(ind, 2);
        let column = 10 + center.floor() as u16;

        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row: 5,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        app.handle_mouse(mouse, Instant::now());
        assert_eq!(app.current_page, 2);
    }

    #[test]
    fn test_scrub_position_maps_centers_to_indices() {
        let mut app = App::for_tests();
        app.strip = Some(Rect::new(0, 0, 30, 2));

        let ind = app.indicator.indicator();
        let stride = ind.radius() * 2.0 + ind.spacing();
        let first = layout::axis_center(ind, 0);

        let at = |x: f32| app.scrub_position(Point::new(x, 1.0)).unwrap();
        assert!((at(first) - 0.0).abs() < 1e-4);
        assert!((at(first + stride) - 1.0).abs() < 1e-4);
        assert!((at(first + 1.5 * stride) - 1.5).abs() < 1e-4);
        // Clamped at both ends.
        assert_eq!(at(-100.0), 0.0);
        assert_eq!(at(1000.0), (ind.count() - 1) as f32);
    }
}
