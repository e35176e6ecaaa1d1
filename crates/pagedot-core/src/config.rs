use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::animation::Easing;
use crate::indicator::state::{Indicator, Orientation, Rgb};
use crate::style::AnimationKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub indicator: IndicatorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Indicator appearance and behavior. Enum-valued fields are stored as
/// names so hand-edited files fail soft: unknown names fall back to the
/// default with a warning instead of rejecting the whole file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Dot radius in layout units
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Gap between adjacent dot edges
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    /// Outline width for outline-style rendering (0 = solid)
    #[serde(default)]
    pub stroke: f32,
    /// Unselected/selected size ratio used by the scale style
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
    /// "horizontal" or "vertical"
    #[serde(default = "default_orientation")]
    pub orientation: String,
    /// Transition style name (see `pagedot styles`)
    #[serde(default = "default_animation")]
    pub animation: String,
    /// Easing curve for discrete transitions
    #[serde(default = "default_easing")]
    pub easing: String,
    /// Discrete transition duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Time without interaction before the strip is considered idle
    #[serde(default = "default_idle_ms")]
    pub idle_duration_ms: u64,
    /// Track swipe/scrub progress continuously
    #[serde(default)]
    pub interactive: bool,
    /// Follow page-count changes from the container
    #[serde(default = "default_true")]
    pub dynamic_count: bool,
    /// Hide the strip while it has one page or fewer
    #[serde(default = "default_true")]
    pub auto_visibility: bool,
    /// Dim the strip after the idle duration passes
    #[serde(default)]
    pub fade_on_idle: bool,
    /// Hex color for the selected dot
    #[serde(default = "default_selected_color")]
    pub selected_color: String,
    /// Hex color for unselected dots
    #[serde(default = "default_unselected_color")]
    pub unselected_color: String,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            spacing: default_spacing(),
            stroke: 0.0,
            scale_factor: default_scale_factor(),
            orientation: default_orientation(),
            animation: default_animation(),
            easing: default_easing(),
            duration_ms: default_duration_ms(),
            idle_duration_ms: default_idle_ms(),
            interactive: false,
            dynamic_count: default_true(),
            auto_visibility: default_true(),
            fade_on_idle: false,
            selected_color: default_selected_color(),
            unselected_color: default_unselected_color(),
        }
    }
}

impl IndicatorConfig {
    /// Apply this configuration onto a state record. Every value goes
    /// through the record's own setters, so the usual clamps hold.
    pub fn apply(&self, ind: &mut Indicator) {
        ind.set_radius(self.radius);
        ind.set_spacing(self.spacing);
        ind.set_stroke(self.stroke);
        ind.set_scale_factor(self.scale_factor);
        ind.set_animation_duration(Duration::from_millis(self.duration_ms));
        ind.set_idle_duration(Duration::from_millis(self.idle_duration_ms));
        ind.set_interactive(self.interactive);
        ind.set_dynamic_count(self.dynamic_count);
        ind.set_auto_visibility(self.auto_visibility);
        ind.set_fade_on_idle(self.fade_on_idle);

        match Orientation::from_name(&self.orientation) {
            Some(orientation) => ind.set_orientation(orientation),
            None => tracing::warn!(value = %self.orientation, "unknown orientation, keeping default"),
        }
        match AnimationKind::from_name(&self.animation) {
            Some(kind) => ind.set_animation(kind),
            None => tracing::warn!(value = %self.animation, "unknown animation style, keeping default"),
        }
        match Easing::from_name(&self.easing) {
            Some(easing) => ind.set_easing(easing),
            None => tracing::warn!(value = %self.easing, "unknown easing, keeping default"),
        }
        match Rgb::from_hex(&self.selected_color) {
            Some(color) => ind.set_selected_color(color),
            None => tracing::warn!(value = %self.selected_color, "invalid selected color, keeping default"),
        }
        match Rgb::from_hex(&self.unselected_color) {
            Some(color) => ind.set_unselected_color(color),
            None => tracing::warn!(value = %self.unselected_color, "invalid unselected color, keeping default"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a transition is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Number of pages in the generated demo deck
    #[serde(default = "default_pages")]
    pub pages: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            pages: default_pages(),
        }
    }
}

fn default_radius() -> f32 {
    crate::indicator::state::DEFAULT_RADIUS
}

fn default_spacing() -> f32 {
    crate::indicator::state::DEFAULT_SPACING
}

fn default_scale_factor() -> f32 {
    crate::indicator::state::DEFAULT_SCALE_FACTOR
}

fn default_orientation() -> String {
    "horizontal".to_string()
}

fn default_animation() -> String {
    "worm".to_string()
}

fn default_easing() -> String {
    "cubic".to_string()
}

fn default_duration_ms() -> u64 {
    crate::indicator::state::DEFAULT_DURATION_MS
}

fn default_idle_ms() -> u64 {
    crate::indicator::state::DEFAULT_IDLE_MS
}

fn default_true() -> bool {
    true
}

fn default_selected_color() -> String {
    "#d8a657".to_string()
}

fn default_unselected_color() -> String {
    "#7c6f64".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u16 {
    60
}

fn default_pages() -> usize {
    5
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Configuration file path: ~/.config/pagedot/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagedot")
            .join("config.toml")
    }

    /// Idle tick interval
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    /// Tick interval while a transition runs
    pub fn animation_tick_rate(&self) -> Duration {
        if self.ui.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.ui.animation_fps as u64)
        }
    }
}
