//! The indicator state record: every configurable and derived value for one
//! indicator strip, with clamping setters as the only mutation path.

use std::time::Duration;

use crate::animation::Easing;
use crate::style::AnimationKind;

/// Default dot radius, in layout units. Hosts decide what a unit is; the
/// terminal host maps one unit to one cell, so the defaults are cell-sized.
pub const DEFAULT_RADIUS: f32 = 1.0;
/// Default gap between adjacent dot edges, in layout units.
pub const DEFAULT_SPACING: f32 = 3.0;
/// Default discrete transition duration.
pub const DEFAULT_DURATION_MS: u64 = 350;
/// Default time without interaction before the strip is considered idle.
pub const DEFAULT_IDLE_MS: u64 = 3000;

/// Bounds for [`Indicator::set_scale_factor`].
pub const MIN_SCALE_FACTOR: f32 = 0.3;
pub const MAX_SCALE_FACTOR: f32 = 1.0;
pub const DEFAULT_SCALE_FACTOR: f32 = 0.7;

/// Axis along which the dots are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "horizontal" | "h" => Some(Orientation::Horizontal),
            "vertical" | "v" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// A plain RGB triple. The core never paints; it only stores and mixes
/// colors so hosts can map them onto whatever color type they render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string. Accepts "#RRGGBB", "RRGGBB", "#RGB", "RGB".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        match hex.len() {
            // Short form: RGB -> RRGGBB
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::new(r, g, b))
            }
            // Full form: RRGGBB
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Linear mix toward `other`; `t` is clamped to [0, 1].
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }
}

/// Edge paddings applied as a pure layout offset around the strip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Mutable state for one indicator strip.
///
/// Fields are private; setters clamp so the record is always renderable.
/// Positions are stored as-is — keeping them inside `[0, count - 1]` is the
/// controller's job, except that dropping `count` to zero clears all three.
#[derive(Debug, Clone)]
pub struct Indicator {
    count: usize,
    selected: Option<usize>,
    selecting: Option<usize>,
    last_selected: Option<usize>,

    radius: f32,
    spacing: f32,
    stroke: f32,
    scale_factor: f32,

    selected_color: Rgb,
    unselected_color: Rgb,

    orientation: Orientation,
    animation: AnimationKind,
    easing: Easing,
    animation_duration: Duration,
    idle_duration: Duration,

    interactive: bool,
    dynamic_count: bool,
    auto_visibility: bool,
    fade_on_idle: bool,
    idle: bool,

    insets: Insets,
}

impl Default for Indicator {
    fn default() -> Self {
        Self {
            count: 0,
            selected: None,
            selecting: None,
            last_selected: None,
            radius: DEFAULT_RADIUS,
            spacing: DEFAULT_SPACING,
            stroke: 0.0,
            scale_factor: DEFAULT_SCALE_FACTOR,
            selected_color: Rgb::new(0xd8, 0xa6, 0x57),
            unselected_color: Rgb::new(0x7c, 0x6f, 0x64),
            orientation: Orientation::Horizontal,
            animation: AnimationKind::None,
            easing: Easing::default(),
            animation_duration: Duration::from_millis(DEFAULT_DURATION_MS),
            idle_duration: Duration::from_millis(DEFAULT_IDLE_MS),
            interactive: false,
            dynamic_count: true,
            auto_visibility: true,
            fade_on_idle: false,
            idle: false,
            insets: Insets::default(),
        }
    }
}

impl Indicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Set the number of dots. Positions are left alone unless the count
    /// drops to zero, in which case all three become `None`.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if count == 0 {
            self.selected = None;
            self.selecting = None;
            self.last_selected = None;
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn set_selected(&mut self, position: Option<usize>) {
        self.selected = position;
    }

    pub fn selecting(&self) -> Option<usize> {
        self.selecting
    }

    pub fn set_selecting(&mut self, position: Option<usize>) {
        self.selecting = position;
    }

    pub fn last_selected(&self) -> Option<usize> {
        self.last_selected
    }

    pub fn set_last_selected(&mut self, position: Option<usize>) {
        self.last_selected = position;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Radius cannot go negative; shrinking it re-clamps the stroke.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
        self.stroke = self.stroke.min(self.radius);
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing.max(0.0);
    }

    pub fn stroke(&self) -> f32 {
        self.stroke
    }

    /// Stroke is kept inside `[0, radius]`.
    pub fn set_stroke(&mut self, stroke: f32) {
        self.stroke = stroke.clamp(0.0, self.radius);
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Scale factor is kept inside `[MIN_SCALE_FACTOR, MAX_SCALE_FACTOR]`.
    pub fn set_scale_factor(&mut self, factor: f32) {
        self.scale_factor = factor.clamp(MIN_SCALE_FACTOR, MAX_SCALE_FACTOR);
    }

    pub fn selected_color(&self) -> Rgb {
        self.selected_color
    }

    pub fn set_selected_color(&mut self, color: Rgb) {
        self.selected_color = color;
    }

    pub fn unselected_color(&self) -> Rgb {
        self.unselected_color
    }

    pub fn set_unselected_color(&mut self, color: Rgb) {
        self.unselected_color = color;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn animation(&self) -> AnimationKind {
        self.animation
    }

    pub fn set_animation(&mut self, animation: AnimationKind) {
        self.animation = animation;
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
    }

    pub fn idle_duration(&self) -> Duration {
        self.idle_duration
    }

    pub fn set_idle_duration(&mut self, duration: Duration) {
        self.idle_duration = duration;
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn dynamic_count(&self) -> bool {
        self.dynamic_count
    }

    pub fn set_dynamic_count(&mut self, dynamic_count: bool) {
        self.dynamic_count = dynamic_count;
    }

    pub fn auto_visibility(&self) -> bool {
        self.auto_visibility
    }

    pub fn set_auto_visibility(&mut self, auto_visibility: bool) {
        self.auto_visibility = auto_visibility;
    }

    pub fn fade_on_idle(&self) -> bool {
        self.fade_on_idle
    }

    pub fn set_fade_on_idle(&mut self, fade_on_idle: bool) {
        self.fade_on_idle = fade_on_idle;
    }

    pub fn idle(&self) -> bool {
        self.idle
    }

    pub fn set_idle(&mut self, idle: bool) {
        self.idle = idle;
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = Insets {
            left: insets.left.max(0.0),
            top: insets.top.max(0.0),
            right: insets.right.max(0.0),
            bottom: insets.bottom.max(0.0),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_clamped_to_radius() {
        let mut ind = Indicator::new();
        ind.set_radius(4.0);
        ind.set_stroke(10.0);
        assert_eq!(ind.stroke(), 4.0);

        ind.set_stroke(-1.0);
        assert_eq!(ind.stroke(), 0.0);
    }

    #[test]
    fn test_radius_shrink_reclamps_stroke() {
        let mut ind = Indicator::new();
        ind.set_radius(6.0);
        ind.set_stroke(5.0);
        ind.set_radius(3.0);
        assert_eq!(ind.stroke(), 3.0);
    }

    #[test]
    fn test_scale_factor_bounds() {
        let mut ind = Indicator::new();
        ind.set_scale_factor(0.05);
        assert_eq!(ind.scale_factor(), MIN_SCALE_FACTOR);
        ind.set_scale_factor(3.0);
        assert_eq!(ind.scale_factor(), MAX_SCALE_FACTOR);
        ind.set_scale_factor(0.5);
        assert_eq!(ind.scale_factor(), 0.5);
    }

    #[test]
    fn test_zero_count_clears_positions() {
        let mut ind = Indicator::new();
        ind.set_count(4);
        ind.set_selected(Some(2));
        ind.set_selecting(Some(3));
        ind.set_last_selected(Some(1));

        ind.set_count(0);
        assert_eq!(ind.selected(), None);
        assert_eq!(ind.selecting(), None);
        assert_eq!(ind.last_selected(), None);
    }

    #[test]
    fn test_negative_dimensions_clamped() {
        let mut ind = Indicator::new();
        ind.set_radius(-2.0);
        assert_eq!(ind.radius(), 0.0);
        ind.set_spacing(-2.0);
        assert_eq!(ind.spacing(), 0.0);
    }

    #[test]
    fn test_rgb_hex_parsing() {
        assert_eq!(Rgb::from_hex("#ff8000"), Some(Rgb::new(0xff, 0x80, 0x00)));
        assert_eq!(Rgb::from_hex("ff8000"), Some(Rgb::new(0xff, 0x80, 0x00)));
        assert_eq!(Rgb::from_hex("#f80"), Some(Rgb::new(0xff, 0x88, 0x00)));
        assert_eq!(Rgb::from_hex("not-a-color"), None);
    }

    #[test]
    fn test_rgb_mix_endpoints() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Rgb::new(100, 50, 25));
    }
}
