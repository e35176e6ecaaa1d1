//! Animation styles: one strategy per named transition style.
//!
//! Every style is a pure function of `(previous, target, progress)` over the
//! current [`Indicator`] state. At progress 0 the output equals the settled
//! frame for the previous index, at progress 1 the settled frame for the
//! target — styles guarantee this by returning their own `settled()` frame
//! at the clamped endpoints.

pub mod attributes;

mod blend;
mod drop;
mod fill;
mod slide;
mod swap;
mod worm;

pub use attributes::{Dot, Frame, Marker};

use crate::indicator::state::Indicator;

/// A named transition style computing per-indicator render attributes.
pub trait AnimationStyle {
    /// Render attributes for all indicators at `progress` between the two
    /// endpoints. A missing endpoint (`None`, or an index beyond the count)
    /// contributes nothing to the frame.
    fn compute(
        &self,
        ind: &Indicator,
        prev: Option<usize>,
        target: Option<usize>,
        progress: f32,
    ) -> Frame;

    /// The fully-settled frame once `selected` is committed.
    fn settled(&self, ind: &Indicator, selected: Option<usize>) -> Frame {
        base_settled(ind, selected)
    }

    /// Whether progress may safely run backward (swipe direction reversal).
    fn is_reverse_capable(&self) -> bool {
        true
    }
}

/// The closed set of transition styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationKind {
    #[default]
    None,
    Color,
    Scale,
    Worm,
    Slide,
    Fill,
    ThinWorm,
    Drop,
    Swap,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 9] = [
        AnimationKind::None,
        AnimationKind::Color,
        AnimationKind::Scale,
        AnimationKind::Worm,
        AnimationKind::Slide,
        AnimationKind::Fill,
        AnimationKind::ThinWorm,
        AnimationKind::Drop,
        AnimationKind::Swap,
    ];

    pub fn style(self) -> &'static dyn AnimationStyle {
        static WORM: worm::WormStyle = worm::WormStyle { thin: false };
        static THIN_WORM: worm::WormStyle = worm::WormStyle { thin: true };

        match self {
            AnimationKind::None => &NoneStyle,
            AnimationKind::Color => &blend::ColorStyle,
            AnimationKind::Scale => &blend::ScaleStyle,
            AnimationKind::Worm => &WORM,
            AnimationKind::Slide => &slide::SlideStyle,
            AnimationKind::Fill => &fill::FillStyle,
            AnimationKind::ThinWorm => &THIN_WORM,
            AnimationKind::Drop => &drop::DropStyle,
            AnimationKind::Swap => &swap::SwapStyle,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationKind::None => "none",
            AnimationKind::Color => "color",
            AnimationKind::Scale => "scale",
            AnimationKind::Worm => "worm",
            AnimationKind::Slide => "slide",
            AnimationKind::Fill => "fill",
            AnimationKind::ThinWorm => "thin-worm",
            AnimationKind::Drop => "drop",
            AnimationKind::Swap => "swap",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "none" => Some(AnimationKind::None),
            "color" => Some(AnimationKind::Color),
            "scale" => Some(AnimationKind::Scale),
            "worm" => Some(AnimationKind::Worm),
            "slide" => Some(AnimationKind::Slide),
            "fill" => Some(AnimationKind::Fill),
            "thin-worm" | "thin_worm" | "thinworm" => Some(AnimationKind::ThinWorm),
            "drop" => Some(AnimationKind::Drop),
            "swap" => Some(AnimationKind::Swap),
            _ => None,
        }
    }

    /// One-line description, shown by the CLI style listing.
    pub fn description(self) -> &'static str {
        match self {
            AnimationKind::None => "no animation; the selection jumps",
            AnimationKind::Color => "cross-fades the endpoint colors",
            AnimationKind::Scale => "shrinks the old dot while growing the new one",
            AnimationKind::Worm => "an elongated shape stretches between the dots",
            AnimationKind::Slide => "a highlight dot travels between the centers",
            AnimationKind::Fill => "outline dots fill solid as the highlight arrives",
            AnimationKind::ThinWorm => "like worm, with a narrower bridge",
            AnimationKind::Drop => "the highlight arcs up and drops onto the target",
            AnimationKind::Swap => "the two endpoint dots trade places",
        }
    }
}

/// Frame for the indicator's active style and the given transition.
pub fn frame(ind: &Indicator, prev: Option<usize>, target: Option<usize>, progress: f32) -> Frame {
    ind.animation().style().compute(ind, prev, target, progress)
}

/// Settled frame for the indicator's active style at its selected position.
pub fn settled_frame(ind: &Indicator) -> Frame {
    ind.animation().style().settled(ind, ind.selected())
}

/// NONE: attributes jump discretely once progress reaches 1.
struct NoneStyle;

impl AnimationStyle for NoneStyle {
    fn compute(
        &self,
        ind: &Indicator,
        prev: Option<usize>,
        target: Option<usize>,
        progress: f32,
    ) -> Frame {
        if progress >= 1.0 {
            self.settled(ind, target)
        } else {
            self.settled(ind, prev)
        }
    }
}

#[inline]
pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Drop endpoints that cannot be rendered (out of range for the count).
pub(crate) fn endpoint(ind: &Indicator, position: Option<usize>) -> Option<usize> {
    position.filter(|&i| i < ind.count())
}

/// The default settled frame: all dots at rest, the selected one fully
/// blended. Styles with a different resting look override `settled()`.
pub(crate) fn base_settled(ind: &Indicator, selected: Option<usize>) -> Frame {
    let mut frame = Frame::rest(ind.count());
    if let Some(i) = endpoint(ind, selected) {
        frame.dots[i].blend = 1.0;
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(kind: AnimationKind) -> Indicator {
        let mut ind = Indicator::new();
        ind.set_count(5);
        ind.set_animation(kind);
        ind
    }

    #[test]
    fn test_endpoint_exactness_for_every_style() {
        for kind in AnimationKind::ALL {
            let ind = indicator(kind);
            let style = kind.style();
            let (a, b) = (Some(1), Some(3));

            assert_eq!(
                style.compute(&ind, a, b, 0.0),
                style.settled(&ind, a),
                "{} at progress 0",
                kind.name()
            );
            assert_eq!(
                style.compute(&ind, a, b, 1.0),
                style.settled(&ind, b),
                "{} at progress 1",
                kind.name()
            );
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        for kind in AnimationKind::ALL {
            let ind = indicator(kind);
            let style = kind.style();
            assert_eq!(
                style.compute(&ind, Some(0), Some(1), 0.37),
                style.compute(&ind, Some(0), Some(1), 0.37),
                "{}",
                kind.name()
            );
        }
    }

    #[test]
    fn test_missing_endpoints_render_without_panic() {
        for kind in AnimationKind::ALL {
            let ind = indicator(kind);
            let style = kind.style();
            for (a, b) in [(None, Some(2)), (Some(2), None), (None, None), (Some(9), Some(2))] {
                let frame = style.compute(&ind, a, b, 0.5);
                assert_eq!(frame.dots.len(), 5, "{}", kind.name());
            }
        }
    }

    #[test]
    fn test_out_of_range_progress_clamps() {
        for kind in AnimationKind::ALL {
            let ind = indicator(kind);
            let style = kind.style();
            assert_eq!(
                style.compute(&ind, Some(0), Some(2), -0.5),
                style.compute(&ind, Some(0), Some(2), 0.0),
                "{}",
                kind.name()
            );
            assert_eq!(
                style.compute(&ind, Some(0), Some(2), 1.5),
                style.compute(&ind, Some(0), Some(2), 1.0),
                "{}",
                kind.name()
            );
        }
    }

    #[test]
    fn test_name_round_trip() {
        for kind in AnimationKind::ALL {
            assert_eq!(AnimationKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(AnimationKind::from_name("sparkle"), None);
    }
}
