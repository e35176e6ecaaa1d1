//! WORM and THIN_WORM: a capsule stretches out of the old dot, bridges the
//! two centers, then contracts into the new one.

use super::{endpoint, lerp, AnimationStyle, Frame, Marker};
use crate::indicator::state::Indicator;
use crate::layout;

pub(super) struct WormStyle {
    pub(super) thin: bool,
}

impl WormStyle {
    fn thickness(&self, ind: &Indicator) -> f32 {
        if self.thin {
            ind.radius()
        } else {
            ind.radius() * 2.0
        }
    }
}

impl AnimationStyle for WormStyle {
    fn compute(
        &self,
        ind: &Indicator,
        prev: Option<usize>,
        target: Option<usize>,
        progress: f32,
    ) -> Frame {
        let prev = endpoint(ind, prev);
        let target = endpoint(ind, target);
        let p = progress.clamp(0.0, 1.0);
        if p <= 0.0 {
            return self.settled(ind, prev);
        }
        if p >= 1.0 {
            return self.settled(ind, target);
        }

        let (Some(a), Some(b)) = (prev, target) else {
            // Nothing to bridge; park on whichever endpoint exists.
            return self.settled(ind, target.or(prev));
        };

        // Leading edge crosses in the first half of progress, trailing edge
        // in the second, so the capsule stretches and then contracts.
        let ca = layout::axis_center(ind, a);
        let cb = layout::axis_center(ind, b);
        let lead = lerp(ca, cb, (p * 2.0).min(1.0));
        let trail = lerp(ca, cb, (p * 2.0 - 1.0).max(0.0));

        let mut frame = Frame::rest(ind.count());
        frame.marker = Some(Marker::Span {
            from: lead.min(trail),
            to: lead.max(trail),
            thickness: self.thickness(ind),
        });
        frame
    }

    fn settled(&self, ind: &Indicator, selected: Option<usize>) -> Frame {
        let mut frame = Frame::rest(ind.count());
        if let Some(i) = endpoint(ind, selected) {
            let c = layout::axis_center(ind, i);
            frame.marker = Some(Marker::Span { from: c, to: c, thickness: self.thickness(ind) });
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator() -> Indicator {
        let mut ind = Indicator::new();
        ind.set_count(4);
        ind
    }

    #[test]
    fn test_span_bridges_both_centers_at_midpoint() {
        let ind = indicator();
        let frame = WormStyle { thin: false }.compute(&ind, Some(0), Some(2), 0.5);
        let Some(Marker::Span { from, to, thickness }) = frame.marker else {
            panic!("expected a span marker");
        };
        assert!((from - layout::axis_center(&ind, 0)).abs() < 1e-4);
        assert!((to - layout::axis_center(&ind, 2)).abs() < 1e-4);
        assert_eq!(thickness, ind.radius() * 2.0);
    }

    #[test]
    fn test_thin_worm_is_narrower() {
        let ind = indicator();
        let frame = WormStyle { thin: true }.compute(&ind, Some(0), Some(1), 0.5);
        let Some(Marker::Span { thickness, .. }) = frame.marker else {
            panic!("expected a span marker");
        };
        assert_eq!(thickness, ind.radius());
    }

    #[test]
    fn test_span_normalized_when_moving_backward() {
        let ind = indicator();
        let frame = WormStyle { thin: false }.compute(&ind, Some(2), Some(0), 0.3);
        let Some(Marker::Span { from, to, .. }) = frame.marker else {
            panic!("expected a span marker");
        };
        assert!(from <= to);
    }

    #[test]
    fn test_trailing_edge_waits_for_second_half() {
        let ind = indicator();
        let frame = WormStyle { thin: false }.compute(&ind, Some(0), Some(2), 0.25);
        let Some(Marker::Span { from, .. }) = frame.marker else {
            panic!("expected a span marker");
        };
        assert!((from - layout::axis_center(&ind, 0)).abs() < 1e-4);
    }
}
