//! DROP: the highlight lifts off the old dot, arcs perpendicular to the
//! strip, and drops onto the target.

use super::{endpoint, lerp, AnimationStyle, Frame, Marker};
use crate::indicator::state::Indicator;
use crate::layout;

pub(super) struct DropStyle;

/// Fraction of the radius the marker shrinks by at the top of the arc.
const MID_FLIGHT_SHRINK: f32 = 0.25;

impl AnimationStyle for DropStyle {
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
            return self.settled(ind, target.or(prev));
        };

        let ca = layout::axis_center(ind, a);
        let cb = layout::axis_center(ind, b);
        let arc = (std::f32::consts::PI * p).sin();

        let mut frame = Frame::rest(ind.count());
        frame.marker = Some(Marker::Dot {
            center: lerp(ca, cb, p),
            lift: -ind.radius() * arc,
            scale: 1.0 - MID_FLIGHT_SHRINK * arc,
        });
        frame
    }

    fn settled(&self, ind: &Indicator, selected: Option<usize>) -> Frame {
        let mut frame = Frame::rest(ind.count());
        if let Some(i) = endpoint(ind, selected) {
            let c = layout::axis_center(ind, i);
            frame.marker = Some(Marker::Dot { center: c, lift: 0.0, scale: 1.0 });
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_peaks_mid_flight() {
        let mut ind = Indicator::new();
        ind.set_count(3);

        let frame = DropStyle.compute(&ind, Some(0), Some(2), 0.5);
        let Some(Marker::Dot { lift, scale, .. }) = frame.marker else {
            panic!("expected a dot marker");
        };
        assert!((lift + ind.radius()).abs() < 1e-4);
        assert!((scale - (1.0 - MID_FLIGHT_SHRINK)).abs() < 1e-4);
    }

    #[test]
    fn test_lands_level() {
        let mut ind = Indicator::new();
        ind.set_count(3);

        let frame = DropStyle.compute(&ind, Some(0), Some(2), 1.0);
        let Some(Marker::Dot { lift, scale, center }) = frame.marker else {
            panic!("expected a dot marker");
        };
        assert_eq!(lift, 0.0);
        assert_eq!(scale, 1.0);
        assert!((center - layout::axis_center(&ind, 2)).abs() < 1e-4);
    }
}
