//! SLIDE: a highlight dot travels linearly between the two centers while the
//! underlying dots stay put.

use super::{endpoint, lerp, AnimationStyle, Frame, Marker};
use crate::indicator::state::Indicator;
use crate::layout;

pub(super) struct SlideStyle;

impl AnimationStyle for SlideStyle {
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
        let mut frame = Frame::rest(ind.count());
        frame.marker = Some(Marker::Dot { center: lerp(ca, cb, p), lift: 0.0, scale: 1.0 });
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
    fn test_marker_travels_linearly() {
        let mut ind = Indicator::new();
        ind.set_count(3);

        let c0 = layout::axis_center(&ind, 0);
        let c2 = layout::axis_center(&ind, 2);
        let frame = SlideStyle.compute(&ind, Some(0), Some(2), 0.5);
        let Some(Marker::Dot { center, .. }) = frame.marker else {
            panic!("expected a dot marker");
        };
        assert!((center - (c0 + c2) / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_underlying_dots_stay_static() {
        let mut ind = Indicator::new();
        ind.set_count(3);

        let frame = SlideStyle.compute(&ind, Some(0), Some(2), 0.7);
        for dot in &frame.dots {
            assert_eq!(dot.offset, 0.0);
            assert_eq!(dot.blend, 0.0);
            assert_eq!(dot.scale, 1.0);
        }
    }
}
