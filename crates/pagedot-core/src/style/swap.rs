//! SWAP: the two endpoint dots trade places instead of a marker travelling
//! between fixed slots.

use super::{endpoint, AnimationStyle, Frame};
use crate::indicator::state::Indicator;
use crate::layout;

pub(super) struct SwapStyle;

impl AnimationStyle for SwapStyle {
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

        // The selected-colored dot rides from a toward b while the dot in
        // its way travels the opposite direction.
        let travel = layout::axis_center(ind, b) - layout::axis_center(ind, a);
        let mut frame = Frame::rest(ind.count());
        frame.dots[a].offset = travel * p;
        frame.dots[a].blend = 1.0;
        frame.dots[b].offset = -travel * p;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_travel_opposite_ways() {
        let mut ind = Indicator::new();
        ind.set_count(4);

        let frame = SwapStyle.compute(&ind, Some(1), Some(3), 0.5);
        assert!(frame.dots[1].offset > 0.0);
        assert!((frame.dots[1].offset + frame.dots[3].offset).abs() < 1e-4);
        assert_eq!(frame.dots[1].blend, 1.0);
        assert_eq!(frame.dots[3].blend, 0.0);
    }

    #[test]
    fn test_bystanders_do_not_move() {
        let mut ind = Indicator::new();
        ind.set_count(4);

        let frame = SwapStyle.compute(&ind, Some(1), Some(3), 0.5);
        assert_eq!(frame.dots[0].offset, 0.0);
        assert_eq!(frame.dots[2].offset, 0.0);
    }
}
