//! The endpoint-blending styles: COLOR and SCALE.

use super::{base_settled, endpoint, lerp, AnimationStyle, Frame};
use crate::indicator::state::Indicator;

/// COLOR: the two endpoint dots cross-fade between the unselected and
/// selected colors; every other dot stays fully unselected.
pub(super) struct ColorStyle;

impl AnimationStyle for ColorStyle {
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

        let mut frame = Frame::rest(ind.count());
        if let Some(i) = prev {
            frame.dots[i].blend = 1.0 - p;
        }
        if let Some(i) = target {
            frame.dots[i].blend = p;
        }
        frame
    }
}

/// SCALE: the old dot shrinks toward the unselected scale while the new one
/// grows to full size, blending colors jointly. At rest, unselected dots sit
/// at `scale_factor` of the full radius.
pub(super) struct ScaleStyle;

impl AnimationStyle for ScaleStyle {
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

        let sf = ind.scale_factor();
        let mut frame = Frame::rest(ind.count());
        for dot in &mut frame.dots {
            dot.scale = sf;
        }
        if let Some(i) = prev {
            frame.dots[i].scale = lerp(1.0, sf, p);
            frame.dots[i].blend = 1.0 - p;
        }
        if let Some(i) = target {
            frame.dots[i].scale = lerp(sf, 1.0, p);
            frame.dots[i].blend = p;
        }
        frame
    }

    fn settled(&self, ind: &Indicator, selected: Option<usize>) -> Frame {
        let mut frame = base_settled(ind, selected);
        let sf = ind.scale_factor();
        for (i, dot) in frame.dots.iter_mut().enumerate() {
            if Some(i) != endpoint(ind, selected) {
                dot.scale = sf;
            }
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
    fn test_color_cross_fade() {
        let ind = indicator();
        let frame = ColorStyle.compute(&ind, Some(0), Some(1), 0.25);
        assert!((frame.dots[0].blend - 0.75).abs() < 1e-6);
        assert!((frame.dots[1].blend - 0.25).abs() < 1e-6);
        assert_eq!(frame.dots[2].blend, 0.0);
        assert!(frame.marker.is_none());
    }

    #[test]
    fn test_color_missing_prev_only_fades_in() {
        let ind = indicator();
        let frame = ColorStyle.compute(&ind, None, Some(1), 0.5);
        assert_eq!(frame.dots[0].blend, 0.0);
        assert!((frame.dots[1].blend - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_scale_stays_within_factor_bounds() {
        let mut ind = indicator();
        ind.set_scale_factor(0.5);
        for i in 0..=10 {
            let p = i as f32 / 10.0;
            let frame = ScaleStyle.compute(&ind, Some(0), Some(1), p);
            for dot in &frame.dots {
                assert!(dot.scale >= 0.5 - 1e-6 && dot.scale <= 1.0 + 1e-6);
            }
        }
    }

    #[test]
    fn test_scale_midpoint_swaps_sizes() {
        let mut ind = indicator();
        ind.set_scale_factor(0.6);
        let frame = ScaleStyle.compute(&ind, Some(0), Some(1), 0.5);
        assert!((frame.dots[0].scale - 0.8).abs() < 1e-6);
        assert!((frame.dots[1].scale - 0.8).abs() < 1e-6);
        assert!((frame.dots[2].scale - 0.6).abs() < 1e-6);
    }
}
