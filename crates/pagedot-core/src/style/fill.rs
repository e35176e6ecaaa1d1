//! FILL: dots rest as outlines; the departing dot empties back into an
//! outline while the arriving one fills solid.

use super::{endpoint, lerp, AnimationStyle, Frame};
use crate::indicator::state::Indicator;

pub(super) struct FillStyle;

/// Outline width for resting dots. Falls back to half the radius when no
/// stroke is configured, since a zero-width ring would render nothing.
fn outline(ind: &Indicator) -> f32 {
    if ind.stroke() > 0.0 {
        ind.stroke()
    } else {
        ind.radius() / 2.0
    }
}

impl AnimationStyle for FillStyle {
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

        let stroke = outline(ind);
        let mut frame = Frame::rest(ind.count());
        for dot in &mut frame.dots {
            dot.stroke = stroke;
        }
        if let Some(i) = prev {
            frame.dots[i].stroke = lerp(0.0, stroke, p);
            frame.dots[i].blend = 1.0 - p;
        }
        if let Some(i) = target {
            frame.dots[i].stroke = lerp(stroke, 0.0, p);
            frame.dots[i].blend = p;
        }
        frame
    }

    fn settled(&self, ind: &Indicator, selected: Option<usize>) -> Frame {
        let stroke = outline(ind);
        let mut frame = Frame::rest(ind.count());
        let selected = endpoint(ind, selected);
        for (i, dot) in frame.dots.iter_mut().enumerate() {
            if Some(i) == selected {
                dot.blend = 1.0;
            } else {
                dot.stroke = stroke;
            }
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_dots_are_outlines() {
        let mut ind = Indicator::new();
        ind.set_count(3);
        let frame = FillStyle.settled(&ind, Some(1));
        assert_eq!(frame.dots[0].stroke, ind.radius() / 2.0);
        assert_eq!(frame.dots[1].stroke, 0.0);
        assert_eq!(frame.dots[1].blend, 1.0);
    }

    #[test]
    fn test_configured_stroke_wins() {
        let mut ind = Indicator::new();
        ind.set_count(3);
        ind.set_radius(4.0);
        ind.set_stroke(2.0);
        let frame = FillStyle.settled(&ind, Some(0));
        assert_eq!(frame.dots[1].stroke, 2.0);
    }

    #[test]
    fn test_target_fills_while_prev_empties() {
        let mut ind = Indicator::new();
        ind.set_count(3);
        let s = ind.radius() / 2.0;
        let frame = FillStyle.compute(&ind, Some(0), Some(1), 0.25);
        assert!((frame.dots[0].stroke - s * 0.25).abs() < 1e-6);
        assert!((frame.dots[1].stroke - s * 0.75).abs() < 1e-6);
        assert_eq!(frame.dots[2].stroke, s);
    }
}
