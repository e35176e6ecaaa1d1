//! Geometry engine: measurement, center mapping, and hit-testing.
//!
//! All coordinates are local to the strip, in the same abstract units as the
//! indicator's radius and spacing. The host translates its own coordinate
//! space (pixels, terminal cells) into this one.

use crate::indicator::state::{Indicator, Orientation};
use crate::style::Frame;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Total bounding size of the strip, clamped against `max`.
///
/// Along the indicator axis: `count` diameters plus the gaps between them,
/// plus the edge insets. Perpendicular: one diameter plus insets. A strip
/// hidden by auto-visibility (`count <= 1`) collapses to its insets.
pub fn measure(ind: &Indicator, max: Size) -> Size {
    let insets = ind.insets();
    let hidden = ind.auto_visibility() && ind.count() <= 1;
    let diameter = ind.radius() * 2.0;

    let along = if hidden || ind.count() == 0 {
        0.0
    } else {
        ind.count() as f32 * diameter + (ind.count() - 1) as f32 * ind.spacing()
    };
    let perp = if hidden { 0.0 } else { diameter };

    let (width, height) = match ind.orientation() {
        Orientation::Horizontal => {
            (along + insets.left + insets.right, perp + insets.top + insets.bottom)
        }
        Orientation::Vertical => {
            (perp + insets.left + insets.right, along + insets.top + insets.bottom)
        }
    };

    Size::new(width.min(max.width), height.min(max.height))
}

/// Along-axis coordinate of a dot's resting center.
pub fn axis_center(ind: &Indicator, index: usize) -> f32 {
    let leading = match ind.orientation() {
        Orientation::Horizontal => ind.insets().left,
        Orientation::Vertical => ind.insets().top,
    };
    leading + ind.radius() + index as f32 * (ind.radius() * 2.0 + ind.spacing())
}

/// Resting center of a dot.
pub fn center(ind: &Indicator, index: usize) -> Point {
    let along = axis_center(ind, index);
    let perp = match ind.orientation() {
        Orientation::Horizontal => ind.insets().top + ind.radius(),
        Orientation::Vertical => ind.insets().left + ind.radius(),
    };
    match ind.orientation() {
        Orientation::Horizontal => Point::new(along, perp),
        Orientation::Vertical => Point::new(perp, along),
    }
}

/// Resolve a point to the indicator under it, or `None` on a miss.
///
/// Tests the distance to each dot's *current* center (resting center plus
/// the frame's offset and lift) against its current, post-animation radius;
/// the nearest hit wins.
pub fn index_at(ind: &Indicator, frame: &Frame, point: Point) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (i, dot) in frame.dots.iter().enumerate().take(ind.count()) {
        let rest = center(ind, i);
        let (cx, cy) = match ind.orientation() {
            Orientation::Horizontal => (rest.x + dot.offset, rest.y + dot.lift),
            Orientation::Vertical => (rest.x + dot.lift, rest.y + dot.offset),
        };

        let radius = ind.radius() * dot.scale;
        let d2 = (point.x - cx).powi(2) + (point.y - cy).powi(2);
        // A dot scaled away to nothing is not a target.
        if radius > 0.0 && d2 <= radius * radius && best.map_or(true, |(_, bd)| d2 < bd) {
            best = Some((i, d2));
        }
    }

    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::state::Insets;
    use crate::style;

    const MAX: Size = Size::new(10_000.0, 10_000.0);

    fn indicator(count: usize) -> Indicator {
        let mut ind = Indicator::new();
        ind.set_count(count);
        ind.set_radius(6.0);
        ind.set_spacing(8.0);
        ind
    }

    #[test]
    fn test_measure_grows_with_count() {
        let mut prev_width = 0.0;
        for count in 0..8 {
            let mut ind = indicator(count);
            ind.set_auto_visibility(false);
            let size = measure(&ind, MAX);
            assert!(size.width >= prev_width, "count {}", count);
            prev_width = size.width;
        }
    }

    #[test]
    fn test_measure_degenerate_counts_collapse() {
        for count in [0, 1] {
            let ind = indicator(count);
            let size = measure(&ind, MAX);
            assert_eq!(size.width, 0.0);
            assert_eq!(size.height, 0.0);
        }

        // Auto-visibility off keeps the single dot's extent.
        let mut ind = indicator(1);
        ind.set_auto_visibility(false);
        assert_eq!(measure(&ind, MAX), Size::new(12.0, 12.0));
    }

    #[test]
    fn test_measure_includes_insets_and_clamps() {
        let mut ind = indicator(3);
        ind.set_insets(Insets { left: 2.0, top: 1.0, right: 2.0, bottom: 1.0 });

        // 3 * 12 + 2 * 8 = 52 along, 12 across, plus insets.
        assert_eq!(measure(&ind, MAX), Size::new(56.0, 14.0));
        assert_eq!(measure(&ind, Size::new(30.0, 9.0)), Size::new(30.0, 9.0));
    }

    #[test]
    fn test_vertical_swaps_axes() {
        let mut ind = indicator(3);
        ind.set_orientation(Orientation::Vertical);
        assert_eq!(measure(&ind, MAX), Size::new(12.0, 52.0));
        assert_eq!(center(&ind, 1), Point::new(6.0, 26.0));
    }

    #[test]
    fn test_centers_are_evenly_spaced() {
        let ind = indicator(3);
        assert_eq!(center(&ind, 0), Point::new(6.0, 6.0));
        assert_eq!(center(&ind, 1), Point::new(26.0, 6.0));
        assert_eq!(center(&ind, 2), Point::new(46.0, 6.0));
    }

    #[test]
    fn test_index_at_hits_and_misses() {
        let mut ind = indicator(3);
        ind.set_selected(Some(0));
        let frame = style::settled_frame(&ind);

        assert_eq!(index_at(&ind, &frame, Point::new(26.0, 6.0)), Some(1));
        assert_eq!(index_at(&ind, &frame, Point::new(29.0, 6.0)), Some(1));
        // Between two dots but inside neither.
        assert_eq!(index_at(&ind, &frame, Point::new(16.0, 6.0)), None);
        assert_eq!(index_at(&ind, &frame, Point::new(500.0, 6.0)), None);
    }

    #[test]
    fn test_index_at_uses_animated_radius() {
        let mut ind = indicator(3);
        ind.set_selected(Some(0));
        let mut frame = style::settled_frame(&ind);

        // A dot scaled down to nothing cannot be hit even dead-center.
        frame.dots[1].scale = 0.0;
        assert_eq!(index_at(&ind, &frame, Point::new(26.0, 6.0)), None);

        // A displaced dot is hit at its displaced position.
        frame.dots[1].scale = 1.0;
        frame.dots[1].offset = 10.0;
        assert_eq!(index_at(&ind, &frame, Point::new(36.0, 6.0)), Some(1));
    }
}
