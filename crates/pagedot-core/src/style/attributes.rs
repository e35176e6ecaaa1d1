//! Render attribute types produced by the animation styles.
//!
//! A [`Frame`] is ephemeral: recomputed on every draw pass from the current
//! `(previous, target, progress)` triple and never stored beyond it.

/// Per-dot render attributes.
///
/// Positions are relative to the dot's resting center (see
/// [`crate::layout::center`]); colors are expressed as a blend factor so the
/// host stays in charge of actual color mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Along-axis displacement from the resting center.
    pub offset: f32,
    /// Perpendicular displacement from the resting center.
    pub lift: f32,
    /// Radius multiplier.
    pub scale: f32,
    /// 0 = unselected color, 1 = selected color.
    pub blend: f32,
    /// Outline width; 0 draws the dot solid.
    pub stroke: f32,
}

impl Dot {
    /// A plain unselected dot at rest.
    pub fn rest() -> Self {
        Self { offset: 0.0, lift: 0.0, scale: 1.0, blend: 0.0, stroke: 0.0 }
    }
}

/// The moving highlight drawn over the dots by the travelling styles.
///
/// Coordinates are along-axis values in the same space as
/// [`crate::layout::axis_center`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    /// An elongated capsule bridging two along-axis centers.
    Span { from: f32, to: f32, thickness: f32 },
    /// A single travelling dot.
    Dot { center: f32, lift: f32, scale: f32 },
}

/// One complete set of render attributes for a draw pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub dots: Vec<Dot>,
    pub marker: Option<Marker>,
}

impl Frame {
    /// All dots unselected and at rest, no marker.
    pub fn rest(count: usize) -> Self {
        Self { dots: vec![Dot::rest(); count], marker: None }
    }
}
