//! Shape descriptors produced by the chart builders.
//!
//! A chart build is a pure mapping from aggregated data to an immutable
//! [`Scene`]: a canvas size, its margins, and a flat list of [`Mark`]s in
//! absolute pixel coordinates. Rendering backends consume the scene without
//! needing any chart logic.

use crate::color::Rgba;
use crate::geometry::Point;

/// Margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margin {
    /// Top margin.
    pub top: f32,
    /// Right margin.
    pub right: f32,
    /// Bottom margin.
    pub bottom: f32,
    /// Left margin.
    pub left: f32,
}

impl Margin {
    /// Create a margin set.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Text anchor position for label alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Align text start at the position.
    #[default]
    Start,
    /// Center text at the position.
    Middle,
    /// Align text end at the position.
    End,
}

/// One cubic Bezier segment of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// First control point.
    pub c1: Point,
    /// Second control point.
    pub c2: Point,
    /// Segment end point.
    pub end: Point,
}

/// A typed shape descriptor in absolute pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Straight line segment.
    Line {
        /// Start x.
        x1: f32,
        /// Start y.
        y1: f32,
        /// End x.
        x2: f32,
        /// End y.
        y2: f32,
        /// Stroke color.
        stroke: Rgba,
        /// Stroke width in pixels.
        stroke_width: f32,
    },
    /// Axis-aligned rectangle.
    Rect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Fill color.
        fill: Rgba,
        /// Optional stroke color.
        stroke: Option<Rgba>,
        /// Stroke width in pixels.
        stroke_width: f32,
    },
    /// Filled circle marker.
    Circle {
        /// Center x.
        cx: f32,
        /// Center y.
        cy: f32,
        /// Radius.
        r: f32,
        /// Fill color.
        fill: Rgba,
    },
    /// Smooth open path made of cubic Bezier segments.
    Path {
        /// Path start point.
        start: Point,
        /// Cubic segments from the start point onward.
        segments: Vec<CubicSegment>,
        /// Stroke color.
        stroke: Rgba,
        /// Stroke width in pixels.
        stroke_width: f32,
    },
    /// Anchored text label.
    Text {
        /// Anchor x.
        x: f32,
        /// Anchor y (baseline).
        y: f32,
        /// Label contents.
        text: String,
        /// Horizontal anchoring.
        anchor: TextAnchor,
        /// Optional rotation in degrees around the anchor.
        rotate: Option<f32>,
    },
}

/// A complete geometry bundle for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Canvas width in logical pixels (margins included).
    pub width: u32,
    /// Canvas height in logical pixels (margins included).
    pub height: u32,
    /// Margins separating the plot area from the canvas edge.
    pub margin: Margin,
    /// Shape descriptors in draw order.
    pub marks: Vec<Mark>,
}

impl Scene {
    /// Create a scene with the given canvas and margins.
    #[must_use]
    pub fn new(width: u32, height: u32, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
            marks: Vec::new(),
        }
    }

    /// Width of the plot area inside the margins.
    #[must_use]
    pub fn inner_width(&self) -> f32 {
        self.width as f32 - self.margin.left - self.margin.right
    }

    /// Height of the plot area inside the margins.
    #[must_use]
    pub fn inner_height(&self) -> f32 {
        self.height as f32 - self.margin.top - self.margin.bottom
    }
}
