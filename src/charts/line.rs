//! Daily mean-likes line chart with natural cubic spline interpolation.
//!
//! Dates are sorted ascending by string comparison before the band scale is
//! built, so the curve always runs left to right in calendar order. The
//! path through the daily means is a natural cubic spline: zero second
//! derivative at both endpoints, emitted as cubic Bezier segments.

use crate::aggregate::{mean, rollup};
use crate::color::Rgba;
use crate::data::Record;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::mark::{CubicSegment, Margin, Mark, Scene, TextAnchor};
use crate::scale::{BandScale, LinearScale, Scale};

// ============================================================================
// Natural cubic spline
// ============================================================================

/// Interpolate a point sequence with a natural cubic spline.
///
/// Returns one cubic Bezier segment per consecutive point pair; the curve
/// passes through every input point and has zero second derivative at both
/// endpoints. Two points degenerate to a straight segment; fewer than two
/// points produce no segments.
#[must_use]
pub fn natural_spline(points: &[Point]) -> Vec<CubicSegment> {
    match points.len() {
        0 | 1 => Vec::new(),
        2 => {
            // A single straight segment, expressed in cubic form.
            let c1 = points[0].lerp(points[1], 1.0 / 3.0);
            let c2 = points[0].lerp(points[1], 2.0 / 3.0);
            vec![CubicSegment {
                c1,
                c2,
                end: points[1],
            }]
        }
        _ => {
            let xs: Vec<f32> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f32> = points.iter().map(|p| p.y).collect();
            let (cx1, cx2) = spline_controls(&xs);
            let (cy1, cy2) = spline_controls(&ys);

            (0..points.len() - 1)
                .map(|i| CubicSegment {
                    c1: Point::new(cx1[i], cy1[i]),
                    c2: Point::new(cx2[i], cy2[i]),
                    end: points[i + 1],
                })
                .collect()
        }
    }
}

/// Solve for the Bezier control points of a natural spline in one
/// coordinate.
///
/// Sets up the natural-spline tridiagonal system over the knot values and
/// solves it with the Thomas algorithm; returns the first and second
/// control point per segment. Requires at least three knots.
fn spline_controls(values: &[f32]) -> (Vec<f32>, Vec<f32>) {
    let n = values.len() - 1;
    let mut a = vec![0.0f32; n];
    let mut b = vec![0.0f32; n];
    let mut r = vec![0.0f32; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = values[0] + 2.0 * values[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * values[i] + 2.0 * values[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * values[n - 1] + values[n];

    // Forward elimination (the superdiagonal is constant 1).
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }

    // Back substitution into the first control points.
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }

    // Second control points follow from C1 continuity.
    b[n - 1] = (values[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * values[i + 1] - a[i + 1];
    }

    (a, b)
}

// ============================================================================
// Daily line chart
// ============================================================================

/// Builder for the date-ordered daily mean-likes line chart.
#[derive(Debug, Clone)]
pub struct DailyLineChart<'a> {
    records: &'a [Record],
    width: u32,
    height: u32,
    margin: Margin,
    band_padding: f32,
    stroke: Rgba,
    stroke_width: f32,
    marker_radius: f32,
    tick_target: usize,
}

impl<'a> DailyLineChart<'a> {
    /// Create a daily line chart over the shared record table.
    #[must_use]
    pub fn new(records: &'a [Record]) -> Self {
        Self {
            records,
            width: 700,
            height: 400,
            margin: Margin::new(40.0, 60.0, 70.0, 70.0),
            band_padding: 0.1,
            stroke: Rgba::MEDIUM_PURPLE,
            stroke_width: 2.0,
            marker_radius: 4.0,
            tick_target: 10,
        }
    }

    /// Set the canvas dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the margins around the plot area.
    #[must_use]
    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Set the line and marker color.
    #[must_use]
    pub fn stroke(mut self, color: Rgba) -> Self {
        self.stroke = color;
        self
    }

    /// Set the point marker radius.
    #[must_use]
    pub fn marker_radius(mut self, radius: f32) -> Self {
        self.marker_radius = radius.max(0.0);
        self
    }

    /// Build the geometry scene.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDomain`] when the table yields no dates.
    pub fn build(self) -> Result<Scene> {
        let mut daily = rollup(self.records, |r| r.date.as_str(), mean);
        // The date domain is the one sorted domain in the system.
        daily.sort_by(|a, b| a.0.cmp(&b.0));

        if daily.is_empty() {
            return Err(Error::EmptyDomain { axis: "Date" });
        }

        let mut scene = Scene::new(self.width, self.height, self.margin);
        let (iw, ih) = (scene.inner_width(), scene.inner_height());
        let (ml, mt) = (self.margin.left, self.margin.top);

        let dates: Vec<String> = daily.iter().map(|(d, _)| d.clone()).collect();
        let x = BandScale::new(dates, (ml, ml + iw), self.band_padding)?;

        let mean_max = daily.iter().map(|(_, m)| *m).fold(f32::NEG_INFINITY, f32::max);
        let y = LinearScale::new((0.0, mean_max), (mt + ih, mt)).nice(self.tick_target);

        scene.marks.push(Mark::Text {
            x: ml + iw / 2.0,
            y: mt + ih + 65.0,
            text: "Date".to_string(),
            anchor: TextAnchor::Middle,
            rotate: None,
        });
        scene.marks.push(Mark::Text {
            x: ml - 50.0,
            y: mt + ih / 2.0,
            text: "Average Number of Likes".to_string(),
            anchor: TextAnchor::Middle,
            rotate: Some(-90.0),
        });

        let half_band = x.bandwidth() / 2.0;
        let points: Vec<Point> = daily
            .iter()
            .filter_map(|(date, m)| {
                x.position(date)
                    .map(|px| Point::new(px + half_band, y.scale(*m)))
            })
            .collect();

        let segments = natural_spline(&points);
        if !segments.is_empty() {
            scene.marks.push(Mark::Path {
                start: points[0],
                segments,
                stroke: self.stroke,
                stroke_width: self.stroke_width,
            });
        }

        for point in &points {
            scene.marks.push(Mark::Circle {
                cx: point.x,
                cy: point.y,
                r: self.marker_radius,
                fill: self.stroke,
            });
        }

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, likes: u32) -> Record {
        Record {
            date: date.to_string(),
            platform: "X".to_string(),
            post_type: "Video".to_string(),
            age_group: "Teen".to_string(),
            likes,
        }
    }

    /// Evaluate a cubic Bezier segment at parameter t.
    fn bezier(start: Point, seg: &CubicSegment, t: f32) -> Point {
        let u = 1.0 - t;
        let x = u * u * u * start.x
            + 3.0 * u * u * t * seg.c1.x
            + 3.0 * u * t * t * seg.c2.x
            + t * t * t * seg.end.x;
        let y = u * u * u * start.y
            + 3.0 * u * u * t * seg.c1.y
            + 3.0 * u * t * t * seg.c2.y
            + t * t * t * seg.end.y;
        Point::new(x, y)
    }

    #[test]
    fn test_spline_passes_through_knots() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 30.0),
            Point::new(20.0, 10.0),
            Point::new(30.0, 40.0),
        ];
        let segments = natural_spline(&points);
        assert_eq!(segments.len(), 3);

        let mut start = points[0];
        for (seg, knot) in segments.iter().zip(&points[1..]) {
            let end = bezier(start, seg, 1.0);
            assert!((end.x - knot.x).abs() < 1e-3);
            assert!((end.y - knot.y).abs() < 1e-3);
            start = seg.end;
        }
    }

    #[test]
    fn test_spline_natural_endpoints() {
        // Second derivative of segment i at t=0 is 6(p - 2c1 + c2); the
        // natural boundary condition zeroes it at the open ends.
        let points = vec![
            Point::new(0.0, 5.0),
            Point::new(1.0, 9.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 7.0),
            Point::new(4.0, 4.0),
        ];
        let segments = natural_spline(&points);

        let first = &segments[0];
        let start_dd_y = 6.0 * (points[0].y - 2.0 * first.c1.y + first.c2.y);
        assert!(start_dd_y.abs() < 1e-2, "start curvature {start_dd_y}");

        let last = &segments[segments.len() - 1];
        let end_dd_y = 6.0 * (last.c1.y - 2.0 * last.c2.y + last.end.y);
        assert!(end_dd_y.abs() < 1e-2, "end curvature {end_dd_y}");
    }

    #[test]
    fn test_spline_collinear_stays_straight() {
        let points: Vec<Point> = (0..5).map(|i| Point::new(i as f32, 2.0 * i as f32)).collect();
        let segments = natural_spline(&points);

        let mut start = points[0];
        for seg in &segments {
            for step in 1..4 {
                let p = bezier(start, seg, step as f32 / 4.0);
                assert!((p.y - 2.0 * p.x).abs() < 1e-3);
            }
            start = seg.end;
        }
    }

    #[test]
    fn test_spline_two_points() {
        let points = vec![Point::new(0.0, 0.0), Point::new(9.0, 3.0)];
        let segments = natural_spline(&points);
        assert_eq!(segments.len(), 1);
        let mid = bezier(points[0], &segments[0], 0.5);
        assert!((mid.x - 4.5).abs() < 1e-4);
        assert!((mid.y - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_spline_degenerate_inputs() {
        assert!(natural_spline(&[]).is_empty());
        assert!(natural_spline(&[Point::new(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn test_dates_sorted_before_scaling() {
        let records = vec![record("3/2", 20), record("3/1", 10), record("3/3", 30)];
        let scene = DailyLineChart::new(&records).build().unwrap();

        let centers: Vec<(f32, f32)> = scene
            .marks
            .iter()
            .filter_map(|m| match m {
                Mark::Circle { cx, cy, .. } => Some((*cx, *cy)),
                _ => None,
            })
            .collect();
        assert_eq!(centers.len(), 3);

        // Markers run left to right in date order, and the means 10, 20, 30
        // descend in pixel y.
        assert!(centers[0].0 < centers[1].0 && centers[1].0 < centers[2].0);
        assert!(centers[0].1 > centers[1].1 && centers[1].1 > centers[2].1);
    }

    #[test]
    fn test_markers_centered_in_bands() {
        let records = vec![record("3/1", 10), record("3/2", 20)];
        let chart = DailyLineChart::new(&records);
        let margin = chart.margin;
        let scene = chart.build().unwrap();
        let iw = scene.inner_width();

        for mark in &scene.marks {
            if let Mark::Circle { cx, .. } = mark {
                assert!(*cx > margin.left && *cx < margin.left + iw);
            }
        }
    }

    #[test]
    fn test_single_date_has_no_path() {
        let records = vec![record("3/1", 10), record("3/1", 30)];
        let scene = DailyLineChart::new(&records).build().unwrap();

        assert!(!scene.marks.iter().any(|m| matches!(m, Mark::Path { .. })));
        let markers = scene
            .marks
            .iter()
            .filter(|m| matches!(m, Mark::Circle { .. }))
            .count();
        assert_eq!(markers, 1);
    }

    #[test]
    fn test_empty_records_error() {
        let result = DailyLineChart::new(&[]).build();
        assert!(matches!(result, Err(Error::EmptyDomain { axis }) if axis == "Date"));
    }
}
