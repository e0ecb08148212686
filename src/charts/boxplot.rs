//! Box plot of like-count distributions per age group.
//!
//! One box per age group, in first-occurrence order: a whisker spanning
//! min..max, a box spanning the interquartile range, and a median line.

use crate::aggregate::{rollup, FiveNumberSummary};
use crate::color::Rgba;
use crate::data::Record;
use crate::error::{Error, Result};
use crate::mark::{Margin, Mark, Scene, TextAnchor};
use crate::scale::{BandScale, LinearScale, Scale};

/// Builder for the per-age-group box plot.
#[derive(Debug, Clone)]
pub struct BoxChart<'a> {
    records: &'a [Record],
    width: u32,
    height: u32,
    margin: Margin,
    band_padding: f32,
    fill: Rgba,
    stroke: Rgba,
}

impl<'a> BoxChart<'a> {
    /// Create a box chart over the shared record table.
    #[must_use]
    pub fn new(records: &'a [Record]) -> Self {
        Self {
            records,
            width: 600,
            height: 400,
            margin: Margin::new(40.0, 30.0, 60.0, 70.0),
            band_padding: 0.4,
            fill: Rgba::MEDIUM_PURPLE,
            stroke: Rgba::DARK_GRAY,
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

    /// Set the band padding fraction between boxes.
    #[must_use]
    pub fn band_padding(mut self, padding: f32) -> Self {
        self.band_padding = padding;
        self
    }

    /// Set the box fill color.
    #[must_use]
    pub fn fill(mut self, color: Rgba) -> Self {
        self.fill = color;
        self
    }

    /// Build the geometry scene.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDomain`] when the table yields no age groups.
    pub fn build(self) -> Result<Scene> {
        let summaries: Vec<(String, FiveNumberSummary)> = rollup(
            self.records,
            |r| r.age_group.as_str(),
            FiveNumberSummary::from_values,
        )
        .into_iter()
        .filter_map(|(group, summary)| summary.map(|s| (group, s)))
        .collect();

        if summaries.is_empty() {
            return Err(Error::EmptyDomain { axis: "AgeGroup" });
        }

        let mut scene = Scene::new(self.width, self.height, self.margin);
        let (iw, ih) = (scene.inner_width(), scene.inner_height());
        let (ml, mt) = (self.margin.left, self.margin.top);

        let domain: Vec<String> = summaries.iter().map(|(g, _)| g.clone()).collect();
        let x = BandScale::new(domain, (ml, ml + iw), self.band_padding)?;

        let likes_max = summaries
            .iter()
            .map(|(_, s)| s.max)
            .fold(f32::NEG_INFINITY, f32::max);
        let y = LinearScale::new((0.0, likes_max), (mt + ih, mt));

        scene.marks.push(Mark::Text {
            x: ml + iw / 2.0,
            y: mt + ih + 45.0,
            text: "Age Group".to_string(),
            anchor: TextAnchor::Middle,
            rotate: None,
        });
        scene.marks.push(Mark::Text {
            x: ml - 50.0,
            y: mt + ih / 2.0,
            text: "Number of Likes".to_string(),
            anchor: TextAnchor::Middle,
            rotate: Some(-90.0),
        });

        let bw = x.bandwidth();
        for (group, s) in &summaries {
            let Some(x0) = x.position(group) else {
                continue;
            };

            scene.marks.push(Mark::Line {
                x1: x0 + bw / 2.0,
                y1: y.scale(s.min),
                x2: x0 + bw / 2.0,
                y2: y.scale(s.max),
                stroke: self.stroke,
                stroke_width: 1.0,
            });
            // Top of the box is q3: larger values map to smaller pixel y.
            scene.marks.push(Mark::Rect {
                x: x0,
                y: y.scale(s.q3),
                width: bw,
                height: y.scale(s.q1) - y.scale(s.q3),
                fill: self.fill,
                stroke: Some(self.stroke),
                stroke_width: 1.0,
            });
            scene.marks.push(Mark::Line {
                x1: x0,
                y1: y.scale(s.median),
                x2: x0 + bw,
                y2: y.scale(s.median),
                stroke: self.stroke,
                stroke_width: 2.0,
            });
        }

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(age_group: &str, likes: u32) -> Record {
        Record {
            date: "3/1".to_string(),
            platform: "X".to_string(),
            post_type: "Video".to_string(),
            age_group: age_group.to_string(),
            likes,
        }
    }

    #[test]
    fn test_build_one_group() {
        let records = vec![record("Teen", 10), record("Teen", 20), record("Teen", 30)];
        let scene = BoxChart::new(&records).build().unwrap();

        assert_eq!(scene.width, 600);
        assert_eq!(scene.height, 400);
        // Two axis titles plus whisker, box, median.
        assert_eq!(scene.marks.len(), 5);
    }

    #[test]
    fn test_box_spans_iqr() {
        // Likes 10..30: q1 = 15, q3 = 25, full y domain 0..30 over 300 px.
        let records = vec![record("Teen", 10), record("Teen", 20), record("Teen", 30)];
        let scene = BoxChart::new(&records).build().unwrap();

        let boxes: Vec<_> = scene
            .marks
            .iter()
            .filter_map(|m| match m {
                Mark::Rect {
                    y, height, width, ..
                } => Some((*y, *height, *width)),
                _ => None,
            })
            .collect();
        assert_eq!(boxes.len(), 1);

        let (y, height, width) = boxes[0];
        // y(25) = 40 + 300 * (1 - 25/30) = 90; y(15) = 190.
        assert!((y - 90.0).abs() < 1e-3);
        assert!((height - 100.0).abs() < 1e-3);
        // Band: 500 px / 1 group, padding 0.4 -> bandwidth 300.
        assert!((width - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let records = vec![
            record("Senior", 5),
            record("Teen", 10),
            record("Senior", 15),
        ];
        let scene = BoxChart::new(&records).build().unwrap();

        let box_xs: Vec<f32> = scene
            .marks
            .iter()
            .filter_map(|m| match m {
                Mark::Rect { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(box_xs.len(), 2);
        // Senior was seen first, so its box sits left of Teen's.
        assert!(box_xs[0] < box_xs[1]);
    }

    #[test]
    fn test_median_inside_box() {
        let records = vec![
            record("Teen", 10),
            record("Teen", 12),
            record("Teen", 20),
            record("Teen", 28),
            record("Teen", 30),
        ];
        let scene = BoxChart::new(&records).build().unwrap();

        let rect = scene.marks.iter().find_map(|m| match m {
            Mark::Rect { y, height, .. } => Some((*y, *height)),
            _ => None,
        });
        let median_y = scene
            .marks
            .iter()
            .filter_map(|m| match m {
                Mark::Line {
                    y1, y2,
                    stroke_width,
                    ..
                } if (stroke_width - 2.0).abs() < 1e-6 && (y1 - y2).abs() < 1e-6 => Some(*y1),
                _ => None,
            })
            .next();

        let (top, height) = rect.unwrap();
        let median_y = median_y.unwrap();
        assert!(median_y >= top && median_y <= top + height);
    }

    #[test]
    fn test_empty_records_error() {
        let result = BoxChart::new(&[]).build();
        assert!(matches!(result, Err(Error::EmptyDomain { axis }) if axis == "AgeGroup"));
    }
}
