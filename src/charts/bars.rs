//! Grouped bar chart of mean likes per (platform, post type).
//!
//! Platforms partition the horizontal range with an outer band; each
//! platform's band is subdivided by an inner band over post types. A legend
//! column binds post types to palette colors in domain order.

use crate::aggregate::{inner_domain, mean, outer_domain, rollup_pair, GroupedValue};
use crate::color::{Rgba, CHART_PALETTE};
use crate::data::Record;
use crate::error::{Error, Result};
use crate::mark::{Margin, Mark, Scene, TextAnchor};
use crate::scale::{BandScale, LinearScale, OrdinalScale, Scale};

/// Legend row height in pixels.
const LEGEND_ROW_HEIGHT: f32 = 25.0;
/// Legend swatch side length in pixels.
const LEGEND_SWATCH_SIZE: f32 = 18.0;

/// Builder for the platform x post-type grouped bar chart.
#[derive(Debug, Clone)]
pub struct GroupedBarChart<'a> {
    records: &'a [Record],
    width: u32,
    height: u32,
    margin: Margin,
    outer_padding: f32,
    inner_padding: f32,
    palette: Vec<Rgba>,
    tick_target: usize,
}

impl<'a> GroupedBarChart<'a> {
    /// Create a grouped bar chart over the shared record table.
    #[must_use]
    pub fn new(records: &'a [Record]) -> Self {
        Self {
            records,
            width: 700,
            height: 400,
            margin: Margin::new(40.0, 160.0, 70.0, 70.0),
            outer_padding: 0.2,
            inner_padding: 0.05,
            palette: CHART_PALETTE.to_vec(),
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

    /// Set the padding fraction between platform bands.
    #[must_use]
    pub fn outer_padding(mut self, padding: f32) -> Self {
        self.outer_padding = padding;
        self
    }

    /// Set the padding fraction between bars inside a platform band.
    #[must_use]
    pub fn inner_padding(mut self, padding: f32) -> Self {
        self.inner_padding = padding;
        self
    }

    /// Set the categorical palette for post types.
    #[must_use]
    pub fn palette(mut self, palette: &[Rgba]) -> Self {
        self.palette = palette.to_vec();
        self
    }

    /// Build the geometry scene.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDomain`] when the table yields no platforms,
    /// or [`Error::EmptyData`] for an empty palette.
    pub fn build(self) -> Result<Scene> {
        // Means carry two decimals, matching the tabulated chart values.
        let triples: Vec<GroupedValue<f32>> = rollup_pair(
            self.records,
            |r| r.platform.as_str(),
            |r| r.post_type.as_str(),
            |values| round2(mean(values)),
        );

        if triples.is_empty() {
            return Err(Error::EmptyDomain { axis: "Platform" });
        }

        let platforms = outer_domain(&triples);
        let post_types = inner_domain(&triples);

        let mut scene = Scene::new(self.width, self.height, self.margin);
        let (iw, ih) = (scene.inner_width(), scene.inner_height());
        let (ml, mt) = (self.margin.left, self.margin.top);

        let x0 = BandScale::new(platforms, (ml, ml + iw), self.outer_padding)?;
        let x1 = BandScale::new(
            post_types.clone(),
            (0.0, x0.bandwidth()),
            self.inner_padding,
        )?;

        let mean_max = triples.iter().map(|t| t.value).fold(f32::NEG_INFINITY, f32::max);
        let y = LinearScale::new((0.0, mean_max), (mt + ih, mt)).nice(self.tick_target);

        let colors = OrdinalScale::new(&post_types, &self.palette)?;

        scene.marks.push(Mark::Text {
            x: ml + iw / 2.0,
            y: mt + ih + 50.0,
            text: "Platform".to_string(),
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

        let baseline = y.scale(0.0);
        for triple in &triples {
            let (Some(outer_x), Some(inner_x)) =
                (x0.position(&triple.outer), x1.position(&triple.inner))
            else {
                continue;
            };

            let top = y.scale(triple.value);
            scene.marks.push(Mark::Rect {
                x: outer_x + inner_x,
                y: top,
                width: x1.bandwidth(),
                height: baseline - top,
                fill: colors.color(&triple.inner).unwrap_or(Rgba::BLACK),
                stroke: None,
                stroke_width: 0.0,
            });
        }

        let legend_x = ml + iw + 40.0;
        let legend_y = mt + 40.0;
        for (i, post_type) in post_types.iter().enumerate() {
            let row_y = legend_y + i as f32 * LEGEND_ROW_HEIGHT;
            scene.marks.push(Mark::Rect {
                x: legend_x,
                y: row_y,
                width: LEGEND_SWATCH_SIZE,
                height: LEGEND_SWATCH_SIZE,
                fill: colors.color(post_type).unwrap_or(Rgba::BLACK),
                stroke: None,
                stroke_width: 0.0,
            });
            scene.marks.push(Mark::Text {
                x: legend_x + 25.0,
                y: row_y + 13.0,
                text: post_type.clone(),
                anchor: TextAnchor::Start,
                rotate: None,
            });
        }

        Ok(scene)
    }
}

/// Round to two decimal places.
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
