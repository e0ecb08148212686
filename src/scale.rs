//! Scale functions for data-to-visual mappings.
//!
//! Scales transform data values to pixel positions: [`LinearScale`] for
//! continuous domains, [`BandScale`] for ordered categorical domains, and
//! [`OrdinalScale`] for label-to-color assignment.

use std::collections::HashMap;

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

// ============================================================================
// Linear scale
// ============================================================================

/// Linear scale for continuous-to-continuous mapping.
///
/// Inverted pixel ranges are supported (and are the norm for vertical axes,
/// where larger data values map to smaller y pixels). A degenerate domain
/// (min == max) is recovered by treating the span as 1, so `scale` always
/// returns a finite value.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    #[must_use]
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    /// Domain span, with degenerate domains treated as a unit span.
    fn span(&self) -> f32 {
        let span = self.domain_max - self.domain_min;
        if span.abs() < f32::EPSILON {
            1.0
        } else {
            span
        }
    }

    /// Extend the domain outward to round step boundaries.
    ///
    /// The step is picked from the {1, 2, 5, 10} x 10^k decimal sequence for
    /// roughly `count` ticks, with the d3 threshold convention (factors
    /// switch at sqrt(2), sqrt(10), sqrt(50)). Applied twice so the niced
    /// bounds are stable under their own step.
    #[must_use]
    pub fn nice(mut self, count: usize) -> Self {
        let mut start = self.domain_min;
        let mut stop = self.domain_max;
        if stop <= start {
            return self;
        }

        let mut prestep = 0.0;
        for _ in 0..2 {
            let step = tick_increment(start, stop, count);
            if step <= 0.0 || (step - prestep).abs() < f32::EPSILON {
                break;
            }
            start = (self.domain_min / step).floor() * step;
            stop = (self.domain_max / step).ceil() * step;
            prestep = step;
        }

        self.domain_min = start;
        self.domain_max = stop;
        self
    }

    /// Round tick values covering the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f32> {
        let (start, stop) = (self.domain_min, self.domain_max);
        if stop <= start {
            return vec![start];
        }

        let step = tick_increment(start, stop, count);
        if step <= 0.0 {
            return vec![start];
        }

        let first = (start / step).ceil();
        let last = (stop / step).floor();
        if last < first {
            return vec![start];
        }
        let n = (last - first) as usize + 1;
        (0..n).map(|i| (first + i as f32) * step).collect()
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f32) -> f32 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * self.span()
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / self.span();
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Tick step for the interval: a decimal power times 1, 2, 5, or 10.
fn tick_increment(start: f32, stop: f32, count: usize) -> f32 {
    let step0 = (stop - start) / count.max(1) as f32;
    if step0 <= 0.0 || !step0.is_finite() {
        return 0.0;
    }

    let power = step0.log10().floor();
    let error = step0 / 10f32.powf(power);
    let factor = if error >= 50f32.sqrt() {
        10.0
    } else if error >= 10f32.sqrt() {
        5.0
    } else if error >= 2f32.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f32.powf(power)
}

// ============================================================================
// Band scale
// ============================================================================

/// Band scale: maps an ordered categorical domain onto contiguous, padded
/// pixel sub-ranges of equal width.
///
/// Each label gets the sub-range `[position, position + bandwidth)`. With
/// the plain constructor the step is `range_len / n`; the outer-padding
/// constructor uses the wider top-level formula
/// `range_len / (n - padding_inner + 2 * padding_outer)`.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range: (f32, f32),
    padding_inner: f32,
    padding_outer: Option<f32>,
}

impl BandScale {
    /// Create a band scale with a single padding fraction and no outer term.
    ///
    /// Padding is clamped to `[0, 0.99]` so the bandwidth stays positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDomain`] for an empty domain.
    pub fn new(domain: Vec<String>, range: (f32, f32), padding: f32) -> Result<Self> {
        Self::build(domain, range, padding, None)
    }

    /// Create a top-level band scale with separate inner and outer padding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDomain`] for an empty domain.
    pub fn with_outer_padding(
        domain: Vec<String>,
        range: (f32, f32),
        padding_inner: f32,
        padding_outer: f32,
    ) -> Result<Self> {
        Self::build(domain, range, padding_inner, Some(padding_outer.max(0.0)))
    }

    fn build(
        domain: Vec<String>,
        range: (f32, f32),
        padding_inner: f32,
        padding_outer: Option<f32>,
    ) -> Result<Self> {
        if domain.is_empty() {
            return Err(Error::EmptyDomain { axis: "band" });
        }

        let index = domain
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();

        Ok(Self {
            domain,
            index,
            range,
            padding_inner: padding_inner.clamp(0.0, 0.99),
            padding_outer,
        })
    }

    /// Distance between the starts of adjacent bands.
    #[must_use]
    pub fn step(&self) -> f32 {
        let len = self.range.1 - self.range.0;
        let n = self.domain.len() as f32;
        match self.padding_outer {
            None => len / n,
            Some(po) => len / (n - self.padding_inner + 2.0 * po).max(1.0),
        }
    }

    /// Width of each band's occupied sub-range.
    #[must_use]
    pub fn bandwidth(&self) -> f32 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Pixel position of a label's band start, `None` for unknown labels.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<f32> {
        let i = *self.index.get(label)? as f32;
        let step = self.step();
        Some(self.range.0 + i * step + (step - self.bandwidth()) / 2.0)
    }

    /// The ordered domain labels.
    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// The pixel range.
    #[must_use]
    pub fn range(&self) -> (f32, f32) {
        self.range
    }
}

// ============================================================================
// Ordinal color scale
// ============================================================================

/// Ordinal scale binding each domain label to a palette entry by position.
///
/// The palette cycles if the domain outgrows it. Assignment is a pure
/// function of (domain order, palette); nothing is registered globally.
#[derive(Debug, Clone)]
pub struct OrdinalScale {
    index: HashMap<String, usize>,
    palette: Vec<Rgba>,
}

impl OrdinalScale {
    /// Create an ordinal color scale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for an empty palette.
    pub fn new(domain: &[String], palette: &[Rgba]) -> Result<Self> {
        if palette.is_empty() {
            return Err(Error::EmptyData);
        }

        let index = domain
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();

        Ok(Self {
            index,
            palette: palette.to_vec(),
        })
    }

    /// Color assigned to a label, `None` for labels outside the domain.
    #[must_use]
    pub fn color(&self, label: &str) -> Option<Rgba> {
        let i = *self.index.get(label)?;
        Some(self.palette[i % self.palette.len()])
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
