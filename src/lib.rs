//! # engage-viz
//!
//! Aggregation and chart-geometry engine for social-media engagement data.
//!
//! Turns a flat table of post records (platform, post type, age group,
//! date, like count) into three geometry bundles: a per-age-group box plot,
//! a platform x post-type grouped bar chart of mean likes, and a
//! date-ordered line chart of daily mean likes interpolated with a natural
//! cubic spline. The crate's output is a list of typed shape descriptors in
//! absolute pixel coordinates; the bundled SVG encoder turns a bundle into
//! a document, and any other backend can consume the same descriptors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use engage_viz::prelude::*;
//!
//! let records = load_records("socialMedia.csv")?;
//!
//! let scene = BoxChart::new(&records).build()?;
//! SvgEncoder::new().to_file(&scene, "boxplot.svg")?;
//! ```
//!
//! Each chart pipeline is an independent pure computation over the shared
//! record slice: group, reduce, scale, map to marks. Nothing is cached or
//! mutated between pipelines.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and the chart palette.
pub mod color;

/// Geometric primitives.
pub mod geometry;

/// Record table loading.
pub mod data;

/// Grouping and reduction of record tables.
pub mod aggregate;

/// Scale functions for data-to-visual mappings.
pub mod scale;

// ============================================================================
// Geometry Modules
// ============================================================================

/// Shape descriptors and scenes.
pub mod mark;

/// Chart builders (box plot, grouped bars, daily line).
pub mod charts;

/// Output encoders (SVG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for engage-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use engage_viz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{mean, rollup, rollup_pair, FiveNumberSummary, GroupedValue};
    pub use crate::charts::{BoxChart, DailyLineChart, GroupedBarChart};
    pub use crate::color::{Rgba, CHART_PALETTE};
    pub use crate::data::{load_records, read_records, Record};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::Point;
    pub use crate::mark::{CubicSegment, Margin, Mark, Scene, TextAnchor};
    pub use crate::output::SvgEncoder;
    pub use crate::scale::{BandScale, LinearScale, OrdinalScale, Scale};
}
