//! Output encoders for geometry scenes.

pub mod svg;

pub use svg::SvgEncoder;
