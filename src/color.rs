//! Color types and the chart palette.
//!
//! Provides an RGBA color representation, hex formatting for SVG output,
//! and the fixed categorical palette shared by the charts.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Dark gray used for box plot strokes (`#333333`).
    pub const DARK_GRAY: Self = Self::new(0x33, 0x33, 0x33, 255);
    /// Medium purple (`#9370DB`), the primary series color.
    pub const MEDIUM_PURPLE: Self = Self::new(0x93, 0x70, 0xDB, 255);
    /// Pastel orange (`#FFB347`).
    pub const PASTEL_ORANGE: Self = Self::new(0xFF, 0xB3, 0x47, 255);
    /// Pastel green (`#77DD77`).
    pub const PASTEL_GREEN: Self = Self::new(0x77, 0xDD, 0x77, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Format as a `#rrggbb` hex string (alpha is carried separately in SVG).
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Opacity as a 0.0-1.0 fraction.
    #[must_use]
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }
}

/// Categorical palette applied to legend entries in domain order.
pub const CHART_PALETTE: [Rgba; 3] = [
    Rgba::MEDIUM_PURPLE,
    Rgba::PASTEL_ORANGE,
    Rgba::PASTEL_GREEN,
];
