// File: crates/petalplot-core/src/types.rs
// Summary: Shared layout types and constants (canvas sizes, margins).

/// Default canvas width in pixels, shared by both panels.
pub const WIDTH: u32 = 600;
/// Default canvas height in pixels, shared by both panels.
pub const HEIGHT: u32 = 400;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40, 30, 20, 40)
    }
}

/// Outer canvas size plus the margin reserved for axes and legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelLayout {
    pub width: u32,
    pub height: u32,
    pub margin: Insets,
}

impl PanelLayout {
    /// Scatter panel: wide right margin leaves room for the legend.
    pub const fn scatter() -> Self {
        Self { width: WIDTH, height: HEIGHT, margin: Insets::new(60, 120, 20, 40) }
    }

    pub const fn boxplot() -> Self {
        Self { width: WIDTH, height: HEIGHT, margin: Insets::new(40, 30, 20, 40) }
    }

    /// Width of the plotting area inside the margins.
    pub fn inner_width(&self) -> f64 {
        self.width as f64 - self.margin.hsum() as f64
    }

    /// Height of the plotting area inside the margins.
    pub fn inner_height(&self) -> f64 {
        self.height as f64 - self.margin.vsum() as f64
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, margin: Insets::default() }
    }
}
