// File: crates/petalplot-core/src/theme.rs
// Summary: Light/Dark theming for panel colours and the categorical species palette.

use palette::named;
use palette::Srgb;

/// 8-bit sRGB colour used throughout the scene tree.
pub type Color = Srgb<u8>;

/// Ten-colour categorical scheme assigned to species in first-seen order.
pub fn category10() -> [Color; 10] {
    [
        Srgb::new(0x1f, 0x77, 0xb4),
        Srgb::new(0xff, 0x7f, 0x0e),
        Srgb::new(0x2c, 0xa0, 0x2c),
        Srgb::new(0xd6, 0x27, 0x28),
        Srgb::new(0x94, 0x67, 0xbd),
        Srgb::new(0x8c, 0x56, 0x4b),
        Srgb::new(0xe3, 0x77, 0xc2),
        Srgb::new(0x7f, 0x7f, 0x7f),
        Srgb::new(0xbc, 0xbd, 0x22),
        Srgb::new(0x17, 0xbe, 0xcf),
    ]
}

/// `#rrggbb` form used in SVG attributes.
pub fn to_hex(c: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Resolves `currentColor` (axis lines, tick labels, axis titles).
    pub foreground: Color,
    pub background: Color,
    pub grid: Color,
    pub box_fill: Color,
    /// Whisker and median strokes.
    pub box_stroke: Color,
    pub categorical: [Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            foreground: named::BLACK,
            background: named::WHITE,
            grid: Srgb::new(0xe0, 0xe0, 0xe0),
            box_fill: named::LIGHTBLUE,
            box_stroke: named::BLACK,
            categorical: category10(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            foreground: Srgb::new(235, 235, 245),
            background: Srgb::new(18, 18, 20),
            grid: Srgb::new(40, 40, 45),
            box_fill: Srgb::new(32, 120, 200),
            box_stroke: Srgb::new(235, 235, 245),
            categorical: category10(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
