// File: crates/petalplot-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; measures and paints anchored labels.

use petalplot_core::scene::TextAnchor;
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

const SANS: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const SERIF: &[&str] = &["Times New Roman", "Georgia", "DejaVu Serif", "serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, family: Option<&str>) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        match family {
            Some(f) if f.contains("serif") && !f.contains("sans") => ts.set_font_families(SERIF),
            _ => ts.set_font_families(SANS),
        };
        ts
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color, family: Option<&str>) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, family));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` with its baseline at `y`, aligned on `x` per `anchor`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        family: Option<&str>,
        anchor: TextAnchor,
    ) {
        let mut p = self.layout(text, size, color, family);
        let left = match anchor {
            TextAnchor::Start => x,
            TextAnchor::Middle => x - p.longest_line() / 2.0,
            TextAnchor::End => x - p.longest_line(),
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - size * 0.8));
    }
}
