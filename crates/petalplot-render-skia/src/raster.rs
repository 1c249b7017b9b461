// File: crates/petalplot-render-skia/src/raster.rs
// Summary: Headless PNG/RGBA rendering of scene panels using Skia CPU raster surfaces.

use log::debug;
use petalplot_core::scene::{Node, Paint, Panel, PathCmd, Shape, Style, TextAnchor};
use petalplot_core::theme::{Color, Theme};
use skia_safe as skia;
use thiserror::Error;

use crate::text::TextShaper;

/// Font size used when no ancestor sets one.
const DEFAULT_FONT_SIZE: f64 = 16.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create raster surface")]
    Surface,
    #[error("encode PNG failed")]
    Encode,
    #[error("reading back pixels failed")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Skip text so output does not depend on installed fonts.
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { draw_labels: true }
    }
}

struct Ctx<'a> {
    canvas: &'a skia::Canvas,
    theme: &'a Theme,
    shaper: &'a TextShaper,
    opts: &'a RasterOptions,
}

fn sk(c: Color) -> skia::Color {
    skia::Color::from_argb(255, c.red, c.green, c.blue)
}

fn resolve(p: Paint, theme: &Theme) -> Option<skia::Color> {
    match p {
        Paint::None => None,
        Paint::CurrentColor => Some(sk(theme.foreground)),
        Paint::Color(c) => Some(sk(c)),
    }
}

fn finite(vals: &[f64]) -> bool {
    vals.iter().all(|v| v.is_finite())
}

fn fill_paint(style: &Style, theme: &Theme) -> Option<skia::Paint> {
    // Unset fill resolves to the foreground, matching the SVG root `fill`.
    let color = resolve(style.fill.unwrap_or(Paint::CurrentColor), theme)?;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    if let Some(o) = style.opacity {
        paint.set_alpha_f(o as f32);
    }
    Some(paint)
}

fn stroke_paint(style: &Style, theme: &Theme) -> Option<skia::Paint> {
    let color = resolve(style.stroke?, theme)?;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.stroke_width.unwrap_or(1.0) as f32);
    paint.set_color(color);
    if let Some(dash) = &style.stroke_dasharray {
        let intervals: Vec<f32> = dash.iter().map(|v| *v as f32).collect();
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    if let Some(o) = style.opacity {
        paint.set_alpha_f(o as f32);
    }
    Some(paint)
}

fn draw_node(ctx: &Ctx, node: &Node, inherited: &Style) {
    let style = inherited.inherit(&node.style);
    let canvas = ctx.canvas;

    canvas.save();
    if let Some((x, y)) = node.transform.translate {
        canvas.translate((x as f32, y as f32));
    }
    if let Some(deg) = node.transform.rotate {
        canvas.rotate(deg as f32, None);
    }

    match &node.shape {
        Shape::Group(children) => {
            for child in children {
                draw_node(ctx, child, &style);
            }
        }
        Shape::Line { x1, y1, x2, y2 } => {
            if let (true, Some(paint)) = (finite(&[*x1, *y1, *x2, *y2]), stroke_paint(&style, ctx.theme)) {
                canvas.draw_line((*x1 as f32, *y1 as f32), (*x2 as f32, *y2 as f32), &paint);
            }
        }
        Shape::Rect { x, y, width, height } => {
            // Negative or undefined sizes are not drawn.
            if finite(&[*x, *y, *width, *height]) && *width >= 0.0 && *height >= 0.0 {
                let rect = skia::Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
                if let Some(paint) = fill_paint(&style, ctx.theme) {
                    canvas.draw_rect(rect, &paint);
                }
                if let Some(paint) = stroke_paint(&style, ctx.theme) {
                    canvas.draw_rect(rect, &paint);
                }
            }
        }
        Shape::Circle { cx, cy, r } => {
            if finite(&[*cx, *cy, *r]) {
                if let Some(paint) = fill_paint(&style, ctx.theme) {
                    canvas.draw_circle((*cx as f32, *cy as f32), *r as f32, &paint);
                }
                if let Some(paint) = stroke_paint(&style, ctx.theme) {
                    canvas.draw_circle((*cx as f32, *cy as f32), *r as f32, &paint);
                }
            }
        }
        Shape::Text { x, y, dy, content } => {
            let size = style.font_size.unwrap_or(DEFAULT_FONT_SIZE);
            let color = resolve(style.fill.unwrap_or(Paint::CurrentColor), ctx.theme);
            if let (true, true, Some(color)) = (ctx.opts.draw_labels, finite(&[*x, *y]), color) {
                ctx.shaper.draw_anchored(
                    canvas,
                    content,
                    *x as f32,
                    (*y + *dy * size) as f32,
                    size as f32,
                    color,
                    style.font_family.as_deref(),
                    style.text_anchor.unwrap_or(TextAnchor::Start),
                );
            }
        }
        Shape::Path(cmds) => {
            if let Some(paint) = stroke_paint(&style, ctx.theme) {
                let mut path = skia::Path::new();
                let (mut cx, mut cy) = (0.0f32, 0.0f32);
                for cmd in cmds {
                    match *cmd {
                        PathCmd::MoveTo(x, y) => {
                            (cx, cy) = (x as f32, y as f32);
                            path.move_to((cx, cy));
                        }
                        PathCmd::Horizontal(x) => {
                            cx = x as f32;
                            path.line_to((cx, cy));
                        }
                        PathCmd::Vertical(y) => {
                            cy = y as f32;
                            path.line_to((cx, cy));
                        }
                    }
                }
                canvas.draw_path(&path, &paint);
            }
        }
    }

    canvas.restore();
}

fn render_surface(panel: &Panel, theme: &Theme, opts: &RasterOptions) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((panel.width as i32, panel.height as i32))
        .ok_or(RenderError::Surface)?;
    let shaper = TextShaper::new();
    {
        let canvas = surface.canvas();
        canvas.clear(sk(theme.background));
        let ctx = Ctx { canvas, theme, shaper: &shaper, opts };
        draw_node(&ctx, &panel.root, &Style::default());
    }
    debug!("rasterised panel '{}' at {}x{}", panel.id, panel.width, panel.height);
    Ok(surface)
}

/// Encode `panel` as PNG bytes.
pub fn render_png_bytes(panel: &Panel, theme: &Theme, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut surface = render_surface(panel, theme, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

/// Render `panel` to a PNG file, creating parent directories.
pub fn render_to_png(
    panel: &Panel,
    theme: &Theme,
    opts: &RasterOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_png_bytes(panel, theme, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

/// Unpremultiplied RGBA8 pixels as `(pixels, width, height, stride)`.
pub fn render_to_rgba8(panel: &Panel, theme: &Theme, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = render_surface(panel, theme, opts)?;
    let (w, h) = (panel.width, panel.height);
    let info = skia::ImageInfo::new(
        (w as i32, h as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::ReadPixels);
    }
    Ok((pixels, w, h, stride))
}
