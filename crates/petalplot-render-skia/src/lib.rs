// File: crates/petalplot-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterises petalplot scene panels to PNG or RGBA buffers.

pub mod raster;
pub mod text;

pub use raster::{render_png_bytes, render_to_png, render_to_rgba8, RasterOptions, RenderError};
pub use text::TextShaper;
