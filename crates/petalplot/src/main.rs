// File: crates/petalplot/src/main.rs
// Summary: Loads the iris CSV and writes the scatter and box plot panels as SVG, an HTML page and optional PNGs.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use petalplot_core::{render_charts, render_page, theme, write_svg, Dataset, RenderOptions};
use petalplot_render_skia::{render_to_png, RasterOptions};
use std::path::{Path, PathBuf};

const DEFAULT_INPUT: &str = "iris.csv";

#[derive(Parser, Debug)]
#[command(name = "petalplot", version, about = "Render iris petal scatter and box plots")]
struct Cli {
    /// CSV with Species, PetalLength and PetalWidth columns
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory receiving the SVG, HTML and PNG files
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Colour theme (light or dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Also rasterise each panel to PNG
    #[arg(long)]
    png: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (path, bundled) = resolve_path(&cli.input)?;
    println!("Using input file: {}", path.display());
    if bundled {
        println!("  (bundled sample; {} not found)", cli.input.display());
    }

    let ds = Dataset::from_path(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} records across {} species", ds.len(), ds.species().len());

    let opts = RenderOptions { theme: theme::find(&cli.theme), ..Default::default() };
    if !opts.theme.name.eq_ignore_ascii_case(&cli.theme) {
        warn!("unknown theme '{}', using '{}'", cli.theme, opts.theme.name);
    }
    let charts = render_charts(&ds, &opts);

    for panel in charts.panels() {
        let out_svg = cli.out_dir.join(format!("{}.svg", panel.id));
        write_svg(panel, &opts.theme, &out_svg)
            .with_context(|| format!("writing {}", out_svg.display()))?;
        println!("Wrote {}", out_svg.display());

        if cli.png {
            let out_png = out_svg.with_extension("png");
            render_to_png(panel, &opts.theme, &RasterOptions::default(), &out_png)
                .with_context(|| format!("rendering {}", out_png.display()))?;
            println!("Wrote {}", out_png.display());
        }
    }

    let out_html = cli.out_dir.join("index.html");
    let html = render_page("Iris petals", &charts.panels(), &opts.theme);
    std::fs::write(&out_html, html).with_context(|| format!("writing {}", out_html.display()))?;
    println!("Wrote {}", out_html.display());
    info!("done");

    Ok(())
}

/// Resolve the input path, falling back to the bundled sample for the default name.
/// Returns (actual_path, used_bundled)
fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if raw == Path::new(DEFAULT_INPUT) {
        let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(DEFAULT_INPUT);
        if bundled.exists() {
            return Ok((bundled, true));
        }
    }
    anyhow::bail!("file not found: {}", raw.display());
}
