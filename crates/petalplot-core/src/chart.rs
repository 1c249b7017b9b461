// File: crates/petalplot-core/src/chart.rs
// Summary: Render options and the single pass that builds both chart panels from a dataset.

use log::{info, warn};

use crate::boxplot::build_boxplot;
use crate::data::Dataset;
use crate::scatter::build_scatter;
use crate::scene::Panel;
use crate::theme::Theme;
use crate::types::PanelLayout;

pub struct RenderOptions {
    pub scatter: PanelLayout,
    pub boxplot: PanelLayout,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scatter: PanelLayout::scatter(),
            boxplot: PanelLayout::boxplot(),
            theme: Theme::light(),
        }
    }
}

/// Both panels produced from one dataset.
pub struct Charts {
    pub scatter: Panel,
    pub boxplot: Panel,
}

impl Charts {
    pub fn panels(&self) -> [&Panel; 2] {
        [&self.scatter, &self.boxplot]
    }
}

/// Build the scatter and boxplot panels. Never fails: missing or non-numeric
/// values end up as NaN coordinates.
pub fn render_charts(ds: &Dataset, opts: &RenderOptions) -> Charts {
    if ds.is_empty() {
        warn!("rendering an empty dataset; scale domains will be NaN");
    }
    let charts = Charts {
        scatter: build_scatter(ds, &opts.scatter, &opts.theme),
        boxplot: build_boxplot(ds, &opts.boxplot, &opts.theme),
    };
    info!("built {} panels for {} records ({} theme)", charts.panels().len(), ds.len(), opts.theme.name);
    charts
}
