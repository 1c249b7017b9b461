// File: crates/petalplot-core/src/lib.rs
// Summary: Core library entry point; exports public API for loading data and building chart panels.

pub mod error;
pub mod types;
pub mod data;
pub mod stats;
pub mod scale;
pub mod axis;
pub mod scene;
pub mod theme;
pub mod scatter;
pub mod boxplot;
pub mod chart;
pub mod svg;
pub mod page;

pub use error::ChartError;
pub use types::{Insets, PanelLayout};
pub use data::{coerce_number, Dataset, Record};
pub use stats::{group_by_species, max_of, quantile, Quartiles};
pub use scale::{BandScale, LinearScale, OrdinalScale};
pub use axis::{Axis, Orient};
pub use scene::{Node, Panel};
pub use theme::Theme;
pub use chart::{render_charts, Charts, RenderOptions};
pub use svg::{to_svg_string, write_svg};
pub use page::render_page;
