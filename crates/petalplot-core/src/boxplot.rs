// File: crates/petalplot-core/src/boxplot.rs
// Summary: Side-by-side per-species boxplot of petal length.
// Notes:
// - Whiskers span q1 - 1.5*IQR .. q3 + 1.5*IQR as computed bounds; they are not
//   clipped to the observed min/max and outliers are not drawn.

use log::debug;

use crate::axis::Axis;
use crate::data::Dataset;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Node, Paint, Panel, TextAnchor, Transform};
use crate::stats::{max_of, quartiles_by_species, Quartiles};
use crate::theme::Theme;
use crate::types::PanelLayout;

pub const CONTAINER_ID: &str = "boxplot";
pub const BAND_PADDING: f64 = 0.1;
pub const MEDIAN_STROKE: f64 = 2.0;

pub struct BoxScales {
    pub x: BandScale,
    pub y: LinearScale,
}

impl BoxScales {
    pub fn new(ds: &Dataset, layout: &PanelLayout) -> Self {
        let (w, h) = (layout.inner_width(), layout.inner_height());
        let max_len = max_of(ds.records.iter().map(|r| r.petal_length)).unwrap_or(f64::NAN);
        let x = BandScale::new(ds.species(), [0.0, w]).padding(BAND_PADDING);
        let y = LinearScale::new([0.0, max_len], [h, 0.0]);
        debug!("boxplot bands {}, y domain {:?}", x.len(), y.domain);
        Self { x, y }
    }
}

/// Whisker, box and median nodes for one species group.
pub fn box_glyph(scales: &BoxScales, species: &str, q: &Quartiles, theme: &Theme) -> [Node; 3] {
    let x = scales.x.apply(species).unwrap_or(f64::NAN);
    let bw = scales.x.bandwidth();
    let y = |v: f64| scales.y.apply(v);
    let stroke = Paint::Color(theme.box_stroke);

    [
        Node::line(x + bw / 2.0, y(q.whisker_low()), x + bw / 2.0, y(q.whisker_high()))
            .class("whisker")
            .stroke(stroke),
        Node::rect(x, y(q.q3), bw, y(q.q1) - y(q.q3))
            .class("box")
            .fill(Paint::Color(theme.box_fill)),
        Node::line(x, y(q.median), x + bw, y(q.median))
            .class("median")
            .stroke(stroke)
            .stroke_width(MEDIAN_STROKE),
    ]
}

pub fn build_boxplot(ds: &Dataset, layout: &PanelLayout, theme: &Theme) -> Panel {
    let scales = BoxScales::new(ds, layout);
    let h = layout.inner_height();
    let margin = layout.margin;

    let mut root = Node::group(vec![
        Axis::bottom(&scales.x)
            .render()
            .class("x-axis")
            .transform(Transform::translate(0.0, h)),
        Axis::left(&scales.y).render().class("y-axis"),
    ])
    .transform(Transform::translate(margin.left as f64, margin.top as f64));

    let groups = quartiles_by_species(&ds.records);
    for (species, q) in &groups {
        debug!("{species}: q1={} median={} q3={} iqr={}", q.q1, q.median, q.q3, q.iqr);
        for node in box_glyph(&scales, species, q, theme) {
            root.push(node);
        }
    }

    root.push(
        Node::text(-h / 2.0, -(margin.left as f64) + 20.0, "Petal Length")
            .class("y label")
            .transform(Transform::rotate(-90.0))
            .text_anchor(TextAnchor::Middle),
    );

    Panel { id: CONTAINER_ID.to_string(), width: layout.width, height: layout.height, root }
}
