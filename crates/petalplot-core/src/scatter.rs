// File: crates/petalplot-core/src/scatter.rs
// Summary: Grouped scatter panel (petal length vs width, coloured by species) with gridlines and legend.

use log::debug;

use crate::axis::Axis;
use crate::data::Dataset;
use crate::scale::{LinearScale, OrdinalScale};
use crate::scene::{Node, Paint, Panel, TextAnchor, Transform};
use crate::stats::max_of;
use crate::theme::{Color, Theme};
use crate::types::PanelLayout;

pub const CONTAINER_ID: &str = "scatterplot";
/// Headroom added past the largest observation on both axes.
pub const DOMAIN_PAD: f64 = 0.5;
pub const Y_DOMAIN_MIN: f64 = -0.5;
pub const TICK_COUNT: usize = 8;
pub const POINT_RADIUS: f64 = 5.0;
pub const SWATCH_RADIUS: f64 = 6.0;
pub const LEGEND_ROW: f64 = 20.0;
pub const GRID_DASH: [f64; 2] = [2.0, 2.0];

pub struct ScatterScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub color: OrdinalScale<Color>,
}

impl ScatterScales {
    pub fn new(ds: &Dataset, layout: &PanelLayout, theme: &Theme) -> Self {
        let (w, h) = (layout.inner_width(), layout.inner_height());
        let max_len = max_of(ds.records.iter().map(|r| r.petal_length)).unwrap_or(f64::NAN);
        let max_wid = max_of(ds.records.iter().map(|r| r.petal_width)).unwrap_or(f64::NAN);
        let x = LinearScale::new([0.0, max_len + DOMAIN_PAD], [0.0, w]);
        let y = LinearScale::new([Y_DOMAIN_MIN, max_wid + DOMAIN_PAD], [h, 0.0]);
        let color = OrdinalScale::new(ds.species(), theme.categorical.to_vec());
        debug!("scatter x domain {:?}, y domain {:?}", x.domain, y.domain);
        Self { x, y, color }
    }

    /// Paint for a species; every species seen in the data has one.
    pub fn paint(&self, species: &str) -> Paint {
        self.color.get(species).map(Paint::Color).unwrap_or(Paint::CurrentColor)
    }
}

pub fn build_scatter(ds: &Dataset, layout: &PanelLayout, theme: &Theme) -> Panel {
    let scales = ScatterScales::new(ds, layout, theme);
    let (w, h) = (layout.inner_width(), layout.inner_height());
    let margin = layout.margin;

    let mut root = Node::group(vec![
        Axis::bottom(&scales.x)
            .ticks(TICK_COUNT)
            .tick_size(-h)
            .render()
            .class("x-axis")
            .transform(Transform::translate(0.0, h)),
        Axis::left(&scales.y)
            .ticks(TICK_COUNT)
            .tick_size(-w)
            .render()
            .class("y-axis"),
    ])
    .transform(Transform::translate(margin.left as f64, margin.top as f64));

    let grid = Paint::Color(theme.grid);
    root.for_each_in_class_mut("tick", &mut |n: &mut Node| {
        if n.is_line() {
            n.style.stroke = Some(grid);
            n.style.stroke_dasharray = Some(GRID_DASH.to_vec());
        }
    });

    for r in &ds.records {
        root.push(
            Node::circle(scales.x.apply(r.petal_length), scales.y.apply(r.petal_width), POINT_RADIUS)
                .fill(scales.paint(&r.species)),
        );
    }

    root.push(
        Node::text(w / 2.0, h + margin.bottom as f64 - 5.0, "Petal Length")
            .class("x label")
            .text_anchor(TextAnchor::Middle),
    );
    root.push(
        Node::text(-h / 2.0, -(margin.left as f64) + 20.0, "Petal Width")
            .class("y label")
            .transform(Transform::rotate(-90.0))
            .text_anchor(TextAnchor::Middle),
    );

    let items = scales
        .color
        .domain()
        .enumerate()
        .map(|(i, species)| {
            Node::group(vec![
                Node::circle(0.0, 0.0, SWATCH_RADIUS).fill(scales.paint(species)),
                Node::text(10.0, 4.0, species).font_size(12.0),
            ])
            .class("legend-item")
            .transform(Transform::translate(0.0, i as f64 * LEGEND_ROW))
        })
        .collect();
    root.push(Node::group(items).class("legend").transform(Transform::translate(w + 10.0, 0.0)));

    debug!("scatter: {} points, {} legend entries", ds.len(), ds.species().len());
    Panel { id: CONTAINER_ID.to_string(), width: layout.width, height: layout.height, root }
}
