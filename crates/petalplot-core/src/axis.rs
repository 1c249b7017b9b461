// File: crates/petalplot-core/src/axis.rs
// Summary: Bottom/left axis generator producing a domain path and tick groups for any scale.

use crate::scale::{BandScale, LinearScale, DEFAULT_TICKS};
use crate::scene::{Node, Paint, PathCmd, TextAnchor, Transform};

/// Half-pixel shift that keeps 1px strokes crisp.
pub const CRISP_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// Scale that can place and label axis ticks.
pub trait AxisScale {
    fn range(&self) -> [f64; 2];
    /// Tick positions (before the crisp offset) paired with their labels.
    fn axis_ticks(&self, count: usize, offset: f64) -> Vec<(f64, String)>;
}

impl AxisScale for LinearScale {
    fn range(&self) -> [f64; 2] {
        self.range
    }

    fn axis_ticks(&self, count: usize, _offset: f64) -> Vec<(f64, String)> {
        let format = self.tick_format(count);
        self.ticks(count).into_iter().map(|v| (self.apply(v), format(v))).collect()
    }
}

impl AxisScale for BandScale {
    fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Ticks sit at band centres; the count is ignored.
    fn axis_ticks(&self, _count: usize, offset: f64) -> Vec<(f64, String)> {
        let centre = (self.bandwidth() - offset * 2.0).max(0.0) / 2.0;
        self.domain()
            .filter_map(|key| self.apply(key).map(|x| (x + centre, key.to_string())))
            .collect()
    }
}

pub struct Axis<'a, S: AxisScale> {
    scale: &'a S,
    orient: Orient,
    tick_count: usize,
    tick_size_inner: f64,
    tick_size_outer: f64,
    tick_padding: f64,
    offset: f64,
}

impl<'a, S: AxisScale> Axis<'a, S> {
    fn new(scale: &'a S, orient: Orient) -> Self {
        Self {
            scale,
            orient,
            tick_count: DEFAULT_TICKS,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            offset: CRISP_OFFSET,
        }
    }

    pub fn bottom(scale: &'a S) -> Self {
        Self::new(scale, Orient::Bottom)
    }

    pub fn left(scale: &'a S) -> Self {
        Self::new(scale, Orient::Left)
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Sets inner and outer tick size. A negative size draws ticks across the
    /// plot, which is how gridlines are produced.
    pub fn tick_size(mut self, size: f64) -> Self {
        self.tick_size_inner = size;
        self.tick_size_outer = size;
        self
    }

    /// Build the axis group. The caller positions it with a transform.
    pub fn render(&self) -> Node {
        let k = match self.orient {
            Orient::Bottom => 1.0,
            Orient::Left => -1.0,
        };
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        let [r0, r1] = self.scale.range();
        let (range0, range1) = (r0 + self.offset, r1 + self.offset);
        let outer = k * self.tick_size_outer;

        let domain = match (self.orient, self.tick_size_outer != 0.0) {
            (Orient::Bottom, true) => vec![
                PathCmd::MoveTo(range0, outer),
                PathCmd::Vertical(self.offset),
                PathCmd::Horizontal(range1),
                PathCmd::Vertical(outer),
            ],
            (Orient::Bottom, false) => vec![PathCmd::MoveTo(range0, self.offset), PathCmd::Horizontal(range1)],
            (Orient::Left, true) => vec![
                PathCmd::MoveTo(outer, range0),
                PathCmd::Horizontal(self.offset),
                PathCmd::Vertical(range1),
                PathCmd::Horizontal(outer),
            ],
            (Orient::Left, false) => vec![PathCmd::MoveTo(self.offset, range0), PathCmd::Vertical(range1)],
        };

        let mut group = Node::group(vec![Node::path(domain).class("domain").stroke(Paint::CurrentColor)])
            .fill(Paint::None)
            .font_size(10.0)
            .font_family("sans-serif")
            .text_anchor(match self.orient {
                Orient::Bottom => TextAnchor::Middle,
                Orient::Left => TextAnchor::End,
            });

        for (pos, label) in self.scale.axis_ticks(self.tick_count, self.offset) {
            let p = pos + self.offset;
            let (transform, line, text) = match self.orient {
                Orient::Bottom => (
                    Transform::translate(p, 0.0),
                    Node::line(0.0, 0.0, 0.0, k * self.tick_size_inner),
                    Node::text(0.0, k * spacing, label).dy(0.71),
                ),
                Orient::Left => (
                    Transform::translate(0.0, p),
                    Node::line(0.0, 0.0, k * self.tick_size_inner, 0.0),
                    Node::text(k * spacing, 0.0, label).dy(0.32),
                ),
            };
            group.push(
                Node::group(vec![
                    line.stroke(Paint::CurrentColor),
                    text.fill(Paint::CurrentColor),
                ])
                .class("tick")
                .opacity(1.0)
                .transform(transform),
            );
        }
        group
    }
}
