// File: crates/petalplot-core/src/scene.rs
// Summary: Retained scene tree (groups, lines, rects, circles, text, paths) shared by the SVG and raster backends.

use crate::theme::Color;

/// Fill or stroke paint. `CurrentColor` resolves to the theme foreground.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    None,
    CurrentColor,
    Color(Color),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Presentation attributes. Unset fields inherit from the parent group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Option<Vec<f64>>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub text_anchor: Option<TextAnchor>,
    pub opacity: Option<f64>,
}

impl Style {
    /// Overlay `child` on top of `self` (child wins where set).
    pub fn inherit(&self, child: &Style) -> Style {
        Style {
            fill: child.fill.or(self.fill),
            stroke: child.stroke.or(self.stroke),
            stroke_width: child.stroke_width.or(self.stroke_width),
            stroke_dasharray: child.stroke_dasharray.clone().or_else(|| self.stroke_dasharray.clone()),
            font_size: child.font_size.or(self.font_size),
            font_family: child.font_family.clone().or_else(|| self.font_family.clone()),
            text_anchor: child.text_anchor.or(self.text_anchor),
            opacity: child.opacity.or(self.opacity),
        }
    }
}

/// Translation applied before rotation (degrees, clockwise in screen space).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub translate: Option<(f64, f64)>,
    pub rotate: Option<f64>,
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self { translate: Some((x, y)), rotate: None }
    }

    pub fn rotate(degrees: f64) -> Self {
        Self { translate: None, rotate: Some(degrees) }
    }

    pub fn is_identity(&self) -> bool {
        self.translate.is_none() && self.rotate.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(f64, f64),
    Horizontal(f64),
    Vertical(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Group(Vec<Node>),
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    /// `dy` is in em units of the resolved font size.
    Text { x: f64, y: f64, dy: f64, content: String },
    Path(Vec<PathCmd>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub shape: Shape,
    pub class: Option<String>,
    pub transform: Transform,
    pub style: Style,
}

impl Node {
    fn of(shape: Shape) -> Self {
        Self { shape, class: None, transform: Transform::default(), style: Style::default() }
    }

    pub fn group(children: Vec<Node>) -> Self {
        Self::of(Shape::Group(children))
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::of(Shape::Line { x1, y1, x2, y2 })
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::of(Shape::Rect { x, y, width, height })
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::of(Shape::Circle { cx, cy, r })
    }

    pub fn text(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self::of(Shape::Text { x, y, dy: 0.0, content: content.into() })
    }

    pub fn path(cmds: Vec<PathCmd>) -> Self {
        Self::of(Shape::Path(cmds))
    }

    // ---- builder-style setters ----------------------------------------------

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn transform(mut self, t: Transform) -> Self {
        self.transform = t;
        self
    }

    pub fn fill(mut self, p: Paint) -> Self {
        self.style.fill = Some(p);
        self
    }

    pub fn stroke(mut self, p: Paint) -> Self {
        self.style.stroke = Some(p);
        self
    }

    pub fn stroke_width(mut self, w: f64) -> Self {
        self.style.stroke_width = Some(w);
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.style.font_size = Some(size);
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.style.font_family = Some(family.into());
        self
    }

    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.style.text_anchor = Some(anchor);
        self
    }

    pub fn opacity(mut self, o: f64) -> Self {
        self.style.opacity = Some(o);
        self
    }

    /// Set the em offset of a text node; no effect on other shapes.
    pub fn dy(mut self, em: f64) -> Self {
        if let Shape::Text { dy, .. } = &mut self.shape {
            *dy = em;
        }
        self
    }

    /// Append a child; no effect unless this node is a group.
    pub fn push(&mut self, child: Node) {
        if let Shape::Group(children) = &mut self.shape {
            children.push(child);
        }
    }

    // ---- queries ----------------------------------------------------------------

    pub fn children(&self) -> &[Node] {
        match &self.shape {
            Shape::Group(children) => children,
            _ => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Pre-order walk over this node and all descendants, in document order.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    /// All nodes (including self) carrying `class`.
    pub fn select_all(&self, class: &str) -> Vec<&Node> {
        self.descendants().into_iter().filter(|n| n.has_class(class)).collect()
    }

    /// Apply `f` to every strict descendant of a node carrying `class`.
    pub fn for_each_in_class_mut(&mut self, class: &str, f: &mut dyn FnMut(&mut Node)) {
        let inside = self.has_class(class);
        if let Shape::Group(children) = &mut self.shape {
            for child in children {
                if inside {
                    child.visit_mut(f);
                } else {
                    child.for_each_in_class_mut(class, f);
                }
            }
        }
    }

    fn visit_mut(&mut self, f: &mut dyn FnMut(&mut Node)) {
        f(self);
        if let Shape::Group(children) = &mut self.shape {
            for child in children {
                child.visit_mut(f);
            }
        }
    }

    pub fn is_line(&self) -> bool { matches!(self.shape, Shape::Line { .. }) }

    pub fn is_circle(&self) -> bool { matches!(self.shape, Shape::Circle { .. }) }

    pub fn text_content(&self) -> Option<&str> {
        match &self.shape {
            Shape::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// One rendered chart: canvas size plus the margin-translated root group.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    /// Identifier of the page container the panel belongs in.
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub root: Node,
}

impl Panel {
    pub fn select_all(&self, class: &str) -> Vec<&Node> {
        self.root.select_all(class)
    }
}
