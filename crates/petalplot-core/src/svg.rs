// File: crates/petalplot-core/src/svg.rs
// Summary: Serialises a scene panel into a standalone SVG document.

use std::fmt::Write;

use crate::scene::{Node, Paint, Panel, PathCmd, Shape, Style, Transform};
use crate::theme::{to_hex, Theme};

/// Shortest round-trip number text; `-0` prints as `0`.
pub fn num(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}")
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn paint(p: Paint) -> String {
    match p {
        Paint::None => "none".to_string(),
        Paint::CurrentColor => "currentColor".to_string(),
        Paint::Color(c) => to_hex(c),
    }
}

fn transform(t: &Transform) -> String {
    let mut parts = Vec::new();
    if let Some((x, y)) = t.translate {
        parts.push(format!("translate({},{})", num(x), num(y)));
    }
    if let Some(deg) = t.rotate {
        parts.push(format!("rotate({})", num(deg)));
    }
    parts.join(" ")
}

fn path_data(cmds: &[PathCmd]) -> String {
    let mut d = String::new();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(x, y) => { let _ = write!(d, "M{},{}", num(x), num(y)); }
            PathCmd::Horizontal(x) => { let _ = write!(d, "H{}", num(x)); }
            PathCmd::Vertical(y) => { let _ = write!(d, "V{}", num(y)); }
        }
    }
    d
}

fn common_attrs(out: &mut String, node: &Node) {
    if let Some(class) = &node.class {
        let _ = write!(out, r#" class="{}""#, escape(class));
    }
    if !node.transform.is_identity() {
        let _ = write!(out, r#" transform="{}""#, transform(&node.transform));
    }
    style_attrs(out, &node.style);
}

fn style_attrs(out: &mut String, s: &Style) {
    if let Some(p) = s.fill {
        let _ = write!(out, r#" fill="{}""#, paint(p));
    }
    if let Some(p) = s.stroke {
        let _ = write!(out, r#" stroke="{}""#, paint(p));
    }
    if let Some(w) = s.stroke_width {
        let _ = write!(out, r#" stroke-width="{}""#, num(w));
    }
    if let Some(dash) = &s.stroke_dasharray {
        let joined = dash.iter().map(|v| num(*v)).collect::<Vec<_>>().join(",");
        let _ = write!(out, r#" stroke-dasharray="{joined}""#);
    }
    if let Some(size) = s.font_size {
        let _ = write!(out, r#" font-size="{}""#, num(size));
    }
    if let Some(family) = &s.font_family {
        let _ = write!(out, r#" font-family="{}""#, escape(family));
    }
    if let Some(anchor) = s.text_anchor {
        let _ = write!(out, r#" text-anchor="{}""#, anchor.as_str());
    }
    if let Some(o) = s.opacity {
        let _ = write!(out, r#" opacity="{}""#, num(o));
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match &node.shape {
        Shape::Group(children) => {
            let _ = write!(out, "{indent}<g");
            common_attrs(out, node);
            out.push_str(">\n");
            for child in children {
                write_node(out, child, depth + 1);
            }
            let _ = writeln!(out, "{indent}</g>");
        }
        Shape::Line { x1, y1, x2, y2 } => {
            let _ = write!(out, r#"{indent}<line x1="{}" y1="{}" x2="{}" y2="{}""#, num(*x1), num(*y1), num(*x2), num(*y2));
            common_attrs(out, node);
            out.push_str("/>\n");
        }
        Shape::Rect { x, y, width, height } => {
            let _ = write!(out, r#"{indent}<rect x="{}" y="{}" width="{}" height="{}""#, num(*x), num(*y), num(*width), num(*height));
            common_attrs(out, node);
            out.push_str("/>\n");
        }
        Shape::Circle { cx, cy, r } => {
            let _ = write!(out, r#"{indent}<circle cx="{}" cy="{}" r="{}""#, num(*cx), num(*cy), num(*r));
            common_attrs(out, node);
            out.push_str("/>\n");
        }
        Shape::Text { x, y, dy, content } => {
            let _ = write!(out, r#"{indent}<text x="{}" y="{}""#, num(*x), num(*y));
            if *dy != 0.0 {
                let _ = write!(out, r#" dy="{}em""#, num(*dy));
            }
            common_attrs(out, node);
            let _ = writeln!(out, ">{}</text>", escape(content));
        }
        Shape::Path(cmds) => {
            let _ = write!(out, r#"{indent}<path d="{}""#, path_data(cmds));
            common_attrs(out, node);
            out.push_str("/>\n");
        }
    }
}

/// Standalone SVG document for `panel`. The theme supplies `currentColor`,
/// the inherited text fill and the canvas background.
pub fn to_svg_string(panel: &Panel, theme: &Theme) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" color="{}" fill="{}" style="background-color: {}">"#,
        panel.width,
        panel.height,
        to_hex(theme.foreground),
        to_hex(theme.foreground),
        to_hex(theme.background),
    );
    write_node(&mut out, &panel.root, 1);
    out.push_str("</svg>\n");
    out
}

/// Write `panel` as an SVG file, creating parent directories.
pub fn write_svg(panel: &Panel, theme: &Theme, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_svg_string(panel, theme))
}
