// File: crates/petalplot-core/src/page.rs
// Summary: HTML page that places each panel's SVG inside its fixed container div.

use std::fmt::Write;

use crate::scene::Panel;
use crate::svg::{escape, to_svg_string};
use crate::theme::{to_hex, Theme};

/// Page with one `<div id=...>` per panel, in the given order.
pub fn render_page(title: &str, panels: &[&Panel], theme: &Theme) -> String {
    let mut html = String::with_capacity(64 * 1024);
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"en\">");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\">");
    let _ = writeln!(html, "<title>{}</title>", escape(title));
    let _ = writeln!(
        html,
        "<style>body {{ background: {}; color: {}; font-family: sans-serif; }}</style>",
        to_hex(theme.background),
        to_hex(theme.foreground),
    );
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    for panel in panels {
        let _ = writeln!(html, "<div id=\"{}\">", escape(&panel.id));
        html.push_str(&to_svg_string(panel, theme));
        let _ = writeln!(html, "</div>");
    }
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}
