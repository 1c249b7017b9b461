// File: crates/petalplot-core/tests/charts.rs
// Purpose: Scatter and boxplot panels built from small datasets: counts, domains, colours and glyph geometry.

use petalplot_core::boxplot::{build_boxplot, BoxScales};
use petalplot_core::scatter::{build_scatter, ScatterScales};
use petalplot_core::scene::{Paint, Shape};
use petalplot_core::stats::quartiles_by_species;
use petalplot_core::theme::category10;
use petalplot_core::{render_charts, Dataset, Node, PanelLayout, Record, RenderOptions, Theme};

fn sample() -> Dataset {
    Dataset::from_records(vec![
        Record::new("setosa", 1.4, 0.2),
        Record::new("setosa", 1.4, 0.2),
        Record::new("setosa", 1.3, 0.2),
        Record::new("setosa", 1.5, 0.2),
        Record::new("setosa", 1.4, 0.2),
        Record::new("versicolor", 4.7, 1.4),
        Record::new("versicolor", 4.5, 1.5),
        Record::new("versicolor", 4.9, 1.5),
        Record::new("virginica", 6.0, 2.5),
        Record::new("virginica", 5.1, 1.9),
    ])
}

/// Circles placed directly in the plot group (legend swatches live deeper).
fn points(root: &Node) -> Vec<&Node> {
    root.children().iter().filter(|n| n.is_circle()).collect()
}

fn line_coords(n: &Node) -> (f64, f64, f64, f64) {
    match n.shape {
        Shape::Line { x1, y1, x2, y2 } => (x1, y1, x2, y2),
        _ => panic!("not a line"),
    }
}

#[test]
fn scatter_domains_pad_the_maxima() {
    let ds = sample();
    let s = ScatterScales::new(&ds, &PanelLayout::scatter(), &Theme::light());
    assert_eq!(s.x.domain, [0.0, 6.0 + 0.5]);
    assert_eq!(s.y.domain, [-0.5, 2.5 + 0.5]);
    assert_eq!(s.x.range, [0.0, 420.0]);
    assert_eq!(s.y.range, [340.0, 0.0]);
}

#[test]
fn scatter_has_one_point_per_record() {
    let ds = sample();
    let panel = build_scatter(&ds, &PanelLayout::scatter(), &Theme::light());
    assert_eq!(panel.id, "scatterplot");
    assert_eq!((panel.width, panel.height), (600, 400));
    assert_eq!(points(&panel.root).len(), ds.len());
}

#[test]
fn species_colours_are_stable_between_points_and_legend() {
    let ds = sample();
    let panel = build_scatter(&ds, &PanelLayout::scatter(), &Theme::light());
    let palette = category10();

    let items = panel.select_all("legend-item");
    assert_eq!(items.len(), 3);
    let mut legend = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let swatch = &item.children()[0];
        let label = item.children()[1].text_content().unwrap().to_string();
        assert_eq!(swatch.style.fill, Some(Paint::Color(palette[i])));
        legend.push((label, swatch.style.fill));
    }
    assert_eq!(legend[0].0, "setosa");
    assert_eq!(legend[2].0, "virginica");

    for (rec, point) in ds.records.iter().zip(points(&panel.root)) {
        let want = legend.iter().find(|(s, _)| *s == rec.species).unwrap().1;
        assert_eq!(point.style.fill, want, "colour for {}", rec.species);
    }
}

#[test]
fn scatter_gridlines_are_dashed() {
    let ds = sample();
    let theme = Theme::light();
    let panel = build_scatter(&ds, &PanelLayout::scatter(), &theme);
    let ticks = panel.select_all("tick");
    assert!(!ticks.is_empty());
    for tick in ticks {
        let line = tick.children().iter().find(|n| n.is_line()).unwrap();
        assert_eq!(line.style.stroke, Some(Paint::Color(theme.grid)));
        assert_eq!(line.style.stroke_dasharray.as_deref(), Some(&[2.0, 2.0][..]));
    }
    // x ticks span the plot height upward
    let x_axis = panel.select_all("x-axis")[0];
    let first_tick = x_axis.select_all("tick")[0];
    let (_, _, _, y2) = line_coords(&first_tick.children()[0]);
    assert_eq!(y2, -340.0);
}

#[test]
fn scatter_labels_and_legend_position() {
    let panel = build_scatter(&sample(), &PanelLayout::scatter(), &Theme::light());
    let x_label = panel.select_all("x")[0];
    assert_eq!(x_label.text_content(), Some("Petal Length"));
    match x_label.shape {
        Shape::Text { x, y, .. } => assert_eq!((x, y), (210.0, 375.0)),
        _ => panic!("x label is not text"),
    }
    let y_label = panel.select_all("y")[0];
    assert_eq!(y_label.text_content(), Some("Petal Width"));
    assert_eq!(y_label.transform.rotate, Some(-90.0));
    let legend = panel.select_all("legend")[0];
    assert_eq!(legend.transform.translate, Some((430.0, 0.0)));
}

#[test]
fn boxplot_has_one_glyph_per_species() {
    let ds = sample();
    let panel = build_boxplot(&ds, &PanelLayout::boxplot(), &Theme::light());
    assert_eq!(panel.id, "boxplot");
    assert_eq!(panel.select_all("box").len(), 3);
    assert_eq!(panel.select_all("whisker").len(), 3);
    assert_eq!(panel.select_all("median").len(), 3);
}

#[test]
fn boxplot_whiskers_use_tukey_bounds() {
    let ds = sample();
    let layout = PanelLayout::boxplot();
    let scales = BoxScales::new(&ds, &layout);
    assert_eq!(scales.y.domain, [0.0, 6.0]);
    let panel = build_boxplot(&ds, &layout, &Theme::light());
    let quartiles = quartiles_by_species(&ds.records);

    for ((species, q), whisker) in quartiles.iter().zip(panel.select_all("whisker")) {
        let (x1, y1, x2, y2) = line_coords(whisker);
        let band = scales.x.apply(species).unwrap();
        assert_eq!(x1, band + scales.x.bandwidth() / 2.0);
        assert_eq!(x1, x2);
        assert_eq!(y1, scales.y.apply(q.q1 - 1.5 * q.iqr));
        assert_eq!(y2, scales.y.apply(q.q3 + 1.5 * q.iqr));
    }

    // setosa sample is degenerate: box and whisker collapse onto the median
    let setosa_box = panel.select_all("box")[0];
    match setosa_box.shape {
        Shape::Rect { height, .. } => assert_eq!(height, 0.0),
        _ => panic!("box is not a rect"),
    }
    let (_, y1, _, y2) = line_coords(panel.select_all("whisker")[0]);
    assert_eq!(y1, y2);
}

#[test]
fn boxplot_median_spans_band() {
    let ds = sample();
    let layout = PanelLayout::boxplot();
    let scales = BoxScales::new(&ds, &layout);
    let panel = build_boxplot(&ds, &layout, &Theme::light());
    let median = panel.select_all("median")[1];
    let (x1, y1, x2, y2) = line_coords(median);
    let band = scales.x.apply("versicolor").unwrap();
    assert_eq!((x1, x2), (band, band + scales.x.bandwidth()));
    assert_eq!(y1, scales.y.apply(4.7));
    assert_eq!(y1, y2);
    assert_eq!(median.style.stroke_width, Some(2.0));
}

#[test]
fn nan_values_propagate_into_attributes() {
    let ds = Dataset::from_records(vec![
        Record::from_cells("setosa", "abc", "0.2"),
        Record::new("setosa", 1.4, 0.3),
    ]);
    let panel = build_scatter(&ds, &PanelLayout::scatter(), &Theme::light());
    let pts = points(&panel.root);
    match pts[0].shape {
        Shape::Circle { cx, .. } => assert!(cx.is_nan()),
        _ => unreachable!(),
    }
    // max ignores the NaN, so the domain is still defined
    let s = ScatterScales::new(&ds, &PanelLayout::scatter(), &Theme::light());
    assert_eq!(s.x.domain[1], 1.9);
}

#[test]
fn empty_dataset_renders_without_panicking() {
    let charts = render_charts(&Dataset::default(), &RenderOptions::default());
    assert!(points(&charts.scatter.root).is_empty());
    assert!(charts.boxplot.select_all("box").is_empty());
}

#[test]
fn select_all_returns_nodes_in_document_order() {
    let root = Node::group(vec![
        Node::group(vec![Node::text(0.0, 0.0, "inner").class("mark")]).class("mark"),
        Node::text(0.0, 0.0, "sibling"),
    ]);
    let order: Vec<_> = root
        .descendants()
        .into_iter()
        .map(|n| n.text_content().unwrap_or("g"))
        .collect();
    assert_eq!(order, ["g", "g", "inner", "sibling"]);
    let marks: Vec<_> = root.select_all("mark").into_iter().map(|n| n.text_content().unwrap_or("g")).collect();
    assert_eq!(marks, ["g", "inner"]);
}

#[test]
fn axis_ticks_follow_scale_order() {
    let panel = build_boxplot(&sample(), &PanelLayout::boxplot(), &Theme::light());
    let labels: Vec<_> = panel.select_all("x-axis")[0]
        .descendants()
        .into_iter()
        .filter_map(|n| n.text_content())
        .collect();
    assert_eq!(labels, ["setosa", "versicolor", "virginica"]);
}
