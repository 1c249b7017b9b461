// File: crates/petalplot-core/tests/scales.rs
// Purpose: Linear/band/ordinal scale mapping, tick generation and tick labels.

use petalplot_core::scale::format_fixed;
use petalplot_core::{BandScale, LinearScale, OrdinalScale};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn linear_maps_and_inverts() {
    let s = LinearScale::new([0.0, 7.4], [0.0, 420.0]);
    assert_eq!(s.apply(0.0), 0.0);
    assert!(close(s.apply(7.4), 420.0));
    assert!(close(s.apply(3.7), 210.0));
    assert!(close(s.invert(210.0), 3.7));

    // inverted range: y grows downward
    let y = LinearScale::new([-0.5, 3.0], [340.0, 0.0]);
    assert!(close(y.apply(-0.5), 340.0));
    assert!(close(y.apply(3.0), 0.0));
}

#[test]
fn degenerate_domain_maps_to_midpoint() {
    let s = LinearScale::new([2.0, 2.0], [0.0, 100.0]);
    assert_eq!(s.apply(2.0), 50.0);
    assert_eq!(s.apply(9.0), 50.0);
}

#[test]
fn nan_domain_propagates() {
    let s = LinearScale::new([0.0, f64::NAN], [0.0, 100.0]);
    assert!(s.apply(1.0).is_nan());
    assert!(s.ticks(8).is_empty());
}

#[test]
fn ticks_pick_round_steps() {
    let x = LinearScale::new([0.0, 7.4], [0.0, 420.0]);
    assert_eq!(x.ticks(8), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);

    let y = LinearScale::new([-0.5, 3.0], [340.0, 0.0]);
    assert_eq!(y.ticks(8), vec![-0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0]);

    let b = LinearScale::new([0.0, 6.9], [340.0, 0.0]);
    let t = b.ticks(10);
    assert_eq!(t.len(), 14);
    assert_eq!(t[0], 0.0);
    assert_eq!(t[13], 6.5);
}

#[test]
fn tick_labels_follow_step_precision() {
    let x = LinearScale::new([0.0, 7.4], [0.0, 420.0]);
    let fx = x.tick_format(8);
    assert_eq!(fx(3.0), "3");

    let y = LinearScale::new([-0.5, 3.0], [340.0, 0.0]);
    let fy = y.tick_format(8);
    assert_eq!(fy(-0.5), "\u{2212}0.5");
    assert_eq!(fy(0.0), "0.0");
    assert_eq!(fy(2.5), "2.5");
}

#[test]
fn fixed_format_groups_thousands_and_hides_negative_zero() {
    assert_eq!(format_fixed(1234.5, 1), "1,234.5");
    assert_eq!(format_fixed(-0.04, 1), "0.0");
    assert_eq!(format_fixed(f64::NAN, 2), "NaN");
}

#[test]
fn band_layout_with_padding() {
    let s = BandScale::new(["setosa", "versicolor", "virginica"], [0.0, 530.0]).padding(0.1);
    let step = 530.0 / 3.1;
    assert!(close(s.step(), step));
    assert!(close(s.bandwidth(), step * 0.9));
    let a = s.apply("setosa").unwrap();
    let b = s.apply("versicolor").unwrap();
    let c = s.apply("virginica").unwrap();
    assert!(close(a, step * 0.1));
    assert!(close(b - a, step));
    assert!(close(c + s.bandwidth() + step * 0.1, 530.0));
    assert_eq!(s.apply("unknown"), None);
}

#[test]
fn band_domain_is_distinct_in_order() {
    let s = BandScale::new(["b", "a", "b", "c", "a"], [0.0, 300.0]);
    assert_eq!(s.len(), 3);
    assert_eq!(s.domain().collect::<Vec<_>>(), ["b", "a", "c"]);
    assert!(close(s.apply("a").unwrap(), 100.0));
    assert!(close(s.bandwidth(), 100.0));
}

#[test]
fn ordinal_cycles_and_extends() {
    let mut s = OrdinalScale::new(["x", "y", "z"], vec![1, 2]);
    assert_eq!(s.get("x"), Some(1));
    assert_eq!(s.get("y"), Some(2));
    assert_eq!(s.get("z"), Some(1));
    assert_eq!(s.get("w"), None);
    assert_eq!(s.map("w"), Some(2));
    assert_eq!(s.get("w"), Some(2));
    assert_eq!(s.map("x"), Some(1));
    assert_eq!(s.domain().count(), 4);
}
