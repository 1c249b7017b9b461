// File: crates/petalplot-core/src/stats.rs
// Summary: Max, quantile and per-species quartile summaries for the boxplot.

use indexmap::IndexMap;

use crate::data::Record;

/// Whisker reach in multiples of the interquartile range.
pub const WHISKER_IQR: f64 = 1.5;

/// Largest value, ignoring NaN. `None` when no comparable value exists.
pub fn max_of(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}

/// `p`-quantile of `values` with linear interpolation between closest ranks.
/// NaN entries are dropped; an empty sample has no quantile.
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, p)
}

/// Same as [`quantile`] but `sorted` must already be ascending and NaN-free.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || p.is_nan() {
        return None;
    }
    if p <= 0.0 || n < 2 {
        return Some(sorted[0]);
    }
    if p >= 1.0 {
        return Some(sorted[n - 1]);
    }
    let i = (n - 1) as f64 * p;
    let i0 = i.floor() as usize;
    let v0 = sorted[i0];
    let v1 = sorted[i0 + 1];
    Some(v0 + (v1 - v0) * (i - i0 as f64))
}

/// Quartile summary of one group. Fields are NaN for an empty group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
}

impl Quartiles {
    pub fn from_values(values: &[f64]) -> Self {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);
        let q = |p| quantile_sorted(&sorted, p).unwrap_or(f64::NAN);
        let (q1, median, q3) = (q(0.25), q(0.5), q(0.75));
        Self { q1, median, q3, iqr: q3 - q1 }
    }

    /// Lower whisker bound. Not clipped to the smallest observation.
    pub fn whisker_low(&self) -> f64 {
        self.q1 - WHISKER_IQR * self.iqr
    }

    /// Upper whisker bound. Not clipped to the largest observation.
    pub fn whisker_high(&self) -> f64 {
        self.q3 + WHISKER_IQR * self.iqr
    }
}

/// Petal lengths grouped by species, in first-seen order.
pub fn group_by_species(records: &[Record]) -> IndexMap<String, Vec<f64>> {
    let mut groups: IndexMap<String, Vec<f64>> = IndexMap::new();
    for r in records {
        groups.entry(r.species.clone()).or_default().push(r.petal_length);
    }
    groups
}

/// Quartile summary per species, in first-seen order.
pub fn quartiles_by_species(records: &[Record]) -> IndexMap<String, Quartiles> {
    group_by_species(records)
        .into_iter()
        .map(|(species, values)| (species, Quartiles::from_values(&values)))
        .collect()
}
