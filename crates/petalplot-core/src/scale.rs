// File: crates/petalplot-core/src/scale.rs
// Summary: Linear, band and ordinal scales mapping data values to pixels and colours.

use indexmap::IndexSet;

/// Continuous data value.
pub type Value = f64;
/// Pixel coordinate inside a panel.
pub type Pixel = f64;

/// Default tick count when an axis does not ask for one.
pub const DEFAULT_TICKS: usize = 10;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Continuous linear map from a two-point domain onto a two-point range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: [Value; 2],
    pub range: [Pixel; 2],
}

impl LinearScale {
    pub fn new(domain: [Value; 2], range: [Pixel; 2]) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn apply(&self, v: Value) -> Pixel {
        let ([d0, d1], [r0, r1]) = (self.domain, self.range);
        if d1 < d0 {
            interpolate(r1, r0, normalize(d1, d0, v))
        } else {
            interpolate(r0, r1, normalize(d0, d1, v))
        }
    }

    #[inline]
    pub fn invert(&self, px: Pixel) -> Value {
        let ([d0, d1], [r0, r1]) = (self.domain, self.range);
        if r1 < r0 {
            interpolate(d1, d0, normalize(r1, r0, px))
        } else {
            interpolate(d0, d1, normalize(r0, r1, px))
        }
    }

    /// Roughly `count` evenly spaced round values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        ticks(self.domain[0], self.domain[1], count as f64)
    }

    /// Formatter matched to the spacing of [`LinearScale::ticks`].
    pub fn tick_format(&self, count: usize) -> impl Fn(Value) -> String {
        let step = tick_step(self.domain[0], self.domain[1], count as f64);
        let precision = precision_fixed(step);
        move |v| format_fixed(v, precision)
    }
}

fn normalize(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span.is_nan() {
        f64::NAN
    } else if span == 0.0 {
        0.5
    } else {
        (x - a) / span
    }
}

#[inline]
fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Integer tick bounds and increment; a negative increment means "divide by".
fn tick_range(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = js_round(start * inv);
        i2 = js_round(stop * inv);
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = js_round(start / inc);
        i2 = js_round(stop / inc);
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

// Round half toward +inf.
#[inline]
fn js_round(x: f64) -> f64 {
    (x + 0.5).floor()
}

pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse { tick_range(stop, start, count) } else { tick_range(start, stop, count) };
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    (0..n)
        .map(|i| {
            let k = if reverse { i2 - i as f64 } else { i1 + i as f64 };
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

/// Distance between adjacent ticks for the given domain and count.
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let (_, _, inc) = if reverse { tick_range(stop, start, count) } else { tick_range(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Decimal digits needed to tell ticks `step` apart.
fn precision_fixed(step: f64) -> usize {
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let sci = format!("{:e}", step.abs());
    let exp = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse::<i32>().ok())
        .unwrap_or(0);
    (-exp).max(0) as usize
}

/// Fixed-point label with thousands grouping and a typographic minus sign.
pub fn format_fixed(v: f64, precision: usize) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity".to_string() } else { "\u{2212}Infinity".to_string() };
    }
    let body = format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body.as_str(), None),
    };
    let mut out = String::with_capacity(body.len() + 4);
    let negative = v < 0.0 && body.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if negative {
        out.push('\u{2212}');
    }
    let digits = int_part.as_bytes();
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d as char);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Categorical map onto equal-width bands with inner/outer padding.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: IndexSet<String>,
    pub range: [Pixel; 2],
    pub padding_inner: f64,
    pub padding_outer: f64,
    pub align: f64,
}

impl BandScale {
    /// Duplicate keys collapse onto their first occurrence.
    pub fn new<I, S>(domain: I, range: [Pixel; 2]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: domain.into_iter().map(Into::into).collect(),
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
        }
    }

    /// Set inner and outer padding together.
    pub fn padding(mut self, p: f64) -> Self {
        self.padding_inner = p.min(1.0);
        self.padding_outer = p;
        self
    }

    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.domain.len() }

    pub fn is_empty(&self) -> bool { self.domain.is_empty() }

    /// Returns (start, step) after padding and alignment.
    fn layout(&self) -> (f64, f64) {
        let n = self.domain.len() as f64;
        let [r0, r1] = self.range;
        let (start, stop) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        let step = (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        let start = start + (stop - start - step * (n - self.padding_inner)) * self.align;
        (start, step)
    }

    pub fn step(&self) -> f64 {
        self.layout().1
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Left edge of the band for `key`, or `None` for an unknown key.
    pub fn apply(&self, key: &str) -> Option<Pixel> {
        let i = self.domain.get_index_of(key)?;
        let (start, step) = self.layout();
        let n = self.domain.len();
        let slot = if self.range[1] < self.range[0] { n - 1 - i } else { i };
        Some(start + step * slot as f64)
    }
}

/// First-seen categorical domain onto a cyclic output range.
#[derive(Clone, Debug)]
pub struct OrdinalScale<T> {
    domain: IndexSet<String>,
    range: Vec<T>,
}

impl<T: Clone> OrdinalScale<T> {
    pub fn new<I, S>(domain: I, range: Vec<T>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { domain: domain.into_iter().map(Into::into).collect(), range }
    }

    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    /// Output for a known key; `None` for unknown keys or an empty range.
    pub fn get(&self, key: &str) -> Option<T> {
        let i = self.domain.get_index_of(key)?;
        self.range.get(i % self.range.len().max(1)).cloned()
    }

    /// Output for `key`, appending it to the domain first when unseen.
    pub fn map(&mut self, key: &str) -> Option<T> {
        let (i, _) = self.domain.insert_full(key.to_string());
        self.range.get(i % self.range.len().max(1)).cloned()
    }
}
