//! Scales
//!
//! Mappings from data space to pixel space: continuous (`LinearScale`),
//! categorical positions (`BandScale`) and categorical colors
//! (`OrdinalScale`). Numeric behavior follows the common charting
//! conventions: a collapsed linear domain maps to the middle of the range,
//! band scales deduplicate their keys, ordinal palettes wrap.

use std::collections::HashMap;
use std::hash::Hash;

/// Standard ten-color categorical palette.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Smallest and largest value, or `None` when `values` is empty.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Largest value, or `None` when `values` is empty.
pub fn max<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    extent(values).map(|(_, hi)| hi)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Distance between consecutive ticks for `count`, used to pick a
    /// label precision.
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Integer bounds and increment of a nice tick sequence. A negative
/// increment means "divide by its absolute value", which keeps decimal
/// ticks exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        i1 = (start * scale).round();
        i2 = (stop * scale).round();
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        inc = -scale;
    } else {
        let scale = 10f64.powf(power) * factor;
        i1 = (start / scale).round();
        i2 = (stop / scale).round();
        if i1 * scale < start {
            i1 += 1.0;
        }
        if i2 * scale > stop {
            i2 -= 1.0;
        }
        inc = scale;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut values: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        values.reverse();
    }
    values
}

pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if start == stop || count == 0 {
        return 0.0;
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// How axis tick labels are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    /// Thousands separators, decimals only as fine as the tick step needs.
    Grouped,
    /// Rounded integer, no separators.
    Integer,
}

impl TickFormat {
    pub fn format(&self, value: f64, step: f64) -> String {
        match self {
            TickFormat::Integer => with_minus(format!("{}", value.round().abs() as i64), value),
            TickFormat::Grouped => {
                let precision = precision_fixed(step);
                let digits = format!("{:.*}", precision, value.abs());
                let (int_part, frac_part) = match digits.split_once('.') {
                    Some((i, f)) => (i.to_string(), Some(f.to_string())),
                    None => (digits.clone(), None),
                };
                let mut out = group_thousands(&int_part);
                if let Some(frac) = frac_part {
                    out.push('.');
                    out.push_str(&frac);
                }
                with_minus(out, value)
            }
        }
    }
}

fn with_minus(digits: String, value: f64) -> String {
    let is_zero = digits.chars().all(|c| matches!(c, '0' | '.' | ','));
    if value < 0.0 && !is_zero {
        format!("\u{2212}{}", digits)
    } else {
        digits
    }
}

/// Decimal places needed to tell ticks `step` apart.
fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    // Read the exponent from scientific notation so 0.1 is exactly -1.
    let exponent: i32 = format!("{:e}", step)
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);
    (-exponent).max(0) as usize
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Evenly spaced bands for an ordered set of keys.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K> {
    keys: Vec<K>,
    start: f64,
    step: f64,
    bandwidth: f64,
    reverse: bool,
}

impl<K: PartialEq + Clone> BandScale<K> {
    /// Inner and outer padding are both `padding`; bands are centered in the
    /// range.
    pub fn new<I>(keys: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut unique: Vec<K> = Vec::new();
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }

        let n = unique.len() as f64;
        let (r0, r1) = range;
        let reverse = r1 < r0;
        let (lo, hi) = if reverse { (r1, r0) } else { (r0, r1) };
        let padding_inner = padding;
        let padding_outer = padding;
        let align = 0.5;

        let step = (hi - lo) / (n - padding_inner + padding_outer * 2.0).max(1.0);
        let start = lo + (hi - lo - step * (n - padding_inner)) * align;
        let bandwidth = step * (1.0 - padding_inner);

        Self {
            keys: unique,
            start,
            step,
            bandwidth,
            reverse,
        }
    }

    /// Leading edge of the band for `key`.
    pub fn position(&self, key: &K) -> Option<f64> {
        let index = self.keys.iter().position(|k| k == key)?;
        let slot = if self.reverse {
            self.keys.len() - 1 - index
        } else {
            index
        };
        Some(self.start + self.step * slot as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}

/// Categorical color assignment in first-seen key order.
#[derive(Debug, Clone)]
pub struct OrdinalScale<K> {
    index: HashMap<K, usize>,
    palette: &'static [&'static str],
}

impl<K: Eq + Hash + Clone> OrdinalScale<K> {
    pub fn new<I>(keys: I, palette: &'static [&'static str]) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut scale = Self {
            index: HashMap::new(),
            palette,
        };
        for key in keys {
            scale.intern(key);
        }
        scale
    }

    fn intern(&mut self, key: K) -> usize {
        let next = self.index.len();
        *self.index.entry(key).or_insert(next)
    }

    /// Color for `key`. Keys outside the initial domain are appended.
    pub fn color(&mut self, key: &K) -> &'static str {
        let slot = self.intern(key.clone());
        self.palette[slot % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_linear_maps_endpoints_and_midpoint() {
        let scale = LinearScale::new((0.0, 20.0), (0.0, 420.0));
        assert_close(scale.map(0.0), 0.0);
        assert_close(scale.map(20.0), 420.0);
        assert_close(scale.map(10.0), 210.0);
    }

    #[test]
    // Inverted ranges place larger values closer to the origin.
    fn test_linear_inverted_range() {
        let scale = LinearScale::new((0.0, 100.0), (360.0, 0.0));
        assert_close(scale.map(100.0), 0.0);
        assert_close(scale.map(25.0), 270.0);
    }

    #[test]
    // A single-valued domain maps everything to the middle of the range.
    fn test_linear_collapsed_domain() {
        let scale = LinearScale::new((7.0, 7.0), (5.0, 50.0));
        assert_close(scale.map(7.0), 27.5);
        assert_close(scale.map(1000.0), 27.5);
    }

    #[test]
    fn test_extent_and_max() {
        assert_eq!(extent([3.0, -1.0, 8.0]), Some((-1.0, 8.0)));
        assert_eq!(max([3.0, 8.0, 1.0]), Some(8.0));
        assert_eq!(extent(std::iter::empty()), None);
    }

    #[test]
    fn test_ticks_are_round_numbers() {
        assert_eq!(
            ticks(0.0, 163.0, 10),
            vec![
                0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0, 140.0, 160.0
            ]
        );
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(5.0, 5.0, 10), vec![5.0]);
        assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
        assert!(ticks(0.0, 10.0, 0).is_empty());
    }

    #[test]
    fn test_tick_format() {
        assert_eq!(TickFormat::Grouped.format(1200.0, 200.0), "1,200");
        assert_eq!(TickFormat::Grouped.format(0.5, 0.1), "0.5");
        assert_eq!(TickFormat::Grouped.format(40.0, 20.0), "40");
        assert_eq!(TickFormat::Integer.format(3500.0, 500.0), "3500");
        assert_eq!(TickFormat::Integer.format(-2.0, 1.0), "\u{2212}2");
    }

    #[test]
    fn test_tick_step() {
        assert_close(tick_step(0.0, 163.0, 10), 20.0);
        assert_close(tick_step(0.0, 1.0, 5), 0.2);
    }

    #[test]
    // Ten keys with padding 0.1 over 340px: step 340/10.1, centered.
    fn test_band_positions_in_input_order() {
        let scale = BandScale::new(1..=10u32, (0.0, 340.0), 0.1);
        let step = 340.0 / 10.1;
        assert_close(scale.bandwidth(), step * 0.9);
        assert_close(scale.position(&1).unwrap(), step * 0.1);
        assert_close(
            scale.position(&2).unwrap() - scale.position(&1).unwrap(),
            step,
        );
        // Last band ends one outer padding before the range end.
        assert_close(
            scale.position(&10).unwrap() + scale.bandwidth(),
            340.0 - step * 0.1,
        );
        assert_eq!(scale.position(&11), None);
    }

    #[test]
    fn test_band_deduplicates_keys() {
        let scale = BandScale::new([5u32, 7, 5], (0.0, 100.0), 0.0);
        assert_eq!(scale.keys(), &[5, 7]);
        assert_close(scale.bandwidth(), 50.0);
    }

    #[test]
    fn test_ordinal_assigns_palette_in_first_seen_order() {
        let mut scale = OrdinalScale::new([30u32, 10, 20], &CATEGORY10);
        assert_eq!(scale.color(&30), CATEGORY10[0]);
        assert_eq!(scale.color(&10), CATEGORY10[1]);
        assert_eq!(scale.color(&20), CATEGORY10[2]);
        // Deterministic on repeat lookups.
        assert_eq!(scale.color(&10), CATEGORY10[1]);
    }

    #[test]
    fn test_ordinal_palette_wraps() {
        let mut scale = OrdinalScale::new(0u32..12, &CATEGORY10);
        assert_eq!(scale.color(&10), CATEGORY10[0]);
        assert_eq!(scale.color(&11), CATEGORY10[1]);
        // Unknown keys take the next slot.
        assert_eq!(scale.color(&99), CATEGORY10[2]);
    }
}
