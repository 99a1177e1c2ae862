// File: crates/chart-data/src/series.rs
// Summary: Single named series of (key, value) points with interpolation.

use crate::color::hex_to_rgba;
use crate::error::{DataError, Result};

const DEFAULT_COLOR: &str = "000000ff";

/// One named dataset keyed by unique numeric keys.
///
/// Points are key-sorted at construction; a later duplicate key replaces an
/// earlier one, so lookups behave like a map. The data is fixed after
/// construction.
#[derive(Clone, Debug)]
pub struct Series {
    pub title: String,
    color: String,
    points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(title: impl Into<String>, data: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut points: Vec<(f64, f64)> = data.into_iter().collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        // Stable sort keeps insertion order among equal keys, so the last
        // inserted point wins for a repeated key.
        let mut deduped: Vec<(f64, f64)> = Vec::with_capacity(points.len());
        for p in points {
            match deduped.last_mut() {
                Some(last) if last.0 == p.0 => *last = p,
                _ => deduped.push(p),
            }
        }
        Self { title: title.into(), color: DEFAULT_COLOR.to_string(), points: deduped }
    }

    /// Set the color from a hex string; a leading `#` is stripped before storing.
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.strip_prefix('#').unwrap_or(color).to_string();
        self
    }

    /// Stored color string (normalized, no leading `#`).
    pub fn color(&self) -> &str { &self.color }

    /// Color as `(r, g, b, a)` bytes. Hex validation happens in
    /// [`hex_to_rgba`], not here.
    pub fn color_as_rgba(&self) -> Result<(u8, u8, u8, u8)> {
        hex_to_rgba(&self.color)
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(k, _)| k)
    }

    /// Values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, v)| v)
    }

    /// The (key, value) points, ascending by key.
    pub fn items(&self) -> &[(f64, f64)] { &self.points }

    /// Value stored at exactly `key`, if present.
    pub fn get(&self, key: f64) -> Option<f64> {
        self.points
            .binary_search_by(|p| p.0.total_cmp(&key))
            .ok()
            .map(|i| self.points[i].1)
    }

    /// `(min key, max key)`; fails on a series with no points.
    pub fn key_range(&self) -> Result<(f64, f64)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Ok((first.0, last.0)),
            _ => Err(DataError::EmptySeries),
        }
    }

    /// `(min value, max value)`; fails on a series with no points.
    pub fn value_range(&self) -> Result<(f64, f64)> {
        if self.points.is_empty() {
            return Err(DataError::EmptySeries);
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &(_, v) in &self.points {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        Ok((lo, hi))
    }

    /// Value at `key`, with linear interpolation between neighboring points
    /// and constant extrapolation beyond the observed range.
    ///
    /// An exact key hit returns the stored value with no float blending.
    pub fn interpolate(&self, key: f64) -> Result<f64> {
        if self.points.is_empty() {
            return Err(DataError::EmptySeries);
        }
        match self.points.binary_search_by(|p| p.0.total_cmp(&key)) {
            Ok(i) => Ok(self.points[i].1),
            // Below the smallest key: clamp to the first value.
            Err(0) => Ok(self.points[0].1),
            // Above the largest key: clamp to the last value.
            Err(i) if i == self.points.len() => Ok(self.points[i - 1].1),
            Err(i) => {
                let (pre_key, pre_val) = self.points[i - 1];
                let (post_key, post_val) = self.points[i];
                let fraction = (key - pre_key) / (post_key - pre_key);
                Ok(pre_val + fraction * (post_val - pre_val))
            }
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a (f64, f64);
    type IntoIter = std::slice::Iter<'a, (f64, f64)>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
