// File: crates/chart-data/src/series_set.rs
// Summary: Ordered collection of Series with union-key aggregation (stacks, totals).

use crate::error::{DataError, Result};
use crate::series::Series;

/// Zero or more [`Series`] in insertion order.
///
/// Members keep their own key sets; aggregation aligns them through
/// [`Series::interpolate`] over the sorted union of all member keys.
#[derive(Clone, Debug, Default)]
pub struct SeriesSet {
    series: Vec<Series>,
}

impl SeriesSet {
    pub fn new() -> Self {
        Self { series: Vec::new() }
    }

    pub fn from_series(series: Vec<Series>) -> Self {
        Self { series }
    }

    /// Append a series. No compatibility check against existing members.
    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn len(&self) -> usize { self.series.len() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    /// Members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    /// `(min, max)` over every member's key range; fails on an empty set.
    pub fn key_range(&self) -> Result<(f64, f64)> {
        self.fold_ranges(Series::key_range)
    }

    /// `(min, max)` over every member's value range; fails on an empty set.
    pub fn value_range(&self) -> Result<(f64, f64)> {
        self.fold_ranges(Series::value_range)
    }

    fn fold_ranges(&self, range: impl Fn(&Series) -> Result<(f64, f64)>) -> Result<(f64, f64)> {
        let mut out: Option<(f64, f64)> = None;
        for series in &self.series {
            let (lo, hi) = range(series)?;
            out = Some(match out {
                Some((min, max)) => (min.min(lo), max.max(hi)),
                None => (lo, hi),
            });
        }
        out.ok_or(DataError::EmptySeries)
    }

    /// Ascending sorted union of every member's own keys, deduplicated.
    pub fn keys(&self) -> Vec<f64> {
        let mut keys: Vec<f64> = self.series.iter().flat_map(|s| s.keys()).collect();
        keys.sort_by(f64::total_cmp);
        keys.dedup();
        keys
    }

    /// Like [`keys`](Self::keys), but each key carries the members that
    /// literally contain it (not members that merely cover it via
    /// interpolation), in insertion order.
    pub fn keys_with_series(&self) -> Vec<(f64, Vec<&Series>)> {
        self.keys()
            .into_iter()
            .map(|key| {
                let owners = self
                    .series
                    .iter()
                    .filter(|s| s.get(key).is_some())
                    .collect();
                (key, owners)
            })
            .collect()
    }

    /// `(member, interpolated value at key)` for every member in insertion
    /// order. Fails if any member has no points.
    pub fn stack(&self, key: f64) -> Result<Vec<(&Series, f64)>> {
        self.series
            .iter()
            .map(|s| Ok((s, s.interpolate(key)?)))
            .collect()
    }

    /// `(key, stack(key))` for every union key in ascending order.
    pub fn stacks(&self) -> Result<Vec<(f64, Vec<(&Series, f64)>)>> {
        self.keys()
            .into_iter()
            .map(|key| Ok((key, self.stack(key)?)))
            .collect()
    }

    /// `(key, sum of interpolated member values)` for every union key in
    /// ascending order.
    ///
    /// The returned iterator is a fresh, non-cached pass; call again to
    /// recompute from current data. Sums are computed on demand, one key at
    /// a time.
    pub fn totals(&self) -> impl Iterator<Item = Result<(f64, f64)>> + '_ {
        self.keys().into_iter().map(move |key| {
            let mut total = 0.0;
            for series in &self.series {
                total += series.interpolate(key)?;
            }
            Ok((key, total))
        })
    }
}

impl<'a> IntoIterator for &'a SeriesSet {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;
    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}
