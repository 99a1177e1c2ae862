// File: crates/chart-data/src/multi_series.rs
// Summary: Parallel value sequences sharing one fixed, validated key list.

use crate::error::{DataError, Result};
use crate::series::Series;

/// Capability needed from a MultiSeries child: a fixed length and positional
/// value access. `title` is only consulted by [`MultiSeries::titles`].
pub trait SubSeries {
    fn len(&self) -> usize;
    fn value_at(&self, index: usize) -> f64;
    fn title(&self) -> &str {
        ""
    }
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Minimal owned child: a title and a flat value list.
#[derive(Clone, Debug)]
pub struct ValueSeries {
    pub title: String,
    pub values: Vec<f64>,
}

impl ValueSeries {
    pub fn new(title: impl Into<String>, values: Vec<f64>) -> Self {
        Self { title: title.into(), values }
    }
}

impl SubSeries for ValueSeries {
    fn len(&self) -> usize { self.values.len() }
    fn value_at(&self, index: usize) -> f64 { self.values[index] }
    fn title(&self) -> &str { &self.title }
}

impl SubSeries for Vec<f64> {
    fn len(&self) -> usize { self.len() }
    fn value_at(&self, index: usize) -> f64 { self[index] }
}

// A full Series qualifies too; positions follow its ascending key order.
impl SubSeries for Series {
    fn len(&self) -> usize { self.len() }
    fn value_at(&self, index: usize) -> f64 { self.items()[index].1 }
    fn title(&self) -> &str { &self.title }
}

/// One or more child sequences all aligned to a single frozen key list.
///
/// Unlike [`crate::SeriesSet`], lookup is exact: keys are validated and
/// sorted once at construction and [`get`](Self::get) never interpolates.
pub struct MultiSeries {
    keys: Vec<f64>,
    series: Vec<Box<dyn SubSeries>>,
}

impl MultiSeries {
    /// Validates that `keys` are pairwise distinct, then numeric (NaN is
    /// rejected), then sorts ascending and freezes them.
    pub fn new(keys: Vec<f64>) -> Result<Self> {
        let mut keys = keys;
        keys.sort_by(f64::total_cmp);
        for pair in keys.windows(2) {
            // NaN never compares equal here, so NaN pairs fall through to
            // the numeric check below.
            if pair[0] == pair[1] {
                return Err(DataError::DuplicateKey(pair[0].to_string()));
            }
        }
        if let Some(nan) = keys.iter().find(|k| k.is_nan()) {
            return Err(DataError::NonNumericKey(nan.to_string()));
        }
        Ok(Self { keys, series: Vec::new() })
    }

    /// Build from string labels, parsing each as f64. Label distinctness is
    /// checked before parsing; an unparseable label fails NonNumericKey.
    pub fn from_labels<I, L>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let labels: Vec<L> = labels.into_iter().collect();
        let mut seen: Vec<&str> = labels.iter().map(|l| l.as_ref()).collect();
        seen.sort_unstable();
        for pair in seen.windows(2) {
            if pair[0] == pair[1] {
                return Err(DataError::DuplicateKey(pair[0].to_string()));
            }
        }
        let keys = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                label
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| DataError::NonNumericKey(label.to_string()))
            })
            .collect::<Result<Vec<f64>>>()?;
        Self::new(keys)
    }

    /// The frozen key list, ascending.
    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// Attach a child; its length must match the key count exactly.
    pub fn add_series<S: SubSeries + 'static>(&mut self, series: S) -> Result<()> {
        if series.len() != self.keys.len() {
            return Err(DataError::LengthMismatch {
                expected: self.keys.len(),
                got: series.len(),
            });
        }
        self.series.push(Box::new(series));
        Ok(())
    }

    pub fn len(&self) -> usize { self.series.len() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    /// `(key, values-at-key)` per position in ascending key order, collected
    /// lazily from every child.
    pub fn items(&self) -> impl Iterator<Item = (f64, Vec<f64>)> + '_ {
        self.keys.iter().enumerate().map(move |(i, &key)| {
            let values = self.series.iter().map(|s| s.value_at(i)).collect();
            (key, values)
        })
    }

    /// Per-child values at exactly `key`. No interpolation fallback: an
    /// absent key fails KeyNotFound.
    pub fn get(&self, key: f64) -> Result<Vec<f64>> {
        let i = self
            .keys
            .binary_search_by(|k| k.total_cmp(&key))
            .map_err(|_| DataError::KeyNotFound(key))?;
        Ok(self.series.iter().map(|s| s.value_at(i)).collect())
    }

    /// Raw child at the given attachment position. Panics if out of range,
    /// like any slice index.
    pub fn get_series(&self, index: usize) -> &dyn SubSeries {
        &*self.series[index]
    }

    /// Sum across all children at each key, ascending key order.
    pub fn totals(&self) -> Vec<f64> {
        (0..self.keys.len())
            .map(|i| self.series.iter().map(|s| s.value_at(i)).sum())
            .collect()
    }

    /// Child titles in attachment order.
    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.iter().map(|s| s.title())
    }
}
