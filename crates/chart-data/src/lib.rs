// File: crates/chart-data/src/lib.rs
// Summary: Core library entry point; exports the series data model API.

pub mod color;
pub mod error;
pub mod multi_series;
pub mod series;
pub mod series_set;

pub use color::hex_to_rgba;
pub use error::{DataError, Result};
pub use multi_series::{MultiSeries, SubSeries, ValueSeries};
pub use series::Series;
pub use series_set::SeriesSet;
