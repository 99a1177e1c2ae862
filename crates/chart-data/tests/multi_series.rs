// File: crates/chart-data/tests/multi_series.rs
// Purpose: Validate MultiSeries key validation, exact lookup, and totals.

use chart_data::{DataError, MultiSeries, Series, SubSeries, ValueSeries};

#[test]
fn construction_rejects_duplicate_keys() {
    let result = MultiSeries::new(vec![1.0, 1.0, 2.0]);
    assert!(matches!(result, Err(DataError::DuplicateKey(_))));
}

#[test]
fn construction_rejects_nan_keys() {
    let result = MultiSeries::new(vec![1.0, f64::NAN]);
    assert!(matches!(result, Err(DataError::NonNumericKey(_))));
}

#[test]
fn from_labels_parses_numeric_strings() {
    let ms = MultiSeries::from_labels(["3", "1", "2"]).unwrap();
    assert_eq!(ms.keys(), &[1.0, 2.0, 3.0]);
}

#[test]
fn from_labels_rejects_non_numeric_strings() {
    let result = MultiSeries::from_labels(["a", "b"]);
    assert!(matches!(result, Err(DataError::NonNumericKey(_))));
}

#[test]
fn from_labels_rejects_duplicate_labels() {
    let result = MultiSeries::from_labels(["1", "1"]);
    assert!(matches!(result, Err(DataError::DuplicateKey(_))));
}

#[test]
fn keys_sorted_ascending_after_construction() {
    let ms = MultiSeries::new(vec![3.0, 1.0, 2.0]).unwrap();
    assert_eq!(ms.keys(), &[1.0, 2.0, 3.0]);
}

#[test]
fn add_series_rejects_length_mismatch() {
    let mut ms = MultiSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
    let result = ms.add_series(vec![10.0, 20.0]);
    assert_eq!(result, Err(DataError::LengthMismatch { expected: 3, got: 2 }));
}

#[test]
fn get_returns_per_child_values_at_exact_key() {
    let mut ms = MultiSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
    ms.add_series(vec![10.0, 20.0, 30.0]).unwrap();
    assert_eq!(ms.get(2.0).unwrap(), vec![20.0]);
}

#[test]
fn get_has_no_interpolation_fallback() {
    let mut ms = MultiSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
    ms.add_series(vec![10.0, 20.0, 30.0]).unwrap();
    assert_eq!(ms.get(5.0), Err(DataError::KeyNotFound(5.0)));
    assert_eq!(ms.get(1.5), Err(DataError::KeyNotFound(1.5)));
}

#[test]
fn items_walk_keys_ascending_with_parallel_values() {
    let mut ms = MultiSeries::new(vec![2.0, 1.0]).unwrap();
    ms.add_series(ValueSeries::new("a", vec![10.0, 20.0])).unwrap();
    ms.add_series(ValueSeries::new("b", vec![1.0, 2.0])).unwrap();

    // Positions align to the sorted key list: index 0 is key 1.0.
    let items: Vec<(f64, Vec<f64>)> = ms.items().collect();
    assert_eq!(items, vec![(1.0, vec![10.0, 1.0]), (2.0, vec![20.0, 2.0])]);
}

#[test]
fn totals_sum_children_positionally() {
    let mut ms = MultiSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
    ms.add_series(vec![1.0, 2.0, 3.0]).unwrap();
    ms.add_series(vec![10.0, 20.0, 30.0]).unwrap();
    assert_eq!(ms.totals(), vec![11.0, 22.0, 33.0]);
}

#[test]
fn titles_follow_attachment_order() {
    let mut ms = MultiSeries::new(vec![1.0, 2.0]).unwrap();
    ms.add_series(ValueSeries::new("first", vec![1.0, 2.0])).unwrap();
    ms.add_series(vec![3.0, 4.0]).unwrap();
    ms.add_series(ValueSeries::new("third", vec![5.0, 6.0])).unwrap();
    let titles: Vec<&str> = ms.titles().collect();
    assert_eq!(titles, vec!["first", "", "third"]);
}

#[test]
fn get_series_returns_raw_child() {
    let mut ms = MultiSeries::new(vec![1.0, 2.0]).unwrap();
    ms.add_series(ValueSeries::new("a", vec![7.0, 8.0])).unwrap();
    let child = ms.get_series(0);
    assert_eq!(child.len(), 2);
    assert_eq!(child.value_at(1), 8.0);
    assert_eq!(child.title(), "a");
}

#[test]
fn full_series_works_as_child_in_key_order() {
    // A Series child aligns positionally over its own sorted keys.
    let mut ms = MultiSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
    let s = Series::new("s", vec![(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)]);
    ms.add_series(s).unwrap();
    assert_eq!(ms.get(1.0).unwrap(), vec![10.0]);
    assert_eq!(ms.totals(), vec![10.0, 20.0, 30.0]);
    assert_eq!(ms.titles().collect::<Vec<_>>(), vec!["s"]);
}
