use bibsort::distribution::{NumericRange, bucket_sort, pigeonhole_sort, radix_sort};
use bibsort::prelude::*;
use chrono::NaiveDate;

fn entries(values: &[i64]) -> Vec<SortEntry> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| SortEntry::new(index, value))
        .collect()
}

fn order(sorted: &[SortEntry]) -> Vec<usize> {
    sorted.iter().map(|e| e.index).collect()
}

#[test]
fn test_pigeonhole_negative_keys() {
    let sorted = pigeonhole_sort(entries(&[3, -2, 0, -2, 5])).unwrap();
    // Both -2 keys keep their input order (index 1 before 3).
    assert_eq!(order(&sorted), vec![1, 3, 2, 0, 4]);
}

#[test]
fn test_bucket_negative_and_spread_keys() {
    let values = [1_000_000, -5, 42, 7, 42, -1_000_000, 0];
    let sorted = bucket_sort(entries(&values), 1e-9).unwrap();
    let keys: Vec<i64> = sorted.iter().map(|e| e.key.as_integer().unwrap()).collect();
    assert_eq!(keys, vec![-1_000_000, -5, 0, 7, 42, 42, 1_000_000]);
    // Equal keys 42 (index 2 and 4) stay in input order.
    assert_eq!(order(&sorted)[4..6], [2, 4]);
}

#[test]
fn test_single_distinct_key_keeps_input_order() {
    let values = [9, 9, 9, 9, 9];
    for sorted in [
        pigeonhole_sort(entries(&values)).unwrap(),
        bucket_sort(entries(&values), 1e-9).unwrap(),
        radix_sort(entries(&values)).unwrap(),
    ] {
        assert_eq!(order(&sorted), vec![0, 1, 2, 3, 4]);
    }
}

#[test]
fn test_all_zero_keys_radix() {
    let sorted = radix_sort(entries(&[0, 0, 0])).unwrap();
    assert_eq!(order(&sorted), vec![0, 1, 2]);
}

#[test]
fn test_empty_input() {
    assert!(pigeonhole_sort(Vec::new()).unwrap().is_empty());
    assert!(bucket_sort(Vec::new(), 1e-9).unwrap().is_empty());
    assert!(radix_sort(Vec::new()).unwrap().is_empty());
}

#[test]
fn test_radix_rejects_negative_keys() {
    let err = radix_sort(entries(&[4, -1, 3])).unwrap_err();
    assert_eq!(err, SortError::NegativeKey { index: 1, value: -1 });

    let failure = Algorithm::RadixSort
        .sort(vec![4i64, -1, 3], &|v: &i64| *v, None)
        .unwrap_err();
    assert_eq!(failure.algorithm, Algorithm::RadixSort);
    assert!(matches!(failure.reason, SortError::NegativeKey { .. }));
}

#[test]
fn test_radix_large_keys() {
    let values = [i64::MAX, 0, 10_000_000_000, i64::MAX - 1, 9];
    let sorted = radix_sort(entries(&values)).unwrap();
    assert_eq!(order(&sorted), vec![1, 4, 2, 3, 0]);
}

#[test]
fn test_non_numeric_keys_rejected() {
    let text = vec![SortEntry::new(0, "a"), SortEntry::new(1, "b")];
    for result in [
        pigeonhole_sort(text.clone()),
        bucket_sort(text.clone(), 1e-9),
        radix_sort(text.clone()),
    ] {
        assert_eq!(
            result.unwrap_err(),
            SortError::NonNumericKey {
                index: 0,
                kind: KeyKind::Text
            }
        );
    }

    let tuples = vec![SortEntry::new(0, (1, 2))];
    assert!(matches!(
        pigeonhole_sort(tuples),
        Err(SortError::NonNumericKey { .. })
    ));
}

#[test]
fn test_non_numeric_rejected_even_when_presorted() {
    let words = vec!["a", "b", "c"];
    for algorithm in [
        Algorithm::PigeonholeSort,
        Algorithm::BucketSort,
        Algorithm::RadixSort,
    ] {
        let failure = algorithm
            .sort(words.clone(), &|w: &&str| w.to_string(), None)
            .unwrap_err();
        assert!(matches!(failure.reason, SortError::NonNumericKey { .. }));
    }
}

#[test]
fn test_dates_resolve_to_day_numbers() {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    let dates = vec![d(2020, 3, 1), d(2020, 2, 29), d(1970, 1, 1), d(2020, 2, 29)];
    let list: Vec<SortEntry> = dates
        .iter()
        .enumerate()
        .map(|(i, date)| SortEntry::new(i, *date))
        .collect();

    for sorted in [
        pigeonhole_sort(list.clone()).unwrap(),
        bucket_sort(list.clone(), 1e-9).unwrap(),
        radix_sort(list.clone()).unwrap(),
    ] {
        assert_eq!(order(&sorted), vec![2, 1, 3, 0]);
    }
}

#[test]
fn test_priority_classes_sorted_independently() {
    let prioritized = |index, priority, value| {
        SortEntry::new(
            index,
            Key::Prioritized {
                priority,
                key: Box::new(Key::Int(value)),
            },
        )
    };
    let input = vec![
        prioritized(0, 1, 1),
        prioritized(1, 0, 50),
        prioritized(2, 1, 0),
        prioritized(3, 0, 20),
    ];

    for sorted in [
        pigeonhole_sort(input.clone()).unwrap(),
        bucket_sort(input.clone(), 1e-9).unwrap(),
        radix_sort(input.clone()).unwrap(),
    ] {
        assert_eq!(order(&sorted), vec![3, 1, 2, 0]);
    }
}

#[test]
fn test_numeric_range() {
    assert_eq!(
        NumericRange::new(5, 1).unwrap_err(),
        SortError::MalformedRange { min: 5, max: 1 }
    );

    let range = NumericRange::new(-3, 4).unwrap();
    assert!(range.contains(0));
    assert!(!range.contains(5));
    assert_eq!(range.value_count().unwrap(), 8);

    let spanned = NumericRange::spanning([4, -3, 0]).unwrap();
    assert_eq!(spanned, range);
    assert!(NumericRange::spanning(Vec::new()).is_none());
}

#[test]
fn test_pigeonhole_range_overflow() {
    let err = pigeonhole_sort(entries(&[i64::MIN, i64::MAX])).unwrap_err();
    assert_eq!(
        err,
        SortError::RangeOverflow {
            min: i64::MIN,
            max: i64::MAX
        }
    );
}
