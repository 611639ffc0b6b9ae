//! Property-based tests for keyed search tie-breaking and NaN handling

use nan_core::reduce;
use nan_search::{argmax, argmin, argmin_by, findmax, findmin, Direction, Score, Scored};
use proptest::prelude::*;

/// Small integer-valued floats so ties are common, with NaN slots
fn tie_heavy_vec() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![
            4 => (-3i32..=3).prop_map(f64::from),
            1 => Just(f64::NAN),
        ],
        1..48,
    )
}

fn first_position(data: &[f64], target: f64) -> Option<usize> {
    data.iter().position(|&x| x == target)
}

/// Key a value search must return: a leading NaN is held for good,
/// otherwise the first occurrence of the extreme value.
fn expected_find_key(data: &[f64], extreme: f64) -> Option<usize> {
    if data[0].is_nan() {
        Some(0)
    } else {
        first_position(data, extreme)
    }
}

/// Key an arg search must return: NaN only wins when there is nothing else.
fn expected_arg_key(data: &[f64], extreme: f64) -> Option<usize> {
    if extreme.is_nan() {
        Some(0)
    } else {
        first_position(data, extreme)
    }
}

proptest! {
    #[test]
    fn prop_findmin_returns_first_minimum(data in tie_heavy_vec()) {
        let (value, key) = findmin(data.iter().copied().enumerate()).unwrap();
        let expected = reduce::minimum(data.iter().copied());

        prop_assert_eq!(Some(key), expected_find_key(&data, expected));
        if data[0].is_nan() {
            prop_assert!(value.is_nan());
        } else {
            prop_assert_eq!(value, expected);
        }
    }

    #[test]
    fn prop_findmax_returns_first_maximum(data in tie_heavy_vec()) {
        let (value, key) = findmax(data.iter().copied().enumerate()).unwrap();
        let expected = reduce::maximum(data.iter().copied());

        prop_assert_eq!(Some(key), expected_find_key(&data, expected));
        if data[0].is_nan() {
            prop_assert!(value.is_nan());
        } else {
            prop_assert_eq!(value, expected);
        }
    }

    #[test]
    fn prop_arg_skips_nan(data in tie_heavy_vec()) {
        let keyed = || data.iter().copied().enumerate();
        let lowest = reduce::minimum(data.iter().copied());
        let highest = reduce::maximum(data.iter().copied());

        prop_assert_eq!(Some(argmin(keyed()).unwrap()), expected_arg_key(&data, lowest));
        prop_assert_eq!(Some(argmax(keyed()).unwrap()), expected_arg_key(&data, highest));
    }

    #[test]
    fn prop_find_and_arg_split_only_on_leading_nan(data in tie_heavy_vec()) {
        let keyed = || data.iter().copied().enumerate();
        let find_min = findmin(keyed()).unwrap().1;
        let arg_min = argmin(keyed()).unwrap();
        let all_nan = data.iter().all(|x| x.is_nan());

        if data[0].is_nan() && !all_nan {
            prop_assert_eq!(find_min, 0);
            prop_assert!(arg_min != 0);
        } else {
            prop_assert_eq!(find_min, arg_min);
            prop_assert_eq!(findmax(keyed()).unwrap().1, argmax(keyed()).unwrap());
        }
    }

    #[test]
    fn prop_argmin_by_picks_first_element(data in tie_heavy_vec()) {
        let winner = argmin_by(|x: &f64| x.abs(), data.iter().copied()).unwrap();
        let best = reduce::minimum(data.iter().map(|x| x.abs()));
        if best.is_nan() {
            prop_assert!(winner.is_nan());
        } else {
            let first = data.iter().copied().find(|x| x.abs() == best);
            prop_assert_eq!(Some(winner), first);
        }
    }

    #[test]
    fn prop_missing_always_wins(data in tie_heavy_vec(), slot in 0usize..48) {
        let slot = slot % data.len();
        let mut masked: Vec<Option<f64>> = data.iter().copied().map(Some).collect();
        masked[slot] = None;

        let keyed = || masked.iter().copied().enumerate();
        prop_assert_eq!(findmin(keyed()).unwrap(), (None, slot));
        prop_assert_eq!(findmax(keyed()).unwrap(), (None, slot));
        prop_assert_eq!(argmin(keyed()).unwrap(), slot);
        prop_assert_eq!(argmax(keyed()).unwrap(), slot);
    }
}

#[test]
fn test_direction_orders_are_mirrors() {
    let ladder = [Score::Missing, Score::Value(-2.0), Score::Value(5.0), Score::NaN];
    let mut by_min = ladder.to_vec();
    by_min.sort_by(|a, b| Direction::Min.preference(a, b));
    let mut by_max = ladder.to_vec();
    by_max.sort_by(|a, b| Direction::Max.preference(a, b));

    assert_eq!(by_min[..3], [Score::Missing, Score::Value(-2.0), Score::Value(5.0)]);
    assert_eq!(by_max[..3], [Score::Missing, Score::Value(5.0), Score::Value(-2.0)]);
    assert!(by_min[3].score().is_nan());
    assert!(by_max[3].score().is_nan());
}
