//! Property-based tests for `Seq`.
//!
//! - **Double reversal**: `s.reversed().reversed() == s`
//! - **Append / prepend**: `s.appended([x]) == s ++ [x]`, `s.prepended([x]) == [x] ++ s`
//! - **Mapped identity**: `s.mapped(Ok) == s`
//! - **Filter complement**: filtering by `p` then by `!p` is empty
//! - **Out of range**: failing index operations leave the receiver unchanged
//! - **Sort failure**: a failing comparator yields `Failure`, whatever the input length

use casebox::container::Try;
use casebox::sequence::Seq;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_double_reversal_is_identity(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let sequence = Seq::from(elements);
        prop_assert_eq!(sequence.reversed().reversed(), sequence);
    }

    #[test]
    fn prop_appended(elements in prop::collection::vec(any::<i32>(), 0..50), item in any::<i32>()) {
        let sequence = Seq::from(elements.clone());
        let mut expected = elements;
        expected.push(item);
        prop_assert_eq!(sequence.appended([item]).to_vec(), expected);
    }

    #[test]
    fn prop_prepended(elements in prop::collection::vec(any::<i32>(), 0..50), item in any::<i32>()) {
        let sequence = Seq::from(elements.clone());
        let mut expected = vec![item];
        expected.extend(elements);
        prop_assert_eq!(sequence.prepended([item]).to_vec(), expected);
    }

    #[test]
    fn prop_at_round_trips(elements in prop::collection::vec(any::<i32>(), 1..50), seed in any::<prop::sample::Index>()) {
        let index = seed.index(elements.len());
        let sequence = Seq::from(elements.clone());
        prop_assert_eq!(sequence.at(index).success(), Some(&elements[index]));
    }

    #[test]
    fn prop_mapped_identity(elements in prop::collection::vec(any::<String>(), 0..20)) {
        let sequence = Seq::from(elements);
        let mapped = sequence.mapped(|value| Ok::<_, ()>(value.clone()));
        prop_assert_eq!(mapped, Try::Success(sequence));
    }

    #[test]
    fn prop_mapped_preserves_length_and_order(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let sequence = Seq::from(elements.clone());
        let mapped = sequence.mapped(|value| Ok::<_, ()>(i64::from(*value) * 2));
        let expected: Vec<i64> = elements.iter().map(|value| i64::from(*value) * 2).collect();
        prop_assert_eq!(mapped.success().map(|sequence| sequence.to_vec()), Some(expected));
    }

    #[test]
    fn prop_filter_then_complement_is_empty(elements in prop::collection::vec(any::<i32>(), 0..50), divisor in 1..5_i32) {
        let predicate = |value: &i32| value % divisor == 0;
        let sequence = Seq::from(elements);
        let kept = sequence.filtered(|value| Ok::<_, ()>(predicate(value))).unwrap_or_default();
        let rest = kept.filtered(|value| Ok::<_, ()>(!predicate(value))).unwrap_or_default();
        prop_assert!(rest.is_empty());
    }

    #[test]
    fn prop_out_of_range_leaves_receiver_unchanged(elements in prop::collection::vec(any::<i32>(), 0..20), offset in 0..10_usize) {
        let sequence = Seq::from(elements.clone());
        let index = elements.len() + offset;

        prop_assert!(sequence.at(index).is_failure());
        prop_assert!(sequence.patched(index, 0, 0).is_failure());
        prop_assert!(sequence.updated(index, |value| Ok::<_, ()>(*value)).is_failure());
        prop_assert_eq!(sequence.to_vec(), elements);
    }

    #[test]
    fn prop_auto_sorted_matches_sort(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut expected = elements.clone();
        expected.sort_unstable();
        prop_assert_eq!(Seq::from(elements).auto_sorted().to_vec(), expected);
    }

    #[test]
    fn prop_sorted_comparator_failure_is_a_value(
        elements in prop::collection::vec(0..50_i32, 0..500),
        failing_call in 0..5000_usize,
    ) {
        let sequence = Seq::from(elements.clone());
        let mut calls = 0_usize;
        let result = sequence.sorted(|left, right| {
            let call = calls;
            calls += 1;
            if call == failing_call { Err(call) } else { Ok(left.cmp(right)) }
        });

        if calls > failing_call {
            prop_assert_eq!(calls, failing_call + 1);
            prop_assert_eq!(result.failure(), Some(failing_call));
        } else {
            let mut expected = elements.clone();
            expected.sort_unstable();
            prop_assert_eq!(result.success().map(|sorted| sorted.to_vec()), Some(expected));
        }
        prop_assert_eq!(sequence.to_vec(), elements);
    }

    #[test]
    fn prop_pad_end_reaches_target(elements in prop::collection::vec(any::<u8>(), 0..20), target in 0..40_usize) {
        let sequence = Seq::from(elements.clone());
        let padded = sequence.pad_end(target, 0);
        prop_assert_eq!(padded.len(), target.max(elements.len()));
        prop_assert_eq!(&padded.as_slice()[..elements.len()], elements.as_slice());
    }
}
