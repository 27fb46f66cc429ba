use std::collections::HashMap;
use std::hash::Hash;

use proptest::prelude::*;

use diffTable::{apply, diff, EditOp, Snapshot};

use generators::*;

fn counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut m = HashMap::new();
    for it in items {
        *m.entry(it).or_insert(0) += 1;
    }
    m
}

/// Length of the longest strictly increasing subsequence, quadratic on purpose.
fn lis_len(seq: &[usize]) -> usize {
    let mut best = vec![1usize; seq.len()];
    for i in 0..seq.len() {
        for j in 0..i {
            if seq[j] < seq[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}

/// Occurrence-paired target positions of `old` items inside `new`.
fn matched_targets<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<usize> {
    let mut slots: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, it) in new.iter().enumerate().rev() {
        slots.entry(it).or_default().push(j);
    }
    old.iter()
        .filter_map(|it| slots.get_mut(it).and_then(Vec::pop))
        .collect()
}

fn check_identity<T: Clone + Eq + Hash + std::fmt::Debug>(
    a: &Snapshot<T>,
    b: &Snapshot<T>,
    ops: &[EditOp<T>],
) -> Result<(), TestCaseError> {
    for section in b.iter() {
        let Some(old) = a.section(&section.key) else { continue };
        let removed_whole = ops.iter().any(
            |op| matches!(op, EditOp::DeleteSection { key, .. } if *key == section.key),
        );
        if removed_whole {
            continue;
        }
        let before = counts(&old.items);
        let after = counts(&section.items);
        let mut deleted: HashMap<&T, usize> = HashMap::new();
        let mut inserted: HashMap<&T, usize> = HashMap::new();
        let mut moved = 0usize;
        for op in ops {
            match op {
                EditOp::DeleteItem { section: k, item, .. } if *k == section.key => {
                    *deleted.entry(item).or_insert(0) += 1;
                }
                EditOp::InsertItem { section: k, item, .. } if *k == section.key => {
                    *inserted.entry(item).or_insert(0) += 1;
                }
                EditOp::MoveItem { section: k, .. } if *k == section.key => moved += 1,
                _ => {}
            }
        }
        for (v, &n) in &before {
            let m = after.get(v).copied().unwrap_or(0);
            prop_assert_eq!(deleted.get(v).copied().unwrap_or(0), n.saturating_sub(m));
        }
        for (v, &m) in &after {
            let n = before.get(v).copied().unwrap_or(0);
            prop_assert_eq!(inserted.get(v).copied().unwrap_or(0), m.saturating_sub(n));
        }
        let targets = matched_targets(&old.items, &section.items);
        prop_assert_eq!(moved, targets.len() - lis_len(&targets));
    }
    Ok(())
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    #[test]
    fn apply_reaches_target(a in arb_snapshot(), b in arb_snapshot()) {
        let ops = diff(&a, &b);
        prop_assert_eq!(apply(&a, &ops).expect("script applies"), b);
    }

    #[test]
    fn apply_reaches_target_for_partitions(a in arb_partitioned(), b in arb_partitioned()) {
        let ops = diff(&a, &b);
        prop_assert_eq!(apply(&a, &ops).expect("script applies"), b);
    }

    #[test]
    fn diff_of_equal_snapshots_is_empty(a in arb_snapshot()) {
        prop_assert!(diff(&a, &a).is_empty());
    }

    #[test]
    fn diff_after_apply_is_empty(a in arb_snapshot(), b in arb_snapshot()) {
        let reached = apply(&a, &diff(&a, &b)).expect("script applies");
        prop_assert!(diff(&reached, &b).is_empty());
    }

    #[test]
    fn shared_values_are_moved_not_replaced(a in arb_snapshot(), b in arb_snapshot()) {
        let ops = diff(&a, &b);
        check_identity(&a, &b, &ops)?;
    }

    #[test]
    fn shared_people_are_moved_not_replaced(a in arb_partitioned(), b in arb_partitioned()) {
        let ops = diff(&a, &b);
        check_identity(&a, &b, &ops)?;
    }

    #[test]
    fn apply_in_place_matches_apply(a in arb_snapshot(), b in arb_snapshot()) {
        let ops = diff(&a, &b);
        let mut s = a.clone();
        s.apply_in_place(&ops).expect("script applies");
        prop_assert_eq!(s, b);
    }
}
