//! Edit scripts between two snapshots.
//!
//! The script drives incremental list updates: rows whose value survives
//! are kept (and moved if needed) instead of being destroyed and rebuilt.
//!
//! Scaling: matching and picking the rows that stay put are O(n log n), but
//! each emitted move looks up its anchor linearly, so a section with `m`
//! moved rows out of `n` costs O(n·m). That is fine for UI-sized lists (tens
//! to low thousands of rows) and is the limit to keep in mind beyond that.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use super::lis::longest_increasing;
use super::{Section, SectionKey, Snapshot};

/// One primitive structural change.
///
/// Indices refer to the structure produced by every preceding op in the same
/// script, so a script must be applied in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp<T> {
    /// Remove the section at `index` together with its items.
    DeleteSection { index: usize, key: SectionKey },
    /// Insert a new section at `index` holding `items`.
    InsertSection {
        index: usize,
        key: SectionKey,
        items: Vec<T>,
    },
    DeleteItem {
        section: SectionKey,
        index: usize,
        item: T,
    },
    InsertItem {
        section: SectionKey,
        index: usize,
        item: T,
    },
    /// Take `item` out at `from`, then put it back at `to` in the shortened list.
    MoveItem {
        section: SectionKey,
        from: usize,
        to: usize,
        item: T,
    },
}

impl<T> EditOp<T> {
    /// Key of the section this op touches.
    pub fn section_key(&self) -> &SectionKey {
        match self {
            EditOp::DeleteSection { key, .. } | EditOp::InsertSection { key, .. } => key,
            EditOp::DeleteItem { section, .. }
            | EditOp::InsertItem { section, .. }
            | EditOp::MoveItem { section, .. } => section,
        }
    }
}

/// Per-kind op counts, shown in the title bar after each update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditSummary {
    pub sections_inserted: usize,
    pub sections_deleted: usize,
    pub items_inserted: usize,
    pub items_deleted: usize,
    pub items_moved: usize,
}

impl EditSummary {
    pub fn of<T>(ops: &[EditOp<T>]) -> Self {
        let mut s = EditSummary::default();
        for op in ops {
            match op {
                EditOp::DeleteSection { .. } => s.sections_deleted += 1,
                EditOp::InsertSection { .. } => s.sections_inserted += 1,
                EditOp::DeleteItem { .. } => s.items_deleted += 1,
                EditOp::InsertItem { .. } => s.items_inserted += 1,
                EditOp::MoveItem { .. } => s.items_moved += 1,
            }
        }
        s
    }

    pub fn is_empty(&self) -> bool {
        *self == EditSummary::default()
    }
}

impl fmt::Display for EditSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sections +{} -{} | rows +{} -{} ~{}",
            self.sections_inserted,
            self.sections_deleted,
            self.items_inserted,
            self.items_deleted,
            self.items_moved
        )
    }
}

/// Compute the ops that turn `previous` into `next`.
///
/// Sections are kept when their keys appear in both snapshots in the same
/// relative order; any other section is deleted or inserted whole. Inside a
/// kept section, the i-th occurrence of a value in `previous` pairs with the
/// i-th occurrence in `next`. Paired rows are never deleted: the longest run
/// already in target order stays, the rest get one `MoveItem` each.
pub fn diff<T>(previous: &Snapshot<T>, next: &Snapshot<T>) -> Vec<EditOp<T>>
where
    T: Clone + Eq + Hash,
{
    let mut ops = Vec::new();

    let next_index: HashMap<&SectionKey, usize> =
        next.iter().enumerate().map(|(j, s)| (&s.key, j)).collect();
    // (index in previous, index in next) for keys present in both
    let shared: Vec<(usize, usize)> = previous
        .iter()
        .enumerate()
        .filter_map(|(i, s)| next_index.get(&s.key).map(|&j| (i, j)))
        .collect();
    let targets: Vec<usize> = shared.iter().map(|&(_, j)| j).collect();
    let kept: Vec<(usize, usize)> = longest_increasing(&targets)
        .into_iter()
        .map(|k| shared[k])
        .collect();

    let mut keep_prev = vec![false; previous.len()];
    let mut keep_next = vec![false; next.len()];
    for &(i, j) in &kept {
        keep_prev[i] = true;
        keep_next[j] = true;
    }

    for (i, section) in previous.iter().enumerate().rev() {
        if !keep_prev[i] {
            ops.push(EditOp::DeleteSection {
                index: i,
                key: section.key.clone(),
            });
        }
    }
    for (j, section) in next.iter().enumerate() {
        if !keep_next[j] {
            ops.push(EditOp::InsertSection {
                index: j,
                key: section.key.clone(),
                items: section.items.clone(),
            });
        }
    }

    for &(i, j) in &kept {
        diff_items(&previous.sections()[i], &next.sections()[j], &mut ops);
    }

    tracing::debug!(
        from_sections = previous.len(),
        to_sections = next.len(),
        ops = ops.len(),
        "computed snapshot diff"
    );
    ops
}

fn diff_items<T>(old: &Section<T>, new: &Section<T>, ops: &mut Vec<EditOp<T>>)
where
    T: Clone + Eq + Hash,
{
    let key = &new.key;

    let mut slots: HashMap<&T, VecDeque<usize>> = HashMap::new();
    for (j, item) in new.items.iter().enumerate() {
        slots.entry(item).or_default().push_back(j);
    }
    let target_of: Vec<Option<usize>> = old
        .items
        .iter()
        .map(|item| slots.get_mut(item).and_then(VecDeque::pop_front))
        .collect();

    let mut matched = vec![false; new.items.len()];
    for &t in target_of.iter().flatten() {
        matched[t] = true;
    }

    for (i, item) in old.items.iter().enumerate().rev() {
        if target_of[i].is_none() {
            ops.push(EditOp::DeleteItem {
                section: key.clone(),
                index: i,
                item: item.clone(),
            });
        }
    }

    // Surviving rows, by target index, in their current order.
    let mut current: Vec<usize> = target_of.iter().flatten().copied().collect();
    let mut settled = vec![false; new.items.len()];
    for k in longest_increasing(&current) {
        settled[current[k]] = true;
    }

    // Each unsettled row goes right after its nearest settled predecessor in
    // `new`; processing in target order keeps the settled rows in target order.
    for t in 0..new.items.len() {
        if !matched[t] || settled[t] {
            continue;
        }
        let Some(from) = current.iter().position(|&c| c == t) else {
            continue;
        };
        current.remove(from);
        let to = (0..t)
            .rev()
            .find(|&u| settled[u])
            .and_then(|u| current.iter().position(|&c| c == u))
            .map_or(0, |p| p + 1);
        current.insert(to, t);
        settled[t] = true;
        if from != to {
            ops.push(EditOp::MoveItem {
                section: key.clone(),
                from,
                to,
                item: new.items[t].clone(),
            });
        }
    }

    for (t, item) in new.items.iter().enumerate() {
        if !matched[t] {
            ops.push(EditOp::InsertItem {
                section: key.clone(),
                index: t,
                item: item.clone(),
            });
        }
    }
}
