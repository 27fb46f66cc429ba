//! Replaying an edit script against a snapshot.

use super::{ApplyError, EditOp, Section, SectionKey, Snapshot};

/// Apply `ops` in order to a copy of `snapshot`.
///
/// Every op is checked against the structure it lands on: the section must
/// exist (or not, for inserts), indices must be in range and the item or key
/// at a named position must be the one the op carries.
pub fn apply<T>(snapshot: &Snapshot<T>, ops: &[EditOp<T>]) -> Result<Snapshot<T>, ApplyError>
where
    T: Clone + PartialEq,
{
    let mut out = snapshot.clone();
    for (n, op) in ops.iter().enumerate() {
        apply_one(&mut out, n, op)?;
    }
    tracing::trace!(ops = ops.len(), sections = out.len(), "applied edit script");
    Ok(out)
}

impl<T: Clone + PartialEq> Snapshot<T> {
    /// Apply `ops` to `self`. On error `self` is left as it was.
    pub fn apply_in_place(&mut self, ops: &[EditOp<T>]) -> Result<(), ApplyError> {
        *self = apply(self, ops)?;
        Ok(())
    }
}

fn apply_one<T>(snapshot: &mut Snapshot<T>, n: usize, op: &EditOp<T>) -> Result<(), ApplyError>
where
    T: Clone + PartialEq,
{
    match op {
        EditOp::DeleteSection { index, key } => {
            let sections = snapshot.sections_mut();
            let found = sections
                .get(*index)
                .ok_or(ApplyError::SectionIndexOutOfRange {
                    op: n,
                    index: *index,
                    len: sections.len(),
                })?;
            if &found.key != key {
                return Err(ApplyError::SectionMismatch {
                    op: n,
                    index: *index,
                    expected: key.clone(),
                    found: found.key.clone(),
                });
            }
            sections.remove(*index);
        }
        EditOp::InsertSection { index, key, items } => {
            if snapshot.position(key).is_some() {
                return Err(ApplyError::SectionExists {
                    op: n,
                    key: key.clone(),
                });
            }
            let sections = snapshot.sections_mut();
            if *index > sections.len() {
                return Err(ApplyError::SectionIndexOutOfRange {
                    op: n,
                    index: *index,
                    len: sections.len(),
                });
            }
            sections.insert(*index, Section::new(key.clone(), items.clone()));
        }
        EditOp::DeleteItem {
            section,
            index,
            item,
        } => {
            let items = items_mut(snapshot, n, section)?;
            check_item(items, n, section, *index, item)?;
            items.remove(*index);
        }
        EditOp::InsertItem {
            section,
            index,
            item,
        } => {
            let items = items_mut(snapshot, n, section)?;
            if *index > items.len() {
                return Err(ApplyError::ItemIndexOutOfRange {
                    op: n,
                    key: section.clone(),
                    index: *index,
                    len: items.len(),
                });
            }
            items.insert(*index, item.clone());
        }
        EditOp::MoveItem {
            section,
            from,
            to,
            item,
        } => {
            let items = items_mut(snapshot, n, section)?;
            check_item(items, n, section, *from, item)?;
            // `from` is in range, so the shortened list has `len - 1` rows
            if *to >= items.len() {
                return Err(ApplyError::ItemIndexOutOfRange {
                    op: n,
                    key: section.clone(),
                    index: *to,
                    len: items.len(),
                });
            }
            let moved = items.remove(*from);
            items.insert(*to, moved);
        }
    }
    Ok(())
}

fn items_mut<'a, T>(
    snapshot: &'a mut Snapshot<T>,
    n: usize,
    key: &SectionKey,
) -> Result<&'a mut Vec<T>, ApplyError> {
    snapshot
        .sections_mut()
        .iter_mut()
        .find(|s| &s.key == key)
        .map(|s| &mut s.items)
        .ok_or_else(|| ApplyError::SectionNotFound {
            op: n,
            key: key.clone(),
        })
}

fn check_item<T: PartialEq>(
    items: &[T],
    n: usize,
    key: &SectionKey,
    index: usize,
    expected: &T,
) -> Result<(), ApplyError> {
    match items.get(index) {
        None => Err(ApplyError::ItemIndexOutOfRange {
            op: n,
            key: key.clone(),
            index,
            len: items.len(),
        }),
        Some(found) if found != expected => Err(ApplyError::ItemMismatch {
            op: n,
            key: key.clone(),
            index,
        }),
        Some(_) => Ok(()),
    }
}
