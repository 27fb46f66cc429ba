use super::SectionKey;
use thiserror::Error;

/// Errors produced while building a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// The candidate key list named the same section twice.
    #[error("duplicate section key `{key}`")]
    DuplicateKey { key: SectionKey },
}

/// Errors produced when an edit script does not fit the snapshot it is
/// applied to. The offending op index is carried so callers can log it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error("op {op}: no section `{key}`")]
    SectionNotFound { op: usize, key: SectionKey },

    #[error("op {op}: section `{key}` already present")]
    SectionExists { op: usize, key: SectionKey },

    #[error("op {op}: section index {index} out of range (len {len})")]
    SectionIndexOutOfRange { op: usize, index: usize, len: usize },

    #[error("op {op}: expected section `{expected}` at index {index}, found `{found}`")]
    SectionMismatch {
        op: usize,
        index: usize,
        expected: SectionKey,
        found: SectionKey,
    },

    #[error("op {op}: item index {index} out of range in `{key}` (len {len})")]
    ItemIndexOutOfRange {
        op: usize,
        key: SectionKey,
        index: usize,
        len: usize,
    },

    #[error("op {op}: item at {index} in `{key}` differs from the one named by the op")]
    ItemMismatch {
        op: usize,
        key: SectionKey,
        index: usize,
    },
}
