pub mod app;
pub mod input;
pub mod model;
pub mod runner;
pub mod snapshot;
pub mod ui;

pub use crate::app::{App, Mode, Row};
pub use crate::model::{Person, Team};
pub use crate::snapshot::{
    apply, diff, partition, ApplyError, EditOp, PartitionError, PartitionStrategy, Section,
    SectionKey, Snapshot,
};
