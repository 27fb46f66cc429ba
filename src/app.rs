pub mod core;
pub mod roster;
pub mod settings;
pub mod types;
pub mod worker;

pub use self::core::App;
pub use types::{Mode, Row};
