pub mod error;
pub mod selector;
pub mod store;

pub use error::{SelectError, StoreError};
pub use selector::{Selection, UsedSetSink, remaining, select_unused, time_seeded_rng};
pub use store::WordStore;
