pub mod goals;
pub mod initialize;
pub mod log;
pub mod pool;
pub mod seed;
pub mod sessions;
pub mod stats;
pub mod store;

pub use goals::GoalStore;
pub use sessions::SessionStore;
pub use store::{RecordStore, WriteOutcome};
