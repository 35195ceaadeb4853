pub mod entry;
pub mod goal;
pub mod month;
pub mod session;

pub use entry::Entry;
pub use goal::CodingGoal;
pub use month::MonthName;
pub use session::CodingSession;
