pub mod goal;
pub mod log;
pub mod progress;
pub mod records;
pub mod session;
pub mod validate;
