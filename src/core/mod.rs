pub mod backup;
pub mod log;
pub mod store;

pub use store::AttendanceStore;
