pub mod id_policy;
pub mod record;

pub use id_policy::IdPolicy;
pub use record::AttendanceRecord;
