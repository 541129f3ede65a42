pub mod date;
pub mod path;
pub mod period;
pub mod table;
