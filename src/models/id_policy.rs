use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a new record gets its `id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// `id` = rows in the sheet (header included) before the append.
    /// Deleting a row and inserting again can hand out an id that is already in use.
    #[default]
    RowCount,
    /// Monotonic counter stored next to the sheet; ids are never reused.
    Sequence,
}

impl IdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdPolicy::RowCount => "row-count",
            IdPolicy::Sequence => "sequence",
        }
    }
}
