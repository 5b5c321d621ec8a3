use serde::{Deserialize, Serialize};

pub type CategoryId = i32;

/// An age bracket participants register into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub name: String,
    /// Exhibition groups opt out of club standings.
    #[serde(default = "default_include_in_stats")]
    pub include_in_stats: bool,
}

fn default_include_in_stats() -> bool {
    true
}
