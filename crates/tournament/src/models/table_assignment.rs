use serde::{Deserialize, Serialize};
use validator::Validate;

use super::CategoryId;

/// Which mat table runs a pool, and in what position of that table's queue.
///
/// There is at most one record per (category, pool). `validated` is set once
/// the table referee signs off the pool's results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TableAssignment {
    pub category_id: CategoryId,

    #[validate(range(min = 1, message = "Pool numbers start at 1"))]
    pub pool_number: i32,

    #[validate(range(min = 1, message = "Table numbers start at 1"))]
    pub table_number: i32,

    #[validate(range(min = 1, message = "Order starts at 1"))]
    pub order: i32,

    #[serde(default)]
    pub validated: bool,
}

impl TableAssignment {
    pub fn is_for(&self, category_id: CategoryId, pool_number: i32) -> bool {
        self.category_id == category_id && self.pool_number == pool_number
    }
}
