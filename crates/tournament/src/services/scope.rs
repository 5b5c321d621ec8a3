use std::collections::HashSet;

use crate::models::{Category, CategoryId, Participant};

/// Which categories count towards club standings.
#[derive(Debug, Clone, Default)]
pub struct StatsScope {
    included: HashSet<CategoryId>,
}

impl StatsScope {
    pub fn from_categories(categories: &[Category]) -> Self {
        Self {
            included: categories
                .iter()
                .filter(|c| c.include_in_stats)
                .map(|c| c.category_id)
                .collect(),
        }
    }

    pub fn includes(&self, category_id: CategoryId) -> bool {
        self.included.contains(&category_id)
    }

    /// Participants of opted-in categories. Unknown categories are left out.
    pub fn filter(&self, participants: &[Participant]) -> Vec<Participant> {
        participants
            .iter()
            .filter(|p| self.includes(p.category_id))
            .cloned()
            .collect()
    }
}
