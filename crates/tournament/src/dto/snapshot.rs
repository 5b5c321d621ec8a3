use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::error::{Result, TournamentError};
use crate::models::{Category, CategoryId, Club, Fight, Participant, TableAssignment};
use crate::services::partition::{PoolAssignment, apply_assignment, generate_category_pools};

/// Full tournament state as exchanged with the outside world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub clubs: Vec<Club>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub fights: Vec<Fight>,
    #[serde(default)]
    pub table_assignments: Vec<TableAssignment>,
}

impl Snapshot {
    /// Case-insensitive lookup, category names are typed by hand.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        let wanted = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.trim().to_lowercase() == wanted)
    }

    pub fn participants_in(&self, category_id: CategoryId) -> Vec<Participant> {
        self.participants
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect()
    }

    pub fn fights_in(&self, category_id: CategoryId) -> Vec<Fight> {
        self.fights
            .iter()
            .filter(|f| f.category_id == category_id)
            .cloned()
            .collect()
    }

    pub fn table_assignment(&self, category_id: CategoryId, pool_number: i32) -> Option<&TableAssignment> {
        self.table_assignments
            .iter()
            .find(|a| a.is_for(category_id, pool_number))
    }

    pub fn is_pool_validated(&self, category_id: CategoryId, pool_number: i32) -> bool {
        self.table_assignment(category_id, pool_number)
            .is_some_and(|a| a.validated)
    }

    /// Pools queued on one table, in running order.
    pub fn table_queue(&self, table_number: i32) -> Vec<&TableAssignment> {
        let mut queue: Vec<_> = self
            .table_assignments
            .iter()
            .filter(|a| a.table_number == table_number)
            .collect();
        queue.sort_by_key(|a| (a.order, a.category_id, a.pool_number));
        queue
    }

    /// A copy with `assignment` inserted, or replacing the record of the same
    /// category and pool. Moving a pool to another table keeps its validation.
    pub fn with_table_assignment(&self, assignment: TableAssignment) -> Result<Snapshot> {
        assignment.validate()?;
        self.ensure_category(assignment.category_id)?;

        let mut snapshot = self.clone();
        match snapshot
            .table_assignments
            .iter()
            .position(|a| a.is_for(assignment.category_id, assignment.pool_number))
        {
            Some(index) => {
                let existing = &mut snapshot.table_assignments[index];
                *existing = TableAssignment {
                    validated: existing.validated,
                    ..assignment
                };
            }
            None => snapshot.table_assignments.push(assignment),
        }

        Ok(snapshot)
    }

    /// A copy with the pool's sign-off set to `validated`. The pool must already
    /// be assigned to a table.
    pub fn with_pool_validation(
        &self,
        category_id: CategoryId,
        pool_number: i32,
        validated: bool,
    ) -> Result<Snapshot> {
        let mut snapshot = self.clone();
        let assignment = snapshot
            .table_assignments
            .iter_mut()
            .find(|a| a.is_for(category_id, pool_number))
            .ok_or_else(|| {
                TournamentError::InvalidRecord(format!(
                    "Pool {} of category {} is not assigned to a table",
                    pool_number, category_id
                ))
            })?;
        assignment.validated = validated;

        Ok(snapshot)
    }

    fn ensure_category(&self, category_id: CategoryId) -> Result<()> {
        if self.categories.iter().any(|c| c.category_id == category_id) {
            Ok(())
        } else {
            Err(TournamentError::InvalidRecord(format!(
                "Unknown category {}",
                category_id
            )))
        }
    }

    /// Field-level checks on every record, plus category references. Fights
    /// pointing at unknown participants are allowed; aggregation skips them.
    pub fn check_records(&self) -> Result<()> {
        for participant in &self.participants {
            participant.validate()?;
            if !self.categories.iter().any(|c| c.category_id == participant.category_id) {
                return Err(TournamentError::InvalidRecord(format!(
                    "Participant {} references unknown category {}",
                    participant.participant_id, participant.category_id
                )));
            }
        }

        for fight in &self.fights {
            fight.validate()?;
        }

        let mut assigned_pools = HashSet::new();
        for assignment in &self.table_assignments {
            assignment.validate()?;
            self.ensure_category(assignment.category_id)?;
            if !assigned_pools.insert((assignment.category_id, assignment.pool_number)) {
                return Err(TournamentError::InvalidRecord(format!(
                    "Pool {} of category {} is assigned to more than one table",
                    assignment.pool_number, assignment.category_id
                )));
            }
        }

        Ok(())
    }

    /// A copy of the snapshot with the category's pools regenerated from
    /// `start_pool_number`.
    ///
    /// The category's fights and table assignments are dropped: they refer to
    /// the old pools. Other categories are left as they are.
    pub fn with_regenerated_pools(
        &self,
        category_id: CategoryId,
        start_pool_number: i32,
    ) -> Result<(Snapshot, PoolAssignment)> {
        let cohort = self.participants_in(category_id);
        let assignment = generate_category_pools(&cohort, start_pool_number)?;

        let regenerated: HashMap<_, _> = apply_assignment(&cohort, &assignment)
            .into_iter()
            .map(|p| (p.participant_id, p))
            .collect();
        let participants = self
            .participants
            .iter()
            .map(|p| regenerated.get(&p.participant_id).unwrap_or(p).clone())
            .collect();

        let fights: Vec<Fight> = self
            .fights
            .iter()
            .filter(|f| f.category_id != category_id)
            .cloned()
            .collect();

        let table_assignments: Vec<TableAssignment> = self
            .table_assignments
            .iter()
            .filter(|a| a.category_id != category_id)
            .cloned()
            .collect();

        debug!(
            "Category {}: {} pools, {} stale fights and {} table assignments discarded",
            category_id,
            assignment.pool_count(),
            self.fights.len() - fights.len(),
            self.table_assignments.len() - table_assignments.len()
        );

        let snapshot = Snapshot {
            categories: self.categories.clone(),
            clubs: self.clubs.clone(),
            participants,
            fights,
            table_assignments,
        };

        Ok((snapshot, assignment))
    }
}
