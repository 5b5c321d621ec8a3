use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{Result, TournamentError};
use crate::models::{Participant, ParticipantId, Sex};

/// Preferred number of judokas per pool.
pub const TARGET_POOL_SIZE: usize = 4;

/// Below this a group cannot be split; it becomes a single short pool.
pub const MIN_POOL_SIZE: usize = 3;

/// Pool numbers produced for one group of participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolAssignment {
    pub pool_numbers: HashMap<ParticipantId, i32>,
    /// Size of each pool, in pool-number order.
    pub pool_sizes: Vec<usize>,
    /// First pool number not used by this assignment.
    pub next_pool_number: i32,
}

impl PoolAssignment {
    pub fn empty(start_pool_number: i32) -> Self {
        Self {
            pool_numbers: HashMap::new(),
            pool_sizes: Vec::new(),
            next_pool_number: start_pool_number,
        }
    }

    pub fn pool_of(&self, participant_id: ParticipantId) -> Option<i32> {
        self.pool_numbers.get(&participant_id).copied()
    }

    pub fn pool_count(&self) -> usize {
        self.pool_sizes.len()
    }

    fn extend(&mut self, other: PoolAssignment) {
        self.pool_numbers.extend(other.pool_numbers);
        self.pool_sizes.extend(other.pool_sizes);
        self.next_pool_number = other.next_pool_number;
    }
}

/// Number of pools a group of `n` participants is split into.
pub fn pool_count(n: usize) -> usize {
    match n {
        0 => 0,
        n if n < MIN_POOL_SIZE => 1,
        // 3 + 2 would leave a pool of two
        5 => 1,
        n => n.div_ceil(TARGET_POOL_SIZE),
    }
}

/// Pool sizes for a group of `n`, lightest pool first. The leading pools absorb
/// the remainder, so sizes differ by at most one and always sum to `n`.
pub fn pool_sizes(n: usize) -> Vec<usize> {
    let count = pool_count(n);
    if count == 0 {
        return Vec::new();
    }

    let base_size = n / count;
    let extra = n % count;

    (0..count)
        .map(|i| if i < extra { base_size + 1 } else { base_size })
        .collect()
}

/// Splits one homogeneous group (same category, same sex) into weight bands.
///
/// Participants are stable-sorted by weight, so ties keep their input order and
/// the result is reproducible. Pools are numbered contiguously from
/// `start_pool_number`; pass the returned `next_pool_number` to the next group.
///
/// `start_pool_number` must be at least 1. Every participant must have a
/// positive weight and a unique id, otherwise the whole call is rejected.
pub fn assign_pools(participants: &[Participant], start_pool_number: i32) -> Result<PoolAssignment> {
    if start_pool_number < 1 {
        return Err(TournamentError::InvalidPoolNumber(start_pool_number));
    }

    let mut weighed = Vec::with_capacity(participants.len());
    let mut seen = HashSet::with_capacity(participants.len());

    for participant in participants {
        let weight = checked_weight(participant)?;
        if !seen.insert(participant.participant_id) {
            return Err(TournamentError::DuplicateParticipant(participant.participant_id));
        }
        weighed.push((participant.participant_id, weight));
    }

    if weighed.is_empty() {
        return Ok(PoolAssignment::empty(start_pool_number));
    }

    weighed.sort_by_key(|(_, weight)| *weight);

    let sizes = pool_sizes(weighed.len());
    let mut pool_numbers = HashMap::with_capacity(weighed.len());
    let mut remaining = weighed.as_slice();
    let mut pool_number = start_pool_number;

    for &size in &sizes {
        let (chunk, rest) = remaining.split_at(size);
        for (participant_id, _) in chunk {
            pool_numbers.insert(*participant_id, pool_number);
        }
        remaining = rest;
        pool_number = pool_number
            .checked_add(1)
            .ok_or(TournamentError::PoolNumberOverflow(pool_number))?;
    }

    debug!(
        "Split {} participants into pools {}..{} with sizes {:?}",
        weighed.len(),
        start_pool_number,
        pool_number,
        sizes
    );

    Ok(PoolAssignment {
        pool_numbers,
        pool_sizes: sizes,
        next_pool_number: pool_number,
    })
}

/// Regenerates the pools of a whole category: boys are numbered first, girls
/// continue the sequence.
pub fn generate_category_pools(cohort: &[Participant], start_pool_number: i32) -> Result<PoolAssignment> {
    let mut assignment = PoolAssignment::empty(start_pool_number);

    for sex in [Sex::M, Sex::F] {
        let group: Vec<Participant> = cohort.iter().filter(|p| p.sex == sex).cloned().collect();
        let group_assignment = assign_pools(&group, assignment.next_pool_number)?;

        debug!(
            "Sex {}: {} participants, {} pools",
            sex.as_str(),
            group.len(),
            group_assignment.pool_count()
        );

        assignment.extend(group_assignment);
    }

    Ok(assignment)
}

/// Copies `participants` with their pool number replaced by the assignment.
/// Anyone the assignment does not mention ends up without a pool.
pub fn apply_assignment(participants: &[Participant], assignment: &PoolAssignment) -> Vec<Participant> {
    participants
        .iter()
        .map(|p| Participant {
            pool_number: assignment.pool_of(p.participant_id),
            ..p.clone()
        })
        .collect()
}

/// Participants that have a pool, grouped by pool number and ordered by weight
/// inside each pool.
pub fn group_by_pool(participants: &[Participant]) -> BTreeMap<i32, Vec<&Participant>> {
    let mut pools: BTreeMap<i32, Vec<&Participant>> = BTreeMap::new();

    for participant in participants {
        if let Some(pool_number) = participant.pool_number {
            pools.entry(pool_number).or_default().push(participant);
        }
    }

    for members in pools.values_mut() {
        members.sort_by(|a, b| compare_weights(a.weight, b.weight));
    }

    pools
}

fn checked_weight(participant: &Participant) -> Result<Decimal> {
    match participant.weight {
        None => Err(TournamentError::MissingWeight(participant.participant_id)),
        Some(weight) if weight <= Decimal::ZERO => Err(TournamentError::InvalidWeight {
            participant_id: participant.participant_id,
            weight,
        }),
        Some(weight) => Ok(weight),
    }
}

// Unweighed participants sort last.
fn compare_weights(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
