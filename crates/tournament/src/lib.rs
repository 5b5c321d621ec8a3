//! Pool partitioning and score aggregation for youth judo tournaments.
//!
//! Everything in this crate is a pure function over in-memory records: loading
//! and persisting participants and fights is the caller's job.

pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use dto::snapshot::Snapshot;
pub use error::{Result, TournamentError};
pub use models::{
    Category, CategoryId, Club, ClubId, Fight, FightId, Participant, ParticipantId, Sex,
    TableAssignment,
};
pub use services::normalization::{FoldingNormalizer, NameNormalizer};
pub use services::partition::{PoolAssignment, assign_pools, generate_category_pools};
pub use services::scope::StatsScope;
pub use services::stats::{ClubStats, ParticipantStats, aggregate, club_stats, warnings};
