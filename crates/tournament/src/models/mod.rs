pub mod category;
pub mod club;
pub mod fight;
pub mod participant;
pub mod table_assignment;

pub use category::{Category, CategoryId};
pub use club::{Club, ClubId};
pub use fight::{Fight, FightId};
pub use participant::{Participant, ParticipantId, Sex};
pub use table_assignment::TableAssignment;
