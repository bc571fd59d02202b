//! Experience, leveling, move learning and evolution eligibility.
//!
//! Everything here operates on a [`Combatant`](crate::pokemon::Combatant) and the
//! static species data it references; nothing draws randomness.

pub mod evolution;
pub mod experience;
pub mod moves;
pub mod rewards;

pub use experience::{experience_for_level, LevelUpReport};
pub use moves::{level_up_moves_between, LearnMoveResult};
pub use rewards::experience_yield;
