//! Pokemon Field Battle Engine
//!
//! Turn-based combat resolution and combatant progression for a tile-based
//! monster RPG: type chart, stat derivation, move resolution with abilities,
//! capture simulation and a move-choice AI. Static data is embedded and
//! validated on first use; randomness is injected through [`BattleRng`].

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod move_data;
pub mod persistence;
pub mod pokemon;
pub mod progression;
pub mod species;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    AbilityId, BaseStats, EffectTarget, EvolutionData, LevelUpMove, MoveCategory,
    MoveDefinition, MoveEffect, MoveId, PokemonType, SpeciesDefinition, StatKey, StatusType,
};

// --- From this crate's modules (`src/`) ---

// Move resolution and its collaborators.
pub use battle::ai::{Behavior, ScoringAI};
pub use battle::catch::attempt_catch;
pub use battle::engine::{
    apply_battle_entry_abilities, apply_end_of_turn_status, attempt_action, resolve_move,
};
pub use battle::rng::{BattleRng, RandomSource, TurnRng};
pub use battle::session::BattleSession;
pub use battle::state::{
    BattleEvent, CatchResult, EndOfTurnResult, EventBus, MoveOutcome, MoveResult,
};
pub use battle::turn_orchestrator::{turn_order, ActionOrder};

// Combatants and progression.
pub use persistence::CombatantRecord;
pub use pokemon::{AbilityState, Combatant, MoveSlot, StatStages, Stats, StatusCondition};
pub use progression::{
    experience_for_level, experience_yield, level_up_moves_between, LearnMoveResult,
    LevelUpReport,
};

// Data access and configuration.
pub use config::{AiConfig, BattleConfig};
pub use move_data::{get_move_data, MoveDex};
pub use species::{get_species_data, SpeciesDex, SpeciesSummary};

// Crate-specific error and result types.
pub use errors::{
    ConfigError, EngineError, EngineResult, MoveDataError, MoveDataResult, SnapshotError,
    SpeciesDataError, SpeciesDataResult,
};
