use schema::MoveId;
use thiserror::Error;

/// Main error type for the Pokemon Field battle engine.
///
/// Errors only surface at load and restore boundaries. Everything that can go
/// wrong during a battle (misses, immunities, full move slots) is reported as a
/// typed outcome instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Move data error: {0}")]
    MoveData(#[from] MoveDataError),
    #[error("Species data error: {0}")]
    SpeciesData(#[from] SpeciesDataError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Errors related to move data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveDataError {
    /// The specified move was not found in the database
    #[error("Move not found: {0}")]
    MoveNotFound(MoveId),
    /// Move data is malformed or incomplete
    #[error("Malformed move data: {0}")]
    MalformedData(String),
}

/// Errors related to species data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeciesDataError {
    /// The specified species was not found in the database
    #[error("Species not found: {0}")]
    SpeciesNotFound(String),
    /// Species data is malformed or incomplete
    #[error("Malformed species data: {0}")]
    MalformedData(String),
}

/// Errors raised while loading a `BattleConfig`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Configuration validation error: {0}")]
    Validation(String),
}

/// Errors raised while restoring a persisted combatant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Failed to encode combatant: {0}")]
    Encode(String),
    #[error("Failed to decode combatant: {0}")]
    Decode(String),
    #[error("Unknown species in snapshot: {0}")]
    UnknownSpecies(String),
    #[error("Stored stats for {species} at level {level} do not match recomputed stats")]
    StatMismatch { species: String, level: u8 },
    #[error("Invalid snapshot: {0}")]
    Invalid(String),
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using MoveDataError
pub type MoveDataResult<T> = Result<T, MoveDataError>;

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;
