// Pokemon Field Schema - Shared type definitions
// This crate contains the static enums and data records shared between the
// battle engine and the RON data files it loads.

// Re-export the main types
pub use abilities::*;
pub use move_types::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod abilities;
pub mod move_types;
pub mod pokemon_types;
pub mod species_data;
