use crate::{AbilityId, MoveId, PokemonType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl BaseStats {
    pub fn total(&self) -> u16 {
        self.hp as u16
            + self.attack as u16
            + self.defense as u16
            + self.sp_attack as u16
            + self.sp_defense as u16
            + self.speed as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpMove {
    pub level: u8,
    pub move_id: MoveId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionData {
    pub min_level: u8,
    pub evolves_into: String, // Species key
    pub evolves_into_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDefinition {
    pub key: String,
    pub pokedex_number: u16,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub base_stats: BaseStats,
    pub base_exp: u16,
    /// Falls back to [`AbilityId::default_for_types`] when omitted.
    #[serde(default)]
    pub ability: Option<AbilityId>,
    #[serde(default)]
    pub level_up_moves: Vec<LevelUpMove>,
    #[serde(default)]
    pub evolution: Option<EvolutionData>,
}

impl SpeciesDefinition {
    pub fn ability(&self) -> AbilityId {
        self.ability
            .unwrap_or_else(|| AbilityId::default_for_types(&self.types))
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.contains(&pokemon_type)
    }

    /// Level-up moves sorted by unlock level, keeping table order within a level.
    pub fn sorted_level_up_moves(&self) -> Vec<LevelUpMove> {
        let mut sorted = self.level_up_moves.clone();
        sorted.sort_by_key(|entry| entry.level);
        sorted
    }
}
