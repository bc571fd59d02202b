use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Passive traits consulted at fixed points of move resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum AbilityId {
    Overgrow,
    Blaze,
    Torrent,
    Static,
    Intimidate,
    Levitate,
    Sturdy,
    WaterAbsorb,
    VoltAbsorb,
    FlashFire,
    ThickFat,
    Guts,
}

impl AbilityId {
    pub fn name(self) -> &'static str {
        match self {
            AbilityId::Overgrow => "Overgrow",
            AbilityId::Blaze => "Blaze",
            AbilityId::Torrent => "Torrent",
            AbilityId::Static => "Static",
            AbilityId::Intimidate => "Intimidate",
            AbilityId::Levitate => "Levitate",
            AbilityId::Sturdy => "Sturdy",
            AbilityId::WaterAbsorb => "Water Absorb",
            AbilityId::VoltAbsorb => "Volt Absorb",
            AbilityId::FlashFire => "Flash Fire",
            AbilityId::ThickFat => "Thick Fat",
            AbilityId::Guts => "Guts",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AbilityId::Overgrow => "Boosts Grass moves when HP is low.",
            AbilityId::Blaze => "Boosts Fire moves when HP is low.",
            AbilityId::Torrent => "Boosts Water moves when HP is low.",
            AbilityId::Static => "May paralyze attackers after physical contact.",
            AbilityId::Intimidate => "Lowers the foe's Attack on battle entry.",
            AbilityId::Levitate => "Immune to Ground-type moves.",
            AbilityId::Sturdy => "Survives a knockout hit at 1 HP from full HP.",
            AbilityId::WaterAbsorb => "Absorbs Water moves and heals HP.",
            AbilityId::VoltAbsorb => "Absorbs Electric moves and heals HP.",
            AbilityId::FlashFire => "Absorbs Fire moves and boosts own Fire moves.",
            AbilityId::ThickFat => "Reduces damage from Fire and Ice moves.",
            AbilityId::Guts => "Boosts physical power when statused.",
        }
    }

    /// The move type a low-HP "pinch" ability powers up, if any.
    pub fn pinch_type(self) -> Option<PokemonType> {
        match self {
            AbilityId::Overgrow => Some(PokemonType::Grass),
            AbilityId::Blaze => Some(PokemonType::Fire),
            AbilityId::Torrent => Some(PokemonType::Water),
            _ => None,
        }
    }

    /// Ability assigned to species whose data does not name one.
    pub fn default_for_types(types: &[PokemonType]) -> AbilityId {
        use PokemonType::*;

        let has = |t: PokemonType| types.contains(&t);
        if has(Fire) {
            AbilityId::Blaze
        } else if has(Water) {
            AbilityId::Torrent
        } else if has(Grass) {
            AbilityId::Overgrow
        } else if has(Electric) {
            AbilityId::Static
        } else if has(Flying) || has(Ghost) {
            AbilityId::Levitate
        } else if has(Rock) || has(Steel) {
            AbilityId::Sturdy
        } else if has(Poison) {
            AbilityId::Guts
        } else {
            AbilityId::Sturdy
        }
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ability_priority() {
        use PokemonType::*;

        assert_eq!(AbilityId::default_for_types(&[Grass, Poison]), AbilityId::Overgrow);
        assert_eq!(AbilityId::default_for_types(&[Water, Fire]), AbilityId::Blaze);
        assert_eq!(AbilityId::default_for_types(&[Ghost, Poison]), AbilityId::Levitate);
        assert_eq!(AbilityId::default_for_types(&[Poison]), AbilityId::Guts);
        assert_eq!(AbilityId::default_for_types(&[Normal]), AbilityId::Sturdy);
    }

    #[test]
    fn test_pinch_types() {
        assert_eq!(AbilityId::Blaze.pinch_type(), Some(PokemonType::Fire));
        assert_eq!(AbilityId::Guts.pinch_type(), None);
    }
}
