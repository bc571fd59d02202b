use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter, EnumCount,
)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PokemonType {
    /// Defending types this attacking type deals double damage to.
    pub fn double_damage_to(self) -> &'static [PokemonType] {
        use PokemonType::*;

        match self {
            Normal => &[],
            Fire => &[Grass, Ice, Bug, Steel],
            Water => &[Fire, Ground, Rock],
            Electric => &[Water, Flying],
            Grass => &[Water, Ground, Rock],
            Ice => &[Grass, Ground, Flying, Dragon],
            Fighting => &[Normal, Ice, Rock, Dark, Steel],
            Poison => &[Grass, Fairy],
            Ground => &[Fire, Electric, Poison, Rock, Steel],
            Flying => &[Grass, Fighting, Bug],
            Psychic => &[Fighting, Poison],
            Bug => &[Grass, Psychic, Dark],
            Rock => &[Fire, Ice, Flying, Bug],
            Ghost => &[Psychic, Ghost],
            Dragon => &[Dragon],
            Dark => &[Psychic, Ghost],
            Steel => &[Ice, Rock, Fairy],
            Fairy => &[Fighting, Dragon, Dark],
        }
    }

    /// Defending types that halve damage from this attacking type.
    pub fn half_damage_to(self) -> &'static [PokemonType] {
        use PokemonType::*;

        match self {
            Normal => &[Rock, Steel],
            Fire => &[Fire, Water, Rock, Dragon],
            Water => &[Water, Grass, Dragon],
            Electric => &[Electric, Grass, Dragon],
            Grass => &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],
            Ice => &[Fire, Water, Ice, Steel],
            Fighting => &[Poison, Flying, Psychic, Bug, Fairy],
            Poison => &[Poison, Ground, Rock, Ghost],
            Ground => &[Grass, Bug],
            Flying => &[Electric, Rock, Steel],
            Psychic => &[Psychic, Steel],
            Bug => &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],
            Rock => &[Fighting, Ground, Steel],
            Ghost => &[Dark],
            Dragon => &[Steel],
            Dark => &[Fighting, Dark, Fairy],
            Steel => &[Fire, Water, Electric, Steel],
            Fairy => &[Fire, Poison, Steel],
        }
    }

    /// Defending types that are completely immune to this attacking type.
    pub fn no_damage_to(self) -> &'static [PokemonType] {
        use PokemonType::*;

        match self {
            Normal => &[Ghost],
            Electric => &[Ground],
            Fighting => &[Ghost],
            Poison => &[Steel],
            Ground => &[Flying],
            Psychic => &[Dark],
            Ghost => &[Normal],
            Dragon => &[Fairy],
            _ => &[],
        }
    }

    /// Calculate type effectiveness multiplier for attacking type vs a single defending type.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> f64 {
        // Immunity wins over the other lists, then resistance, then weakness.
        if attacking.no_damage_to().contains(&defending) {
            0.0
        } else if attacking.half_damage_to().contains(&defending) {
            0.5
        } else if attacking.double_damage_to().contains(&defending) {
            2.0
        } else {
            1.0
        }
    }

    /// Product of the pairwise factor over every defending type.
    pub fn multiplier(attacking: PokemonType, defending: &[PokemonType]) -> f64 {
        defending
            .iter()
            .map(|&defender| Self::type_effectiveness(attacking, defender))
            .product()
    }

    pub fn is_immune(attacking: PokemonType, defending: &[PokemonType]) -> bool {
        Self::multiplier(attacking, defending) == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_unlisted_pairs_are_neutral() {
        assert_eq!(
            PokemonType::type_effectiveness(PokemonType::Normal, PokemonType::Fire),
            1.0
        );
        assert_eq!(
            PokemonType::type_effectiveness(PokemonType::Dragon, PokemonType::Water),
            1.0
        );
    }

    #[test]
    fn test_dual_type_products() {
        use PokemonType::*;

        assert_eq!(PokemonType::multiplier(Ice, &[Grass, Flying]), 4.0);
        assert_eq!(PokemonType::multiplier(Fire, &[Grass, Poison]), 2.0);
        assert_eq!(PokemonType::multiplier(Fire, &[Water, Rock]), 0.25);
        assert_eq!(PokemonType::multiplier(Water, &[Fire, Water]), 1.0);
        assert_eq!(PokemonType::multiplier(Electric, &[Water, Ground]), 0.0);
        assert_eq!(PokemonType::multiplier(Grass, &[Fire]), 0.5);
    }

    #[test]
    fn test_immunities() {
        use PokemonType::*;

        assert!(PokemonType::is_immune(Normal, &[Ghost]));
        assert!(PokemonType::is_immune(Ghost, &[Normal]));
        assert!(PokemonType::is_immune(Ground, &[Flying, Fire]));
        assert!(!PokemonType::is_immune(Ground, &[Fire]));
    }

    #[test]
    fn test_every_factor_is_a_known_tier() {
        for attacking in PokemonType::iter() {
            for defending in PokemonType::iter() {
                let factor = PokemonType::type_effectiveness(attacking, defending);
                assert!(
                    [0.0, 0.5, 1.0, 2.0].contains(&factor),
                    "{attacking} vs {defending} gave {factor}"
                );
            }
        }
        assert_eq!(PokemonType::COUNT, 18);
    }
}
