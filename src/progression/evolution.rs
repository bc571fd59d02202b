use crate::pokemon::Combatant;
use schema::{EvolutionData, SpeciesDefinition};
use std::sync::Arc;

impl Combatant {
    /// The evolution this combatant currently qualifies for.
    ///
    /// Only eligibility is reported; swapping species is left to the caller via
    /// [`Combatant::evolve_into`].
    pub fn pending_evolution(&self) -> Option<&EvolutionData> {
        self.species
            .evolution
            .as_ref()
            .filter(|evolution| self.level >= evolution.min_level)
    }

    /// Swap to `new_species`, keeping level, experience, moves and status.
    /// A name that still matches the old species name follows the new species.
    pub fn evolve_into(&mut self, new_species: Arc<SpeciesDefinition>) {
        if self.name == self.species.name {
            self.name = new_species.name.clone();
        }
        tracing::debug!(
            combatant = %self.id,
            from = %self.species.key,
            to = %new_species.key,
            "evolving"
        );
        self.species = new_species;
        self.recalculate_stats();
    }
}

#[cfg(test)]
mod tests {
    use crate::move_data::MoveDex;
    use crate::pokemon::{Combatant, Stats};
    use crate::species::get_species_data;

    fn combatant(key: &str, level: u8) -> Combatant {
        let species = get_species_data(key).unwrap();
        Combatant::new(species, level, None, MoveDex::builtin().unwrap()).unwrap()
    }

    #[test]
    fn test_pending_evolution_threshold() {
        assert!(combatant("bulbasaur", 15).pending_evolution().is_none());
        let evolution = combatant("bulbasaur", 16).pending_evolution().cloned().unwrap();
        assert_eq!(evolution.evolves_into, "ivysaur");
        assert!(combatant("venusaur", 100).pending_evolution().is_none());
        assert!(combatant("pikachu", 50).pending_evolution().is_none());
    }

    #[test]
    fn test_evolve_into_recomputes_stats() {
        let mut pokemon = combatant("charmander", 16);
        pokemon.take_damage(10);
        let moves = pokemon.moves.clone();
        let old_max = pokemon.max_hp();

        let target = pokemon.pending_evolution().unwrap().evolves_into.clone();
        pokemon.evolve_into(get_species_data(&target).unwrap());

        assert_eq!(pokemon.name, "Charmeleon");
        assert_eq!(pokemon.species.key, "charmeleon");
        assert_eq!(pokemon.stats, Stats::compute(&pokemon.species.base_stats, 16));
        assert_eq!(pokemon.current_hp(), pokemon.max_hp() - 10);
        assert!(pokemon.max_hp() > old_max);
        assert_eq!(pokemon.moves, moves);
    }

    #[test]
    fn test_nickname_survives_evolution() {
        let mut pokemon = combatant("squirtle", 16);
        pokemon.name = "Shelly".to_string();
        pokemon.evolve_into(get_species_data("wartortle").unwrap());
        assert_eq!(pokemon.name, "Shelly");
    }
}
