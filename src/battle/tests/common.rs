use crate::battle::rng::TurnRng;
use crate::config::BattleConfig;
use crate::move_data::MoveDex;
use crate::pokemon::{Combatant, StatusCondition};
use crate::species::SpeciesDex;
use schema::{MoveDefinition, MoveId, StatKey};

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```ignore
/// let pikachu = TestCombatantBuilder::new("pikachu", 25)
///     .with_moves(vec![MoveId::Tackle])
///     .with_status(StatusCondition::Paralysis)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    species: &'static str,
    level: u8,
    moves: Option<Vec<MoveId>>,
    status: Option<StatusCondition>,
    current_hp: Option<u16>,
    stages: Vec<(StatKey, i8)>,
}

impl TestCombatantBuilder {
    pub fn new(species: &'static str, level: u8) -> Self {
        Self {
            species,
            level,
            moves: None,
            status: None,
            current_hp: None,
            stages: Vec::new(),
        }
    }

    pub fn with_moves(mut self, moves: Vec<MoveId>) -> Self {
        self.moves = Some(moves);
        self
    }

    pub fn with_status(mut self, status: StatusCondition) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn with_stage(mut self, stat: StatKey, stage: i8) -> Self {
        self.stages.push((stat, stage));
        self
    }

    pub fn build(self) -> Combatant {
        let species = match SpeciesDex::builtin().and_then(|dex| dex.get(self.species)) {
            Ok(species) => species,
            Err(err) => panic!("Failed to load species data for {}: {}", self.species, err),
        };

        let mut pokemon = match Combatant::new(species, self.level, self.moves.as_deref(), dex()) {
            Ok(pokemon) => pokemon,
            Err(err) => panic!("Failed to build {}: {}", self.species, err),
        };

        pokemon.status = self.status;
        if let Some(hp) = self.current_hp {
            pokemon.set_hp(hp);
        }
        for (stat, stage) in self.stages {
            pokemon.stat_stages.set(stat, stage);
        }
        pokemon
    }
}

pub fn dex() -> &'static MoveDex {
    MoveDex::builtin().unwrap()
}

pub fn move_data(move_id: MoveId) -> &'static MoveDefinition {
    dex().get(move_id).unwrap()
}

/// Config with crits switched off so damage tests only script the rolls they care about.
pub fn no_crit_config() -> BattleConfig {
    BattleConfig {
        crit_chance: 0.0,
        ..BattleConfig::default()
    }
}

/// Creates a `TurnRng` whose every draw is the given value.
pub fn constant_rng(value: f64, draws: usize) -> TurnRng {
    TurnRng::new_for_test(vec![value; draws])
}
