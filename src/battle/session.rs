use crate::battle::ai::{Behavior, ScoringAI};
use crate::battle::catch::attempt_catch;
use crate::battle::engine;
use crate::battle::rng::{BattleRng, RandomSource};
use crate::battle::state::{CatchResult, EndOfTurnResult, EventBus, MoveResult};
use crate::battle::turn_orchestrator::{turn_order, ActionOrder};
use crate::config::BattleConfig;
use crate::errors::MoveDataResult;
use crate::move_data::MoveDex;
use crate::pokemon::Combatant;
use rand::rngs::ThreadRng;
use schema::MoveId;

/// Everything one battle needs besides the combatants themselves: move data,
/// tuning constants and the random source.
pub struct BattleSession<'a, R: BattleRng> {
    moves: &'a MoveDex,
    config: BattleConfig,
    ai: ScoringAI,
    rng: R,
}

impl<'a> BattleSession<'a, RandomSource<ThreadRng>> {
    /// Session drawing from the ambient thread-local generator.
    pub fn with_thread_rng(moves: &'a MoveDex, config: BattleConfig) -> Self {
        Self::new(moves, config, RandomSource::thread())
    }
}

impl<'a, R: BattleRng> BattleSession<'a, R> {
    pub fn new(moves: &'a MoveDex, config: BattleConfig, rng: R) -> Self {
        let ai = ScoringAI::from_battle_config(&config);
        Self {
            moves,
            config,
            ai,
            rng,
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn move_dex(&self) -> &MoveDex {
        self.moves
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Resolve `move_id` without touching the attacker's move slots.
    pub fn resolve_move(
        &mut self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
        move_id: MoveId,
    ) -> MoveDataResult<MoveResult> {
        let move_data = self.moves.get(move_id)?;
        Ok(engine::resolve_move(
            attacker,
            defender,
            move_data,
            &self.config,
            &mut self.rng,
        ))
    }

    /// Spend one use of the move in `slot` and resolve it. Returns None when the
    /// slot does not exist or has no uses left.
    pub fn use_move_slot(
        &mut self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
        slot: usize,
    ) -> MoveDataResult<Option<MoveResult>> {
        let Some(move_slot) = attacker.moves.get_mut(slot) else {
            return Ok(None);
        };
        let move_id = move_slot.move_id;
        if !move_slot.use_move() {
            return Ok(None);
        }
        self.resolve_move(attacker, defender, move_id).map(Some)
    }

    pub fn choose_move(&mut self, attacker: &Combatant, defender: &Combatant) -> Option<usize> {
        self.ai
            .choose_move(attacker, defender, self.moves, &mut self.rng)
    }

    pub fn attempt_catch(&mut self, target: &Combatant, ball_rate: f64) -> CatchResult {
        attempt_catch(target, ball_rate, &mut self.rng)
    }

    pub fn apply_battle_entry_abilities(
        &mut self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
    ) -> EventBus {
        engine::apply_battle_entry_abilities(attacker, defender)
    }

    pub fn apply_end_of_turn_status(&mut self, pokemon: &mut Combatant) -> EndOfTurnResult {
        engine::apply_end_of_turn_status(pokemon)
    }

    pub fn turn_order(
        &mut self,
        first: &Combatant,
        first_move: MoveId,
        second: &Combatant,
        second_move: MoveId,
    ) -> MoveDataResult<ActionOrder> {
        let first_move = self.moves.get(first_move)?;
        let second_move = self.moves.get(second_move)?;
        Ok(turn_order(
            first,
            first_move,
            second,
            second_move,
            &mut self.rng,
        ))
    }
}
