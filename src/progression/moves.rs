use crate::errors::MoveDataResult;
use crate::move_data::MoveDex;
use crate::pokemon::{Combatant, MoveSlot, MAX_MOVES};
use schema::{MoveId, SpeciesDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnMoveResult {
    Learned,
    AlreadyKnown,
    NoFreeSlot,
}

/// Moves a species unlocks above `from_level` and up to and including `to_level`,
/// in table order without duplicates.
pub fn level_up_moves_between(
    species: &SpeciesDefinition,
    from_level: u8,
    to_level: u8,
) -> Vec<MoveId> {
    let mut unlocked = Vec::new();
    for entry in &species.level_up_moves {
        if entry.level > from_level && entry.level <= to_level && !unlocked.contains(&entry.move_id)
        {
            unlocked.push(entry.move_id);
        }
    }
    unlocked
}

impl Combatant {
    /// Append a move with full uses if it is new and a slot is free.
    pub fn learn_move(&mut self, move_id: MoveId, move_dex: &MoveDex) -> MoveDataResult<LearnMoveResult> {
        if self.knows_move(move_id) {
            return Ok(LearnMoveResult::AlreadyKnown);
        }
        if self.moves.len() >= MAX_MOVES {
            return Ok(LearnMoveResult::NoFreeSlot);
        }

        self.moves.push(MoveSlot::new(move_id, move_dex.max_uses(move_id)?));
        tracing::debug!(combatant = %self.id, move_id = %move_id, "learned move");
        Ok(LearnMoveResult::Learned)
    }

    /// Overwrite the slot at `index` with a fresh copy of `move_id`.
    /// Returns the forgotten move, or None if the index is empty or the move is already known.
    pub fn replace_move(
        &mut self,
        index: usize,
        move_id: MoveId,
        move_dex: &MoveDex,
    ) -> MoveDataResult<Option<MoveId>> {
        if self.knows_move(move_id) || index >= self.moves.len() {
            return Ok(None);
        }
        let slot = MoveSlot::new(move_id, move_dex.max_uses(move_id)?);
        let forgotten = std::mem::replace(&mut self.moves[index], slot);
        Ok(Some(forgotten.move_id))
    }
}
