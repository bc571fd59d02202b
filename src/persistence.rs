//! Save boundary for combatants.
//!
//! A [`CombatantRecord`] carries the fields that outlive a battle. Stat stages and
//! ability flags are per-battle and are not stored. Records are encoded with
//! postcard; restoring one recomputes the stat block from species and level and
//! rejects the record if the stored stats disagree.

use crate::errors::SnapshotError;
use crate::pokemon::{AbilityState, Combatant, MoveSlot, StatStages, Stats, StatusCondition, MAX_LEVEL, MAX_MOVES};
use crate::species::SpeciesDex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantRecord {
    pub id: String,
    pub species: String,
    pub name: String,
    pub level: u8,
    pub experience: u32,
    pub stats: Stats,
    pub current_hp: u16,
    pub status: Option<StatusCondition>,
    pub moves: Vec<MoveSlot>,
}

impl CombatantRecord {
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        postcard::to_allocvec(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        postcard::from_bytes(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}

impl Combatant {
    pub fn to_record(&self) -> CombatantRecord {
        CombatantRecord {
            id: self.id.clone(),
            species: self.species.key.clone(),
            name: self.name.clone(),
            level: self.level,
            experience: self.experience,
            stats: self.stats,
            current_hp: self.current_hp,
            status: self.status,
            moves: self.moves.clone(),
        }
    }

    /// Rebuild a combatant from a record, ready for a fresh battle.
    pub fn from_record(record: CombatantRecord, species_dex: &SpeciesDex) -> Result<Self, SnapshotError> {
        let species = species_dex
            .get(&record.species)
            .map_err(|_| SnapshotError::UnknownSpecies(record.species.clone()))?;

        if record.level == 0 || record.level > MAX_LEVEL {
            return Err(SnapshotError::Invalid(format!("level {} out of range", record.level)));
        }
        let stats = Stats::compute(&species.base_stats, record.level);
        if stats != record.stats {
            return Err(SnapshotError::StatMismatch {
                species: record.species,
                level: record.level,
            });
        }
        if record.current_hp > stats.hp {
            return Err(SnapshotError::Invalid(format!(
                "current HP {} exceeds max HP {}",
                record.current_hp, stats.hp
            )));
        }
        if record.moves.len() > MAX_MOVES {
            return Err(SnapshotError::Invalid(format!("{} move slots", record.moves.len())));
        }
        if let Some(slot) = record.moves.iter().find(|slot| slot.uses > slot.max_uses) {
            return Err(SnapshotError::Invalid(format!(
                "{} has {} of {} uses",
                slot.move_id, slot.uses, slot.max_uses
            )));
        }

        Ok(Combatant {
            id: record.id,
            species,
            name: record.name,
            level: record.level,
            experience: record.experience,
            stats,
            current_hp: record.current_hp,
            status: record.status,
            stat_stages: StatStages::default(),
            ability_state: AbilityState::default(),
            moves: record.moves,
        })
    }
}
