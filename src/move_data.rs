use crate::errors::{MoveDataError, MoveDataResult};
use schema::{MoveCategory, MoveDefinition, MoveId};
use std::collections::HashMap;
use std::sync::LazyLock;
use strum::IntoEnumIterator;

// Built-in move data - parsed and validated once, on first access
static BUILTIN_MOVES: LazyLock<MoveDataResult<MoveDex>> =
    LazyLock::new(|| MoveDex::from_ron_str(include_str!("../data/moves.ron")));

/// Read-only move-id -> definition lookup.
#[derive(Debug, Clone)]
pub struct MoveDex {
    moves: HashMap<MoveId, MoveDefinition>,
}

impl MoveDex {
    /// The move table compiled into the crate.
    pub fn builtin() -> MoveDataResult<&'static MoveDex> {
        BUILTIN_MOVES.as_ref().map_err(Clone::clone)
    }

    /// Parse a RON list of move definitions and validate every entry.
    pub fn from_ron_str(content: &str) -> MoveDataResult<Self> {
        let definitions: Vec<MoveDefinition> = ron::from_str(content)
            .map_err(|e| MoveDataError::MalformedData(e.to_string()))?;
        Self::from_definitions(definitions)
    }

    pub fn from_definitions(definitions: Vec<MoveDefinition>) -> MoveDataResult<Self> {
        let mut moves = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            validate_move(&definition)?;
            let id = definition.id;
            if moves.insert(id, definition).is_some() {
                return Err(MoveDataError::MalformedData(format!(
                    "duplicate entry for {}",
                    id
                )));
            }
        }

        if let Some(missing) = MoveId::iter().find(|id| !moves.contains_key(id)) {
            return Err(MoveDataError::MoveNotFound(missing));
        }

        tracing::debug!(count = moves.len(), "loaded move data");
        Ok(Self { moves })
    }

    pub fn get(&self, move_id: MoveId) -> MoveDataResult<&MoveDefinition> {
        self.moves
            .get(&move_id)
            .ok_or(MoveDataError::MoveNotFound(move_id))
    }

    pub fn max_uses(&self, move_id: MoveId) -> MoveDataResult<u8> {
        self.get(move_id).map(|data| data.max_uses)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Get move data for a specific move from the built-in table
pub fn get_move_data(move_id: MoveId) -> MoveDataResult<&'static MoveDefinition> {
    MoveDex::builtin()?.get(move_id)
}

fn validate_move(definition: &MoveDefinition) -> MoveDataResult<()> {
    let malformed = |reason: &str| {
        Err(MoveDataError::MalformedData(format!(
            "{}: {}",
            definition.id, reason
        )))
    };

    if definition.accuracy > 100 {
        return malformed("accuracy above 100");
    }
    if definition.max_uses == 0 {
        return malformed("max uses must be positive");
    }

    match (definition.category, definition.power) {
        (MoveCategory::Status, Some(_)) => return malformed("status move declares power"),
        (MoveCategory::Physical | MoveCategory::Special, None | Some(0)) => {
            return malformed("damaging move needs positive power")
        }
        _ => {}
    }

    if let Some(effect) = &definition.effect {
        if let Some(chance) = effect.status_chance {
            if !(0.0..=1.0).contains(&chance) {
                return malformed("status chance outside [0, 1]");
            }
        }
        if effect.stat_changes.iter().any(|(_, delta)| *delta == 0) {
            return malformed("zero stat delta");
        }
        if definition.is_damaging() && !effect.stat_changes.is_empty() {
            return malformed("stat changes are only supported on status moves");
        }
    }

    Ok(())
}
