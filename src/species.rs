use crate::errors::{SpeciesDataError, SpeciesDataResult};
use schema::SpeciesDefinition;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

// Built-in species data - parsed and validated once, on first access
static BUILTIN_SPECIES: LazyLock<SpeciesDataResult<SpeciesDex>> =
    LazyLock::new(|| SpeciesDex::from_ron_str(include_str!("../data/species.ron")));

const MAX_LEVEL: u8 = 100;

/// Read-only species-key -> definition lookup. Definitions are shared with the
/// combatants created from them.
#[derive(Debug, Clone)]
pub struct SpeciesDex {
    species: HashMap<String, Arc<SpeciesDefinition>>,
}

impl SpeciesDex {
    /// The species table compiled into the crate.
    pub fn builtin() -> SpeciesDataResult<&'static SpeciesDex> {
        BUILTIN_SPECIES.as_ref().map_err(Clone::clone)
    }

    /// Parse a RON list of species definitions and validate every entry.
    pub fn from_ron_str(content: &str) -> SpeciesDataResult<Self> {
        let definitions: Vec<SpeciesDefinition> = ron::from_str(content)
            .map_err(|e| SpeciesDataError::MalformedData(e.to_string()))?;
        Self::from_definitions(definitions)
    }

    pub fn from_definitions(definitions: Vec<SpeciesDefinition>) -> SpeciesDataResult<Self> {
        let mut species = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            validate_species(&definition)?;
            let key = definition.key.clone();
            if species.insert(key.clone(), Arc::new(definition)).is_some() {
                return Err(SpeciesDataError::MalformedData(format!(
                    "duplicate entry for {}",
                    key
                )));
            }
        }

        for definition in species.values() {
            if let Some(evolution) = &definition.evolution {
                if !species.contains_key(&evolution.evolves_into) {
                    return Err(SpeciesDataError::MalformedData(format!(
                        "{} evolves into unknown species {}",
                        definition.key, evolution.evolves_into
                    )));
                }
            }
        }

        tracing::debug!(count = species.len(), "loaded species data");
        Ok(Self { species })
    }

    pub fn get(&self, key: &str) -> SpeciesDataResult<Arc<SpeciesDefinition>> {
        self.species
            .get(key)
            .cloned()
            .ok_or_else(|| SpeciesDataError::SpeciesNotFound(key.to_string()))
    }

    /// All species ordered by pokedex number.
    pub fn all(&self) -> Vec<Arc<SpeciesDefinition>> {
        let mut all: Vec<_> = self.species.values().cloned().collect();
        all.sort_by_key(|definition| definition.pokedex_number);
        all
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

/// Get species data for a key from the built-in table
pub fn get_species_data(key: &str) -> SpeciesDataResult<Arc<SpeciesDefinition>> {
    SpeciesDex::builtin()?.get(key)
}

fn validate_species(definition: &SpeciesDefinition) -> SpeciesDataResult<()> {
    let malformed = |reason: String| {
        Err(SpeciesDataError::MalformedData(format!(
            "{}: {}",
            definition.key, reason
        )))
    };

    if definition.types.is_empty() || definition.types.len() > 2 {
        return malformed(format!("expected 1-2 types, got {}", definition.types.len()));
    }
    if definition.types.len() == 2 && definition.types[0] == definition.types[1] {
        return malformed("duplicate type".to_string());
    }
    if definition.base_stats.hp == 0 {
        return malformed("base HP must be positive".to_string());
    }
    if let Some(entry) = definition
        .level_up_moves
        .iter()
        .find(|entry| entry.level == 0 || entry.level > MAX_LEVEL)
    {
        return malformed(format!("level-up move at invalid level {}", entry.level));
    }
    if let Some(evolution) = &definition.evolution {
        if evolution.min_level == 0 || evolution.min_level > MAX_LEVEL {
            return malformed(format!("evolution at invalid level {}", evolution.min_level));
        }
    }

    Ok(())
}

/// Display detailed information about a species including stats and ability
pub struct SpeciesSummary<'a>(pub &'a SpeciesDefinition);

impl fmt::Display for SpeciesSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0;

        writeln!(f, "{} (#{:03})", data.name, data.pokedex_number)?;
        writeln!(f, "--------------------")?;

        let type_names: Vec<String> = data.types.iter().map(|t| t.to_string()).collect();
        writeln!(f, "Type(s): {}", type_names.join(" / "))?;
        let ability = data.ability();
        writeln!(f, "Ability: {} - {}", ability.name(), ability.description())?;
        writeln!(f, "--------------------")?;

        writeln!(f, "Base Stats:")?;
        let base_stats = &data.base_stats;
        const LABEL_WIDTH: usize = 12;

        writeln!(f, "{:<LABEL_WIDTH$} : {}", "HP", base_stats.hp)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Attack", base_stats.attack)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Defense", base_stats.defense)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Sp. Atk", base_stats.sp_attack)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Sp. Def", base_stats.sp_defense)?;
        write!(f, "{:<LABEL_WIDTH$} : {}", "Speed", base_stats.speed)
    }
}
