use crate::pokemon::{Combatant, StatusCondition};
use schema::{MoveCategory, StatKey};

/// (2 + s) / 2 for s >= 0, 2 / (2 - s) for s < 0; 4x at +6, 0.25x at -6.
pub fn stage_multiplier(stage: i8) -> f64 {
    let stage = stage as f64;
    if stage >= 0.0 {
        (2.0 + stage) / 2.0
    } else {
        2.0 / (2.0 - stage)
    }
}

/// Stat after stage adjustment, floored. Speed is halved again while paralyzed.
pub fn effective_stat(pokemon: &Combatant, stat: StatKey) -> u16 {
    let stage = pokemon.stat_stages.get(stat);
    let stage_adjusted = (pokemon.stats.get(stat) as f64 * stage_multiplier(stage)).floor() as u16;

    if stat == StatKey::Spe && matches!(pokemon.status, Some(StatusCondition::Paralysis)) {
        return stage_adjusted / 2;
    }
    stage_adjusted
}

pub fn effective_speed(pokemon: &Combatant) -> u16 {
    effective_stat(pokemon, StatKey::Spe)
}

/// Attack/defense stat pair a damaging move of `category` reads.
pub fn offense_defense_stats(category: MoveCategory) -> (StatKey, StatKey) {
    match category {
        MoveCategory::Special => (StatKey::SpAtk, StatKey::SpDef),
        MoveCategory::Physical | MoveCategory::Status => (StatKey::Atk, StatKey::Def),
    }
}
