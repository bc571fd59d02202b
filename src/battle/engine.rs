//! Single-move resolution pipeline.
//!
//! Steps run in a fixed order and never revisit an earlier step: action gate,
//! accuracy, ability interception, then the status or damage branch. Random
//! draws follow the same order, and a skipped step draws nothing.

use crate::battle::abilities;
use crate::battle::calculators::{base_damage, damage_roll, final_damage};
use crate::battle::rng::BattleRng;
use crate::battle::state::{
    ActionCheck, BattleEvent, EndOfTurnResult, EventBus, MoveOutcome, MoveResult,
};
use crate::battle::stats::{effective_stat, offense_defense_stats};
use crate::config::BattleConfig;
use crate::pokemon::{Combatant, StatusCondition};
use schema::{
    EffectTarget, MoveCategory, MoveDefinition, PokemonType, StatKey, StatusType,
};

/// Apply a stage delta and narrate the change that actually happened.
pub fn change_stat_stage(target: &mut Combatant, stat: StatKey, delta: i8, events: &mut EventBus) -> i8 {
    let applied = target.stat_stages.modify(stat, delta);
    events.push(BattleEvent::StatStageChanged {
        target: target.name.clone(),
        stat,
        delta: applied,
    });
    applied
}

/// Give `target` a status unless it already has one. Sleep length is drawn
/// only when sleep actually lands.
pub fn inflict_status(
    target: &mut Combatant,
    status: StatusType,
    config: &BattleConfig,
    rng: &mut dyn BattleRng,
    events: &mut EventBus,
) -> bool {
    if target.has_status() {
        events.push(BattleEvent::AlreadyAffected {
            target: target.name.clone(),
        });
        return false;
    }

    let sleep_turns = match status {
        StatusType::Sleep => rng.next_below(config.max_sleep_turns as u32, "sleep duration") as u8 + 1,
        _ => 0,
    };
    target.status = Some(StatusCondition::from_type(status, sleep_turns));
    events.push(BattleEvent::StatusApplied {
        target: target.name.clone(),
        status,
    });
    true
}

/// Action gate run before every move.
///
/// A sleeper counts down one turn; it stays asleep while turns remain and wakes
/// at zero, losing the waking turn too. A paralyzed combatant loses its turn
/// on a draw below the skip chance.
pub fn attempt_action(
    pokemon: &mut Combatant,
    config: &BattleConfig,
    rng: &mut dyn BattleRng,
) -> ActionCheck {
    let mut events = EventBus::new();

    match pokemon.status {
        Some(StatusCondition::Sleep(turns)) => {
            let remaining = turns.saturating_sub(1);
            if remaining > 0 {
                pokemon.status = Some(StatusCondition::Sleep(remaining));
                events.push(BattleEvent::FastAsleep {
                    pokemon: pokemon.name.clone(),
                });
            } else {
                pokemon.status = None;
                events.push(BattleEvent::WokeUp {
                    pokemon: pokemon.name.clone(),
                });
            }
            ActionCheck {
                can_act: false,
                events,
            }
        }
        Some(StatusCondition::Paralysis) => {
            let can_act = rng.next_unit("paralysis") >= config.paralysis_skip_chance;
            if !can_act {
                events.push(BattleEvent::FullyParalyzed {
                    pokemon: pokemon.name.clone(),
                });
            }
            ActionCheck { can_act, events }
        }
        _ => ActionCheck {
            can_act: true,
            events,
        },
    }
}

/// Resolve one use of `move_data` by `attacker` against `defender`.
///
/// Move uses are not spent here; callers track them on the move slot.
pub fn resolve_move(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    move_data: &MoveDefinition,
    config: &BattleConfig,
    rng: &mut dyn BattleRng,
) -> MoveResult {
    let gate = attempt_action(attacker, config, rng);
    let mut events = gate.events;
    if !gate.can_act {
        tracing::debug!(attacker = %attacker.id, move_id = %move_data.id, "could not act");
        return MoveResult::new(MoveOutcome::CouldNotAct, 0, events);
    }

    events.push(BattleEvent::MoveUsed {
        pokemon: attacker.name.clone(),
        move_used: move_data.id,
    });

    let accuracy_roll = rng.next_unit("accuracy") * 100.0;
    if accuracy_roll > move_data.accuracy as f64 {
        events.push(BattleEvent::MoveMissed {
            attacker: attacker.name.clone(),
        });
        tracing::debug!(attacker = %attacker.id, move_id = %move_data.id, accuracy_roll, "missed");
        return MoveResult::new(MoveOutcome::Missed, 0, events);
    }

    if let Some(ability) = abilities::intercept_move(defender, move_data, config, &mut events) {
        return MoveResult::new(MoveOutcome::Blocked(ability), 0, events);
    }

    match move_data.category {
        MoveCategory::Status => resolve_status_move(attacker, defender, move_data, config, rng, events),
        MoveCategory::Physical | MoveCategory::Special => {
            resolve_damaging_move(attacker, defender, move_data, config, rng, events)
        }
    }
}

fn pick_target<'a>(
    target: EffectTarget,
    attacker: &'a mut Combatant,
    defender: &'a mut Combatant,
) -> &'a mut Combatant {
    match target {
        EffectTarget::User => attacker,
        EffectTarget::Target => defender,
    }
}

fn resolve_status_move(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    move_data: &MoveDefinition,
    config: &BattleConfig,
    rng: &mut dyn BattleRng,
    mut events: EventBus,
) -> MoveResult {
    let Some(effect) = &move_data.effect else {
        return MoveResult::new(MoveOutcome::Hit, 0, events);
    };

    for &(stat, delta) in &effect.stat_changes {
        let target = pick_target(effect.target, attacker, defender);
        change_stat_stage(target, stat, delta, &mut events);
    }

    if let Some(status) = effect.status {
        // Stat changes above stand even when the status part has no effect
        if PokemonType::is_immune(move_data.move_type, defender.types()) {
            events.push(BattleEvent::NoEffect {
                target: defender.name.clone(),
            });
            return MoveResult::new(MoveOutcome::NoEffect, 0, events);
        }

        let chance = effect.status_chance.unwrap_or(config.default_status_chance);
        if rng.next_unit("status chance") < chance {
            let target = pick_target(effect.target, attacker, defender);
            inflict_status(target, status, config, rng, &mut events);
        }
    }

    MoveResult::new(MoveOutcome::Hit, 0, events)
}

fn resolve_damaging_move(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    move_data: &MoveDefinition,
    config: &BattleConfig,
    rng: &mut dyn BattleRng,
    mut events: EventBus,
) -> MoveResult {
    let type_multiplier = PokemonType::multiplier(move_data.move_type, defender.types());
    if type_multiplier == 0.0 {
        events.push(BattleEvent::NoEffect {
            target: defender.name.clone(),
        });
        return MoveResult::new(MoveOutcome::NoEffect, 0, events);
    }

    let (attack_key, defense_key) = offense_defense_stats(move_data.category);
    let attack = abilities::adjusted_attack_stat(
        attacker,
        move_data.category,
        effective_stat(attacker, attack_key),
        config,
    );
    let defense = effective_stat(defender, defense_key);
    let power = move_data.power.unwrap_or(0);
    let base = base_damage(attacker.level, power, attack, defense);

    let stab = if attacker.has_type(move_data.move_type) { 1.5 } else { 1.0 };
    let critical = rng.next_unit("critical hit") < config.crit_chance;
    let crit = if critical { config.crit_multiplier } else { 1.0 };
    let roll = damage_roll(rng.next_unit("damage roll"));
    let burn = if matches!(attacker.status, Some(StatusCondition::Burn))
        && move_data.category == MoveCategory::Physical
        && !abilities::ignores_burn_penalty(attacker)
    {
        0.5
    } else {
        1.0
    };

    let modifier = stab
        * type_multiplier
        * crit
        * roll
        * abilities::damage_modifier(attacker, defender, move_data, config)
        * burn;
    let mut damage = final_damage(base, modifier);

    if critical {
        events.push(BattleEvent::CriticalHit);
    }
    events.push(BattleEvent::AttackTypeEffectiveness {
        multiplier: type_multiplier,
    });

    damage = abilities::survive_hit(defender, damage, &mut events);
    let dealt = defender.take_damage(damage);
    events.push(BattleEvent::DamageDealt {
        target: defender.name.clone(),
        damage: dealt,
        remaining_hp: defender.current_hp(),
    });

    tracing::debug!(
        attacker = %attacker.id,
        defender = %defender.id,
        move_id = %move_data.id,
        base,
        modifier,
        dealt,
        critical,
        "damage resolved"
    );

    if let Some(effect) = &move_data.effect {
        if let Some(status) = effect.status {
            // Drawn whatever the defender's state so later draws keep their order
            let chance = effect.status_chance.unwrap_or(config.default_status_chance);
            let procs = rng.next_unit("secondary status") < chance;
            if procs && !defender.is_fainted() && !defender.has_status() {
                inflict_status(defender, status, config, rng, &mut events);
            }
        }
    }

    abilities::contact_reaction(attacker, defender, move_data, config, rng, &mut events);

    MoveResult::new(MoveOutcome::Hit, dealt, events)
}

/// Burn costs max(1, max/16) and poison max(1, max/8) at end of turn.
pub fn apply_end_of_turn_status(pokemon: &mut Combatant) -> EndOfTurnResult {
    let (status, divisor) = match pokemon.status {
        Some(StatusCondition::Burn) => (StatusType::Burn, 16),
        Some(StatusCondition::Poison) => (StatusType::Poison, 8),
        _ => return EndOfTurnResult::none(),
    };
    if pokemon.is_fainted() {
        return EndOfTurnResult::none();
    }

    let damage = (pokemon.max_hp() / divisor).max(1);
    pokemon.take_damage(damage);
    EndOfTurnResult {
        damage,
        event: Some(BattleEvent::StatusDamage {
            target: pokemon.name.clone(),
            status,
            damage,
            remaining_hp: pokemon.current_hp(),
        }),
    }
}

/// Entry auras when `attacker` enters against `defender`: the defender's aura
/// resolves first, then the attacker's.
pub fn apply_battle_entry_abilities(attacker: &mut Combatant, defender: &mut Combatant) -> EventBus {
    let mut events = EventBus::new();
    abilities::apply_entry_ability(defender, attacker, &mut events);
    abilities::apply_entry_ability(attacker, defender, &mut events);
    events
}
