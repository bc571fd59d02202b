//! Ability hooks consulted at fixed points of move resolution.
//!
//! Each one-shot hook records that it fired in the holder's
//! [`AbilityState`](crate::pokemon::AbilityState), which is cleared on battle entry.

use crate::battle::engine::change_stat_stage;
use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleEvent, EventBus};
use crate::config::BattleConfig;
use crate::pokemon::{Combatant, StatusCondition};
use schema::{AbilityId, MoveCategory, MoveDefinition, PokemonType, StatKey};

/// The defender ability that would swallow a move of `move_type`, if any.
pub fn intercepting_ability(defender: &Combatant, move_type: PokemonType) -> Option<AbilityId> {
    let ability = defender.ability();
    let intercepts = match ability {
        AbilityId::Levitate => move_type == PokemonType::Ground,
        AbilityId::WaterAbsorb => move_type == PokemonType::Water,
        AbilityId::VoltAbsorb => move_type == PokemonType::Electric,
        AbilityId::FlashFire => move_type == PokemonType::Fire,
        _ => false,
    };
    intercepts.then_some(ability)
}

/// Pre-hit hook. Applies the intercepting ability's side effect and reports it,
/// or returns None and leaves the defender untouched.
pub fn intercept_move(
    defender: &mut Combatant,
    move_data: &MoveDefinition,
    config: &BattleConfig,
    events: &mut EventBus,
) -> Option<AbilityId> {
    if !move_data.targets_opponent() {
        return None;
    }
    let ability = intercepting_ability(defender, move_data.move_type)?;

    match ability {
        AbilityId::WaterAbsorb | AbilityId::VoltAbsorb => {
            let heal = (defender.max_hp() as f64 * config.absorb_heal_fraction).floor() as u16;
            let amount = defender.heal(heal);
            events.push(BattleEvent::AbilityHealed {
                holder: defender.name.clone(),
                ability,
                amount,
            });
        }
        AbilityId::FlashFire => {
            defender.ability_state.flash_fire_boosted = true;
            events.push(BattleEvent::FlashFireActivated {
                holder: defender.name.clone(),
            });
        }
        _ => events.push(BattleEvent::AbilityImmunity {
            holder: defender.name.clone(),
            ability,
        }),
    }

    tracing::debug!(holder = %defender.id, ?ability, move_id = %move_data.id, "move intercepted");
    Some(ability)
}

/// Attack stat after the statused-attacker boost (physical moves only).
pub fn adjusted_attack_stat(
    attacker: &Combatant,
    category: MoveCategory,
    attack: u16,
    config: &BattleConfig,
) -> u16 {
    if attacker.ability() == AbilityId::Guts
        && attacker.has_status()
        && category == MoveCategory::Physical
    {
        return (attack as f64 * config.statused_attack_boost).floor() as u16;
    }
    attack
}

/// Burn halving does not apply to a holder that is boosted by its status instead.
pub fn ignores_burn_penalty(attacker: &Combatant) -> bool {
    attacker.ability() == AbilityId::Guts
}

/// Product of the attacker's pinch and Flash Fire boosts and the defender's resist.
pub fn damage_modifier(
    attacker: &Combatant,
    defender: &Combatant,
    move_data: &MoveDefinition,
    config: &BattleConfig,
) -> f64 {
    let mut modifier = 1.0;
    let attacker_ability = attacker.ability();

    if attacker_ability.pinch_type() == Some(move_data.move_type)
        && attacker.current_hp() as u32 * 3 <= attacker.max_hp() as u32
    {
        modifier *= config.pinch_boost;
    }
    if attacker_ability == AbilityId::FlashFire
        && attacker.ability_state.flash_fire_boosted
        && move_data.move_type == PokemonType::Fire
    {
        modifier *= config.flash_fire_boost;
    }
    if defender.ability() == AbilityId::ThickFat
        && matches!(move_data.move_type, PokemonType::Fire | PokemonType::Ice)
    {
        modifier *= config.resist_factor;
    }

    modifier
}

/// Survive-hit hook. Caps a knockout blow at current HP - 1 once per battle when
/// the holder is at full HP. Returns the possibly reduced damage.
pub fn survive_hit(defender: &mut Combatant, damage: u16, events: &mut EventBus) -> u16 {
    let endures = defender.ability() == AbilityId::Sturdy
        && !defender.ability_state.sturdy_used
        && defender.is_at_full_hp()
        && damage >= defender.current_hp();
    if !endures {
        return damage;
    }

    defender.ability_state.sturdy_used = true;
    events.push(BattleEvent::EnduredHit {
        pokemon: defender.name.clone(),
    });
    defender.current_hp().saturating_sub(1)
}

/// Contact hook, run after damage. Draws only when a proc is possible.
pub fn contact_reaction(
    attacker: &mut Combatant,
    defender: &Combatant,
    move_data: &MoveDefinition,
    config: &BattleConfig,
    rng: &mut dyn BattleRng,
    events: &mut EventBus,
) {
    let ability = defender.ability();
    if ability != AbilityId::Static
        || move_data.category != MoveCategory::Physical
        || attacker.has_status()
        || attacker.is_fainted()
    {
        return;
    }

    if rng.next_unit("contact ability") < config.contact_proc_chance {
        attacker.status = Some(StatusCondition::Paralysis);
        events.push(BattleEvent::ContactParalysis {
            attacker: attacker.name.clone(),
            holder: defender.name.clone(),
            ability,
        });
    }
}

/// Entry hook: the holder's aura against the opponent, at most once per battle.
pub fn apply_entry_ability(holder: &mut Combatant, target: &mut Combatant, events: &mut EventBus) {
    let ability = holder.ability();
    if ability != AbilityId::Intimidate || holder.ability_state.intimidate_applied {
        return;
    }

    holder.ability_state.intimidate_applied = true;
    events.push(BattleEvent::EntryAbilityActivated {
        holder: holder.name.clone(),
        target: target.name.clone(),
        ability,
    });
    change_stat_stage(target, StatKey::Atk, -1, events);
}
