//! Move choice for computer-controlled combatants.

use crate::battle::abilities::intercepting_ability;
use crate::battle::calculators::expected_damage;
use crate::battle::rng::BattleRng;
use crate::battle::stats::{effective_stat, offense_defense_stats};
use crate::config::{AiConfig, BattleConfig};
use crate::move_data::MoveDex;
use crate::pokemon::{Combatant, STAGE_MAX, STAGE_MIN};
use ordered_float::OrderedFloat;
use schema::{EffectTarget, MoveCategory, MoveDefinition, PokemonType};
use std::cmp::Reverse;

/// A trait for any system that can pick a move for a combatant.
pub trait Behavior {
    /// Index of the chosen move slot, or None when every slot is out of uses.
    fn choose_move(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        move_dex: &MoveDex,
        rng: &mut dyn BattleRng,
    ) -> Option<usize>;
}

/// Scores each usable move, adds jitter, and picks uniformly among the moves
/// close to the best score.
#[derive(Debug, Clone)]
pub struct ScoringAI {
    config: AiConfig,
    /// Chance assumed for a status effect that declares none.
    default_status_chance: f64,
}

impl Default for ScoringAI {
    fn default() -> Self {
        Self::from_battle_config(&BattleConfig::default())
    }
}

impl ScoringAI {
    pub fn new(config: AiConfig, default_status_chance: f64) -> Self {
        Self {
            config,
            default_status_chance,
        }
    }

    /// Scores with the same default status chance that move resolution uses.
    pub fn from_battle_config(config: &BattleConfig) -> Self {
        Self::new(config.ai.clone(), config.default_status_chance)
    }

    /// Deterministic score of one move before jitter.
    pub fn score_move(&self, attacker: &Combatant, defender: &Combatant, move_data: &MoveDefinition) -> f64 {
        // Moves the defender's ability would intercept
        if move_data.targets_opponent() && intercepting_ability(defender, move_data.move_type).is_some() {
            return self.config.blocked_score;
        }

        match move_data.category {
            MoveCategory::Status => self.score_status_move(attacker, defender, move_data),
            MoveCategory::Physical | MoveCategory::Special => {
                let mut score = self.score_damaging_move(attacker, defender, move_data);
                if let Some(effect) = &move_data.effect {
                    if effect.status.is_some() && !defender.has_status() {
                        let chance = effect.status_chance.unwrap_or(self.default_status_chance);
                        score += self.config.secondary_status_bonus * chance;
                    }
                }
                score
            }
        }
    }

    fn score_damaging_move(&self, attacker: &Combatant, defender: &Combatant, move_data: &MoveDefinition) -> f64 {
        let power = move_data.power.unwrap_or(0);
        if power == 0 {
            return 0.0;
        }

        let type_multiplier = PokemonType::multiplier(move_data.move_type, defender.types());
        if type_multiplier == 0.0 {
            return self.config.blocked_score;
        }

        let (attack_key, defense_key) = offense_defense_stats(move_data.category);
        let is_stab = attacker.has_type(move_data.move_type);
        let stab = if is_stab { 1.5 } else { 1.0 };
        let expected = expected_damage(
            attacker.level,
            power,
            effective_stat(attacker, attack_key),
            effective_stat(defender, defense_key),
            stab,
            type_multiplier,
        );

        let mut score = expected * move_data.accuracy as f64 / 100.0;
        if is_stab {
            score += self.config.stab_bonus;
        }
        if type_multiplier > 1.0 {
            score += self.config.super_effective_bonus;
        }
        if type_multiplier < 1.0 {
            score -= self.config.resisted_penalty;
        }
        if defender.current_hp() as f64 <= expected {
            score += self.config.finishing_bonus;
        }
        score
    }

    fn score_status_move(&self, attacker: &Combatant, defender: &Combatant, move_data: &MoveDefinition) -> f64 {
        let mut score = self.config.status_baseline;
        let Some(effect) = &move_data.effect else {
            return score;
        };
        let target = match effect.target {
            EffectTarget::User => attacker,
            EffectTarget::Target => defender,
        };

        if effect.status.is_some() {
            if target.has_status() {
                score -= self.config.redundant_status_penalty;
            } else {
                score += self.config.status_bonus * effect.status_chance.unwrap_or(self.default_status_chance);
            }
        }

        for &(stat, delta) in &effect.stat_changes {
            let stage = target.stat_stages.get(stat);
            let capped = (delta > 0 && stage >= STAGE_MAX) || (delta < 0 && stage <= STAGE_MIN);
            if capped {
                score -= self.config.capped_stage_penalty;
            } else {
                score += self.config.stage_bonus * delta.unsigned_abs() as f64;
            }
        }

        score * move_data.accuracy as f64 / 100.0
    }
}

impl Behavior for ScoringAI {
    fn choose_move(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        move_dex: &MoveDex,
        rng: &mut dyn BattleRng,
    ) -> Option<usize> {
        let mut ranked: Vec<(usize, f64)> = attacker
            .moves
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.has_uses())
            .filter_map(|(index, slot)| match move_dex.get(slot.move_id) {
                Ok(move_data) => Some((index, move_data)),
                Err(e) => {
                    tracing::warn!(move_id = %slot.move_id, error = %e, "skipping move without data");
                    None
                }
            })
            .map(|(index, move_data)| {
                let score = self.score_move(attacker, defender, move_data)
                    + rng.next_unit("ai jitter") * self.config.jitter;
                (index, score)
            })
            .collect();

        ranked.sort_by_key(|&(_, score)| Reverse(OrderedFloat(score)));
        let best = ranked.first()?.1;
        let shortlist: Vec<usize> = ranked
            .iter()
            .filter(|(_, score)| *score >= best - self.config.shortlist_margin)
            .map(|(index, _)| *index)
            .collect();

        let pick = rng.next_below(shortlist.len() as u32, "ai shortlist") as usize;
        let chosen = shortlist.get(pick).copied();
        tracing::debug!(
            attacker = %attacker.id,
            ?ranked,
            ?chosen,
            "ai chose move"
        );
        chosen
    }
}
