//! Tunable battle constants, loadable from RON.
//!
//! The capture formula's exponent and modulus are not configurable; they live in
//! [`crate::battle::catch`].

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub paralysis_skip_chance: f64,
    /// Used when a move's effect declares a status without a chance.
    pub default_status_chance: f64,
    /// Sleep lasts 1..=max_sleep_turns turns.
    pub max_sleep_turns: u8,
    /// Fraction of max HP restored by Water Absorb / Volt Absorb.
    pub absorb_heal_fraction: f64,
    /// Static's paralysis chance on physical contact.
    pub contact_proc_chance: f64,
    /// Overgrow / Blaze / Torrent multiplier at low HP.
    pub pinch_boost: f64,
    pub flash_fire_boost: f64,
    /// Thick Fat multiplier against Fire and Ice.
    pub resist_factor: f64,
    /// Guts physical attack multiplier while statused.
    pub statused_attack_boost: f64,
    pub ai: AiConfig,
}

impl Default for BattleConfig {
    fn default() -> Self {
        BattleConfig {
            crit_chance: 1.0 / 16.0,
            crit_multiplier: 1.5,
            paralysis_skip_chance: 0.25,
            default_status_chance: 0.5,
            max_sleep_turns: 3,
            absorb_heal_fraction: 0.25,
            contact_proc_chance: 0.3,
            pinch_boost: 1.5,
            flash_fire_boost: 1.5,
            resist_factor: 0.5,
            statused_attack_boost: 1.5,
            ai: AiConfig::default(),
        }
    }
}

/// Weights for the move-choice heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub status_baseline: f64,
    /// Upper bound of the uniform jitter added to every score.
    pub jitter: f64,
    /// Moves scoring within this distance of the best are shortlisted.
    pub shortlist_margin: f64,
    pub stab_bonus: f64,
    pub super_effective_bonus: f64,
    pub resisted_penalty: f64,
    pub finishing_bonus: f64,
    /// Score for a damaging move the defender is immune to or absorbs.
    pub blocked_score: f64,
    pub status_bonus: f64,
    pub redundant_status_penalty: f64,
    pub secondary_status_bonus: f64,
    pub stage_bonus: f64,
    pub capped_stage_penalty: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            status_baseline: 12.0,
            jitter: 4.0,
            shortlist_margin: 8.0,
            stab_bonus: 10.0,
            super_effective_bonus: 25.0,
            resisted_penalty: 12.0,
            finishing_bonus: 120.0,
            blocked_score: -100.0,
            status_bonus: 40.0,
            redundant_status_penalty: 25.0,
            secondary_status_bonus: 10.0,
            stage_bonus: 14.0,
            capped_stage_penalty: 10.0,
        }
    }
}

impl BattleConfig {
    /// Load a RON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Parse and validate a RON config string
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: BattleConfig =
            ron::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [
            ("crit_chance", self.crit_chance),
            ("paralysis_skip_chance", self.paralysis_skip_chance),
            ("default_status_chance", self.default_status_chance),
            ("absorb_heal_fraction", self.absorb_heal_fraction),
            ("contact_proc_chance", self.contact_proc_chance),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "{} must lie in [0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.max_sleep_turns == 0 {
            return Err(ConfigError::Validation(
                "max_sleep_turns must be positive".to_string(),
            ));
        }
        if self.ai.jitter < 0.0 || self.ai.shortlist_margin < 0.0 {
            return Err(ConfigError::Validation(
                "ai jitter and shortlist margin must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
