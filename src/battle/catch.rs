//! Capture simulation: catch value, shake probability and up to four shake trials.

use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleEvent, CatchResult, EventBus};
use crate::pokemon::{Combatant, StatusCondition};

const MAX_CATCH_VALUE: f64 = 255.0;
const SHAKE_EXPONENT: f64 = 0.1875;
const SHAKE_MODULUS: f64 = 65536.0;
const SHAKE_TRIALS: u8 = 4;

/// Status condition multiplier for the catch value
fn status_bonus(status: &Option<StatusCondition>) -> f64 {
    match status {
        Some(StatusCondition::Sleep(_)) => 2.0,
        Some(StatusCondition::Paralysis | StatusCondition::Burn | StatusCondition::Poison) => 1.5,
        None => 1.0,
    }
}

/// min(255, floor(255 * hp_factor * ball_rate * status_bonus)),
/// where hp_factor = (3 * max - 2 * current) / (3 * max).
pub fn catch_value(target: &Combatant, ball_rate: f64) -> u32 {
    let max_hp = target.max_hp() as f64;
    let current_hp = target.current_hp() as f64;
    let hp_factor = (3.0 * max_hp - 2.0 * current_hp) / (3.0 * max_hp);

    let value = (MAX_CATCH_VALUE * hp_factor * ball_rate.max(0.0) * status_bonus(&target.status)).floor();
    value.min(MAX_CATCH_VALUE) as u32
}

/// floor(65536 / (255 / catch_value)^0.1875); 0 when the catch value is 0.
pub fn shake_probability(catch_value: u32) -> u32 {
    if catch_value == 0 {
        return 0;
    }
    let ratio = MAX_CATCH_VALUE / catch_value as f64;
    (SHAKE_MODULUS / ratio.powf(SHAKE_EXPONENT)).floor() as u32
}

/// Throw a ball with the given catch-rate coefficient at `target`.
pub fn attempt_catch(target: &Combatant, ball_rate: f64, rng: &mut dyn BattleRng) -> CatchResult {
    let value = catch_value(target, ball_rate);
    let probability = shake_probability(value) as f64;

    let mut shakes = 0;
    while shakes < SHAKE_TRIALS {
        if rng.next_unit("catch shake") * SHAKE_MODULUS < probability {
            shakes += 1;
        } else {
            break;
        }
    }

    let caught = shakes == SHAKE_TRIALS;
    let mut events = EventBus::new();
    if caught {
        events.push(BattleEvent::Caught {
            pokemon: target.name.clone(),
        });
    } else {
        events.push(BattleEvent::CaptureShakes { shakes });
    }

    tracing::debug!(target = %target.id, catch_value = value, shakes, caught, "catch attempt");
    CatchResult {
        caught,
        shakes,
        events,
    }
}
