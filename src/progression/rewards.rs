use crate::pokemon::Combatant;

/// Divisor applied to base experience x level when a combatant is defeated
const EXPERIENCE_YIELD_DIVISOR: u32 = 7;

/// Experience awarded for defeating `defeated`: floor(base_exp * level / 7).
pub fn experience_yield(defeated: &Combatant) -> u32 {
    defeated.species.base_exp as u32 * defeated.level as u32 / EXPERIENCE_YIELD_DIVISOR
}
