use crate::battle::rng::BattleRng;
use crate::battle::stats::effective_speed;
use crate::pokemon::Combatant;
use schema::MoveDefinition;
use std::cmp::Ordering;

/// Which side moves first this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOrder {
    FirstActsFirst,
    SecondActsFirst,
}

impl ActionOrder {
    /// Side indices (0 = first, 1 = second) in acting order.
    pub fn indices(self) -> [usize; 2] {
        match self {
            ActionOrder::FirstActsFirst => [0, 1],
            ActionOrder::SecondActsFirst => [1, 0],
        }
    }
}

/// Higher move priority acts first, then higher effective speed. A full tie
/// is settled by one coin-flip draw.
pub fn turn_order(
    first: &Combatant,
    first_move: &MoveDefinition,
    second: &Combatant,
    second_move: &MoveDefinition,
    rng: &mut dyn BattleRng,
) -> ActionOrder {
    let ordering = first_move
        .priority
        .cmp(&second_move.priority)
        .then_with(|| effective_speed(first).cmp(&effective_speed(second)));

    match ordering {
        Ordering::Greater => ActionOrder::FirstActsFirst,
        Ordering::Less => ActionOrder::SecondActsFirst,
        Ordering::Equal => {
            if rng.next_unit("speed tie") < 0.5 {
                ActionOrder::FirstActsFirst
            } else {
                ActionOrder::SecondActsFirst
            }
        }
    }
}
