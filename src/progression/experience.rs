use crate::pokemon::{Combatant, MAX_LEVEL};

/// Total experience needed to reach `level`: floor(4 * level^3 / 5).
pub fn experience_for_level(level: u8) -> u32 {
    let level = level as u32;
    (4 * level * level * level) / 5
}

/// What a single experience grant did to a combatant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelUpReport {
    pub levels_gained: u8,
    /// Every level reached, in ascending order.
    pub levels_reached: Vec<u8>,
}

impl LevelUpReport {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

impl Combatant {
    /// Add experience and apply every level-up it pays for.
    ///
    /// Each level recomputes the stat block and carries the max-HP delta over to
    /// current HP, so a damaged combatant stays damaged by the same amount.
    pub fn grant_experience(&mut self, amount: u32) -> LevelUpReport {
        self.experience = self.experience.saturating_add(amount);

        let mut report = LevelUpReport::default();
        while self.level < MAX_LEVEL && self.experience >= experience_for_level(self.level + 1) {
            self.level += 1;
            self.recalculate_stats();
            report.levels_gained += 1;
            report.levels_reached.push(self.level);
        }

        if report.leveled_up() {
            tracing::debug!(
                combatant = %self.id,
                gained = report.levels_gained,
                level = self.level,
                "combatant leveled up"
            );
        }
        report
    }

    /// Experience still missing before the next level, or None at the cap.
    pub fn experience_to_next_level(&self) -> Option<u32> {
        if self.level >= MAX_LEVEL {
            return None;
        }
        Some(experience_for_level(self.level + 1).saturating_sub(self.experience))
    }
}
