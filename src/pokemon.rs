use crate::errors::MoveDataResult;
use crate::move_data::MoveDex;
use schema::{AbilityId, BaseStats, MoveId, PokemonType, SpeciesDefinition, StatKey, StatusType};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const MAX_LEVEL: u8 = 100;
pub const MAX_MOVES: usize = 4;
pub const STAGE_MIN: i8 = -6;
pub const STAGE_MAX: i8 = 6;

static NEXT_COMBATANT_ID: AtomicU64 = AtomicU64::new(1);

/// Moves handed out by type when a species has no level-up table to draw from.
fn suggested_moves_for_type(pokemon_type: PokemonType) -> &'static [MoveId] {
    use MoveId::*;

    match pokemon_type {
        PokemonType::Electric => &[ThunderShock, Spark, Thunderbolt, Thunder, QuickAttack, Growl],
        PokemonType::Grass => &[VineWhip, RazorLeaf, LeafBlade, SolarBeam, SleepPowder, Growl],
        PokemonType::Poison => &[PoisonSting, Sludge, SludgeBomb, TailWhip, Leer],
        PokemonType::Fire => &[Ember, FlameWheel, Flamethrower, FireBlast, Scratch, Growl],
        PokemonType::Water => &[WaterGun, BubbleBeam, Surf, HydroPump, TailWhip, Tackle],
        PokemonType::Normal => &[Tackle, Pound, QuickAttack, BodySlam, Slam, HyperFang, Growl],
        PokemonType::Bug => &[BugBite, XScissor, Tackle, Growl],
        PokemonType::Flying => &[WingAttack, AerialAce, QuickAttack, Growl],
        PokemonType::Ground => &[MudShot, Earthquake, Tackle, TailWhip],
        PokemonType::Rock => &[RockThrow, RockSlide, Tackle, Harden],
        PokemonType::Psychic => &[Confusion, Psybeam, Psychic, Agility, Growl],
        PokemonType::Ice => &[IceBeam, Blizzard, Tackle, Harden],
        PokemonType::Fighting => &[KarateChop, BrickBreak, Tackle, Leer],
        PokemonType::Ghost => &[ShadowBall, Tackle, Growl],
        PokemonType::Dragon => &[DragonBreath, DragonClaw, Scratch, Growl],
        PokemonType::Dark => &[Bite, Crunch, QuickAttack, Leer],
        PokemonType::Steel => &[MetalClaw, Tackle, Harden],
        PokemonType::Fairy => &[DisarmingVoice, Moonblast, TailWhip, Growl],
    }
}

/// Fills any remaining slots, in order, skipping moves already known.
const SAFE_DEFAULT_MOVES: [MoveId; 4] = [
    MoveId::Tackle,
    MoveId::Growl,
    MoveId::QuickAttack,
    MoveId::TailWhip,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCondition {
    Paralysis,
    Burn,
    Poison,
    Sleep(u8), // turns remaining
}

impl StatusCondition {
    pub fn from_type(status: StatusType, sleep_turns: u8) -> Self {
        match status {
            StatusType::Paralysis => StatusCondition::Paralysis,
            StatusType::Burn => StatusCondition::Burn,
            StatusType::Poison => StatusCondition::Poison,
            StatusType::Sleep => StatusCondition::Sleep(sleep_turns),
        }
    }

    pub fn status_type(&self) -> StatusType {
        match self {
            StatusCondition::Paralysis => StatusType::Paralysis,
            StatusCondition::Burn => StatusType::Burn,
            StatusCondition::Poison => StatusType::Poison,
            StatusCondition::Sleep(_) => StatusType::Sleep,
        }
    }

    /// Short label shown next to the HP bar.
    pub fn label(&self) -> &'static str {
        match self {
            StatusCondition::Paralysis => "PAR",
            StatusCondition::Burn => "BRN",
            StatusCondition::Poison => "PSN",
            StatusCondition::Sleep(_) => "SLP",
        }
    }
}

/// Stat block derived from base stats and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

impl Stats {
    /// hp = floor(2 * base * level / 100) + level + 10, others = floor(2 * base * level / 100) + 5
    pub fn compute(base: &BaseStats, level: u8) -> Self {
        let level = level as u32;
        let scaled = |base_stat: u8| (2 * base_stat as u32 * level) / 100;
        let other = |base_stat: u8| (scaled(base_stat) + 5) as u16;

        Stats {
            hp: (scaled(base.hp) + level + 10) as u16,
            attack: other(base.attack),
            defense: other(base.defense),
            sp_attack: other(base.sp_attack),
            sp_defense: other(base.sp_defense),
            speed: other(base.speed),
        }
    }

    pub fn get(&self, stat: StatKey) -> u16 {
        match stat {
            StatKey::Atk => self.attack,
            StatKey::Def => self.defense,
            StatKey::SpAtk => self.sp_attack,
            StatKey::SpDef => self.sp_defense,
            StatKey::Spe => self.speed,
        }
    }
}

/// Per-battle stat stages, each clamped to [-6, 6].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatStages {
    attack: i8,
    defense: i8,
    sp_attack: i8,
    sp_defense: i8,
    speed: i8,
}

impl StatStages {
    pub fn get(&self, stat: StatKey) -> i8 {
        match stat {
            StatKey::Atk => self.attack,
            StatKey::Def => self.defense,
            StatKey::SpAtk => self.sp_attack,
            StatKey::SpDef => self.sp_defense,
            StatKey::Spe => self.speed,
        }
    }

    fn slot_mut(&mut self, stat: StatKey) -> &mut i8 {
        match stat {
            StatKey::Atk => &mut self.attack,
            StatKey::Def => &mut self.defense,
            StatKey::SpAtk => &mut self.sp_attack,
            StatKey::SpDef => &mut self.sp_defense,
            StatKey::Spe => &mut self.speed,
        }
    }

    pub fn set(&mut self, stat: StatKey, stage: i8) {
        *self.slot_mut(stat) = stage.clamp(STAGE_MIN, STAGE_MAX);
    }

    /// Apply a delta, clamping the result. Returns the change that actually took place.
    pub fn modify(&mut self, stat: StatKey, delta: i8) -> i8 {
        let before = self.get(stat);
        let after = (before as i16 + delta as i16).clamp(STAGE_MIN as i16, STAGE_MAX as i16) as i8;
        *self.slot_mut(stat) = after;
        after - before
    }

    pub fn clear(&mut self) {
        *self = StatStages::default();
    }
}

/// One-shot ability flags, reset on battle entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityState {
    pub flash_fire_boosted: bool,
    pub sturdy_used: bool,
    pub intimidate_applied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub move_id: MoveId,
    pub uses: u8,
    pub max_uses: u8,
}

impl MoveSlot {
    /// Create a new slot with full uses
    pub fn new(move_id: MoveId, max_uses: u8) -> Self {
        MoveSlot {
            move_id,
            uses: max_uses,
            max_uses,
        }
    }

    pub fn has_uses(&self) -> bool {
        self.uses > 0
    }

    /// Spend one use. Returns false when the slot is already exhausted.
    pub fn use_move(&mut self) -> bool {
        if self.uses > 0 {
            self.uses -= 1;
            true
        } else {
            false
        }
    }

    pub fn restore_uses(&mut self, amount: u8) {
        self.uses = self.uses.saturating_add(amount).min(self.max_uses);
    }
}

/// One creature's complete mutable battle state.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    pub id: String,
    pub species: Arc<SpeciesDefinition>,
    pub name: String,
    pub level: u8,
    pub experience: u32,
    pub stats: Stats,
    pub(crate) current_hp: u16,
    pub status: Option<StatusCondition>,
    pub stat_stages: StatStages,
    pub ability_state: AbilityState,
    pub moves: Vec<MoveSlot>,
}

impl Combatant {
    /// Create a combatant at full HP with derived stats and move slots.
    pub fn new(
        species: Arc<SpeciesDefinition>,
        level: u8,
        move_overrides: Option<&[MoveId]>,
        move_dex: &MoveDex,
    ) -> MoveDataResult<Self> {
        let level = level.clamp(1, MAX_LEVEL);
        let stats = Stats::compute(&species.base_stats, level);

        let moves = Self::initial_moves(&species, level, move_overrides)
            .into_iter()
            .map(|move_id| {
                move_dex
                    .max_uses(move_id)
                    .map(|max_uses| MoveSlot::new(move_id, max_uses))
            })
            .collect::<MoveDataResult<Vec<_>>>()?;

        let id = format!(
            "{}-{}",
            species.key,
            NEXT_COMBATANT_ID.fetch_add(1, Ordering::Relaxed)
        );

        Ok(Combatant {
            id,
            name: species.name.clone(),
            species,
            level,
            experience: crate::progression::experience_for_level(level),
            stats,
            current_hp: stats.hp,
            status: None,
            stat_stages: StatStages::default(),
            ability_state: AbilityState::default(),
            moves,
        })
    }

    /// Pick the starting moves: explicit overrides, else the latest level-up unlocks,
    /// else the type suggestions; then pad with safe defaults up to four.
    fn initial_moves(
        species: &SpeciesDefinition,
        level: u8,
        move_overrides: Option<&[MoveId]>,
    ) -> Vec<MoveId> {
        fn push_unique(selected: &mut Vec<MoveId>, move_id: MoveId) {
            if selected.len() < MAX_MOVES && !selected.contains(&move_id) {
                selected.push(move_id);
            }
        }

        let mut selected: Vec<MoveId> = Vec::with_capacity(MAX_MOVES);

        match move_overrides {
            Some(overrides) if !overrides.is_empty() => {
                for &move_id in overrides {
                    push_unique(&mut selected, move_id);
                }
            }
            _ => {
                for move_id in Self::latest_level_up_moves(species, level) {
                    push_unique(&mut selected, move_id);
                }
                if selected.is_empty() {
                    for &pokemon_type in &species.types {
                        for &move_id in suggested_moves_for_type(pokemon_type) {
                            push_unique(&mut selected, move_id);
                        }
                    }
                }
            }
        }

        for move_id in SAFE_DEFAULT_MOVES {
            push_unique(&mut selected, move_id);
        }

        selected
    }

    /// The four most recently unlocked level-up moves at or below `level`.
    fn latest_level_up_moves(species: &SpeciesDefinition, level: u8) -> Vec<MoveId> {
        let mut unlocked: Vec<MoveId> = Vec::new();
        for entry in species.sorted_level_up_moves() {
            if entry.level <= level && !unlocked.contains(&entry.move_id) {
                unlocked.push(entry.move_id);
            }
        }

        let skip = unlocked.len().saturating_sub(MAX_MOVES);
        unlocked.split_off(skip)
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    /// Set current HP, clamped to [0, max].
    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.stats.hp);
    }

    pub fn set_hp_to_max(&mut self) {
        self.current_hp = self.stats.hp;
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn is_at_full_hp(&self) -> bool {
        self.current_hp == self.stats.hp
    }

    /// Apply damage, returning how much HP was actually lost.
    pub fn take_damage(&mut self, amount: u16) -> u16 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    /// Restore HP, returning how much was actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let restored = amount.min(self.stats.hp - self.current_hp);
        self.current_hp += restored;
        restored
    }

    pub fn types(&self) -> &[PokemonType] {
        &self.species.types
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.species.has_type(pokemon_type)
    }

    pub fn ability(&self) -> AbilityId {
        self.species.ability()
    }

    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }

    pub fn cure_status(&mut self) -> Option<StatusCondition> {
        self.status.take()
    }

    pub fn knows_move(&self, move_id: MoveId) -> bool {
        self.moves.iter().any(|slot| slot.move_id == move_id)
    }

    /// Recompute the stat block after a level or species change, carrying the
    /// max-HP delta over to current HP.
    pub(crate) fn recalculate_stats(&mut self) {
        let old_max = self.stats.hp;
        self.stats = Stats::compute(&self.species.base_stats, self.level);
        let hp_delta = self.stats.hp as i32 - old_max as i32;
        let new_hp = (self.current_hp as i32 + hp_delta).clamp(0, self.stats.hp as i32);
        self.current_hp = new_hp as u16;
    }

    /// Clear per-battle state: stages and ability flags. Status persists.
    pub fn reset_for_new_battle(&mut self) {
        self.stat_stages.clear();
        self.ability_state = AbilityState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::get_species_data;

    fn dex() -> &'static MoveDex {
        MoveDex::builtin().unwrap()
    }

    fn base(hp: u8) -> BaseStats {
        BaseStats {
            hp,
            attack: 49,
            defense: 49,
            sp_attack: 65,
            sp_defense: 65,
            speed: 45,
        }
    }

    #[test]
    fn test_compute_stats_formula() {
        let stats = Stats::compute(&base(45), 5);
        assert_eq!(stats.hp, 19);
        assert_eq!(stats.attack, 9); // floor(490/100) + 5
        assert_eq!(stats.sp_attack, 11); // floor(650/100) + 5
    }

    #[test]
    fn test_compute_stats_at_level_100() {
        let stats = Stats::compute(&base(45), 100);
        assert_eq!(stats.hp, 90 + 100 + 10);
        assert_eq!(stats.attack, 98 + 5);
    }

    #[test]
    fn test_stage_modify_reports_applied_delta() {
        let mut stages = StatStages::default();
        assert_eq!(stages.modify(StatKey::Atk, 2), 2);
        assert_eq!(stages.modify(StatKey::Atk, 5), 4);
        assert_eq!(stages.get(StatKey::Atk), 6);
        assert_eq!(stages.modify(StatKey::Atk, 1), 0);
        assert_eq!(stages.modify(StatKey::Def, -12), -6);
        assert_eq!(stages.get(StatKey::Def), -6);
    }

    #[test]
    fn test_new_combatant_uses_latest_level_up_moves() {
        let pikachu = get_species_data("pikachu").unwrap();
        let combatant = Combatant::new(pikachu, 13, None, dex()).unwrap();
        let moves: Vec<MoveId> = combatant.moves.iter().map(|slot| slot.move_id).collect();
        assert_eq!(
            moves,
            vec![
                MoveId::Growl,
                MoveId::TailWhip,
                MoveId::QuickAttack,
                MoveId::ThunderWave
            ]
        );
        assert!(combatant.moves.iter().all(|slot| slot.uses == slot.max_uses));
        assert_eq!(combatant.current_hp(), combatant.max_hp());
    }

    #[test]
    fn test_new_combatant_pads_with_safe_defaults() {
        let charmander = get_species_data("charmander").unwrap();
        let combatant = Combatant::new(charmander, 5, None, dex()).unwrap();
        let moves: Vec<MoveId> = combatant.moves.iter().map(|slot| slot.move_id).collect();
        assert_eq!(
            moves,
            vec![
                MoveId::Scratch,
                MoveId::Growl,
                MoveId::Tackle,
                MoveId::QuickAttack
            ]
        );
    }

    #[test]
    fn test_overrides_are_deduplicated_and_truncated() {
        let squirtle = get_species_data("squirtle").unwrap();
        let overrides = [
            MoveId::WaterGun,
            MoveId::WaterGun,
            MoveId::Bite,
            MoveId::Surf,
            MoveId::Tackle,
            MoveId::IceBeam,
        ];
        let combatant = Combatant::new(squirtle, 20, Some(&overrides), dex()).unwrap();
        let moves: Vec<MoveId> = combatant.moves.iter().map(|slot| slot.move_id).collect();
        assert_eq!(
            moves,
            vec![MoveId::WaterGun, MoveId::Bite, MoveId::Surf, MoveId::Tackle]
        );
    }

    #[test]
    fn test_species_without_learnset_uses_type_suggestions() {
        let zubat = get_species_data("zubat").unwrap();
        let combatant = Combatant::new(zubat, 10, None, dex()).unwrap();
        let moves: Vec<MoveId> = combatant.moves.iter().map(|slot| slot.move_id).collect();
        assert_eq!(
            moves,
            vec![
                MoveId::PoisonSting,
                MoveId::Sludge,
                MoveId::SludgeBomb,
                MoveId::TailWhip
            ]
        );
    }

    #[test]
    fn test_hp_mutations_stay_in_bounds() {
        let bulbasaur = get_species_data("bulbasaur").unwrap();
        let mut combatant = Combatant::new(bulbasaur, 10, None, dex()).unwrap();
        let max = combatant.max_hp();

        assert_eq!(combatant.take_damage(max + 50), max);
        assert!(combatant.is_fainted());
        assert_eq!(combatant.heal(5), 5);
        assert_eq!(combatant.heal(u16::MAX), max - 5);
        combatant.set_hp(max + 10);
        assert_eq!(combatant.current_hp(), max);
    }

    #[test]
    fn test_move_slot_bookkeeping() {
        let mut slot = MoveSlot::new(MoveId::Tackle, 2);
        assert!(slot.use_move());
        assert!(slot.use_move());
        assert!(!slot.use_move());
        assert!(!slot.has_uses());
        slot.restore_uses(10);
        assert_eq!(slot.uses, 2);
    }

    #[test]
    fn test_reset_for_new_battle_keeps_status() {
        let pikachu = get_species_data("pikachu").unwrap();
        let mut combatant = Combatant::new(pikachu, 10, None, dex()).unwrap();
        combatant.stat_stages.modify(StatKey::Spe, 2);
        combatant.ability_state.sturdy_used = true;
        combatant.status = Some(StatusCondition::Sleep(2));

        combatant.reset_for_new_battle();

        assert_eq!(combatant.stat_stages, StatStages::default());
        assert_eq!(combatant.ability_state, AbilityState::default());
        assert_eq!(combatant.status, Some(StatusCondition::Sleep(2)));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(StatusCondition::Paralysis.label(), "PAR");
        assert_eq!(StatusCondition::Sleep(1).label(), "SLP");
        assert_eq!(
            StatusCondition::from_type(StatusType::Sleep, 3),
            StatusCondition::Sleep(3)
        );
    }
}
