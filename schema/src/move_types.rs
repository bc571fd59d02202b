use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoStaticStr};

/// Every move the engine ships data for. Keys in `data/moves.ron` are the snake_case names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MoveId {
    Tackle,
    QuickAttack,
    Scratch,
    Pound,
    BodySlam,
    Slam,
    HyperFang,
    Ember,
    FlameWheel,
    Flamethrower,
    FireBlast,
    WaterGun,
    BubbleBeam,
    Surf,
    HydroPump,
    VineWhip,
    RazorLeaf,
    LeafBlade,
    SolarBeam,
    ThunderShock,
    Spark,
    Thunderbolt,
    Thunder,
    PoisonSting,
    Sludge,
    SludgeBomb,
    BugBite,
    XScissor,
    WingAttack,
    AerialAce,
    MudShot,
    Earthquake,
    RockThrow,
    RockSlide,
    Confusion,
    Psybeam,
    Psychic,
    IceBeam,
    Blizzard,
    KarateChop,
    BrickBreak,
    ShadowBall,
    DragonBreath,
    DragonClaw,
    Bite,
    Crunch,
    MetalClaw,
    DisarmingVoice,
    Moonblast,
    Growl,
    TailWhip,
    Leer,
    Harden,
    Agility,
    ThunderWave,
    SleepPowder,
}

impl MoveId {
    /// The data key used for this move, e.g. `quick_attack`.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "Physical"),
            MoveCategory::Special => write!(f, "Special"),
            MoveCategory::Status => write!(f, "Status"),
        }
    }
}

/// Stats that take part in stage mechanics. HP never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum StatKey {
    Atk,
    Def,
    SpAtk,
    SpDef,
    Spe,
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatKey::Atk => write!(f, "Attack"),
            StatKey::Def => write!(f, "Defense"),
            StatKey::SpAtk => write!(f, "Sp. Atk"),
            StatKey::SpDef => write!(f, "Sp. Def"),
            StatKey::Spe => write!(f, "Speed"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectTarget {
    User,
    #[default]
    Target,
}

impl fmt::Display for EffectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectTarget::User => write!(f, "User"),
            EffectTarget::Target => write!(f, "Target"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusType {
    Paralysis,
    Burn,
    Poison,
    Sleep,
}

/// Optional secondary effect attached to a move.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveEffect {
    #[serde(default)]
    pub status: Option<StatusType>,
    /// Probability in [0, 1]. `None` means the engine's default chance.
    #[serde(default)]
    pub status_chance: Option<f64>,
    /// Applied in declaration order.
    #[serde(default)]
    pub stat_changes: Vec<(StatKey, i8)>,
    #[serde(default)]
    pub target: EffectTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDefinition {
    pub id: MoveId,
    pub name: String,
    pub move_type: PokemonType,
    pub category: MoveCategory,
    #[serde(default)]
    pub power: Option<u8>, // None for status moves
    pub accuracy: u8,
    pub max_uses: u8,
    #[serde(default)]
    pub priority: i8,
    #[serde(default)]
    pub effect: Option<MoveEffect>,
}

impl MoveDefinition {
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status
    }

    /// Whether the move's primary target is the opponent rather than the user.
    pub fn targets_opponent(&self) -> bool {
        match (&self.category, &self.effect) {
            (MoveCategory::Status, Some(effect)) => effect.target == EffectTarget::Target,
            _ => true,
        }
    }
}
