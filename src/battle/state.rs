use schema::{AbilityId, MoveId, StatKey, StatusType};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Action gate
    FastAsleep {
        pokemon: String,
    },
    WokeUp {
        pokemon: String,
    },
    FullyParalyzed {
        pokemon: String,
    },

    // Move flow
    MoveUsed {
        pokemon: String,
        move_used: MoveId,
    },
    MoveMissed {
        attacker: String,
    },
    CriticalHit,
    AttackTypeEffectiveness {
        multiplier: f64,
    },
    NoEffect {
        target: String,
    },
    DamageDealt {
        target: String,
        damage: u16,
        remaining_hp: u16,
    },

    // Stats and status
    StatStageChanged {
        target: String,
        stat: StatKey,
        delta: i8,
    },
    StatusApplied {
        target: String,
        status: StatusType,
    },
    AlreadyAffected {
        target: String,
    },
    StatusDamage {
        target: String,
        status: StatusType,
        damage: u16,
        remaining_hp: u16,
    },

    // Abilities
    AbilityImmunity {
        holder: String,
        ability: AbilityId,
    },
    AbilityHealed {
        holder: String,
        ability: AbilityId,
        amount: u16,
    },
    FlashFireActivated {
        holder: String,
    },
    EnduredHit {
        pokemon: String,
    },
    ContactParalysis {
        attacker: String,
        holder: String,
        ability: AbilityId,
    },
    EntryAbilityActivated {
        holder: String,
        target: String,
        ability: AbilityId,
    },

    // Capture
    CaptureShakes {
        shakes: u8,
    },
    Caught {
        pokemon: String,
    },
}

impl BattleEvent {
    /// The battle-log line for this event, or None for silent bookkeeping events.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::FastAsleep { pokemon } => Some(format!("{} is fast asleep!", pokemon)),
            BattleEvent::WokeUp { pokemon } => Some(format!("{} woke up!", pokemon)),
            BattleEvent::FullyParalyzed { pokemon } => {
                Some(format!("{} is paralyzed! It can't move!", pokemon))
            }

            BattleEvent::MoveUsed { .. } => None, // The caller announces the move
            BattleEvent::MoveMissed { attacker } => Some(format!("{}'s attack missed!", attacker)),
            BattleEvent::CriticalHit => Some("A critical hit!".to_string()),
            BattleEvent::AttackTypeEffectiveness { multiplier } => match *multiplier {
                m if m > 1.0 => Some("It's super effective!".to_string()),
                m if m > 0.0 && m < 1.0 => Some("It's not very effective...".to_string()),
                _ => None,
            },
            BattleEvent::NoEffect { target } => Some(format!("It doesn't affect {}...", target)),
            BattleEvent::DamageDealt { .. } => None,

            BattleEvent::StatStageChanged { target, stat, delta } => {
                let verb = match delta {
                    0 => "won't go further!",
                    1 => "rose!",
                    2 => "rose sharply!",
                    -1 => "fell!",
                    -2 => "harshly fell!",
                    _ => "changed!",
                };
                Some(format!("{}'s {} {}", target, stat, verb))
            }
            BattleEvent::StatusApplied { target, status } => {
                let text = match status {
                    StatusType::Paralysis => "is paralyzed!",
                    StatusType::Burn => "was burned!",
                    StatusType::Poison => "was poisoned!",
                    StatusType::Sleep => "fell asleep!",
                };
                Some(format!("{} {}", target, text))
            }
            BattleEvent::AlreadyAffected { target } => {
                Some(format!("{} is already affected!", target))
            }
            BattleEvent::StatusDamage { target, status, .. } => match status {
                StatusType::Burn => Some(format!("{} is hurt by its burn!", target)),
                StatusType::Poison => Some(format!("{} is hurt by poison!", target)),
                StatusType::Paralysis | StatusType::Sleep => None,
            },

            BattleEvent::AbilityImmunity { holder, ability } => {
                Some(format!("{}'s {} made the attack miss!", holder, ability))
            }
            BattleEvent::AbilityHealed { holder, ability, .. } => {
                Some(format!("{}'s {} restored its HP!", holder, ability))
            }
            BattleEvent::FlashFireActivated { holder } => Some(format!(
                "{}'s Flash Fire raised the power of its Fire-type moves!",
                holder
            )),
            BattleEvent::EnduredHit { pokemon } => Some(format!("{} endured the hit!", pokemon)),
            BattleEvent::ContactParalysis {
                attacker,
                holder,
                ability,
            } => Some(format!(
                "{}'s {} paralyzed {}!",
                holder, ability, attacker
            )),
            BattleEvent::EntryAbilityActivated {
                holder,
                target,
                ability,
            } => Some(format!("{}'s {} unsettled {}!", holder, ability, target)),

            BattleEvent::CaptureShakes { shakes } => match shakes {
                0 => Some("Oh no! The Pokemon broke free!".to_string()),
                1 => Some("Aww! It appeared to be caught!".to_string()),
                2 => Some("Aargh! Almost had it!".to_string()),
                3 => Some("Shoot! It was so close, too!".to_string()),
                _ => None,
            },
            BattleEvent::Caught { pokemon } => Some(format!("Gotcha! {} was caught!", pokemon)),
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format().unwrap_or_default())
    }
}

/// Ordered collector for the events of one operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Rendered battle-log lines, silent events skipped.
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }

    pub fn extend(&mut self, other: EventBus) {
        self.events.extend(other.events);
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl fmt::Display for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in self.messages() {
            writeln!(f, "{}", message)?;
        }
        Ok(())
    }
}

/// How a single move resolution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Asleep, waking up or fully paralyzed.
    CouldNotAct,
    Missed,
    /// Intercepted by the defender's ability before any effect applied.
    Blocked(AbilityId),
    /// The type chart gave 0x; no damage or status was applied.
    NoEffect,
    Hit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    pub hit: bool,
    pub could_act: bool,
    pub outcome: MoveOutcome,
    /// HP the defender actually lost.
    pub damage: u16,
    pub events: EventBus,
}

impl MoveResult {
    pub(crate) fn new(outcome: MoveOutcome, damage: u16, events: EventBus) -> Self {
        let (hit, could_act) = match outcome {
            MoveOutcome::CouldNotAct => (false, false),
            MoveOutcome::Missed | MoveOutcome::Blocked(_) => (false, true),
            MoveOutcome::NoEffect | MoveOutcome::Hit => (true, true),
        };
        Self {
            hit,
            could_act,
            outcome,
            damage,
            events,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.events.messages()
    }
}

/// Result of the action gate run before a move.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCheck {
    pub can_act: bool,
    pub events: EventBus,
}

/// Burn or poison damage taken at end of turn.
#[derive(Debug, Clone, PartialEq)]
pub struct EndOfTurnResult {
    pub damage: u16,
    pub event: Option<BattleEvent>,
}

impl EndOfTurnResult {
    pub fn none() -> Self {
        Self {
            damage: 0,
            event: None,
        }
    }

    /// The battle-log line, or an empty string when nothing happened.
    pub fn message(&self) -> String {
        self.event
            .as_ref()
            .and_then(BattleEvent::format)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchResult {
    pub caught: bool,
    pub shakes: u8,
    pub events: EventBus,
}

impl CatchResult {
    pub fn messages(&self) -> Vec<String> {
        self.events.messages()
    }
}
