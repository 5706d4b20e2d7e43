//! AI domain: the decision-making state carried by an AI fighter.

use bevy::prelude::*;

use crate::fighter::AttackKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Fixed behavior parameters for one difficulty tier. Probabilities are in
/// [0, 1], `reaction_time` is in fixed ticks. Read-only once constructed;
/// every tier scales monotonically from cautious and slow to sharp and fast.
#[derive(Debug, Clone)]
pub struct AiProfile {
    /// Ticks between action decisions.
    pub reaction_time: u32,
    /// Chance an in-range attack opportunity is actually taken.
    pub attack_accuracy: f32,
    /// Chance of reacting to danger with Retreat/Defensive.
    pub defense_reaction: f32,
    /// Chance to open a combo instead of a single attack.
    pub combo_chance: f32,
    /// Chance to spot and punish a vulnerable opponent.
    pub prediction_skill: f32,
    /// Baseline of the weighted aggression check.
    pub aggression_base: f32,
    /// Chance to adopt the computed state instead of lagging in the old one.
    pub optimal_play_chance: f32,
}

impl AiProfile {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                reaction_time: 18,
                attack_accuracy: 0.55,
                defense_reaction: 0.35,
                combo_chance: 0.2,
                prediction_skill: 0.3,
                aggression_base: 0.3,
                optimal_play_chance: 0.55,
            },
            Difficulty::Medium => Self {
                reaction_time: 12,
                attack_accuracy: 0.72,
                defense_reaction: 0.55,
                combo_chance: 0.4,
                prediction_skill: 0.55,
                aggression_base: 0.45,
                optimal_play_chance: 0.75,
            },
            Difficulty::Hard => Self {
                reaction_time: 7,
                attack_accuracy: 0.9,
                defense_reaction: 0.78,
                combo_chance: 0.62,
                prediction_skill: 0.8,
                aggression_base: 0.6,
                optimal_play_chance: 0.92,
            },
        }
    }
}

/// The finite states of the fight brain. A round opens far apart, so
/// everything starts in Pursuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    Aggressive,
    Defensive,
    Neutral,
    #[default]
    Pursuit,
    Retreat,
    Punish,
    Pressure,
}

/// What the brain currently wants to do. Movement actions persist for a
/// randomized window; attacks are consumed the frame they are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiAction {
    MoveForward,
    MoveBack,
    Jump,
    Attack(AttackKind),
    #[default]
    Hold,
}

/// Running count of the hit exchange plus the health values seen at the
/// last state evaluation. Only used to detect momentum and big swings that
/// warrant re-evaluating early.
#[derive(Debug, Clone)]
pub struct CombatTally {
    pub hits_landed: u32,
    pub hits_received: u32,
    pub last_own_health: i32,
    pub last_target_health: i32,
}

impl CombatTally {
    pub fn new(max_health: i32) -> Self {
        Self {
            hits_landed: 0,
            hits_received: 0,
            last_own_health: max_health,
            last_target_health: max_health,
        }
    }

    /// Positive when winning the exchange, negative when losing it.
    pub fn momentum(&self) -> i32 {
        self.hits_landed as i32 - self.hits_received as i32
    }

    pub fn snapshot(&mut self, own_health: i32, target_health: i32) {
        self.last_own_health = own_health;
        self.last_target_health = target_health;
    }
}

/// The full decision state, separate from the ECS binding so tests can run
/// the brain against hand-built situations.
#[derive(Debug, Clone)]
pub struct AiBrain {
    pub state: AiState,
    pub previous_state: AiState,
    pub state_timer: u32,
    pub decision_cooldown: u32,
    pub action: AiAction,
    pub combo: Vec<AttackKind>,
    pub combo_index: usize,
    pub profile: AiProfile,
    pub tally: CombatTally,
    /// Level-triggered observations from last tick, kept so the
    /// re-evaluation triggers fire on edges rather than every frame.
    pub seen_threatening: bool,
    pub seen_vulnerable: bool,
}

impl AiBrain {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            state: AiState::Pursuit,
            previous_state: AiState::Pursuit,
            state_timer: 0,
            decision_cooldown: 0,
            action: AiAction::Hold,
            combo: Vec::new(),
            combo_index: 0,
            profile: AiProfile::for_difficulty(difficulty),
            tally: CombatTally::new(100),
            seen_threatening: false,
            seen_vulnerable: false,
        }
    }

    /// Commit a state change: remember where we came from and drop any
    /// combo that was queued for the old plan.
    pub fn transition(&mut self, next: AiState) {
        self.previous_state = self.state;
        self.state = next;
        self.combo.clear();
        self.combo_index = 0;
    }
}

/// Binds a brain to the fighter it controls and the opponent it watches.
/// The target handle is a lookup key, never an owning reference; if it ever
/// fails to resolve the fighter simply idles that frame.
#[derive(Component, Debug)]
pub struct AiController {
    pub target: Entity,
    pub brain: AiBrain,
}

impl AiController {
    pub fn new(target: Entity, difficulty: Difficulty) -> Self {
        Self {
            target,
            brain: AiBrain::new(difficulty),
        }
    }
}
