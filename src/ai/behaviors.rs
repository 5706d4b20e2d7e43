//! AI domain: state evaluation and per-state behaviors.

use rand::Rng;

use crate::ai::components::{AiAction, AiBrain, AiProfile, AiState};
use crate::ai::resources::AiTuning;
use crate::fighter::AttackKind;

use AttackKind::{Heavy, Light, Special};

/// Short openers thrown from Aggressive.
pub(crate) const OPENERS: &[&[AttackKind]] = &[
    &[Light, Light],
    &[Light, Heavy],
    &[Light, Light, Heavy],
    &[Heavy],
];

/// Heavy-damage strings for a caught opponent.
pub(crate) const PUNISHERS: &[&[AttackKind]] = &[
    &[Heavy, Special],
    &[Special, Heavy],
    &[Heavy, Heavy, Special],
    &[Light, Heavy, Special],
];

/// Fast 3-4 hit strings for closing out a losing opponent.
pub(crate) const RUSHES: &[&[AttackKind]] = &[
    &[Light, Light, Light],
    &[Light, Light, Heavy],
    &[Light, Heavy, Light, Special],
    &[Light, Light, Heavy, Special],
];

/// Read-only snapshot of the fight from the AI fighter's point of view,
/// assembled once per tick.
#[derive(Debug, Clone)]
pub(crate) struct Situation {
    pub distance: f32,
    pub my_health: i32,
    pub their_health: i32,
    /// Own health over the opponent's, denominator guarded.
    pub health_ratio: f32,
    pub target_attacking: bool,
    pub target_running: bool,
    pub target_hit: bool,
    pub target_jumping: bool,
    pub target_cooldown: u32,
    /// Own cooldown is cold and no swing is playing.
    pub can_attack: bool,
}

impl Situation {
    pub fn in_attack_range(&self, tuning: &AiTuning) -> bool {
        self.distance < tuning.attack_range
    }

    pub fn in_optimal_band(&self, tuning: &AiTuning) -> bool {
        self.distance >= tuning.optimal_min && self.distance <= tuning.optimal_max
    }

    /// Staggered, airborne, or committed to a fresh swing: open to a punish.
    pub fn target_vulnerable(&self, tuning: &AiTuning) -> bool {
        self.target_hit
            || self.target_jumping
            || (self.target_attacking && self.target_cooldown > tuning.exposure_cooldown)
    }

    /// Swinging within reach, or sprinting in on top of us.
    pub fn target_threatening(&self, tuning: &AiTuning) -> bool {
        (self.target_attacking && self.distance < tuning.threat_range)
            || (self.target_running && self.distance < tuning.attack_range * 1.5)
    }
}

fn aggression_score(brain: &AiBrain, sit: &Situation, tuning: &AiTuning) -> f32 {
    let mut score = brain.profile.aggression_base;
    if sit.health_ratio >= 1.0 {
        score += 0.15;
    }
    if sit.their_health < tuning.low_health {
        score += 0.1;
    }
    if sit.target_vulnerable(tuning) {
        score += 0.2;
    }
    if sit.in_optimal_band(tuning) {
        score += 0.1;
    }
    score + (brain.tally.momentum() as f32 * 0.05).clamp(-0.15, 0.15)
}

/// The state cascade, first match wins. Reactive reads (punish, retreat,
/// defend) are gated by the profile's perception odds so weaker tiers miss
/// openings a sharper one would take.
pub(crate) fn evaluate_state(
    brain: &AiBrain,
    sit: &Situation,
    tuning: &AiTuning,
    rng: &mut impl Rng,
) -> AiState {
    let profile = &brain.profile;

    if sit.target_vulnerable(tuning)
        && sit.in_attack_range(tuning)
        && rng.random::<f32>() < profile.prediction_skill
    {
        return AiState::Punish;
    }
    if sit.my_health < tuning.low_health
        && sit.health_ratio < tuning.unfavorable_ratio
        && rng.random::<f32>() < profile.defense_reaction
    {
        return AiState::Retreat;
    }
    if sit.their_health < tuning.low_health && sit.health_ratio > tuning.favorable_ratio {
        return AiState::Pressure;
    }
    if sit.target_threatening(tuning) && rng.random::<f32>() < profile.defense_reaction {
        return AiState::Defensive;
    }
    if sit.distance > tuning.safe_distance {
        return AiState::Pursuit;
    }
    if sit.in_attack_range(tuning) && rng.random::<f32>() < aggression_score(brain, sit, tuning) {
        return AiState::Aggressive;
    }
    AiState::Neutral
}

/// Imperfect play: sometimes the brain simply fails to switch plans this
/// evaluation and keeps doing what it was doing.
pub(crate) fn humanize(
    current: AiState,
    computed: AiState,
    profile: &AiProfile,
    rng: &mut impl Rng,
) -> AiState {
    if rng.random::<f32>() > profile.optimal_play_chance && rng.random::<f32>() < 0.5 {
        current
    } else {
        computed
    }
}

/// Pops the next queued combo hit, if any.
fn next_combo_step(brain: &mut AiBrain) -> Option<AttackKind> {
    let step = brain.combo.get(brain.combo_index).copied();
    if step.is_some() {
        brain.combo_index += 1;
    }
    step
}

/// Queues a random sequence from the table and returns its first hit.
fn start_combo(brain: &mut AiBrain, table: &[&[AttackKind]], rng: &mut impl Rng) -> AttackKind {
    let sequence = table[rng.random_range(0..table.len())];
    brain.combo = sequence.to_vec();
    brain.combo_index = 1;
    sequence[0]
}

/// One action decision for the current state. Attack-minded states wait out
/// their own cooldown with Hold rather than wasting queued combo hits on a
/// swing that cannot fire.
pub(crate) fn choose_action(
    brain: &mut AiBrain,
    sit: &Situation,
    tuning: &AiTuning,
    rng: &mut impl Rng,
) -> AiAction {
    match brain.state {
        AiState::Aggressive => {
            if sit.can_attack {
                if let Some(kind) = next_combo_step(brain) {
                    return AiAction::Attack(kind);
                }
            }
            if !sit.in_attack_range(tuning) {
                return AiAction::MoveForward;
            }
            if !sit.can_attack {
                return AiAction::Hold;
            }
            if rng.random::<f32>() < brain.profile.combo_chance {
                return AiAction::Attack(start_combo(brain, OPENERS, rng));
            }
            if rng.random::<f32>() < brain.profile.attack_accuracy {
                // Up close a jab connects before anything else; at the edge
                // of range reach for the heavier swings.
                let kind = if sit.distance < tuning.attack_range * 0.5 {
                    Light
                } else if rng.random::<f32>() < 0.5 {
                    Heavy
                } else {
                    Special
                };
                return AiAction::Attack(kind);
            }
            AiAction::MoveForward
        }
        AiState::Defensive => {
            if sit.target_attacking && sit.distance < tuning.threat_range {
                return if rng.random::<f32>() < tuning.evade_jump_chance {
                    AiAction::Jump
                } else {
                    AiAction::MoveBack
                };
            }
            if sit.in_attack_range(tuning)
                && sit.can_attack
                && rng.random::<f32>() < tuning.counter_chance * brain.profile.attack_accuracy
            {
                return AiAction::Attack(Light);
            }
            if sit.distance < tuning.safe_distance * 0.8 {
                AiAction::MoveBack
            } else if sit.distance > tuning.safe_distance * 1.2 {
                AiAction::MoveForward
            } else {
                AiAction::Hold
            }
        }
        AiState::Neutral => {
            if sit.distance > tuning.optimal_max {
                return AiAction::MoveForward;
            }
            if sit.distance < tuning.optimal_min {
                return AiAction::MoveBack;
            }
            if sit.in_attack_range(tuning)
                && sit.can_attack
                && rng.random::<f32>() < tuning.poke_chance
            {
                return AiAction::Attack(Light);
            }
            if rng.random::<f32>() < tuning.lateral_bias {
                if rng.random::<f32>() < 0.5 {
                    AiAction::MoveForward
                } else {
                    AiAction::MoveBack
                }
            } else {
                AiAction::Hold
            }
        }
        AiState::Pursuit => {
            if sit.distance > tuning.safe_distance * 2.0
                && rng.random::<f32>() < tuning.pursuit_jump_chance
            {
                AiAction::Jump
            } else {
                AiAction::MoveForward
            }
        }
        AiState::Retreat => {
            if sit.distance < tuning.attack_range && rng.random::<f32>() < tuning.evade_jump_chance
            {
                AiAction::Jump
            } else if sit.distance > tuning.safe_distance * 1.5
                && rng.random::<f32>() < tuning.relax_chance
            {
                AiAction::Hold
            } else {
                AiAction::MoveBack
            }
        }
        AiState::Punish => {
            if !sit.in_attack_range(tuning) {
                return AiAction::MoveForward;
            }
            if !sit.can_attack {
                return AiAction::Hold;
            }
            if let Some(kind) = next_combo_step(brain) {
                return AiAction::Attack(kind);
            }
            AiAction::Attack(start_combo(brain, PUNISHERS, rng))
        }
        AiState::Pressure => {
            if !sit.in_attack_range(tuning) {
                return AiAction::MoveForward;
            }
            if !sit.can_attack {
                return AiAction::Hold;
            }
            if let Some(kind) = next_combo_step(brain) {
                return AiAction::Attack(kind);
            }
            if rng.random::<f32>() < 0.4 + 0.6 * brain.profile.optimal_play_chance {
                AiAction::Attack(start_combo(brain, RUSHES, rng))
            } else {
                AiAction::Attack(Light)
            }
        }
    }
}

/// How long the chosen action persists before the next decision. Movement
/// holds for a randomized human-ish window; attacks recover for a beat;
/// waiting re-polls quickly.
pub(crate) fn action_window(action: AiAction, profile: &AiProfile, rng: &mut impl Rng) -> u32 {
    let reaction = profile.reaction_time.max(1);
    match action {
        AiAction::Attack(_) | AiAction::Jump => reaction,
        AiAction::MoveForward | AiAction::MoveBack => rng.random_range(reaction..=reaction * 2),
        AiAction::Hold => (reaction / 3).max(2),
    }
}
