//! AI domain: tuning resources.

use bevy::prelude::*;

/// Thresholds and odds shared by every difficulty tier. These are defaults
/// to tune against, not invariants; distances are pixels, durations fixed
/// ticks.
#[derive(Resource, Debug, Clone)]
pub struct AiTuning {
    /// Maximum distance at which an attack can connect.
    pub attack_range: f32,
    /// Preferred distance when not committed to a fight.
    pub safe_distance: f32,
    /// Distance inside which an attacking opponent counts as a threat.
    pub threat_range: f32,
    /// Ticks between forced state re-evaluations.
    pub state_duration: u32,
    /// Health below this counts as critical for both sides.
    pub low_health: i32,
    /// Health change since the last evaluation that forces an early one.
    pub health_delta: i32,
    /// Own/opponent health ratio above which the AI presses its advantage.
    pub favorable_ratio: f32,
    /// Ratio below which the AI considers itself losing.
    pub unfavorable_ratio: f32,
    /// Remaining attack cooldown above which a mid-swing opponent is still
    /// committed and open to a counter.
    pub exposure_cooldown: u32,
    /// Spacing band held in Neutral.
    pub optimal_min: f32,
    pub optimal_max: f32,
    /// Chance of a probing attack from Neutral.
    pub poke_chance: f32,
    /// Base chance of a counter-attack from Defensive, scaled by accuracy.
    pub counter_chance: f32,
    /// Chance an evasion is a jump rather than a step back.
    pub evade_jump_chance: f32,
    /// Chance of a gap-closing jump while pursuing from far away.
    pub pursuit_jump_chance: f32,
    /// Chance to stop backpedaling once comfortably out of reach.
    pub relax_chance: f32,
    /// Preference for drifting sideways over standing still in Neutral.
    pub lateral_bias: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            attack_range: 120.0,
            safe_distance: 200.0,
            threat_range: 200.0,
            state_duration: 30,
            low_health: 25,
            health_delta: 5,
            favorable_ratio: 1.2,
            unfavorable_ratio: 0.8,
            exposure_cooldown: 12,
            optimal_min: 80.0,
            optimal_max: 160.0,
            poke_chance: 0.08,
            counter_chance: 0.3,
            evade_jump_chance: 0.3,
            pursuit_jump_chance: 0.05,
            relax_chance: 0.3,
            lateral_bias: 0.7,
        }
    }
}
