//! Fighter domain: tuning resources.

use bevy::prelude::*;

/// Movement and combat tuning, fixed for the round. Distances are pixels,
/// velocities pixels per tick, durations in fixed ticks (60 per second).
#[derive(Resource, Debug, Clone)]
pub struct FightTuning {
    pub move_speed: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    /// Opponent-center distance below which facing stays put, so adjacent
    /// fighters do not flicker left/right.
    pub facing_deadzone: f32,
    pub attack_cooldown: u32,
    pub attack_damage: i32,
    /// Attack hitbox width as a multiple of the attacker's body width.
    pub hitbox_reach: f32,
    /// Fixed ticks per animation frame (3 ticks = 50 ms at 60 Hz).
    pub animation_frame_ticks: u32,
}

impl Default for FightTuning {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            gravity: 2.0,
            jump_velocity: -30.0,
            facing_deadzone: 20.0,
            attack_cooldown: 20,
            attack_damage: 10,
            hitbox_reach: 1.5,
            animation_frame_ticks: 3,
        }
    }
}
