//! Fighter domain: fighter plugin wiring and public exports.

mod components;
mod events;
mod resources;
mod spawn;
mod systems;


pub use components::{
    AnimationController, AttackKind, Body, ControlScheme, Facing, Fighter, FighterAnimation,
    FighterIntent, FighterState, Health,
};
pub use events::DamageDealt;
pub use resources::FightTuning;

use bevy::prelude::*;

use crate::core::{FightSet, GameState};
use crate::fighter::spawn::{despawn_fighters, spawn_fighters};
use crate::fighter::systems::{
    animation::update_animation, combat::resolve_attacks, input::sample_human_input,
    physics::step_physics,
};

pub struct FighterPlugin;

impl Plugin for FighterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FightTuning>()
            .add_message::<DamageDealt>()
            .add_systems(OnEnter(GameState::Fight), spawn_fighters)
            .add_systems(OnExit(GameState::Fight), despawn_fighters)
            .add_systems(
                FixedUpdate,
                (
                    sample_human_input
                        .in_set(FightSet::Intent)
                        .run_if(in_state(GameState::Fight)),
                    step_physics
                        .in_set(FightSet::Physics)
                        .run_if(in_state(GameState::Fight)),
                    resolve_attacks
                        .in_set(FightSet::Combat)
                        .run_if(in_state(GameState::Fight)),
                    update_animation
                        .in_set(FightSet::Animation)
                        .run_if(in_state(GameState::Fight)),
                ),
            );
    }
}
