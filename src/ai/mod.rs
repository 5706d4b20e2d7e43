//! AI domain: decision engine plugin wiring and public exports.

mod behaviors;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{AiAction, AiBrain, AiController, AiProfile, AiState, CombatTally, Difficulty};
pub use resources::AiTuning;

use bevy::prelude::*;

use crate::ai::systems::update_ai;
use crate::core::{FightSet, GameState};

pub struct AiPlugin;

impl Plugin for AiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AiTuning>().add_systems(
            FixedUpdate,
            update_ai
                .in_set(FightSet::Intent)
                .run_if(in_state(GameState::Fight)),
        );
    }
}
