//! Core domain: match flow plugin wiring and public exports.

mod events;
mod resources;
mod state;
mod systems;

pub use events::RoundOver;
pub use resources::{
    ArenaBounds, FightRng, FighterHandles, GameMode, INTRO_FRAMES, MatchConfig, RoundFlow,
    RoundPhase, Side,
};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{finish_boot, setup_camera, tick_round_flow};

/// Fixed-tick stages of one simulated frame. Intent comes first (keyboard or
/// AI), then the physics step, then attack resolution, then animation, then
/// the round flow check. The order is load-bearing: collision clamping must
/// see this frame's intent, and the winner check must see this frame's
/// damage.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FightSet {
    Intent,
    Physics,
    Combat,
    Animation,
    Flow,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<MatchConfig>()
            .init_resource::<ArenaBounds>()
            .init_resource::<RoundFlow>()
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_message::<RoundOver>()
            .configure_sets(
                FixedUpdate,
                (
                    FightSet::Intent,
                    FightSet::Physics,
                    FightSet::Combat,
                    FightSet::Animation,
                    FightSet::Flow,
                )
                    .chain(),
            )
            .add_systems(Startup, (setup_camera, finish_boot))
            .add_systems(
                FixedUpdate,
                tick_round_flow
                    .in_set(FightSet::Flow)
                    .run_if(in_state(GameState::Fight)),
            );
    }
}
