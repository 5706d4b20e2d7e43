//! Core domain: round flow systems and setup.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::events::RoundOver;
use crate::core::resources::{FighterHandles, RoundFlow, RoundPhase, Side};
use crate::core::state::GameState;
use crate::fighter::{Fighter, Health};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// There is no menu in this build; content loads during Boot and the match
/// starts immediately.
pub(crate) fn finish_boot(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Fight);
}

/// Advances the intro countdown and decides the round once a fighter dies.
/// Runs after combat and animation so `alive` reflects this frame's damage.
pub(crate) fn tick_round_flow(
    mut flow: ResMut<RoundFlow>,
    handles: Option<Res<FighterHandles>>,
    fighters: Query<&Health, With<Fighter>>,
    mut round_over: MessageWriter<RoundOver>,
) {
    let Some(handles) = handles else {
        return;
    };

    match flow.phase {
        RoundPhase::Countdown { frames_left } => {
            if frames_left <= 1 {
                flow.phase = RoundPhase::Active;
                info!("Fight!");
            } else {
                flow.phase = RoundPhase::Countdown {
                    frames_left: frames_left - 1,
                };
            }
        }
        RoundPhase::Active => {
            let p1_alive = fighters
                .get(handles.player_one)
                .map(|h| h.alive)
                .unwrap_or(true);
            let p2_alive = fighters
                .get(handles.player_two)
                .map(|h| h.alive)
                .unwrap_or(true);

            let winner = if !p1_alive {
                Some(Side::PlayerTwo)
            } else if !p2_alive {
                Some(Side::PlayerOne)
            } else {
                None
            };

            if let Some(winner) = winner {
                flow.phase = RoundPhase::Over { winner };
                info!("Round over, winner: {:?}", winner);
                round_over.write(RoundOver { winner });
            }
        }
        RoundPhase::Over { .. } => {}
    }
}
