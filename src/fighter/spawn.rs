//! Fighter domain: round setup.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai::AiController;
use crate::content::ContentRegistry;
use crate::core::{FightRng, FighterHandles, GameMode, MatchConfig, RoundFlow};
use crate::fighter::components::{
    AnimationController, Body, ControlScheme, Facing, Fighter, FighterIntent, FighterState, Health,
};

const SPAWN_Y: f32 = 450.0;
const PLAYER_ONE_X: f32 = 200.0;
const PLAYER_TWO_X: f32 = 1000.0;
const MAX_HEALTH: i32 = 100;

/// Spawns both fighters in their corners and arms the intro countdown.
/// Player two gets either the second keyboard scheme or an AI controller,
/// depending on the configured mode.
pub(crate) fn spawn_fighters(
    mut commands: Commands,
    config: Res<MatchConfig>,
    registry: Res<ContentRegistry>,
    mut flow: ResMut<RoundFlow>,
) {
    let p1_def = registry.character(&config.player_one);
    let p2_def = registry.character(&config.player_two);
    let arena = registry.arena(&config.arena);

    let player_one = commands
        .spawn((
            Fighter,
            Body::new(PLAYER_ONE_X, SPAWN_Y),
            Health::new(MAX_HEALTH),
            Facing::Right,
            FighterState::default(),
            FighterIntent::default(),
            AnimationController::new(p1_def.frames.table()),
            ControlScheme::player_one(),
        ))
        .id();

    let mut player_two = commands.spawn((
        Fighter,
        Body::new(PLAYER_TWO_X, SPAWN_Y),
        Health::new(MAX_HEALTH),
        Facing::Left,
        FighterState::default(),
        FighterIntent::default(),
        AnimationController::new(p2_def.frames.table()),
    ));
    match config.mode {
        GameMode::TwoPlayers => {
            player_two.insert(ControlScheme::player_two());
        }
        GameMode::VersusAi => {
            player_two.insert(AiController::new(player_one, config.difficulty));
        }
    }
    let player_two = player_two.id();

    commands.insert_resource(FighterHandles {
        player_one,
        player_two,
    });
    commands.insert_resource(FightRng(ChaCha8Rng::seed_from_u64(config.seed)));
    *flow = RoundFlow::countdown();

    info!(
        "{} vs {} ({:?}) at {}, seed {}",
        p1_def.name, p2_def.name, config.mode, arena.name, config.seed
    );
}

/// Tears the round down when the fight screen exits. The next round spawns
/// fresh fighters and a fresh rng from whatever config the menu hands over.
pub(crate) fn despawn_fighters(mut commands: Commands, fighters: Query<Entity, With<Fighter>>) {
    for entity in fighters.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<FighterHandles>();
    commands.remove_resource::<FightRng>();
}
