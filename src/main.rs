mod ai;
mod content;
mod core;
mod fighter;

use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Duskbrawl".to_string(),
                resolution: (1400.0, 800.0).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            fighter::FighterPlugin,
            ai::AiPlugin,
        ))
        .run();
}
