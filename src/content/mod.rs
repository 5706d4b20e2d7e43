//! Content domain: data file loading and registry wiring.

mod data;
mod loader;
mod registry;

pub use data::{AnimationFramesDef, ArenaDef, CharacterDef};
pub use registry::ContentRegistry;

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::load_all_content;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_content_registry);
    }
}

fn setup_content_registry(mut commands: Commands) {
    let registry = load_all_content(Path::new("assets/data"));
    info!(
        "Content loaded: {} characters, {} arenas",
        registry.characters.len(),
        registry.arenas.len()
    );
    commands.insert_resource(registry);
}
