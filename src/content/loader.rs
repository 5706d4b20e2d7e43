//! Loader for RON content files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{ArenaDef, CharacterDef, DataFile};
use super::registry::ContentRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let data: DataFile<T> = ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Load the roster and arena list into a ContentRegistry. A file that fails
/// to load is logged and replaced by the built-in set; a bad data directory
/// never stops a match from starting.
pub fn load_all_content(base_path: &Path) -> ContentRegistry {
    let mut registry = ContentRegistry::builtin();

    match load_data_file::<CharacterDef>(&base_path.join("characters.ron")) {
        Ok(characters) => {
            registry.characters.clear();
            for def in characters {
                registry.characters.insert(def.id.clone(), def);
            }
        }
        Err(e) => warn!("{}, using built-in roster", e),
    }

    match load_data_file::<ArenaDef>(&base_path.join("arenas.ron")) {
        Ok(arenas) => {
            registry.arenas.clear();
            for def in arenas {
                registry.arenas.insert(def.id.clone(), def);
            }
        }
        Err(e) => warn!("{}, using built-in arenas", e),
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_falls_back_to_builtins() {
        let registry = load_all_content(Path::new("does/not/exist"));
        assert!(!registry.characters.is_empty());
        assert!(!registry.arenas.is_empty());
        assert_eq!(registry.character("samurai").id, "samurai");
    }

    #[test]
    fn character_file_round_trips() {
        let file = DataFile {
            schema_version: 1,
            items: vec![CharacterDef::fallback()],
        };
        let text = ron::ser::to_string(&file).unwrap();
        let parsed: DataFile<CharacterDef> = ron_options().from_str(&text).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].frames.idle, 6);
    }
}
