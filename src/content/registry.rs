//! ContentRegistry resource providing id lookups for loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{AnimationFramesDef, ArenaDef, CharacterDef};

/// All loaded game content, keyed by id. Lookups never fail: an unknown id
/// degrades to the fallback definition so a typo in a config cannot abort a
/// round.
#[derive(Resource, Debug, Default)]
pub struct ContentRegistry {
    pub characters: HashMap<String, CharacterDef>,
    pub arenas: HashMap<String, ArenaDef>,
}

impl ContentRegistry {
    pub fn character(&self, id: &str) -> CharacterDef {
        match self.characters.get(id) {
            Some(def) => def.clone(),
            None => {
                warn!("unknown character id '{}', substituting fallback", id);
                CharacterDef::fallback()
            }
        }
    }

    pub fn arena(&self, id: &str) -> ArenaDef {
        match self.arenas.get(id) {
            Some(def) => def.clone(),
            None => {
                warn!("unknown arena id '{}', substituting fallback", id);
                ArenaDef::fallback()
            }
        }
    }

    /// The shipped roster and arena list, used when no data files are
    /// present. Frame counts match the shipped sprite sheets.
    pub fn builtin() -> Self {
        let characters = [
            CharacterDef::fallback(),
            CharacterDef {
                id: "shinobi".to_string(),
                name: "Shinobi".to_string(),
                scale: 2.5,
                offset: (40.0, 30.0),
                frames: AnimationFramesDef {
                    idle: 6,
                    run: 8,
                    jump: 12,
                    attack_light: 5,
                    attack_heavy: 3,
                    attack_special: 4,
                    hurt: 2,
                    death: 4,
                },
            },
            CharacterDef {
                id: "fighter".to_string(),
                name: "Fighter".to_string(),
                scale: 2.5,
                offset: (40.0, 30.0),
                frames: AnimationFramesDef {
                    idle: 6,
                    run: 8,
                    jump: 10,
                    attack_light: 4,
                    attack_heavy: 3,
                    attack_special: 4,
                    hurt: 3,
                    death: 3,
                },
            },
            CharacterDef {
                id: "converted_vampire".to_string(),
                name: "Converted Vampire".to_string(),
                scale: 2.0,
                offset: (60.0, 50.0),
                frames: AnimationFramesDef {
                    idle: 5,
                    run: 8,
                    jump: 7,
                    attack_light: 5,
                    attack_heavy: 3,
                    attack_special: 4,
                    hurt: 1,
                    death: 8,
                },
            },
            CharacterDef {
                id: "countess_vampire".to_string(),
                name: "Countess Vampire".to_string(),
                scale: 2.0,
                offset: (60.0, 50.0),
                frames: AnimationFramesDef {
                    idle: 5,
                    run: 6,
                    jump: 6,
                    attack_light: 6,
                    attack_heavy: 3,
                    attack_special: 1,
                    hurt: 2,
                    death: 8,
                },
            },
            CharacterDef {
                id: "vampire_girl".to_string(),
                name: "Vampire Girl".to_string(),
                scale: 2.0,
                offset: (60.0, 50.0),
                frames: AnimationFramesDef {
                    idle: 5,
                    run: 6,
                    jump: 6,
                    attack_light: 5,
                    attack_heavy: 4,
                    attack_special: 2,
                    hurt: 2,
                    death: 10,
                },
            },
        ];

        let arenas = [
            ArenaDef::fallback(),
            ArenaDef {
                id: "san_antonio".to_string(),
                name: "San Antonio".to_string(),
                background: "assets/arena/SanAntonio.png".to_string(),
            },
            ArenaDef {
                id: "taman_apsari".to_string(),
                name: "Taman Apsari".to_string(),
                background: "assets/arena/TamanApsari.png".to_string(),
            },
            ArenaDef {
                id: "tunjungan".to_string(),
                name: "Tunjungan".to_string(),
                background: "assets/arena/Tunjungan.png".to_string(),
            },
        ];

        Self {
            characters: characters
                .into_iter()
                .map(|def| (def.id.clone(), def))
                .collect(),
            arenas: arenas.into_iter().map(|def| (def.id.clone(), def)).collect(),
        }
    }
}
