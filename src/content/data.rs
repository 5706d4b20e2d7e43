//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use serde::{Deserialize, Serialize};

/// Common wrapper for RON files with schema_version and items.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// Frame counts per animation row, in sheet order: idle, run, jump, the
/// three attacks, hurt, death.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct AnimationFramesDef {
    pub idle: u32,
    pub run: u32,
    pub jump: u32,
    pub attack_light: u32,
    pub attack_heavy: u32,
    pub attack_special: u32,
    pub hurt: u32,
    pub death: u32,
}

impl AnimationFramesDef {
    /// Row-indexed table matching `FighterAnimation::row()`.
    pub fn table(&self) -> [u32; 8] {
        [
            self.idle,
            self.run,
            self.jump,
            self.attack_light,
            self.attack_heavy,
            self.attack_special,
            self.hurt,
            self.death,
        ]
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    /// Sprite scale for the render layer; combat ignores it.
    pub scale: f32,
    /// Sprite draw offset relative to the body rectangle.
    pub offset: (f32, f32),
    pub frames: AnimationFramesDef,
}

impl CharacterDef {
    /// Substitute used whenever a requested character id is unknown or the
    /// data file failed to load. Combat semantics are identical for every
    /// character, so the fallback only changes which sheet gets drawn.
    pub fn fallback() -> Self {
        Self {
            id: "samurai".to_string(),
            name: "Samurai".to_string(),
            scale: 2.5,
            offset: (40.0, 30.0),
            frames: AnimationFramesDef {
                idle: 6,
                run: 8,
                jump: 12,
                attack_light: 6,
                attack_heavy: 4,
                attack_special: 3,
                hurt: 2,
                death: 3,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArenaDef {
    pub id: String,
    pub name: String,
    /// Background image path, opaque to the core; the render layer resolves
    /// it (and falls back to a flat fill if it cannot).
    pub background: String,
}

impl ArenaDef {
    pub fn fallback() -> Self {
        Self {
            id: "keputih".to_string(),
            name: "Keputih".to_string(),
            background: "assets/arena/Keputih.png".to_string(),
        }
    }
}
