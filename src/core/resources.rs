//! Core domain: shared resources for match configuration and round flow.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::ai::Difficulty;

/// Frames of "3.. 2.. 1.. FIGHT!" before fighters unfreeze (3 seconds at 60 Hz).
pub const INTRO_FRAMES: u32 = 180;

/// Which corner a fighter started in. Player two may be human or AI-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    TwoPlayers,
    #[default]
    VersusAi,
}

/// Everything the menu layer hands over when a match starts: who fights,
/// where, and how player two is driven.
#[derive(Resource, Debug, Clone)]
pub struct MatchConfig {
    pub player_one: String,
    pub player_two: String,
    pub arena: String,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_one: "samurai".to_string(),
            player_two: "shinobi".to_string(),
            arena: "keputih".to_string(),
            mode: GameMode::VersusAi,
            difficulty: Difficulty::Medium,
            seed: rand::rng().random(),
        }
    }
}

/// Playable area in arena space: x grows right, y grows down, origin at the
/// top-left corner of the screen. The floor sits `floor_margin` above the
/// bottom edge.
#[derive(Resource, Debug, Clone)]
pub struct ArenaBounds {
    pub width: f32,
    pub height: f32,
    pub floor_margin: f32,
}

impl ArenaBounds {
    /// y coordinate fighters stand on.
    pub fn floor_y(&self) -> f32 {
        self.height - self.floor_margin
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 800.0,
            floor_margin: 110.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    /// Intro countdown; fighters are frozen in place.
    Countdown { frames_left: u32 },
    Active,
    /// A fighter died. Simulation freezes, death animations settle.
    Over { winner: Side },
}

/// Single round lifecycle. Once `Over`, physics, combat and AI stop
/// advancing; the animation machine keeps running so the loser can fall.
#[derive(Resource, Debug)]
pub struct RoundFlow {
    pub phase: RoundPhase,
}

impl RoundFlow {
    pub fn countdown() -> Self {
        Self {
            phase: RoundPhase::Countdown {
                frames_left: INTRO_FRAMES,
            },
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }
}

impl Default for RoundFlow {
    fn default() -> Self {
        Self::countdown()
    }
}

/// The two fighter entities for this round, in slot order. Everything that
/// needs "the opponent" looks it up through here instead of holding a second
/// reference.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FighterHandles {
    pub player_one: Entity,
    pub player_two: Entity,
}

impl FighterHandles {
    /// (me, opponent) pairs in update order: player one resolves first.
    pub fn pairs(&self) -> [(Entity, Entity); 2] {
        [
            (self.player_one, self.player_two),
            (self.player_two, self.player_one),
        ]
    }

    pub fn side_of(&self, entity: Entity) -> Option<Side> {
        if entity == self.player_one {
            Some(Side::PlayerOne)
        } else if entity == self.player_two {
            Some(Side::PlayerTwo)
        } else {
            None
        }
    }
}

/// Seeded source for every probabilistic decision in the round. Tests and
/// replays construct it from a fixed seed to pin outcomes down.
#[derive(Resource, Debug)]
pub struct FightRng(pub ChaCha8Rng);
