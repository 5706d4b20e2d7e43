//! Fighter domain: components and combat-related state types.

use bevy::prelude::*;

/// Marks an entity as a fighter in the current round.
#[derive(Component, Debug)]
pub struct Fighter;

/// The fighter's rectangle in arena space (x right, y down, `pos` is the
/// top-left corner). One box serves both collision and the render offset.
#[derive(Component, Debug, Clone)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
}

impl Body {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(80.0, 180.0),
            vel_y: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.pos, self.pos + self.size)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x * 0.5
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Health for one fighter. Damage is applied raw and may leave a transient
/// negative value; reads go through `clamped()`, which surfaces 0. `alive`
/// flips false exactly once per round, when the animation machine selects
/// the death animation.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
    pub alive: bool,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            alive: true,
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Health as shown to the UI, never negative.
    pub fn clamped(&self) -> i32 {
        self.current.clamp(0, self.max)
    }

    /// Pin health at zero and mark the fighter dead.
    pub fn kill(&mut self) {
        self.current = 0;
        self.alive = false;
    }

    /// Own health relative to the opponent's. A depleted denominator counts
    /// as 1 so the ratio stays finite.
    pub fn ratio_against(&self, other: &Health) -> f32 {
        self.clamped() as f32 / other.clamped().max(1) as f32
    }
}

/// Horizontal facing. Mutated only by the auto-facing rule in the physics
/// step, never directly by input.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// The three attack buttons, in increasing weight. Light comes out fast,
/// Special hits the slowest animation rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    Light,
    Heavy,
    Special,
}

/// Per-frame combat flags. `attacking` and `hit` are cleared by the
/// animation machine when their animations finish; `attack_cooldown` counts
/// down in the physics step.
#[derive(Component, Debug, Default)]
pub struct FighterState {
    pub running: bool,
    pub jumping: bool,
    pub attacking: bool,
    pub hit: bool,
    pub attack_kind: Option<AttackKind>,
    pub attack_cooldown: u32,
}

/// One frame's worth of input: a horizontal request, a jump request, and at
/// most one attack. Written by the keyboard sampler or the AI engine,
/// consumed by physics and combat the same tick.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct FighterIntent {
    pub axis_x: f32,
    pub jump: bool,
    pub attack: Option<AttackKind>,
}

/// Keyboard bindings for a human-controlled fighter.
#[derive(Component, Debug, Clone)]
pub struct ControlScheme {
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub light: KeyCode,
    pub heavy: KeyCode,
    pub special: KeyCode,
}

impl ControlScheme {
    pub fn player_one() -> Self {
        Self {
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::KeyW,
            light: KeyCode::KeyR,
            heavy: KeyCode::KeyT,
            special: KeyCode::KeyY,
        }
    }

    pub fn player_two() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            jump: KeyCode::ArrowUp,
            light: KeyCode::Numpad1,
            heavy: KeyCode::Numpad2,
            special: KeyCode::Numpad3,
        }
    }
}

/// Animation selection, matching the sprite sheet row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FighterAnimation {
    Idle,
    Run,
    Jump,
    Attack(AttackKind),
    Hurt,
    Death,
}

impl FighterAnimation {
    /// Sheet row for this animation: idle, run, jump, attack 1-3, hurt,
    /// death.
    pub fn row(self) -> usize {
        match self {
            FighterAnimation::Idle => 0,
            FighterAnimation::Run => 1,
            FighterAnimation::Jump => 2,
            FighterAnimation::Attack(AttackKind::Light) => 3,
            FighterAnimation::Attack(AttackKind::Heavy) => 4,
            FighterAnimation::Attack(AttackKind::Special) => 5,
            FighterAnimation::Hurt => 6,
            FighterAnimation::Death => 7,
        }
    }
}

/// Playback cursor for the current animation. The render layer reads
/// `animation.row()` and `frame` to pick a sprite; the core only cares about
/// when an animation finishes.
#[derive(Component, Debug)]
pub struct AnimationController {
    pub animation: FighterAnimation,
    pub frame: u32,
    pub clock: u32,
    /// Frame count per sheet row, from the character definition.
    pub frames: [u32; 8],
}

impl AnimationController {
    pub fn new(frames: [u32; 8]) -> Self {
        Self {
            animation: FighterAnimation::Idle,
            frame: 0,
            clock: 0,
            frames,
        }
    }

    /// Switch animations, restarting playback only on an actual change.
    pub fn set(&mut self, animation: FighterAnimation) {
        if self.animation != animation {
            self.animation = animation;
            self.frame = 0;
            self.clock = 0;
        }
    }

    pub fn frame_count(&self) -> u32 {
        self.frames[self.animation.row()].max(1)
    }
}
