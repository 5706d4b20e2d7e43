//! Fighter domain: the per-tick physics and collision step.

use bevy::prelude::*;

use crate::core::{ArenaBounds, FighterHandles, RoundFlow};
use crate::fighter::components::{Body, Facing, Fighter, FighterIntent, FighterState, Health};
use crate::fighter::resources::FightTuning;

/// Advances one fighter by one tick. The sub-steps run in a fixed order:
/// gravity, screen clamp, floor clamp, opponent separation, auto-facing,
/// cooldown, commit. Reordering them would let a fighter be shoved through
/// the opponent or off-screen, so the order is part of the contract.
pub(crate) fn step_fighter(
    body: &mut Body,
    state: &mut FighterState,
    facing: &mut Facing,
    intent: &FighterIntent,
    alive: bool,
    opponent: Rect,
    bounds: &ArenaBounds,
    tuning: &FightTuning,
) {
    let mut dx = 0.0;
    state.running = false;

    // Movement and jump requests are only honored while free to act; gravity
    // and cooldown bookkeeping below run regardless.
    if !state.attacking && alive {
        if intent.axis_x > 0.1 {
            dx = tuning.move_speed;
        } else if intent.axis_x < -0.1 {
            dx = -tuning.move_speed;
        }
        state.running = dx != 0.0;

        if intent.jump && !state.jumping {
            body.vel_y = tuning.jump_velocity;
            state.jumping = true;
        }
    }

    // 1. Gravity.
    body.vel_y += tuning.gravity;
    let mut dy = body.vel_y;

    // 2. Keep the box inside the screen horizontally.
    if body.pos.x + dx < 0.0 {
        dx = -body.pos.x;
    }
    if body.pos.x + body.size.x + dx > bounds.width {
        dx = bounds.width - (body.pos.x + body.size.x);
    }

    // 3. Land on the floor.
    let floor = bounds.floor_y();
    if body.bottom() + dy > floor {
        body.vel_y = 0.0;
        state.jumping = false;
        dy = floor - body.bottom();
    }

    // 4. Stop at the opponent: the horizontally translated box may touch but
    //    never overlap. Edge contact counts as separated.
    let moved = Rect::from_corners(
        body.pos + Vec2::new(dx, 0.0),
        body.pos + body.size + Vec2::new(dx, 0.0),
    );
    if !moved.intersect(opponent).is_empty() {
        if dx > 0.0 {
            dx = opponent.min.x - (body.pos.x + body.size.x);
        } else if dx < 0.0 {
            dx = opponent.max.x - body.pos.x;
        }
    }

    // 5. Auto-facing, with a deadzone so adjacent fighters don't flicker.
    let opponent_center = (opponent.min.x + opponent.max.x) * 0.5;
    if (opponent_center - body.center_x()).abs() > tuning.facing_deadzone {
        *facing = if opponent_center < body.center_x() {
            Facing::Left
        } else {
            Facing::Right
        };
    }

    // 6. Cooldown ticks down even mid-air or mid-attack.
    state.attack_cooldown = state.attack_cooldown.saturating_sub(1);

    // 7. Commit.
    body.pos.x += dx;
    body.pos.y += dy;
}

/// Runs the physics step for both fighters, player one first. The second
/// fighter collides against the first one's already-updated box.
pub(crate) fn step_physics(
    flow: Res<RoundFlow>,
    handles: Option<Res<FighterHandles>>,
    bounds: Res<ArenaBounds>,
    tuning: Res<FightTuning>,
    mut fighters: Query<
        (
            &mut Body,
            &mut FighterState,
            &mut Facing,
            &FighterIntent,
            &Health,
        ),
        With<Fighter>,
    >,
) {
    if !flow.is_active() {
        return;
    }
    let Some(handles) = handles else {
        return;
    };

    for (me, them) in handles.pairs() {
        let Ok((their_body, ..)) = fighters.get(them) else {
            continue;
        };
        let opponent = their_body.rect();

        let Ok((mut body, mut state, mut facing, intent, health)) = fighters.get_mut(me) else {
            continue;
        };
        step_fighter(
            &mut body,
            &mut state,
            &mut facing,
            intent,
            health.alive,
            opponent,
            &bounds,
            &tuning,
        );
    }
}
