//! Fighter domain: attack firing and damage resolution.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{FighterHandles, RoundFlow};
use crate::fighter::components::{
    AttackKind, Body, Facing, Fighter, FighterIntent, FighterState, Health,
};
use crate::fighter::events::DamageDealt;
use crate::fighter::resources::FightTuning;

/// The transient rectangle an attack sweeps: body-height, `hitbox_reach`
/// body-widths deep, flush against the attacker's leading edge.
pub(crate) fn attack_hitbox(body: &Body, facing: Facing, reach: f32) -> Rect {
    let width = body.size.x * reach;
    let x = match facing {
        Facing::Right => body.pos.x + body.size.x,
        Facing::Left => body.pos.x - width,
    };
    Rect::from_corners(
        Vec2::new(x, body.pos.y),
        Vec2::new(x + width, body.pos.y + body.size.y),
    )
}

pub(crate) fn hitbox_connects(hitbox: Rect, target: Rect) -> bool {
    !hitbox.intersect(target).is_empty()
}

/// Commits an attack if one is requested and allowed: cold cooldown, no
/// swing already playing, fighter alive. Returns the attack that fired.
/// Firing starts the cooldown window whether or not the swing will land, so
/// a held button cannot re-trigger damage within the same window.
pub(crate) fn try_fire(
    state: &mut FighterState,
    alive: bool,
    intent: &FighterIntent,
    tuning: &FightTuning,
) -> Option<AttackKind> {
    let kind = intent.attack?;
    if state.attack_cooldown > 0 || state.attacking || !alive {
        return None;
    }
    state.attacking = true;
    state.attack_kind = Some(kind);
    state.attack_cooldown = tuning.attack_cooldown;
    Some(kind)
}

/// Consumes attack intents for both fighters, player one first, and applies
/// damage where the hitbox overlaps the opponent's body.
pub(crate) fn resolve_attacks(
    flow: Res<RoundFlow>,
    handles: Option<Res<FighterHandles>>,
    tuning: Res<FightTuning>,
    mut fighters: Query<
        (
            &Body,
            &Facing,
            &mut FighterState,
            &mut Health,
            &FighterIntent,
        ),
        With<Fighter>,
    >,
    mut damage: MessageWriter<DamageDealt>,
) {
    if !flow.is_active() {
        return;
    }
    let Some(handles) = handles else {
        return;
    };

    for (me, them) in handles.pairs() {
        let hitbox = {
            let Ok((body, facing, ..)) = fighters.get(me) else {
                continue;
            };
            attack_hitbox(body, *facing, tuning.hitbox_reach)
        };

        let fired = {
            let Ok((_, _, mut state, health, intent)) = fighters.get_mut(me) else {
                continue;
            };
            let alive = health.alive;
            try_fire(&mut state, alive, intent, &tuning)
        };
        let Some(kind) = fired else {
            continue;
        };

        let Ok((target_body, _, mut target_state, mut target_health, _)) = fighters.get_mut(them)
        else {
            continue;
        };
        if hitbox_connects(hitbox, target_body.rect()) {
            target_health.take_damage(tuning.attack_damage);
            target_state.hit = true;
            debug!(
                "{:?} {:?} connected, target at {}",
                handles.side_of(me),
                kind,
                target_health.clamped()
            );
            damage.write(DamageDealt {
                attacker: me,
                target: them,
                amount: tuning.attack_damage,
            });
        }
    }
}
