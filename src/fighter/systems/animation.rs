//! Fighter domain: the animation state machine.

use bevy::prelude::*;

use crate::fighter::components::{
    AnimationController, AttackKind, Fighter, FighterAnimation, FighterState, Health,
};
use crate::fighter::resources::FightTuning;

/// Maps the post-physics flags to an animation. The priority order is total:
/// death beats hurt beats attack beats jump beats run beats idle, no matter
/// how the flags were produced.
pub(crate) fn select_animation(state: &FighterState, health: &Health) -> FighterAnimation {
    if health.is_depleted() {
        FighterAnimation::Death
    } else if state.hit {
        FighterAnimation::Hurt
    } else if state.attacking {
        FighterAnimation::Attack(state.attack_kind.unwrap_or(AttackKind::Light))
    } else if state.jumping {
        FighterAnimation::Jump
    } else if state.running {
        FighterAnimation::Run
    } else {
        FighterAnimation::Idle
    }
}

/// Advances one fighter's animation by one tick: re-select from the flags,
/// step the frame clock, and handle end-of-animation bookkeeping. A dead
/// fighter freezes on the last death frame; a finished attack or hurt
/// animation hands control back by clearing its flag and cooldown.
pub(crate) fn advance_animation(
    controller: &mut AnimationController,
    state: &mut FighterState,
    health: &mut Health,
    ticks_per_frame: u32,
) {
    let selected = select_animation(state, health);
    if selected == FighterAnimation::Death && health.alive {
        health.kill();
    }
    controller.set(selected);

    controller.clock += 1;
    if controller.clock < ticks_per_frame.max(1) {
        return;
    }
    controller.clock = 0;
    controller.frame += 1;

    if controller.frame >= controller.frame_count() {
        if !health.alive {
            // Terminal: stay collapsed on the last frame.
            controller.frame = controller.frame_count() - 1;
        } else {
            controller.frame = 0;
            match controller.animation {
                FighterAnimation::Attack(_) => {
                    state.attacking = false;
                    state.attack_kind = None;
                    // The swing has fully recovered; allow the next attack
                    // without waiting out the rest of the window.
                    state.attack_cooldown = 0;
                }
                FighterAnimation::Hurt => {
                    state.hit = false;
                }
                _ => {}
            }
        }
    }
}

/// Runs every tick of the fight, including the countdown and after the round
/// is decided, so idle loops play during the intro and death animations
/// settle at the end.
pub(crate) fn update_animation(
    tuning: Res<FightTuning>,
    mut fighters: Query<(&mut AnimationController, &mut FighterState, &mut Health), With<Fighter>>,
) {
    for (mut controller, mut state, mut health) in &mut fighters {
        advance_animation(
            &mut controller,
            &mut state,
            &mut health,
            tuning.animation_frame_ticks,
        );
    }
}
