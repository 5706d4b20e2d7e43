//! Fighter domain: keyboard sampling for human-controlled fighters.

use bevy::prelude::*;

use crate::fighter::components::{AttackKind, ControlScheme, FighterIntent};

/// Samples held keys into each human fighter's intent, overwriting last
/// tick's value. Holding an attack key keeps requesting that attack; the
/// combat resolver's cooldown decides whether it actually fires.
pub(crate) fn sample_human_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut fighters: Query<(&ControlScheme, &mut FighterIntent)>,
) {
    for (scheme, mut intent) in &mut fighters {
        let mut axis_x = 0.0;
        if keyboard.pressed(scheme.left) {
            axis_x -= 1.0;
        }
        if keyboard.pressed(scheme.right) {
            axis_x += 1.0;
        }

        let attack = if keyboard.pressed(scheme.light) {
            Some(AttackKind::Light)
        } else if keyboard.pressed(scheme.heavy) {
            Some(AttackKind::Heavy)
        } else if keyboard.pressed(scheme.special) {
            Some(AttackKind::Special)
        } else {
            None
        };

        *intent = FighterIntent {
            axis_x,
            jump: keyboard.pressed(scheme.jump),
            attack,
        };
    }
}
