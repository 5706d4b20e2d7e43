//! Fighter domain: combat messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired when an attack hitbox connects. The AI reads these to track its
/// hit exchange; a UI layer could use them for hit sparks or sound.
#[derive(Debug)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub amount: i32,
}

impl Message for DamageDealt {}
