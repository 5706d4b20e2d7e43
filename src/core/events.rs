//! Core domain: match flow messages.

use bevy::ecs::message::Message;

use crate::core::resources::Side;

/// Fired once when a fighter dies and the round freezes. The menu layer
/// listens for this to show the winner and take control back.
#[derive(Debug)]
pub struct RoundOver {
    pub winner: Side,
}

impl Message for RoundOver {}
