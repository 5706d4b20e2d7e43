//! Fighter domain: per-tick systems, in execution order.

pub(crate) mod animation;
pub(crate) mod combat;
pub(crate) mod input;
pub(crate) mod physics;
