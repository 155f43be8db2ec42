//! Arena Royale - Randomized free-for-all battle simulator

pub mod battle;
pub mod core;
