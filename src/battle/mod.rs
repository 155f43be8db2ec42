//! Free-for-all battle loop
//!
//! A fixed roster fights randomized rounds until at most one combatant is
//! left standing. All randomness flows through injected `Rng` handles;
//! the library never touches a global source.

pub mod combatant;
pub mod constants;
pub mod execution;
pub mod narration;
pub mod resolution;
pub mod roster;
pub mod skills;

// Re-exports for convenient access
pub use combatant::{Archetype, Combatant};
pub use constants::*;
pub use execution::{
    turn_order, BattleEvent, BattleEventLog, BattleEventType, BattleOutcome, BattlePhase,
    BattleState,
};
pub use narration::{write_battle_log, write_event, write_outcome};
pub use resolution::{resolve_attack, AttackResult};
pub use roster::Roster;
pub use skills::{skill_table, Skill};
