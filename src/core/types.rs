//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for combatants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub Uuid);

impl CombatantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CombatantId {
    fn default() -> Self {
        Self::new()
    }
}

/// Battle round counter (1-based once the first round begins)
pub type Round = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combatant_ids_are_unique() {
        let a = CombatantId::new();
        let b = CombatantId::new();
        assert_ne!(a, b);
    }
}
