//! Battle tuning constants

/// Starting health for every combatant
pub const BASE_HP: u32 = 70;

/// Upper bound (inclusive) for the attack/defense/speed rolls made once
/// at combatant creation
pub const STAT_ROLL_MAX: u32 = 31;

/// Number of skills each archetype starts the battle with
pub const SKILL_COUNT: usize = 5;

/// Minimum damage dealt by any attack that resolves. An attack that fails
/// to penetrate defense still chips 1 HP.
pub const MIN_DAMAGE: u32 = 1;
