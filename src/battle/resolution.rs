//! Attack resolution
//!
//! Effective powers are single uniform samples in [0, rating]. Damage is
//! floor(attack power * multiplier - defense power), never below 1.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::combatant::Combatant;
use crate::battle::constants::MIN_DAMAGE;
use crate::battle::skills::Skill;

/// Result of one resolved attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub damage: u32,
    pub defender_hp: u32,
    pub defender_fainted: bool,
}

/// Resolves one attack against the defender.
///
/// Returns None without touching the defender when the attacker has
/// already fainted: a combatant felled earlier in the same round still
/// holds its slot in the turn order, and acting from the grave is a
/// benign no-op, not a fault.
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &mut Combatant,
    skill: &Skill,
    rng: &mut impl Rng,
) -> Option<AttackResult> {
    if !attacker.is_alive() {
        return None;
    }

    let attack_roll = rng.gen_range(0..=attacker.attack);
    let attack_power = attack_roll as f64 * skill.multiplier;
    let defense_power = rng.gen_range(0..=defender.defense) as f64;

    // Defense can out-roll attack; the clamp keeps every landed hit at 1+.
    let raw = (attack_power - defense_power).floor() as i64;
    let damage = raw.max(MIN_DAMAGE as i64) as u32;

    defender.take_damage(damage);

    Some(AttackResult {
        damage,
        defender_hp: defender.hp,
        defender_fainted: !defender.is_alive(),
    })
}
