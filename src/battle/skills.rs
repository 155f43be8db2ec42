//! Skills and per-archetype skill tables
//!
//! Archetypes are behaviorally identical: every table carries the same
//! multiplier curve and the last entry is the one-use ultimate. New
//! archetypes are added by table, not by new combatant variants.

use serde::{Deserialize, Serialize};

use crate::battle::combatant::Archetype;
use crate::battle::constants::SKILL_COUNT;

/// A named attack skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Applied to the attacker's effective attack roll
    pub multiplier: f64,
    /// Ultimates are removed from the combatant's list after one use
    pub ultimate: bool,
}

type SkillRow = (&'static str, f64);

const ARCHER_SKILLS: [SkillRow; SKILL_COUNT] = [
    ("Power Shot", 1.7),
    ("Bullseye", 2.3),
    ("Arrow Rain", 2.5),
    ("Snipe", 2.7),
    ("Cross Fire", 3.0),
];

const MAGE_SKILLS: [SkillRow; SKILL_COUNT] = [
    ("Magic: Arrows", 1.7),
    ("Magic: Javeline", 2.3),
    ("Magic: Lances", 2.5),
    ("Magic: Impact", 2.7),
    ("Magic: Finale", 3.0),
];

const WARRIOR_SKILLS: [SkillRow; SKILL_COUNT] = [
    ("Hard Hit", 1.7),
    ("Astute", 2.3),
    ("Trigger Slash", 2.5),
    ("Rampage", 2.7),
    ("Meteor Breaker", 3.0),
];

/// Builds the starting skill list for an archetype. The final entry is
/// flagged as the ultimate.
pub fn skill_table(archetype: Archetype) -> Vec<Skill> {
    let rows = match archetype {
        Archetype::Archer => &ARCHER_SKILLS,
        Archetype::Mage => &MAGE_SKILLS,
        Archetype::Warrior => &WARRIOR_SKILLS,
    };

    rows.iter()
        .enumerate()
        .map(|(index, (name, multiplier))| Skill {
            name: (*name).to_string(),
            multiplier: *multiplier,
            ultimate: index == SKILL_COUNT - 1,
        })
        .collect()
}
