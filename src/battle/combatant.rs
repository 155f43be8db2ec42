//! Combatants and their stat rolls
//!
//! Stats are rolled once at creation; health only ever goes down and a
//! combatant at 0 HP is fainted for the rest of the battle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::constants::{BASE_HP, STAT_ROLL_MAX};
use crate::battle::skills::{skill_table, Skill};
use crate::core::types::CombatantId;

/// Combat archetypes. Behaviorally identical; each owns a different
/// cosmetic skill table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Archer,
    Mage,
    Warrior,
}

/// A single battle participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub archetype: Archetype,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    /// Shrinks only when the ultimate is spent
    pub skills: Vec<Skill>,
}

impl Combatant {
    /// Creates a combatant with attack, defense and speed each rolled
    /// uniformly from [0, STAT_ROLL_MAX].
    pub fn new(name: impl Into<String>, archetype: Archetype, rng: &mut impl Rng) -> Self {
        let attack = rng.gen_range(0..=STAT_ROLL_MAX);
        let defense = rng.gen_range(0..=STAT_ROLL_MAX);
        let speed = rng.gen_range(0..=STAT_ROLL_MAX);
        Self::with_stats(name, archetype, attack, defense, speed)
    }

    /// Creates a combatant with exact stats, for scenario setups that need
    /// crafted rolls.
    pub fn with_stats(
        name: impl Into<String>,
        archetype: Archetype,
        attack: u32,
        defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            id: CombatantId::new(),
            name: name.into(),
            archetype,
            hp: BASE_HP,
            attack,
            defense,
            speed,
            skills: skill_table(archetype),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Reduces HP, saturating at 0.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Picks a skill uniformly from the current list. A selected ultimate
    /// is removed permanently before being returned.
    pub fn select_skill(&mut self, rng: &mut impl Rng) -> Skill {
        let index = rng.gen_range(0..self.skills.len());
        if self.skills[index].ultimate {
            self.skills.remove(index)
        } else {
            self.skills[index].clone()
        }
    }
}
