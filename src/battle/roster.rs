//! Roster: the fixed lineup of one battle
//!
//! Membership never changes. Fainted combatants keep their slot and are
//! filtered out of living-subset queries.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::combatant::{Archetype, Combatant};
use crate::core::types::CombatantId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    combatants: Vec<Combatant>,
}

impl Roster {
    pub fn new(combatants: Vec<Combatant>) -> Self {
        Self { combatants }
    }

    /// The original five-entrant lineup: one archer, two mages, two
    /// warriors, stats rolled from the supplied source.
    pub fn default_lineup(rng: &mut impl Rng) -> Self {
        Self::new(vec![
            Combatant::new("Mashed Potatoes with Bacon", Archetype::Archer, rng),
            Combatant::new("Popcorn", Archetype::Mage, rng),
            Combatant::new("Germany Sausage", Archetype::Mage, rng),
            Combatant::new("Cheese & Mushroom Soup", Archetype::Warrior, rng),
            Combatant::new("Chicharrón", Archetype::Warrior, rng),
        ])
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter()
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.iter_mut().find(|c| c.id == id)
    }

    pub fn living(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter().filter(|c| c.is_alive())
    }

    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    /// Living combatants other than `attacker`: the legal target pool for
    /// one attack.
    pub fn living_targets(&self, attacker: CombatantId) -> Vec<CombatantId> {
        self.living()
            .filter(|c| c.id != attacker)
            .map(|c| c.id)
            .collect()
    }

    /// Disjoint borrows of an attacker and a different defender. None if
    /// either id is unknown or both refer to the same combatant.
    pub fn attacker_and_defender(
        &mut self,
        attacker: CombatantId,
        defender: CombatantId,
    ) -> Option<(&Combatant, &mut Combatant)> {
        let a = self.combatants.iter().position(|c| c.id == attacker)?;
        let d = self.combatants.iter().position(|c| c.id == defender)?;
        if a == d {
            return None;
        }
        if a < d {
            let (left, right) = self.combatants.split_at_mut(d);
            Some((&left[a], &mut right[0]))
        } else {
            let (left, right) = self.combatants.split_at_mut(a);
            Some((&right[0], &mut left[d]))
        }
    }
}
