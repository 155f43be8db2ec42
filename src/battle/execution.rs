//! Battle execution loop
//!
//! Each round: turn order by noisy speed -> target pick -> skill
//! selection -> attack resolution -> termination check.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::resolution::resolve_attack;
use crate::battle::roster::Roster;
use crate::core::types::{CombatantId, Round};

/// Battle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    InProgress,
    Over,
}

/// Battle outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Winner {
        id: CombatantId,
        name: String,
        remaining_hp: u32,
    },
    Draw,
}

/// Log entry for battle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleEvent {
    pub round: Round,
    pub event_type: BattleEventType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEventType {
    RoundStarted,
    UltimateUnleashed {
        attacker: String,
    },
    SkillUsed {
        attacker: String,
        skill: String,
        target: String,
        damage: u32,
        target_hp: u32,
    },
    CombatantFainted {
        name: String,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}

/// Log of events across the whole battle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleEventLog {
    pub events: Vec<BattleEvent>,
}

impl BattleEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event_type: BattleEventType, round: Round) {
        self.events.push(BattleEvent { round, event_type });
    }
}

/// Turn order for one round: each living combatant's effective speed is
/// sampled once (uniform in [0, speed]) and the round is walked in
/// descending key order. Ties keep roster order (stable sort).
///
/// The speed key is sampled once per combatant per round, not once per
/// comparison, so a round's ordering is well defined regardless of how
/// the sort visits elements.
pub fn turn_order(roster: &Roster, rng: &mut impl Rng) -> Vec<CombatantId> {
    let mut keyed: Vec<(u32, CombatantId)> = roster
        .living()
        .map(|c| (rng.gen_range(0..=c.speed), c.id))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, id)| id).collect()
}

/// Complete battle state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleState {
    pub roster: Roster,
    pub round: Round,
    pub phase: BattlePhase,
    pub outcome: Option<BattleOutcome>,
    pub battle_log: BattleEventLog,
}

impl BattleState {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            round: 0,
            phase: BattlePhase::InProgress,
            outcome: None,
            battle_log: BattleEventLog::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == BattlePhase::Over
    }

    /// Checks the termination condition: Some(outcome) once at most one
    /// combatant is left alive.
    pub fn check_battle_end(&self) -> Option<BattleOutcome> {
        match self.roster.living_count() {
            0 => Some(BattleOutcome::Draw),
            1 => self.roster.living().next().map(|survivor| BattleOutcome::Winner {
                id: survivor.id,
                name: survivor.name.clone(),
                remaining_hp: survivor.hp,
            }),
            _ => None,
        }
    }

    /// Runs one full round. Does nothing once the battle is over; a
    /// roster that is already decided (0 or 1 living) goes straight to
    /// the final outcome without any attack.
    pub fn run_round(&mut self, rng: &mut impl Rng) {
        if self.is_over() || self.try_finish() {
            return;
        }

        self.round += 1;
        self.battle_log.push(BattleEventType::RoundStarted, self.round);
        tracing::debug!(
            round = self.round,
            living = self.roster.living_count(),
            "round started"
        );

        for attacker_id in turn_order(&self.roster, rng) {
            // A combatant felled earlier this round forfeits its turn.
            let attacker_alive = self
                .roster
                .get(attacker_id)
                .map_or(false, |c| c.is_alive());
            if !attacker_alive {
                continue;
            }

            let targets = self.roster.living_targets(attacker_id);
            if targets.is_empty() {
                break;
            }
            let defender_id = targets[rng.gen_range(0..targets.len())];

            self.execute_turn(attacker_id, defender_id, rng);
        }

        self.try_finish();
    }

    /// Runs rounds until the battle is over and returns the outcome.
    pub fn run_to_completion(&mut self, rng: &mut impl Rng) -> BattleOutcome {
        loop {
            if let Some(outcome) = &self.outcome {
                return outcome.clone();
            }
            self.run_round(rng);
        }
    }

    fn execute_turn(
        &mut self,
        attacker_id: CombatantId,
        defender_id: CombatantId,
        rng: &mut impl Rng,
    ) {
        let (skill, attacker_name) = match self.roster.get_mut(attacker_id) {
            Some(attacker) if attacker.is_alive() => {
                (attacker.select_skill(rng), attacker.name.clone())
            }
            _ => return,
        };

        if skill.ultimate {
            self.battle_log.push(
                BattleEventType::UltimateUnleashed {
                    attacker: attacker_name.clone(),
                },
                self.round,
            );
        }

        let Some((attacker, defender)) = self.roster.attacker_and_defender(attacker_id, defender_id)
        else {
            return;
        };
        let target_name = defender.name.clone();

        if let Some(result) = resolve_attack(attacker, defender, &skill, rng) {
            self.battle_log.push(
                BattleEventType::SkillUsed {
                    attacker: attacker_name,
                    skill: skill.name,
                    target: target_name.clone(),
                    damage: result.damage,
                    target_hp: result.defender_hp,
                },
                self.round,
            );
            if result.defender_fainted {
                self.battle_log.push(
                    BattleEventType::CombatantFainted { name: target_name },
                    self.round,
                );
            }
        }
    }

    /// Moves to the Over phase when the roster is decided. Returns true
    /// once the battle has ended.
    fn try_finish(&mut self) -> bool {
        if self.is_over() {
            return true;
        }
        if let Some(outcome) = self.check_battle_end() {
            self.phase = BattlePhase::Over;
            self.battle_log.push(
                BattleEventType::BattleEnded {
                    outcome: outcome.clone(),
                },
                self.round,
            );
            tracing::debug!(round = self.round, "battle over");
            self.outcome = Some(outcome);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::combatant::{Archetype, Combatant};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn duel_roster() -> Roster {
        Roster::new(vec![
            Combatant::with_stats("Left", Archetype::Archer, 20, 5, 10),
            Combatant::with_stats("Right", Archetype::Warrior, 20, 5, 10),
        ])
    }

    #[test]
    fn test_turn_order_covers_each_living_combatant_once() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut roster = Roster::default_lineup(&mut rng);
        let fallen = roster.iter().next().unwrap().id;
        roster.get_mut(fallen).unwrap().hp = 0;

        let order = turn_order(&roster, &mut rng);
        assert_eq!(order.len(), 4);
        assert!(!order.contains(&fallen));
        let unique: HashSet<CombatantId> = order.iter().copied().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_battle_runs_to_a_winner() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = BattleState::new(duel_roster());

        let outcome = state.run_to_completion(&mut rng);
        match outcome {
            BattleOutcome::Winner { remaining_hp, .. } => {
                assert!(remaining_hp > 0);
                assert!(remaining_hp <= 70);
            }
            BattleOutcome::Draw => panic!("sequential turns cannot produce a draw"),
        }
        assert!(state.is_over());
        assert_eq!(state.roster.living_count(), 1);
        assert!(state.round >= 1);
    }

    #[test]
    fn test_predecided_roster_wins_without_attacks() {
        let mut roster = duel_roster();
        let ids: Vec<CombatantId> = roster.iter().map(|c| c.id).collect();
        roster.get_mut(ids[1]).unwrap().hp = 0;

        let mut rng = StdRng::seed_from_u64(0);
        let mut state = BattleState::new(roster);
        let outcome = state.run_to_completion(&mut rng);

        assert_eq!(
            outcome,
            BattleOutcome::Winner {
                id: ids[0],
                name: "Left".to_string(),
                remaining_hp: 70,
            }
        );
        assert_eq!(state.round, 0);
        // The only event is the termination report.
        assert_eq!(state.battle_log.events.len(), 1);
        assert!(matches!(
            state.battle_log.events[0].event_type,
            BattleEventType::BattleEnded { .. }
        ));
    }

    #[test]
    fn test_all_fainted_roster_is_a_draw() {
        let mut roster = duel_roster();
        let ids: Vec<CombatantId> = roster.iter().map(|c| c.id).collect();
        for id in ids {
            roster.get_mut(id).unwrap().hp = 0;
        }

        let mut rng = StdRng::seed_from_u64(0);
        let mut state = BattleState::new(roster);
        assert_eq!(state.run_to_completion(&mut rng), BattleOutcome::Draw);
        assert_eq!(state.round, 0);
    }

    #[test]
    fn test_fainted_combatants_never_attack() {
        let mut rng = StdRng::seed_from_u64(21);
        let roster = Roster::default_lineup(&mut rng);
        let mut state = BattleState::new(roster);
        state.run_to_completion(&mut rng);

        let mut fainted: HashSet<String> = HashSet::new();
        for event in &state.battle_log.events {
            match &event.event_type {
                BattleEventType::SkillUsed { attacker, damage, .. } => {
                    assert!(!fainted.contains(attacker));
                    assert!(*damage >= 1);
                }
                BattleEventType::CombatantFainted { name } => {
                    fainted.insert(name.clone());
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_hp_stays_within_bounds_every_round() {
        let mut rng = StdRng::seed_from_u64(77);
        let roster = Roster::default_lineup(&mut rng);
        let mut state = BattleState::new(roster);

        while !state.is_over() {
            state.run_round(&mut rng);
            for combatant in state.roster.iter() {
                assert!(combatant.hp <= 70);
            }
        }
    }

    #[test]
    fn test_run_round_after_battle_over_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = BattleState::new(duel_roster());
        state.run_to_completion(&mut rng);

        let round = state.round;
        let events = state.battle_log.events.len();
        state.run_round(&mut rng);
        assert_eq!(state.round, round);
        assert_eq!(state.battle_log.events.len(), events);
    }
}
