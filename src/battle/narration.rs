//! Console narration for battle events
//!
//! Renders the structured event log into the announcer text, one block of
//! lines per event, to any writer.

use std::io::{self, Write};

use crate::battle::execution::{BattleEvent, BattleEventType, BattleOutcome};

const SEPARATOR: &str = "----------------------";

/// Writes the narration lines for one event.
pub fn write_event(out: &mut impl Write, event: &BattleEvent) -> io::Result<()> {
    match &event.event_type {
        BattleEventType::RoundStarted => {
            writeln!(out, "{}", SEPARATOR)?;
            writeln!(out, "Round {}:", event.round)?;
            writeln!(out, "{}", SEPARATOR)
        }
        BattleEventType::UltimateUnleashed { attacker } => {
            writeln!(out, "OMG! {} is using its ultimate skill!", attacker)
        }
        BattleEventType::SkillUsed {
            attacker,
            skill,
            target,
            damage,
            target_hp,
        } => {
            writeln!(out, "{} used {} on {}!", attacker, skill, target)?;
            writeln!(out, "Deals {} damage!", damage)?;
            writeln!(out, "{} has {} HP left!", target, target_hp)?;
            writeln!(out, "{}", SEPARATOR)
        }
        BattleEventType::CombatantFainted { name } => {
            writeln!(out, "{} has fainted! :(", name)?;
            writeln!(out, "{}", SEPARATOR)
        }
        BattleEventType::BattleEnded { outcome } => write_outcome(out, outcome),
    }
}

/// Writes the closing winner-or-draw line.
pub fn write_outcome(out: &mut impl Write, outcome: &BattleOutcome) -> io::Result<()> {
    match outcome {
        BattleOutcome::Winner {
            name, remaining_hp, ..
        } => writeln!(
            out,
            "The winner is {} with {} HP remaining!",
            name, remaining_hp
        ),
        BattleOutcome::Draw => writeln!(out, "It's a draw!"),
    }
}

/// Writes the whole battle log in order.
pub fn write_battle_log(out: &mut impl Write, events: &[BattleEvent]) -> io::Result<()> {
    for event in events {
        write_event(out, event)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CombatantId;

    fn render(event: &BattleEvent) -> String {
        let mut buffer = Vec::new();
        write_event(&mut buffer, event).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_round_banner() {
        let event = BattleEvent {
            round: 3,
            event_type: BattleEventType::RoundStarted,
        };
        assert_eq!(
            render(&event),
            "----------------------\nRound 3:\n----------------------\n"
        );
    }

    #[test]
    fn test_attack_narration() {
        let event = BattleEvent {
            round: 1,
            event_type: BattleEventType::SkillUsed {
                attacker: "Popcorn".to_string(),
                skill: "Magic: Arrows".to_string(),
                target: "Chicharrón".to_string(),
                damage: 12,
                target_hp: 58,
            },
        };
        assert_eq!(
            render(&event),
            "Popcorn used Magic: Arrows on Chicharrón!\n\
             Deals 12 damage!\n\
             Chicharrón has 58 HP left!\n\
             ----------------------\n"
        );
    }

    #[test]
    fn test_ultimate_and_faint_notices() {
        let ultimate = BattleEvent {
            round: 2,
            event_type: BattleEventType::UltimateUnleashed {
                attacker: "Popcorn".to_string(),
            },
        };
        assert_eq!(
            render(&ultimate),
            "OMG! Popcorn is using its ultimate skill!\n"
        );

        let faint = BattleEvent {
            round: 2,
            event_type: BattleEventType::CombatantFainted {
                name: "Germany Sausage".to_string(),
            },
        };
        assert_eq!(
            render(&faint),
            "Germany Sausage has fainted! :(\n----------------------\n"
        );
    }

    #[test]
    fn test_outcome_lines() {
        let winner = BattleOutcome::Winner {
            id: CombatantId::new(),
            name: "Popcorn".to_string(),
            remaining_hp: 41,
        };
        let mut buffer = Vec::new();
        write_outcome(&mut buffer, &winner).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "The winner is Popcorn with 41 HP remaining!\n"
        );

        let mut buffer = Vec::new();
        write_outcome(&mut buffer, &BattleOutcome::Draw).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "It's a draw!\n");
    }
}
