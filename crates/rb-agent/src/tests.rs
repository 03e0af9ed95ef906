//! Tests for the robot interpreter.

use std::sync::Arc;

use rb_core::Position;
use rb_program::{Instruction, Program};

use crate::{Agent, AgentError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn program(tokens: &[&str]) -> Arc<Program> {
    Arc::new(Program::from_tokens(tokens).unwrap())
}

fn agent(position: i64, tokens: &[&str]) -> Agent {
    Agent::new(Position(position), program(tokens))
}

const MARKER: Position = Position(1);

// ── Timed instructions ────────────────────────────────────────────────────────

#[cfg(test)]
mod timed_tests {
    use super::*;

    #[test]
    fn moves_change_position_by_one() {
        let mut a = agent(0, &["ML", "MR", "MR"]);
        assert_eq!(a.advance(MARKER).unwrap().position, Position(-1));
        assert_eq!(a.advance(MARKER).unwrap().position, Position(0));
        assert_eq!(a.advance(MARKER).unwrap().position, Position(1));
        assert_eq!(a.counter(), 0, "ran off the end, restarts at line 1");
    }

    #[test]
    fn branch_on_marker_falls_into_next_line() {
        let mut a = agent(1, &["IF FLAG", "MR", "ML"]);
        let step = a.advance(MARKER).unwrap();
        assert_eq!(step.executed, Instruction::BranchIfMarker);
        assert_eq!(step.counter, 1);
        assert_eq!(step.position, Position(1), "branch never moves the robot");
    }

    #[test]
    fn branch_off_marker_skips_next_line() {
        let mut a = agent(5, &["IF FLAG", "MR", "ML"]);
        let step = a.advance(MARKER).unwrap();
        assert_eq!(step.counter, 2);
        assert_eq!(a.advance(MARKER).unwrap().executed, Instruction::MoveLeft);
        assert_eq!(a.position(), Position(4));
    }

    #[test]
    fn trailing_branch_wraps_to_first_line_either_way() {
        // MR lands on the marker, so the branch on line 2 falls into line 3.
        let mut on = agent(0, &["MR", "IF FLAG"]);
        on.advance(MARKER).unwrap();
        assert_eq!(on.advance(MARKER).unwrap().counter, 0);

        let mut off = agent(6, &["MR", "IF FLAG"]);
        off.advance(MARKER).unwrap();
        assert_eq!(off.advance(MARKER).unwrap().counter, 0);
    }

    #[test]
    fn branch_before_last_line_skips_past_end_to_first_line() {
        let mut a = agent(9, &["ML", "IF FLAG", "MR"]);
        a.advance(MARKER).unwrap();
        let step = a.advance(MARKER).unwrap();
        assert_eq!((step.at, step.counter), (1, 0));
        assert_eq!(a.position(), Position(8), "skipped MR never ran");
    }

    #[test]
    fn unknown_instruction_is_a_timed_no_op() {
        let mut a = agent(3, &["WAIT", "MR"]);
        let step = a.advance(MARKER).unwrap();
        assert_eq!(step.executed, Instruction::Unknown("WAIT".into()));
        assert_eq!(step.position, Position(3));
        assert_eq!(step.counter, 1);
    }
}

// ── Jump resolution ───────────────────────────────────────────────────────────

#[cfg(test)]
mod jump_tests {
    use super::*;

    #[test]
    fn jump_chain_resolves_within_one_tick() {
        let mut a = agent(0, &["GOTO 3", "ML", "GOTO 4", "GOTO 5", "MR"]);
        let step = a.advance(MARKER).unwrap();
        assert_eq!(step.hops, 3);
        assert_eq!(step.at, 4);
        assert_eq!(step.executed, Instruction::MoveRight);
        assert_eq!(step.position, Position(1));
        assert_eq!(step.counter, 0);
    }

    #[test]
    fn glued_goto_falls_through_in_the_same_tick() {
        let mut a = agent(0, &["GOTO5", "MR"]);
        let step = a.advance(MARKER).unwrap();
        assert_eq!(step.hops, 1);
        assert_eq!(step.executed, Instruction::MoveRight);
        assert_eq!(step.position, Position(1));
    }

    #[test]
    fn timed_instruction_under_counter_needs_no_hops() {
        let mut a = agent(0, &["MR", "GOTO 1"]);
        assert_eq!(a.advance(MARKER).unwrap().hops, 0);
        assert_eq!(a.advance(MARKER).unwrap().hops, 1);
    }

    #[test]
    fn malformed_jump_falls_through_to_next_line() {
        let mut a = agent(0, &["GOTO 99", "ML"]);
        let step = a.advance(MARKER).unwrap();
        assert_eq!(step.hops, 1);
        assert_eq!(step.executed, Instruction::MoveLeft);
    }

    #[test]
    fn malformed_jump_on_last_line_wraps() {
        let mut a = agent(0, &["MR", "GOTO nowhere"]);
        a.advance(MARKER).unwrap();
        let step = a.advance(MARKER).unwrap();
        assert_eq!((step.at, step.hops), (0, 1));
        assert_eq!(a.position(), Position(2));
    }

    #[test]
    fn self_jump_is_reported_as_cycle() {
        let mut a = agent(4, &["GOTO 1"]);
        match a.advance(MARKER) {
            Err(AgentError::JumpCycle { counter, hops }) => {
                assert_eq!(counter, 0);
                assert_eq!(hops, 1);
            }
            other => panic!("expected JumpCycle, got {other:?}"),
        }
        assert_eq!(a.position(), Position(4));
    }

    #[test]
    fn mutual_jumps_are_reported_as_cycle() {
        // Line 3 is timed but unreachable from line 1.
        let mut a = agent(0, &["GOTO 2", "GOTO 1", "MR"]);
        assert!(matches!(a.advance(MARKER), Err(AgentError::JumpCycle { hops: 3, .. })));
    }

    #[test]
    fn longest_acyclic_chain_is_not_a_cycle() {
        // len - 1 jumps, then the only timed instruction.
        let mut a = agent(0, &["GOTO 2", "GOTO 3", "GOTO 4", "GOTO 5", "ML"]);
        let step = a.advance(MARKER).unwrap();
        assert_eq!(step.hops, 4);
        assert_eq!(step.position, Position(-1));
    }

    #[test]
    fn cycle_error_names_one_based_line() {
        let mut a = agent(0, &["ML", "GOTO 2"]);
        a.advance(MARKER).unwrap();
        let err = a.advance(MARKER).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    fn token() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("ML".to_string()),
            Just("MR".to_string()),
            Just("IF FLAG".to_string()),
            Just("NOP".to_string()),
            (0usize..10).prop_map(|n| format!("GOTO {n}")),
        ]
    }

    fn tokens() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(token(), 1..8)
    }

    /// Jump resolution with a generous fixed cap, for comparison.
    fn reaches_timed_instruction(program: &Program, start: usize) -> bool {
        let mut counter = start;
        for _ in 0..1_000 {
            match &program[counter] {
                Instruction::Jump(rb_program::Jump::To(t)) => counter = *t,
                Instruction::Jump(rb_program::Jump::FallThrough(_)) => {
                    counter = (counter + 1) % program.len();
                }
                _ => return true,
            }
        }
        false
    }

    proptest! {
        #[test]
        fn counter_stays_in_range(
            tokens in tokens(),
            start in -20i64..20,
            marker in -3i64..3,
            ticks in 1usize..60,
        ) {
            let mut a = agent(start, &tokens.iter().map(String::as_str).collect::<Vec<_>>());
            let len = a.program().len();
            for _ in 0..ticks {
                match a.advance(Position(marker)) {
                    Ok(step) => {
                        prop_assert!(step.counter < len);
                        prop_assert!(step.at < len);
                        prop_assert_eq!(step.counter, a.counter());
                    }
                    Err(AgentError::JumpCycle { counter, .. }) => {
                        prop_assert!(counter < len);
                        break;
                    }
                }
                prop_assert!(a.counter() < len);
            }
        }

        #[test]
        fn each_tick_moves_at_most_one_cell(
            tokens in tokens(),
            start in -20i64..20,
            marker in -3i64..3,
        ) {
            let mut a = agent(start, &tokens.iter().map(String::as_str).collect::<Vec<_>>());
            for _ in 0..40 {
                let before = a.position();
                let Ok(step) = a.advance(Position(marker)) else { break };
                let expected = match step.executed {
                    Instruction::MoveLeft => before.left(),
                    Instruction::MoveRight => before.right(),
                    _ => before,
                };
                prop_assert_eq!(step.position, expected);
            }
        }

        #[test]
        fn branch_advances_counter_by_one_or_two(
            tokens in tokens(),
            start in -5i64..5,
            marker in -3i64..3,
        ) {
            let mut a = agent(start, &tokens.iter().map(String::as_str).collect::<Vec<_>>());
            let len = a.program().len();
            for _ in 0..40 {
                let before = a.position();
                let Ok(step) = a.advance(Position(marker)) else { break };
                if step.executed == Instruction::BranchIfMarker {
                    let delta = if before == Position(marker) { 1 } else { 2 };
                    let expected = if step.at + delta >= len { 0 } else { step.at + delta };
                    prop_assert_eq!(step.counter, expected);
                }
            }
        }

        #[test]
        fn cycle_reported_only_when_no_timed_instruction_is_reachable(
            tokens in tokens(),
            marker in -3i64..3,
        ) {
            let mut a = agent(0, &tokens.iter().map(String::as_str).collect::<Vec<_>>());
            for _ in 0..20 {
                let from = a.counter();
                let reachable = reaches_timed_instruction(a.program(), from);
                match a.advance(Position(marker)) {
                    Ok(_) => prop_assert!(reachable),
                    Err(_) => {
                        prop_assert!(!reachable);
                        break;
                    }
                }
            }
        }
    }
}
