//! Property-based tests for the intake dialog
//!
//! These verify the dialog's invariants across arbitrary message
//! sequences, not just the scripted happy paths.

use super::state::{Sex, Stage};
use super::transition::transition;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

/// Position in the dialog, for checking forward-only progression.
fn ordinal(stage: Stage) -> u8 {
    match stage {
        Stage::Initial => 0,
        Stage::AwaitingSex => 1,
        Stage::AwaitingAge { .. } => 2,
        Stage::AwaitingSymptoms { .. } => 3,
        Stage::Done { .. } => 4,
    }
}

fn stage_sex(stage: Stage) -> Option<Sex> {
    match stage {
        Stage::Initial | Stage::AwaitingSex => None,
        Stage::AwaitingAge { sex }
        | Stage::AwaitingSymptoms { sex, .. }
        | Stage::Done { sex, .. } => Some(sex),
    }
}

fn stage_age(stage: Stage) -> Option<u32> {
    match stage {
        Stage::Initial | Stage::AwaitingSex | Stage::AwaitingAge { .. } => None,
        Stage::AwaitingSymptoms { age, .. } | Stage::Done { age, .. } => Some(age),
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

fn arb_stage() -> impl Strategy<Value = Stage> {
    prop_oneof![
        Just(Stage::Initial),
        Just(Stage::AwaitingSex),
        arb_sex().prop_map(|sex| Stage::AwaitingAge { sex }),
        (arb_sex(), 0u32..120).prop_map(|(sex, age)| Stage::AwaitingSymptoms { sex, age }),
        (arb_sex(), 0u32..120).prop_map(|(sex, age)| Stage::Done { sex, age }),
    ]
}

fn arb_message() -> impl Strategy<Value = String> {
    // Covers role keywords, numbers, and plain noise
    prop_oneof![
        "[a-zA-Z0-9 ,.!?]{0,40}",
        Just("I am a patient".to_string()),
        Just("student".to_string()),
        Just("female".to_string()),
        Just("male".to_string()),
        Just("42".to_string()),
        Just("fever, cough".to_string()),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Invariant 1: stages only move forward, one step at a time
    #[test]
    fn prop_stage_never_regresses_or_skips(messages in proptest::collection::vec(arb_message(), 0..12)) {
        let mut stage = Stage::Initial;
        for message in messages {
            let result = transition(stage, &message);
            prop_assert!(
                ordinal(result.new_stage) >= ordinal(stage),
                "regressed: {:?} -> {:?} on {:?}",
                stage,
                result.new_stage,
                message
            );
            prop_assert!(
                ordinal(result.new_stage) <= ordinal(stage) + 1,
                "skipped: {:?} -> {:?} on {:?}",
                stage,
                result.new_stage,
                message
            );
            stage = result.new_stage;
        }
    }

    // Invariant 2: collected fields are append-only
    #[test]
    fn prop_collected_fields_are_append_only(messages in proptest::collection::vec(arb_message(), 0..12)) {
        let mut stage = Stage::Initial;
        for message in messages {
            let next = transition(stage, &message).new_stage;
            if let Some(sex) = stage_sex(stage) {
                prop_assert_eq!(stage_sex(next), Some(sex));
            }
            if let Some(age) = stage_age(stage) {
                prop_assert_eq!(stage_age(next), Some(age));
            }
            stage = next;
        }
    }

    // Invariant 3: rejected age input leaves the stage untouched, every time
    #[test]
    fn prop_invalid_age_rejection_is_idempotent(junk in "[a-zA-Z !?]{1,20}", sex in arb_sex()) {
        let stage = Stage::AwaitingAge { sex };
        let first = transition(stage, &junk);
        prop_assert_eq!(first.new_stage, stage);
        let second = transition(first.new_stage, &junk);
        prop_assert_eq!(second.new_stage, stage);
    }

    // Invariant 4: minors always get the pediatric routing
    #[test]
    fn prop_minors_get_pediatric_routing(
        symptoms in "[ -~]{0,60}",
        age in 0u32..16,
        sex in arb_sex()
    ) {
        let result = transition(Stage::AwaitingSymptoms { sex, age }, &symptoms);
        let reached_done = matches!(result.new_stage, Stage::Done { .. });
        prop_assert!(reached_done);
        prop_assert!(
            result.reply.contains("Child Health department"),
            "age {} reply: {}",
            age,
            result.reply
        );
    }

    // Invariant 5: Done is absorbing
    #[test]
    fn prop_done_is_absorbing(message in arb_message(), sex in arb_sex(), age in 0u32..120) {
        let stage = Stage::Done { sex, age };
        prop_assert_eq!(transition(stage, &message).new_stage, stage);
    }

    // Invariant 6: every message gets a non-empty reply
    #[test]
    fn prop_every_message_gets_a_reply(stage in arb_stage(), message in arb_message()) {
        prop_assert!(!transition(stage, &message).reply.is_empty());
    }

    // Invariant 7: the transition function is pure
    #[test]
    fn prop_transition_is_deterministic(stage in arb_stage(), message in arb_message()) {
        prop_assert_eq!(transition(stage, &message), transition(stage, &message));
    }
}
