//! Intake dialog state types

use serde::{Deserialize, Serialize};

/// Visitor sex, collected on the second dialog step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Dialog stage for one visitor.
///
/// Each variant carries the fields collected up to that point, so a
/// stage past a collection step always has that field. There is no
/// "awaiting symptoms without an age" state to mishandle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Stage {
    /// First contact: asking whether the visitor is a student, job
    /// seeker, or patient.
    #[default]
    Initial,

    /// Patient confirmed; waiting for sex.
    AwaitingSex,

    /// Waiting for age.
    AwaitingAge { sex: Sex },

    /// Waiting for the symptom description.
    AwaitingSymptoms { sex: Sex, age: u32 },

    /// Intake finished; a recommendation has been delivered.
    Done { sex: Sex, age: u32 },
}

impl Stage {
    /// Check if the dialog has finished.
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done { .. })
    }

    /// Stage name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Initial => "initial",
            Stage::AwaitingSex => "awaiting_sex",
            Stage::AwaitingAge { .. } => "awaiting_age",
            Stage::AwaitingSymptoms { .. } => "awaiting_symptoms",
            Stage::Done { .. } => "done",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stages_serialize_with_type_tag() {
        assert_eq!(
            serde_json::to_value(Stage::AwaitingSex).unwrap(),
            json!({ "type": "awaiting_sex" })
        );
        assert_eq!(
            serde_json::to_value(Stage::AwaitingAge { sex: Sex::Female }).unwrap(),
            json!({ "type": "awaiting_age", "sex": "female" })
        );
        assert_eq!(
            serde_json::to_value(Stage::Done { sex: Sex::Male, age: 42 }).unwrap(),
            json!({ "type": "done", "sex": "male", "age": 42 })
        );
    }

    #[test]
    fn only_done_is_terminal() {
        assert!(Stage::Done { sex: Sex::Male, age: 20 }.is_terminal());
        assert!(!Stage::Initial.is_terminal());
        assert!(!Stage::AwaitingSymptoms { sex: Sex::Female, age: 20 }.is_terminal());
    }
}
