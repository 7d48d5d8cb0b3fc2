//! Pure dialog transition function
//!
//! Given the current stage and one raw visitor message, produces the
//! next stage and the reply. No I/O and no shared state: identical
//! inputs always produce identical outputs. Invalid input never fails,
//! it re-prompts at the same stage.

use super::state::{Sex, Stage};
use crate::triage;

const STUDENT_REPLY: &str = "Great! As a student, you can visit <a href='https://www.cmch-vellore.edu/Content.aspx?pid=P160802002'>CMC Vellore Student portal</a>. Thank you for visiting CMC!";

const JOB_SEEKER_REPLY: &str = "Excellent! I can assist you with your job search. Here's a link <a href='https://www.cmch-vellore.edu/JobVacancy.aspx?jtype=ALL'>CMC Vellore Jobs & Training</a>. Thank you for visiting CMC!";

const ASK_SEX: &str = "Please provide your sex (Male/Female) to proceed.";

const CLARIFY_ROLE: &str = "I apologize, but I didn't understand your response. Could you please clarify if you are a Student, Job Seeker, or Patient?";

const ASK_AGE: &str = "Thank you! Now, please enter your age:";

const REPROMPT_SEX: &str = "I apologize, but I didn't understand your response. Please enter either 'Male' or 'Female' to proceed.";

const ASK_SYMPTOMS: &str = "Thank you! Please describe your main symptoms (separated by commas):";

const REPROMPT_AGE: &str = "I apologize, but I didn't understand your response. Please enter a valid age.";

const SESSION_DONE: &str = "This session is complete. If you need further assistance, please start a new session. Thank you for visiting CMC!";

/// Visitor role detected on first contact. Not persisted; it only
/// shapes the immediate reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Student,
    JobSeeker,
    Patient,
}

/// Detection order is student, job seeker, patient; first match wins.
fn detect_role(message: &str) -> Option<Role> {
    if message.contains("student") {
        Some(Role::Student)
    } else if message.contains("job seeker") {
        Some(Role::JobSeeker)
    } else if message.contains("patient") {
        Some(Role::Patient)
    } else {
        None
    }
}

/// "female" must be checked first: every message containing it also
/// contains "male" as a substring.
fn detect_sex(message: &str) -> Option<Sex> {
    if message.contains("female") {
        Some(Sex::Female)
    } else if message.contains("male") {
        Some(Sex::Male)
    } else {
        None
    }
}

/// Result of feeding one message to the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_stage: Stage,
    pub reply: String,
}

fn stay(stage: Stage, reply: &str) -> TransitionResult {
    TransitionResult {
        new_stage: stage,
        reply: reply.to_string(),
    }
}

fn advance(new_stage: Stage, reply: &str) -> TransitionResult {
    TransitionResult {
        new_stage,
        reply: reply.to_string(),
    }
}

/// Advance the dialog by one message.
///
/// Matching is case-insensitive substring containment on the raw
/// message, so "I am a patient" matches "patient".
pub fn transition(stage: Stage, message: &str) -> TransitionResult {
    let text = message.to_lowercase();

    match stage {
        Stage::Initial => match detect_role(&text) {
            Some(Role::Student) => stay(stage, STUDENT_REPLY),
            Some(Role::JobSeeker) => stay(stage, JOB_SEEKER_REPLY),
            Some(Role::Patient) => advance(Stage::AwaitingSex, ASK_SEX),
            None => stay(stage, CLARIFY_ROLE),
        },

        Stage::AwaitingSex => match detect_sex(&text) {
            Some(sex) => advance(Stage::AwaitingAge { sex }, ASK_AGE),
            None => stay(stage, REPROMPT_SEX),
        },

        Stage::AwaitingAge { sex } => match text.trim().parse::<u32>() {
            Ok(age) => advance(Stage::AwaitingSymptoms { sex, age }, ASK_SYMPTOMS),
            Err(_) => stay(stage, REPROMPT_AGE),
        },

        Stage::AwaitingSymptoms { sex, age } => TransitionResult {
            new_stage: Stage::Done { sex, age },
            reply: triage::respond(&text, age),
        },

        Stage::Done { .. } => stay(stage, SESSION_DONE),
    }
}
