//! Symptom-to-department scoring
//!
//! Scores every department by keyword overlap with the visitor's
//! normalized symptom tokens and picks the strict maximum. A token
//! scores a hit when it appears as a substring of the department's
//! concatenated keyword text. Substring matching tolerates
//! lemmatization drift and multi-word keyword phrases, and a short
//! token can spuriously match inside an unrelated phrase; do not
//! tighten this to exact token matching without changing the routing
//! behavior knowingly.

use super::departments::{pediatric, DepartmentProfile, BOOKING_HTML, CLOSING_HTML, DEPARTMENTS};
use crate::text::normalize;

/// Age below which every visitor is routed to Child Health.
pub const PEDIATRIC_AGE_CUTOFF: u32 = 16;

/// Outcome of classifying one symptom description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// Under-age override; symptom content is ignored.
    Pediatric,
    /// Best-scoring department.
    Department(&'static DepartmentProfile),
    /// No department scored above zero.
    Unclear,
}

impl Recommendation {
    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Pediatric => "pediatric",
            Recommendation::Department(dept) => dept.name,
            Recommendation::Unclear => "unclear",
        }
    }

    /// Render the user-facing reply, links included.
    pub fn render(&self) -> String {
        match self {
            Recommendation::Pediatric => format!(
                "Based on your age, you should visit the Child Health department. {}.{BOOKING_HTML}{CLOSING_HTML}",
                pediatric().info_html
            ),
            Recommendation::Department(dept) => format!(
                "Based on your description, the {} department might be most suited for your needs. {}{BOOKING_HTML}{CLOSING_HTML}",
                dept.name, dept.info_html
            ),
            Recommendation::Unclear => {
                "I'm not sure which department is best suited. Can you describe your symptoms in more detail?".to_string()
            }
        }
    }
}

/// Map a symptom description and the visitor's age to a recommendation.
///
/// Pure: identical inputs always yield the identical recommendation.
pub fn classify(symptom_text: &str, age: u32) -> Recommendation {
    if age < PEDIATRIC_AGE_CUTOFF {
        return Recommendation::Pediatric;
    }

    let tokens = normalize(symptom_text);
    let scores = score_departments(&tokens);

    // Strict maximum keeps the earliest department on ties.
    let mut best = 0;
    let mut best_score = 0;
    for (idx, score) in scores.iter().enumerate() {
        if *score > best_score {
            best = idx;
            best_score = *score;
        }
    }

    if best_score == 0 {
        Recommendation::Unclear
    } else {
        Recommendation::Department(&DEPARTMENTS[best])
    }
}

/// Classify and render in one step; the state machine's symptoms branch
/// calls this.
pub fn respond(symptom_text: &str, age: u32) -> String {
    let recommendation = classify(symptom_text, age);
    tracing::info!(outcome = recommendation.label(), age, "symptoms classified");
    recommendation.render()
}

/// Per-department hit counts, in department order. Normalization runs on
/// the whole input, so comma-separated symptoms score as a flat token
/// multiset; duplicate tokens count each time.
pub(crate) fn score_departments(tokens: &[String]) -> Vec<usize> {
    DEPARTMENTS
        .iter()
        .map(|dept| {
            let text = dept.keyword_text();
            tokens.iter().filter(|token| text.contains(token.as_str())).count()
        })
        .collect()
}
