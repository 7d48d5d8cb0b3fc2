//! Department routing for patient symptom descriptions
//!
//! A static keyword table plus an overlap-scoring classifier. Invoked by
//! the dialog state machine once symptoms are collected.

mod classifier;
pub mod departments;

pub use classifier::{classify, respond, Recommendation, PEDIATRIC_AGE_CUTOFF};
