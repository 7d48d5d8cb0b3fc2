//! Intake dialog state machine
//!
//! A pure transition function over an explicit stage enum: one message
//! in, the next stage and a reply out. Session bookkeeping lives in the
//! session store; department scoring lives in the triage module.

mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use state::{Sex, Stage};
pub use transition::{transition, TransitionResult};
