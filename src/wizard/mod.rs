//! Transaction wizard core
//!
//! The six-step wizard as an explicit state machine: a step cursor, a draft
//! changed only through the reducer, guarded transitions and the summary bar
//! that mirrors the draft at every step.

pub mod action;
pub mod controller;
pub mod gate;
pub mod reducer;
pub mod step;
pub mod summary;

pub use action::DraftAction;
pub use controller::{FinalizeOutcome, StepOutcome, WizardController, DEFAULT_REDIRECT_DELAY};
pub use gate::{missing_fields, GatePolicy};
pub use reducer::reduce;
pub use step::WizardStep;
pub use summary::{SummaryBar, SummaryField, NOT_AVAILABLE, NOT_SET};
