//! Non-destructive correction proposals.

mod engine;
mod operations;

pub use engine::TransformEngine;
pub use operations::{DryRun, FieldChange, ProposedRow, ReviewReason, ReviewReasons};
