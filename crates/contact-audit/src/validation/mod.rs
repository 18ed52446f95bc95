//! Anomaly detection over loaded rows.

mod anomaly;
mod classifier;

pub use anomaly::{AnomalyKind, ContactHit, DuplicateGroup, MalformedRow};
pub use classifier::{Classification, Classifier, ClassifierConfig, is_numeric_id};
