//! Proposed rows, review reasons and the dry-run result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::Header;

/// Why a proposed row needs a human look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewReason {
    /// An email was moved out of `contactName` into `contactEmail`.
    MovedEmailFromName,
    /// `facilityId` is all digits. Advisory only; nothing is changed.
    NumericFacilityId,
}

impl ReviewReason {
    /// The tag as written in the `needsReview` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewReason::MovedEmailFromName => "movedEmailFromName",
            ReviewReason::NumericFacilityId => "numericFacilityId",
        }
    }
}

impl fmt::Display for ReviewReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered review reasons for one row, rendered `;`-joined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewReasons(Vec<ReviewReason>);

impl ReviewReasons {
    /// No reasons.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a reason, keeping detection order.
    pub fn push(&mut self, reason: ReviewReason) {
        if !self.0.contains(&reason) {
            self.0.push(reason);
        }
    }

    /// Whether a reason is present.
    pub fn contains(&self, reason: ReviewReason) -> bool {
        self.0.contains(&reason)
    }

    /// Whether no reason was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reasons in detection order.
    pub fn iter(&self) -> impl Iterator<Item = &ReviewReason> {
        self.0.iter()
    }
}

impl fmt::Display for ReviewReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, reason) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(";")?;
            }
            f.write_str(reason.as_str())?;
        }
        Ok(())
    }
}

/// Audit information for a single field change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    /// Field that changed.
    pub column: String,
    /// Value before the proposal.
    pub original_value: String,
    /// Proposed value.
    pub new_value: String,
    /// Reason for the change.
    pub reason: ReviewReason,
}

/// A data row rewritten against the extended header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedRow {
    /// Source line number.
    pub line: usize,
    /// Original values, padded (or cut) to the source header's length.
    pub original: Vec<String>,
    /// Proposed values, one per extended header field.
    pub values: Vec<String>,
    /// Why the row needs review.
    pub reasons: ReviewReasons,
    /// Field-level edits behind the proposal.
    pub changes: Vec<FieldChange>,
}

impl ProposedRow {
    /// Whether any anomaly was found for this row.
    pub fn is_changed(&self) -> bool {
        !self.reasons.is_empty()
    }
}

/// Result of a dry run over a whole dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DryRun {
    /// The source header.
    pub header: Header,
    /// The extended header proposed rows follow.
    pub proposed_header: Header,
    /// One proposed row per data row, in source order.
    pub rows: Vec<ProposedRow>,
}

impl DryRun {
    /// Rows with at least one review reason.
    pub fn changed(&self) -> impl Iterator<Item = &ProposedRow> {
        self.rows.iter().filter(|r| r.is_changed())
    }

    /// Number of changed rows.
    pub fn changed_count(&self) -> usize {
        self.changed().count()
    }

    /// Number of rows carrying a given reason.
    pub fn reason_count(&self, reason: ReviewReason) -> usize {
        self.rows.iter().filter(|r| r.reasons.contains(reason)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasons_join_in_order() {
        let mut reasons = ReviewReasons::new();
        reasons.push(ReviewReason::MovedEmailFromName);
        reasons.push(ReviewReason::NumericFacilityId);

        assert_eq!(reasons.to_string(), "movedEmailFromName;numericFacilityId");
    }

    #[test]
    fn test_empty_reasons_render_empty() {
        assert_eq!(ReviewReasons::new().to_string(), "");
    }

    #[test]
    fn test_reasons_do_not_repeat() {
        let mut reasons = ReviewReasons::new();
        reasons.push(ReviewReason::NumericFacilityId);
        reasons.push(ReviewReason::NumericFacilityId);

        assert_eq!(reasons.to_string(), "numericFacilityId");
    }
}
