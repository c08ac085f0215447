//! Seller application lifecycle: statuses, admin review actions, and the
//! append-only timeline value object.
//!
//! The transition function is deliberately permissive: any admin action is
//! accepted regardless of the current status and simply appends to history.
//! Callers are expected to log irregular transitions (e.g. approving an
//! already-approved application); provisioning side effects are made
//! idempotent at the storage layer.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// ApplicationStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a seller application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    InReview,
    NeedsClarification,
    ClarificationSubmitted,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// The canonical wire/storage string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::InReview => "in_review",
            ApplicationStatus::NeedsClarification => "needs_clarification",
            ApplicationStatus::ClarificationSubmitted => "clarification_submitted",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Approved and rejected are terminal; no further seller action applies.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Approved | ApplicationStatus::Rejected
        )
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(ApplicationStatus::Submitted),
            "in_review" => Ok(ApplicationStatus::InReview),
            "needs_clarification" => Ok(ApplicationStatus::NeedsClarification),
            "clarification_submitted" => Ok(ApplicationStatus::ClarificationSubmitted),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(CoreError::Validation(format!(
                "Unknown application status '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReviewAction
// ---------------------------------------------------------------------------

/// An admin action on a seller application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    /// Mark the application as being actively reviewed.
    Review,
    /// Approve and provision the seller.
    Approve,
    /// Reject with a required reason.
    Reject,
    /// Request clarification from the seller with a required question.
    Clarify,
}

impl ReviewAction {
    /// The status the application moves to when this action is applied.
    pub fn target_status(self) -> ApplicationStatus {
        match self {
            ReviewAction::Review => ApplicationStatus::InReview,
            ReviewAction::Approve => ApplicationStatus::Approved,
            ReviewAction::Reject => ApplicationStatus::Rejected,
            ReviewAction::Clarify => ApplicationStatus::NeedsClarification,
        }
    }

    /// Reject and clarify carry a message to the seller and refuse an empty one.
    pub fn requires_message(self) -> bool {
        matches!(self, ReviewAction::Reject | ReviewAction::Clarify)
    }

    /// The timeline entry message for this action.
    ///
    /// Clarification requests always record the fixed string -- the admin's
    /// actual question goes into the message thread, not the audit trail.
    /// Rejections record the reason; approvals record the admin's note when
    /// one was given.
    pub fn timeline_message(self, admin_message: Option<&str>) -> String {
        match self {
            ReviewAction::Review => "Application under review".to_string(),
            ReviewAction::Approve => admin_message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or("Application approved")
                .to_string(),
            ReviewAction::Reject => admin_message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or("Application rejected")
                .to_string(),
            ReviewAction::Clarify => "Clarification requested".to_string(),
        }
    }
}

impl std::str::FromStr for ReviewAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "review" => Ok(ReviewAction::Review),
            "approve" => Ok(ReviewAction::Approve),
            "reject" => Ok(ReviewAction::Reject),
            "clarify" => Ok(ReviewAction::Clarify),
            other => Err(CoreError::Validation(format!(
                "Unknown action '{other}'. Must be one of: review, approve, reject, clarify"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// Timeline message recorded when a seller submits their application.
pub const TIMELINE_SUBMITTED: &str = "Application submitted";

/// Timeline message recorded when a seller answers a clarification request.
pub const TIMELINE_CLARIFICATION_SUBMITTED: &str = "Clarification submitted";

/// A single status-change event in an application's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub status: ApplicationStatus,
    pub timestamp: Timestamp,
    pub message: String,
}

impl TimelineEvent {
    pub fn new(status: ApplicationStatus, timestamp: Timestamp, message: impl Into<String>) -> Self {
        Self {
            status,
            timestamp,
            message: message.into(),
        }
    }
}

/// Append-only, chronologically ordered list of [`TimelineEvent`]s.
///
/// Exposes no mutation besides [`push`](Timeline::push), so history can grow
/// but never be rewritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline(Vec<TimelineEvent>);

impl Timeline {
    /// A fresh timeline holding only the initial submission event.
    pub fn submitted(at: Timestamp) -> Self {
        Self(vec![TimelineEvent::new(
            ApplicationStatus::Submitted,
            at,
            TIMELINE_SUBMITTED,
        )])
    }

    pub fn push(&mut self, event: TimelineEvent) {
        self.0.push(event);
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recent event, if any.
    pub fn latest(&self) -> Option<&TimelineEvent> {
        self.0.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            ApplicationStatus::Submitted,
            ApplicationStatus::InReview,
            ApplicationStatus::NeedsClarification,
            ApplicationStatus::ClarificationSubmitted,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
        ] {
            let parsed: ApplicationStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = "pending".parse::<ApplicationStatus>();
        assert!(result.is_err());
    }

    #[test]
    fn terminal_statuses() {
        assert!(ApplicationStatus::Approved.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(!ApplicationStatus::Submitted.is_terminal());
        assert!(!ApplicationStatus::NeedsClarification.is_terminal());
    }

    #[test]
    fn clarify_timeline_message_ignores_admin_message() {
        let msg = ReviewAction::Clarify.timeline_message(Some("Please share your GSTIN"));
        assert_eq!(msg, "Clarification requested");
    }

    #[test]
    fn approve_timeline_message_prefers_admin_message() {
        assert_eq!(
            ReviewAction::Approve.timeline_message(Some("Welcome aboard")),
            "Welcome aboard"
        );
        assert_eq!(
            ReviewAction::Approve.timeline_message(None),
            "Application approved"
        );
        assert_eq!(
            ReviewAction::Approve.timeline_message(Some("   ")),
            "Application approved"
        );
    }

    #[test]
    fn reject_and_clarify_require_message() {
        assert!(ReviewAction::Reject.requires_message());
        assert!(ReviewAction::Clarify.requires_message());
        assert!(!ReviewAction::Approve.requires_message());
        assert!(!ReviewAction::Review.requires_message());
    }

    #[test]
    fn timeline_appends_preserve_order() {
        let mut timeline = Timeline::submitted(Utc::now());
        assert_eq!(timeline.len(), 1);

        timeline.push(TimelineEvent::new(
            ApplicationStatus::InReview,
            Utc::now(),
            "Application under review",
        ));
        timeline.push(TimelineEvent::new(
            ApplicationStatus::Approved,
            Utc::now(),
            "Application approved",
        ));

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.events()[0].status, ApplicationStatus::Submitted);
        assert_eq!(
            timeline.latest().unwrap().status,
            ApplicationStatus::Approved
        );
    }

    #[test]
    fn timeline_serializes_as_plain_array() {
        let timeline = Timeline::submitted(Utc::now());
        let json = serde_json::to_value(&timeline).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["status"], "submitted");
        assert_eq!(json[0]["message"], TIMELINE_SUBMITTED);
    }
}
