//! Session state machine for the analysis workflow.
//!
//! The UI state is four fields: a status line, the last report, the last
//! error, and an in-flight flag. All mutation goes through
//! [`SessionState::apply`], which makes the submit/settle cycle a plain
//! state-transition function that can be tested without any rendering or
//! network code.
//!
//! Submission clears both the previous report and the previous error, so
//! after any settled request at most one of the two is set.

use crate::models::AnalysisReport;

/// Status line shown before the first submission.
pub const READY_STATUS: &str = "Ready to analyze. Please upload both video files.";

/// Status line while a request is outstanding.
pub const UPLOADING_STATUS: &str = "Uploading and processing...";

/// Status line after a successful analysis.
pub const COMPLETE_STATUS: &str = "Analysis complete!";

/// Status line after a failed analysis.
pub const FAILED_STATUS: &str = "An error occurred during analysis.";

/// Events that drive the session state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A new submission was started.
    Submit,
    /// The request settled successfully with a report.
    Succeed(AnalysisReport),
    /// The request settled with a failure message.
    Fail(String),
}

/// Transient UI state for one analysis session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Free-text status line, always shown.
    pub status: String,
    /// Report from the most recent successful request.
    pub report: Option<AnalysisReport>,
    /// Message from the most recent failed request.
    pub error: Option<String>,
    /// Whether a request is outstanding and unsettled.
    pub in_flight: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            status: READY_STATUS.to_string(),
            report: None,
            error: None,
            in_flight: false,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guard for starting a new submission. At most one request may be
    /// outstanding; callers must check this before spawning the upload
    /// rather than relying on disabled widgets alone.
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    /// Apply one event to the state.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Submit => {
                self.in_flight = true;
                self.status = UPLOADING_STATUS.to_string();
                self.report = None;
                self.error = None;
            }
            SessionEvent::Succeed(report) => {
                self.in_flight = false;
                self.status = COMPLETE_STATUS.to_string();
                self.report = Some(report);
            }
            SessionEvent::Fail(message) => {
                self.in_flight = false;
                self.status = FAILED_STATUS.to_string();
                self.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisReport, SwingMetrics};

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            diagnosed_faults: Vec::new(),
            metrics: SwingMetrics {
                spine_angle_change_at_impact: 1.0,
                max_head_sway_cm: 2.0,
                backswing_length_angle: 3.0,
                lead_arm_angle_impact: 4.0,
            },
        }
    }

    #[test]
    fn initial_state_is_idle() {
        let state = SessionState::new();
        assert_eq!(state.status, READY_STATUS);
        assert!(state.report.is_none());
        assert!(state.error.is_none());
        assert!(!state.in_flight);
        assert!(state.can_submit());
    }

    #[test]
    fn submit_sets_in_flight_and_clears_previous_outcome() {
        let mut state = SessionState::new();
        state.apply(SessionEvent::Succeed(sample_report()));
        state.apply(SessionEvent::Submit);

        assert!(state.in_flight);
        assert_eq!(state.status, UPLOADING_STATUS);
        assert!(state.report.is_none());
        assert!(state.error.is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn succeed_stores_report_and_clears_in_flight() {
        let mut state = SessionState::new();
        state.apply(SessionEvent::Submit);
        state.apply(SessionEvent::Succeed(sample_report()));

        assert!(!state.in_flight);
        assert_eq!(state.status, COMPLETE_STATUS);
        assert!(state.report.is_some());
        assert!(state.error.is_none());
    }

    #[test]
    fn fail_stores_message_and_clears_in_flight() {
        let mut state = SessionState::new();
        state.apply(SessionEvent::Submit);
        state.apply(SessionEvent::Fail("video too short".to_string()));

        assert!(!state.in_flight);
        assert_eq!(state.status, FAILED_STATUS);
        assert_eq!(state.error.as_deref(), Some("video too short"));
        assert!(state.report.is_none());
    }

    #[test]
    fn settled_state_never_holds_both_report_and_error() {
        let mut state = SessionState::new();

        state.apply(SessionEvent::Submit);
        state.apply(SessionEvent::Fail("backend offline".to_string()));
        state.apply(SessionEvent::Submit);
        state.apply(SessionEvent::Succeed(sample_report()));

        assert!(state.report.is_some());
        assert!(state.error.is_none());

        state.apply(SessionEvent::Submit);
        state.apply(SessionEvent::Fail("backend offline".to_string()));
        assert!(state.report.is_none());
        assert!(state.error.is_some());
    }
}
