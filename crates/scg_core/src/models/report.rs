//! Wire types for the analysis service response.
//!
//! The backend returns a JSON report with a list of diagnosed faults and a
//! fixed record of four biomechanical measurements. Field names here must
//! match the backend's JSON keys exactly.

use serde::{Deserialize, Serialize};

/// Affirmative message shown when the fault list is empty.
pub const NO_FAULTS_MESSAGE: &str = "No major faults detected. Good swing!";

/// The two camera angles a submission requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingView {
    /// Down-the-line: camera behind the player, looking along the target line.
    DownTheLine,
    /// Face-on: camera in front of the player.
    FaceOn,
}

impl SwingView {
    /// Multipart field name the backend expects for this view.
    pub fn field_name(&self) -> &'static str {
        match self {
            SwingView::DownTheLine => "video_file_dtl",
            SwingView::FaceOn => "video_file_fo",
        }
    }

    /// Human-readable label for form rows and dialogs.
    pub fn label(&self) -> &'static str {
        match self {
            SwingView::DownTheLine => "Down-the-Line (DTL) Video",
            SwingView::FaceOn => "Face-On (FO) Video",
        }
    }
}

/// Full analysis report returned on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Diagnosed swing faults; may be empty. Fault names are unique within
    /// a report and serve as display keys.
    pub diagnosed_faults: Vec<SwingFault>,
    /// The four fixed biomechanical measurements.
    pub metrics: SwingMetrics,
}

impl AnalysisReport {
    /// Whether any faults were diagnosed.
    pub fn has_faults(&self) -> bool {
        !self.diagnosed_faults.is_empty()
    }
}

/// A single diagnosed biomechanical issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingFault {
    /// Short fault name (e.g. "Early Extension").
    pub name: String,
    /// Free-text explanation from the diagnosis engine.
    pub detail: String,
}

/// The four fixed metrics computed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingMetrics {
    /// Spine angle change between address and impact, in degrees.
    pub spine_angle_change_at_impact: f64,
    /// Maximum lateral head movement during the backswing, in centimeters.
    pub max_head_sway_cm: f64,
    /// Backswing length expressed as the lead arm angle, in degrees.
    pub backswing_length_angle: f64,
    /// Lead arm angle at impact, in degrees.
    pub lead_arm_angle_impact: f64,
}

/// One formatted row of the metrics table.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
}

impl SwingMetrics {
    /// Table rows in display order, values formatted to one decimal place
    /// with their unit suffix attached.
    pub fn rows(&self) -> [MetricRow; 4] {
        [
            MetricRow {
                label: "Spine Angle Change at Impact",
                value: format_degrees(self.spine_angle_change_at_impact),
            },
            MetricRow {
                label: "Max Head Sway in Backswing",
                value: format_centimeters(self.max_head_sway_cm),
            },
            MetricRow {
                label: "Backswing Length (Arm Angle)",
                value: format_degrees(self.backswing_length_angle),
            },
            MetricRow {
                label: "Lead Arm Angle at Impact",
                value: format_degrees(self.lead_arm_angle_impact),
            },
        ]
    }
}

fn format_degrees(value: f64) -> String {
    format!("{value:.1}°")
}

fn format_centimeters(value: f64) -> String {
    format!("{value:.1} cm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_backend() {
        assert_eq!(SwingView::DownTheLine.field_name(), "video_file_dtl");
        assert_eq!(SwingView::FaceOn.field_name(), "video_file_fo");
    }

    #[test]
    fn metrics_format_to_one_decimal_with_units() {
        let metrics = SwingMetrics {
            spine_angle_change_at_impact: 12.34,
            max_head_sway_cm: 3.456,
            backswing_length_angle: 95.0,
            lead_arm_angle_impact: 40.06,
        };

        let rows = metrics.rows();
        assert_eq!(rows[0].value, "12.3°");
        assert_eq!(rows[1].value, "3.5 cm");
        assert_eq!(rows[2].value, "95.0°");
        assert_eq!(rows[3].value, "40.1°");
    }

    #[test]
    fn metric_labels_are_stable() {
        let metrics = SwingMetrics {
            spine_angle_change_at_impact: 0.0,
            max_head_sway_cm: 0.0,
            backswing_length_angle: 0.0,
            lead_arm_angle_impact: 0.0,
        };
        let labels: Vec<_> = metrics.rows().iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "Spine Angle Change at Impact",
                "Max Head Sway in Backswing",
                "Backswing Length (Arm Angle)",
                "Lead Arm Angle at Impact",
            ]
        );
    }

    #[test]
    fn report_decodes_from_backend_json() {
        let body = r#"{
            "diagnosed_faults": [
                {"name": "Early Extension", "detail": "Hips move toward the ball through impact."}
            ],
            "metrics": {
                "spine_angle_change_at_impact": 12.34,
                "max_head_sway_cm": 3.456,
                "backswing_length_angle": 95.0,
                "lead_arm_angle_impact": 40.05
            }
        }"#;

        let report: AnalysisReport = serde_json::from_str(body).unwrap();
        assert!(report.has_faults());
        assert_eq!(report.diagnosed_faults[0].name, "Early Extension");
        assert_eq!(report.metrics.backswing_length_angle, 95.0);
    }

    #[test]
    fn report_decodes_empty_fault_list() {
        let body = r#"{
            "diagnosed_faults": [],
            "metrics": {
                "spine_angle_change_at_impact": 1.0,
                "max_head_sway_cm": 2.0,
                "backswing_length_angle": 3.0,
                "lead_arm_angle_impact": 4.0
            }
        }"#;

        let report: AnalysisReport = serde_json::from_str(body).unwrap();
        assert!(!report.has_faults());
        assert!(report.diagnosed_faults.is_empty());
    }
}
