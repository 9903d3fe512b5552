//! Data models shared between the API client and the UI.

mod report;

pub use report::{
    AnalysisReport, MetricRow, SwingFault, SwingMetrics, SwingView, NO_FAULTS_MESSAGE,
};
