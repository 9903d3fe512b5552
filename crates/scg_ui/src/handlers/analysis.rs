//! Analysis submission handlers.

use std::path::PathBuf;

use iced::Task;

use scg_core::api::ApiClient;
use scg_core::config::ConfigSection;
use scg_core::models::{AnalysisReport, NO_FAULTS_MESSAGE};
use scg_core::session::SessionEvent;

use crate::app::{App, Message};

impl App {
    /// Start the upload. Spawns exactly one request; the guard at the top
    /// makes a second submission a no-op even if it arrives while the form
    /// is disabled.
    pub fn start_analysis(&mut self) -> Task<Message> {
        if self.dtl_path.is_empty() || self.fo_path.is_empty() {
            self.append_log("[WARNING] Please select both the DTL and FO videos");
            return Task::none();
        }
        if !self.session.can_submit() {
            self.append_log("[WARNING] An analysis is already in progress");
            return Task::none();
        }

        self.session.apply(SessionEvent::Submit);
        self.append_log("=== Starting Analysis ===");
        self.append_log(&format!("DTL: {}", self.dtl_path));
        self.append_log(&format!("FO:  {}", self.fo_path));
        self.remember_paths();

        let endpoint = self.config.settings().server.endpoint.clone();
        let dtl = PathBuf::from(&self.dtl_path);
        let fo = PathBuf::from(&self.fo_path);

        Task::perform(
            async move {
                ApiClient::new(endpoint)
                    .analyze_swing(&dtl, &fo)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::AnalysisFinished,
        )
    }

    /// Handle the settled request, success or failure.
    pub fn handle_analysis_finished(&mut self, result: Result<AnalysisReport, String>) {
        match result {
            Ok(report) => {
                if report.has_faults() {
                    for fault in &report.diagnosed_faults {
                        self.append_log(&format!("Fault: {} - {}", fault.name, fault.detail));
                    }
                } else {
                    self.append_log(NO_FAULTS_MESSAGE);
                }
                self.session.apply(SessionEvent::Succeed(report));
                self.append_log("=== Analysis Complete ===");
            }
            Err(message) => {
                tracing::error!("Analysis failed: {message}");
                self.append_log(&format!("[ERROR] {message}"));
                self.session.apply(SessionEvent::Fail(message));
            }
        }
    }

    /// Handle the startup health probe result.
    pub fn handle_backend_checked(&mut self, result: Result<String, String>) {
        match result {
            Ok(message) => self.append_log(&format!("Backend: {message}")),
            Err(message) => {
                self.append_log(&format!("[WARNING] Backend not reachable: {message}"))
            }
        }
    }

    /// Persist the current video paths so the next session restores them.
    fn remember_paths(&mut self) {
        let settings = self.config.settings_mut();
        settings.paths.last_dtl_path = self.dtl_path.clone();
        settings.paths.last_fo_path = self.fo_path.clone();

        if let Err(e) = self.config.update_section(ConfigSection::Paths) {
            tracing::warn!("Failed to remember video paths: {e}");
        }
    }
}
