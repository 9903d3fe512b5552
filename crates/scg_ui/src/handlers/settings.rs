//! Settings page handlers.

use crate::app::{App, Page};

impl App {
    /// Open the settings page with edit buffers seeded from the config.
    pub fn open_settings(&mut self) {
        let settings = self.config.settings();
        self.pending_endpoint = settings.server.endpoint.clone();
        self.pending_autoscroll = settings.logging.autoscroll;
        self.page = Page::Settings;
    }

    /// Apply the edit buffers and write the config to disk.
    pub fn save_settings(&mut self) {
        let endpoint = self.pending_endpoint.trim().to_string();
        if endpoint.is_empty() {
            self.append_log("[WARNING] Endpoint cannot be empty");
            return;
        }

        {
            let settings = self.config.settings_mut();
            settings.server.endpoint = endpoint;
            settings.logging.autoscroll = self.pending_autoscroll;
        }

        match self.config.save() {
            Ok(()) => {
                let endpoint = self.config.settings().server.endpoint.clone();
                self.append_log("Settings saved.");
                self.append_log(&format!("Analysis endpoint: {endpoint}"));
            }
            Err(e) => self.append_log(&format!("[ERROR] Failed to save settings: {e}")),
        }

        self.page = Page::Main;
    }

    /// Discard the edit buffers.
    pub fn close_settings(&mut self) {
        self.page = Page::Main;
    }
}
