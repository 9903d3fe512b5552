//! Application state and message dispatch.
//!
//! The `App` struct is the controller: it owns the config, the session
//! state machine, the two video paths, and the log panel text. `update`
//! routes messages to the handler methods in `crate::handlers`.

use std::path::PathBuf;

use iced::event::{self, Event};
use iced::{window, Element, Subscription, Task, Theme};

use scg_core::api::ApiClient;
use scg_core::config::ConfigManager;
use scg_core::models::{AnalysisReport, SwingView};
use scg_core::session::SessionState;

use crate::views;

/// Pages the single window can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Upload form, results, and log panel.
    Main,
    /// Endpoint and logging settings.
    Settings,
}

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // Upload form
    VideoPathChanged(SwingView, String),
    BrowseVideo(SwingView),
    FileSelected(SwingView, Option<PathBuf>),
    FileDropped(PathBuf),
    AnalyzeSwing,

    /// The one settle point for the analysis request; both outcomes land
    /// here so the in-flight flag always clears.
    AnalysisFinished(Result<AnalysisReport, String>),

    /// Startup health probe result.
    BackendChecked(Result<String, String>),

    // Settings page
    OpenSettings,
    EndpointChanged(String),
    AutoscrollToggled(bool),
    SaveSettings,
    CancelSettings,
}

/// Main application state.
pub struct App {
    pub config: ConfigManager,
    pub session: SessionState,

    /// Down-the-line video path as shown in the form.
    pub dtl_path: String,
    /// Face-on video path as shown in the form.
    pub fo_path: String,

    pub page: Page,

    // Settings page edit buffers (applied on save)
    pub pending_endpoint: String,
    pub pending_autoscroll: bool,

    /// In-app log panel content.
    pub log_text: String,
}

impl App {
    pub fn new(config: ConfigManager) -> (Self, Task<Message>) {
        let settings = config.settings();
        let dtl_path = settings.paths.last_dtl_path.clone();
        let fo_path = settings.paths.last_fo_path.clone();
        let pending_endpoint = settings.server.endpoint.clone();
        let pending_autoscroll = settings.logging.autoscroll;
        let endpoint = settings.server.endpoint.clone();

        let mut app = Self {
            config,
            session: SessionState::new(),
            dtl_path,
            fo_path,
            page: Page::Main,
            pending_endpoint,
            pending_autoscroll,
            log_text: String::new(),
        };

        app.append_log(&format!(
            "Swing Coach GUI started. Core version: {}",
            scg_core::version()
        ));
        app.append_log(&format!("Analysis endpoint: {endpoint}"));

        // Probe the backend once at startup so the log shows whether the
        // analysis service is up before the first upload.
        let probe = Task::perform(
            async move {
                ApiClient::new(endpoint)
                    .health_check()
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::BackendChecked,
        );

        (app, probe)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::VideoPathChanged(view, path) => {
                self.set_video_path(view, path);
                Task::none()
            }
            Message::BrowseVideo(view) => self.browse_video(view),
            Message::FileSelected(view, path) => {
                self.handle_file_selected(view, path);
                Task::none()
            }
            Message::FileDropped(path) => {
                self.handle_file_dropped(path);
                Task::none()
            }
            Message::AnalyzeSwing => self.start_analysis(),
            Message::AnalysisFinished(result) => {
                self.handle_analysis_finished(result);
                Task::none()
            }
            Message::BackendChecked(result) => {
                self.handle_backend_checked(result);
                Task::none()
            }
            Message::OpenSettings => {
                self.open_settings();
                Task::none()
            }
            Message::EndpointChanged(value) => {
                self.pending_endpoint = value;
                Task::none()
            }
            Message::AutoscrollToggled(value) => {
                self.pending_autoscroll = value;
                Task::none()
            }
            Message::SaveSettings => {
                self.save_settings();
                Task::none()
            }
            Message::CancelSettings => {
                self.close_settings();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self.page {
            Page::Main => views::main_window(self),
            Page::Settings => views::settings_page(self),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(handle_event)
    }

    /// Add a timestamped line to the in-app log panel.
    pub fn append_log(&mut self, message: &str) {
        use std::fmt::Write;
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        writeln!(&mut self.log_text, "[{}] {}", timestamp, message).ok();
    }
}

fn handle_event(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}
