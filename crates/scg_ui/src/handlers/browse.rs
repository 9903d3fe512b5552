//! File browsing and drag-drop handlers.

use std::path::PathBuf;

use iced::Task;

use scg_core::models::SwingView;

use crate::app::{App, Message};

impl App {
    /// Browse for one of the swing videos.
    pub fn browse_video(&self, view: SwingView) -> Task<Message> {
        let title = format!("Select {}", view.label());

        Task::perform(
            async move {
                let path = rfd::AsyncFileDialog::new()
                    .set_title(&title)
                    .add_filter(
                        "Video Files",
                        &["mp4", "mov", "avi", "mkv", "webm", "m4v"],
                    )
                    .add_filter("All Files", &["*"])
                    .pick_file()
                    .await
                    .map(|f| f.path().to_path_buf());
                (view, path)
            },
            |(view, path)| Message::FileSelected(view, path),
        )
    }

    /// Handle a path typed into one of the form inputs.
    pub fn set_video_path(&mut self, view: SwingView, path: String) {
        match view {
            SwingView::DownTheLine => self.dtl_path = path,
            SwingView::FaceOn => self.fo_path = path,
        }
    }

    /// Handle a file picked in the browse dialog.
    pub fn handle_file_selected(&mut self, view: SwingView, path: Option<PathBuf>) {
        if let Some(p) = path {
            let path_str = p.to_string_lossy().to_string();
            self.append_log(&format!("{}: {}", view.label(), path_str));
            self.set_video_path(view, path_str);
        }
    }

    /// Handle a file dropped onto the window. Drops fill the first empty
    /// slot (DTL before FO); with both slots filled the drop is ignored.
    pub fn handle_file_dropped(&mut self, path: PathBuf) {
        if self.session.in_flight {
            return;
        }

        match next_drop_slot(&self.dtl_path, &self.fo_path) {
            Some(view) => {
                let path_str = path.to_string_lossy().to_string();
                self.append_log(&format!("{}: {} (dropped)", view.label(), path_str));
                self.set_video_path(view, path_str);
            }
            None => {
                self.append_log("[WARNING] Both videos are already set; clear a path first");
            }
        }
    }
}

/// Pick which form slot a dropped file should fill.
fn next_drop_slot(dtl_path: &str, fo_path: &str) -> Option<SwingView> {
    if dtl_path.is_empty() {
        Some(SwingView::DownTheLine)
    } else if fo_path.is_empty() {
        Some(SwingView::FaceOn)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_fill_dtl_then_fo() {
        assert_eq!(next_drop_slot("", ""), Some(SwingView::DownTheLine));
        assert_eq!(next_drop_slot("/a.mp4", ""), Some(SwingView::FaceOn));
        assert_eq!(next_drop_slot("/a.mp4", "/b.mp4"), None);
    }
}
