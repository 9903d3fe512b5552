//! SCG Core - Backend client logic for Swing Coach GUI
//!
//! This crate contains everything that does not touch the screen: the wire
//! types returned by the analysis service, the HTTP client that uploads the
//! two swing videos, the session state machine the UI drives, configuration,
//! and logging setup. It can be used by the GUI application or a CLI tool.

pub mod api;
pub mod config;
pub mod logging;
pub mod models;
pub mod session;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
