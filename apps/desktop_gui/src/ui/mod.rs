//! UI layer for the desktop GUI: app shell, article views, and the star widget.

pub mod app;
pub mod widgets;

pub use app::{BlogApp, StartupConfig};
