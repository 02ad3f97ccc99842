//! Terminal UI for kask.
//!
//! This crate provides the Ratatui-based taproom dashboard.
//!
//! ## Features
//!
//! - Tap list with the selected beer highlighted
//! - Detail, fill-level, and brewery artwork panes per keg
//! - Proportional layout that follows terminal resizes
//!
//! ## Hotkeys
//!
//! - `Down` / `j` - Next tap
//! - `Up` / `k` - Previous tap
//! - `Ctrl+C` / `q` - Quit

pub mod app;
pub mod ascii_art;
pub mod event;
pub mod layout;
pub mod navigation;
pub mod pane;
pub mod theme;
pub mod widget;


pub use app::{App, AppResult};
pub use navigation::Navigator;
pub use pane::{PaneKey, PaneKind, PaneRegistry};
