//! A keyboard and game-controller driven file selection dialog for the terminal.
//!
//! Embedding hosts call [`show_file_selection_dialog`] with a ratatui
//! [`Terminal`](ratatui::Terminal) and an [`EventSource`]; it blocks until the
//! user picks a file (returning its path) or leaves (returning `None`).
//! Hosts that run their own loop drive a [`Dialog`] directly.

pub mod action;
pub mod app;
pub mod components;
pub mod config;
pub mod devices;
pub mod dialog;
pub mod error;
pub mod event;
pub mod fs;
pub mod layout;
pub mod logging;
pub mod navigator;
pub mod theme;
pub mod tui;
pub mod ui;

pub use action::Action;
pub use app::{App, DialogState};
pub use dialog::{run_dialog, show_file_selection_dialog, Dialog, DialogConfig};
pub use error::{AppError, Result};
pub use event::{ControllerButton, CrosstermEvents, DeviceId, EventSource, RawInput, ScriptedEvents};
pub use fs::listing::DirectoryEntry;
pub use navigator::Navigator;
