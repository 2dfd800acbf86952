//! The file selection dialog: one blocking entry point plus the per-tick
//! primitives it is built from, for hosts that run their own loop.

use std::path::PathBuf;
use std::time::Duration;

use ratatui::{backend::Backend, layout::Rect, Frame, Terminal};
use tracing::{error, info, warn};

use crate::app::{App, DialogState};
use crate::components::help_bar::DEFAULT_HELP_TEXT;
use crate::config::{AppConfig, DEFAULT_ROW_HEIGHT, DEFAULT_TICK_MS};
use crate::error::Result;
use crate::event::{EventSource, RawInput};
use crate::layout::DialogLayout;
use crate::navigator::Navigator;
use crate::theme::{resolve_theme, ThemeColors};
use crate::ui;

/// Presentation and timing settings for a dialog invocation.
#[derive(Debug, Clone)]
pub struct DialogConfig {
    /// Directory to list first. `None` means the working directory.
    pub start_path: Option<PathBuf>,
    /// Terminal rows per entry.
    pub row_height: u16,
    pub use_icons: bool,
    pub help_text: String,
    pub theme: ThemeColors,
    /// Longest wait for input before a frame is redrawn.
    pub tick_rate: Duration,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            start_path: None,
            row_height: DEFAULT_ROW_HEIGHT,
            use_icons: false,
            help_text: DEFAULT_HELP_TEXT.to_string(),
            theme: ThemeColors::default(),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl DialogConfig {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            start_path: config.start_path().map(PathBuf::from),
            row_height: config.row_height(),
            use_icons: config.use_icons(),
            help_text: config.help_text().unwrap_or(DEFAULT_HELP_TEXT).to_string(),
            theme: resolve_theme(&config.theme),
            tick_rate: Duration::from_millis(config.tick_ms()),
        }
    }
}

/// A running dialog: controller state plus the layout it is drawn with.
pub struct Dialog {
    app: App,
    layout: Option<DialogLayout>,
    config: DialogConfig,
}

impl Dialog {
    /// Lay the dialog out on `area` and list the starting directory.
    ///
    /// Fails when `area` cannot hold a single entry row.
    pub fn new(area: Rect, config: DialogConfig) -> Result<Self> {
        let layout = DialogLayout::new(area, config.row_height)?;
        let navigator = match &config.start_path {
            Some(path) => Navigator::at(path.clone()),
            None => Navigator::new()?,
        };
        let mut app = App::new(navigator);
        app.navigator.set_visible_count(layout.visible_count());
        Ok(Self {
            app,
            layout: Some(layout),
            config,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn is_done(&self) -> bool {
        self.app.is_done()
    }

    pub fn into_state(self) -> DialogState {
        self.app.into_state()
    }

    /// Apply one input synchronously.
    pub fn process_input(&mut self, input: RawInput) {
        match input {
            RawInput::Resize(width, height) => self.resize(Rect::new(0, 0, width, height)),
            input => self.app.handle_input(input),
        }
    }

    /// Recompute the layout for a new surface size.
    pub fn resize(&mut self, area: Rect) {
        match DialogLayout::new(area, self.config.row_height) {
            Ok(layout) => {
                self.app.navigator.set_visible_count(layout.visible_count());
                self.layout = Some(layout);
            }
            Err(e) => {
                warn!(error = %e, "surface too small after resize");
                self.layout = None;
            }
        }
    }

    /// Draw the current state. Never mutates it.
    pub fn render(&self, frame: &mut Frame) {
        ui::render(frame, &self.app, self.layout.as_ref(), &self.config);
    }
}

/// Run the dialog on `terminal` until it reaches a terminal state.
///
/// Each tick draws one frame, waits up to the tick rate for input, then
/// drains every pending input before drawing again.
pub fn run_dialog<B, E>(
    terminal: &mut Terminal<B>,
    events: &mut E,
    config: &DialogConfig,
) -> Result<DialogState>
where
    B: Backend,
    E: EventSource + ?Sized,
{
    let size = terminal.size()?;
    let mut dialog = Dialog::new(Rect::new(0, 0, size.width, size.height), config.clone())?;
    info!(path = %dialog.app().navigator.current_path().display(), "file dialog opened");

    while !dialog.is_done() {
        terminal.draw(|frame| dialog.render(frame))?;

        let mut next = events.poll(config.tick_rate)?;
        while let Some(input) = next {
            dialog.process_input(input);
            if dialog.is_done() {
                break;
            }
            next = events.poll(Duration::ZERO)?;
        }
    }

    let state = dialog.into_state();
    info!(state = ?state, "file dialog closed");
    Ok(state)
}

/// Show the dialog and block until the user picks a file or leaves.
///
/// Returns the chosen file's full path, or `None` on cancel, quit, or a
/// failure to start (which is logged).
pub fn show_file_selection_dialog<B, E>(
    terminal: &mut Terminal<B>,
    events: &mut E,
    config: &DialogConfig,
) -> Option<PathBuf>
where
    B: Backend,
    E: EventSource + ?Sized,
{
    match run_dialog(terminal, events, config) {
        Ok(state) => state.into_selected_path(),
        Err(e) => {
            error!(error = %e, "file selection dialog failed");
            None
        }
    }
}
