use std::path::PathBuf;

use tracing::info;

use crate::action::{self, Action};
use crate::devices::DeviceRegistry;
use crate::event::RawInput;
use crate::navigator::Navigator;

/// Lifecycle of one dialog invocation. Every state but `Active` is terminal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Active,
    /// A file was confirmed; carries its full path.
    FileSelected(PathBuf),
    Cancelled,
    QuitRequested,
}

impl DialogState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DialogState::Active)
    }

    /// The chosen file, if the dialog ended with one.
    pub fn into_selected_path(self) -> Option<PathBuf> {
        match self {
            DialogState::FileSelected(path) => Some(path),
            _ => None,
        }
    }
}

/// Dialog controller: applies actions to the navigator and tracks termination.
#[derive(Debug)]
pub struct App {
    pub navigator: Navigator,
    pub devices: DeviceRegistry,
    state: DialogState,
}

impl App {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            devices: DeviceRegistry::new(),
            state: DialogState::Active,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    /// Whether the dialog loop should stop.
    pub fn is_done(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn into_state(self) -> DialogState {
        self.state
    }

    /// Handle one raw input: controller hot-plug bookkeeping, then the mapped action.
    ///
    /// Input is ignored once the dialog has finished. Resizes are the
    /// caller's concern since they need layout geometry.
    pub fn handle_input(&mut self, input: RawInput) {
        if self.is_done() {
            return;
        }
        match &input {
            RawInput::DeviceAdded { device, name } => self.devices.add(*device, name.clone()),
            RawInput::DeviceRemoved { device } => {
                self.devices.remove(*device);
            }
            _ => {}
        }
        if let Some(action) = action::map_input(&input) {
            self.apply(action);
        }
    }

    /// Apply an action. No-op once the dialog has finished.
    pub fn apply(&mut self, action: Action) {
        if self.is_done() {
            return;
        }
        match action {
            Action::NavigateUp => self.navigator.select_previous(),
            Action::NavigateDown => self.navigator.select_next(),
            Action::NavigateParent => self.navigator.go_up(),
            Action::SelectConfirm => self.confirm_selection(),
            Action::Cancel => self.state = DialogState::Cancelled,
            Action::QuitApp => self.state = DialogState::QuitRequested,
        }
    }

    /// Directories (and `..`) are opened; a file ends the dialog.
    fn confirm_selection(&mut self) {
        let Some(entry) = self.navigator.selected_entry() else {
            return;
        };
        if entry.is_directory {
            self.navigator.activate_selection();
        } else if let Some(path) = self.navigator.selected_path() {
            info!(path = %path.display(), "file selected");
            self.state = DialogState::FileSelected(path);
        }
    }
}
