//! Mapping from raw keyboard and controller input to dialog actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::{ControllerButton, RawInput};

/// What the user asked the dialog to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor up one entry.
    NavigateUp,
    /// Move the cursor down one entry.
    NavigateDown,
    /// List the parent directory.
    NavigateParent,
    /// Enter the selected directory, or pick the selected file.
    SelectConfirm,
    /// Close the dialog without a selection.
    Cancel,
    /// The host application is quitting.
    QuitApp,
}

/// Map one raw input to an action. Unmapped input yields `None`.
pub fn map_input(input: &RawInput) -> Option<Action> {
    match input {
        RawInput::Key(key) => map_key(key),
        RawInput::Button { button, .. } => map_button(*button),
        RawInput::Quit => Some(Action::QuitApp),
        RawInput::DeviceAdded { .. } | RawInput::DeviceRemoved { .. } | RawInput::Resize(..) => {
            None
        }
    }
}

/// Keyboard bindings. Key releases are ignored; held keys repeat.
///
/// `Ctrl+C` is the host quit signal: raw mode swallows SIGINT.
pub fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::QuitApp)
        }
        KeyCode::Up => Some(Action::NavigateUp),
        KeyCode::Down => Some(Action::NavigateDown),
        KeyCode::Backspace => Some(Action::NavigateParent),
        KeyCode::Enter => Some(Action::SelectConfirm),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

/// Controller bindings: B is "back", Start cancels.
pub fn map_button(button: ControllerButton) -> Option<Action> {
    match button {
        ControllerButton::DPadUp => Some(Action::NavigateUp),
        ControllerButton::DPadDown => Some(Action::NavigateDown),
        ControllerButton::B => Some(Action::NavigateParent),
        ControllerButton::A => Some(Action::SelectConfirm),
        ControllerButton::Start => Some(Action::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> RawInput {
        RawInput::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn button(button: ControllerButton) -> RawInput {
        RawInput::Button { device: 0, button }
    }

    #[test]
    fn keyboard_bindings() {
        assert_eq!(map_input(&key(KeyCode::Up)), Some(Action::NavigateUp));
        assert_eq!(map_input(&key(KeyCode::Down)), Some(Action::NavigateDown));
        assert_eq!(
            map_input(&key(KeyCode::Backspace)),
            Some(Action::NavigateParent)
        );
        assert_eq!(map_input(&key(KeyCode::Enter)), Some(Action::SelectConfirm));
        assert_eq!(map_input(&key(KeyCode::Esc)), Some(Action::Cancel));
    }

    #[test]
    fn controller_bindings() {
        assert_eq!(
            map_input(&button(ControllerButton::DPadUp)),
            Some(Action::NavigateUp)
        );
        assert_eq!(
            map_input(&button(ControllerButton::DPadDown)),
            Some(Action::NavigateDown)
        );
        assert_eq!(
            map_input(&button(ControllerButton::B)),
            Some(Action::NavigateParent)
        );
        assert_eq!(
            map_input(&button(ControllerButton::A)),
            Some(Action::SelectConfirm)
        );
        assert_eq!(
            map_input(&button(ControllerButton::Start)),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn quit_signals() {
        assert_eq!(map_input(&RawInput::Quit), Some(Action::QuitApp));
        let ctrl_c = RawInput::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_input(&ctrl_c), Some(Action::QuitApp));
    }

    #[test]
    fn unmapped_input_yields_nothing() {
        assert_eq!(map_input(&key(KeyCode::Char('c'))), None);
        assert_eq!(map_input(&key(KeyCode::Left)), None);
        assert_eq!(map_input(&button(ControllerButton::X)), None);
        assert_eq!(map_input(&button(ControllerButton::DPadLeft)), None);
        assert_eq!(map_input(&RawInput::Resize(10, 10)), None);
        assert_eq!(
            map_input(&RawInput::DeviceAdded {
                device: 1,
                name: "pad".into()
            }),
            None
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(&release), None);

        let repeat = KeyEvent::new_with_kind(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(map_key(&repeat), Some(Action::NavigateDown));
    }
}
