use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use crate::error::{AppError, Result};

/// Terminal wrapper that owns raw mode and the alternate screen for the
/// lifetime of one dialog. Dropping it restores the terminal if
/// [`Tui::restore`] was not reached.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    /// Initialize the terminal: enter alternate screen and enable raw mode.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().map_err(|e| setup_error("enable raw mode", e))?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(setup_error("enter the alternate screen", e));
        }

        // From here on `Drop` undoes the setup if anything fails.
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| setup_error("attach to the terminal", e))?;
        let mut tui = Self {
            terminal,
            active: true,
        };
        tui.terminal
            .hide_cursor()
            .map_err(|e| setup_error("hide the cursor", e))?;
        Ok(tui)
    }

    /// Restore the terminal to its original state.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Get a mutable reference to the underlying terminal for drawing.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

fn setup_error(step: &str, err: io::Error) -> AppError {
    AppError::Terminal(format!("failed to {step}: {err}"))
}

/// Install a panic hook that restores the terminal before printing panic info.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_error_names_the_failed_step() {
        let err = setup_error(
            "enable raw mode",
            io::Error::new(io::ErrorKind::Unsupported, "not a tty"),
        );
        assert!(matches!(err, AppError::Terminal(_)));
        assert_eq!(
            err.to_string(),
            "Terminal error: failed to enable raw mode: not a tty"
        );
    }
}
