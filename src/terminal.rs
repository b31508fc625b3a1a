//! Terminal setup and teardown.
//!
//! [`Tui`] owns the raw-mode alternate screen for the lifetime of the
//! session and restores the user's terminal on drop, including on early
//! returns and panics.

use std::io::{self, Stdout};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use thiserror::Error;

/// Errors raised while preparing, driving or restoring the terminal.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Underlying terminal I/O failed.
    #[error("terminal io: {0}")]
    Io(#[from] io::Error),
}

/// RAII guard around the prepared terminal.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Enter raw mode on the alternate screen with mouse capture enabled.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Re-enable mouse capture. The session requests this after every
    /// resize since some terminals drop capture with the old screen.
    pub fn capture_mouse(&mut self) -> Result<(), TerminalError> {
        execute!(self.terminal.backend_mut(), EnableMouseCapture)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // restoration failures are unreportable this late; ignore them
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = self.terminal.show_cursor();
    }
}
