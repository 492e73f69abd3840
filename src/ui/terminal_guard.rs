//! Terminal state guard for guaranteed cleanup.
//!
//! Raw mode, the alternate screen and bracketed paste are restored when the
//! guard drops, whether the wizard exits normally, via `?`, or by panic
//! (together with [`install_panic_hook`]).

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Guard that restores terminal state when dropped.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, returning the guard that
    /// undoes both.
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        // From here on Drop restores whatever was enabled
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
        Ok(guard)
    }

    /// Perform manual cleanup and prevent Drop from running cleanup again.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }
}

fn restore_terminal() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableBracketedPaste, Show)?;
    stdout.flush()?;
    Ok(())
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore_terminal() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

/// Install a panic hook that restores terminal state before printing the panic message.
///
/// Call early in main(), before any terminal setup.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore_terminal() {
            tracing::debug!(error = %e, "Failed to restore terminal in panic hook");
        }
        tracing::error!(panic = %panic_info, "Application panicked");
        original_hook(panic_info);
    }));
}
