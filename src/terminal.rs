use anyhow::Context;
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Stdout, Write};

/// Owns the terminal as a display: raw mode, alternate screen, hidden cursor.
/// Everything is restored on drop, including after a failed setup.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        let guard = Self { _private: () };

        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide
        )
        .context("prepare alternate screen")?;

        let (cols, rows) = Self::size()?;
        if cols < 4 || rows < 2 {
            anyhow::bail!("terminal too small (need at least 4x2, got {cols}x{rows})");
        }
        Ok(guard)
    }

    pub fn stdout() -> Stdout {
        stdout()
    }

    pub fn size() -> anyhow::Result<(u16, u16)> {
        terminal::size().context("get terminal size")
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let mut out = stdout();
        // Sync output off, autowrap on, colors reset.
        let _ = out.write_all(b"\x1b[?2026l\x1b[?7h\x1b[0m");
        let _ = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
    }
}
