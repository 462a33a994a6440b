/// Terminal mode guard: raw mode, alternate screen, and mouse capture
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Puts the terminal into interactive mode and restores it when dropped,
/// including while unwinding from a panic.
pub struct TerminalSession<W: Write> {
    out: W,
    raw_mode: bool,
    screen: bool,
}

impl<W: Write> TerminalSession<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        Self::enter_with(out, true)
    }

    fn enter_with(out: W, raw_mode: bool) -> io::Result<Self> {
        let mut session = Self {
            out,
            raw_mode: false,
            screen: false,
        };

        if raw_mode {
            terminal::enable_raw_mode()?;
            session.raw_mode = true;
        }
        // Marked first so a partial setup is still undone on drop
        session.screen = true;
        execute!(session.out, EnterAlternateScreen, cursor::Hide, EnableMouseCapture)?;

        Ok(session)
    }

    /// Undo every mode that was entered. All steps run even when one fails;
    /// the first error is returned. Calling this twice is a no-op.
    pub fn restore(&mut self) -> io::Result<()> {
        let mut first_error = None;
        let mut record = |result: io::Result<()>| {
            if let Err(err) = result {
                first_error.get_or_insert(err);
            }
        };

        if self.screen {
            self.screen = false;
            record(execute!(self.out, DisableMouseCapture));
            record(execute!(self.out, LeaveAlternateScreen));
            record(execute!(self.out, cursor::Show));
        }
        if self.raw_mode {
            self.raw_mode = false;
            record(terminal::disable_raw_mode());
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
