//! # Screen Module
//!
//! Clearing the terminal and redrawing the readings snapshot.
//!
//! The clear facility is the host's own command (`clear` or `cls`), chosen once
//! at startup through [`ClearScreen::for_host`].

use std::io::Write;
use std::process::Command;

use log::{trace, warn};

use crate::error::{MonitorError, Result};
use crate::readings::Readings;

/// Something that can wipe the terminal before a redraw.
#[cfg_attr(test, mockall::automock)]
pub trait Clear {
    fn clear(&mut self) -> Result<()>;
}

/// Host screen-clear command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScreen {
    /// `clear`
    Unix,
    /// `cmd /C cls`
    Windows,
}

impl ClearScreen {
    /// The clear command for the platform this binary was built for.
    pub fn for_host() -> Self {
        if cfg!(windows) {
            ClearScreen::Windows
        } else {
            ClearScreen::Unix
        }
    }

    fn command(&self) -> Command {
        match self {
            ClearScreen::Unix => Command::new("clear"),
            ClearScreen::Windows => {
                let mut cmd = Command::new("cmd");
                cmd.args(["/C", "cls"]);
                cmd
            }
        }
    }
}

impl Clear for ClearScreen {
    fn clear(&mut self) -> Result<()> {
        let status = self
            .command()
            .status()
            .map_err(|e| MonitorError::screen(format!("{self:?} clear command: {e}")))?;
        if status.success() {
            Ok(())
        } else {
            Err(MonitorError::screen(format!(
                "{self:?} clear command exited with {status}"
            )))
        }
    }
}

/// Clears the screen and prints the whole snapshot.
///
/// A failed clear is logged and the snapshot is printed anyway.
pub fn redraw<C, W>(clearer: &mut C, out: &mut W, readings: &Readings) -> Result<()>
where
    C: Clear + ?Sized,
    W: Write + ?Sized,
{
    if let Err(e) = clearer.clear() {
        warn!("{e}");
    }
    write!(out, "{readings}")?;
    out.flush()?;
    trace!("Redrew {} readings", readings.len());
    Ok(())
}
