//! # Monitor Module
//!
//! The read → parse → update → redraw loop.
//!
//! [`Monitor`] owns the line source, the screen and the [`Readings`]. Each
//! [`Monitor::step`] waits for one line, and when it parses the snapshot is
//! redrawn. [`Monitor::run`] repeats that until a fatal error.

use std::io::{self, ErrorKind, Write};

use log::{debug, error};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::{MonitorError, Result};
use crate::readings::Readings;
use crate::screen::{Clear, redraw};

/// Loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// waiting for the next line
    AwaitingLine,
    /// clearing the screen and printing the snapshot
    UpdatingDisplay,
}

impl LoopState {
    pub fn is_awaiting_line(&self) -> bool {
        matches!(self, LoopState::AwaitingLine)
    }

    pub fn is_updating_display(&self) -> bool {
        matches!(self, LoopState::UpdatingDisplay)
    }
}

/// What a single [`Monitor::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// nothing was received
    Empty,
    /// a line arrived but did not parse
    Skipped,
    /// a reading was stored and the screen redrawn
    Updated,
}

pub struct Monitor<R, C, W> {
    reader: R,
    clearer: C,
    out: W,
    readings: Readings,
    state: LoopState,
    line_buf: Vec<u8>,
}

impl<R, C, W> Monitor<R, C, W>
where
    R: AsyncBufRead + Unpin,
    C: Clear,
    W: Write,
{
    pub fn new(reader: R, clearer: C, out: W) -> Self {
        Monitor {
            reader,
            clearer,
            out,
            readings: Readings::new(),
            state: LoopState::AwaitingLine,
            line_buf: Vec::new(),
        }
    }

    pub fn readings(&self) -> &Readings {
        &self.readings
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Runs until the transport fails or hangs up.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.step().await?;
        }
    }

    /// Waits for one line and handles it.
    pub async fn step(&mut self) -> Result<Step> {
        self.state = LoopState::AwaitingLine;

        // Bytes of a partial line survive a transient read failure in `line_buf`.
        match self.reader.read_until(b'\n', &mut self.line_buf).await {
            // End of stream on a tty means the device went away.
            Ok(0) if self.line_buf.is_empty() => {
                error!("Serial device disconnected");
                return Err(MonitorError::port_read("device disconnected"));
            }
            Ok(_) => {}
            Err(e) if is_transient(&e) => return Ok(Step::Empty),
            Err(e) => {
                error!("Serial read failed: {e}");
                return Err(MonitorError::port_read(e.to_string()));
            }
        }
        let line = String::from_utf8_lossy(&self.line_buf).into_owned();
        self.line_buf.clear();

        if !self.readings.apply_line(&line) {
            debug!("Skipping line {:?}", line.trim_end());
            return Ok(Step::Skipped);
        }

        self.state = LoopState::UpdatingDisplay;
        redraw(&mut self.clearer, &mut self.out, &self.readings)?;
        self.state = LoopState::AwaitingLine;
        Ok(Step::Updated)
    }
}

/// "No data yet" conditions, handled as an empty read.
///
/// The async serial stream waits for data instead of timing out, so these
/// come from blocking or wrapped readers.
fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
    )
}
