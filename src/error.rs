//! # Error Module
//!
//! This module provides custom error types for the `frsky_monitor` application.
//! It uses the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// Result type alias for `frsky_monitor` operations.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Main error type for the `frsky_monitor` application.
///
/// Every variant is fatal for the monitor loop. Lines that do not parse are
/// not errors and never show up here.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Failed to open serial port.
    #[error("Failed to open serial port '{port_name}': {reason}")]
    PortOpen { port_name: String, reason: String },

    /// Failed to read from serial port.
    #[error("Failed to read from serial port: {0}")]
    PortRead(String),

    /// Failed to clear the terminal screen.
    #[error("Failed to clear screen: {0}")]
    Screen(String),

    /// Failed to write the snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MonitorError {
    /// Creates a new port open error.
    #[must_use]
    pub fn port_open(port_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PortOpen {
            port_name: port_name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new port read error.
    #[must_use]
    pub fn port_read(msg: impl Into<String>) -> Self {
        Self::PortRead(msg.into())
    }

    /// Creates a new screen error.
    #[must_use]
    pub fn screen(msg: impl Into<String>) -> Self {
        Self::Screen(msg.into())
    }
}
