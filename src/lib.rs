//! # FrSky Monitor
//!
//! A serial line monitor that keeps the latest value of every sensor label.
//!
//! Lines such as `Temp1: 23` arrive over a serial port. Each line that parses
//! updates the reading for its label, then the terminal is cleared and the
//! whole snapshot is printed again.
//!
//! ## Architecture
//!
//! - [`serial`]: port settings, opening the port, and the line format
//! - [`readings`]: the label → latest value mapping
//! - [`screen`]: terminal clearing and snapshot rendering
//! - [`monitor`]: the read/update/redraw loop
//! - [`error`]: custom error types for the application

pub mod error;
pub mod monitor;
pub mod readings;
pub mod screen;
pub mod serial;

/// Re-exports for convenience
pub mod prelude {
    pub use crate::error::*;
    pub use crate::monitor::{LoopState, Monitor, Step};
    pub use crate::readings::Readings;
    pub use crate::screen::{Clear, ClearScreen};
    pub use crate::serial::{PortSettings, Reading, open_port, parse_line};
}
