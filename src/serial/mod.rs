//! # Serial Module
//!
//! Serial transport settings and the text line format spoken over it.

pub mod line;
pub mod port;

pub use line::{Reading, parse_line};
pub use port::{PortSettings, open_port};
