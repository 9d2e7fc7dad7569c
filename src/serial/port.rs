use log::{error, info};
use tokio::time::Duration;
use tokio_serial::SerialPortBuilderExt;
pub use tokio_serial::{DataBits, FlowControl, Parity, SerialStream, StopBits};

use crate::error::{MonitorError, Result};

/// default serial device
pub const DEFAULT_PORT_NAME: &str = "/dev/ttyUSB0";

/// default serial port baud rate
pub const DEFAULT_BAUD_RATE: u32 = 115200;

/// serial port settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortSettings {
    pub port_name: String,
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub stop_bits: StopBits,
    pub parity: Parity,
    pub flow_control: FlowControl,
    /// Read timeout for blocking use only. Streams from [`open_port`] wait
    /// for data instead of timing out.
    pub timeout: Duration,
}

/// serial port settings implementation
impl PortSettings {
    /// serial port settings initialization, 8N1 without flow control
    pub fn new(port_name: impl Into<String>, baud_rate: u32) -> Self {
        PortSettings {
            port_name: port_name.into(),
            baud_rate,
            data_bits: DataBits::Eight,
            stop_bits: StopBits::One,
            parity: Parity::None,
            flow_control: FlowControl::None,
            timeout: Duration::from_millis(500),
        }
    }

    /// get serial port data bits name
    pub fn data_bits_name(&self) -> String {
        format!("{}", self.data_bits)
    }
    /// get serial port stop bits name
    pub fn stop_bits_name(&self) -> String {
        format!("{}", self.stop_bits)
    }
    /// get serial port parity name
    pub fn parity_name(&self) -> String {
        format!("{}", self.parity)
    }
}

impl Default for PortSettings {
    fn default() -> Self {
        Self::new(DEFAULT_PORT_NAME, DEFAULT_BAUD_RATE)
    }
}

/// open serial port
///
/// Must be called from within a tokio runtime, the stream registers with its
/// reactor.
pub fn open_port(settings: &PortSettings) -> Result<SerialStream> {
    match tokio_serial::new(settings.port_name.as_str(), settings.baud_rate)
        .data_bits(settings.data_bits)
        .parity(settings.parity)
        .stop_bits(settings.stop_bits)
        .flow_control(settings.flow_control)
        .timeout(settings.timeout)
        .open_native_async()
    {
        Ok(stream) => {
            info!(
                "Opened serial port {} at {} baud ({}/{}/{})",
                settings.port_name,
                settings.baud_rate,
                settings.data_bits_name(),
                settings.parity_name(),
                settings.stop_bits_name(),
            );
            Ok(stream)
        }
        Err(e) => {
            error!("Unable to open serial port {}: {}", settings.port_name, e);
            Err(MonitorError::port_open(&settings.port_name, e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = PortSettings::default();
        assert_eq!(settings.port_name, "/dev/ttyUSB0");
        assert_eq!(settings.baud_rate, 115200);
        assert_eq!(settings.data_bits, DataBits::Eight);
        assert_eq!(settings.parity, Parity::None);
        assert_eq!(settings.stop_bits, StopBits::One);
        assert_eq!(settings.flow_control, FlowControl::None);
    }

    #[tokio::test]
    async fn test_open_missing_port_is_startup_error() {
        let settings = PortSettings::new("/dev/frsky-monitor-does-not-exist", DEFAULT_BAUD_RATE);
        match open_port(&settings) {
            Err(MonitorError::PortOpen { port_name, .. }) => {
                assert_eq!(port_name, "/dev/frsky-monitor-does-not-exist");
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("opening a missing device must fail"),
        }
    }
}
