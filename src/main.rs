use std::process::ExitCode;

use frsky_monitor::prelude::*;
use log::{error, info};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("frsky_monitor: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Opens the port and monitors it until a fatal error.
///
/// The port is closed when `monitor` goes out of scope.
async fn run() -> Result<()> {
    let settings = PortSettings::default();
    let stream = open_port(&settings)?;
    let mut monitor = Monitor::new(
        BufReader::new(stream),
        ClearScreen::for_host(),
        std::io::stdout(),
    );
    let result = monitor.run().await;
    info!("Closing serial port {}", settings.port_name);
    result
}
