//! Serve command - run the validation endpoint

use std::path::Path;

use passcheck::config::{Overrides, ServerConfig};
use passcheck::output::OutputMode;
use passcheck::server::{self, VALIDATE_PATH};

/// Load configuration and serve until the process is stopped
///
/// The banner is printed once the listener is bound, so it shows the real
/// port when `port = 0` is configured.
pub fn serve(
    config_path: Option<&Path>,
    overrides: Overrides,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?.with_overrides(overrides)?;

    server::run(&config, |addr| print_banner(addr, config.workers, mode))?;
    Ok(())
}

fn print_banner(addr: &str, workers: usize, mode: OutputMode) {
    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "listening": addr,
                "path": VALIDATE_PATH,
                "workers": workers,
            })
        );
    } else {
        println!("Starting passcheck...");
        println!("POST http://{addr}{VALIDATE_PATH}");
        println!();
        println!("Press Ctrl+C to stop");
    }
}
