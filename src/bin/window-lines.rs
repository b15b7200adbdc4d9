//! Window Lines Binary
//!
//! Reads lines from stdin and prints each window of lines as a JSON array.
//!
//! Run with: `cargo run --bin window-lines < input.log`

use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;
use windowing::{FallibleSource, LazyWindows, WindowSpec};

/// Configuration read from the environment.
#[derive(Debug, Clone)]
struct LinesConfig {
    spec: WindowSpec,
    /// Stop after this many windows (required when wrapping)
    max_windows: Option<usize>,
}

impl LinesConfig {
    fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let window_size = env_or("WINDOW_SIZE", "10");
        let step_size = std::env::var("STEP_SIZE").unwrap_or_else(|_| window_size.clone());
        let wrap = env_or("WRAP", "false");

        let mut params = std::collections::HashMap::new();
        params.insert("window_size".to_string(), window_size);
        params.insert("step_size".to_string(), step_size);
        params.insert("wrap".to_string(), wrap);
        let spec = WindowSpec::from_params(&params)?;

        let max_windows = match std::env::var("MAX_WINDOWS") {
            Ok(value) => Some(value.trim().parse::<usize>()?),
            Err(_) => None,
        };
        if spec.wrap() && max_windows.is_none() {
            return Err("MAX_WINDOWS must be set when WRAP=true".into());
        }

        Ok(LinesConfig { spec, max_windows })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=windowing=trace
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = LinesConfig::from_env()?;
    tracing::info!(spec = %config.spec, max_windows = ?config.max_windows, "windowing stdin");

    let stdin = io::stdin();
    let mut windows = LazyWindows::new(FallibleSource::new(stdin.lock().lines()), config.spec);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut emitted = 0;

    while config.max_windows.map_or(true, |max| emitted < max) {
        let Some(window) = windows.next_window()?.into_window() else {
            break;
        };
        serde_json::to_writer(&mut out, &window)?;
        out.write_all(b"\n")?;
        emitted += 1;
    }
    out.flush()?;

    tracing::info!(emitted, pulled = windows.pulled(), "done");
    Ok(())
}
