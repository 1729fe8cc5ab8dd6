use kidquest::{app::App, config::AppConfig, error::user_friendly_message, Result};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", user_friendly_message(&e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AppConfig::load()?;
    let log_path = init_logging(&config);
    tracing::info!(log = ?log_path, "kidquest starting");

    let mut app = App::new(&config)?;
    app.run()
}

/// Log to a file so the output never lands on the TUI. `RUST_LOG` wins
/// over the configured filter. Returns the log path when one could be
/// opened; otherwise logs are dropped.
fn init_logging(config: &AppConfig) -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    let opened = AppConfig::log_file_path().ok().and_then(|path| {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).ok()?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
        Some((path, file))
    });

    let (writer, path) = match opened {
        Some((path, file)) => (BoxMakeWriter::new(Mutex::new(file)), Some(path)),
        None => (BoxMakeWriter::new(io::sink), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    path
}
