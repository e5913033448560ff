use std::path::PathBuf;

use clap::Parser;
use drresearcher::app::{self, App};
use drresearcher::config::persistence::{PreferenceStore, WALKTHROUGH_DISABLED_KEY};
use drresearcher::config::AppConfig;
use drresearcher::{error, telemetry, Result};

#[derive(Parser)]
#[command(name = "drresearcher")]
#[command(about = "Onboarding walkthrough and research mode launcher")]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show the walkthrough again even if it was skipped permanently
    #[arg(long)]
    reset_walkthrough: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best effort; the UI runs without it
    if let Err(e) = telemetry::log_file_path().and_then(|path| telemetry::init_telemetry(&path)) {
        eprintln!("{}", e);
    }

    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = loaded.map_err(|e| {
        eprintln!("{}", error::user_friendly_message(&e));
        e
    })?;

    if cli.reset_walkthrough {
        app::open_store(&config).remove(WALKTHROUGH_DISABLED_KEY);
        tracing::info!("walkthrough re-enabled");
    }

    let mut app = App::new(config)?;
    app.init()?;
    let result = app.run().await;
    // Restore the terminal before printing anything
    drop(app);
    if let Err(e) = result {
        tracing::error!(error = %e, "application error");
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
