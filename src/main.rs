use charadas::{app::App, config::GameConfig, error, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;

/// Log to a file; the terminal belongs to the UI
fn init_logging(config: &GameConfig) -> Result<()> {
    let log_path = config.log_file_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new().create(true).append(true).open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", error::user_friendly_message(&e));
            std::process::exit(1);
        }
    };
    init_logging(&config)?;

    let mut app = App::with_config(config)?;
    app.init()?;

    let outcome = app.run().await;
    if let Err(e) = outcome {
        drop(app);
        tracing::error!(error = %e, "application error");
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
    Ok(())
}
