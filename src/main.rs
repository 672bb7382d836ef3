//! Watch TUI - clock, stopwatch and countdown timer in the terminal.
//!
//! Usage: `watch-tui [config.json]`

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;
use watch_tui::app::App;
use watch_tui::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    init_logging(&config)?;
    tracing::info!(tick_rate_ms = config.tick_rate_ms, "starting watch");

    setup_terminal()?;

    let mut app = App::new(config);
    let result = app.run_with_crossterm().await;

    // Restore the terminal even when the loop failed
    restore_terminal()?;

    result
}

fn init_logging(config: &AppConfig) -> Result<()> {
    // Logs go to a file; stdout belongs to the UI
    let log_file = File::create(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn setup_terminal() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::cursor::Hide
    )?;

    Ok(())
}

fn restore_terminal() -> Result<()> {
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    crossterm::terminal::disable_raw_mode()?;

    Ok(())
}
