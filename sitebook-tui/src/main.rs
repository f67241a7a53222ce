mod app;
mod cli;
mod config;
mod logging;
mod report;
mod runtime;
mod time_utils;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::SitebookConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use runtime::Action;
use std::io;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env.sitebook
    dotenvy::from_filename(".env.sitebook").ok();

    let cli = Cli::parse();
    let cfg = SitebookConfig::load()?;

    if let Err(e) = SitebookConfig::log_path().and_then(|p| logging::init(&p, &cfg.log_level)) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    match cli.command() {
        Commands::ConfigPath => {
            let path = SitebookConfig::ensure_exists()?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Report { file, overdrawn } => run_report(&cfg, &file, overdrawn).await,
        Commands::Run { file } => run_tui(&cfg, file.map(Action::Open), false).await,
        Commands::New => run_tui(&cfg, None, true).await,
    }
}

async fn run_report(cfg: &SitebookConfig, file: &Path, overdrawn_only: bool) -> Result<()> {
    let loaded = cfg
        .file_store()
        .open(Some(file))
        .await
        .with_context(|| format!("Failed to load {}", file.display()))?
        .context("No file given")?;
    let document = loaded.document;
    print!(
        "{}",
        report::render_report(&document.projects, &document.time_entries, overdrawn_only)
    );
    Ok(())
}

async fn run_tui(cfg: &SitebookConfig, initial: Option<Action>, new_document: bool) -> Result<()> {
    let store = cfg.file_store();
    let mut app = App::new(cfg);
    if new_document {
        app.start_new_document();
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("sitebook started");

    // Run the app
    let res = runtime::run_app(&mut terminal, &mut app, &store, initial).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    if app.has_unsaved_changes() {
        println!("Exited with unsaved changes.");
    }

    Ok(())
}
