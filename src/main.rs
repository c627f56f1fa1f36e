//! Chef Menu Manager binary entry point

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use chef_menu::{
    cli::{self, Cli, Commands},
    config::Config,
    menu_tui::App,
    models::MenuDraft,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "chef_menu=info");
    }

    let mut config = Config::from_env()?;
    if let Some(mode) = cli.sample_mode {
        config.sample_load_mode = mode;
    }
    config.validate()?;

    // Handle CLI mode - print output and exit without TUI
    if cli.is_cli_mode() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_filter(EnvFilter::from_default_env()),
            )
            .init();

        return match cli.command {
            Some(command) => handle_cli_command(command, &config),
            None => {
                eprintln!("Error: CLI mode requires a command");
                std::process::exit(1);
            }
        };
    }

    // Log to a file so output does not interfere with the TUI
    let file_appender = tracing_appender::rolling::never(&config.log_dir, &config.log_file_name);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    info!("Starting Chef Menu Manager, logging to {}", config.log_path().display());

    let mut app = App::new(config);
    if cli.load_sample {
        app.load_sample_menu();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let result = run_tui(&mut app);
    // Leave raw mode even when terminal setup inside run_tui failed
    let restored = disable_raw_mode().context("Failed to disable raw mode");

    match result.and(restored) {
        Ok(_) => {
            info!("Chef Menu Manager exited successfully");
        }
        Err(e) => {
            error!("Chef Menu Manager encountered an error: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Enter the alternate screen, run the app, and leave it again.
///
/// Expects raw mode to be enabled already.
fn run_tui(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e).context("Failed to create terminal");
        }
    };

    let result = app.run(&mut terminal);

    // Restore terminal
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Handle CLI mode commands - print output and exit
fn handle_cli_command(command: Commands, config: &Config) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Sample { json } => cli::run_sample(&mut stdout, json, &config.currency_symbol),
        Commands::Add {
            name,
            description,
            course,
            price,
            json,
        } => {
            let draft = MenuDraft {
                dish_name: name,
                description,
                course,
                price,
            };
            let outcome = cli::run_add(
                &mut stdout,
                &draft,
                config.default_image_url.clone(),
                json,
                &config.currency_symbol,
            )?;
            if let Err(e) = outcome {
                warn!("Menu item rejected: {}", e);
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
