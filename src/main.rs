use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rapidreport::app::AppContext;
use rapidreport::cli::{commands, open_log_file, Cli, Commands};
use rapidreport::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging to stderr would draw over the TUI, so a log file replaces it.
    let (file_layer, stderr_layer) = match &cli.log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => (None, Some(fmt::layer().with_writer(std::io::stderr))),
    };
    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .with(EnvFilter::from_default_env())
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);

    let ctx = AppContext::new(config)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Headlines { category, all } => {
            if all {
                commands::all_headlines(&ctx).await?;
            } else {
                commands::headlines(&ctx, category).await?;
            }
        }
        Commands::Search { query } => {
            commands::search(&ctx, &query).await?;
        }
        Commands::Tui => {
            rapidreport::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
