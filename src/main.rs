//! artbrowse binary entry point

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use artbrowse::{
    artic::{ArticClient, ArtworkSource},
    config::Config,
    models::PaginationParams,
    tui::App,
};

#[derive(Parser)]
#[command(name = "artbrowse")]
#[command(about = "Browse the Art Institute of Chicago collection")]
#[command(version)]
pub struct Cli {
    /// Run in CLI mode (print one page of artworks and exit, no interactive TUI)
    #[arg(long)]
    pub cli: bool,
    /// Page to load on startup (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Artworks per page
    #[arg(long)]
    pub limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "artbrowse=info");
    }

    // Log to a file so the TUI display is not disturbed
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("artbrowse.log")?;
    let (writer, _guard) = tracing_appender::non_blocking(log_file);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    info!("Starting artbrowse...");

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(limit) = cli.limit {
        config.page_size = limit;
    }
    config.validate()?;

    // Handle CLI mode - print output and exit without TUI
    if cli.cli {
        return handle_cli_command(cli.page, &config).await;
    }

    // Setup terminal for TUI mode
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run the application
    let mut app = App::new(config)?;
    if cli.page > 1 {
        app.set_start_page(cli.page);
    }

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors that occurred during execution
    match result {
        Ok(_) => {
            info!("artbrowse exited successfully");
        }
        Err(e) => {
            error!("artbrowse encountered an error: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Handle CLI mode - print one page of artworks and exit
async fn handle_cli_command(page: usize, config: &Config) -> Result<()> {
    let client = ArticClient::new(config)?;
    let params = PaginationParams {
        page: page.max(1),
        limit: config.page_size,
    };

    match client.fetch_page(&params).await {
        Ok(response) => {
            if response.data.is_empty() {
                println!("No artworks on page {}", params.page);
                return Ok(());
            }

            println!(
                "{:<40} {:<30} {:<20} {:<15}",
                "Title", "Artist", "Place of Origin", "Date Range"
            );
            println!("{}", "-".repeat(105));

            for artwork in &response.data {
                println!(
                    "{:<40} {:<30} {:<20} {:<15}",
                    truncate_string(artwork.display_title(), 38),
                    truncate_string(artwork.display_artist(), 28),
                    truncate_string(artwork.display_place(), 18),
                    artwork.date_range()
                );
            }

            println!();
            println!(
                "Showing {} of {} artworks (page {} of {})",
                response.data.len(),
                response.pagination.total,
                response.pagination.current_page,
                response.pagination.total_pages
            );
        }
        Err(e) => {
            eprintln!("Failed to fetch artworks for page {}: {}", params.page, e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Truncate string to specified length with ellipsis
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
