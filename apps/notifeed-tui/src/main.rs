//! Notifeed TUI
//!
//! Terminal view of the notification feed. Collections are loaded once at
//! startup; read-state changes live only for the session.
//!
//! Usage: `notifeed-tui [--data-dir DIR]`

mod app;
mod keybindings;
mod views;
mod widgets;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use notifeed_core::{load_snapshot, FeedConfig};

use app::App;

#[derive(Parser, Debug)]
#[command(name = "notifeed-tui", about = "Browse a notification feed in the terminal")]
struct Cli {
    /// Directory holding users.json, posts.json, groups.json, messages.json, notifications.json
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging (stderr, so it stays off the alternate screen)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = FeedConfig::load()?;
    if let Some(dir) = cli.data_dir {
        config.data.dir = dir;
    }

    let outcome = load_snapshot(&config);
    if !outcome.is_complete() {
        tracing::warn!(
            "{} collection(s) failed to load from {:?}",
            outcome.failures.len(),
            config.data.dir
        );
    }

    let mut app = App::new(outcome.snapshot, config.display);
    if let Some(failure) = outcome.failures.first() {
        app.status_message = Some(format!("Partial data: {}", failure));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}
