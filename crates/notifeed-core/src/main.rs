//! notifeed CLI
//!
//! Prints the feed, optionally after marking items read. State changes are
//! never written back to the collections.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use notifeed_core::{
    load_snapshot, load_snapshot_strict, render_feed, Feed, FeedConfig, NotificationId, Resolver,
};

#[derive(Parser)]
#[command(name = "notifeed", about = "Render a notification feed from JSON collections")]
struct Cli {
    /// Directory holding users.json, posts.json, groups.json, messages.json, notifications.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print the page as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Fail instead of rendering with missing collections
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the feed
    Show,
    /// Mark one notification as read, then show the feed
    Read {
        /// Notification id
        id: String,
    },
    /// Mark every notification as read, then show the feed
    ReadAll,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match FeedConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = cli.data_dir {
        config.data.dir = dir;
    }

    let snapshot = if cli.strict {
        match load_snapshot_strict(&config) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        load_snapshot(&config).snapshot
    };

    let mut feed = Feed::new(snapshot.notifications);
    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {}
        Command::Read { id } => {
            let id = NotificationId::new(id);
            if !feed.mark_one_read(&id) && feed.get(&id).is_none() {
                eprintln!("No notification with id {id}");
            }
        }
        Command::ReadAll => {
            feed.mark_all_read();
        }
    }

    let resolver = Resolver::new(&snapshot.reference);
    let page = render_feed(&feed, &resolver, &config.display);

    if cli.json {
        match serde_json::to_string_pretty(&page) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{page}");
    }

    ExitCode::SUCCESS
}
