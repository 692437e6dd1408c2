mod commands;
mod form;
mod render;
mod results;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nextgencal")]
#[command(about = "Plan interview events and add them to your calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for interview slots and add one to your calendar
    Search {
        /// Job description to search for (prompted when omitted)
        #[arg(long)]
        job_description: Option<String>,

        /// Month to search in, e.g. "August" (prompted when omitted)
        #[arg(long)]
        month: Option<String>,
    },
    /// Add an event directly, skipping the search flow
    Add {
        title: String,

        /// Meeting link (e.g. https://zoom.us/j/123456789)
        #[arg(short, long)]
        link: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Start time (HH:MM, 24-hour)
        #[arg(short, long)]
        time: String,
    },
    /// List locally stored events
    Events,
    /// Re-export a stored event (1-based number from `events`)
    Export { number: usize },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            job_description,
            month,
        } => commands::search::run(job_description, month).await,
        Commands::Add {
            title,
            link,
            date,
            time,
        } => commands::add::run(&title, link, &date, &time),
        Commands::Events => commands::events::run(),
        Commands::Export { number } => commands::export::run(number),
    }
}
