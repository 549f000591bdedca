//! quotewire CLI - RSS feed collector and exchange daily series downloader.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod display;
mod logging;

use commands::feeds::FeedsArgs;
use commands::series::SeriesArgs;

#[derive(Parser)]
#[command(name = "quotewire")]
#[command(about = "RSS feed collector and exchange daily series downloader", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch RSS/Atom feeds and append the entries to a CSV file
    Feeds(FeedsArgs),

    /// Download monthly daily-trading data, write it and chart it
    Series(SeriesArgs),

    /// Print the default configuration as JSON
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Feeds(args) => commands::feeds::feeds(args, cli.quiet).await,
        Commands::Series(args) => commands::series::series(args, cli.quiet).await,
        Commands::Config { path } => commands::config::show_config(path),
    }
}
