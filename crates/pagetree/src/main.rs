//! pagetree CLI - page hierarchy tool.
//!
//! Provides commands for:
//! - `sort`: Print records in hierarchy order with depth
//! - `nav`: Print the nested navigation tree as JSON
//! - `breadcrumbs`: Print the ancestors of a page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BreadcrumbsArgs, NavArgs, SortArgs};
use output::Output;

/// pagetree - Page hierarchy tool.
#[derive(Parser)]
#[command(name = "pagetree", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print records in hierarchy order.
    Sort(SortArgs),
    /// Print the navigation tree as JSON.
    Nav(NavArgs),
    /// Print the ancestors of a page.
    Breadcrumbs(BreadcrumbsArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Sort(args) => args.input.verbose,
            Self::Nav(args) => args.input.verbose,
            Self::Breadcrumbs(args) => args.input.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sort(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Breadcrumbs(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
