mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use kitforge::Layout;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let layout = Layout::discover(cli.root.as_deref())?;

    match cli.command {
        Commands::Ingest { zip, slug, variant } => {
            commands::ingest::run(&layout, zip, slug, variant)
        }
        Commands::Generate { slug, variant, out } => {
            commands::generate::run(&layout, slug, variant, out)
        }
        Commands::List => commands::list::run(&layout),
    }
}
