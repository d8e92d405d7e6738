use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kitforge",
    about = "Catalog static template bundles and generate app kits from them",
    version
)]
pub struct Cli {
    /// Project root holding the template catalog and kits (default: $KITFORGE_ROOT or the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest a template ZIP file
    Ingest {
        /// Path to ZIP file
        #[arg(long)]
        zip: PathBuf,

        /// Template slug (auto-detected if omitted)
        #[arg(long)]
        slug: Option<String>,

        /// Variant name (auto-detected if omitted)
        #[arg(long)]
        variant: Option<String>,
    },

    /// Generate an app kit from a template variant
    Generate {
        /// Template slug
        #[arg(long)]
        slug: String,

        /// Variant name
        #[arg(long, default_value = "default")]
        variant: String,

        /// Output folder in kits/
        #[arg(long)]
        out: String,
    },

    /// List cataloged templates
    List,
}
