//! CLI entry point for folio

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Load, list and render the blog posts of a portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site information
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, tag, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only consider the newest N posts
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only list posts in this category ("all" for every post)
        #[arg(short = 'C', long)]
        category: Option<String>,
    },

    /// Show a single post rendered to HTML
    Show {
        /// Slug of the post (file name without .md)
        slug: String,

        /// Print the markdown body instead of HTML
        #[arg(long)]
        raw: bool,
    },

    /// Export posts as JSON
    Export {
        /// Only export the newest N posts
        #[arg(short, long)]
        limit: Option<usize>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::List {
            r#type,
            limit,
            category,
        } => {
            let folio = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&folio, &r#type, limit, category.as_deref())?;
        }

        Commands::Show { slug, raw } => {
            let folio = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&folio, &slug, raw)?;
        }

        Commands::Export {
            limit,
            pretty,
            output,
        } => {
            let folio = folio::Folio::new(&base_dir)?;
            tracing::debug!("Exporting posts from {:?}", folio.posts_dir);
            folio::commands::export::run(&folio, limit, pretty, output.as_deref())?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
