//! CLI entry point for masteringjs-site

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use masteringjs_site::{commands, content::parse_date_string, Site};

#[derive(Parser)]
#[command(name = "masteringjs-site")]
#[command(version)]
#[command(about = "Render Mastering JS pages and post lists", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
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
    /// Render a page source (markdown or HTML) into a full document
    Page {
        /// Page source file
        source: PathBuf,

        /// Output file, relative to the public directory (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a post list (YAML or JSON) into an HTML fragment
    List {
        /// Post list file
        posts: PathBuf,

        /// Output file, relative to the public directory (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a post list wrapped in a full page
    Index {
        /// Post list file
        posts: PathBuf,

        /// Page title
        #[arg(short, long)]
        title: String,

        /// Page date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Output file, relative to the public directory (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date_string(s).ok_or_else(|| format!("unrecognized date: {}", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "masteringjs_site=debug,info"
    } else {
        "masteringjs_site=info"
    };

    // Logs go to stderr; stdout carries rendered HTML
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::Page { source, output } => {
            let site = Site::new(&base_dir)?;
            commands::page::run(&site, &source, output.as_deref())?;
        }

        Commands::List { posts, output } => {
            let site = Site::new(&base_dir)?;
            commands::list::run(&site, &posts, output.as_deref())?;
        }

        Commands::Index {
            posts,
            title,
            date,
            output,
        } => {
            let site = Site::new(&base_dir)?;
            commands::index::run(&site, &posts, &title, date, output.as_deref())?;
        }
    }

    Ok(())
}
