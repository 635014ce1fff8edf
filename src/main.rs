use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use wordsim::compare::{self, Comparison};
use wordsim::config::{Config, MAX_PRECISION};
use wordsim::output::terminal;
use wordsim::{Encoding, FrequencyVector};

/// wordsim: how alike are two documents?
///
/// Builds a word-frequency vector for each input and reports the angle
/// between them: 0 for identical word profiles, π/2 for nothing in common.
#[derive(Parser)]
#[command(name = "wordsim", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the cosine distance between two documents
    Compare {
        /// First document (file path, or the text itself with --text)
        first: String,

        /// Second document (file path, or the text itself with --text)
        second: String,

        /// Treat both arguments as literal text instead of file paths
        #[arg(long)]
        text: bool,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,

        /// File encoding: latin1 (default) or utf8
        #[arg(long)]
        encoding: Option<Encoding>,

        /// Decimal places for the printed distance
        #[arg(long)]
        precision: Option<usize>,
    },

    /// Show word counts and the most frequent words of one document
    Stats {
        /// Document (file path, or the text itself with --text)
        input: String,

        /// Treat the argument as literal text instead of a file path
        #[arg(long)]
        text: bool,

        /// How many of the most frequent words to list
        #[arg(long)]
        top: Option<usize>,

        /// File encoding: latin1 (default) or utf8
        #[arg(long)]
        encoding: Option<Encoding>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordsim=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Compare {
            first,
            second,
            text,
            json,
            encoding,
            precision,
        } => {
            let encoding = encoding.unwrap_or(config.encoding);
            let precision = precision.unwrap_or(config.precision).min(MAX_PRECISION);

            let a = load_document(&first, text, encoding);
            let b = load_document(&second, text, encoding);
            let comparison = Comparison::new(&first, &a, &second, &b);

            info!(
                distance = comparison.distance,
                shared = comparison.shared_words,
                "Compared documents"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                terminal::display_comparison(&comparison, precision);
            }
        }

        Commands::Stats {
            input,
            text,
            top,
            encoding,
        } => {
            let encoding = encoding.unwrap_or(config.encoding);
            let vector = load_document(&input, text, encoding);
            terminal::display_stats(&input, &vector, top.unwrap_or(config.top_words));
        }
    }

    Ok(())
}

/// Build a vector from literal text or from a file. An unreadable file is
/// reported once and compared as an empty document.
fn load_document(input: &str, text: bool, encoding: Encoding) -> FrequencyVector {
    match compare::load(input, text, encoding) {
        Ok(vector) => vector,
        Err(e) => {
            eprintln!(
                "{} {e}; comparing it as an empty document",
                "warning:".yellow().bold()
            );
            FrequencyVector::default()
        }
    }
}
