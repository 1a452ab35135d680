//! CLI for the webutil helper toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use webutil_core::config;
use webutil_core::url_check::UrlStrategy;

use commands::{run_banner, run_check_url, run_gen_id, run_intro, run_random, run_sanitize};

/// Top-level CLI for the webutil helper toolkit.
#[derive(Debug, Parser)]
#[command(name = "webutil")]
#[command(about = "webutil: browser-style helper utilities", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// URL validation strategy flag; defaults to the configured strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Strict,
    Loose,
}

impl From<StrategyArg> for UrlStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Strict => UrlStrategy::Strict,
            StrategyArg::Loose => UrlStrategy::Loose,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate a random identifier from 4-character hex groups.
    GenId {
        /// Number of hex groups (defaults to the configured value).
        #[arg(long, value_name = "N")]
        groups: Option<usize>,
        /// Concatenate groups directly instead of joining with '-'.
        #[arg(long)]
        no_separator: bool,
    },

    /// Strip well-formed <script> tags from a string.
    Sanitize {
        /// Input string to sanitize.
        input: String,
    },

    /// Sample a random float in [min, max).
    #[command(allow_negative_numbers = true)]
    Random {
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (exclusive).
        max: f64,
        /// Number of fractional digits to keep.
        #[arg(long, default_value = "2")]
        decimals: usize,
    },

    /// Check whether a string is a valid URL.
    CheckUrl {
        /// Candidate URL.
        url: String,
        /// Validation strategy override.
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },

    /// Print the framed console banner for a title.
    Banner {
        /// Title to center in the banner.
        title: String,
    },

    /// Print the styled console introduction.
    Intro {
        /// Credited author (required, must be non-empty).
        author: String,
        /// Project title (required, must be non-empty).
        title: String,
        /// Optional repository link.
        #[arg(long)]
        repository: Option<String>,
        /// Optional website link.
        #[arg(long)]
        website: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::GenId {
                groups,
                no_separator,
            } => run_gen_id(&cfg, groups, no_separator),
            CliCommand::Sanitize { input } => run_sanitize(&input),
            CliCommand::Random { min, max, decimals } => run_random(min, max, decimals),
            CliCommand::CheckUrl { url, strategy } => {
                run_check_url(&cfg, &url, strategy.map(UrlStrategy::from))
            }
            CliCommand::Banner { title } => run_banner(&title),
            CliCommand::Intro {
                author,
                title,
                repository,
                website,
            } => run_intro(author, title, repository, website)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
