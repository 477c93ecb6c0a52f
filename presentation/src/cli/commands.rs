//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for categorization results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One category per line
    Lines,
    /// `{"categories": [...]}`
    Json,
}

impl From<OutputFormat> for memcat_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Lines => memcat_domain::OutputFormat::Lines,
            OutputFormat::Json => memcat_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for memcat
#[derive(Parser, Debug)]
#[command(name = "memcat")]
#[command(author, version, about = "Assign topical categories to a memory using an LLM")]
#[command(long_about = r#"
memcat asks a language model which categories a piece of memory text belongs
to and prints them as normalized lowercase labels.

Failed model calls are retried (3 attempts by default, waiting 4s between
them).

Configuration files are loaded from (in priority order):
1. MEMCAT_* environment variables   e.g. MEMCAT_LLM__MODEL=gpt-4o-mini
2. --config <path>                   Explicit config file
3. ./memcat.toml                     Project-level config
4. ~/.config/memcat/config.toml      Global config

Example:
  memcat "Booked flights to Lisbon for the team offsite"
  echo "Started learning Rust" | memcat --provider openai -m gpt-4o-mini
  memcat -o json "Doctor said to cut back on coffee"
"#)]
pub struct Cli {
    /// Memory text to categorize (read from stdin when omitted)
    pub memory: Option<String>,

    /// LLM provider: gemini, openai or anthropic
    #[arg(short, long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Model identifier
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Maximum tokens in the model reply
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Total attempts before giving up
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
