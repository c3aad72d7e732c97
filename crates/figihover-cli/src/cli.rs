//! CLI argument definitions for figihover.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `classify` | Report which identifier kind each token is |
//! | `lookup` | Show the hover text for a single token |
//! | `hover` | Show the hover text at a position in a file |
//! | `serve` | Answer NDJSON hover requests on stdin |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--api-key` | unset | OpenFIGI API key |
//! | `--settings` | unset | Editor settings JSON holding `isin-code.OpenFIGIAPIKey` |
//! | `--endpoint` | OpenFIGI v1 mapping | Mapping endpoint URL |
//! | `--timeout-ms` | `10000` | Transport timeout |
//! | `--mock` | `false` | Answer lookups from a built-in fixture |
//! | `--log-level` | `warn` | Log filter when `RUST_LOG` is unset |
//!
//! # Examples
//!
//! ```bash
//! figihover classify US0378331005 7108899 037833100
//! figihover lookup B0YBKJ7 --format json --pretty
//! figihover hover holdings.yaml --line 3 --character 12
//! echo '{"id":1,"token":"US0378331005"}' | figihover serve
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use figihover_core::IdentifierKind;

/// Security identifier hovers backed by OpenFIGI.
#[derive(Debug, Parser)]
#[command(
    name = "figihover",
    author,
    version,
    about = "Validate ISIN/SEDOL/CUSIP codes and look them up on OpenFIGI"
)]
pub struct Cli {
    /// Output format for one-shot commands.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// OpenFIGI API key; overrides FIGIHOVER_OPENFIGI_API_KEY and settings.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Editor settings file to read the API key from.
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Mapping endpoint URL.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Transport timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Serve lookups from a built-in fixture instead of the network.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify tokens as ISIN, SEDOL or CUSIP without any lookup.
    Classify(ClassifyArgs),
    /// Look up a token and print its hover text.
    Lookup(LookupArgs),
    /// Print the hover for a position in a file.
    Hover(HoverArgs),
    /// Read NDJSON hover requests from stdin, one response line each.
    Serve,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Tokens to classify.
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Token to look up.
    pub token: String,

    /// Skip shape detection and treat the token as this kind.
    #[arg(long, value_enum)]
    pub kind: Option<KindSelector>,
}

#[derive(Debug, Args)]
pub struct HoverArgs {
    /// Document to hover in.
    pub file: PathBuf,

    /// Zero-based line.
    #[arg(long)]
    pub line: usize,

    /// Zero-based character within the line.
    #[arg(long)]
    pub character: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindSelector {
    Isin,
    Sedol,
    Cusip,
}

impl From<KindSelector> for IdentifierKind {
    fn from(value: KindSelector) -> Self {
        match value {
            KindSelector::Isin => Self::Isin,
            KindSelector::Sedol => Self::Sedol,
            KindSelector::Cusip => Self::Cusip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "figihover",
            "lookup",
            "7108899",
            "--kind",
            "sedol",
            "--format",
            "json",
            "--mock",
        ])
        .expect("valid arguments");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.mock);
        let Command::Lookup(args) = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(args.kind.map(IdentifierKind::from), Some(IdentifierKind::Sedol));
    }

    #[test]
    fn classify_requires_a_token() {
        assert!(Cli::try_parse_from(["figihover", "classify"]).is_err());
    }
}
