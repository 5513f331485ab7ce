//! CLI argument definitions for whyticker.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `watch` | Interactive widget, one ticker per line (default) |
//! | `analyze` | Analyze a single ticker and exit |
//!
//! # Global Options
//!
//! | Option | Env | Default | Description |
//! |--------|-----|---------|-------------|
//! | `--base-url` | `WHYTICKER_BASE_URL` | `http://127.0.0.1:5000` | Analysis backend |
//! | `--timeout-ms` | `WHYTICKER_TIMEOUT_MS` | `3000` | Request timeout |
//! | `--log-level` | `RUST_LOG` | `warn` | tracing filter directive |
//! | `--no-color` | | `false` | Disable ANSI colors |
//! | `--banner-secs` | | `3` | How long errors stay visible |
//!
//! # Examples
//!
//! ```bash
//! whyticker
//! whyticker analyze aapl
//! whyticker analyze MSFT --format json --pretty
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use whyticker_core::{config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};

/// whyticker - why is this stock moving?
///
/// Fetches price, intraday history, news sentiment and headlines for a ticker
/// from a whyticker analysis backend and renders them in the terminal.
#[derive(Debug, Parser)]
#[command(name = "whyticker", author, version, about = "Stock move explainer for the terminal")]
pub struct Cli {
    /// Base URL of the analysis backend.
    #[arg(long, global = true, env = config::BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, env = config::TIMEOUT_ENV, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// tracing filter directive (e.g. `debug`, `whyticker_core=trace`).
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Disable ANSI colors.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Seconds an error message stays visible.
    #[arg(long, global = true, default_value_t = 3)]
    pub banner_secs: u64,

    /// Width of the price chart in columns.
    #[arg(long, global = true, default_value_t = 72)]
    pub chart_width: usize,

    /// Height of the price chart in rows.
    #[arg(long, global = true, default_value_t = 10)]
    pub chart_height: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format for `analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered widget.
    Table,
    /// Raw analysis payload as JSON.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive widget: type a ticker and press Enter.
    ///
    /// A new ticker replaces any request still in flight.
    Watch,

    /// Analyze one ticker and exit.
    ///
    /// # Examples
    ///
    ///   whyticker analyze AAPL
    ///   whyticker analyze tsla --format json --pretty
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Ticker symbol, 1 to 10 letters.
    pub symbol: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
