mod analyze;
mod watch;

use tokio::time::Duration;
use whyticker_core::{AnalysisClient, ClientConfig};
use whyticker_widget::TerminalView;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Settings shared by both commands.
pub struct Context {
    pub client: AnalysisClient,
    pub view: TerminalView,
    pub banner_duration: Duration,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let config = ClientConfig::new(&cli.base_url)?.with_timeout_ms(cli.timeout_ms)?;
        tracing::info!(
            base_url = config.base_url(),
            timeout_ms = config.timeout_ms(),
            "analysis backend configured"
        );

        Ok(Self {
            client: AnalysisClient::new(config),
            view: TerminalView {
                color: !cli.no_color,
                chart_width: cli.chart_width,
                chart_height: cli.chart_height,
            },
            banner_duration: Duration::from_secs(cli.banner_secs),
        })
    }
}

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let context = Context::from_cli(cli)?;

    match &cli.command {
        None | Some(Command::Watch) => watch::run(context).await,
        Some(Command::Analyze(args)) => analyze::run(args, &context).await,
    }
}
