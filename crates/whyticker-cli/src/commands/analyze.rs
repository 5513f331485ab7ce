use tokio::time::Instant;
use whyticker_core::TickerSymbol;
use whyticker_widget::{TextChartSurface, TickerWidget};

use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::Context;

pub async fn run(args: &AnalyzeArgs, context: &Context) -> Result<(), CliError> {
    match args.format {
        OutputFormat::Json => {
            let symbol = TickerSymbol::parse(&args.symbol)?;
            let result = context.client.analyze(&symbol).await?;
            output::print_json(&result, args.pretty)
        }
        OutputFormat::Table => {
            let mut widget = TickerWidget::new(TextChartSurface::new())
                .with_banner_duration(context.banner_duration);

            let failure = match widget.submit_input(args.symbol.as_str(), Instant::now()) {
                None => TickerSymbol::parse(&args.symbol).err().map(CliError::from),
                Some(submission) => {
                    let completion = submission.fetch(&context.client).await;
                    let failure = completion.outcome.as_ref().err().cloned();
                    widget.complete(completion, Instant::now());
                    failure.map(CliError::from)
                }
            };

            output::print_view(&context.view.draw(&widget))?;
            failure.map_or(Ok(()), Err)
        }
    }
}
