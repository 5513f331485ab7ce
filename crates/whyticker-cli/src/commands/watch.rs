use std::future::{pending, Future};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{sleep_until, Instant};
use whyticker_core::{AnalysisClient, AnalysisError, REQUEST_FAILED_MESSAGE};
use whyticker_widget::{ChartSurface, Completion, TextChartSurface, TickerWidget};

use crate::error::CliError;
use crate::output;

use super::Context;

/// Request task for one submission, tagged with its generation.
type InFlight = (u64, JoinHandle<Completion>);

pub async fn run(context: Context) -> Result<(), CliError> {
    let Context {
        client,
        view,
        banner_duration,
    } = context;

    let mut widget =
        TickerWidget::new(TextChartSurface::new()).with_banner_duration(banner_duration);
    let stdin = BufReader::new(tokio::io::stdin());
    let interrupted = async {
        if tokio::signal::ctrl_c().await.is_err() {
            pending::<()>().await;
        }
    };

    drive(&mut widget, &client, stdin, interrupted, |widget| {
        output::redraw(&view.draw(widget))
    })
    .await?;

    println!();
    Ok(())
}

/// Event loop: input lines, the in-flight request and the banner deadline.
///
/// A new line aborts whatever request is still running; the widget also drops
/// completions from older submissions, so only the latest one ever renders.
/// Ends on end of input or when `shutdown` resolves. `frame` runs once up front
/// and after every event.
pub(crate) async fn drive<S, R, F>(
    widget: &mut TickerWidget<S>,
    client: &AnalysisClient,
    input: R,
    shutdown: impl Future<Output = ()>,
    mut frame: F,
) -> Result<(), CliError>
where
    S: ChartSurface,
    R: AsyncBufRead + Unpin,
    F: FnMut(&TickerWidget<S>) -> Result<(), CliError>,
{
    let mut lines = input.lines();
    let mut in_flight: Option<InFlight> = None;
    tokio::pin!(shutdown);

    frame(&*widget)?;

    loop {
        let deadline = widget.banner_deadline();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                if let Some((_, previous)) = in_flight.take() {
                    previous.abort();
                    tracing::debug!("aborted in-flight request");
                }

                if let Some(submission) = widget.submit_input(line, Instant::now()) {
                    let generation = submission.generation;
                    let client = client.clone();
                    let task = tokio::spawn(async move { submission.fetch(&client).await });
                    in_flight = Some((generation, task));
                }
            }
            (generation, joined) = settle(&mut in_flight) => {
                in_flight = None;
                match joined {
                    Ok(completion) => {
                        widget.complete(completion, Instant::now());
                    }
                    Err(error) if error.is_cancelled() => {}
                    Err(error) => {
                        tracing::error!(error = %error, generation, "request task failed");
                        widget.fail(
                            generation,
                            AnalysisError::request_failed(REQUEST_FAILED_MESSAGE),
                            Instant::now(),
                        );
                    }
                }
            }
            () = wait_until(deadline) => {
                widget.tick(Instant::now());
            }
            () = &mut shutdown => {
                break;
            }
        }

        frame(&*widget)?;
    }

    if let Some((_, handle)) = in_flight.take() {
        handle.abort();
    }
    Ok(())
}

async fn settle(in_flight: &mut Option<InFlight>) -> (u64, Result<Completion, JoinError>) {
    match in_flight {
        Some((generation, handle)) => (*generation, handle.await),
        None => pending().await,
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => pending().await,
    }
}
