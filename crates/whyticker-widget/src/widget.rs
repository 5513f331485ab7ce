use tokio::time::{Duration, Instant};
use whyticker_core::{AnalysisClient, AnalysisError, AnalysisResult, TickerSymbol};

use crate::chart::{ChartSlot, ChartSurface, LineChartSpec};
use crate::page::{Page, Tone};
use crate::render;

pub const BANNER_DURATION: Duration = Duration::from_secs(3);

/// Where the widget is in the current submission.
///
/// `Idle → Validating → (Error | Loading) → (Rendered | Error)`. `Validating`
/// only exists inside [`TickerWidget::submit`]. `Error` falls back to `Idle`
/// when the banner expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Validating,
    Loading { symbol: TickerSymbol, generation: u64 },
    Rendered { symbol: TickerSymbol },
    Error,
}

impl WidgetState {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Loading { .. } => "loading",
            Self::Rendered { .. } => "rendered",
            Self::Error => "error",
        }
    }
}

/// A validated submission waiting for its request to be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub generation: u64,
    pub symbol: TickerSymbol,
}

impl Submission {
    pub async fn fetch(self, client: &AnalysisClient) -> Completion {
        let outcome = client.analyze(&self.symbol).await;
        Completion {
            generation: self.generation,
            symbol: self.symbol,
            outcome,
        }
    }
}

/// Settled request, tagged with the submission that issued it.
#[derive(Debug, Clone)]
pub struct Completion {
    pub generation: u64,
    pub symbol: TickerSymbol,
    pub outcome: Result<AnalysisResult, AnalysisError>,
}

/// Ticker input, result panel, loading indicator, error banner and price chart.
///
/// Overlapping submissions are cancel-and-replace: every submission bumps the
/// generation and completions from older generations are dropped.
#[derive(Debug)]
pub struct TickerWidget<S: ChartSurface> {
    page: Page,
    chart: ChartSlot<S>,
    state: WidgetState,
    generation: u64,
    banner_duration: Duration,
}

impl<S: ChartSurface> TickerWidget<S> {
    pub fn new(surface: S) -> Self {
        Self {
            page: Page::default(),
            chart: ChartSlot::new(surface),
            state: WidgetState::Idle,
            generation: 0,
            banner_duration: BANNER_DURATION,
        }
    }

    pub fn with_banner_duration(mut self, banner_duration: Duration) -> Self {
        self.banner_duration = banner_duration;
        self
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn chart(&self) -> &ChartSlot<S> {
        &self.chart
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.page.ticker = value.into();
    }

    /// Enter pressed: validate the current input and, if valid, hand back the request to run.
    ///
    /// Any earlier in-flight submission becomes stale.
    pub fn submit(&mut self, now: Instant) -> Option<Submission> {
        self.generation += 1;
        self.transition(WidgetState::Validating);

        match TickerSymbol::parse(&self.page.ticker) {
            Err(reason) => {
                let error = AnalysisError::from(reason);
                self.page.loading_visible = false;
                self.show_error(error.message(), now);
                self.transition(WidgetState::Error);
                None
            }
            Ok(symbol) => {
                self.page.error_banner.hide();
                self.page.result_visible = false;
                self.page.loading_visible = true;
                self.transition(WidgetState::Loading {
                    symbol: symbol.clone(),
                    generation: self.generation,
                });
                Some(Submission {
                    generation: self.generation,
                    symbol,
                })
            }
        }
    }

    pub fn submit_input(&mut self, value: impl Into<String>, now: Instant) -> Option<Submission> {
        self.set_input(value);
        self.submit(now)
    }

    /// Apply a settled request. Returns false when the completion is stale and was dropped.
    pub fn complete(&mut self, completion: Completion, now: Instant) -> bool {
        if !self.is_loading(completion.generation) {
            tracing::debug!(
                symbol = %completion.symbol,
                generation = completion.generation,
                latest = self.generation,
                "dropping stale completion"
            );
            return false;
        }

        self.page.loading_visible = false;
        match completion.outcome {
            Ok(result) => {
                self.render(&result);
                self.page.result_visible = true;
                self.transition(WidgetState::Rendered {
                    symbol: completion.symbol,
                });
            }
            Err(error) => {
                self.show_error(error.message(), now);
                self.transition(WidgetState::Error);
            }
        }
        true
    }

    /// Settle submission `generation` with `error` when its request never produced
    /// a completion. Returns false when that submission is no longer current.
    pub fn fail(&mut self, generation: u64, error: AnalysisError, now: Instant) -> bool {
        if !self.is_loading(generation) {
            return false;
        }
        self.page.loading_visible = false;
        self.show_error(error.message(), now);
        self.transition(WidgetState::Error);
        true
    }

    /// Validate, fetch and apply in one go.
    pub async fn run(&mut self, client: &AnalysisClient, value: impl Into<String>) -> &WidgetState {
        if let Some(submission) = self.submit_input(value, Instant::now()) {
            let completion = submission.fetch(client).await;
            self.complete(completion, Instant::now());
        }
        &self.state
    }

    /// Expire the error banner. Returns true when something changed on the page.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.page.error_banner.expire(now) {
            return false;
        }
        if self.state == WidgetState::Error {
            self.transition(WidgetState::Idle);
        }
        true
    }

    pub const fn banner_deadline(&self) -> Option<Instant> {
        self.page.error_banner.deadline()
    }

    fn render(&mut self, result: &AnalysisResult) {
        let stock = &result.stock;
        self.page.stock_name.set(stock.name.clone(), Tone::Plain);
        self.page
            .stock_price
            .set(render::price_text(stock.price), Tone::Plain);
        match stock.volume {
            Some(volume) => self
                .page
                .stock_volume
                .set(render::volume_text(volume), Tone::Muted),
            None => self.page.stock_volume.set("", Tone::Muted),
        }
        let (change, tone) = render::change_indicator(stock.change);
        self.page.price_change.set(change, tone);

        let sentiment = result.sentiment.tone();
        self.page.sentiment.set(
            render::sentiment_phrase(sentiment),
            render::sentiment_tone_style(sentiment),
        );
        self.page
            .sentiment_source
            .set(render::sentiment_source(result.news.len(), sentiment), Tone::Muted);

        match &stock.historical {
            Some(series) => {
                self.chart.replace(LineChartSpec::from_series(series));
            }
            None => self.chart.clear(),
        }

        self.page.news = result.news.iter().map(render::news_card).collect();
    }

    fn is_loading(&self, submission: u64) -> bool {
        matches!(&self.state, WidgetState::Loading { generation, .. } if *generation == submission)
    }

    fn show_error(&mut self, message: &str, now: Instant) {
        self.page
            .error_banner
            .show(message, now, self.banner_duration);
    }

    fn transition(&mut self, next: WidgetState) {
        tracing::debug!(from = self.state.name(), to = next.name(), generation = self.generation, "widget state");
        self.state = next;
    }
}
