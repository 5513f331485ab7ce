use std::sync::Arc;
use std::time::Instant;

use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{AnalysisError, AnalysisResult, ClientConfig, TickerSymbol};

/// One-shot client for `GET /analyze/{symbol}`. No retries, no caching.
#[derive(Clone)]
pub struct AnalysisClient {
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(config.user_agent()));
        Self::with_http_client(config, http_client)
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validates raw input first; invalid input never reaches the transport.
    pub async fn analyze_input(&self, input: &str) -> Result<AnalysisResult, AnalysisError> {
        let symbol = TickerSymbol::parse(input)?;
        self.analyze(&symbol).await
    }

    pub async fn analyze(&self, symbol: &TickerSymbol) -> Result<AnalysisResult, AnalysisError> {
        let url = self.config.analyze_url(symbol);
        let request = HttpRequest::get(&url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms());

        tracing::debug!(%symbol, %url, "requesting analysis");
        let started = Instant::now();

        let response = self.http_client.execute(request).await.map_err(|error| {
            tracing::warn!(%symbol, error = %error, "analysis transport failed");
            AnalysisError::request_failed(error.message())
        })?;

        let latency_ms = started.elapsed().as_millis() as u64;
        if !response.is_success() {
            tracing::warn!(%symbol, status = response.status, latency_ms, "analysis request rejected");
            return Err(AnalysisError::from_status(response.status));
        }

        let result = AnalysisResult::from_json(&response.body).map_err(|error| {
            tracing::warn!(%symbol, error = %error, "analysis payload rejected");
            AnalysisError::request_failed(error.to_string())
        })?;

        tracing::info!(
            %symbol,
            latency_ms,
            articles = result.news.len(),
            has_series = result.stock.historical.is_some(),
            "analysis received"
        );
        Ok(result)
    }
}

impl std::fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
