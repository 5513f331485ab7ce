//! # whyticker core
//!
//! Domain types and the HTTP client behind the whyticker widget.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `AnalysisClient`, one GET per valid submission |
//! | [`config`] | Backend base URL, timeout, user agent |
//! | [`domain`] | Ticker symbol, analysis payload, timestamps |
//! | [`error`] | Validation errors and the three submission failure kinds |
//! | [`http_client`] | Transport trait and the reqwest implementation |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use whyticker_core::{AnalysisClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalysisClient::new(ClientConfig::from_env()?);
//!     let result = client.analyze_input("aapl").await?;
//!     println!("{} ${:.2} ({}%)", result.stock.name, result.stock.price, result.stock.change);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failed submission is an [`AnalysisError`] whose message is ready to
//! show to the user:
//!
//! ```rust
//! use whyticker_core::{AnalysisError, AnalysisErrorKind};
//!
//! let error = AnalysisError::from_status(404);
//! assert_eq!(error.kind(), AnalysisErrorKind::NotFound);
//! assert_eq!(error.message(), "Invalid ticker symbol or data unavailable");
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;

pub use client::AnalysisClient;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};

pub use domain::{
    AnalysisResult, ChangeDirection, HistoricalSeries, MarketTimestamp, NewsArticle, Sentiment,
    SentimentTone, StockSnapshot, TickerSymbol, MAX_SYMBOL_LEN,
};

pub use error::{
    AnalysisError, AnalysisErrorKind, CoreError, ValidationError, INVALID_INPUT_MESSAGE,
    NOT_FOUND_MESSAGE, REQUEST_FAILED_MESSAGE,
};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
