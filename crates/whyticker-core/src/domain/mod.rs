//! # Domain Models
//!
//! Types for the analysis payload and the ticker the user submits.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TickerSymbol`] | Validated ticker, 1 to 10 ASCII letters |
//! | [`AnalysisResult`] | Response of `GET /analyze/{symbol}` |
//! | [`StockSnapshot`] | Name, price, percent change, optional series |
//! | [`HistoricalSeries`] | Timestamps and prices for the chart |
//! | [`Sentiment`] | Sentiment label and score |
//! | [`NewsArticle`] | One news item |
//! | [`MarketTimestamp`] | Backend timestamp with en-US formatting |

mod models;
mod symbol;
mod timestamp;

pub use models::{
    AnalysisResult, ChangeDirection, HistoricalSeries, NewsArticle, Sentiment, SentimentTone,
    StockSnapshot,
};
pub use symbol::{TickerSymbol, MAX_SYMBOL_LEN};
pub use timestamp::MarketTimestamp;
