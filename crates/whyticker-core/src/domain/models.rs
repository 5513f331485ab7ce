use serde::{Deserialize, Serialize};

use crate::{CoreError, ValidationError};

/// Payload of `GET /analyze/{symbol}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub stock: StockSnapshot,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub news: Vec<NewsArticle>,
}

impl AnalysisResult {
    /// Decode a response body and check the invariants serde cannot express.
    pub fn from_json(body: &str) -> Result<Self, CoreError> {
        let result: Self = serde_json::from_str(body)?;
        result.validate()?;
        Ok(result)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(historical) = &self.stock.historical {
            historical.validate()?;
        }
        Ok(())
    }
}

/// Current price snapshot plus the optional intraday series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub name: String,
    pub price: f64,
    /// Percent change against the previous close.
    pub change: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical: Option<HistoricalSeries>,
}

impl StockSnapshot {
    pub fn direction(&self) -> ChangeDirection {
        ChangeDirection::of(self.change)
    }
}

/// Direction of a percent change. Zero counts as down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
}

impl ChangeDirection {
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
        }
    }
}

/// Time-aligned timestamps and prices used to draw the price chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub timestamps: Vec<String>,
    pub prices: Vec<f64>,
}

impl HistoricalSeries {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timestamps.len() != self.prices.len() {
            return Err(ValidationError::SeriesLengthMismatch {
                timestamps: self.timestamps.len(),
                prices: self.prices.len(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.timestamps
            .iter()
            .map(String::as_str)
            .zip(self.prices.iter().copied())
    }
}

/// Sentiment classification returned alongside the news.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// `None` when the backend sends a null or absent label; reads as unclear.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Sentiment {
    pub fn tone(&self) -> SentimentTone {
        self.label
            .as_deref()
            .map_or(SentimentTone::Unclear, SentimentTone::from_label)
    }
}

/// Fixed lookup of sentiment labels. Matching is exact, so `"Positive"` is unclear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentTone {
    Positive,
    Negative,
    Neutral,
    Unclear,
}

impl SentimentTone {
    pub fn from_label(label: &str) -> Self {
        match label {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            _ => Self::Unclear,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "stock": {
            "name": "Apple Inc.",
            "price": 189.84,
            "change": -3.2,
            "volume": 5123400,
            "historical": {
                "timestamps": ["2024-03-07 14:30:00", "2024-03-07 15:30:00"],
                "prices": [191.2, 189.84]
            }
        },
        "sentiment": {"label": "negative", "score": 0.87},
        "news": [{
            "title": "Apple slides",
            "description": "Shares fell.",
            "publishedAt": "2024-03-07T16:00:00Z",
            "url": "https://news.example/apple"
        }]
    }"#;

    #[test]
    fn decodes_backend_payload() {
        let result = AnalysisResult::from_json(BODY).expect("payload should decode");
        assert_eq!(result.stock.name, "Apple Inc.");
        assert_eq!(result.stock.volume, Some(5_123_400));
        assert_eq!(result.stock.direction(), ChangeDirection::Down);
        assert_eq!(result.sentiment.tone(), SentimentTone::Negative);
        assert_eq!(result.news[0].published_at, "2024-03-07T16:00:00Z");
        let historical = result.stock.historical.expect("series present");
        assert_eq!(historical.len(), 2);
    }

    #[test]
    fn historical_and_news_are_optional() {
        let body = r#"{"stock":{"name":"X","price":1.0,"change":0.5},"sentiment":{"label":"neutral"}}"#;
        let result = AnalysisResult::from_json(body).expect("minimal payload");
        assert!(result.stock.historical.is_none());
        assert!(result.news.is_empty());
        assert_eq!(result.sentiment.score, None);
    }

    #[test]
    fn rejects_mismatched_series() {
        let body = r#"{"stock":{"name":"X","price":1.0,"change":0.5,
            "historical":{"timestamps":["2024-03-07 14:30:00"],"prices":[1.0,2.0]}},
            "sentiment":{"label":"neutral"}}"#;
        let err = AnalysisResult::from_json(body).expect_err("must fail");
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::SeriesLengthMismatch {
                timestamps: 1,
                prices: 2
            })
        ));
    }

    #[test]
    fn zero_change_counts_as_down() {
        assert_eq!(ChangeDirection::of(0.0), ChangeDirection::Down);
        assert_eq!(ChangeDirection::of(0.01), ChangeDirection::Up);
    }

    #[test]
    fn unknown_labels_are_unclear() {
        assert_eq!(SentimentTone::from_label("mixed"), SentimentTone::Unclear);
        assert_eq!(SentimentTone::from_label("Positive"), SentimentTone::Unclear);
        assert_eq!(SentimentTone::from_label("positive"), SentimentTone::Positive);
    }

    #[test]
    fn null_or_missing_label_decodes_as_unclear() {
        let null_label = r#"{"stock":{"name":"X","price":1.0,"change":0.5},"sentiment":{"label":null,"score":0.4}}"#;
        let no_label = r#"{"stock":{"name":"X","price":1.0,"change":0.5},"sentiment":{"score":0.4}}"#;

        for body in [null_label, no_label] {
            let result = AnalysisResult::from_json(body).expect("label is optional");
            assert_eq!(result.sentiment.label, None);
            assert_eq!(result.sentiment.tone(), SentimentTone::Unclear);
        }
    }
}
