//! Pure mapping from the analysis payload to page text.

use whyticker_core::{ChangeDirection, MarketTimestamp, NewsArticle, SentimentTone};

use crate::page::{NewsCard, Tone};

pub const DESCRIPTION_LIMIT: usize = 200;
pub const READ_MORE: &str = "Read more →";

/// `↑ 1.5%` with positive styling when `change > 0`, otherwise `↓ 3.2%` with negative styling.
pub fn change_indicator(change: f64) -> (String, Tone) {
    let direction = ChangeDirection::of(change);
    let tone = match direction {
        ChangeDirection::Up => Tone::Positive,
        ChangeDirection::Down => Tone::Negative,
    };
    (format!("{} {}%", direction.arrow(), change.abs()), tone)
}

pub fn price_text(price: f64) -> String {
    format!("${price:.2}")
}

/// `Volume 5,123,400`
pub fn volume_text(volume: u64) -> String {
    let digits = volume.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("Volume {grouped}")
}

pub const fn sentiment_phrase(tone: SentimentTone) -> &'static str {
    match tone {
        SentimentTone::Positive => "Positive news sentiment is driving the stock",
        SentimentTone::Negative => "Negative news sentiment is affecting the stock",
        SentimentTone::Neutral => "News sentiment is neutral",
        SentimentTone::Unclear => "News sentiment is unclear",
    }
}

pub const fn sentiment_tone_style(tone: SentimentTone) -> Tone {
    match tone {
        SentimentTone::Positive => Tone::Positive,
        SentimentTone::Negative => Tone::Negative,
        SentimentTone::Neutral | SentimentTone::Unclear => Tone::Plain,
    }
}

/// How many articles informed the sentiment. Without news the backend falls back
/// to neutral, which is only called out when the label agrees.
pub fn sentiment_source(article_count: usize, tone: SentimentTone) -> String {
    match (article_count, tone) {
        (0, SentimentTone::Neutral) => {
            String::from("No recent news found; sentiment defaults to neutral")
        }
        (0, _) => String::from("No recent news found"),
        (1, _) => String::from("Based on 1 recent news article"),
        (n, _) => format!("Based on {n} recent news articles"),
    }
}

/// `Jan 5, 2024, 02:30 PM`, or the raw value when it cannot be parsed.
pub fn published_date(raw: &str) -> String {
    MarketTimestamp::parse(raw)
        .map(|ts| ts.format_published())
        .unwrap_or_else(|_| raw.to_owned())
}

pub fn truncate_description(text: &str, limit: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(limit) {
        None => text.to_owned(),
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
    }
}

pub fn news_card(article: &NewsArticle) -> NewsCard {
    NewsCard {
        title: article.title.clone(),
        published: published_date(&article.published_at),
        description: truncate_description(
            article.description.as_deref().unwrap_or_default(),
            DESCRIPTION_LIMIT,
        ),
        url: article.url.clone(),
        link_text: READ_MORE,
    }
}
