use tokio::time::{Duration, Instant};

/// Visual styling attached to a text region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Positive,
    Negative,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextNode {
    pub text: String,
    pub tone: Tone,
}

impl TextNode {
    pub fn set(&mut self, text: impl Into<String>, tone: Tone) {
        self.text = text.into();
        self.tone = tone;
    }
}

/// Error banner that hides itself once its deadline passes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorBanner {
    message: String,
    deadline: Option<Instant>,
}

impl ErrorBanner {
    pub fn show(&mut self, message: impl Into<String>, now: Instant, duration: Duration) {
        self.message = message.into();
        self.deadline = Some(now + duration);
    }

    pub fn hide(&mut self) {
        self.deadline = None;
    }

    pub const fn is_visible(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Hide the banner if `now` is past its deadline. Returns true when it was hidden.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// One rendered news article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsCard {
    pub title: String,
    pub published: String,
    pub description: String,
    pub url: String,
    pub link_text: &'static str,
}

/// Every region the widget writes to. The price chart lives in the widget's chart slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub ticker: String,
    pub result_visible: bool,
    pub loading_visible: bool,
    pub error_banner: ErrorBanner,
    pub stock_name: TextNode,
    pub stock_price: TextNode,
    pub stock_volume: TextNode,
    pub price_change: TextNode,
    pub sentiment: TextNode,
    pub sentiment_source: TextNode,
    pub news: Vec<NewsCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_expires_at_deadline() {
        let start = Instant::now();
        let mut banner = ErrorBanner::default();
        banner.show("boom", start, Duration::from_secs(3));

        assert!(!banner.expire(start + Duration::from_millis(2_999)));
        assert!(banner.is_visible());
        assert!(banner.expire(start + Duration::from_secs(3)));
        assert!(!banner.is_visible());
        assert_eq!(banner.message(), "boom");
    }

    #[test]
    fn showing_again_extends_deadline() {
        let start = Instant::now();
        let mut banner = ErrorBanner::default();
        banner.show("first", start, Duration::from_secs(3));
        banner.show("second", start + Duration::from_secs(2), Duration::from_secs(3));

        assert!(!banner.expire(start + Duration::from_secs(4)));
        assert_eq!(banner.message(), "second");
    }
}
