use std::fmt::Write as _;

use crate::chart::TextChartSurface;
use crate::page::{Page, Tone};
use crate::widget::TickerWidget;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";

/// Draws a widget backed by a [`TextChartSurface`] as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalView {
    pub color: bool,
    pub chart_width: usize,
    pub chart_height: usize,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self {
            color: true,
            chart_width: 72,
            chart_height: 10,
        }
    }
}

impl TerminalView {
    pub fn draw(&self, widget: &TickerWidget<TextChartSurface>) -> String {
        let page = widget.page();
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.paint("whyticker", BOLD));
        if !page.ticker.is_empty() {
            let _ = writeln!(out, "> {}", page.ticker.trim());
        }

        if page.loading_visible {
            let _ = writeln!(out, "{}", self.paint("Loading…", GRAY));
        }

        if page.error_banner.is_visible() {
            let _ = writeln!(
                out,
                "{}",
                self.paint(&format!("✗ {}", page.error_banner.message()), RED)
            );
        }

        if page.result_visible {
            self.draw_result(page, &mut out);

            if let Some(id) = widget.chart().current() {
                let _ = writeln!(out);
                for line in widget
                    .chart()
                    .surface()
                    .render(id, self.chart_width, self.chart_height)
                {
                    let _ = writeln!(out, "{}", self.paint(&line, CYAN));
                }
            }

            self.draw_news(page, &mut out);
        }

        out
    }

    fn draw_result(&self, page: &Page, out: &mut String) {
        let _ = writeln!(out);
        let mut headline = format!(
            "{}  {}  {}",
            self.paint(&page.stock_name.text, BOLD),
            page.stock_price.text,
            self.tone(&page.price_change.text, page.price_change.tone)
        );
        if !page.stock_volume.text.is_empty() {
            let _ = write!(
                headline,
                "  {}",
                self.tone(&page.stock_volume.text, page.stock_volume.tone)
            );
        }
        let _ = writeln!(out, "{headline}");
        let _ = writeln!(out, "{}", self.tone(&page.sentiment.text, page.sentiment.tone));
        let _ = writeln!(
            out,
            "{}",
            self.tone(&page.sentiment_source.text, page.sentiment_source.tone)
        );
    }

    fn draw_news(&self, page: &Page, out: &mut String) {
        if page.news.is_empty() {
            return;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.paint("News", BOLD));
        for card in &page.news {
            let _ = writeln!(
                out,
                "• {}  {}",
                self.paint(&card.title, BOLD),
                self.paint(&card.published, GRAY)
            );
            if !card.description.is_empty() {
                let _ = writeln!(out, "  {}", self.paint(&card.description, GRAY));
            }
            let _ = writeln!(out, "  {} {}", card.link_text, self.paint(&card.url, CYAN));
        }
    }

    fn tone(&self, text: &str, tone: Tone) -> String {
        match tone {
            Tone::Plain => text.to_owned(),
            Tone::Positive => self.paint(text, GREEN),
            Tone::Negative => self.paint(text, RED),
            Tone::Muted => self.paint(text, GRAY),
        }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[test]
    fn plain_view_shows_error_banner() {
        let mut widget = TickerWidget::new(TextChartSurface::new());
        widget.submit_input("12", Instant::now());

        let view = TerminalView {
            color: false,
            ..TerminalView::default()
        };
        let drawn = view.draw(&widget);
        assert!(drawn.contains("✗ Please enter a valid ticker symbol (letters only)"));
        assert!(!drawn.contains("Loading"));
    }

    #[test]
    fn loading_indicator_is_drawn_while_pending() {
        let mut widget = TickerWidget::new(TextChartSurface::new());
        widget.submit_input("aapl", Instant::now());

        let drawn = TerminalView::default().draw(&widget);
        assert!(drawn.contains("Loading…"));
        assert!(drawn.contains("> aapl"));
    }
}
