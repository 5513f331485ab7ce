//! Ticker widget for whyticker.
//!
//! - [`widget`]: the submission state machine (`TickerWidget`)
//! - [`page`]: regions the widget writes to
//! - [`render`]: payload to text mapping (change arrow, sentiment phrase, news cards)
//! - [`chart`]: single-chart slot over a pluggable [`chart::ChartSurface`]
//! - [`terminal`]: plain-text drawing of the page and chart

pub mod chart;
pub mod page;
pub mod render;
pub mod terminal;
pub mod widget;

pub use chart::{ChartId, ChartSlot, ChartStyle, ChartSurface, LineChartSpec, TextChartSurface};
pub use page::{ErrorBanner, NewsCard, Page, TextNode, Tone};
pub use terminal::TerminalView;
pub use widget::{Completion, Submission, TickerWidget, WidgetState, BANNER_DURATION};
