//! Price chart plumbing.
//!
//! A [`ChartSurface`] is the rendering sink (canvas plus charting library in a
//! browser, a text plot in the terminal). [`ChartSlot`] owns the single live
//! chart and always destroys the previous instance before mounting a new one.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use whyticker_core::{HistoricalSeries, MarketTimestamp};

/// Fixed line-chart styling.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub tension: f64,
    pub fill: bool,
    pub show_legend: bool,
    pub tick_color: &'static str,
    pub grid_color: &'static str,
    pub x_label_rotation_deg: u16,
    pub font_size: u16,
    pub begin_at_zero: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            border_color: "#00C9FF",
            background_color: "rgba(0, 201, 255, 0.1)",
            tension: 0.4,
            fill: true,
            show_legend: false,
            tick_color: "#9CA3AF",
            grid_color: "rgba(255, 255, 255, 0.1)",
            x_label_rotation_deg: 45,
            font_size: 12,
            begin_at_zero: false,
        }
    }
}

/// Labeled price series handed to a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartSpec {
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub style: ChartStyle,
}

impl LineChartSpec {
    /// x: `h:mm:ss AM/PM` labels, y: prices. Unparseable timestamps keep their raw text.
    pub fn from_series(series: &HistoricalSeries) -> Self {
        let labels = series
            .timestamps
            .iter()
            .map(|raw| {
                MarketTimestamp::parse(raw)
                    .map(|ts| ts.format_time_label())
                    .unwrap_or_else(|_| raw.clone())
            })
            .collect();

        Self {
            dataset_label: String::from("Price"),
            labels,
            values: series.prices.clone(),
            style: ChartStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartId(u64);

impl ChartId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ChartId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "chart-{}", self.0)
    }
}

/// Opaque chart rendering sink.
pub trait ChartSurface {
    fn mount(&mut self, spec: LineChartSpec) -> ChartId;
    fn destroy(&mut self, id: ChartId);
}

/// Holds at most one mounted chart.
#[derive(Debug)]
pub struct ChartSlot<S: ChartSurface> {
    surface: S,
    current: Option<ChartId>,
}

impl<S: ChartSurface> ChartSlot<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    /// Destroy the live chart (if any), then mount `spec`.
    pub fn replace(&mut self, spec: LineChartSpec) -> ChartId {
        self.clear();
        let id = self.surface.mount(spec);
        tracing::debug!(chart = %id, "chart mounted");
        self.current = Some(id);
        id
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.surface.destroy(previous);
            tracing::debug!(chart = %previous, "chart destroyed");
        }
    }

    pub const fn current(&self) -> Option<ChartId> {
        self.current
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: ChartSurface> Drop for ChartSlot<S> {
    fn drop(&mut self) {
        self.clear();
    }
}

const POINT: char = '•';
const RISE: char = '╱';
const FALL: char = '╲';
const FLAT: char = '─';
const Y_AXIS_WIDTH: usize = 10;

/// Terminal surface that plots charts as text.
#[derive(Debug, Default)]
pub struct TextChartSurface {
    next_id: u64,
    charts: BTreeMap<ChartId, LineChartSpec>,
}

impl TextChartSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_charts(&self) -> usize {
        self.charts.len()
    }

    pub fn spec(&self, id: ChartId) -> Option<&LineChartSpec> {
        self.charts.get(&id)
    }

    /// Plot chart `id` into at most `width` columns and exactly `height` rows
    /// (plus one axis line). Returns no lines for unknown ids.
    pub fn render(&self, id: ChartId, width: usize, height: usize) -> Vec<String> {
        let Some(spec) = self.charts.get(&id) else {
            return Vec::new();
        };
        if spec.values.is_empty() {
            return vec![String::from("(no price history)")];
        }

        let height = height.max(2);
        let columns = width.saturating_sub(Y_AXIS_WIDTH + 1).max(2);
        let samples = sample(&spec.values, columns);

        let (min, max) = bounds(&samples, spec.style.begin_at_zero);
        let span = max - min;
        let row_of = |value: f64| -> usize {
            if span <= f64::EPSILON {
                return height / 2;
            }
            let scaled = (max - value) / span * (height - 1) as f64;
            (scaled.round() as usize).min(height - 1)
        };

        let mut grid = vec![vec![' '; samples.len()]; height];
        let mut previous_row: Option<usize> = None;
        for (column, value) in samples.iter().enumerate() {
            let row = row_of(*value);
            if let Some(prev) = previous_row {
                let (from, to, glyph) = match prev.cmp(&row) {
                    std::cmp::Ordering::Greater => (row + 1, prev, RISE),
                    std::cmp::Ordering::Less => (prev + 1, row, FALL),
                    std::cmp::Ordering::Equal => (row, row, FLAT),
                };
                if glyph == FLAT {
                    grid[row][column] = FLAT;
                } else {
                    for connector in grid.iter_mut().take(to).skip(from) {
                        connector[column] = glyph;
                    }
                }
            }
            grid[row][column] = POINT;
            previous_row = Some(row);
        }

        let mut lines = Vec::with_capacity(height + 1);
        for (index, row) in grid.into_iter().enumerate() {
            let axis = if index == 0 {
                format!("{max:>width$.2}", width = Y_AXIS_WIDTH)
            } else if index == height - 1 {
                format!("{min:>width$.2}", width = Y_AXIS_WIDTH)
            } else {
                " ".repeat(Y_AXIS_WIDTH)
            };
            let body: String = row.into_iter().collect();
            lines.push(format!("{axis}┤{}", body.trim_end()));
        }

        let first = spec.labels.first().map(String::as_str).unwrap_or_default();
        let last = spec.labels.last().map(String::as_str).unwrap_or_default();
        let gap = samples
            .len()
            .saturating_sub(first.chars().count() + last.chars().count())
            .max(1);
        lines.push(format!(
            "{}└{first}{}{last}",
            " ".repeat(Y_AXIS_WIDTH),
            " ".repeat(gap)
        ));

        lines
    }
}

impl ChartSurface for TextChartSurface {
    fn mount(&mut self, spec: LineChartSpec) -> ChartId {
        self.next_id += 1;
        let id = ChartId::new(self.next_id);
        self.charts.insert(id, spec);
        id
    }

    fn destroy(&mut self, id: ChartId) {
        self.charts.remove(&id);
    }
}

/// Evenly pick at most `columns` values, always keeping the first and last.
fn sample(values: &[f64], columns: usize) -> Vec<f64> {
    if values.len() <= columns {
        return values.to_vec();
    }
    let last = values.len() - 1;
    (0..columns)
        .map(|column| values[column * last / (columns - 1)])
        .collect()
}

fn bounds(values: &[f64], begin_at_zero: bool) -> (f64, f64) {
    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if begin_at_zero {
        min = min.min(0.0);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(prices: &[f64]) -> HistoricalSeries {
        HistoricalSeries {
            timestamps: (0..prices.len())
                .map(|hour| format!("2024-03-07 {:02}:30:00", 9 + hour))
                .collect(),
            prices: prices.to_vec(),
        }
    }

    #[test]
    fn spec_uses_time_labels_and_fixed_style() {
        let spec = LineChartSpec::from_series(&series(&[1.0, 2.0]));
        assert_eq!(spec.labels, vec!["9:30:00 AM", "10:30:00 AM"]);
        assert_eq!(spec.dataset_label, "Price");
        assert_eq!(spec.style.border_color, "#00C9FF");
        assert!(!spec.style.show_legend);
        assert!(!spec.style.begin_at_zero);
    }

    #[test]
    fn unparseable_timestamps_keep_raw_label() {
        let spec = LineChartSpec::from_series(&HistoricalSeries {
            timestamps: vec![String::from("later")],
            prices: vec![3.0],
        });
        assert_eq!(spec.labels, vec!["later"]);
    }

    #[test]
    fn slot_destroys_previous_chart_before_mounting() {
        let mut slot = ChartSlot::new(TextChartSurface::new());
        let first = slot.replace(LineChartSpec::from_series(&series(&[1.0, 2.0])));
        let second = slot.replace(LineChartSpec::from_series(&series(&[3.0, 4.0])));

        assert_ne!(first, second);
        assert_eq!(slot.current(), Some(second));
        assert_eq!(slot.surface().live_charts(), 1);
        assert!(slot.surface().spec(first).is_none());
    }

    #[test]
    fn clear_leaves_no_live_chart() {
        let mut slot = ChartSlot::new(TextChartSurface::new());
        slot.replace(LineChartSpec::from_series(&series(&[1.0])));
        slot.clear();
        assert_eq!(slot.current(), None);
        assert_eq!(slot.surface().live_charts(), 0);
    }

    #[test]
    fn renders_extremes_on_first_and_last_rows() {
        let mut surface = TextChartSurface::new();
        let id = surface.mount(LineChartSpec::from_series(&series(&[10.0, 12.5, 11.0])));
        let lines = surface.render(id, 40, 5);

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("     12.50┤"));
        assert!(lines[4].starts_with("     10.00┤"));
        assert!(lines[4].contains(POINT));
        assert!(lines[5].contains("9:30:00 AM"));
        assert!(lines[5].contains("11:30:00 AM"));
    }

    #[test]
    fn flat_series_renders_on_middle_row() {
        let mut surface = TextChartSurface::new();
        let id = surface.mount(LineChartSpec::from_series(&series(&[5.0, 5.0, 5.0])));
        let lines = surface.render(id, 40, 5);
        assert!(lines[2].contains(POINT));
        assert!(!lines[0].contains(POINT));
    }

    #[test]
    fn rise_and_fall_draw_matching_connectors() {
        let mut surface = TextChartSurface::new();
        let id = surface.mount(LineChartSpec::from_series(&series(&[0.0, 10.0, 0.0])));
        let lines = surface.render(id, 40, 5);
        let count = |glyph: char| -> usize {
            lines.iter().map(|line| line.matches(glyph).count()).sum()
        };

        assert_eq!(count(RISE), 3);
        assert_eq!(count(FALL), 3);
        assert_eq!(count(POINT), 3);
    }

    #[test]
    fn long_series_is_sampled_to_width() {
        let prices: Vec<f64> = (0..200).map(f64::from).collect();
        assert_eq!(sample(&prices, 20).len(), 20);
        assert_eq!(sample(&prices, 20).last(), Some(&199.0));
    }
}
