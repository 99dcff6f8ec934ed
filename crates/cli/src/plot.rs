//! Inline terminal chart of the forecast.

use std::io::{self, IsTerminal};

use chrono::NaiveDate;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use forecast_facade::{ForecastPoint, TimeSeries};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Terminal, TerminalOptions, Viewport,
};
use tracing::debug;

/// Rows taken by the inline chart.
const PLOT_HEIGHT: u16 = 20;

/// Chart series with x measured in days since the first observation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub history: Vec<(f64, f64)>,
    pub yhat: Vec<(f64, f64)>,
    pub lower: Vec<(f64, f64)>,
    pub upper: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub first: NaiveDate,
    pub last_observed: NaiveDate,
    pub last_forecast: NaiveDate,
}

impl ChartData {
    /// `None` when there is nothing to draw.
    pub fn new(history: &TimeSeries, forecast: &[ForecastPoint]) -> Option<Self> {
        let first = history.first_date()?;
        let last_observed = history.last_date()?;
        let last_forecast = forecast.last()?.ds;
        let x = |date: NaiveDate| (date - first).num_days() as f64;

        let history_points: Vec<(f64, f64)> = history
            .ds()
            .iter()
            .zip(history.y())
            .map(|(&d, &y)| (x(d), y))
            .collect();
        let yhat: Vec<(f64, f64)> = forecast.iter().map(|p| (x(p.ds), p.yhat)).collect();
        let lower: Vec<(f64, f64)> = forecast.iter().map(|p| (x(p.ds), p.yhat_lower)).collect();
        let upper: Vec<(f64, f64)> = forecast.iter().map(|p| (x(p.ds), p.yhat_upper)).collect();

        let (y_min, y_max) = history_points
            .iter()
            .chain(&lower)
            .chain(&upper)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        let pad = ((y_max - y_min) * 0.05).max(1.0);

        Some(Self {
            history: history_points,
            yhat,
            lower,
            upper,
            x_bounds: [0.0, x(last_forecast).max(x(last_observed)).max(1.0)],
            y_bounds: [y_min - pad, y_max + pad],
            first,
            last_observed,
            last_forecast,
        })
    }
}

/// Build the chart widget: observed sales, forecast and interval bounds.
pub fn forecast_chart(data: &ChartData) -> Chart<'_> {
    let datasets = vec![
        Dataset::default()
            .name("Sales")
            .marker(Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Cyan))
            .data(&data.history),
        Dataset::default()
            .name("Forecast")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&data.yhat),
        Dataset::default()
            .name("Lower")
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&data.lower),
        Dataset::default()
            .name("Upper")
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&data.upper),
    ];

    let [y_min, y_max] = data.y_bounds;
    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Daily sales forecast "),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds(data.x_bounds)
                .labels(vec![
                    Span::raw(data.first.to_string()),
                    Span::styled(
                        data.last_observed.to_string(),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(data.last_forecast.to_string()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Sales")
                .style(Style::default().fg(Color::Gray))
                .bounds(data.y_bounds)
                .labels(vec![
                    Span::raw(format!("{:.1}", y_min)),
                    Span::raw(format!("{:.1}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{:.1}", y_max)),
                ]),
        )
}

/// Draw the chart below the cursor. Does nothing unless stdout is a terminal.
pub fn render_forecast(history: &TimeSeries, forecast: &[ForecastPoint]) -> anyhow::Result<()> {
    if !io::stdout().is_terminal() {
        debug!("stdout is not a terminal, plot skipped");
        return Ok(());
    }
    let Some(data) = ChartData::new(history, forecast) else {
        return Ok(());
    };

    enable_raw_mode()?;
    let result = draw_inline(&data);
    disable_raw_mode()?;
    result?;

    println!();
    Ok(())
}

fn draw_inline(data: &ChartData) -> anyhow::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(PLOT_HEIGHT),
        },
    )?;
    terminal.draw(|frame| frame.render_widget(forecast_chart(data), frame.area()))?;
    Ok(())
}
