use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders,
        canvas::{self, Canvas},
    },
};

use crate::report::ReportRow;

/// Rotating colors for chart series. Bars and pie slices share the cycle so
/// the same author gets the same color in both charts.
const SERIES_COLORS: &[Color] = &[
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
    Color::Red,
    Color::Green,
];

/// One pie slice: where it starts, how far it sweeps, and its share.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub name: String,
    /// Start angle in degrees, counter-clockwise from the positive x axis.
    pub start: f64,
    /// Sweep in degrees.
    pub sweep: f64,
    /// Share of the total, as a percentage.
    pub percent: f64,
}

/// Split the full circle into slices proportional to line counts, starting
/// at 90° (twelve o'clock) and proceeding counter-clockwise.
pub fn pie_slices(rows: &[ReportRow]) -> Vec<Slice> {
    let total: u64 = rows.iter().map(|row| row.lines).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 90.0;
    rows.iter()
        .map(|row| {
            let fraction = row.lines as f64 / total as f64;
            let slice = Slice {
                name: row.name.clone(),
                start,
                sweep: fraction * 360.0,
                percent: fraction * 100.0,
            };
            start += slice.sweep;
            slice
        })
        .collect()
}

/// Label shown next to a slice: name and percentage to one decimal place.
pub fn slice_label(slice: &Slice) -> String {
    format!("{} {:.1}%", slice.name, slice.percent)
}

/// Display the bar and pie charts side by side in a full-screen view until
/// the user dismisses it with `q`, `Esc`, or `Enter`.
pub fn show(rows: &[ReportRow]) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_view(&mut terminal, rows);

    // Restore the terminal on both paths before reporting the result.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_view(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, rows: &[ReportRow]) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, rows))?;
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
        {
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame<'_>, rows: &[ReportRow]) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(frame.area());

    frame.render_widget(bar_chart(rows), halves[0]);

    let slices = pie_slices(rows);
    let pie = Canvas::default()
        .block(
            Block::default()
                .title("Percentage distribution (q to quit)")
                .borders(Borders::ALL),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds([-2.0, 2.0])
        .y_bounds([-1.4, 1.4])
        .paint(|ctx| paint_pie(ctx, &slices));
    frame.render_widget(pie, halves[1]);
}

fn bar_chart(rows: &[ReportRow]) -> BarChart<'_> {
    let bars: Vec<Bar> = rows
        .iter()
        .zip(SERIES_COLORS.iter().cycle())
        .map(|(row, &color)| {
            Bar::default()
                .value(row.lines)
                .label(Line::from(row.name.clone()))
                .style(Style::default().fg(color))
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .title("Lines of code per author/group")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1)
}

fn paint_pie(ctx: &mut canvas::Context<'_>, slices: &[Slice]) {
    // Fill each wedge with radial lines, roughly one per degree of sweep.
    for (slice, &color) in slices.iter().zip(SERIES_COLORS.iter().cycle()) {
        let steps = (slice.sweep.ceil() as usize).max(1);
        for step in 0..=steps {
            let angle = (slice.start + slice.sweep * step as f64 / steps as f64).to_radians();
            ctx.draw(&canvas::Line {
                x1: 0.0,
                y1: 0.0,
                x2: angle.cos(),
                y2: angle.sin(),
                color,
            });
        }
    }

    // Labels at the middle of each slice, just outside the rim.
    for (slice, &color) in slices.iter().zip(SERIES_COLORS.iter().cycle()) {
        let mid = (slice.start + slice.sweep / 2.0).to_radians();
        ctx.print(
            mid.cos() * 1.2,
            mid.sin() * 1.15,
            Line::styled(slice_label(slice), Style::default().fg(color)),
        );
    }
}

#[cfg(test)]
#[path = "chart_test.rs"]
mod tests;
