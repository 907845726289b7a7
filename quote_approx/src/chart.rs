//! Terminal chart of the quotes against their fitted trend.
//!
//! The chart takes over the terminal (alternate screen, raw mode) and blocks
//! until the user closes it with `q`, `Esc` or `Ctrl+C`.
use std::io::{self, IsTerminal};
use std::time::Duration;

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quote_fit::{FitError, Result, TrendReport};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, LegendPosition, Padding, Paragraph},
};

const POLL_INTERVAL: Duration = Duration::from_millis(250);
/// Offset of the statistics box from the top-left corner of the chart.
const NOTE_OFFSET: (u16, u16) = (12, 2);

/// Shows the chart and waits until the user closes it.
///
/// Raw mode, the alternate screen and the cursor are restored even if entering
/// the chart or drawing it fails.
pub fn show(report: &TrendReport, title: &str) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(FitError::Terminal("stdout is not a terminal".to_string()));
    }

    enable_raw_mode()?;
    let result = open_and_run(report, title);
    let steps: Vec<Step<'_>> = vec![
        Box::new(disable_raw_mode),
        Box::new(|| {
            let mut stdout = io::stdout();
            execute!(stdout, LeaveAlternateScreen, Show)
        }),
    ];
    let restored = run_all(steps);

    result.and(restored.map_err(FitError::from))
}

/// Enters the alternate screen and runs the chart until it is closed.
fn open_and_run(report: &TrendReport, title: &str) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    run_chart(&mut terminal, report, title)
}

type Step<'a> = Box<dyn FnOnce() -> io::Result<()> + 'a>;

/// Runs every step, even after a failure, and returns the first error.
fn run_all(steps: Vec<Step<'_>>) -> io::Result<()> {
    let mut first = Ok(());
    for step in steps {
        let outcome = step();
        if first.is_ok() {
            first = outcome;
        }
    }
    first
}

fn run_chart<B: Backend>(terminal: &mut Terminal<B>, report: &TrendReport, title: &str) -> Result<()> {
    loop {
        terminal.draw(|frame| draw_report(frame, report, title))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if is_close_key(&key) {
                    return Ok(());
                }
            }
        }
    }
}

fn is_close_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Draws the scatter of raw quotes, the trend line, the statistics box and the help line.
pub fn draw_report(frame: &mut Frame, report: &TrendReport, title: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(frame.area());

    let datasets = vec![
        Dataset::default()
            .name("Original data")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Cyan))
            .data(&report.points),
        Dataset::default()
            .name("Fitted line")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&report.fitted),
    ];

    let [x_min, x_max] = padded(report.x_bounds());
    let [y_min, y_max] = padded(report.y_bounds());

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)))
        .x_axis(
            Axis::default()
                .title("Index")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(axis_labels(x_min, x_max, 0)),
        )
        .y_axis(
            Axis::default()
                .title("Value")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(axis_labels(y_min, y_max, 2)),
        )
        .legend_position(Some(LegendPosition::TopRight));
    frame.render_widget(chart, chunks[0]);

    draw_note(frame, chunks[0], report);

    let help = Paragraph::new(" q/Esc: close").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[1]);
}

/// Statistics box at a fixed position inside the plot.
fn draw_note(frame: &mut Frame, plot: Rect, report: &TrendReport) {
    let text = report.factors.to_string();
    let lines: Vec<Line> = text.lines().map(Line::from).collect();
    let text_width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16;

    let (dx, dy) = NOTE_OFFSET;
    if plot.width < dx + 4 || plot.height < dy + 3 {
        return;
    }
    let area = Rect {
        x: plot.x + dx,
        y: plot.y + dy,
        width: (text_width + 4).min(plot.width - dx),
        height: (lines.len() as u16 + 2).min(plot.height - dy),
    };

    let note = Paragraph::new(lines)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::ITALIC),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(note, area);
}

/// Widens `[lo, hi]` by 5% so edge points stay visible.
fn padded([lo, hi]: [f64; 2]) -> [f64; 2] {
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { (hi.abs() * 0.05).max(1.0) };
    [lo - pad, hi + pad]
}

fn axis_labels<'a>(lo: f64, hi: f64, precision: usize) -> Vec<Span<'a>> {
    [lo, (lo + hi) / 2.0, hi]
        .iter()
        .map(|v| Span::raw(format!("{:.*}", precision, v)))
        .collect()
}
