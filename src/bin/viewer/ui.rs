//! Viewer rendering
//!
//! Layout, top to bottom:
//! - title bar (1 line, fixed)
//! - pattern panel (3 lines, fixed) with a pointer at the step's pattern index
//! - subject panel (3 lines, fixed) with a pointer or the match highlight
//! - step log (responsive height), scrolled so the current step stays visible
//! - status bar (1 line, fixed)

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use retrace::{StepKind, TraceStep};

use super::app::App;

/// Height of the bordered pattern/subject panels
const INPUT_PANEL_HEIGHT: u16 = 3;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Title bar
            Constraint::Length(INPUT_PANEL_HEIGHT), // Pattern
            Constraint::Length(INPUT_PANEL_HEIGHT), // Subject
            Constraint::Min(3),                     // Step log
            Constraint::Length(1),                  // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, chunks[0]);
    render_pattern_panel(frame, chunks[1], app);
    render_subject_panel(frame, chunks[2], app);
    render_log_panel(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);
}

fn pointer_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

fn kind_style(kind: StepKind) -> Style {
    match kind {
        StepKind::Info => Style::default().fg(Color::Cyan),
        StepKind::Match => Style::default().fg(Color::Green),
        StepKind::Fail => Style::default().fg(Color::Red),
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("retrace:: step viewer").style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_pattern_panel(frame: &mut Frame, area: Rect, app: &App) {
    let pointer = app.cursor.current().and_then(|step| step.pattern_index);
    let line = pointed_line(&app.pattern, pointer, None);

    let block = Block::default().borders(Borders::ALL).title("Pattern");
    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_subject_panel(frame: &mut Frame, area: Rect, app: &App) {
    let (pointer, highlight) = match app.cursor.current() {
        Some(step) => match &step.final_match {
            Some(matched) => {
                let start = step.string_index.unwrap_or(0);
                (None, Some((start, matched.chars().count())))
            }
            None => (step.string_index, None),
        },
        None => (None, None),
    };
    let line = pointed_line(&app.subject, pointer, highlight);

    let block = Block::default().borders(Borders::ALL).title("Subject");
    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Build a one-line rendering of `text` with an optional pointer at one
/// character index or a highlight over a (start, length) character range
///
/// A pointer one past the last character (the end-of-string position) renders
/// as a highlighted trailing space.
fn pointed_line(text: &str, pointer: Option<usize>, highlight: Option<(usize, usize)>) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans: Vec<Span> = Vec::new();

    for (index, ch) in chars.iter().enumerate() {
        let style = if Some(index) == pointer {
            pointer_style()
        } else if let Some((start, len)) = highlight {
            if index >= start && index < start + len {
                highlight_style()
            } else {
                Style::default()
            }
        } else {
            Style::default()
        };
        spans.push(Span::styled(ch.to_string(), style));
    }

    if pointer == Some(chars.len()) {
        spans.push(Span::styled(" ".to_string(), pointer_style()));
    }

    Line::from(spans)
}

fn render_log_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Steps");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = app.cursor.visible();

    // Keep the newest step on screen, like a scrolled-to-bottom log.
    let capacity = inner.height as usize;
    let skip = visible.len().saturating_sub(capacity);

    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(index, step)| log_line(step, index == app.cursor.position()))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn log_line(step: &TraceStep, is_current: bool) -> Line<'static> {
    let tag = match step.kind {
        StepKind::Info => "[INFO] ",
        StepKind::Match => "[MATCH]",
        StepKind::Fail => "[FAIL] ",
    };
    let mut style = kind_style(step.kind);
    if is_current {
        style = style.add_modifier(Modifier::BOLD);
    }
    Line::from(vec![
        Span::styled(tag.to_string(), style),
        Span::raw(" "),
        Span::styled(step.text.clone(), style),
    ])
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let auto = if app.auto_play { "  AUTO" } else { "" };
    let status = format!(
        "Step {}/{}{}   n next  p prev  a auto  r reset  q quit",
        app.cursor.position() + 1,
        app.cursor.len(),
        auto
    );
    let paragraph = Paragraph::new(status).style(Style::default().bg(Color::Gray).fg(Color::Black));
    frame.render_widget(paragraph, area);
}
