// src/ui/widgets/summary.rs

use crate::app::{App, AppState};
use crate::core::client::DEFAULT_BACKEND;
use crate::ui::widgets::status_view::bar_color;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the assessment summary: the literal reading, the raw bacteria
/// pixel count, the verdict and a short piece of guidance. Only populated
/// once a scan has finished.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Assessment");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // reading
            Constraint::Length(1), // spacer
            Constraint::Length(3), // guidance
            Constraint::Min(0),    // backend info
        ])
        .split(area);

    if !matches!(app.state, AppState::Finished) {
        return;
    }

    match &app.outcome {
        Some(Ok(response)) => {
            let color = bar_color(response.safety_level);
            let mut reading_lines = vec![
                Line::from("Contamination".bold()),
                Line::from(format!("{}%", response.percentage)).style(Style::default().fg(color)),
                Line::from(format!("Verdict: {}", response.safety_level)),
            ];
            if let Some(count) = response.bacteria_count {
                reading_lines.push(Line::from(format!("Bright pixels: {}", count)));
            }
            frame.render_widget(Paragraph::new(reading_lines), summary_chunks[0]);

            let guidance = Paragraph::new(response.safety_level.guidance())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(guidance, summary_chunks[2]);
        }
        Some(Err(_)) => {
            let lines = vec![
                Line::from("No reading available.".bold()),
                Line::from("The last scan did not reach the backend."),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), summary_chunks[0]);
        }
        None => return,
    }

    let mut info_lines = vec![Line::from(vec![
        Span::raw("Backend: "),
        Span::styled(DEFAULT_BACKEND, Style::default().fg(Color::Cyan)),
    ])];
    if let Some(at) = app.last_scan_at {
        info_lines.push(Line::from(format!(
            "Last scan: {}",
            at.format("%Y-%m-%d %H:%M:%S UTC")
        )));
    }
    frame.render_widget(Paragraph::new(info_lines), summary_chunks[3]);
}
