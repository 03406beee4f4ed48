// src/ui/widgets/status_view.rs

use crate::app::{App, AppState, SPINNER_CHARS};
use crate::core::models::SafetyLevel;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Gauge fill color for a verdict: red for danger, amber for warning, green
/// for everything else.
pub fn bar_color(level: SafetyLevel) -> Color {
    match level {
        SafetyLevel::Danger => Color::Red,
        SafetyLevel::Warning => Color::Yellow,
        SafetyLevel::Safe => Color::Green,
    }
}

/// The status line shown above the gauge, carrying the literal percentage.
pub fn headline(level: SafetyLevel, percentage: f64) -> String {
    match level {
        SafetyLevel::Danger => format!("🚨 DANGER: Contamination High ({}%)", percentage),
        SafetyLevel::Warning => format!("⚠️ WARNING: Trace Detection ({}%)", percentage),
        SafetyLevel::Safe => format!("✅ SAFE: Surface Clean ({}%)", percentage),
    }
}

/// Renders the surface status panel: a placeholder when idle, a pulsing
/// scanning indicator while the request is in flight, and the verdict line
/// plus contamination gauge once a result is in.
pub fn render_status_view(frame: &mut Frame, app: &App, area: Rect) {
    let main_block = Block::default().borders(Borders::ALL).title("Surface Status");
    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // status text
            Constraint::Length(1), // spacer
            Constraint::Length(1), // gauge
            Constraint::Min(0),
        ])
        .split(inner_area);

    match app.state {
        AppState::Idle => {
            let placeholder = Paragraph::new("Analysis results will appear here...")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(placeholder, chunks[0]);
            return;
        }
        AppState::Scanning => {
            // Alternating bold/dim is the pulse of the in-progress marker.
            let pulse = if app.spinner_frame % 2 == 0 {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM)
            };
            let spinner_char = SPINNER_CHARS[app.spinner_frame];
            let line = Line::from(vec![
                Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                Span::styled("🔍 SCANNING SURFACE...", pulse),
            ]);
            frame.render_widget(Paragraph::new(line), chunks[0]);
        }
        AppState::Finished => match &app.outcome {
            Some(Ok(response)) => {
                let color = bar_color(response.safety_level);
                let line = Span::styled(
                    headline(response.safety_level, response.percentage),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                );
                frame.render_widget(Paragraph::new(Line::from(line)), chunks[0]);
            }
            Some(Err(e)) => {
                let line = Span::styled(
                    format!("❌ {}", e),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                );
                frame.render_widget(Paragraph::new(Line::from(line)), chunks[0]);
            }
            None => {}
        },
    }

    // The gauge is always drawn once a scan has started: 0% while scanning
    // or after a failure, animated toward the scaled percentage on success.
    let gauge_style = match app.safety_level() {
        Some(level) => Style::default().fg(bar_color(level)),
        None => Style::default().fg(Color::DarkGray),
    };
    let gauge = Gauge::default()
        .percent(app.displayed_width)
        .label(format!("{}%", app.displayed_width))
        .gauge_style(gauge_style);
    frame.render_widget(gauge, chunks[2]);
}
