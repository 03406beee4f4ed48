// src/ui/widgets/footer.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = if app.show_no_image_popup {
        Line::from("Press Enter to acknowledge.")
    } else {
        match app.state {
            AppState::Idle => Line::from(vec![
                Span::raw("Type an image path, "),
                Span::styled("Enter", Style::new().bold().fg(Color::Yellow)),
                Span::raw(" to analyze, "),
                Span::styled("Esc", Style::new().bold().fg(Color::Yellow)),
                Span::raw(" to quit."),
            ]),
            AppState::Finished => Line::from(vec![
                Span::styled("[N]", Style::new().bold().fg(Color::Yellow)),
                Span::raw("ew Scan, "),
                Span::styled("[Q]", Style::new().bold().fg(Color::Yellow)),
                Span::raw("uit"),
            ]),
            AppState::Scanning => Line::from("Scanning... Press Q to quit."),
        }
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
