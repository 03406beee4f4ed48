// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::input::render_input(frame, app, layout.input);
    widgets::status_view::render_status_view(frame, app, layout.status);
    widgets::summary::render_summary(frame, app, layout.summary);
    widgets::footer::render_footer(frame, app, layout.footer);

    // The popup is the blocking notification for a missing selection; it is
    // drawn last so it sits on top of everything else.
    if app.show_no_image_popup {
        widgets::alert_popup::render_alert_popup(frame, frame.area());
    }
}
