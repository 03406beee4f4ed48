// src/app.rs

use crate::core::client::AnalysisOutcome;
use crate::core::models::{self, SafetyLevel};
use chrono::{DateTime, Utc};

pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

// Gauge fill advanced per tick while animating toward the target width.
const GAUGE_STEP: u16 = 4;

pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    /// Path of the image file being typed in the input box.
    pub input: String,
    /// Result of the last scan; `None` until one completes.
    pub outcome: Option<AnalysisOutcome>,
    pub spinner_frame: usize,
    /// Current gauge fill, eased toward `target_width` each tick.
    pub displayed_width: u16,
    pub show_no_image_popup: bool,
    pub last_scan_at: Option<DateTime<Utc>>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            input: String::new(),
            outcome: None,
            spinner_frame: 0,
            displayed_width: 0,
            show_no_image_popup: false,
            last_scan_at: None,
        }
    }

    /// Enters the scanning state: clears the previous outcome and resets the
    /// gauge to 0% before the request goes out.
    pub fn begin_scan(&mut self) {
        self.state = AppState::Scanning;
        self.outcome = None;
        self.displayed_width = 0;
        self.spinner_frame = 0;
    }

    /// Records a finished scan. On a connection failure the gauge stays at
    /// the 0% reset; only a successful response moves it.
    pub fn finish_scan(&mut self, outcome: AnalysisOutcome) {
        self.last_scan_at = Some(Utc::now());
        self.outcome = Some(outcome);
        self.state = AppState::Finished;
    }

    /// Gauge width the display is heading toward.
    pub fn target_width(&self) -> u16 {
        match &self.outcome {
            Some(Ok(response)) => models::gauge_width(response.percentage),
            _ => 0,
        }
    }

    pub fn safety_level(&self) -> Option<SafetyLevel> {
        match &self.outcome {
            Some(Ok(response)) => Some(response.safety_level),
            _ => None,
        }
    }

    pub fn on_tick(&mut self) {
        if matches!(self.state, AppState::Scanning) {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
        let target = self.target_width();
        if self.displayed_width < target {
            self.displayed_width = (self.displayed_width + GAUGE_STEP).min(target);
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.outcome = None;
        self.spinner_frame = 0;
        self.displayed_width = 0;
        self.show_no_image_popup = false;
    }
}
