// src/main.rs

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

use bactisee::app::{App, AppState};
use bactisee::core::client::{self, AnalysisOutcome};
use bactisee::{logging, ui};

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx)?;
        }
        app.on_tick();

        // Overlapping scans are not serialized: whatever finishes last is
        // the outcome that stays on screen.
        if let Ok(outcome) = rx.try_recv() {
            app.finish_scan(outcome);
        }
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    Ok(())
}

/// Single event handler to keep the loop readable.
fn handle_events(app: &mut App, tx: &mpsc::Sender<AnalysisOutcome>) -> std::io::Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            // The alert popup blocks everything until acknowledged.
            if app.show_no_image_popup {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    app.show_no_image_popup = false;
                }
                return Ok(());
            }
            match app.state {
                AppState::Idle => handle_idle_input(app, key.code, tx),
                AppState::Finished => handle_finished_input(app, key.code),
                AppState::Scanning => {
                    if key.code == KeyCode::Char('q') {
                        app.quit();
                    }
                }
            }
        }
    }
    Ok(())
}

/// Handles input while the path is being edited (Idle).
fn handle_idle_input(app: &mut App, key_code: KeyCode, tx: &mpsc::Sender<AnalysisOutcome>) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => {
            let path = PathBuf::from(app.input.trim());
            // Precondition: no usable selection means a blocking alert and
            // no request at all.
            if app.input.trim().is_empty() || !path.is_file() {
                app.show_no_image_popup = true;
                return;
            }
            app.begin_scan();
            let tx_clone = tx.clone();
            tokio::spawn(async move {
                let outcome = client::run_analysis(client::DEFAULT_BACKEND, &path).await;
                let _ = tx_clone.send(outcome).await;
            });
        }
        _ => {}
    }
}

/// Handles input while the assessment is on screen (Finished).
fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.reset(), // 'N' for a new scan
        _ => {}
    }
}
