// src/lib.rs

/// Application state for the TUI: the current phase of the analyze flow,
/// the path being edited and the last outcome received from the backend.
pub mod app;

/// Domain logic: wire models, the upload client and the contamination
/// analysis engine shared with the backend binary.
pub mod core;

/// File-based logging setup. The TUI runs in raw mode, so nothing is ever
/// written to stdout/stderr; everything goes through `tracing` to a log file.
pub mod logging;

/// The analysis backend: an axum router exposing `POST /api/analyze`.
pub mod server;

/// Terminal rendering: layout plus the individual widgets.
pub mod ui;
