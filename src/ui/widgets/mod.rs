// src/ui/widgets/mod.rs

pub mod alert_popup;
pub mod footer;
pub mod input;
pub mod status_view;
pub mod summary;
