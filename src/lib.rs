//! Launch records dashboard: an immutable launch table, the filter and
//! aggregation core that turns control values into chart data, and the egui
//! front end that renders it.

pub mod app;
pub mod cli;
pub mod color;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
