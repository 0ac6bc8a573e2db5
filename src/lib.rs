pub mod chart;
pub mod client;
pub mod config;
pub mod errors;
pub mod forms;
pub mod models;
pub mod trend;
pub mod ui;

pub use client::FinanceClient;
pub use config::{resolve_config, Config};
pub use errors::{AppError, Result};
pub use trend::{smooth, trend_series, TrendSmoother, DEFAULT_WINDOW};
