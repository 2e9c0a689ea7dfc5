pub mod app;
pub mod logging;

pub use app::{AppError, RunOptions, RunSummary, run};
