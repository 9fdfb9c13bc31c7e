//! CareerForge backend: resume builder storage, demo authentication and
//! heuristic ATS scoring.

/// Crate logging macro, `app_log!(info, "...", args)`.
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

pub mod analysis;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod demo_data;
pub mod logging;
pub mod resume;
pub mod web;

pub use analysis::{analyze_resume, generate_content, AnalysisReport, GeneratedContent, JobContext};
pub use config::AppConfig;
pub use web::{build_rocket, start_web_server};
