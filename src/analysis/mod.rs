// src/analysis/mod.rs
//! Resume scoring and templated content generation. Pure functions, no I/O.

pub mod scorer;
pub mod templater;
pub mod types;

pub use scorer::analyze_resume;
pub use templater::{generate_content, ContentGenerator, TemplateGenerator};
pub use types::*;
