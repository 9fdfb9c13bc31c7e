// src/resume/mod.rs
pub mod content;
pub mod templates;

pub use content::{Achievement, Certification, Education, Experience, Project, ResumeContent};
pub use templates::{find_template, ResumeTemplate, ATS_OPTIMIZED_TEMPLATE, TEMPLATES};
