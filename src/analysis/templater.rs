// src/analysis/templater.rs
//! Template-based resume content generation.
//!
//! There is no model behind this: an industry category selects a fixed
//! summary template and skill list, and the job title is interpolated.

use super::types::{ExperienceSuggestion, GeneratedContent, IndustryCategory, JobContext};

pub const DEFAULT_CURRENT_COMPANY: &str = "Current Company";
pub const DEFAULT_PREVIOUS_COMPANY: &str = "Previous Organization";

/// Seam for anything that turns a job context into resume content.
pub trait ContentGenerator: Send + Sync {
    fn generate(&self, context: &JobContext) -> GeneratedContent;

    fn backend_name(&self) -> &'static str;
}

/// Lookup-table generator keyed by [`IndustryCategory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

impl ContentGenerator for TemplateGenerator {
    fn generate(&self, context: &JobContext) -> GeneratedContent {
        generate_content(context)
    }

    fn backend_name(&self) -> &'static str {
        "template"
    }
}

fn summary_for(category: IndustryCategory, job_title: &str) -> String {
    match category {
        IndustryCategory::Tech => format!(
            "Results-driven {} with proven expertise in developing scalable solutions and leading high-performing teams. Passionate about leveraging cutting-edge technologies to drive business impact and innovation.",
            job_title
        ),
        IndustryCategory::Finance => format!(
            "Accomplished {} with deep expertise in financial analysis, risk management, and strategic planning. Committed to delivering exceptional value and driving organizational growth through data-driven decision-making.",
            job_title
        ),
        IndustryCategory::Healthcare => format!(
            "Dedicated {} professional with comprehensive experience in healthcare delivery, patient outcomes, and operational excellence. Focused on improving processes and delivering exceptional care.",
            job_title
        ),
        IndustryCategory::Default => format!(
            "Experienced {} professional with a track record of delivering results and driving organizational success. Skilled in team leadership, strategic planning, and innovative problem-solving.",
            job_title
        ),
    }
}

pub fn skills_for(category: IndustryCategory) -> [&'static str; 6] {
    match category {
        IndustryCategory::Tech => [
            "Full-stack Development",
            "Cloud Architecture",
            "System Design",
            "Team Leadership",
            "Agile Methodologies",
            "CI/CD Pipelines",
        ],
        IndustryCategory::Finance => [
            "Financial Analysis",
            "Risk Management",
            "Budgeting & Forecasting",
            "Data Analytics",
            "Compliance",
            "Strategic Planning",
        ],
        IndustryCategory::Healthcare => [
            "Patient Care Management",
            "Clinical Operations",
            "Healthcare Analytics",
            "Team Leadership",
            "Quality Improvement",
            "Regulatory Compliance",
        ],
        IndustryCategory::Default => [
            "Strategic Planning",
            "Team Leadership",
            "Project Management",
            "Data Analysis",
            "Communication",
            "Problem Solving",
        ],
    }
}

/// `Senior <first token of the title> Professional`.
fn senior_title(job_title: &str) -> String {
    let first = job_title.split(char::is_whitespace).next().unwrap_or("");
    format!("Senior {} Professional", first)
}

/// Generate summary, two experience entries and six key skills.
pub fn generate_content(context: &JobContext) -> GeneratedContent {
    let category = IndustryCategory::classify(&context.industry);
    let job_title = context.job_title.as_str();

    let current_company = context
        .company
        .as_deref()
        .filter(|company| !company.is_empty())
        .unwrap_or(DEFAULT_CURRENT_COMPANY);

    let experience_suggestions = vec![
        ExperienceSuggestion {
            title: job_title.to_string(),
            company: current_company.to_string(),
            description: format!(
                "Led cross-functional initiatives as {}, driving strategic objectives and delivering measurable results. Managed team of professionals to achieve key business goals and improve operational efficiency.",
                job_title
            ),
        },
        ExperienceSuggestion {
            title: senior_title(job_title),
            company: DEFAULT_PREVIOUS_COMPANY.to_string(),
            description: format!(
                "Contributed to organizational success through expert execution of {} responsibilities. Implemented innovative solutions, improved processes, and mentored junior team members.",
                job_title
            ),
        },
    ];

    GeneratedContent {
        professional_summary: summary_for(category, job_title),
        experience_suggestions,
        key_skills: skills_for(category).iter().map(|s| s.to_string()).collect(),
    }
}
