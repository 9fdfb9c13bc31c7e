// src/analysis/types.rs
use serde::{Deserialize, Serialize};

/// Quality report produced by the scorer for one resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub score: u32,
    pub match_score: f64,
    pub readability_score: u32,
    pub keyword_score: f64,
    pub format_score: u32,
    pub issues: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Job context fed to the content generator.
///
/// Every field is optional on the wire; absent values behave like empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobContext {
    pub job_title: String,
    pub company: Option<String>,
    pub industry: String,
    // Accepted for API compatibility, not used by the templates.
    pub experience: String,
}

impl JobContext {
    pub fn new(job_title: &str) -> Self {
        Self {
            job_title: job_title.to_string(),
            ..Default::default()
        }
    }

    pub fn with_company(mut self, company: &str) -> Self {
        self.company = Some(company.to_string());
        self
    }

    pub fn with_industry(mut self, industry: &str) -> Self {
        self.industry = industry.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSuggestion {
    pub title: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub professional_summary: String,
    pub experience_suggestions: Vec<ExperienceSuggestion>,
    pub key_skills: Vec<String>,
}

/// Closed set of buckets used to pick a summary template and skill list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustryCategory {
    Tech,
    Finance,
    Healthcare,
    Default,
}

impl IndustryCategory {
    /// Case-insensitive substring match, checked in priority order
    /// tech, finance, health. First hit wins.
    pub fn classify(industry: &str) -> Self {
        let industry = industry.to_lowercase();
        if industry.contains("tech") {
            IndustryCategory::Tech
        } else if industry.contains("finance") {
            IndustryCategory::Finance
        } else if industry.contains("health") {
            IndustryCategory::Healthcare
        } else {
            IndustryCategory::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndustryCategory::Tech => "tech",
            IndustryCategory::Finance => "finance",
            IndustryCategory::Healthcare => "healthcare",
            IndustryCategory::Default => "default",
        }
    }
}

impl std::fmt::Display for IndustryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(IndustryCategory::classify("FinTech Solutions"), IndustryCategory::Tech);
        assert_eq!(IndustryCategory::classify("HealthTech"), IndustryCategory::Tech);
        assert_eq!(IndustryCategory::classify("Corporate Finance"), IndustryCategory::Finance);
        assert_eq!(IndustryCategory::classify("HEALTHCARE"), IndustryCategory::Healthcare);
        assert_eq!(IndustryCategory::classify("Retail"), IndustryCategory::Default);
        assert_eq!(IndustryCategory::classify(""), IndustryCategory::Default);
    }

    #[test]
    fn test_job_context_deserializes_with_missing_fields() {
        let ctx: JobContext = serde_json::from_str(r#"{"jobTitle":"Engineer"}"#).unwrap();
        assert_eq!(ctx.job_title, "Engineer");
        assert_eq!(ctx.company, None);
        assert_eq!(ctx.industry, "");
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = AnalysisReport {
            score: 40,
            match_score: 30.0,
            readability_score: 50,
            keyword_score: 30.0,
            format_score: 50,
            issues: vec![],
            missing_keywords: vec![],
            suggestions: vec![],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["matchScore"], 30.0);
        assert_eq!(json["readabilityScore"], 50);
        assert!(json.get("missingKeywords").is_some());
    }
}
