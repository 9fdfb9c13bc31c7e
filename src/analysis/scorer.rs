// src/analysis/scorer.rs
//! Heuristic ATS scoring over raw resume text.
//!
//! Keyword detection is substring containment on the lowercased text, so
//! "experienced" counts as "experience". Scores are bounded to 0..=100.

use super::types::AnalysisReport;

/// Terms an ATS is assumed to look for.
pub const ATS_KEYWORDS: [&str; 10] = [
    "experience",
    "skills",
    "education",
    "achievement",
    "leadership",
    "management",
    "project",
    "team",
    "results",
    "implemented",
];

pub const SUGGESTIONS: [&str; 5] = [
    "Add quantifiable achievements and metrics to your experiences.",
    "Use industry-standard keywords relevant to your target role.",
    "Organize your resume into clear sections with headers.",
    "Keep your resume to one page if possible.",
    "Use bullet points for easy parsing by ATS systems.",
];

pub const ISSUE_TOO_SHORT: &str = "Resume is too short. Add more details to your experiences.";
pub const ISSUE_FORMATTING: &str =
    "Resume lacks proper formatting. Use clear sections and formatting.";
pub const ISSUE_STANDARD_FORMAT: &str =
    "Consider using a standard resume format for better ATS compatibility.";

const SHORT_RESUME_WORDS: usize = 200;
const LONG_RESUME_WORDS: usize = 800;

/// Number of segments produced by splitting on whitespace runs.
///
/// Leading and trailing whitespace each yield an empty segment, and the empty
/// string is a single empty segment.
pub fn word_count(content: &str) -> usize {
    let mut count = 1;
    let mut in_whitespace = false;
    for c in content.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                count += 1;
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
        }
    }
    count
}

/// Vocabulary terms present in `content`, in vocabulary order.
pub fn found_keywords(content: &str) -> Vec<&'static str> {
    let lowered = content.to_lowercase();
    ATS_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect()
}

pub fn readability_score(words: usize) -> u32 {
    if words > SHORT_RESUME_WORDS && words < LONG_RESUME_WORDS {
        90
    } else if words < SHORT_RESUME_WORDS {
        50
    } else {
        60
    }
}

pub fn format_score(content: &str) -> u32 {
    let has_newline = content.contains('\n');
    if has_newline && content.contains('|') {
        85
    } else if has_newline {
        75
    } else {
        50
    }
}

/// Score a resume. Total over every input, including the empty string.
pub fn analyze_resume(content: &str) -> AnalysisReport {
    let words = word_count(content);
    let found = found_keywords(content);

    let missing_keywords: Vec<String> = ATS_KEYWORDS
        .iter()
        .filter(|keyword| !found.contains(keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    let match_score =
        (found.len() as f64 * 100.0 / ATS_KEYWORDS.len() as f64).clamp(0.0, 100.0);
    let readability_score = readability_score(words);
    let keyword_score = match_score;
    let format_score = format_score(content);

    let mean = (match_score
        + f64::from(readability_score)
        + keyword_score
        + f64::from(format_score))
        / 4.0;
    let score = mean.round().clamp(0.0, 100.0) as u32;

    let mut issues = Vec::new();
    if words < SHORT_RESUME_WORDS {
        issues.push(ISSUE_TOO_SHORT.to_string());
    }
    if !content.contains('|') && !content.contains("\n\n") {
        issues.push(ISSUE_FORMATTING.to_string());
    }
    if format_score < 70 {
        issues.push(ISSUE_STANDARD_FORMAT.to_string());
    }

    AnalysisReport {
        score,
        match_score,
        readability_score,
        keyword_score,
        format_score,
        issues,
        missing_keywords,
        // Constant list; not yet derived from the content.
        suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}
