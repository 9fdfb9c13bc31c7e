// src/resume/templates.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResumeTemplate {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

pub const ATS_OPTIMIZED_TEMPLATE: u32 = 10;

pub const TEMPLATES: [ResumeTemplate; 10] = [
    ResumeTemplate { id: 1, name: "Modern", description: "Clean lines, contemporary feel" },
    ResumeTemplate { id: 2, name: "Professional", description: "Classic business style" },
    ResumeTemplate { id: 3, name: "Minimal", description: "Simple and elegant" },
    ResumeTemplate { id: 4, name: "Creative", description: "Bold and unique design" },
    ResumeTemplate { id: 5, name: "Executive", description: "Premium corporate look" },
    ResumeTemplate { id: 6, name: "Tech", description: "Developer focused layout" },
    ResumeTemplate { id: 7, name: "Elegant", description: "Sophisticated styling" },
    ResumeTemplate { id: 8, name: "Bold", description: "Stand out from the crowd" },
    ResumeTemplate { id: 9, name: "Academic", description: "Research & education" },
    ResumeTemplate { id: ATS_OPTIMIZED_TEMPLATE, name: "ATS Optimized", description: "Maximum ATS compatibility" },
];

pub fn find_template(id: u32) -> Option<&'static ResumeTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}
