// src/resume/content.rs
//! Resume document built by the step-by-step builder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeContent {
    // Personal
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub educations: Vec<Education>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    // Links
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub other: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub year: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
}

fn join_non_empty<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    parts
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

impl ResumeContent {
    /// Render as plain text: contact line separated by `|`, sections
    /// separated by blank lines. Empty sections and blank entries are skipped.
    pub fn to_plain_text(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        let header = join_non_empty(&[&self.full_name], "");
        let contact = join_non_empty(&[&self.email, &self.phone, &self.location], " | ");
        let top = join_non_empty(&[&header, &contact], "\n");
        if !top.is_empty() {
            sections.push(top);
        }

        if !self.summary.trim().is_empty() {
            sections.push(format!("SUMMARY\n{}", self.summary.trim()));
        }

        let experiences: Vec<String> = self
            .experiences
            .iter()
            .filter(|e| !e.title.trim().is_empty() || !e.company.trim().is_empty())
            .map(|e| {
                let heading = join_non_empty(&[&e.title, &e.company, &e.duration], " | ");
                join_non_empty(&[&heading, &e.description], "\n")
            })
            .collect();
        if !experiences.is_empty() {
            sections.push(format!("EXPERIENCE\n{}", experiences.join("\n")));
        }

        let educations: Vec<String> = self
            .educations
            .iter()
            .filter(|e| !e.school.trim().is_empty())
            .map(|e| {
                let degree = join_non_empty(&[&e.degree, &e.field], " in ");
                join_non_empty(&[&degree, &e.school, &e.year, &e.gpa], " | ")
            })
            .collect();
        if !educations.is_empty() {
            sections.push(format!("EDUCATION\n{}", educations.join("\n")));
        }

        let projects: Vec<String> = self
            .projects
            .iter()
            .filter(|p| !p.name.trim().is_empty())
            .map(|p| {
                let heading = join_non_empty(&[&p.name, &p.technologies, &p.link], " | ");
                join_non_empty(&[&heading, &p.description], "\n")
            })
            .collect();
        if !projects.is_empty() {
            sections.push(format!("PROJECTS\n{}", projects.join("\n")));
        }

        let skills: Vec<&str> = self
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if !skills.is_empty() {
            sections.push(format!("SKILLS\n{}", skills.join(" | ")));
        }

        let certifications: Vec<String> = self
            .certifications
            .iter()
            .filter(|c| !c.name.trim().is_empty())
            .map(|c| join_non_empty(&[&c.name, &c.issuer, &c.date], " | "))
            .collect();
        if !certifications.is_empty() {
            sections.push(format!("CERTIFICATIONS\n{}", certifications.join("\n")));
        }

        let achievements: Vec<String> = self
            .achievements
            .iter()
            .filter(|a| !a.title.trim().is_empty())
            .map(|a| join_non_empty(&[&a.title, &a.description], ": "))
            .collect();
        if !achievements.is_empty() {
            sections.push(format!("ACHIEVEMENTS\n{}", achievements.join("\n")));
        }

        let links = join_non_empty(
            &[&self.linkedin, &self.github, &self.portfolio, &self.other],
            " | ",
        );
        if !links.is_empty() {
            sections.push(format!("LINKS\n{}", links));
        }

        sections.join("\n\n")
    }
}
