// src/demo_data.rs
//! Sample data for the demo account.

use crate::analysis::analyze_resume;
use crate::auth::DEMO_USER_ID;
use crate::database::{AnalysisRepository, ResumeRepository};
use crate::resume::{Education, Experience, ResumeContent, ATS_OPTIMIZED_TEMPLATE};
use anyhow::Result;
use sqlx::SqlitePool;

pub const DEMO_RESUME_TITLE: &str = "Senior Software Engineer Resume";

pub fn demo_resume() -> ResumeContent {
    ResumeContent {
        full_name: "John Smith".to_string(),
        email: "john@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
        summary: "Experienced Senior Software Engineer with 8+ years of expertise in full-stack development, cloud architecture, and team leadership. Proven track record of delivering scalable solutions and mentoring junior developers.".to_string(),
        experiences: vec![
            Experience {
                id: "exp-1".to_string(),
                title: "Senior Software Engineer".to_string(),
                company: "Tech Innovations Inc".to_string(),
                duration: "Jan 2021 - Present".to_string(),
                description: "Led development of microservices architecture handling 10M+ daily transactions. Mentored team of 5 junior developers. Improved system performance by 40% through optimization initiatives.".to_string(),
            },
            Experience {
                id: "exp-2".to_string(),
                title: "Software Engineer".to_string(),
                company: "Digital Solutions Ltd".to_string(),
                duration: "Jun 2018 - Dec 2020".to_string(),
                description: "Developed and maintained RESTful APIs serving 500K+ users. Implemented automated testing framework reducing bugs by 60%. Collaborated with product team on feature prioritization.".to_string(),
            },
            Experience {
                id: "exp-3".to_string(),
                title: "Junior Developer".to_string(),
                company: "StartUp Ventures".to_string(),
                duration: "Jan 2016 - May 2018".to_string(),
                description: "Built frontend components using React. Participated in code reviews and contributed to architectural decisions. Learned and implemented best practices in web development.".to_string(),
            },
        ],
        educations: vec![Education {
            id: "edu-1".to_string(),
            school: "State University".to_string(),
            degree: "Bachelor of Science".to_string(),
            field: "Computer Science".to_string(),
            year: "2015".to_string(),
            gpa: String::new(),
        }],
        skills: [
            "JavaScript", "React", "Node.js", "Python", "AWS", "Docker", "Kubernetes",
            "PostgreSQL", "MongoDB", "Git", "Agile", "System Design",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        ..Default::default()
    }
}

/// Insert the sample resume and a scored analysis of it, unless the demo
/// user already owns a resume.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool> {
    let repo = ResumeRepository::new(pool);
    if repo.count(DEMO_USER_ID).await? > 0 {
        return Ok(false);
    }

    let content = demo_resume();
    repo.create(
        DEMO_USER_ID,
        DEMO_RESUME_TITLE,
        &content,
        ATS_OPTIMIZED_TEMPLATE,
    )
    .await?;

    let text = content.to_plain_text();
    let analysis = AnalysisRepository::new(pool)
        .create(
            DEMO_USER_ID,
            &format!("{}.txt", DEMO_RESUME_TITLE),
            &text,
            &analyze_resume(&text),
        )
        .await?;

    app_log!(
        info,
        "Seeded demo resume and analysis {} for {}",
        analysis.id,
        DEMO_USER_ID
    );
    Ok(true)
}
