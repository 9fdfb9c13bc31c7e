// src/cli.rs
use crate::analysis::{analyze_resume, generate_content, JobContext};
use crate::config::AppConfig;
use crate::logging::init_tracing;
use crate::resume::TEMPLATES;
use crate::web::start_web_server;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "careerforge")]
#[command(about = "Resume builder backend with ATS-style scoring")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Start the API server (default)
    Serve,
    /// Score a plain-text resume and print the report as JSON
    Analyze { file: PathBuf },
    /// Print templated resume content for a job as JSON
    Generate {
        #[arg(long)]
        job_title: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long, default_value = "")]
        industry: String,
    },
    /// List the resume templates
    Templates,
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = AppConfig::load()?;
            init_tracing(config.log_file.as_deref())?;
            start_web_server(config).await
        }

        Command::Analyze { file } => {
            let content = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            let report = analyze_resume(&content);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }

        Command::Generate {
            job_title,
            company,
            industry,
        } => {
            let context = JobContext {
                job_title,
                company,
                industry,
                ..Default::default()
            };
            let content = generate_content(&context);
            println!("{}", serde_json::to_string_pretty(&content)?);
            Ok(())
        }

        Command::Templates => {
            for template in TEMPLATES.iter() {
                println!("{:>2}  {:<14} {}", template.id, template.name, template.description);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::try_parse_from(["careerforge"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "careerforge",
            "generate",
            "--job-title",
            "Data Engineer",
            "--industry",
            "FinTech",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Generate {
                job_title: "Data Engineer".to_string(),
                company: None,
                industry: "FinTech".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_analyze_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "team project results").unwrap();

        let cli = Cli::try_parse_from(["careerforge", "analyze", path.to_str().unwrap()]).unwrap();
        assert!(handle_command(cli).await.is_ok());

        let missing = Cli::try_parse_from(["careerforge", "analyze", "/nonexistent/cv.txt"]).unwrap();
        assert!(handle_command(missing).await.is_err());
    }
}
