// src/database.rs
use crate::analysis::AnalysisReport;
use crate::resume::ResumeContent;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use std::path::PathBuf;

#[derive(Debug)]
pub struct DatabaseConfig {
    pub database_path: PathBuf,
    pub pool: Option<SqlitePool>,
}

impl DatabaseConfig {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            database_path,
            pool: None,
        }
    }

    /// Initialize the database connection pool
    pub async fn init_pool(&mut self) -> Result<()> {
        if let Some(parent) = self.database_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create database directory")?;
        }

        let database_url = format!("sqlite:{}?mode=rwc", self.database_path.display());
        let pool = SqlitePool::connect(&database_url)
            .await
            .context("Failed to connect to SQLite database")?;
        self.pool = Some(pool);

        app_log!(info, "Database connection pool initialized: {}", database_url);
        Ok(())
    }

    pub fn pool(&self) -> Result<&SqlitePool> {
        self.pool.as_ref().ok_or_else(|| {
            anyhow::anyhow!("Database pool not initialized. Call init_pool() first.")
        })
    }

    pub async fn migrate(&self) -> Result<()> {
        let pool = self.pool()?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS analyses (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                file_name TEXT NOT NULL,
                content TEXT NOT NULL,
                report TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_analyses_user ON analyses(user_id, created_at);")
            .execute(pool)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS resumes (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                template INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_resumes_user ON resumes(user_id, updated_at);")
            .execute(pool)
            .await?;

        app_log!(info, "Database migrations completed successfully");
        Ok(())
    }
}

// ===== Analyses =====

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub user_id: String,
    pub file_name: String,
    pub content: String,
    pub report: AnalysisReport,
    pub created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct AnalysisRow {
    id: String,
    user_id: String,
    file_name: String,
    content: String,
    report: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AnalysisRow> for AnalysisRecord {
    type Error = anyhow::Error;

    fn try_from(row: AnalysisRow) -> Result<Self> {
        let report = serde_json::from_str(&row.report)
            .with_context(|| format!("Corrupt report stored for analysis {}", row.id))?;
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            file_name: row.file_name,
            content: row.content,
            report,
            created_at: row.created_at,
        })
    }
}

pub struct AnalysisRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AnalysisRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: &str,
        file_name: &str,
        content: &str,
        report: &AnalysisReport,
    ) -> Result<AnalysisRecord> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();
        let report_json = serde_json::to_string(report).context("Failed to serialize report")?;

        sqlx::query(
            r#"
            INSERT INTO analyses (id, user_id, file_name, content, report, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(file_name)
        .bind(content)
        .bind(&report_json)
        .bind(now)
        .execute(self.pool)
        .await?;

        app_log!(info, "Stored analysis {} for user {}", id, user_id);

        Ok(AnalysisRecord {
            id,
            user_id: user_id.to_string(),
            file_name: file_name.to_string(),
            content: content.to_string(),
            report: report.clone(),
            created_at: now,
        })
    }

    pub async fn find(&self, user_id: &str, id: &str) -> Result<Option<AnalysisRecord>> {
        let row = sqlx::query_as::<_, AnalysisRow>(
            r#"
            SELECT id, user_id, file_name, content, report, created_at
            FROM analyses
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        row.map(AnalysisRecord::try_from).transpose()
    }

    /// Newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<AnalysisRecord>> {
        let rows = sqlx::query_as::<_, AnalysisRow>(
            r#"
            SELECT id, user_id, file_name, content, report, created_at
            FROM analyses
            WHERE user_id = ?
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(AnalysisRecord::try_from).collect()
    }

    pub async fn delete(&self, user_id: &str, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM analyses WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            app_log!(info, "Deleted analysis {} for user {}", id, user_id);
        }
        Ok(deleted)
    }
}

// ===== Resumes =====

#[derive(Debug, Clone, Serialize)]
pub struct ResumeRecord {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: ResumeContent,
    pub template: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct ResumeRow {
    id: String,
    user_id: String,
    title: String,
    content: String,
    template: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ResumeRow> for ResumeRecord {
    type Error = anyhow::Error;

    fn try_from(row: ResumeRow) -> Result<Self> {
        let content = serde_json::from_str(&row.content)
            .with_context(|| format!("Corrupt content stored for resume {}", row.id))?;
        let template = u32::try_from(row.template)
            .with_context(|| format!("Invalid template {} for resume {}", row.template, row.id))?;
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            content,
            template,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub struct ResumeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResumeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: &str,
        title: &str,
        content: &ResumeContent,
        template: u32,
    ) -> Result<ResumeRecord> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();
        let content_json =
            serde_json::to_string(content).context("Failed to serialize resume content")?;

        sqlx::query(
            r#"
            INSERT INTO resumes (id, user_id, title, content, template, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(title)
        .bind(&content_json)
        .bind(i64::from(template))
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        app_log!(info, "Created resume {} for user {}", id, user_id);

        Ok(ResumeRecord {
            id,
            user_id: user_id.to_string(),
            title: title.to_string(),
            content: content.clone(),
            template,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns false when the resume does not exist or belongs to someone else.
    pub async fn update(
        &self,
        user_id: &str,
        id: &str,
        title: &str,
        content: &ResumeContent,
        template: u32,
    ) -> Result<bool> {
        let content_json =
            serde_json::to_string(content).context("Failed to serialize resume content")?;

        let result = sqlx::query(
            r#"
            UPDATE resumes
            SET title = ?, content = ?, template = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(title)
        .bind(&content_json)
        .bind(i64::from(template))
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        let updated = result.rows_affected() > 0;
        if updated {
            app_log!(info, "Updated resume {} for user {}", id, user_id);
        }
        Ok(updated)
    }

    pub async fn find(&self, user_id: &str, id: &str) -> Result<Option<ResumeRecord>> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            SELECT id, user_id, title, content, template, created_at, updated_at
            FROM resumes
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        row.map(ResumeRecord::try_from).transpose()
    }

    /// Most recently updated first
    pub async fn list(&self, user_id: &str) -> Result<Vec<ResumeRecord>> {
        let rows = sqlx::query_as::<_, ResumeRow>(
            r#"
            SELECT id, user_id, title, content, template, created_at, updated_at
            FROM resumes
            WHERE user_id = ?
            ORDER BY updated_at DESC, rowid DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(ResumeRecord::try_from).collect()
    }

    pub async fn count(&self, user_id: &str) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM resumes WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    pub async fn delete(&self, user_id: &str, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            app_log!(info, "Deleted resume {} for user {}", id, user_id);
        }
        Ok(deleted)
    }
}
