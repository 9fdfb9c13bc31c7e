// src/web/handlers/resume_handlers.rs
use super::analysis_handlers::store_analysis;
use crate::auth::AuthenticatedUser;
use crate::database::{DatabaseConfig, ResumeRecord, ResumeRepository};
use crate::resume::find_template;
use crate::web::types::*;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

pub async fn save_resume_handler(
    request: Json<StandardRequest<SaveResumeRequest>>,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<SavedResume>> {
    let conversation_id = request.conversation_id();
    let request = request.into_inner().data;

    if find_template(request.template).is_none() {
        return Err(api_error(
            Status::BadRequest,
            &format!("Unknown template: {}", request.template),
            "INVALID_TEMPLATE",
            &["Use one of the ids listed by GET /api/templates"],
            conversation_id,
        ));
    }

    let pool = db_config
        .pool()
        .map_err(|_| database_error("Failed to save resume", conversation_id.clone()))?;
    let repo = ResumeRepository::new(pool);

    let id = match request.id.filter(|id| !id.is_empty()) {
        Some(id) => {
            let updated = repo
                .update(
                    auth.user_id(),
                    &id,
                    &request.title,
                    &request.content,
                    request.template,
                )
                .await
                .map_err(|e| {
                    app_log!(error, "Failed to update resume {}: {}", id, e);
                    database_error("Failed to save resume", conversation_id.clone())
                })?;
            if !updated {
                return Err(not_found("Resume", conversation_id));
            }
            id
        }
        None => {
            repo.create(
                auth.user_id(),
                &request.title,
                &request.content,
                request.template,
            )
            .await
            .map_err(|e| {
                app_log!(error, "Failed to create resume for {}: {}", auth.user_id(), e);
                database_error("Failed to save resume", conversation_id.clone())
            })?
            .id
        }
    };

    Ok(Json(DataResponse::success(
        "Resume saved successfully".to_string(),
        SavedResume { id },
        conversation_id,
    )))
}

pub async fn get_resume_handler(
    id: String,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<ResumeRecord>> {
    let pool = db_config
        .pool()
        .map_err(|_| database_error("Failed to fetch resumes", None))?;

    match ResumeRepository::new(pool).find(auth.user_id(), &id).await {
        Ok(Some(record)) => Ok(Json(DataResponse::success(
            "Resume retrieved".to_string(),
            record,
            None,
        ))),
        Ok(None) => Err(not_found("Resume", None)),
        Err(e) => {
            app_log!(error, "Failed to fetch resume {}: {}", id, e);
            Err(database_error("Failed to fetch resumes", None))
        }
    }
}

pub async fn list_resumes_handler(
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<Vec<ResumeRecord>>> {
    let pool = db_config
        .pool()
        .map_err(|_| database_error("Failed to fetch resumes", None))?;

    let records = ResumeRepository::new(pool)
        .list(auth.user_id())
        .await
        .map_err(|e| {
            app_log!(error, "Failed to list resumes for {}: {}", auth.user_id(), e);
            database_error("Failed to fetch resumes", None)
        })?;

    Ok(Json(DataResponse::success(
        format!("{} resumes found", records.len()),
        records,
        None,
    )))
}

pub async fn delete_resume_handler(
    id: Option<String>,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<ActionResponse> {
    let id = id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| id_required("Resume"))?;

    let pool = db_config
        .pool()
        .map_err(|_| database_error("Failed to delete resume", None))?;

    match ResumeRepository::new(pool).delete(auth.user_id(), &id).await {
        Ok(true) => Ok(Json(ActionResponse::success(
            format!("Resume '{}' deleted", id),
            "deleted".to_string(),
            None,
        ))),
        Ok(false) => Err(not_found("Resume", None)),
        Err(e) => {
            app_log!(error, "Failed to delete resume {}: {}", id, e);
            Err(database_error("Failed to delete resume", None))
        }
    }
}

/// Render a saved resume to text and run it through the analyzer.
pub async fn analyze_saved_resume_handler(
    id: Option<String>,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<AnalysisResult>> {
    let id = id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| id_required("Resume"))?;

    let pool = db_config
        .pool()
        .map_err(|_| database_error("Failed to analyze resume", None))?;

    let record = match ResumeRepository::new(pool).find(auth.user_id(), &id).await {
        Ok(Some(record)) => record,
        Ok(None) => return Err(not_found("Resume", None)),
        Err(e) => {
            app_log!(error, "Failed to load resume {}: {}", id, e);
            return Err(database_error("Failed to analyze resume", None));
        }
    };

    let text = record.content.to_plain_text();
    if text.is_empty() {
        return Err(api_error(
            Status::BadRequest,
            "Resume has no content to analyze",
            "CONTENT_REQUIRED",
            &["Fill in at least one section of the resume"],
            None,
        ));
    }

    let file_name = format!("{}.txt", record.title);
    store_analysis(&auth, db_config, &file_name, &text, None).await
}
