// src/web/handlers/analysis_handlers.rs
use crate::analysis::analyze_resume;
use crate::auth::AuthenticatedUser;
use crate::database::{AnalysisRecord, AnalysisRepository, DatabaseConfig};
use crate::web::types::*;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

pub const DEFAULT_FILE_NAME: &str = "resume.txt";

/// Score `content` and store the report for `auth`'s user.
pub async fn store_analysis(
    auth: &AuthenticatedUser,
    db_config: &DatabaseConfig,
    file_name: &str,
    content: &str,
    conversation_id: Option<String>,
) -> ApiResult<DataResponse<AnalysisResult>> {
    let report = analyze_resume(content);

    let pool = db_config
        .pool()
        .map_err(|_| database_error("Failed to analyze resume", conversation_id.clone()))?;

    let record = AnalysisRepository::new(pool)
        .create(auth.user_id(), file_name, content, &report)
        .await
        .map_err(|e| {
            app_log!(error, "Failed to store analysis for {}: {}", auth.user_id(), e);
            database_error("Failed to analyze resume", conversation_id.clone())
        })?;

    app_log!(
        info,
        "Analyzed {} for {}: score {}",
        file_name,
        auth.user_id(),
        record.report.score
    );

    Ok(Json(DataResponse::success(
        "Resume analyzed successfully".to_string(),
        AnalysisResult {
            id: record.id,
            report: record.report,
        },
        conversation_id,
    )))
}

pub async fn analyze_handler(
    request: Json<StandardRequest<AnalyzeRequest>>,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<AnalysisResult>> {
    let conversation_id = request.conversation_id();
    let request = request.into_inner().data;

    if request.content.is_empty() {
        return Err(api_error(
            Status::BadRequest,
            "Resume content required",
            "CONTENT_REQUIRED",
            &["Paste or upload the resume text before analyzing"],
            conversation_id,
        ));
    }

    let file_name = request
        .file_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

    store_analysis(&auth, db_config, &file_name, &request.content, conversation_id).await
}

pub async fn get_analysis_handler(
    id: String,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<AnalysisRecord>> {
    let pool = db_config
        .pool()
        .map_err(|_| database_error("Failed to fetch analyses", None))?;

    match AnalysisRepository::new(pool).find(auth.user_id(), &id).await {
        Ok(Some(record)) => Ok(Json(DataResponse::success(
            "Analysis retrieved".to_string(),
            record,
            None,
        ))),
        Ok(None) => Err(not_found("Analysis", None)),
        Err(e) => {
            app_log!(error, "Failed to fetch analysis {}: {}", id, e);
            Err(database_error("Failed to fetch analyses", None))
        }
    }
}

pub async fn list_analyses_handler(
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<Vec<AnalysisRecord>>> {
    let pool = db_config
        .pool()
        .map_err(|_| database_error("Failed to fetch analyses", None))?;

    let records = AnalysisRepository::new(pool)
        .list(auth.user_id())
        .await
        .map_err(|e| {
            app_log!(error, "Failed to list analyses for {}: {}", auth.user_id(), e);
            database_error("Failed to fetch analyses", None)
        })?;

    Ok(Json(DataResponse::success(
        format!("{} analyses found", records.len()),
        records,
        None,
    )))
}

pub async fn delete_analysis_handler(
    id: Option<String>,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<ActionResponse> {
    let id = id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| id_required("Analysis"))?;

    let pool = db_config
        .pool()
        .map_err(|_| database_error("Failed to delete analysis", None))?;

    match AnalysisRepository::new(pool).delete(auth.user_id(), &id).await {
        Ok(true) => Ok(Json(ActionResponse::success(
            format!("Analysis '{}' deleted", id),
            "deleted".to_string(),
            None,
        ))),
        Ok(false) => Err(not_found("Analysis", None)),
        Err(e) => {
            app_log!(error, "Failed to delete analysis {}: {}", id, e);
            Err(database_error("Failed to delete analysis", None))
        }
    }
}
