// src/web/handlers/system_handlers.rs
use crate::auth::OptionalAuth;
use crate::resume::{ResumeTemplate, TEMPLATES};
use crate::web::types::*;
use rocket::serde::json::Json;

pub async fn get_templates_handler() -> Json<DataResponse<Vec<ResumeTemplate>>> {
    Json(DataResponse::success(
        format!("{} templates available", TEMPLATES.len()),
        TEMPLATES.to_vec(),
        None,
    ))
}

pub async fn health_handler(auth: OptionalAuth) -> Json<TextResponse> {
    match auth.user {
        Some(user) => app_log!(info, "Health check by authenticated user: {}", user.email()),
        None => app_log!(debug, "Health check by anonymous user"),
    }
    Json(TextResponse::success("OK".to_string(), None))
}
