// src/web/handlers/generation_handlers.rs
use crate::analysis::{ContentGenerator, GeneratedContent, IndustryCategory, JobContext};
use crate::auth::AuthenticatedUser;
use crate::web::types::*;
use rocket::serde::json::Json;
use rocket::State;
use std::sync::Arc;

pub async fn generate_with_ai_handler(
    request: Json<StandardRequest<JobContext>>,
    auth: AuthenticatedUser,
    generator: &State<Arc<dyn ContentGenerator>>,
) -> ApiResult<DataResponse<GeneratedContent>> {
    let conversation_id = request.conversation_id();
    let context = &request.data;

    app_log!(
        info,
        "Generating content for {} with {} backend (category: {})",
        auth.user_id(),
        generator.backend_name(),
        IndustryCategory::classify(&context.industry)
    );

    let content = generator.generate(context);

    Ok(Json(DataResponse::success(
        "Content generated successfully".to_string(),
        content,
        conversation_id,
    )))
}
