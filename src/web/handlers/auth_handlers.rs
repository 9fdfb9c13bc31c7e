// src/web/handlers/auth_handlers.rs
use crate::auth::{AuthError, AuthenticatedUser, DemoAuth, DemoSession, DemoUser};
use crate::web::types::*;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

fn session_response(
    message: &str,
    session: DemoSession,
    conversation_id: Option<String>,
) -> Json<DataResponse<SessionData>> {
    Json(DataResponse::success(
        message.to_string(),
        SessionData {
            token: session.token,
            user: session.user,
        },
        conversation_id,
    ))
}

fn session_error(e: anyhow::Error, conversation_id: Option<String>) -> ApiError {
    app_log!(error, "Failed to open session: {}", e);
    api_error(
        Status::InternalServerError,
        "Failed to create session",
        "INTERNAL_ERROR",
        &["Try again in a few moments"],
        conversation_id,
    )
}

pub async fn login_handler(
    request: Json<StandardRequest<LoginRequest>>,
    auth: &State<DemoAuth>,
) -> ApiResult<DataResponse<SessionData>> {
    let conversation_id = request.conversation_id();

    match auth.login(&request.data.email, &request.data.password) {
        Ok(Some(session)) => Ok(session_response(
            "Logged in successfully",
            session,
            conversation_id,
        )),
        Ok(None) => {
            let (demo_email, demo_password) = DemoAuth::demo_credentials();
            let hint = format!("Use the demo account {} / {}", demo_email, demo_password);
            Err(api_error(
                Status::Unauthorized,
                AuthError::InvalidCredentials.message(),
                "INVALID_CREDENTIALS",
                &[hint.as_str()],
                conversation_id,
            ))
        }
        Err(e) => Err(session_error(e, conversation_id)),
    }
}

pub async fn signup_handler(
    request: Json<StandardRequest<SignupRequest>>,
    auth: &State<DemoAuth>,
) -> ApiResult<DataResponse<SessionData>> {
    let conversation_id = request.conversation_id();
    let data = &request.data;

    if data.email.trim().is_empty() || data.password.is_empty() {
        return Err(api_error(
            Status::BadRequest,
            "Email and password are required",
            "INVALID_SIGNUP",
            &["Provide a non-empty email and password"],
            conversation_id,
        ));
    }

    auth.signup(&data.email, &data.password, &data.name)
        .map(|session| session_response("Account created", session, conversation_id.clone()))
        .map_err(|e| session_error(e, conversation_id))
}

pub async fn logout_handler(
    user: AuthenticatedUser,
    auth: &State<DemoAuth>,
) -> Json<ActionResponse> {
    auth.logout(&user.token);
    app_log!(info, "Logged out {}", user.user_id());

    Json(ActionResponse::success(
        "Logged out".to_string(),
        "logout".to_string(),
        None,
    ))
}

pub async fn get_current_user_handler(user: AuthenticatedUser) -> Json<DataResponse<DemoUser>> {
    Json(DataResponse::success(
        format!("Authenticated as {}", user.email()),
        user.user,
        None,
    ))
}
