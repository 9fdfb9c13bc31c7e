// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::analysis::{ContentGenerator, GeneratedContent, JobContext, TemplateGenerator};
use crate::auth::{
    AuthConfig, AuthenticatedUser, DemoAuth, DemoUser, InMemorySessionStore, OptionalAuth,
    SessionStore,
};
use crate::config::AppConfig;
use crate::database::{AnalysisRecord, DatabaseConfig, ResumeRecord};
use crate::demo_data::seed_demo_data;
use crate::resume::ResumeTemplate;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, delete, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::sync::Arc;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

// ===== Auth =====

#[post("/auth/login", data = "<request>")]
pub async fn login(
    request: Json<StandardRequest<LoginRequest>>,
    auth: &State<DemoAuth>,
) -> ApiResult<DataResponse<SessionData>> {
    handlers::login_handler(request, auth).await
}

#[post("/auth/signup", data = "<request>")]
pub async fn signup(
    request: Json<StandardRequest<SignupRequest>>,
    auth: &State<DemoAuth>,
) -> ApiResult<DataResponse<SessionData>> {
    handlers::signup_handler(request, auth).await
}

#[post("/auth/logout")]
pub async fn logout(user: AuthenticatedUser, auth: &State<DemoAuth>) -> Json<ActionResponse> {
    handlers::logout_handler(user, auth).await
}

#[get("/me")]
pub async fn get_current_user(user: AuthenticatedUser) -> Json<DataResponse<DemoUser>> {
    handlers::get_current_user_handler(user).await
}

// ===== Analyses =====

#[post("/analyze", data = "<request>")]
pub async fn analyze(
    request: Json<StandardRequest<AnalyzeRequest>>,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<AnalysisResult>> {
    handlers::analyze_handler(request, auth, db_config).await
}

#[get("/analyze?<id>", rank = 1)]
pub async fn get_analysis(
    id: String,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<AnalysisRecord>> {
    handlers::get_analysis_handler(id, auth, db_config).await
}

#[get("/analyze", rank = 2)]
pub async fn list_analyses(
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<Vec<AnalysisRecord>>> {
    handlers::list_analyses_handler(auth, db_config).await
}

#[delete("/analyze?<id>")]
pub async fn delete_analysis(
    id: Option<String>,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<ActionResponse> {
    handlers::delete_analysis_handler(id, auth, db_config).await
}

// ===== Generation =====

#[post("/generate-with-ai", data = "<request>")]
pub async fn generate_with_ai(
    request: Json<StandardRequest<JobContext>>,
    auth: AuthenticatedUser,
    generator: &State<Arc<dyn ContentGenerator>>,
) -> ApiResult<DataResponse<GeneratedContent>> {
    handlers::generate_with_ai_handler(request, auth, generator).await
}

// ===== Resumes =====

#[post("/resumes", data = "<request>")]
pub async fn save_resume(
    request: Json<StandardRequest<SaveResumeRequest>>,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<SavedResume>> {
    handlers::save_resume_handler(request, auth, db_config).await
}

#[get("/resumes?<id>", rank = 1)]
pub async fn get_resume(
    id: String,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<ResumeRecord>> {
    handlers::get_resume_handler(id, auth, db_config).await
}

#[get("/resumes", rank = 2)]
pub async fn list_resumes(
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<Vec<ResumeRecord>>> {
    handlers::list_resumes_handler(auth, db_config).await
}

#[delete("/resumes?<id>")]
pub async fn delete_resume(
    id: Option<String>,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<ActionResponse> {
    handlers::delete_resume_handler(id, auth, db_config).await
}

#[post("/resumes/analyze?<id>")]
pub async fn analyze_saved_resume(
    id: Option<String>,
    auth: AuthenticatedUser,
    db_config: &State<DatabaseConfig>,
) -> ApiResult<DataResponse<AnalysisResult>> {
    handlers::analyze_saved_resume_handler(id, auth, db_config).await
}

// ===== System =====

#[get("/templates")]
pub async fn get_templates() -> Json<DataResponse<Vec<ResumeTemplate>>> {
    handlers::get_templates_handler().await
}

#[get("/health")]
pub async fn health(auth: OptionalAuth) -> Json<TextResponse> {
    handlers::health_handler(auth).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
fn catcher_response(error: &str, error_code: &str, suggestions: &[&str]) -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        error.to_string(),
        error_code.to_string(),
        suggestions.iter().map(|s| s.to_string()).collect(),
        None,
    ))
}

#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    catcher_response(
        "Invalid request format",
        "BAD_REQUEST",
        &[
            "Check your request JSON format",
            "Verify all required fields are present",
        ],
    )
}

#[rocket::catch(401)]
pub fn unauthorized() -> Json<StandardErrorResponse> {
    catcher_response(
        "Unauthorized",
        "UNAUTHORIZED",
        &["Log in and send the session token as a Bearer Authorization header"],
    )
}

#[rocket::catch(404)]
pub fn not_found_catcher() -> Json<StandardErrorResponse> {
    catcher_response("Not found", "NOT_FOUND", &["Check the endpoint path"])
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    catcher_response(
        "Request body does not match the expected shape",
        "BAD_REQUEST",
        &["Verify field names and types"],
    )
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    catcher_response(
        "Internal server error",
        "INTERNAL_ERROR",
        &[
            "Try again in a few moments",
            "Contact support if the problem persists",
        ],
    )
}

/// Open the database, seed demo data if configured and assemble the app.
pub async fn build_rocket(config: &AppConfig) -> Result<Rocket<Build>> {
    let mut db_config = DatabaseConfig::new(config.database_path.clone());
    db_config.init_pool().await?;
    db_config.migrate().await?;

    if config.seed_demo_data {
        seed_demo_data(db_config.pool()?).await?;
    }

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let demo_auth = DemoAuth::new(
        AuthConfig::new(config.jwt_secret.clone(), config.session_ttl_hours),
        store,
    );
    let generator: Arc<dyn ContentGenerator> = Arc::new(TemplateGenerator);

    let figment = rocket::Config::figment().merge(("port", config.port));

    Ok(rocket::custom(figment)
        .attach(Cors)
        .manage(db_config)
        .manage(demo_auth)
        .manage(generator)
        .register(
            "/api",
            catchers![
                bad_request,
                unauthorized,
                not_found_catcher,
                unprocessable,
                internal_error
            ],
        )
        .mount(
            "/api",
            routes![
                login,
                signup,
                logout,
                get_current_user,
                analyze,
                get_analysis,
                list_analyses,
                delete_analysis,
                generate_with_ai,
                save_resume,
                get_resume,
                list_resumes,
                delete_resume,
                analyze_saved_resume,
                get_templates,
                health,
                options,
            ],
        ))
}

pub async fn start_web_server(config: AppConfig) -> Result<()> {
    config.ensure_directories().await?;

    app_log!(info, "Starting CareerForge API server");
    app_log!(info, "Database: {}", config.database_path.display());
    app_log!(info, "Port: {}", config.port);

    let rocket = build_rocket(&config).await?;
    rocket
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed: {}", e))?;

    Ok(())
}
