// src/auth.rs
//! Demo authentication.
//!
//! One fixed demo account can log in; signup accepts anything and logs the new
//! user straight in. Sessions are kept in an injected [`SessionStore`] keyed by
//! the session token, which is an HS256 JWT. A request is authenticated only
//! while its token verifies and is still present in the store.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub const DEMO_EMAIL: &str = "demo@careerforge.com";
pub const DEMO_PASSWORD: &str = "Demo123!";
pub const DEMO_USER_ID: &str = "demo-user-123";
pub const DEMO_USER_NAME: &str = "Demo User";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSession {
    pub user: DemoUser,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl DemoSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub email: String,
    pub name: String,
    pub jti: String,
    pub iat: usize,
    pub exp: usize,
}

impl From<Claims> for DemoUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
        }
    }
}

/// Key-value slot holding sessions, keyed by an opaque session key.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<DemoSession>;
    fn set(&self, key: &str, session: DemoSession);
    fn clear(&self, key: &str);
    /// Drop every session that expired at or before `now`.
    fn clear_expired(&self, now: DateTime<Utc>);
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, DemoSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<DemoSession> {
        self.sessions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .filter(|session| !session.is_expired(Utc::now()))
            .cloned()
    }

    fn set(&self, key: &str, session: DemoSession) {
        self.sessions
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), session);
    }

    fn clear(&self, key: &str) {
        self.sessions
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }

    fn clear_expired(&self, now: DateTime<Utc>) {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        let dropped = before - sessions.len();
        if dropped > 0 {
            app_log!(debug, "Dropped {} expired sessions", dropped);
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub session_ttl: Duration,
}

impl AuthConfig {
    pub fn new(jwt_secret: String, session_ttl_hours: i64) -> Self {
        Self {
            jwt_secret,
            session_ttl: Duration::hours(session_ttl_hours),
        }
    }
}

pub struct DemoAuth {
    config: AuthConfig,
    store: Arc<dyn SessionStore>,
}

impl DemoAuth {
    pub fn new(config: AuthConfig, store: Arc<dyn SessionStore>) -> Self {
        Self { config, store }
    }

    pub fn demo_credentials() -> (&'static str, &'static str) {
        (DEMO_EMAIL, DEMO_PASSWORD)
    }

    /// Log in with the demo credentials. Any other pair yields `None`.
    pub fn login(&self, email: &str, password: &str) -> Result<Option<DemoSession>> {
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            app_log!(warn, "Rejected login attempt for {}", email);
            return Ok(None);
        }

        let user = DemoUser {
            id: DEMO_USER_ID.to_string(),
            email: DEMO_EMAIL.to_string(),
            name: DEMO_USER_NAME.to_string(),
        };
        let session = self.open_session(user)?;
        app_log!(info, "Demo user logged in");
        Ok(Some(session))
    }

    /// Every signup succeeds and starts a session for the new user.
    pub fn signup(&self, email: &str, _password: &str, name: &str) -> Result<DemoSession> {
        let user = DemoUser {
            id: format!("demo-user-{}", Utc::now().timestamp_millis()),
            email: email.to_string(),
            name: name.to_string(),
        };
        let session = self.open_session(user)?;
        app_log!(info, "Signed up {} as {}", email, session.user.id);
        Ok(session)
    }

    pub fn logout(&self, token: &str) {
        self.store.clear(token);
    }

    pub fn session(&self, token: &str) -> Option<DemoSession> {
        self.store.get(token)
    }

    /// Check the token signature and expiry, then that the session is still live.
    pub fn verify(&self, token: &str) -> Result<DemoUser, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            app_log!(warn, "Token verification failed: {}", e);
            self.store.clear(token);
            AuthError::TokenVerificationFailed
        })?;

        match self.store.get(token) {
            Some(_) => Ok(token_data.claims.into()),
            None => {
                app_log!(
                    warn,
                    "Token for {} has no live session",
                    token_data.claims.sub
                );
                Err(AuthError::SessionNotFound)
            }
        }
    }

    fn open_session(&self, user: DemoUser) -> Result<DemoSession> {
        let now = Utc::now();
        let expires_at = now + self.config.session_ttl;
        let token = self.issue_token(&user, now, expires_at)?;

        self.store.clear_expired(now);
        let session = DemoSession {
            user,
            token,
            expires_at,
        };
        self.store.set(&session.token, session.clone());
        Ok(session)
    }

    fn issue_token(
        &self,
        user: &DemoUser,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<String> {
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            jti: uuid::Uuid::new_v4().to_string(),
            iat: issued_at.timestamp() as usize,
            exp: expires_at.timestamp().max(0) as usize,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .context("Failed to sign session token")
    }
}

/// Caller with a verified, live session.
pub struct AuthenticatedUser {
    pub user: DemoUser,
    pub token: String,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = AuthError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = match req.guard::<&State<DemoAuth>>().await {
            Outcome::Success(auth) => auth,
            Outcome::Error((status, _)) => {
                return Outcome::Error((status, AuthError::ConfigurationError))
            }
            Outcome::Forward(f) => return Outcome::Forward(f),
        };

        let token = match req.headers().get_one("Authorization") {
            Some(header) => match header.strip_prefix("Bearer ") {
                Some(token) => token.trim(),
                None => {
                    app_log!(warn, "Invalid Authorization header format");
                    return Outcome::Error((Status::Unauthorized, AuthError::InvalidToken));
                }
            },
            None => {
                app_log!(debug, "Missing Authorization header");
                return Outcome::Error((Status::Unauthorized, AuthError::MissingToken));
            }
        };

        match auth.verify(token) {
            Ok(user) => {
                app_log!(debug, "Authenticated {} ({})", user.email, user.id);
                Outcome::Success(AuthenticatedUser {
                    user,
                    token: token.to_string(),
                })
            }
            Err(e) => Outcome::Error((Status::Unauthorized, e)),
        }
    }
}

// Never fails; `user` is `None` for anonymous callers.
pub struct OptionalAuth {
    pub user: Option<AuthenticatedUser>,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for OptionalAuth {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match AuthenticatedUser::from_request(req).await {
            Outcome::Success(auth) => Outcome::Success(OptionalAuth { user: Some(auth) }),
            _ => Outcome::Success(OptionalAuth { user: None }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    TokenVerificationFailed,
    SessionNotFound,
    InvalidCredentials,
    ConfigurationError,
}

impl AuthError {
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "Authorization token required",
            AuthError::InvalidToken => "Invalid authorization token format",
            AuthError::TokenVerificationFailed => "Token verification failed",
            AuthError::SessionNotFound => "Session expired or logged out",
            AuthError::InvalidCredentials => "Invalid email or password",
            AuthError::ConfigurationError => "Authentication is not configured",
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
