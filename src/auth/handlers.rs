use std::time::Duration;

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, MessageResponse, NewUser, RegisterRequest, TokenResponse},
        jwt::JwtKeys,
        password::{hash_password_blocking, verify_password_blocking},
        repo_types::User,
    },
    error::ApiError,
    state::AppState,
    validation::normalize,
};

pub const REFRESH_COOKIE: &str = "refreshToken";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh-token", post(refresh_token))
        .route("/auth/logout", post(logout))
}

fn refresh_cookie(token: String, ttl: Duration) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token))
        .http_only(true)
        .path("/")
        .max_age(time::Duration::seconds(ttl.as_secs() as i64))
        .build()
}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = AuthResponse),
        (status = 400, description = "Email already taken"),
        (status = 422, description = "Validation error"),
    ),
    tag = "auth",
)]
#[instrument(skip(state, jar, payload))]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), ApiError> {
    let NewUser {
        email,
        password,
        full_name,
        phone,
    } = payload
        .validate()
        .map_err(|e| ApiError::Validation(normalize(&e)))?;

    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = hash_password_blocking(password).await?;
    let user = User::create(&state.db, &email, &password_hash, &full_name, &phone).await?;

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_access(user.id)?;
    let refresh = keys.sign_refresh(user.id)?;
    let jar = jar.add(refresh_cookie(refresh, keys.refresh_ttl()));

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            access_token,
            user: user.into(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "auth",
)]
#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let email = payload.email.unwrap_or_default();
    let user = match User::find_by_email(&state.db, &email).await? {
        Some(user) => user,
        None => {
            warn!(email = %email, "login unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let password = payload.password.unwrap_or_default();
    let ok = verify_password_blocking(password, user.password_hash.clone()).await?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_access(user.id)?;
    let refresh = keys.sign_refresh(user.id)?;
    let jar = jar.add(refresh_cookie(refresh, keys.refresh_ttl()));

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok((
        jar,
        Json(AuthResponse {
            access_token,
            user: user.into(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/refresh-token",
    responses(
        (status = 200, description = "New access token", body = TokenResponse),
        (status = 401, description = "Missing or invalid refresh token"),
    ),
    tag = "auth",
)]
#[instrument(skip(state, jar))]
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<TokenResponse>), ApiError> {
    let presented = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(ApiError::MissingRefreshToken)?;

    let keys = JwtKeys::from_ref(&state);
    // Expired and tampered tokens get the same answer.
    let user_id = keys.verify_refresh(&presented).map_err(|_| {
        warn!("refresh token rejected");
        ApiError::InvalidRefreshToken
    })?;

    // Full rotation: a fresh token of each family on every refresh.
    let access_token = keys.sign_access(user_id)?;
    let refresh = keys.sign_refresh(user_id)?;
    let jar = jar.add(refresh_cookie(refresh, keys.refresh_ttl()));

    info!(user_id = %user_id, "tokens refreshed");
    Ok((jar, Json(TokenResponse { access_token })))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses((status = 200, description = "Logged out", body = MessageResponse)),
    tag = "auth",
)]
#[instrument(skip(jar))]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build((REFRESH_COOKIE, "")).path("/").build());
    (
        jar,
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}
