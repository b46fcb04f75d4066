use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{patch, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    applications::{
        dto::{ApplicationPage, CreateApplicationRequest, PageQuery, Pagination},
        repo_types::Application,
    },
    auth::jwt::AuthUser,
    error::ApiError,
    state::AppState,
    validation::normalize,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/applications", post(create_application).get(list_applications))
        .route("/applications/:id/toggle-archive", patch(toggle_archive))
}

#[utoipa::path(
    post,
    path = "/applications",
    request_body = CreateApplicationRequest,
    responses(
        (status = 201, description = "Application created", body = Application),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error"),
    ),
    security(("bearer_auth" = [])),
    tag = "applications",
)]
#[instrument(skip(state, payload))]
pub async fn create_application(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), ApiError> {
    let new_application = payload
        .validate()
        .map_err(|e| ApiError::Validation(normalize(&e)))?;

    let application = Application::insert(&state.db, &new_application).await?;
    info!(application_id = %application.id, user_id = %user_id, "application created");
    Ok((StatusCode::CREATED, Json(application)))
}

#[utoipa::path(
    get,
    path = "/applications",
    params(PageQuery),
    responses(
        (status = 200, description = "Paginated applications", body = ApplicationPage),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "applications",
)]
#[instrument(skip(state))]
pub async fn list_applications(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApplicationPage>, ApiError> {
    let page = query.page();
    let limit = query.limit();

    let total = Application::count(&state.db).await?;
    let data = Application::list_page(&state.db, limit, (page - 1) * limit).await?;

    Ok(Json(ApplicationPage {
        data,
        pagination: Pagination::new(total, page, limit),
    }))
}

#[utoipa::path(
    patch,
    path = "/applications/{id}/toggle-archive",
    params(("id" = Uuid, Path, description = "Application id")),
    responses(
        (status = 200, description = "Archived flag flipped", body = Application),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Application not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "applications",
)]
#[instrument(skip(state))]
pub async fn toggle_archive(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Application>, ApiError> {
    let application = Application::toggle_archived(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Application"))?;

    info!(
        application_id = %id,
        user_id = %user_id,
        archived = application.archived,
        "archive toggled"
    );
    Ok(Json(application))
}
