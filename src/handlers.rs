use crate::errors::AppError;
use crate::models::{BusinessProfile, ProfileResponse, RenderResponse};
use crate::state::AppState;
use crate::storage::persist_profile;
use crate::theme;
use crate::ui::{render_admin_dashboard_with, render_public_site};
use axum::{extract::State, response::Html, Json};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let profile = state.profile.read().await;
    let theme = theme::resolve(&profile.category);
    Ok(Html(render_public_site(&profile, &theme)?))
}

pub async fn admin(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let profile = state.profile.read().await;
    let theme = theme::resolve(&profile.category);
    Ok(Html(render_admin_dashboard_with(
        &profile,
        &theme,
        &state.credentials,
    )?))
}

pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    let profile = state.profile.read().await;
    Json(to_response(profile.clone()))
}

pub async fn put_profile(
    State(state): State<AppState>,
    Json(payload): Json<BusinessProfile>,
) -> Result<Json<ProfileResponse>, AppError> {
    payload.validate()?;

    let mut profile = state.profile.write().await;
    persist_profile(&state.profile_path, &payload).await?;
    info!(name = %payload.name, key = %payload.storage_key(), "profile updated");
    *profile = payload;

    Ok(Json(to_response(profile.clone())))
}

pub async fn render(
    State(state): State<AppState>,
    Json(payload): Json<BusinessProfile>,
) -> Result<Json<RenderResponse>, AppError> {
    payload.validate()?;

    let theme = theme::resolve(&payload.category);
    Ok(Json(RenderResponse {
        storage_key: payload.storage_key(),
        public_site: render_public_site(&payload, &theme)?,
        admin_dashboard: render_admin_dashboard_with(&payload, &theme, &state.credentials)?,
        theme,
    }))
}

fn to_response(profile: BusinessProfile) -> ProfileResponse {
    ProfileResponse {
        theme: theme::resolve(&profile.category),
        storage_key: profile.storage_key(),
        profile,
    }
}
