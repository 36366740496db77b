// src/presentation/http/controllers/moderators.rs
use crate::application::{
    commands::moderators::VerifyModeratorCommand, dto::ActorDto, error::ApplicationError,
};
use crate::domain::actor::ActorId;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ClientMeta};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

pub async fn verify_moderator(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path(id): Path<i64>,
) -> HttpResult<Json<ActorDto>> {
    let id = ActorId::new(id)
        .map_err(|_| HttpError::from_error(ApplicationError::not_found("moderator not found")))?;

    state
        .services
        .moderator_commands
        .verify_moderator(&actor, &meta, VerifyModeratorCommand { id })
        .await
        .into_http()
        .map(Json)
}
