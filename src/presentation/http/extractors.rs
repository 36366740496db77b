// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::{AuthenticatedActor, RequestMeta},
        error::ApplicationError,
    },
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

const ACTOR_KIND_HEADER: &str = "x-actor-kind";
const ACTOR_ID_HEADER: &str = "x-actor-id";

/// Identity asserted by the session gateway in front of this service. The
/// gateway authenticates and forwards kind and id; the actor store decides
/// the rest.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedActor);

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let kind = header_str(parts, ACTOR_KIND_HEADER)?
            .parse()
            .map_err(|_| unauthorized("invalid actor kind"))?;
        let id = header_str(parts, ACTOR_ID_HEADER)?
            .parse::<i64>()
            .ok()
            .and_then(|raw| crate::domain::actor::ActorId::new(raw).ok())
            .ok_or_else(|| unauthorized("invalid actor id"))?;

        let actor = app_state
            .services
            .resolve_actor(kind, id)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(actor))
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, HttpError> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| unauthorized("missing actor identity headers"))
}

fn unauthorized(msg: &str) -> HttpError {
    HttpError::from_error(ApplicationError::unauthorized(msg))
}

/// Request provenance for audit entries: forwarded client address and user
/// agent. Always succeeds; both fields are optional.
#[derive(Debug, Clone, Default)]
pub struct ClientMeta(pub RequestMeta);

impl FromRequestParts<()> for ClientMeta {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(Self(RequestMeta {
            ip_address,
            user_agent,
        }))
    }
}
