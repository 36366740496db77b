// src/presentation/http/controllers/audit.rs
use crate::application::{
    dto::{AuditLogEntryDto, CursorPage, Page},
    error::ApplicationError,
    queries::audit::{ExportLogsQuery, ListLogsQuery},
};
use crate::domain::{actor::ActorId, audit::AuditLogFilter};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LogListParams {
    #[serde(default)]
    pub actor_kind: Option<String>,
    #[serde(default)]
    pub actor_id: Option<i64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LogExportParams {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub cursor: Option<String>,
}

pub async fn list_logs(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<LogListParams>,
) -> HttpResult<Json<Page<AuditLogEntryDto>>> {
    let actor_kind = params
        .actor_kind
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(|err| HttpError::from_error(ApplicationError::Domain(err)))?;
    let actor_id = params
        .actor_id
        .map(ActorId::new)
        .transpose()
        .map_err(|err| HttpError::from_error(ApplicationError::Domain(err)))?;

    let query = ListLogsQuery {
        filter: AuditLogFilter {
            actor_kind,
            actor_id,
            include_noise: false,
        },
        page: params.page,
        per_page: params.per_page,
    };

    state
        .services
        .audit_queries
        .list_logs(&actor, query)
        .await
        .into_http()
        .map(Json)
}

pub async fn export_logs(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<LogExportParams>,
) -> HttpResult<Json<CursorPage<AuditLogEntryDto>>> {
    let query = ExportLogsQuery {
        limit: params.limit,
        cursor: params.cursor,
    };

    state
        .services
        .audit_queries
        .export_logs(&actor, query)
        .await
        .into_http()
        .map(Json)
}
