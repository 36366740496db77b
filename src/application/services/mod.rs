// src/application/services/mod.rs
pub mod audit;

use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, moderators::ModeratorCommandService},
        dto::AuthenticatedActor,
        error::{ApplicationError, ApplicationResult},
        ports::{storage::FileStore, time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, audit::AuditQueryService},
    },
    domain::{
        actor::{ActorId, ActorKind, ActorRepository},
        article::{ArticleReadRepository, ArticleWriteRepository, services::SlugAllocator},
        audit::AuditLogRepository,
        trash::TrashRepository,
    },
};

pub use audit::AuditRecorder;

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub moderator_commands: Arc<ModeratorCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub audit_queries: Arc<AuditQueryService>,
    actor_repo: Arc<dyn ActorRepository>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        actor_repo: Arc<dyn ActorRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        trash_repo: Arc<dyn TrashRepository>,
        audit_log_repo: Arc<dyn AuditLogRepository>,
        file_store: Arc<dyn FileStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let audit_recorder = Arc::new(AuditRecorder::new(
            Arc::clone(&audit_log_repo),
            Arc::clone(&clock),
        ));

        let slug_allocator = Arc::new(SlugAllocator::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&trash_repo),
            Arc::clone(&slug_allocator),
            Arc::clone(&file_store),
            Arc::clone(&clock),
            Arc::clone(&audit_recorder),
        ));

        let moderator_commands = Arc::new(ModeratorCommandService::new(
            Arc::clone(&actor_repo),
            Arc::clone(&clock),
            Arc::clone(&audit_recorder),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let audit_queries = Arc::new(AuditQueryService::new(
            Arc::clone(&audit_log_repo),
            Arc::clone(&article_read_repo),
        ));

        Self {
            article_commands,
            moderator_commands,
            article_queries,
            audit_queries,
            actor_repo,
        }
    }

    /// Resolve the actor identity supplied by the upstream session layer
    /// into a capability-carrying principal. The session layer
    /// authenticates; this decides what the actor may do.
    pub async fn resolve_actor(
        &self,
        kind: ActorKind,
        id: ActorId,
    ) -> ApplicationResult<AuthenticatedActor> {
        let actor = self
            .actor_repo
            .find(kind, id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("unknown actor"))?;

        if !actor.is_active {
            return Err(ApplicationError::unauthorized("actor is deactivated"));
        }

        Ok(actor.into())
    }
}
