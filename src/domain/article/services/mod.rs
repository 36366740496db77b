// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::{DomainError, DomainResult};

/// Upper bound on suffix probing. Exhausting it surfaces a conflict rather
/// than probing forever under pathological same-title churn.
pub const MAX_SLUG_PROBES: u32 = 100;

/// Domain service responsible for deriving unique, URL-safe slugs.
pub struct SlugAllocator {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugAllocator {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Derive a unique slug. An explicit `candidate` wins over the titles;
    /// the English title is preferred over the Urdu one; with neither, a
    /// timestamp token keeps the article addressable. Collisions against
    /// articles other than `ignore_id` are resolved by appending `-{n}`,
    /// probing n = 1, 2, ... deterministically.
    pub async fn allocate(
        &self,
        candidate: Option<&str>,
        title: Option<&str>,
        title_urdu: Option<&str>,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.derive_base(candidate, title, title_urdu);

        let mut probe = base.clone();
        for counter in 1..=MAX_SLUG_PROBES {
            let slug = ArticleSlug::new(probe.clone())?;
            match self.read_repo.find_id_by_slug(slug.as_str()).await? {
                Some(existing) if ignore_id == Some(existing) => return Ok(slug),
                Some(_) => probe = format!("{base}-{counter}"),
                None => return Ok(slug),
            }
        }

        Err(DomainError::Conflict(format!(
            "could not allocate a unique slug for '{base}' within {MAX_SLUG_PROBES} probes"
        )))
    }

    fn derive_base(
        &self,
        candidate: Option<&str>,
        title: Option<&str>,
        title_urdu: Option<&str>,
    ) -> String {
        let source = [candidate, title, title_urdu]
            .into_iter()
            .flatten()
            .map(|s| self.generator.slugify(s))
            .find(|s| !s.is_empty());

        source.unwrap_or_else(|| format!("article-{}", Utc::now().timestamp()))
    }
}
