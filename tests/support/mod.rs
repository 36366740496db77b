// tests/support/mod.rs
#![allow(dead_code)]

pub mod builders;
pub mod mocks;

use std::sync::Arc;

use akhbar_core::application::ports::{time::Clock, util::SlugGenerator};
use akhbar_core::application::services::ApplicationServices;
use akhbar_core::infrastructure::util::DefaultSlugGenerator;

use builders::t0;
use mocks::{FixedClock, InMemoryActors, InMemoryArticles, InMemoryAuditLog, InMemoryTrash, RecordingFileStore};

pub struct TestHarness {
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticles>,
    pub audit: Arc<InMemoryAuditLog>,
    pub trash: Arc<InMemoryTrash>,
    pub actors: Arc<InMemoryActors>,
    pub files: Arc<RecordingFileStore>,
}

pub fn harness() -> TestHarness {
    let articles = Arc::new(InMemoryArticles::default());
    let audit = Arc::new(InMemoryAuditLog::default());
    let trash = Arc::new(InMemoryTrash::default());
    let actors = Arc::new(InMemoryActors::default());
    let files = Arc::new(RecordingFileStore::default());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(t0()));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&actors) as _,
        Arc::clone(&articles) as _,
        Arc::clone(&articles) as _,
        Arc::clone(&trash) as _,
        Arc::clone(&audit) as _,
        Arc::clone(&files) as _,
        clock,
        slugger,
    ));

    TestHarness {
        services,
        articles,
        audit,
        trash,
        actors,
        files,
    }
}
