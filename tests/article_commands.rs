// tests/article_commands.rs
mod support;

use akhbar_core::application::commands::articles::{
    CreateArticleCommand, ImageUpload, RemoveImageCommand, RetireArticleCommand,
    UpdateArticleCommand,
};
use akhbar_core::application::commands::moderators::VerifyModeratorCommand;
use akhbar_core::application::error::ApplicationError;
use akhbar_core::domain::actor::{ActorId, ActorKind};
use akhbar_core::domain::article::{ArticleDraft, ArticleId, ArticleWriteRepository, NewImage};
use akhbar_core::domain::audit::{AuditAction, AuditTarget};
use akhbar_core::domain::errors::DomainError;
use akhbar_core::domain::trash::{NewTrashRecord, TrashRepository};
use std::sync::Arc;

use support::builders::{
    ArticleBuilder, actor_record, admin, english_draft, meta, moderator, t0, urdu_draft,
};
use support::harness;
use support::mocks::InMemoryTrash;

fn create_command(draft: ArticleDraft) -> CreateArticleCommand {
    CreateArticleCommand {
        draft,
        slug: None,
        images: Vec::new(),
    }
}

#[tokio::test]
async fn create_derives_slug_and_writes_audit_entry() {
    let h = harness();
    let actor = admin(1, "Admin");

    let created = h
        .services
        .article_commands
        .create_article(&actor, &meta(), create_command(english_draft("Admin")))
        .await
        .unwrap();

    assert_eq!(created.slug, "budget-2025");
    assert_eq!(created.author, "Admin");

    let entries = h.audit.entries();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.action, AuditAction::Create);
    assert_eq!(entry.actor_kind, ActorKind::Admin);
    assert_eq!(
        entry.target,
        Some(AuditTarget::Article(ArticleId::new(created.id).unwrap()))
    );
    assert_eq!(
        entry.details.as_deref(),
        Some("Created article: Budget 2025")
    );
    assert_eq!(entry.ip_address.as_deref(), Some("203.0.113.7"));
    assert!(entry.counters.is_zero());
    assert_eq!(entry.created_at, Some(t0()));
}

#[tokio::test]
async fn create_suffixes_slug_on_title_collision() {
    let h = harness();
    let actor = admin(1, "Admin");

    let first = h
        .services
        .article_commands
        .create_article(&actor, &meta(), create_command(english_draft("Admin")))
        .await
        .unwrap();
    let second = h
        .services
        .article_commands
        .create_article(&actor, &meta(), create_command(english_draft("Admin")))
        .await
        .unwrap();

    assert_eq!(first.slug, "budget-2025");
    assert_eq!(second.slug, "budget-2025-1");
}

#[tokio::test]
async fn moderator_create_forces_byline_and_counts_language() {
    let h = harness();
    let actor = moderator(9, "Ayesha", true);

    let mut draft = urdu_draft("Someone Else");
    draft.author = Some("Someone Else".into());

    let created = h
        .services
        .article_commands
        .create_article(&actor, &meta(), create_command(draft))
        .await
        .unwrap();

    assert_eq!(created.author, "Ayesha");

    let entries = h.audit.entries();
    assert_eq!(entries[0].counters.created_articles_ur, 1);
    assert_eq!(entries[0].counters.created_articles_en, 0);
}

#[tokio::test]
async fn unverified_moderator_cannot_create() {
    let h = harness();
    let actor = moderator(9, "Ayesha", false);

    let err = h
        .services
        .article_commands
        .create_article(&actor, &meta(), create_command(english_draft("Ayesha")))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert!(h.audit.entries().is_empty());
}

#[tokio::test]
async fn create_reports_all_missing_fields_at_once() {
    let h = harness();
    let actor = admin(1, "Admin");

    let draft = ArticleDraft {
        language: Some(akhbar_core::domain::article::Language::En),
        ..ArticleDraft::default()
    };

    let err = h
        .services
        .article_commands
        .create_article(&actor, &meta(), create_command(draft))
        .await
        .unwrap_err();

    match err {
        ApplicationError::Domain(DomainError::Invalid(fields)) => {
            assert!(fields.contains("title"));
            assert!(fields.contains("content"));
            assert!(fields.contains("category"));
        }
        other => panic!("expected field errors, got {other}"),
    }
    assert!(h.articles.all().is_empty());
    assert!(h.audit.entries().is_empty());
}

#[tokio::test]
async fn failed_audit_write_does_not_roll_back_create() {
    let h = harness();
    h.audit.set_failing(true);
    let actor = admin(1, "Admin");

    let created = h
        .services
        .article_commands
        .create_article(&actor, &meta(), create_command(english_draft("Admin")))
        .await
        .unwrap();

    assert_eq!(h.articles.all().len(), 1);
    assert_eq!(created.slug, "budget-2025");
    assert!(h.audit.entries().is_empty());
}

#[tokio::test]
async fn moderator_updates_only_articles_under_their_byline() {
    let h = harness();
    h.articles
        .seed(ArticleBuilder::new(1).author("Ayesha").build());
    let owner = moderator(9, "Ayesha", true);
    let stranger = moderator(10, "Bilal", true);

    let update = |title: &str| UpdateArticleCommand {
        id: ArticleId::new(1).unwrap(),
        draft: ArticleDraft {
            title: Some(title.into()),
            ..ArticleDraft::default()
        },
        slug: None,
        images: Vec::new(),
    };

    let err = h
        .services
        .article_commands
        .update_article(&stranger, &meta(), update("Hijacked"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let updated = h
        .services
        .article_commands
        .update_article(&owner, &meta(), update("Monsoon Update"))
        .await
        .unwrap();
    assert_eq!(updated.title.as_deref(), Some("Monsoon Update"));
}

#[tokio::test]
async fn renamed_moderator_loses_ownership_of_old_byline() {
    let h = harness();
    h.articles
        .seed(ArticleBuilder::new(1).author("Old Name").build());
    let renamed = moderator(9, "New Name", true);

    let err = h
        .services
        .article_commands
        .update_article(
            &renamed,
            &meta(),
            UpdateArticleCommand {
                id: ArticleId::new(1).unwrap(),
                draft: ArticleDraft::default(),
                slug: None,
                images: Vec::new(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn admin_updates_any_article_and_title_change_moves_slug() {
    let h = harness();
    h.articles.seed(
        ArticleBuilder::new(1)
            .author("Ayesha")
            .title("Old Title")
            .slug("old-title")
            .build(),
    );
    let actor = admin(1, "Admin");

    let updated = h
        .services
        .article_commands
        .update_article(
            &actor,
            &meta(),
            UpdateArticleCommand {
                id: ArticleId::new(1).unwrap(),
                draft: ArticleDraft {
                    title: Some("Fresh Headline".into()),
                    ..ArticleDraft::default()
                },
                slug: None,
                images: Vec::new(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "fresh-headline");
    assert_eq!(updated.category, "News");

    let entries = h.audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, AuditAction::Update);
    assert_eq!(
        entries[0].details.as_deref(),
        Some("Updated article: Fresh Headline")
    );
}

#[tokio::test]
async fn update_without_title_change_keeps_slug() {
    let h = harness();
    h.articles.seed(
        ArticleBuilder::new(1)
            .title("Stable Title")
            .slug("stable-title")
            .build(),
    );
    let actor = admin(1, "Admin");

    let updated = h
        .services
        .article_commands
        .update_article(
            &actor,
            &meta(),
            UpdateArticleCommand {
                id: ArticleId::new(1).unwrap(),
                draft: ArticleDraft {
                    summary: Some("A fresh summary.".into()),
                    ..ArticleDraft::default()
                },
                slug: None,
                images: Vec::new(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "stable-title");
    assert_eq!(updated.summary.as_deref(), Some("A fresh summary."));
}

#[tokio::test]
async fn retire_snapshots_then_deletes_and_audits() {
    let h = harness();
    let seeded = ArticleBuilder::new(1)
        .title("Doomed Story")
        .slug("doomed-story")
        .author("Ayesha")
        .build();
    h.articles.seed(seeded);
    h.articles
        .add_image(
            ArticleId::new(1).unwrap(),
            NewImage {
                path: "cover.jpg".into(),
                original_name: Some("cover.jpg".into()),
                mime_type: Some("image/jpeg".into()),
                created_at: t0(),
            },
        )
        .await
        .unwrap();
    let actor = admin(1, "Admin");

    h.services
        .article_commands
        .retire_article(
            &actor,
            &meta(),
            RetireArticleCommand {
                id: ArticleId::new(1).unwrap(),
            },
        )
        .await
        .unwrap();

    assert!(h.articles.all().is_empty());

    let records = h.trash.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].article_data["slug"], "doomed-story");
    assert_eq!(records[0].deleted_by_kind, ActorKind::Admin);
    assert_eq!(records[0].deleted_at, t0());

    assert_eq!(h.files.deleted.lock().unwrap().as_slice(), ["cover.jpg"]);

    let entries = h.audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, AuditAction::Delete);
    assert_eq!(
        entries[0].details.as_deref(),
        Some("Deleted article: Doomed Story")
    );
}

#[tokio::test]
async fn trash_inserts_resolve_through_the_repository_trait() {
    let trash = Arc::new(InMemoryTrash::default());
    let repo: Arc<dyn TrashRepository> = Arc::clone(&trash) as _;

    repo.insert(NewTrashRecord {
        article_data: serde_json::json!({"slug": "doomed-story"}),
        deleted_by: ActorId::new(1).unwrap(),
        deleted_by_kind: ActorKind::Admin,
        deleted_at: t0(),
    })
    .await
    .unwrap();

    let records = trash.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].article_data["slug"], "doomed-story");
}

#[tokio::test]
async fn unverified_moderator_can_still_delete_own_article() {
    let h = harness();
    h.articles
        .seed(ArticleBuilder::new(1).author("Ayesha").build());
    let actor = moderator(9, "Ayesha", false);

    h.services
        .article_commands
        .retire_article(
            &actor,
            &meta(),
            RetireArticleCommand {
                id: ArticleId::new(1).unwrap(),
            },
        )
        .await
        .unwrap();

    assert!(h.articles.all().is_empty());
}

#[tokio::test]
async fn upload_and_remove_image_round_trip() {
    let h = harness();
    h.articles
        .seed(ArticleBuilder::new(1).author("Ayesha").build());
    let actor = moderator(9, "Ayesha", true);

    let updated = h
        .services
        .article_commands
        .update_article(
            &actor,
            &meta(),
            UpdateArticleCommand {
                id: ArticleId::new(1).unwrap(),
                draft: ArticleDraft::default(),
                slug: None,
                images: vec![ImageUpload {
                    original_name: "scene.png".into(),
                    mime_type: Some("image/png".into()),
                    bytes: vec![1, 2, 3],
                }],
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.images.len(), 1);
    let image_id = updated.images[0].id;

    h.services
        .article_commands
        .remove_image(
            &actor,
            &meta(),
            RemoveImageCommand {
                article_id: ArticleId::new(1).unwrap(),
                image_id: akhbar_core::domain::article::ImageId::new(image_id).unwrap(),
            },
        )
        .await
        .unwrap();

    let article = h.articles.by_id(ArticleId::new(1).unwrap()).unwrap();
    assert!(article.images.is_empty());
    assert_eq!(h.files.deleted.lock().unwrap().len(), 1);

    let actions: Vec<_> = h.audit.entries().iter().map(|e| e.action).collect();
    assert_eq!(actions, [AuditAction::Update, AuditAction::DeleteImage]);
}

#[tokio::test]
async fn remove_image_rejects_mismatched_article() {
    let h = harness();
    h.articles.seed(ArticleBuilder::new(1).build());
    h.articles.seed(ArticleBuilder::new(2).build());
    h.articles
        .add_image(
            ArticleId::new(1).unwrap(),
            NewImage {
                path: "a.jpg".into(),
                original_name: None,
                mime_type: None,
                created_at: t0(),
            },
        )
        .await
        .unwrap();
    let actor = admin(1, "Admin");

    let err = h
        .services
        .article_commands
        .remove_image(
            &actor,
            &meta(),
            RemoveImageCommand {
                article_id: ArticleId::new(2).unwrap(),
                image_id: akhbar_core::domain::article::ImageId::new(1).unwrap(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn verify_moderator_is_audited_and_idempotent() {
    let h = harness();
    h.actors
        .seed(actor_record(9, ActorKind::Moderator, "Ayesha", false));
    let actor = admin(1, "Admin");
    let command = || VerifyModeratorCommand {
        id: akhbar_core::domain::actor::ActorId::new(9).unwrap(),
    };

    let verified = h
        .services
        .moderator_commands
        .verify_moderator(&actor, &meta(), command())
        .await
        .unwrap();
    assert_eq!(verified.verified_at, Some(t0()));

    let entries = h.audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, AuditAction::VerifyModerator);

    let again = h
        .services
        .moderator_commands
        .verify_moderator(&actor, &meta(), command())
        .await
        .unwrap();
    assert_eq!(again.verified_at, Some(t0()));
    assert_eq!(h.audit.entries().len(), 1);
}

#[tokio::test]
async fn moderator_cannot_verify_others() {
    let h = harness();
    h.actors
        .seed(actor_record(10, ActorKind::Moderator, "Bilal", false));
    let actor = moderator(9, "Ayesha", true);

    let err = h
        .services
        .moderator_commands
        .verify_moderator(
            &actor,
            &meta(),
            VerifyModeratorCommand {
                id: akhbar_core::domain::actor::ActorId::new(10).unwrap(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}
