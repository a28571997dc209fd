// tests/article_commands.rs
use caderno_core::application::{
    commands::articles::{DeleteArticleCommand, SaveDraftCommand, TogglePublishCommand},
    error::ApplicationError,
};
use caderno_core::domain::draft::Draft;
use chrono::Duration;

mod support;
use support::{TestApp, fixed_now};

fn draft(title: &str) -> Draft {
    Draft {
        title: title.into(),
        excerpt: "Notas de aula".into(),
        content: "<p>$$e^{i\\pi} + 1 = 0$$</p>".into(),
        tags: vec!["matemática".into(), " análise ".into()],
        ..Draft::default()
    }
}

#[tokio::test]
async fn create_derives_a_unique_slug() {
    let app = TestApp::new();
    let admin = app.admin();

    let first = app
        .services
        .article_commands
        .save_draft(&admin, SaveDraftCommand { id: None, draft: draft("Identidade de Euler") })
        .await
        .unwrap();
    assert_eq!(first.slug, "identidade-de-euler");
    assert_eq!(first.tags, vec!["matemática", "análise"]);
    assert!(!first.published);
    assert!(first.published_at.is_none());

    let second = app
        .services
        .article_commands
        .save_draft(&admin, SaveDraftCommand { id: None, draft: draft("Identidade de Euler") })
        .await
        .unwrap();
    assert_eq!(second.slug, "identidade-de-euler-1");
}

#[tokio::test]
async fn update_replaces_fields_but_keeps_the_slug() {
    let app = TestApp::new();
    let admin = app.admin();
    let created = app
        .services
        .article_commands
        .save_draft(&admin, SaveDraftCommand { id: None, draft: draft("Primeira versao") })
        .await
        .unwrap();

    let updated = app
        .services
        .article_commands
        .save_draft(
            &admin,
            SaveDraftCommand {
                id: Some(created.id),
                draft: Draft {
                    excerpt: String::new(),
                    ..draft("Segunda versao")
                },
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Segunda versao");
    assert_eq!(updated.slug, "primeira-versao");
    assert!(updated.excerpt.is_none());
}

#[tokio::test]
async fn first_publication_is_stamped_once() {
    let app = TestApp::new();
    let admin = app.admin();
    let created = app
        .services
        .article_commands
        .save_draft(&admin, SaveDraftCommand { id: None, draft: draft("Publicavel") })
        .await
        .unwrap();

    let commands = &app.services.article_commands;
    let published = commands
        .toggle_publish(&admin, TogglePublishCommand { id: created.id })
        .await
        .unwrap();
    assert!(published.published);
    assert_eq!(published.published_at, Some(fixed_now()));

    app.clock.advance(Duration::hours(1));
    let hidden = commands
        .toggle_publish(&admin, TogglePublishCommand { id: created.id })
        .await
        .unwrap();
    assert!(!hidden.published);
    assert_eq!(hidden.published_at, Some(fixed_now()));

    app.clock.advance(Duration::hours(1));
    let again = commands
        .toggle_publish(&admin, TogglePublishCommand { id: created.id })
        .await
        .unwrap();
    assert_eq!(again.published_at, Some(fixed_now()));
    assert_eq!(again.updated_at, fixed_now() + Duration::hours(2));
}

#[tokio::test]
async fn delete_removes_the_article() {
    let app = TestApp::new();
    let admin = app.admin();
    let article = app.seed_article("Temporario", true, 0).await;

    let commands = &app.services.article_commands;
    commands
        .delete_article(&admin, DeleteArticleCommand { id: article.id.0 })
        .await
        .unwrap();
    assert!(app.articles.all().is_empty());
    assert!(matches!(
        commands
            .delete_article(&admin, DeleteArticleCommand { id: article.id.0 })
            .await,
        Err(ApplicationError::NotFound(_))
    ));
}

#[tokio::test]
async fn untouched_editor_content_is_rejected() {
    let app = TestApp::new();
    let err = app
        .services
        .article_commands
        .save_draft(
            &app.admin(),
            SaveDraftCommand {
                id: None,
                draft: Draft {
                    title: "Vazio".into(),
                    ..Draft::default()
                },
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_local_rejection());
    assert!(app.articles.all().is_empty());
}
