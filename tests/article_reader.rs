// tests/article_reader.rs
use caderno_core::application::context::{Theme, ThemeContext};

mod support;
use support::TestApp;

#[tokio::test]
async fn reader_renders_with_the_context_theme() {
    let app = TestApp::new();
    app.seed_article("Fourier", true, 0).await;

    let reader = app
        .services
        .article_reader("fourier".into(), ThemeContext::new(Theme::Dark))
        .await
        .unwrap();

    let detail = reader.detail();
    assert_eq!(detail.theme, Theme::Dark);
    assert_eq!(detail.rendered_html, "<div data-theme=\"dark\"><p>Fourier</p></div>");
}

#[tokio::test]
async fn theme_changes_re_render_the_article() {
    let app = TestApp::new();
    app.seed_article("Laplace", true, 0).await;
    let theme = ThemeContext::default();
    let mut reader = app
        .services
        .article_reader("laplace".into(), theme.clone())
        .await
        .unwrap();
    assert!(!reader.refresh().await.unwrap());

    theme.set(Theme::Dark);
    assert!(reader.refresh().await.unwrap());
    assert_eq!(reader.detail().theme, Theme::Dark);
    assert!(reader.detail().rendered_html.starts_with("<div data-theme=\"dark\">"));
    assert!(!reader.refresh().await.unwrap());

    assert_eq!(reader.toggle_theme().await.unwrap(), Theme::Light);
    assert_eq!(theme.current(), Theme::Light);
    assert!(reader.detail().rendered_html.starts_with("<div data-theme=\"light\">"));
}

#[tokio::test]
async fn drafts_are_not_readable() {
    let app = TestApp::new();
    app.seed_article("Rascunho", false, 0).await;
    let result = app
        .services
        .article_reader("rascunho".into(), ThemeContext::default())
        .await;
    assert!(result.is_err());
}
