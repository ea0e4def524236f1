use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use toolify_web::AppState;
use toolify_web::config::AppConfig;
use toolify_web::server::router;

fn app() -> axum::Router {
    router(AppState::new(Arc::new(AppConfig::default())))
}

async fn get(uri: &str, cookie: Option<&'static str>) -> anyhow::Result<(StatusCode, String)> {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    let response = app().oneshot(request.body(Body::empty())?).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

#[tokio::test]
async fn chat_page_renders_layout() -> anyhow::Result<()> {
    let (status, body) = get("/chat", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert_eq!(body.matches("<aside").count(), 1);
    assert_eq!(body.matches("data-nav-item=").count(), 4);
    assert_eq!(body.matches(r#"data-active="true""#).count(), 1);
    assert!(body.contains(r#"<html lang="en" class="dark">"#));
    Ok(())
}

#[tokio::test]
async fn theme_cookie_selects_theme() -> anyhow::Result<()> {
    let (_, body) = get("/chat", Some("theme=light")).await?;
    assert!(body.contains(r#"<html lang="en" class="light">"#));
    assert!(body.contains(r#"data-theme="light""#));

    let (_, body) = get("/chat", Some("theme=neon")).await?;
    assert!(body.contains(r#"<html lang="en" class="dark">"#));
    Ok(())
}

#[tokio::test]
async fn landing_page_renders_footer() -> anyhow::Result<()> {
    let (status, body) = get("/", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("data-footer-group=").count(), 3);
    assert!(body.contains("© 2025 Toolify. All rights reserved."));
    Ok(())
}

#[tokio::test]
async fn health_reports_ok() -> anyhow::Result<()> {
    let (status, body) = get("/health", None).await?;

    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(value["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found() -> anyhow::Result<()> {
    let (status, _) = get("/nope", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
