// src/presentation/http/extractors.rs
use crate::{
    application::{
        context::Theme,
        dto::{AuthenticatedUser, VisitorKey},
        error::ApplicationError,
    },
    presentation::http::state::HttpState,
};
use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};
use serde::Deserialize;
use std::net::SocketAddr;

use super::error::HttpError;

const THEME_COOKIE: &str = "theme";

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

/// Anonymised commenter identity plus the address forwarded to the bot
/// challenge.
#[derive(Debug, Clone)]
pub struct Visitor {
    pub key: VisitorKey,
    pub remote_ip: Option<String>,
}

/// Colour theme requested through `?theme=` or the `theme` cookie.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemePreference(pub Theme);

fn app_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::Infrastructure(
            "application state missing".into(),
        ))
    })
}

async fn bearer_user(
    state: &HttpState,
    headers: &HeaderMap,
) -> Result<Option<AuthenticatedUser>, HttpError> {
    let Some(header) = headers.typed_get::<Authorization<Bearer>>() else {
        return Ok(None);
    };
    state
        .services
        .authenticate(header.token())
        .await
        .map(Some)
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts)?;
        bearer_user(&app_state, &parts.headers)
            .await?
            .map(Self)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing Authorization header".into(),
                ))
            })
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts)?;
        Ok(Self(bearer_user(&app_state, &parts.headers).await?))
    }
}

impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts)?;
        let remote_ip = client_address(parts, app_state.trust_proxy_headers);
        let key = app_state
            .services
            .visitor_key(remote_ip.as_deref().unwrap_or("unknown"));
        Ok(Self { key, remote_ip })
    }
}

impl<S> FromRequestParts<S> for ThemePreference
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(requested_theme(parts).unwrap_or_default()))
    }
}

/// Peer address from `ConnectInfo`. With `trust_proxy_headers`, the first hop
/// of `X-Forwarded-For` or `X-Real-IP` takes precedence.
fn client_address(parts: &Parts, trust_proxy_headers: bool) -> Option<String> {
    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    let peer = || {
        parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
    };
    if trust_proxy_headers {
        header("x-forwarded-for")
            .or_else(|| header("x-real-ip"))
            .or_else(peer)
    } else {
        peer()
    }
}

#[derive(Deserialize)]
struct ThemeParams {
    theme: Option<String>,
}

fn requested_theme(parts: &Parts) -> Option<Theme> {
    let from_query = parts
        .uri
        .query()
        .and_then(|q| serde_urlencoded::from_str::<ThemeParams>(q).ok())
        .and_then(|p| p.theme)
        .and_then(|t| t.parse().ok());
    from_query.or_else(|| {
        parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(THEME_COOKIE).and_then(|t| t.parse().ok()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(request: Request<()>) -> Parts {
        request.into_parts().0
    }

    #[test]
    fn forwarded_for_wins_over_real_ip() {
        let parts = parts(
            Request::builder()
                .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
                .header("x-real-ip", "198.51.100.2")
                .body(())
                .unwrap(),
        );
        assert_eq!(client_address(&parts, true).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn proxy_headers_are_ignored_unless_trusted() {
        let mut request = Request::builder()
            .header("x-forwarded-for", "203.0.113.7")
            .header("x-real-ip", "198.51.100.2")
            .body(())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([192, 0, 2, 9], 4321))));
        let parts = parts(request);
        assert_eq!(client_address(&parts, false).as_deref(), Some("192.0.2.9"));
        assert_eq!(client_address(&parts, true).as_deref(), Some("203.0.113.7"));

        let bare = self::parts(
            Request::builder()
                .header("x-forwarded-for", "203.0.113.8")
                .body(())
                .unwrap(),
        );
        assert_eq!(client_address(&bare, false), None);
    }

    #[test]
    fn theme_query_overrides_cookie() {
        let parts = parts(
            Request::builder()
                .uri("/api/v1/articles/by-slug/x?theme=dark")
                .header("cookie", "theme=light")
                .body(())
                .unwrap(),
        );
        assert_eq!(requested_theme(&parts), Some(Theme::Dark));
    }

    #[test]
    fn theme_cookie_is_read() {
        let parts = parts(
            Request::builder()
                .uri("/x")
                .header("cookie", "session=1; theme=dark")
                .body(())
                .unwrap(),
        );
        assert_eq!(requested_theme(&parts), Some(Theme::Dark));
        let none = self::parts(Request::builder().uri("/x?theme=sepia").body(()).unwrap());
        assert_eq!(requested_theme(&none), None);
    }
}
