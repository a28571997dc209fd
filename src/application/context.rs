// src/application/context.rs
//! Shared view state with explicit read and subscribe contracts.
//!
//! The signed-in actor and the colour theme live in two independent contexts
//! so a consumer of one never observes changes to the other.
use crate::application::dto::AuthenticatedUser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tokio::sync::watch;
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct AuthContext {
    tx: watch::Sender<Option<AuthenticatedUser>>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::signed_out()
    }
}

impl AuthContext {
    pub fn signed_out() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    pub fn signed_in(user: AuthenticatedUser) -> Self {
        let (tx, _) = watch::channel(Some(user));
        Self { tx }
    }

    pub fn current(&self) -> Option<AuthenticatedUser> {
        self.tx.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.tx.borrow().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<AuthenticatedUser>> {
        self.tx.subscribe()
    }

    pub fn sign_in(&self, user: AuthenticatedUser) {
        self.tx.send_replace(Some(user));
    }

    pub fn sign_out(&self) {
        self.tx.send_if_modified(|current| current.take().is_some());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeContext {
    tx: watch::Sender<Theme>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    pub fn current(&self) -> Theme {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }

    pub fn set(&self, theme: Theme) {
        self.tx.send_if_modified(|current| {
            if *current == theme {
                false
            } else {
                *current = theme;
                true
            }
        });
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;
    use chrono::Utc;

    fn user() -> AuthenticatedUser {
        let now = Utc::now();
        AuthenticatedUser {
            id: UserId::new(1).unwrap(),
            username: "admin".into(),
            issued_at: now,
            expires_at: now,
        }
    }

    #[tokio::test]
    async fn auth_subscribers_see_sign_in_and_out() {
        let ctx = AuthContext::signed_out();
        let mut rx = ctx.subscribe();
        assert!(!ctx.is_signed_in());

        ctx.sign_in(user());
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_ref().map(|u| u.username.as_str()), Some("admin"));

        ctx.sign_out();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }

    #[test]
    fn signing_out_twice_notifies_once() {
        let ctx = AuthContext::signed_in(user());
        let rx = ctx.subscribe();
        ctx.sign_out();
        assert!(rx.has_changed().unwrap());
        let rx = ctx.subscribe();
        ctx.sign_out();
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn theme_toggle_notifies_only_theme_subscribers() {
        let auth = AuthContext::signed_out();
        let auth_rx = auth.subscribe();
        let theme = ThemeContext::default();
        let mut theme_rx = theme.subscribe();

        assert_eq!(theme.toggle(), Theme::Dark);
        theme_rx.changed().await.unwrap();
        assert_eq!(*theme_rx.borrow(), Theme::Dark);
        assert!(!auth_rx.has_changed().unwrap());

        theme.set(Theme::Dark);
        assert!(!theme_rx.has_changed().unwrap());
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("DARK".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
