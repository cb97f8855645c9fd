//! Mock authentication session manager
//!
//! Stands in for a real identity provider: one fixed credential pair, tokens
//! minted locally by [`crate::token`], and simulated network latency. The
//! session itself is always read back from the [`SessionStore`], so a
//! logout that lands while a login or refresh is suspended still decides
//! the final stored state.

use crate::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use crate::runtime::{Clock, Timer};
use crate::session::{KeyValueStorage, Session, SessionStore};
use crate::token::{self, Token};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Where the manager is in the login/refresh lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticating,
    Authenticated,
    RefreshPending,
}

/// The signed-in user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    /// Avatar letter: first character upper-cased, `U` when there is none
    pub fn initial(&self) -> char {
        self.username
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}

/// Result of a successful login
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: Token,
    pub refresh_token: Token,
    pub user: User,
}

/// Orchestrates login, logout, expiry checks and token refresh
pub struct AuthManager {
    store: SessionStore,
    clock: Rc<dyn Clock>,
    timer: Rc<dyn Timer>,
    config: AuthConfig,
    state: Cell<AuthState>,
}

impl AuthManager {
    /// Create a manager, rebuilding its state from `storage`
    pub fn new(
        storage: Rc<dyn KeyValueStorage>,
        clock: Rc<dyn Clock>,
        timer: Rc<dyn Timer>,
        config: AuthConfig,
    ) -> Self {
        let store = SessionStore::new(storage, config.keys.clone());
        let manager = Self {
            store,
            clock,
            timer,
            config,
            state: Cell::new(AuthState::Unauthenticated),
        };
        manager.state.set(manager.stored_state());
        manager
    }

    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    pub(crate) fn timer(&self) -> Rc<dyn Timer> {
        Rc::clone(&self.timer)
    }

    /// Validate credentials and start a session
    #[tracing::instrument(name = "auth.login", skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<LoginResponse> {
        self.state.set(AuthState::Authenticating);
        self.timer.sleep(self.config.login_latency()).await;

        if username != self.config.username || password != self.config.password {
            tracing::warn!("Rejected login attempt");
            self.state.set(self.stored_state());
            return Err(AuthError::InvalidCredentials);
        }

        let now_secs = self.clock.now_secs();
        let token = token::encode(username, self.config.access_ttl(), now_secs);
        let refresh_token = token::encode(username, self.config.refresh_ttl(), now_secs);
        let session = Session {
            access_token: Some(token.clone()),
            refresh_token: Some(refresh_token.clone()),
            expires_at_ms: Some(self.access_expiry_marker()),
        };

        if let Err(err) = self.store.save(&session) {
            tracing::error!(error = %err, "Failed to persist session");
            self.store.clear();
            self.state.set(AuthState::Unauthenticated);
            return Err(err.into());
        }

        self.state.set(AuthState::Authenticated);
        tracing::info!("Logged in");

        Ok(LoginResponse {
            token,
            refresh_token,
            user: User {
                username: username.to_string(),
            },
        })
    }

    /// End the session. Safe to call when already logged out.
    pub fn logout(&self) {
        let had_session = !self.store.load().is_empty();
        self.store.clear();
        self.state.set(AuthState::Unauthenticated);
        if had_session {
            tracing::info!("Logged out");
        }
    }

    /// A stored access token exists and has not expired
    pub fn is_authenticated(&self) -> bool {
        self.store
            .access_token()
            .is_some_and(|token| !token::is_expired(&token, self.clock.now_ms()))
    }

    /// The user named by the stored access token, if it is still valid
    pub fn current_user(&self) -> Option<User> {
        let token = self.store.access_token()?;
        let claims = token.claims()?;
        if claims.is_expired_at(self.clock.now_ms()) {
            return None;
        }
        Some(User {
            username: claims.sub,
        })
    }

    /// Mint a new access token from the stored refresh token
    #[tracing::instrument(name = "auth.refresh", skip(self))]
    pub async fn refresh(&self) -> AuthResult<Token> {
        self.state.set(AuthState::RefreshPending);
        let _pending = PendingRefresh(self);
        self.timer.sleep(self.config.refresh_latency()).await;

        // Read only after the wait so a logout issued meanwhile wins.
        let result = self.exchange_refresh_token();

        match &result {
            Ok(_) => tracing::info!("Access token refreshed"),
            Err(err) => tracing::warn!(error = %err, "Token refresh failed"),
        }
        result
    }

    fn exchange_refresh_token(&self) -> AuthResult<Token> {
        let refresh_token = self.store.refresh_token().ok_or(AuthError::RefreshExpired)?;
        let claims = refresh_token.claims().ok_or(AuthError::RefreshInvalid)?;
        if claims.is_expired_at(self.clock.now_ms()) {
            return Err(AuthError::RefreshExpired);
        }

        let token = token::encode(&claims.sub, self.config.access_ttl(), self.clock.now_secs());
        self.store
            .replace_access(&token, self.access_expiry_marker())?;
        Ok(token)
    }

    fn access_expiry_marker(&self) -> i64 {
        self.clock.now_ms() + i64::from(self.config.access_ttl_secs) * 1000
    }

    fn stored_state(&self) -> AuthState {
        if self.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}

/// Leaves `RefreshPending` when a refresh completes or is dropped mid-wait
struct PendingRefresh<'a>(&'a AuthManager);

impl Drop for PendingRefresh<'_> {
    fn drop(&mut self) {
        // Anything other than RefreshPending means logout/login ran meanwhile.
        if self.0.state.get() == AuthState::RefreshPending {
            self.0.state.set(self.0.stored_state());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ManualClock;
    use crate::session::MemoryStorage;
    use std::time::Duration;

    const START_MS: i64 = 1_700_000_000_000;

    fn manager_with(storage: &MemoryStorage, clock: &ManualClock) -> AuthManager {
        AuthManager::new(
            Rc::new(storage.clone()),
            Rc::new(clock.clone()),
            Rc::new(clock.clone()),
            AuthConfig::default(),
        )
    }

    fn setup() -> (MemoryStorage, ManualClock, AuthManager) {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(START_MS);
        let manager = manager_with(&storage, &clock);
        (storage, clock, manager)
    }

    #[tokio::test]
    async fn test_login_with_fixed_credentials() {
        let (storage, clock, manager) = setup();
        assert_eq!(manager.state(), AuthState::Unauthenticated);

        let response = manager.login("admin", "password123").await.unwrap();
        assert_eq!(response.user.username, "admin");
        assert_eq!(manager.state(), AuthState::Authenticated);
        assert!(manager.is_authenticated());

        // Latency is simulated before the session is minted
        let login_ms = START_MS + 500;
        assert_eq!(clock.now_ms(), login_ms);

        let access = response.token.claims().unwrap();
        let refresh = response.refresh_token.claims().unwrap();
        assert_eq!(access.exp.unwrap() - access.iat, 3600);
        assert_eq!(refresh.exp.unwrap() - refresh.iat, 86_400);

        assert_eq!(
            storage.get_item("sw_token").as_deref(),
            Some(response.token.as_str())
        );
        assert_eq!(
            storage.get_item("sw_refresh_token").as_deref(),
            Some(response.refresh_token.as_str())
        );
        assert_eq!(
            storage.get_item("sw_token_expiry"),
            Some((login_ms + 3_600_000).to_string())
        );
    }

    #[tokio::test]
    async fn test_login_rejects_other_credentials() {
        let (storage, _clock, manager) = setup();

        for (username, password) in [
            ("admin", "wrong"),
            ("Admin", "password123"),
            ("", ""),
            ("admin ", "password123"),
        ] {
            let result = manager.login(username, password).await;
            assert_eq!(result, Err(AuthError::InvalidCredentials));
            assert_eq!(manager.state(), AuthState::Unauthenticated);
        }
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let (storage, _clock, manager) = setup();
        let response = manager.login("admin", "password123").await.unwrap();

        let result = manager.login("admin", "nope").await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert_eq!(manager.state(), AuthState::Authenticated);
        assert_eq!(
            storage.get_item("sw_token").as_deref(),
            Some(response.token.as_str())
        );
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let (storage, _clock, manager) = setup();
        manager.login("admin", "password123").await.unwrap();

        manager.logout();
        assert!(!manager.is_authenticated());
        assert_eq!(manager.state(), AuthState::Unauthenticated);
        assert!(storage.is_empty());

        // Idempotent
        manager.logout();
        assert!(storage.is_empty());
        assert_eq!(manager.current_user(), None);
    }

    #[test]
    fn test_logout_clears_partial_or_corrupt_state() {
        let (storage, _clock, manager) = setup();
        storage.set_item("sw_token", "garbage").unwrap();
        storage.set_item("sw_token_expiry", "not-a-number").unwrap();

        manager.logout();
        assert!(!storage.contains_key("sw_token"));
        assert!(!storage.contains_key("sw_refresh_token"));
        assert!(!storage.contains_key("sw_token_expiry"));
    }

    #[tokio::test]
    async fn test_current_user_tracks_token_validity() {
        let (storage, clock, manager) = setup();
        assert_eq!(manager.current_user(), None);

        manager.login("admin", "password123").await.unwrap();
        assert_eq!(
            manager.current_user(),
            Some(User {
                username: "admin".to_string()
            })
        );

        clock.advance(Duration::from_secs(3600));
        assert_eq!(manager.current_user(), None);
        assert!(!manager.is_authenticated());

        storage.set_item("sw_token", "a.b.c").unwrap();
        assert_eq!(manager.current_user(), None);
    }

    #[tokio::test]
    async fn test_state_rebuilt_from_storage() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(START_MS);

        let first = manager_with(&storage, &clock);
        first.login("admin", "password123").await.unwrap();

        let reloaded = manager_with(&storage, &clock);
        assert_eq!(reloaded.state(), AuthState::Authenticated);
        assert_eq!(reloaded.current_user().unwrap().username, "admin");

        clock.advance(Duration::from_secs(7200));
        let expired = manager_with(&storage, &clock);
        assert_eq!(expired.state(), AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_refresh_mints_new_access_token() {
        let (storage, clock, manager) = setup();
        let login = manager.login("admin", "password123").await.unwrap();

        clock.advance(Duration::from_secs(3500));
        let token = manager.refresh().await.unwrap();

        assert_ne!(token, login.token);
        let claims = token.claims().unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.iat, clock.now_secs());
        assert_eq!(storage.get_item("sw_token").as_deref(), Some(token.as_str()));
        assert_eq!(
            storage.get_item("sw_token_expiry"),
            Some((clock.now_ms() + 3_600_000).to_string())
        );
        // Refresh token is kept as is
        assert_eq!(
            storage.get_item("sw_refresh_token").as_deref(),
            Some(login.refresh_token.as_str())
        );
        assert_eq!(manager.state(), AuthState::Authenticated);
    }

    #[tokio::test]
    async fn test_refresh_requires_live_refresh_token() {
        let (storage, clock, manager) = setup();
        assert_eq!(manager.refresh().await, Err(AuthError::RefreshExpired));

        manager.login("admin", "password123").await.unwrap();
        clock.advance(Duration::from_secs(86_400));
        assert_eq!(manager.refresh().await, Err(AuthError::RefreshExpired));
        assert_eq!(manager.state(), AuthState::Unauthenticated);

        storage.set_item("sw_refresh_token", "a.b.c").unwrap();
        assert_eq!(manager.refresh().await, Err(AuthError::RefreshInvalid));
        assert!(!manager.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_wins_over_inflight_refresh() {
        let (storage, _clock, manager) = setup();
        manager.login("admin", "password123").await.unwrap();

        let refresh = manager.refresh();
        let logout = async { manager.logout() };
        let (result, ()) = futures::join!(refresh, logout);

        assert_eq!(result, Err(AuthError::RefreshExpired));
        assert_eq!(manager.state(), AuthState::Unauthenticated);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_refresh_restores_state() {
        let (_storage, _clock, manager) = setup();
        manager.login("admin", "password123").await.unwrap();

        {
            let mut refresh = std::pin::pin!(manager.refresh());
            assert!(futures::poll!(refresh).is_pending());
            assert_eq!(manager.state(), AuthState::RefreshPending);
        }

        assert_eq!(manager.state(), AuthState::Authenticated);
        assert!(manager.is_authenticated());
    }

    #[test]
    fn test_user_initial() {
        let user = |name: &str| User {
            username: name.to_string(),
        };
        assert_eq!(user("admin").initial(), 'A');
        assert_eq!(user("").initial(), 'U');
        assert_eq!(user("éowyn").initial(), 'É');
    }
}
