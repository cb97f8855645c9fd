//! Global authentication context and provider

use crate::storage::BrowserStorage;
use holocron_core::runtime::{PlatformTimer, SystemClock, spawn_local};
use holocron_core::{AuthConfig, AuthManager, RefreshMonitor, User};
use std::rc::Rc;
use yew::prelude::*;

/// What the UI knows about the session
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    /// A login request is in flight
    pub pending: bool,
    /// Inline error for the login form
    pub error: Option<String>,
}

/// Authentication context actions
pub enum AuthAction {
    LoginStarted,
    LoggedIn(User),
    LoginFailed(String),
    LoggedOut,
    ClearError,
}

impl Reducible for AuthSnapshot {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::LoginStarted => Rc::new(Self {
                pending: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::LoggedIn(user) => Rc::new(Self {
                user: Some(user),
                pending: false,
                error: None,
            }),
            AuthAction::LoginFailed(error) => Rc::new(Self {
                pending: false,
                error: Some(error),
                ..(*self).clone()
            }),
            AuthAction::LoggedOut => Rc::new(Self::default()),
            AuthAction::ClearError => Rc::new(Self {
                error: None,
                ..(*self).clone()
            }),
        }
    }
}

/// Authentication context handed to components
#[derive(Clone)]
pub struct AuthContext {
    manager: Rc<AuthManager>,
    snapshot: UseReducerHandle<AuthSnapshot>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.manager, &other.manager) && self.snapshot == other.snapshot
    }
}

impl AuthContext {
    pub fn user(&self) -> Option<&User> {
        self.snapshot.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.user.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.snapshot.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.snapshot.error.as_deref()
    }

    /// Start a login; the outcome lands in the snapshot
    pub fn login(&self, username: String, password: String) {
        let manager = Rc::clone(&self.manager);
        let snapshot = self.snapshot.clone();
        snapshot.dispatch(AuthAction::LoginStarted);

        spawn_local(async move {
            match manager.login(&username, &password).await {
                Ok(response) => snapshot.dispatch(AuthAction::LoggedIn(response.user)),
                Err(err) => snapshot.dispatch(AuthAction::LoginFailed(err.to_string())),
            }
        });
    }

    pub fn logout(&self) {
        self.manager.logout();
        self.snapshot.dispatch(AuthAction::LoggedOut);
    }

    pub fn clear_error(&self) {
        self.snapshot.dispatch(AuthAction::ClearError);
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub config: AuthConfig,
    pub children: Children,
}

/// Owns the session manager and runs the silent refresh loop while signed in
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let manager = use_memo((), {
        let config = props.config.clone();
        move |_| {
            AuthManager::new(
                Rc::new(BrowserStorage::new()),
                Rc::new(SystemClock),
                Rc::new(PlatformTimer),
                config,
            )
        }
    });

    let snapshot = use_reducer({
        let manager = Rc::clone(&manager);
        move || AuthSnapshot {
            user: manager.current_user(),
            ..AuthSnapshot::default()
        }
    });

    // Acquire the refresh loop on sign-in, dispose it on sign-out or unmount
    {
        let manager = Rc::clone(&manager);
        let snapshot = snapshot.clone();
        let signed_in = snapshot.user.is_some();
        use_effect_with(signed_in, move |signed_in| {
            let handle = signed_in.then(|| {
                let on_logout = snapshot.clone();
                RefreshMonitor::new(manager, move || on_logout.dispatch(AuthAction::LoggedOut))
                    .on_refresh(|token| tracing::info!(?token, "Session refreshed"))
                    .start()
            });

            move || drop(handle)
        });
    }

    let context = AuthContext {
        manager: Rc::clone(&manager),
        snapshot,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            { props.children.clone() }
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the signed-in user
#[hook]
pub fn use_current_user() -> Option<User> {
    let auth = use_auth();
    auth.user().cloned()
}
