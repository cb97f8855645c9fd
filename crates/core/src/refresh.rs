//! Silent session refresh
//!
//! [`RefreshMonitor::start`] evaluates the stored access token immediately
//! and then once per check interval. Tokens close to expiry are refreshed,
//! anything unrecoverable forces a logout. The returned [`RefreshHandle`]
//! is the disposer: once disposed no further evaluation runs and no
//! callback fires.

use crate::auth::AuthManager;
use crate::error::AuthError;
use crate::runtime::spawn_local;
use crate::token::Token;
use futures::future::{AbortHandle, abortable};
use std::cell::Cell;
use std::rc::Rc;

/// Why the monitor ended the session
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForcedLogout {
    /// The stored access token could not be decoded
    Malformed,
    /// The access token had already expired
    Expired,
    /// The refresh attempt failed
    RefreshFailed(AuthError),
}

/// Result of a single evaluation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing stored, nothing to do
    NoSession,
    /// Token is outside the refresh window
    Healthy { remaining_ms: i64 },
    Refreshed(Token),
    LoggedOut(ForcedLogout),
    /// Another evaluation was still running
    Skipped,
}

type RefreshCallback = Rc<dyn Fn(&Token)>;
type LogoutCallback = Rc<dyn Fn()>;

/// Periodic access token check
pub struct RefreshMonitor {
    manager: Rc<AuthManager>,
    on_refresh: Option<RefreshCallback>,
    on_logout: LogoutCallback,
    in_flight: Cell<bool>,
}

impl RefreshMonitor {
    /// `on_logout` runs after the monitor has forced a logout
    pub fn new(manager: Rc<AuthManager>, on_logout: impl Fn() + 'static) -> Self {
        Self {
            manager,
            on_refresh: None,
            on_logout: Rc::new(on_logout),
            in_flight: Cell::new(false),
        }
    }

    /// Called with the new access token after a silent refresh
    #[must_use]
    pub fn on_refresh(mut self, callback: impl Fn(&Token) + 'static) -> Self {
        self.on_refresh = Some(Rc::new(callback));
        self
    }

    /// Run one evaluation; overlapping calls return [`TickOutcome::Skipped`]
    pub async fn tick(&self) -> TickOutcome {
        if self.in_flight.replace(true) {
            tracing::debug!("Session check already running");
            return TickOutcome::Skipped;
        }
        let _guard = InFlight(&self.in_flight);
        self.evaluate().await
    }

    async fn evaluate(&self) -> TickOutcome {
        let Some(token) = self.manager.store().access_token() else {
            return TickOutcome::NoSession;
        };
        let Some(claims) = token.claims() else {
            return self.force_logout(ForcedLogout::Malformed);
        };
        // No expiry claim: treat like an expired token.
        let remaining_ms = claims
            .remaining_ms(self.manager.now_ms())
            .unwrap_or(0);

        if remaining_ms <= 0 {
            return self.force_logout(ForcedLogout::Expired);
        }

        if remaining_ms >= self.manager.config().refresh_threshold_ms() {
            return TickOutcome::Healthy { remaining_ms };
        }

        match self.manager.refresh().await {
            Ok(token) => {
                if let Some(on_refresh) = &self.on_refresh {
                    on_refresh(&token);
                }
                TickOutcome::Refreshed(token)
            }
            Err(err) => self.force_logout(ForcedLogout::RefreshFailed(err)),
        }
    }

    fn force_logout(&self, reason: ForcedLogout) -> TickOutcome {
        tracing::warn!(?reason, "Ending session");
        self.manager.logout();
        (self.on_logout)();
        TickOutcome::LoggedOut(reason)
    }

    /// Start the check loop on the current event loop
    #[must_use = "dropping the handle stops the refresh loop"]
    pub fn start(self) -> RefreshHandle {
        let stopped = Rc::new(Cell::new(false));
        let monitor = Rc::new(self);
        let timer = monitor.manager.timer();
        let interval = monitor.manager.config().check_interval();

        let running = Rc::clone(&stopped);
        let (task, abort) = abortable(async move {
            while !running.get() {
                let outcome = monitor.tick().await;
                tracing::debug!(?outcome, "Session check");
                timer.sleep(interval).await;
            }
        });

        spawn_local(async move {
            if task.await.is_err() {
                tracing::debug!("Session refresh loop stopped");
            }
        });

        RefreshHandle { abort, stopped }
    }
}

struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Disposer for a running refresh loop
///
/// Disposing is idempotent and also happens on drop.
#[derive(Debug)]
pub struct RefreshHandle {
    abort: AbortHandle,
    stopped: Rc<Cell<bool>>,
}

impl RefreshHandle {
    pub fn dispose(&self) {
        self.stopped.set(true);
        self.abort.abort();
    }

    pub fn is_disposed(&self) -> bool {
        self.stopped.get()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}
