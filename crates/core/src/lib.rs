//! Holocron core: mock session auth, silent refresh and catalog filtering

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod refresh;
pub mod runtime;
pub mod session;
pub mod token;

pub use auth::{AuthManager, AuthState, LoginResponse, User};
pub use catalog::{Accent, Character, Film, LoadState, Page, PageCursor, Planet, Species};
pub use config::{AppConfig, AuthConfig, CatalogConfig, LogConfig, StorageKeys};
pub use error::{AuthError, AuthResult, ConfigError, StorageError};
pub use filter::{
    FilterOption, FilterOptionSet, FilterSelection, RelatedResolver, RelationKind, ResultSummary,
    apply_filters, derive_filter_options, is_filtering,
};
pub use refresh::{ForcedLogout, RefreshHandle, RefreshMonitor, TickOutcome};
pub use runtime::{Clock, PlatformTimer, SystemClock, Timer};
pub use session::{KeyValueStorage, MemoryStorage, Session, SessionStore};
pub use token::{Claims, Token};
