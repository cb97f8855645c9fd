//! Authentication module

pub mod context;

pub use context::{
    AuthAction, AuthContext, AuthProvider, AuthProviderProps, AuthSnapshot, use_auth,
    use_current_user,
};
