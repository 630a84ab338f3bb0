//! Opaque credential handle held by the configuration registry.
//!
//! The registry stores and exposes credentials; it never constructs them.
//! Embedders supply either a static token or a resolver closure that is
//! invoked at most once, with the result memoized for the process lifetime.

use std::fmt::Debug;
use std::sync::Arc;

use once_cell::sync::OnceCell;

/// Closure producing the credential token on first use.
pub type CredentialsResolverFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Externally supplied credential material.
#[derive(Clone)]
pub enum CredentialsProvider {
    /// Token known up front.
    Static(String),
    /// Token produced lazily by a resolver, cached after the first call.
    Dynamic {
        resolver_fn: CredentialsResolverFn,
        token: Arc<OnceCell<String>>,
    },
}

impl CredentialsProvider {
    pub fn new_from_static_token(token: &str) -> Self {
        Self::Static(token.to_string())
    }

    pub fn new_from_resolver(resolver_fn: CredentialsResolverFn) -> Self {
        Self::Dynamic {
            resolver_fn,
            token: Arc::new(OnceCell::new()),
        }
    }

    /// Returns the credential token, invoking the resolver on first use.
    pub fn token(&self) -> &str {
        match self {
            Self::Static(token) => token,
            Self::Dynamic { resolver_fn, token } => token.get_or_init(|| (resolver_fn)()),
        }
    }
}

impl Debug for CredentialsProvider {
    /// Never prints token material.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CredentialsProvider")
    }
}
