//! Bearer-token storage for [`super::ApiClient`].

use parking_lot::RwLock;

/// Source of the bearer token attached to every request.
///
/// The client calls [`CredentialProvider::clear`] when the server rejects the
/// token, so a provider backed by persistent storage can forget it.
pub trait CredentialProvider: Send + Sync {
    /// Current token, if any.
    fn token(&self) -> Option<String>;

    /// Drop the stored token.
    fn clear(&self);
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct InMemoryCredentials {
    token: RwLock<Option<String>>,
}

impl InMemoryCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Store without a token.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Replace the stored token (e.g. after a login).
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }
}

impl CredentialProvider for InMemoryCredentials {
    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn clear(&self) {
        *self.token.write() = None;
    }
}
