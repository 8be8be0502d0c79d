//! The session context that replaces the original app's global auth state:
//! one owner for the bearer token, initialized from the local store at
//! startup and cleared on 401 or logout.

use std::sync::{Arc, RwLock};

use tracing::warn;

use storage::repository::AuthTokenStore;

use crate::api::AuthGateway;
use crate::error::{ApiError, AuthError};

#[derive(Clone)]
pub struct AuthSession {
    token: Arc<RwLock<Option<String>>>,
    store: Arc<dyn AuthTokenStore>,
}

impl AuthSession {
    /// Create the session by reading the persisted token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the local store cannot be read.
    pub async fn restore(store: Arc<dyn AuthTokenStore>) -> Result<Self, AuthError> {
        let token = store.load_token().await?;
        Ok(Self {
            token: Arc::new(RwLock::new(token)),
            store,
        })
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Adopt a freshly issued token and persist it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if persisting fails; the in-memory token
    /// is still set so the running session keeps working.
    pub async fn adopt_token(&self, token: String) -> Result<(), AuthError> {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.clone());
        }
        self.store.save_token(&token).await?;
        Ok(())
    }

    /// Drop the token from memory and the local store. Used on logout and by
    /// the HTTP boundary when the backend answers 401.
    pub async fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
        if let Err(err) = self.store.clear_token().await {
            warn!(error = %err, "failed to clear persisted auth token");
        }
    }
}

/// Credential exchange on top of the session context.
pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    session: AuthSession,
}

impl AuthService {
    #[must_use]
    pub fn new(gateway: Arc<dyn AuthGateway>, session: AuthSession) -> Self {
        Self { gateway, session }
    }

    #[must_use]
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Exchange credentials for a token and persist it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api(ApiError::Unauthorized)` for rejected
    /// credentials, other variants for transport or storage failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::Api(ApiError::Unauthorized));
        }
        let token = self.gateway.login(email.trim(), password).await?;
        self.session.adopt_token(token).await
    }

    pub async fn logout(&self) {
        self.session.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use storage::repository::InMemoryStore;

    struct FixedTokenGateway;

    #[async_trait]
    impl AuthGateway for FixedTokenGateway {
        async fn login(&self, email: &str, _password: &str) -> Result<String, ApiError> {
            if email == "student@example.com" {
                Ok("token-123".to_string())
            } else {
                Err(ApiError::Unauthorized)
            }
        }
    }

    #[tokio::test]
    async fn restore_picks_up_persisted_token() {
        let store = Arc::new(InMemoryStore::new());
        store.save_token("persisted").await.unwrap();

        let session = AuthSession::restore(store).await.unwrap();
        assert_eq!(session.token(), Some("persisted".to_string()));
    }

    #[tokio::test]
    async fn login_persists_and_logout_clears() {
        let store = Arc::new(InMemoryStore::new());
        let session = AuthSession::restore(store.clone()).await.unwrap();
        let auth = AuthService::new(Arc::new(FixedTokenGateway), session.clone());

        auth.login("student@example.com", "pw").await.unwrap();
        assert!(session.is_authenticated());
        assert_eq!(store.load_token().await.unwrap(), Some("token-123".into()));

        auth.logout().await;
        assert!(!session.is_authenticated());
        assert_eq!(store.load_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn rejected_credentials_leave_session_signed_out() {
        let store = Arc::new(InMemoryStore::new());
        let session = AuthSession::restore(store).await.unwrap();
        let auth = AuthService::new(Arc::new(FixedTokenGateway), session.clone());

        let err = auth.login("wrong@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::Api(ApiError::Unauthorized)));
        assert!(!session.is_authenticated());
    }
}
