use std::sync::{Arc, Mutex, PoisonError};

use codepulse_core::model::User;
use storage::keys;
use storage::repository::KeyValueStore;

use crate::error::SessionError;

/// Whether someone is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }
}

/// Session gate: restores, records and clears the signed-in user.
#[derive(Clone)]
pub struct SessionService {
    kv: Arc<dyn KeyValueStore>,
    state: Arc<Mutex<SessionState>>,
}

impl SessionService {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            state: Arc::new(Mutex::new(SessionState::Anonymous)),
        }
    }

    /// Rebuild the session from storage.
    ///
    /// Incomplete or corrupted records are wiped and yield
    /// `SessionState::Anonymous`; nothing is reported to the caller.
    pub async fn restore(&self) -> SessionState {
        let state = match self.read_stored_user().await {
            Some(user) => {
                tracing::info!(user_id = %user.id(), "restored session");
                SessionState::Authenticated(user)
            }
            None => {
                if let Err(err) = self
                    .kv
                    .remove_many(&[keys::USER, keys::IS_AUTHENTICATED])
                    .await
                {
                    tracing::warn!(error = %err, "failed to clear stale session keys");
                }
                SessionState::Anonymous
            }
        };
        self.replace(state.clone());
        state
    }

    /// Record `user` as signed in.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the user cannot be serialized or stored.
    pub async fn login(&self, user: User) -> Result<SessionState, SessionError> {
        let json = serde_json::to_string(&user)?;
        self.kv.set(keys::USER, &json).await?;
        self.kv.set(keys::IS_AUTHENTICATED, "true").await?;
        tracing::info!(user_id = %user.id(), "signed in");

        let state = SessionState::Authenticated(user);
        self.replace(state.clone());
        Ok(state)
    }

    /// Sign out and wipe every per-user key.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if storage cannot be cleared. The in-memory
    /// state is reset either way.
    pub async fn logout(&self) -> Result<SessionState, SessionError> {
        self.replace(SessionState::Anonymous);
        self.kv.remove_many(&keys::SESSION_KEYS).await?;
        tracing::info!("signed out");
        Ok(SessionState::Anonymous)
    }

    /// Last known state, without touching storage.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace(&self, state: SessionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    async fn read_stored_user(&self) -> Option<User> {
        let flag = match self.kv.get(keys::IS_AUTHENTICATED).await {
            Ok(flag) => flag,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read session flag");
                return None;
            }
        };
        if flag.as_deref() != Some("true") {
            return None;
        }

        let raw = match self.kv.get(keys::USER).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::warn!("session flag set without a stored user");
                return None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stored user");
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "stored user is corrupted");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codepulse_core::model::UserId;
    use storage::repository::InMemoryStore;

    fn service() -> (SessionService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let kv: Arc<dyn KeyValueStore> = store.clone();
        (SessionService::new(kv), store)
    }

    #[tokio::test]
    async fn empty_store_restores_anonymous() {
        let (session, _) = service();
        assert_eq!(session.restore().await, SessionState::Anonymous);
        assert_eq!(session.current(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn flag_without_user_resets_keys() {
        let (session, store) = service();
        store.set(keys::IS_AUTHENTICATED, "true").await.unwrap();

        assert_eq!(session.restore().await, SessionState::Anonymous);
        assert_eq!(store.get(keys::IS_AUTHENTICATED).await.unwrap(), None);
    }

    #[tokio::test]
    async fn flag_other_than_true_is_not_a_session() {
        let (session, store) = service();
        let user = User::new(UserId::new("1"), "Ada", "ada@example.com", None);
        store
            .set(keys::USER, &serde_json::to_string(&user).unwrap())
            .await
            .unwrap();
        store.set(keys::IS_AUTHENTICATED, "TRUE").await.unwrap();

        assert_eq!(session.restore().await, SessionState::Anonymous);
        assert_eq!(store.get(keys::USER).await.unwrap(), None);
    }

    #[tokio::test]
    async fn login_updates_current_snapshot() {
        let (session, store) = service();
        let user = User::new(UserId::new("42"), "Lin", "lin@example.com", None);

        let state = session.login(user.clone()).await.unwrap();

        assert_eq!(state.user(), Some(&user));
        assert!(session.current().is_authenticated());
        assert_eq!(
            store.get(keys::IS_AUTHENTICATED).await.unwrap().as_deref(),
            Some("true")
        );
    }
}
