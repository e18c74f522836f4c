//! The signed-in account, persisted under `logged_in_user`.
//!
//! At most one session exists per store. It is restored when the system starts and is
//! what gates the restaurant-side operations.

use crate::model::{Account, AccountKey, Role};
use actor_store::{load_value, save_value, KeyValueStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::info;

/// Storage key of the persisted session.
pub const SESSION_KEY: &str = "logged_in_user";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub key: AccountKey,
    pub display_name: String,
    /// Label stamped on the restaurant's dishes; `None` for customers.
    pub restaurant_label: Option<String>,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    fn of(account: &Account, signed_in_at: DateTime<Utc>) -> Self {
        Self {
            key: account.key(),
            display_name: account.display_name(),
            restaurant_label: account.restaurant_label(),
            signed_in_at,
        }
    }

    pub fn role(&self) -> Role {
        self.key.role
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Not signed in")]
    NotSignedIn,

    #[error("Signed in with the wrong role, {expected} required")]
    WrongRole { expected: Role },

    #[error("Session storage error: {0}")]
    Storage(String),
}

/// Current session plus its persisted copy.
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Loads whatever session `store` holds. A corrupted record counts as signed out.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let current = load_value::<Session>(store.as_ref(), SESSION_KEY);
        if let Some(session) = &current {
            info!(key = %session.key, "Session restored");
        }
        Self {
            store,
            current: RwLock::new(current),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn sign_in(&self, account: &Account) -> Result<Session, SessionError> {
        let session = Session::of(account, Utc::now());
        self.persist(session.clone())?;
        info!(key = %session.key, "Signed in");
        Ok(session)
    }

    pub fn sign_out(&self) -> Result<(), SessionError> {
        self.store
            .remove(SESSION_KEY)
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
        info!("Signed out");
        Ok(())
    }

    /// Re-reads names and labels from `account` if it is the signed-in one.
    pub fn refresh(&self, account: &Account) -> Result<(), SessionError> {
        match self.current() {
            Some(session) if session.key == account.key() => {
                self.persist(Session::of(account, session.signed_in_at))
            }
            _ => Ok(()),
        }
    }

    /// The current session, provided it belongs to a `role` account.
    pub fn require_role(&self, role: Role) -> Result<Session, SessionError> {
        let session = self.current().ok_or(SessionError::NotSignedIn)?;
        if session.role() != role {
            return Err(SessionError::WrongRole { expected: role });
        }
        Ok(session)
    }

    fn persist(&self, session: Session) -> Result<(), SessionError> {
        save_value(self.store.as_ref(), SESSION_KEY, &session)
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Profile;
    use actor_store::MemoryStore;

    fn chef() -> Account {
        Account {
            email: "chef@x.com".into(),
            password_hash: "hash".into(),
            phone: String::new(),
            profile: Profile::Restaurant {
                owner_name: "Ravi".into(),
                restaurant_name: "Spice Route".into(),
            },
            registered_at: Utc::now(),
        }
    }

    #[test]
    fn test_session_survives_restore() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let session = SessionStore::restore(store.clone()).sign_in(&chef()).unwrap();
        assert_eq!(session.restaurant_label.as_deref(), Some("Spice Route"));

        let restored = SessionStore::restore(store.clone());
        assert_eq!(restored.current(), Some(session));

        restored.sign_out().unwrap();
        assert!(SessionStore::restore(store).current().is_none());
    }

    #[test]
    fn test_role_gate() {
        let sessions = SessionStore::restore(Arc::new(MemoryStore::new()));
        assert_eq!(
            sessions.require_role(Role::Restaurant),
            Err(SessionError::NotSignedIn)
        );
        sessions.sign_in(&chef()).unwrap();
        assert!(sessions.require_role(Role::Restaurant).is_ok());
        assert_eq!(
            sessions.require_role(Role::Customer),
            Err(SessionError::WrongRole {
                expected: Role::Customer
            })
        );
    }

    #[test]
    fn test_refresh_only_touches_own_session() {
        let sessions = SessionStore::restore(Arc::new(MemoryStore::new()));
        let before = sessions.sign_in(&chef()).unwrap();

        let mut other = chef();
        other.email = "other@x.com".into();
        sessions.refresh(&other).unwrap();
        assert_eq!(sessions.current(), Some(before.clone()));

        let mut renamed = chef();
        renamed.profile = Profile::Restaurant {
            owner_name: "Ravi".into(),
            restaurant_name: "Route 66".into(),
        };
        sessions.refresh(&renamed).unwrap();
        let after = sessions.current().unwrap();
        assert_eq!(after.restaurant_label.as_deref(), Some("Route 66"));
        assert_eq!(after.signed_in_at, before.signed_in_at);
    }
}
