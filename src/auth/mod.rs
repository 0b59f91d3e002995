//! Authentication and session tracking
//!
//! Credentials are checked against stored user records with the legacy
//! checksum hash. The authenticated identity is an explicit [`Session`]
//! value handed to operations that need a cashier, never ambient state.

mod hash;

pub use hash::weak_hash;

use crate::models::User;
use crate::store::{PosStore, StoreResult};

/// An authenticated identity
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn username(&self) -> &str {
        &self.user.username
    }

    /// Display name recorded as the cashier on transactions
    pub fn cashier_name(&self) -> &str {
        &self.user.name
    }
}

/// Tracks the single active session against the store
pub struct SessionManager {
    store: PosStore,
    session: Option<Session>,
}

impl SessionManager {
    pub fn new(store: PosStore) -> Self {
        Self {
            store,
            session: None,
        }
    }

    /// Verify credentials and open a session.
    ///
    /// Unknown username and wrong password are observably identical
    /// (`Ok(false)`), and a failed attempt leaves any prior session intact.
    pub fn login(&mut self, username: &str, password: &str) -> StoreResult<bool> {
        let candidate = weak_hash(password);
        let users = self.store.users()?;
        match users
            .into_iter()
            .find(|u| u.username == username && u.password_hash == candidate)
        {
            Some(user) => {
                self.store.set_active_username(&user.username)?;
                tracing::info!(username = %user.username, "Login succeeded");
                self.session = Some(Session { user });
                Ok(true)
            }
            None => {
                tracing::warn!(username, "Login failed");
                Ok(false)
            }
        }
    }

    /// Close the session unconditionally; never fails on a missing session.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.session = None;
        self.store.clear_active_username()
    }

    /// Re-open the session persisted by a previous run, if its user record
    /// still exists. A marker pointing at a deleted user yields anonymous;
    /// the user is never re-created.
    pub fn restore_session(&mut self) -> StoreResult<Option<&Session>> {
        if let Some(username) = self.store.active_username()? {
            match self
                .store
                .users()?
                .into_iter()
                .find(|u| u.username == username)
            {
                Some(user) => self.session = Some(Session { user }),
                None => {
                    tracing::warn!(
                        username = %username,
                        "Persisted session references a missing user, staying anonymous"
                    );
                    self.session = None;
                }
            }
        }
        Ok(self.session.as_ref())
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}
