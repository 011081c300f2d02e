use std::sync::{Mutex, PoisonError};

use storage::IdentityStore;
use syllabus_core::model::{User, UserDraft, UserId};

use crate::error::IdentityError;

/// Owns the active user for the running app.
///
/// The session lives in memory; the key-value mirror is written on login,
/// removed on logout and read once by `restore`.
pub struct IdentityService {
    store: IdentityStore,
    current: Mutex<Option<User>>,
}

impl IdentityService {
    #[must_use]
    pub fn new(store: IdentityStore) -> Self {
        Self {
            store,
            current: Mutex::new(None),
        }
    }

    fn set_current(&self, user: Option<User>) -> Option<User> {
        let mut guard = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, user)
    }

    /// Load the persisted user into the session.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Storage` if the record cannot be read or
    /// decoded. A malformed record is not discarded.
    pub async fn restore(&self) -> Result<Option<User>, IdentityError> {
        let user = self.store.load().await?;
        if let Some(user) = &user {
            tracing::info!(user = %user.id, role = %user.role, "restored session");
        }
        self.set_current(user.clone());
        Ok(user)
    }

    /// Validate the login form, start a session and mirror it to storage.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::User` if the form is invalid. Storage failures
    /// are logged and do not fail the login.
    pub async fn login(&self, draft: UserDraft) -> Result<User, IdentityError> {
        let user = draft.into_user(UserId::generate())?;
        self.set_current(Some(user.clone()));
        if let Err(err) = self.store.save(&user).await {
            tracing::warn!(error = %err, "failed to persist identity");
        }
        tracing::info!(user = %user.id, role = %user.role, "logged in");
        Ok(user)
    }

    /// End the session and drop the persisted record.
    ///
    /// Returns the user that was logged in, if any.
    pub async fn logout(&self) -> Option<User> {
        let previous = self.set_current(None);
        if let Err(err) = self.store.clear().await {
            tracing::warn!(error = %err, "failed to clear persisted identity");
        }
        if let Some(user) = &previous {
            tracing::info!(user = %user.id, "logged out");
        }
        previous
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
