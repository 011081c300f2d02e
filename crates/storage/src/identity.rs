//! The persisted identity record: the active user under a single key.

use std::sync::Arc;

use syllabus_core::model::User;

use crate::repository::{KeyValueStore, StorageError};

/// Key the identity record lives under.
pub const IDENTITY_KEY: &str = "syllabusTrackerUser";

/// Typed access to the identity record stored as JSON.
#[derive(Clone)]
pub struct IdentityStore {
    values: Arc<dyn KeyValueStore>,
}

impl IdentityStore {
    #[must_use]
    pub fn new(values: Arc<dyn KeyValueStore>) -> Self {
        Self { values }
    }

    /// Read the stored user, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored record is not a
    /// valid user, or other storage errors.
    pub async fn load(&self) -> Result<Option<User>, StorageError> {
        let Some(raw) = self.values.get(IDENTITY_KEY).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    /// Write the user record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or writing fails.
    pub async fn save(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.values.set(IDENTITY_KEY, &raw).await
    }

    /// Remove the user record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.values.remove(IDENTITY_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;
    use syllabus_core::model::{UserId, UserRole};

    fn user() -> User {
        User {
            id: UserId::new("abc"),
            name: "Ravi".into(),
            email: "ravi@uni.edu".into(),
            role: UserRole::Student,
            department: Some("Computer Science".into()),
            course: None,
        }
    }

    #[tokio::test]
    async fn save_load_clear() {
        let repo = Arc::new(InMemoryRepository::new());
        let store = IdentityStore::new(repo.clone());
        assert_eq!(store.load().await.unwrap(), None);

        store.save(&user()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(user()));

        let raw = repo.get(IDENTITY_KEY).await.unwrap().unwrap();
        assert!(raw.contains(r#""role":"student""#), "unexpected record {raw}");
        assert!(!raw.contains("course"), "absent fields must be omitted: {raw}");

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_record_is_an_error() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.set(IDENTITY_KEY, "{not json").await.unwrap();

        let store = IdentityStore::new(repo);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
