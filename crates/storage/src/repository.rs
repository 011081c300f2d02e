use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use syllabus_core::model::{Course, CourseId, TopicId};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the course catalog.
///
/// Courses are listed in creation order. Ids are allocated by the repository;
/// validation happens in the domain before anything is stored.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Reserve the id for a new course.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository is unavailable.
    async fn next_course_id(&self) -> Result<CourseId, StorageError>;

    /// Reserve the id for a new topic. Topic ids are unique across courses.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository is unavailable.
    async fn next_topic_id(&self) -> Result<TopicId, StorageError>;

    /// Persist or replace a course together with its topics.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the course cannot be stored.
    async fn upsert_course(&self, course: &Course) -> Result<(), StorageError>;

    /// Fetch a course by ID. Returns `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository is unavailable.
    async fn get_course(&self, id: CourseId) -> Result<Option<Course>, StorageError>;

    /// List all courses in creation order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository is unavailable.
    async fn list_courses(&self) -> Result<Vec<Course>, StorageError>;
}

/// Flat string key-value store for small local records.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Default)]
struct Catalog {
    courses: BTreeMap<CourseId, Course>,
    next_course: u64,
    next_topic: u64,
}

impl Catalog {
    fn bump_counters(&mut self, course: &Course) {
        self.next_course = self.next_course.max(course.id().value());
        let max_topic = course
            .topics()
            .iter()
            .map(|topic| topic.id().value())
            .max()
            .unwrap_or(0);
        self.next_topic = self.next_topic.max(max_topic);
    }
}

/// Simple in-memory repository implementation.
///
/// Course data only ever lives here; the app never writes courses to disk.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    catalog: Arc<Mutex<Catalog>>,
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for InMemoryRepository {
    async fn next_course_id(&self) -> Result<CourseId, StorageError> {
        let mut guard = self
            .catalog
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.next_course += 1;
        Ok(CourseId::new(guard.next_course))
    }

    async fn next_topic_id(&self) -> Result<TopicId, StorageError> {
        let mut guard = self
            .catalog
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.next_topic += 1;
        Ok(TopicId::new(guard.next_topic))
    }

    async fn upsert_course(&self, course: &Course) -> Result<(), StorageError> {
        let mut guard = self
            .catalog
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.bump_counters(course);
        guard.courses.insert(course.id(), course.clone());
        Ok(())
    }

    async fn get_course(&self, id: CourseId) -> Result<Option<Course>, StorageError> {
        let guard = self
            .catalog
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.courses.get(&id).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        let guard = self
            .catalog
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.courses.values().cloned().collect())
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub courses: Arc<dyn CourseRepository>,
    pub values: Arc<dyn KeyValueStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let courses: Arc<dyn CourseRepository> = Arc::new(repo.clone());
        let values: Arc<dyn KeyValueStore> = Arc::new(repo);
        Self { courses, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabus_core::model::{CourseDraft, TopicDraft};
    use syllabus_core::sample::sample_courses;
    use syllabus_core::time::{fixed_now, midnight_utc};

    fn build_course(id: CourseId) -> Course {
        Course::new(
            id,
            CourseDraft {
                name: format!("Course {id}"),
                code: format!("C{id}"),
                semester: "Fall 2024".into(),
                instructor: "Staff".into(),
                total_weeks: 8,
                start_date: midnight_utc(2024, 9, 2).unwrap(),
                end_date: midnight_utc(2024, 10, 28).unwrap(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn allocates_ids_after_seeded_courses() {
        let repo = InMemoryRepository::new();
        for course in sample_courses().unwrap() {
            repo.upsert_course(&course).await.unwrap();
        }

        assert_eq!(repo.next_course_id().await.unwrap(), CourseId::new(3));
        assert_eq!(repo.next_topic_id().await.unwrap(), TopicId::new(7));
        assert_eq!(repo.next_topic_id().await.unwrap(), TopicId::new(8));
    }

    #[tokio::test]
    async fn lists_courses_in_creation_order() {
        let repo = InMemoryRepository::new();
        for _ in 0..3 {
            let id = repo.next_course_id().await.unwrap();
            repo.upsert_course(&build_course(id)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_courses()
            .await
            .unwrap()
            .iter()
            .map(|course| course.name().to_owned())
            .collect();
        assert_eq!(names, ["Course 1", "Course 2", "Course 3"]);
    }

    #[tokio::test]
    async fn round_trips_course_with_topic_state() {
        let repo = InMemoryRepository::new();
        let id = repo.next_course_id().await.unwrap();
        let mut course = build_course(id);
        let topic_id = repo.next_topic_id().await.unwrap();
        course
            .add_topic(topic_id, TopicDraft::new("Intro", "", 2.0, 1))
            .unwrap();
        course.toggle_topic(topic_id, fixed_now());
        repo.upsert_course(&course).await.unwrap();

        let fetched = repo.get_course(id).await.unwrap().unwrap();
        assert_eq!(fetched, course);
        assert!(repo.get_course(CourseId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn key_value_set_get_remove() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get("k").await.unwrap(), None);

        repo.set("k", "v1").await.unwrap();
        repo.set("k", "v2").await.unwrap();
        assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("v2"));

        repo.remove("k").await.unwrap();
        repo.remove("k").await.unwrap();
        assert_eq!(repo.get("k").await.unwrap(), None);
    }
}
