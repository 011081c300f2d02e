use std::sync::Arc;

use storage::IdentityStore;
use storage::repository::{CourseRepository, Storage};
use syllabus_core::sample::sample_courses;

use crate::Clock;
use crate::course_service::CourseService;
use crate::error::AppServicesError;
use crate::identity_service::IdentityService;

/// Assembles app-facing services over one `Storage`.
#[derive(Clone)]
pub struct AppServices {
    course_service: Arc<CourseService>,
    identity: Arc<IdentityService>,
}

impl AppServices {
    /// Build services whose identity record lives in `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or sample seeding
    /// fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        seed_sample_data: bool,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(storage, clock, seed_sample_data).await
    }

    /// Build fully in-memory services.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if sample seeding fails.
    pub async fn in_memory(clock: Clock, seed_sample_data: bool) -> Result<Self, AppServicesError> {
        Self::from_storage(Storage::in_memory(), clock, seed_sample_data).await
    }

    /// Build services over an existing storage bundle.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if sample seeding fails.
    pub async fn from_storage(
        storage: Storage,
        clock: Clock,
        seed_sample_data: bool,
    ) -> Result<Self, AppServicesError> {
        if seed_sample_data {
            seed_sample_courses(storage.courses.as_ref()).await?;
        }

        let course_service = Arc::new(CourseService::new(clock, Arc::clone(&storage.courses)));
        let identity = Arc::new(IdentityService::new(IdentityStore::new(Arc::clone(
            &storage.values,
        ))));

        Ok(Self {
            course_service,
            identity,
        })
    }

    #[must_use]
    pub fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }

    #[must_use]
    pub fn identity(&self) -> Arc<IdentityService> {
        Arc::clone(&self.identity)
    }
}

async fn seed_sample_courses(courses: &dyn CourseRepository) -> Result<(), AppServicesError> {
    let catalog = sample_courses()?;
    let count = catalog.len();
    for course in &catalog {
        courses.upsert_course(course).await?;
    }
    tracing::debug!(count, "seeded sample courses");
    Ok(())
}
