use std::sync::Arc;

use storage::repository::CourseRepository;
use syllabus_core::access::{Capability, PermissionMatrix};
use syllabus_core::alerts::{DelayAlert, ScheduleStatus};
use syllabus_core::model::{Course, CourseDraft, CourseId, TopicDraft, TopicId, User};
use syllabus_core::{Progress, calculate_progress};

use crate::Clock;
use crate::error::CourseServiceError;

/// A course paired with its progress as of the service clock.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseOverview {
    pub course: Course,
    pub progress: Progress,
}

impl CourseOverview {
    #[must_use]
    pub fn status(&self) -> ScheduleStatus {
        ScheduleStatus::from_progress(&self.progress)
    }

    /// Delay alert for the course, `None` while it is on track.
    #[must_use]
    pub fn alert(&self) -> Option<DelayAlert> {
        DelayAlert::for_course(&self.course, &self.progress)
    }
}

/// Orchestrates course and topic mutations against the catalog.
///
/// Every mutation is checked against the actor's role first.
#[derive(Clone)]
pub struct CourseService {
    clock: Clock,
    courses: Arc<dyn CourseRepository>,
}

impl CourseService {
    #[must_use]
    pub fn new(clock: Clock, courses: Arc<dyn CourseRepository>) -> Self {
        Self { clock, courses }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    fn authorize(actor: &User, capability: Capability) -> Result<(), CourseServiceError> {
        if PermissionMatrix::can_perform(actor.role, capability) {
            Ok(())
        } else {
            tracing::warn!(user = %actor.id, ?capability, "refused course mutation");
            Err(CourseServiceError::Forbidden {
                role: actor.role,
                capability,
            })
        }
    }

    /// List courses in creation order.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Storage` if repository access fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>, CourseServiceError> {
        Ok(self.courses.list_courses().await?)
    }

    /// Fetch a course by ID.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Storage` if repository access fails.
    pub async fn get_course(&self, id: CourseId) -> Result<Option<Course>, CourseServiceError> {
        Ok(self.courses.get_course(id).await?)
    }

    /// Create a course with an empty topic list.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Forbidden` for students,
    /// `CourseServiceError::Course` for validation failures, or
    /// `CourseServiceError::Storage` if persistence fails.
    pub async fn add_course(
        &self,
        actor: &User,
        draft: CourseDraft,
    ) -> Result<CourseId, CourseServiceError> {
        Self::authorize(actor, Capability::AddCourse)?;
        let id = self.courses.next_course_id().await?;
        let course = Course::new(id, draft)?;
        self.courses.upsert_course(&course).await?;
        tracing::info!(course_id = %id, code = course.code(), "course added");
        Ok(id)
    }

    /// Append a topic to a course.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Forbidden` for students,
    /// `CourseServiceError::NotFound` if the course does not exist,
    /// `CourseServiceError::Course` for validation failures, or
    /// `CourseServiceError::Storage` if persistence fails.
    pub async fn add_topic(
        &self,
        actor: &User,
        course_id: CourseId,
        draft: TopicDraft,
    ) -> Result<TopicId, CourseServiceError> {
        Self::authorize(actor, Capability::AddTopic)?;
        let mut course = self
            .courses
            .get_course(course_id)
            .await?
            .ok_or(CourseServiceError::NotFound(course_id))?;
        let topic_id = self.courses.next_topic_id().await?;
        course.add_topic(topic_id, draft)?;
        self.courses.upsert_course(&course).await?;
        tracing::info!(%course_id, %topic_id, "topic added");
        Ok(topic_id)
    }

    /// Flip a topic's completion.
    ///
    /// Returns the new completion state, or `Ok(None)` when the course or topic
    /// is unknown. Unknown ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Forbidden` for students or
    /// `CourseServiceError::Storage` if persistence fails.
    pub async fn toggle_topic(
        &self,
        actor: &User,
        course_id: CourseId,
        topic_id: TopicId,
    ) -> Result<Option<bool>, CourseServiceError> {
        Self::authorize(actor, Capability::ToggleTopic)?;
        let Some(mut course) = self.courses.get_course(course_id).await? else {
            tracing::debug!(%course_id, "toggle on unknown course ignored");
            return Ok(None);
        };
        let Some(completed) = course.toggle_topic(topic_id, self.clock.now()) else {
            tracing::debug!(%course_id, %topic_id, "toggle on unknown topic ignored");
            return Ok(None);
        };
        self.courses.upsert_course(&course).await?;
        tracing::debug!(%course_id, %topic_id, completed, "topic toggled");
        Ok(Some(completed))
    }

    /// Progress for one course as of now.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Storage` if repository access fails.
    pub async fn progress(&self, id: CourseId) -> Result<Option<Progress>, CourseServiceError> {
        let now = self.clock.now();
        let course = self.courses.get_course(id).await?;
        Ok(course.map(|course| calculate_progress(&course, now)))
    }

    /// Every course with its progress, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Storage` if repository access fails.
    pub async fn overview(&self) -> Result<Vec<CourseOverview>, CourseServiceError> {
        let now = self.clock.now();
        let courses = self.courses.list_courses().await?;
        Ok(courses
            .into_iter()
            .map(|course| {
                let progress = calculate_progress(&course, now);
                CourseOverview { course, progress }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;
    use syllabus_core::model::{UserId, UserRole};
    use syllabus_core::time::{fixed_clock, midnight_utc};

    fn user(role: UserRole) -> User {
        User {
            id: UserId::new("u1"),
            name: "Tester".into(),
            email: "tester@uni.edu".into(),
            role,
            department: None,
            course: None,
        }
    }

    fn draft() -> CourseDraft {
        CourseDraft {
            name: "Operating Systems".into(),
            code: "CS350".into(),
            semester: "Fall 2024".into(),
            instructor: "Dr. Lee".into(),
            total_weeks: 16,
            start_date: midnight_utc(2024, 8, 26).unwrap(),
            end_date: midnight_utc(2024, 12, 15).unwrap(),
        }
    }

    fn service() -> CourseService {
        CourseService::new(fixed_clock(), Arc::new(InMemoryRepository::new()))
    }

    #[tokio::test]
    async fn faculty_builds_a_course() {
        let service = service();
        let faculty = user(UserRole::Faculty);
        let course_id = service.add_course(&faculty, draft()).await.unwrap();
        let first = service
            .add_topic(&faculty, course_id, TopicDraft::new("Processes", "", 3.0, 1))
            .await
            .unwrap();
        let second = service
            .add_topic(&faculty, course_id, TopicDraft::new("Threads", "", 3.0, 2))
            .await
            .unwrap();
        assert_ne!(first, second);

        assert_eq!(
            service.toggle_topic(&faculty, course_id, first).await.unwrap(),
            Some(true)
        );

        let course = service.get_course(course_id).await.unwrap().unwrap();
        let titles: Vec<&str> = course.topics().iter().map(|t| t.title()).collect();
        assert_eq!(titles, ["Processes", "Threads"]);
        assert_eq!(
            course.topic(first).unwrap().completed_at(),
            Some(fixed_clock().now())
        );

        let progress = service.progress(course_id).await.unwrap().unwrap();
        assert_eq!(progress.completed_topics, 1);
        assert_eq!(progress.total_topics, 2);
        assert_eq!(progress.current_week, 10);
    }

    #[tokio::test]
    async fn students_are_refused_every_mutation() {
        let service = service();
        let faculty = user(UserRole::Faculty);
        let student = user(UserRole::Student);
        let course_id = service.add_course(&faculty, draft()).await.unwrap();
        let topic_id = service
            .add_topic(&faculty, course_id, TopicDraft::new("Processes", "", 3.0, 1))
            .await
            .unwrap();

        let err = service.add_course(&student, draft()).await.unwrap_err();
        assert!(matches!(
            err,
            CourseServiceError::Forbidden {
                capability: Capability::AddCourse,
                ..
            }
        ));
        assert_eq!(err.to_string(), "student users may not add courses");

        let err = service
            .add_topic(&student, course_id, TopicDraft::new("X", "", 1.0, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, CourseServiceError::Forbidden { .. }));

        let err = service
            .toggle_topic(&student, course_id, topic_id)
            .await
            .unwrap_err();
        assert!(matches!(err, CourseServiceError::Forbidden { .. }));

        let course = service.get_course(course_id).await.unwrap().unwrap();
        assert!(!course.topic(topic_id).unwrap().is_completed());
        assert_eq!(service.list_courses().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_ids_are_ignored_on_toggle() {
        let service = service();
        let faculty = user(UserRole::Faculty);
        let course_id = service.add_course(&faculty, draft()).await.unwrap();

        assert_eq!(
            service
                .toggle_topic(&faculty, course_id, TopicId::new(404))
                .await
                .unwrap(),
            None
        );
        assert_eq!(
            service
                .toggle_topic(&faculty, CourseId::new(404), TopicId::new(1))
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn add_topic_requires_an_existing_course_and_valid_week() {
        let service = service();
        let faculty = user(UserRole::Faculty);
        let err = service
            .add_topic(&faculty, CourseId::new(9), TopicDraft::new("X", "", 1.0, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, CourseServiceError::NotFound(id) if id == CourseId::new(9)));

        let course_id = service.add_course(&faculty, draft()).await.unwrap();
        let err = service
            .add_topic(&faculty, course_id, TopicDraft::new("X", "", 1.0, 17))
            .await
            .unwrap_err();
        assert!(matches!(err, CourseServiceError::Course(_)));
        let course = service.get_course(course_id).await.unwrap().unwrap();
        assert!(course.topics().is_empty());
    }

    #[tokio::test]
    async fn invalid_course_is_not_stored() {
        let service = service();
        let mut bad = draft();
        bad.name = "   ".into();
        let err = service
            .add_course(&user(UserRole::Faculty), bad)
            .await
            .unwrap_err();
        assert!(matches!(err, CourseServiceError::Course(_)));
        assert!(service.list_courses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn overview_flags_courses_that_fall_behind() {
        let service = service();
        let faculty = user(UserRole::Faculty);
        let course_id = service.add_course(&faculty, draft()).await.unwrap();
        for week in 1..=4 {
            service
                .add_topic(
                    &faculty,
                    course_id,
                    TopicDraft::new(format!("Topic {week}"), "", 2.0, week),
                )
                .await
                .unwrap();
        }

        let overview = service.overview().await.unwrap();
        assert_eq!(overview.len(), 1);
        let entry = &overview[0];
        assert_eq!(entry.progress.expected_completed, 2);
        assert_eq!(entry.progress.weeks_behind, 2);
        assert_eq!(entry.status(), ScheduleStatus::Behind);
        let alert = entry.alert().expect("behind courses get an alert");
        assert_eq!(alert.behind_label(), "2 weeks behind");
    }
}
