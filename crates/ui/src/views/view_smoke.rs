use std::sync::Arc;

use storage::repository::{CourseRepository, InMemoryRepository, Storage, StorageError};
use syllabus_core::model::{Course, CourseId, TopicDraft, TopicId, UserRole};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage, test_user};

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_role_picker() {
    let mut harness = setup_view_harness(ViewKind::Home, None).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Get Started"), "missing heading in {html}");
    assert!(html.contains("Faculty Member"), "missing faculty option in {html}");
    assert!(html.contains("Student"), "missing student option in {html}");
    assert!(!html.contains("Welcome back"), "dashboard leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_sample_catalog_for_faculty() {
    let user = test_user(UserRole::Faculty);
    let mut harness = setup_view_harness(ViewKind::Home, Some(user)).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Welcome back, Dr. Sarah Johnson!"), "missing welcome in {html}");
    assert!(html.contains("Manage your courses"), "missing faculty greeting in {html}");
    assert!(html.contains("Data Structures and Algorithms"), "missing course in {html}");
    assert!(html.contains("Database Management Systems"), "missing course in {html}");
    assert!(html.contains("CS201 • Fall 2024"), "missing overview subtitle in {html}");
    assert!(html.contains("Week 10 of 16"), "missing week label in {html}");
    assert!(html.contains("2/4 topics"), "missing topic count in {html}");
    assert!(html.contains("Add Course"), "faculty should see add course in {html}");
    assert!(html.contains("Add Topic"), "faculty should see add topic in {html}");
    assert!(html.contains("Completed: Sep 2, 2024"), "missing completion date in {html}");
    assert!(!html.contains("Detected"), "on-track course must not alert: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_is_read_only_for_students() {
    let user = test_user(UserRole::Student);
    let mut harness = setup_view_harness(ViewKind::Course(2), Some(user)).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Stay updated on your learning progress"), "missing greeting in {html}");
    assert!(html.contains("CS301 • Fall 2024"), "course 2 should be selected in {html}");
    assert!(!html.contains("Add Course"), "students cannot add courses: {html}");
    assert!(!html.contains("Add Topic"), "students cannot add topics: {html}");
    assert!(html.contains("disabled"), "toggles should be disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_delay_alert() {
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Home,
        Some(test_user(UserRole::Faculty)),
        Storage::in_memory(),
        false,
    )
    .await;

    let courses = harness.services.course_service();
    let faculty = test_user(UserRole::Faculty);
    let mut draft = sample_draft();
    draft.name = "Operating Systems".into();
    let course_id = courses.add_course(&faculty, draft).await.unwrap();
    for week in 1..=4 {
        courses
            .add_topic(&faculty, course_id, TopicDraft::new(format!("Unit {week}"), "", 2.0, week))
            .await
            .unwrap();
    }

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Significant Delay Detected"), "missing alert in {html}");
    assert!(html.contains("2 weeks behind"), "missing behind label in {html}");
    assert!(html.contains("Slightly Behind"), "missing overview status in {html}");
    assert!(html.contains("Schedule additional study sessions"), "missing recommendation in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_handles_empty_catalog() {
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Home,
        Some(test_user(UserRole::Faculty)),
        Storage::in_memory(),
        false,
    )
    .await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No courses yet."), "missing empty state in {html}");
    assert!(html.contains("Select a Course"), "missing placeholder in {html}");
}

struct FailingCourseRepo;

#[async_trait::async_trait]
impl CourseRepository for FailingCourseRepo {
    async fn next_course_id(&self) -> Result<CourseId, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn next_topic_id(&self) -> Result<TopicId, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn upsert_course(&self, _course: &Course) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_course(&self, _id: CourseId) -> Result<Option<Course>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_error_state() {
    let storage = Storage {
        courses: Arc::new(FailingCourseRepo),
        values: Arc::new(InMemoryRepository::new()),
    };
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Home,
        Some(test_user(UserRole::Faculty)),
        storage,
        false,
    )
    .await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}

fn sample_draft() -> syllabus_core::model::CourseDraft {
    syllabus_core::model::CourseDraft {
        name: "Course".into(),
        code: "CS350".into(),
        semester: "Fall 2024".into(),
        instructor: "Dr. Lee".into(),
        total_weeks: 16,
        start_date: syllabus_core::time::midnight_utc(2024, 8, 26).unwrap(),
        end_date: syllabus_core::time::midnight_utc(2024, 12, 15).unwrap(),
    }
}
