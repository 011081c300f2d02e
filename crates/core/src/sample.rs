//! Built-in sample catalog loaded at startup.

use chrono::{DateTime, Utc};

use crate::error::Error;
use crate::model::{Completion, Course, CourseDraft, CourseId, Topic, TopicId};
use crate::time::midnight_utc;

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    midnight_utc(year, month, day).unwrap_or_default()
}

fn done_on(year: i32, month: u32, day: u32) -> Completion {
    Completion::Complete {
        at: Some(date(year, month, day)),
    }
}

fn fall_2024(name: &str, code: &str, instructor: &str) -> CourseDraft {
    CourseDraft {
        name: name.to_owned(),
        code: code.to_owned(),
        semester: "Fall 2024".to_owned(),
        instructor: instructor.to_owned(),
        total_weeks: 16,
        start_date: date(2024, 8, 26),
        end_date: date(2024, 12, 15),
    }
}

/// The two Fall 2024 sample courses.
///
/// # Errors
///
/// Returns `Error` only if the built-in data violates a model invariant.
pub fn sample_courses() -> Result<Vec<Course>, Error> {
    let algorithms = Course::from_persisted(
        CourseId::new(1),
        fall_2024("Data Structures and Algorithms", "CS201", "Dr. Sarah Johnson"),
        vec![
            Topic::from_persisted(
                TopicId::new(1),
                "Introduction to Data Structures",
                "Basic concepts and terminology",
                done_on(2024, 9, 2),
                3.0,
                Some(3.0),
                1,
            )?,
            Topic::from_persisted(
                TopicId::new(2),
                "Arrays and Linked Lists",
                "Implementation and operations",
                done_on(2024, 9, 9),
                4.0,
                Some(5.0),
                2,
            )?,
            Topic::from_persisted(
                TopicId::new(3),
                "Stacks and Queues",
                "LIFO and FIFO data structures",
                Completion::Incomplete,
                4.0,
                None,
                3,
            )?,
            Topic::from_persisted(
                TopicId::new(4),
                "Trees and Binary Search Trees",
                "Hierarchical data structures",
                Completion::Incomplete,
                6.0,
                None,
                4,
            )?,
        ],
    )?;

    let databases = Course::from_persisted(
        CourseId::new(2),
        fall_2024("Database Management Systems", "CS301", "Prof. Michael Chen"),
        vec![
            Topic::from_persisted(
                TopicId::new(5),
                "Introduction to Databases",
                "Database concepts and models",
                done_on(2024, 9, 1),
                3.0,
                Some(3.0),
                1,
            )?,
            Topic::from_persisted(
                TopicId::new(6),
                "Relational Model",
                "Tables, keys, and relationships",
                Completion::Incomplete,
                4.0,
                None,
                2,
            )?,
        ],
    )?;

    Ok(vec![algorithms, databases])
}
