use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{CourseId, TopicId};
use crate::model::topic::{Topic, TopicDraft, TopicError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course name cannot be empty")]
    EmptyName,

    #[error("course code cannot be empty")]
    EmptyCode,

    #[error("total weeks must be > 0")]
    InvalidTotalWeeks,

    #[error("end date must be after start date")]
    InvalidDateRange,

    #[error("week {week} is outside the course length of {total_weeks} weeks")]
    WeekOutOfRange { week: u32, total_weeks: u32 },

    #[error("duplicate topic id {0}")]
    DuplicateTopic(TopicId),

    #[error(transparent)]
    Topic(#[from] TopicError),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Course metadata supplied when a course is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub name: String,
    pub code: String,
    pub semester: String,
    pub instructor: String,
    pub total_weeks: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A course and its syllabus topics.
///
/// Topics keep creation order; they are not sorted by week.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: CourseId,
    name: String,
    code: String,
    semester: String,
    instructor: String,
    total_weeks: u32,
    topics: Vec<Topic>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl Course {
    /// Creates a course with an empty topic list.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if name or code are blank, `total_weeks` is zero,
    /// or the end date is not after the start date.
    pub fn new(id: CourseId, draft: CourseDraft) -> Result<Self, CourseError> {
        let name = draft.name.trim().to_owned();
        if name.is_empty() {
            return Err(CourseError::EmptyName);
        }
        let code = draft.code.trim().to_owned();
        if code.is_empty() {
            return Err(CourseError::EmptyCode);
        }
        if draft.total_weeks == 0 {
            return Err(CourseError::InvalidTotalWeeks);
        }
        if draft.end_date <= draft.start_date {
            return Err(CourseError::InvalidDateRange);
        }

        Ok(Self {
            id,
            name,
            code,
            semester: draft.semester.trim().to_owned(),
            instructor: draft.instructor.trim().to_owned(),
            total_weeks: draft.total_weeks,
            topics: Vec::new(),
            start_date: draft.start_date,
            end_date: draft.end_date,
        })
    }

    /// Rehydrate a course together with its topics.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` for invalid metadata, topics scheduled past the
    /// last week, or repeated topic ids.
    pub fn from_persisted(
        id: CourseId,
        draft: CourseDraft,
        topics: Vec<Topic>,
    ) -> Result<Self, CourseError> {
        let mut course = Self::new(id, draft)?;
        for topic in topics {
            course.check_week(topic.week())?;
            if course.topic(topic.id()).is_some() {
                return Err(CourseError::DuplicateTopic(topic.id()));
            }
            course.topics.push(topic);
        }
        Ok(course)
    }

    /// Append a new, incomplete topic. Existing topics are not touched.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::WeekOutOfRange` if the week is past the end of the
    /// course, `CourseError::DuplicateTopic` if the id is taken, or the
    /// underlying `TopicError`.
    pub fn add_topic(&mut self, id: TopicId, draft: TopicDraft) -> Result<&Topic, CourseError> {
        self.check_week(draft.week)?;
        if self.topic(id).is_some() {
            return Err(CourseError::DuplicateTopic(id));
        }
        let topic = Topic::new(id, draft)?;
        self.topics.push(topic);
        Ok(&self.topics[self.topics.len() - 1])
    }

    /// Toggle a topic's completion.
    ///
    /// Returns the new completion flag, or `None` when no topic has that id
    /// (nothing changes in that case).
    pub fn toggle_topic(&mut self, topic_id: TopicId, now: DateTime<Utc>) -> Option<bool> {
        self.topics
            .iter_mut()
            .find(|topic| topic.id() == topic_id)
            .map(|topic| topic.toggle(now))
    }

    fn check_week(&self, week: u32) -> Result<(), CourseError> {
        if week > self.total_weeks {
            return Err(CourseError::WeekOutOfRange {
                week,
                total_weeks: self.total_weeks,
            });
        }
        Ok(())
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn semester(&self) -> &str {
        &self.semester
    }

    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    #[must_use]
    pub fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn topic(&self, id: TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id() == id)
    }

    #[must_use]
    pub fn completed_topics(&self) -> usize {
        self.topics.iter().filter(|topic| topic.is_completed()).count()
    }

    #[must_use]
    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    #[must_use]
    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{fixed_now, midnight_utc};

    fn draft() -> CourseDraft {
        CourseDraft {
            name: "  Operating Systems ".into(),
            code: "CS350".into(),
            semester: "Spring 2025".into(),
            instructor: "Dr. Ada".into(),
            total_weeks: 12,
            start_date: midnight_utc(2025, 1, 13).unwrap(),
            end_date: midnight_utc(2025, 4, 7).unwrap(),
        }
    }

    #[test]
    fn new_course_has_no_topics_and_trims_name() {
        let course = Course::new(CourseId::new(1), draft()).unwrap();
        assert_eq!(course.name(), "Operating Systems");
        assert!(course.topics().is_empty());
        assert_eq!(course.total_weeks(), 12);
    }

    #[test]
    fn rejects_invalid_metadata() {
        let mut d = draft();
        d.name = " ".into();
        assert_eq!(Course::new(CourseId::new(1), d).unwrap_err(), CourseError::EmptyName);

        let mut d = draft();
        d.code = String::new();
        assert_eq!(Course::new(CourseId::new(1), d).unwrap_err(), CourseError::EmptyCode);

        let mut d = draft();
        d.total_weeks = 0;
        assert_eq!(
            Course::new(CourseId::new(1), d).unwrap_err(),
            CourseError::InvalidTotalWeeks
        );

        let mut d = draft();
        d.end_date = d.start_date;
        assert_eq!(
            Course::new(CourseId::new(1), d).unwrap_err(),
            CourseError::InvalidDateRange
        );
    }

    #[test]
    fn add_topic_appends_in_creation_order() {
        let mut course = Course::new(CourseId::new(1), draft()).unwrap();
        course
            .add_topic(TopicId::new(10), TopicDraft::new("Scheduling", "", 3.0, 5))
            .unwrap();
        course
            .add_topic(TopicId::new(11), TopicDraft::new("Processes", "", 2.0, 1))
            .unwrap();

        let titles: Vec<_> = course.topics().iter().map(Topic::title).collect();
        assert_eq!(titles, ["Scheduling", "Processes"]);
    }

    #[test]
    fn add_topic_rejects_week_past_course_end() {
        let mut course = Course::new(CourseId::new(1), draft()).unwrap();
        let err = course
            .add_topic(TopicId::new(1), TopicDraft::new("Late", "", 1.0, 13))
            .unwrap_err();
        assert_eq!(
            err,
            CourseError::WeekOutOfRange {
                week: 13,
                total_weeks: 12
            }
        );
        assert!(course.topics().is_empty());
    }

    #[test]
    fn add_topic_rejects_duplicate_id() {
        let mut course = Course::new(CourseId::new(1), draft()).unwrap();
        course
            .add_topic(TopicId::new(1), TopicDraft::new("A", "", 1.0, 1))
            .unwrap();
        let err = course
            .add_topic(TopicId::new(1), TopicDraft::new("B", "", 1.0, 1))
            .unwrap_err();
        assert_eq!(err, CourseError::DuplicateTopic(TopicId::new(1)));
    }

    #[test]
    fn add_topic_keeps_existing_topics_unchanged() {
        let mut course = Course::new(CourseId::new(1), draft()).unwrap();
        course
            .add_topic(TopicId::new(1), TopicDraft::new("A", "", 1.0, 1))
            .unwrap();
        course.toggle_topic(TopicId::new(1), fixed_now());
        let before = course.topics()[0].clone();

        course
            .add_topic(TopicId::new(2), TopicDraft::new("B", "", 1.0, 2))
            .unwrap();

        assert_eq!(course.topics()[0], before);
        assert!(!course.topics()[1].is_completed());
    }

    #[test]
    fn toggle_unknown_topic_is_a_no_op() {
        let mut course = Course::new(CourseId::new(1), draft()).unwrap();
        course
            .add_topic(TopicId::new(1), TopicDraft::new("A", "", 1.0, 1))
            .unwrap();
        let before = course.clone();

        assert_eq!(course.toggle_topic(TopicId::new(99), fixed_now()), None);
        assert_eq!(course, before);
    }

    #[test]
    fn completed_never_exceeds_total_across_toggles() {
        let mut course = Course::new(CourseId::new(1), draft()).unwrap();
        for id in 1..=3 {
            course
                .add_topic(TopicId::new(id), TopicDraft::new(format!("T{id}"), "", 1.0, 1))
                .unwrap();
        }
        let sequence = [1, 2, 2, 3, 1, 3, 3, 99, 2];
        for id in sequence {
            course.toggle_topic(TopicId::new(id), fixed_now());
            assert!(course.completed_topics() <= course.topics().len());
        }
        assert_eq!(course.completed_topics(), 2);
    }

    #[test]
    fn from_persisted_rejects_out_of_range_topic() {
        let topic = Topic::new(TopicId::new(1), TopicDraft::new("A", "", 1.0, 20)).unwrap();
        let err = Course::from_persisted(CourseId::new(1), draft(), vec![topic]).unwrap_err();
        assert!(matches!(err, CourseError::WeekOutOfRange { week: 20, .. }));
    }

    #[test]
    fn error_messages_name_the_offending_values() {
        let err = CourseError::WeekOutOfRange {
            week: 17,
            total_weeks: 16,
        };
        assert_eq!(
            err.to_string(),
            "week 17 is outside the course length of 16 weeks"
        );
        let err = CourseError::from(TopicError::EmptyTitle);
        assert_eq!(err.to_string(), "topic title cannot be empty");
    }
}
