use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::TopicId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic title cannot be empty")]
    EmptyTitle,

    #[error("estimated hours must be a positive number")]
    InvalidEstimatedHours,

    #[error("actual hours must be a non-negative number")]
    InvalidActualHours,

    #[error("week must be at least 1")]
    InvalidWeek,
}

//
// ─── COMPLETION ────────────────────────────────────────────────────────────────
//

/// The two states a topic can be in.
///
/// `Complete` carries the completion time when it is known; sample data and
/// completions recorded elsewhere may not have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Incomplete,
    Complete { at: Option<DateTime<Utc>> },
}

impl Completion {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Completion::Complete { .. })
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Completion::Incomplete => None,
            Completion::Complete { at } => *at,
        }
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Caller-supplied fields for a new topic. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicDraft {
    pub title: String,
    pub description: String,
    pub estimated_hours: f64,
    pub actual_hours: Option<f64>,
    pub week: u32,
}

impl TopicDraft {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        estimated_hours: f64,
        week: u32,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            estimated_hours,
            actual_hours: None,
            week,
        }
    }
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// A single syllabus unit scheduled in a course week.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    id: TopicId,
    title: String,
    description: String,
    completion: Completion,
    estimated_hours: f64,
    actual_hours: Option<f64>,
    week: u32,
}

impl Topic {
    /// Creates a new, incomplete topic from a draft.
    ///
    /// The upper week bound depends on the owning course and is checked by
    /// `Course::add_topic`.
    ///
    /// # Errors
    ///
    /// Returns `TopicError` if the title is blank, hours are not valid numbers,
    /// or the week is zero.
    pub fn new(id: TopicId, draft: TopicDraft) -> Result<Self, TopicError> {
        Self::from_persisted(
            id,
            draft.title,
            draft.description,
            Completion::Incomplete,
            draft.estimated_hours,
            draft.actual_hours,
            draft.week,
        )
    }

    /// Rehydrate a topic with an existing completion state.
    ///
    /// # Errors
    ///
    /// Same validation as `Topic::new`.
    pub fn from_persisted(
        id: TopicId,
        title: impl Into<String>,
        description: impl Into<String>,
        completion: Completion,
        estimated_hours: f64,
        actual_hours: Option<f64>,
        week: u32,
    ) -> Result<Self, TopicError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(TopicError::EmptyTitle);
        }
        if !estimated_hours.is_finite() || estimated_hours <= 0.0 {
            return Err(TopicError::InvalidEstimatedHours);
        }
        if actual_hours.is_some_and(|hours| !hours.is_finite() || hours < 0.0) {
            return Err(TopicError::InvalidActualHours);
        }
        if week == 0 {
            return Err(TopicError::InvalidWeek);
        }

        Ok(Self {
            id,
            title,
            description: description.into().trim().to_owned(),
            completion,
            estimated_hours,
            actual_hours,
            week,
        })
    }

    /// Flip the completion flag.
    ///
    /// Completing stamps `now`; un-completing clears the timestamp. Returns the
    /// new completion flag.
    pub fn toggle(&mut self, now: DateTime<Utc>) -> bool {
        self.completion = match self.completion {
            Completion::Incomplete => Completion::Complete { at: Some(now) },
            Completion::Complete { .. } => Completion::Incomplete,
        };
        self.completion.is_complete()
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> TopicId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn completion(&self) -> Completion {
        self.completion
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completion.is_complete()
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completion.completed_at()
    }

    #[must_use]
    pub fn estimated_hours(&self) -> f64 {
        self.estimated_hours
    }

    /// Hours actually spent. Only meaningful once the topic is complete.
    #[must_use]
    pub fn actual_hours(&self) -> Option<f64> {
        self.actual_hours
    }

    #[must_use]
    pub fn week(&self) -> u32 {
        self.week
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn build_topic() -> Topic {
        Topic::new(TopicId::new(1), TopicDraft::new("Stacks", "LIFO", 4.0, 3)).unwrap()
    }

    #[test]
    fn new_topic_starts_incomplete() {
        let topic = build_topic();
        assert!(!topic.is_completed());
        assert_eq!(topic.completed_at(), None);
        assert_eq!(topic.week(), 3);
    }

    #[test]
    fn toggle_sets_and_clears_completed_at() {
        let mut topic = build_topic();
        let now = fixed_now();

        assert!(topic.toggle(now));
        assert_eq!(topic.completed_at(), Some(now));

        assert!(!topic.toggle(now));
        assert_eq!(topic.completed_at(), None);
        assert_eq!(topic.completion(), Completion::Incomplete);
    }

    #[test]
    fn toggle_leaves_other_fields_alone() {
        let mut topic = build_topic();
        let before = topic.clone();
        topic.toggle(fixed_now());

        assert_eq!(topic.id(), before.id());
        assert_eq!(topic.title(), before.title());
        assert_eq!(topic.description(), before.description());
        assert_eq!(topic.week(), before.week());
        assert_eq!(topic.actual_hours(), before.actual_hours());
    }

    #[test]
    fn rejects_blank_title() {
        let err = Topic::new(TopicId::new(1), TopicDraft::new("  ", "", 1.0, 1)).unwrap_err();
        assert_eq!(err, TopicError::EmptyTitle);
    }

    #[test]
    fn rejects_non_positive_estimate() {
        let err = Topic::new(TopicId::new(1), TopicDraft::new("A", "", 0.0, 1)).unwrap_err();
        assert_eq!(err, TopicError::InvalidEstimatedHours);

        let err = Topic::new(TopicId::new(1), TopicDraft::new("A", "", f64::NAN, 1)).unwrap_err();
        assert_eq!(err, TopicError::InvalidEstimatedHours);
    }

    #[test]
    fn rejects_negative_actual_hours() {
        let mut draft = TopicDraft::new("A", "", 2.0, 1);
        draft.actual_hours = Some(-1.0);
        let err = Topic::new(TopicId::new(1), draft).unwrap_err();
        assert_eq!(err, TopicError::InvalidActualHours);
    }

    #[test]
    fn rejects_week_zero() {
        let err = Topic::new(TopicId::new(1), TopicDraft::new("A", "", 2.0, 0)).unwrap_err();
        assert_eq!(err, TopicError::InvalidWeek);
    }
}
