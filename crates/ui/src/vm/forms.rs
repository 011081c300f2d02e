//! Editable form state for the login page and the add-course / add-topic
//! modals. Parsing happens here; domain validation stays in the core model.

use chrono::{DateTime, Utc};
use syllabus_core::model::{CourseDraft, TopicDraft, UserDraft, UserRole};

use crate::vm::time_fmt::{format_date_input, parse_date_input};

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub role: Option<UserRole>,
    pub name: String,
    pub email: String,
    pub department: String,
    pub course: String,
}

impl LoginForm {
    /// Build the login draft. `None` until a role is picked.
    #[must_use]
    pub fn to_draft(&self) -> Option<UserDraft> {
        Some(UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role?,
            department: optional(&self.department),
            course: optional(&self.course),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseFormError {
    TotalWeeks,
    StartDate,
    EndDate,
}

impl CourseFormError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            CourseFormError::TotalWeeks => "Total weeks must be a whole number above zero.",
            CourseFormError::StartDate => "Pick a start date.",
            CourseFormError::EndDate => "Pick an end date.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseForm {
    pub name: String,
    pub code: String,
    pub semester: String,
    pub instructor: String,
    pub total_weeks: String,
    pub start_date: String,
    pub end_date: String,
}

impl CourseForm {
    /// A blank form for a 16-week term starting on `today`.
    #[must_use]
    pub fn starting(today: DateTime<Utc>) -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            semester: String::new(),
            instructor: String::new(),
            total_weeks: "16".into(),
            start_date: format_date_input(today),
            end_date: format_date_input(today + chrono::Duration::weeks(16)),
        }
    }

    /// # Errors
    ///
    /// Returns `CourseFormError` for fields that do not parse.
    pub fn validate(&self) -> Result<CourseDraft, CourseFormError> {
        let total_weeks = self
            .total_weeks
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|weeks| *weeks > 0)
            .ok_or(CourseFormError::TotalWeeks)?;
        let start_date = parse_date_input(&self.start_date).ok_or(CourseFormError::StartDate)?;
        let end_date = parse_date_input(&self.end_date).ok_or(CourseFormError::EndDate)?;
        Ok(CourseDraft {
            name: self.name.clone(),
            code: self.code.clone(),
            semester: self.semester.clone(),
            instructor: self.instructor.clone(),
            total_weeks,
            start_date,
            end_date,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicFormError {
    EstimatedHours,
    Week,
}

impl TopicFormError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            TopicFormError::EstimatedHours => "Estimated hours must be a number above zero.",
            TopicFormError::Week => "Pick a week.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicForm {
    pub title: String,
    pub description: String,
    pub estimated_hours: String,
    pub week: String,
}

impl Default for TopicForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            estimated_hours: "3".into(),
            week: "1".into(),
        }
    }
}

impl TopicForm {
    /// # Errors
    ///
    /// Returns `TopicFormError` for fields that do not parse.
    pub fn validate(&self) -> Result<TopicDraft, TopicFormError> {
        let estimated_hours = self
            .estimated_hours
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|hours| hours.is_finite() && *hours > 0.0)
            .ok_or(TopicFormError::EstimatedHours)?;
        let week = self
            .week
            .trim()
            .parse::<u32>()
            .map_err(|_| TopicFormError::Week)?;
        Ok(TopicDraft::new(
            self.title.clone(),
            self.description.clone(),
            estimated_hours,
            week,
        ))
    }
}
