use syllabus_core::alerts::{DelayAlert, DelaySeverity};

#[derive(Clone, Debug, PartialEq)]
pub struct AlertVm {
    pub title: String,
    pub behind_label: String,
    pub message: String,
    pub recommendations: Vec<&'static str>,
    pub severity_class: &'static str,
}

impl From<&DelayAlert> for AlertVm {
    fn from(alert: &DelayAlert) -> Self {
        Self {
            title: format!("{} Detected", alert.severity.title()),
            behind_label: alert.behind_label(),
            message: alert.message(),
            recommendations: alert.severity.recommendations().to_vec(),
            severity_class: match alert.severity {
                DelaySeverity::Minor => "alert--minor",
                DelaySeverity::Significant => "alert--significant",
                DelaySeverity::Critical => "alert--critical",
            },
        }
    }
}
