use crate::core::stats::average;
use crate::core::{Student, StudentSource};
use crate::utils::error::{GradeError, Result};
use serde_json::json;

pub const STUDENTS_HEADER: &str = "---- Loaded Students ----";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadStudents,
    ShowAverage,
}

impl Action {
    fn failure_heading(&self) -> &'static str {
        match self {
            Self::LoadStudents => "Error loading students:",
            Self::ShowAverage => "Error calculating average:",
        }
    }
}

/// Presentation layer: turns the two core operations into display text.
///
/// Every action reloads from the source so the latest file contents are shown.
pub struct Shell<S: StudentSource> {
    source: S,
    format: OutputFormat,
}

impl<S: StudentSource> Shell<S> {
    pub fn new(source: S, format: OutputFormat) -> Self {
        Self { source, format }
    }

    pub fn run(&self, action: Action) -> Result<String> {
        tracing::debug!("Running {:?} against {}", action, self.source.describe());
        match action {
            Action::LoadStudents => self.show_students(),
            Action::ShowAverage => self.show_average(),
        }
    }

    pub fn show_students(&self) -> Result<String> {
        let students = self.source.load_students()?;
        render_students(&students, self.format)
    }

    pub fn show_average(&self) -> Result<String> {
        let students = self.source.load_students()?;
        let avg = average(&students)?;
        render_average(avg, students.len(), self.format)
    }

    pub fn render_failure(&self, action: Action, err: &GradeError) -> String {
        match self.format {
            OutputFormat::Text => format!(
                "{}\n{}",
                action.failure_heading(),
                err.user_friendly_message()
            ),
            OutputFormat::Json => json!({
                "error": err.user_friendly_message(),
                "category": format!("{:?}", err.category()),
                "suggestion": err.recovery_suggestion(),
            })
            .to_string(),
        }
    }
}

pub fn render_students(students: &[Student], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![STUDENTS_HEADER.to_string()];
            lines.extend(students.iter().map(|s| s.to_string()));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "count": students.len(),
            "students": students,
        }))?),
    }
}

pub fn render_average(avg: f64, count: usize, format: OutputFormat) -> Result<String> {
    match format {
        // {:?} 保留小數點，例如 3.0
        OutputFormat::Text => Ok(format!("Average grade is: {:?}", avg)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "count": count,
            "average": avg,
        }))?),
    }
}
