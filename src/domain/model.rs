use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 一筆已解析的學生資料，只能經由 `core::parser` 建立
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    name: String,
    grade: i32,
}

impl Student {
    pub(crate) fn new(name: String, grade: i32) -> Self {
        Self { name, grade }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> i32 {
        self.grade
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Grade: {})", self.name, self.grade)
    }
}

/// Why a single line could not become a [`Student`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ParseFailure {
    #[error("wrong field count ({fields}) in line '{line}'")]
    WrongFieldCount { line: String, fields: usize },

    #[error("non-numeric grade in line '{line}'")]
    NonNumericGrade { line: String },
}

impl ParseFailure {
    pub fn line(&self) -> &str {
        match self {
            Self::WrongFieldCount { line, .. } | Self::NonNumericGrade { line } => line,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::WrongFieldCount { .. } => "wrong field count",
            Self::NonNumericGrade { .. } => "non-numeric grade",
        }
    }
}

/// Outcome of one load: the kept students in file order plus every skipped line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub students: Vec<Student>,
    pub skipped: Vec<ParseFailure>,
}

impl LoadReport {
    pub fn lines_read(&self) -> usize {
        self.students.len() + self.skipped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_display() {
        let student = Student::new("Alice".to_string(), 2);
        assert_eq!(student.to_string(), "Alice (Grade: 2)");
    }

    #[test]
    fn test_parse_failure_accessors() {
        let failure = ParseFailure::WrongFieldCount {
            line: "Dave".to_string(),
            fields: 1,
        };
        assert_eq!(failure.line(), "Dave");
        assert_eq!(failure.reason(), "wrong field count");
        assert!(failure.to_string().contains("'Dave'"));
    }

    #[test]
    fn test_parse_failure_serializes_reason_tag() {
        let failure = ParseFailure::NonNumericGrade {
            line: "Carol;x".to_string(),
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["reason"], "non_numeric_grade");
        assert_eq!(json["line"], "Carol;x");
    }
}
