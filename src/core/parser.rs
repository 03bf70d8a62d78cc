use crate::domain::model::{ParseFailure, Student};
use serde::Deserialize;

pub const FIELD_SEPARATOR: char = ';';
const EXPECTED_FIELDS: usize = 2;

/// How the grade field is read.
///
/// `Strict` accepts an optional sign followed by ASCII digits that fit an
/// `i32`, nothing else. `Trimmed` strips surrounding whitespace first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum GradePolicy {
    #[default]
    Strict,
    Trimmed,
}

impl GradePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Trimmed => "trimmed",
        }
    }
}

/// 解析單行 `NAME;GRADE`，使用預設的 Strict 規則
pub fn parse_line(raw: &str) -> Result<Student, ParseFailure> {
    parse_line_with(raw, GradePolicy::Strict)
}

pub fn parse_line_with(raw: &str, policy: GradePolicy) -> Result<Student, ParseFailure> {
    let fields: Vec<&str> = raw.split(FIELD_SEPARATOR).collect();
    if fields.len() != EXPECTED_FIELDS {
        return Err(ParseFailure::WrongFieldCount {
            line: raw.to_string(),
            fields: fields.len(),
        });
    }

    let grade_field = match policy {
        GradePolicy::Strict => fields[1],
        GradePolicy::Trimmed => fields[1].trim(),
    };

    // str::parse::<i32> 只接受可選正負號加上 ASCII 數字，且不可溢位
    let grade = grade_field
        .parse::<i32>()
        .map_err(|_| ParseFailure::NonNumericGrade {
            line: raw.to_string(),
        })?;

    Ok(Student::new(fields[0].to_string(), grade))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let student = parse_line("Alice;2").unwrap();
        assert_eq!(student.name(), "Alice");
        assert_eq!(student.grade(), 2);
        assert_eq!(student.to_string(), "Alice (Grade: 2)");
    }

    #[test]
    fn test_name_taken_verbatim() {
        let student = parse_line("  Mary Ann ;5").unwrap();
        assert_eq!(student.name(), "  Mary Ann ");
    }

    #[test]
    fn test_signed_grades() {
        assert_eq!(parse_line("Bob;-3").unwrap().grade(), -3);
        assert_eq!(parse_line("Bob;+4").unwrap().grade(), 4);
    }

    #[test]
    fn test_wrong_field_count() {
        for line in ["", "Dave", "Alice;2;", "a;b;c", ";;"] {
            let err = parse_line(line).unwrap_err();
            assert_eq!(err.reason(), "wrong field count", "line {:?}", line);
            assert_eq!(err.line(), line);
        }

        match parse_line("a;1;2").unwrap_err() {
            ParseFailure::WrongFieldCount { fields, .. } => assert_eq!(fields, 3),
            other => panic!("unexpected failure: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_grade() {
        for line in ["Carol;x", "Carol;", "Carol;2.5", "Carol;+", "Carol;99999999999", "Carol;1e3"] {
            let err = parse_line(line).unwrap_err();
            assert_eq!(err.reason(), "non-numeric grade", "line {:?}", line);
        }
    }

    #[test]
    fn test_strict_policy_rejects_whitespace() {
        for line in ["Eve; 3", "Eve;3 ", "Eve;\t3"] {
            assert!(matches!(
                parse_line(line),
                Err(ParseFailure::NonNumericGrade { .. })
            ));
        }
    }

    #[test]
    fn test_trimmed_policy_accepts_whitespace() {
        let student = parse_line_with("Eve; 3 ", GradePolicy::Trimmed).unwrap();
        assert_eq!(student.grade(), 3);
        assert_eq!(student.name(), "Eve");

        assert!(parse_line_with("Eve;  ", GradePolicy::Trimmed).is_err());
    }

    #[test]
    fn test_display_reproduces_fields() {
        for (name, grade) in [("Alice", 2), ("Bob", -7), ("Zoë", 100), ("", 0)] {
            let line = format!("{};{}", name, grade);
            let student = parse_line(&line).unwrap();
            assert_eq!(student.to_string(), format!("{} (Grade: {})", name, grade));
        }
    }
}
