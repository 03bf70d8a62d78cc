use crate::domain::model::Student;
use crate::utils::error::{GradeError, Result};

/// Arithmetic mean of all grades. An empty slice is `GradeError::NoData`.
pub fn average(students: &[Student]) -> Result<f64> {
    if students.is_empty() {
        return Err(GradeError::NoData);
    }

    let total: i64 = students.iter().map(|s| i64::from(s.grade())).sum();
    Ok(total as f64 / students.len() as f64)
}
