use crate::domain::model::Student;
use crate::utils::error::Result;

/// Anything a presentation shell can pull a fresh student list from.
pub trait StudentSource {
    fn load_students(&self) -> Result<Vec<Student>>;

    /// Human readable origin, used in log lines.
    fn describe(&self) -> String;
}
