use crate::core::loader::StudentLoader;
use crate::core::{Student, StudentSource};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Students read fresh from a local file on every call.
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
    loader: StudentLoader,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>, loader: StudentLoader) -> Self {
        Self {
            path: path.into(),
            loader,
        }
    }
}

impl StudentSource for LocalFileSource {
    fn load_students(&self) -> Result<Vec<Student>> {
        self.loader.load_records(&self.path)
    }

    fn describe(&self) -> String {
        format!(
            "{} (grade policy: {})",
            self.path.display(),
            self.loader.policy().as_str()
        )
    }
}
