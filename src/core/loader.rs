use crate::core::parser::{parse_line_with, GradePolicy};
use crate::domain::model::{LoadReport, Student};
use crate::utils::error::{GradeError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads `NAME;GRADE` files into students, skipping lines that do not parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentLoader {
    policy: GradePolicy,
}

impl StudentLoader {
    pub fn new(policy: GradePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> GradePolicy {
        self.policy
    }

    pub fn load_records<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Student>> {
        self.load_report(path).map(|report| report.students)
    }

    /// 開檔並逐行解析；檔案在任何離開路徑上都會關閉
    pub fn load_report<P: AsRef<Path>>(&self, path: P) -> Result<LoadReport> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        tracing::debug!("Opening student file: {}", path_str);

        let file = File::open(path).map_err(|e| GradeError::io(path_str.clone(), e))?;
        let report = self
            .load_from_reader(BufReader::new(file))
            .map_err(|e| match e {
                GradeError::Io { source, .. } => GradeError::io(path_str.clone(), source),
                other => other,
            })?;

        tracing::info!(
            "Loaded {} students from {} ({} skipped)",
            report.students.len(),
            path_str,
            report.skipped.len()
        );
        Ok(report)
    }

    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<LoadReport> {
        reader
            .lines()
            .try_fold(LoadReport::default(), |mut report, line| -> Result<LoadReport> {
                let line = line.map_err(|e| GradeError::io("<reader>", e))?;
                match parse_line_with(&line, self.policy) {
                    Ok(student) => report.students.push(student),
                    Err(failure) => {
                        tracing::warn!("Skipping invalid line: {}", failure);
                        report.skipped.push(failure);
                    }
                }
                Ok(report)
            })
    }
}

/// 使用預設規則載入
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Student>> {
    StudentLoader::default().load_records(path)
}

pub fn load_report<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    StudentLoader::default().load_report(path)
}
