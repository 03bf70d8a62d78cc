pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::shell::{Action, OutputFormat, Shell};
pub use config::{cli::LocalFileSource, Settings};
pub use crate::core::loader::{load_records, load_report, StudentLoader};
pub use crate::core::parser::{parse_line, parse_line_with, GradePolicy};
pub use crate::core::stats::average;
pub use domain::model::{LoadReport, ParseFailure, Student};
pub use domain::ports::StudentSource;
pub use utils::error::{GradeError, Result};
