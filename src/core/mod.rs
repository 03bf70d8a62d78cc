pub mod loader;
pub mod parser;
pub mod stats;

pub use crate::domain::model::{LoadReport, ParseFailure, Student};
pub use crate::domain::ports::StudentSource;
pub use crate::utils::error::Result;
