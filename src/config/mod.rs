pub mod cli;
pub mod toml_config;

use crate::app::shell::OutputFormat;
use crate::core::loader::StudentLoader;
use crate::core::parser::GradePolicy;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate, LOG_LEVELS};
use cli::LocalFileSource;
use toml_config::TomlConfig;

pub const DEFAULT_STUDENT_FILE: &str = "students.txt";

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "student-grades")]
#[command(about = "Load NAME;GRADE student files and report the average grade")]
pub struct CliConfig {
    /// Student file to read (default: students.txt)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// How the grade field is parsed
    #[arg(long, value_enum)]
    pub grade_policy: Option<GradePolicy>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every student that parsed
    Load,
    /// Show the average grade
    Average,
    /// List students, then show the average
    Summary,
}

/// Effective settings after merging the TOML file with command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub file: String,
    pub grade_policy: GradePolicy,
    pub format: OutputFormat,
    pub verbose: bool,
    pub json_logs: bool,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: DEFAULT_STUDENT_FILE.to_string(),
            grade_policy: GradePolicy::default(),
            format: OutputFormat::default(),
            verbose: false,
            json_logs: false,
            log_level: None,
        }
    }
}

impl Settings {
    /// 以 TOML 為基礎，再套用命令列覆蓋
    pub fn from_toml(toml: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            file: toml.source.path.clone().unwrap_or(defaults.file),
            grade_policy: toml.parsing.grade_policy.unwrap_or(defaults.grade_policy),
            json_logs: toml.logging.json.unwrap_or(defaults.json_logs),
            log_level: toml.logging.level.clone(),
            ..defaults
        }
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let toml = match &cli.config {
            Some(path) => {
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                toml
            }
            None => TomlConfig::default(),
        };
        Ok(Self::from_toml(&toml).with_cli(cli))
    }

    #[cfg(feature = "cli")]
    pub fn with_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(file) = &cli.file {
            self.file = file.clone();
        }
        if let Some(policy) = cli.grade_policy {
            self.grade_policy = policy;
        }
        self.format = cli.format;
        self.verbose = cli.verbose;
        self.json_logs = self.json_logs || cli.json_logs;
        self
    }

    pub fn source(&self) -> LocalFileSource {
        LocalFileSource::new(&self.file, StudentLoader::new(self.grade_policy))
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("file", &self.file)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
