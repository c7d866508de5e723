//! Runtime configuration for loading the model.
//!
//! # Responsibility
//! - Name the three CSV sources and the logging setup.
//! - Apply defaults, then environment overrides, then explicit overrides.
//!
//! # Invariants
//! - A validated config has three non-empty source paths.
//! - `log_level` is one of `trace|debug|info|warn|error`.
//! - `log_dir`, when set, is absolute; relative values resolve against the
//!   working directory.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_EMPLOYEES_CSV: &str = "PMS_EMPLOYEES_CSV";
pub const ENV_PROJECTS_CSV: &str = "PMS_PROJECTS_CSV";
pub const ENV_TASKS_CSV: &str = "PMS_TASKS_CSV";
pub const ENV_LOG_LEVEL: &str = "PMS_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PMS_LOG_DIR";

const DEFAULT_EMPLOYEES_CSV: &str = "data/employees.csv";
const DEFAULT_PROJECTS_CSV: &str = "data/projects.csv";
const DEFAULT_TASKS_CSV: &str = "data/tasks.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyPath(&'static str),
    UnsupportedLogLevel(String),
    WorkingDirectory(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath(source) => write!(f, "{source} path must not be empty"),
            Self::UnsupportedLogLevel(message) => write!(f, "{message}"),
            Self::WorkingDirectory(message) => {
                write!(f, "cannot resolve relative log directory: {message}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Source files and logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PmsConfig {
    pub employees_path: PathBuf,
    pub projects_path: PathBuf,
    pub tasks_path: PathBuf,
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for PmsConfig {
    fn default() -> Self {
        Self {
            employees_path: PathBuf::from(DEFAULT_EMPLOYEES_CSV),
            projects_path: PathBuf::from(DEFAULT_PROJECTS_CSV),
            tasks_path: PathBuf::from(DEFAULT_TASKS_CSV),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl PmsConfig {
    pub fn new(
        employees_path: impl Into<PathBuf>,
        projects_path: impl Into<PathBuf>,
        tasks_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            employees_path: employees_path.into(),
            projects_path: projects_path.into(),
            tasks_path: tasks_path.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `PMS_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from a variable lookup; blank values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(path) = value(ENV_EMPLOYEES_CSV) {
            self.employees_path = PathBuf::from(path);
        }
        if let Some(path) = value(ENV_PROJECTS_CSV) {
            self.projects_path = PathBuf::from(path);
        }
        if let Some(path) = value(ENV_TASKS_CSV) {
            self.tasks_path = PathBuf::from(path);
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(dir) = value(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Checks paths, normalizes the log level and makes `log_dir` absolute.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.employees_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("employees"));
        }
        if self.projects_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("projects"));
        }
        if self.tasks_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("tasks"));
        }
        self.log_level = normalize_level(&self.log_level)
            .map_err(ConfigError::UnsupportedLogLevel)?
            .to_string();

        if let Some(dir) = self.log_dir.take() {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::EmptyPath("log"));
            }
            let dir = if dir.is_absolute() {
                dir
            } else {
                std::env::current_dir()
                    .map_err(|err| ConfigError::WorkingDirectory(err.to_string()))?
                    .join(dir)
            };
            self.log_dir = Some(dir);
        }
        Ok(())
    }
}
