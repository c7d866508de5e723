//! Command-line viewer for the project management model.
//!
//! Source paths and log settings default to `PMS_*` environment variables,
//! then `data/*.csv`; command-line values override both.

use clap::Parser;
use pms_core::{init_logging, PmsConfig, ProjectManagementSystem};
use std::path::PathBuf;
use std::process::ExitCode;

/// Load employees, projects and tasks from CSV and print them
#[derive(Parser, Debug)]
#[command(name = "pms", version, long_about = None)]
struct Cli {
    /// Employees CSV (`First Name`, `Last Name`, `Supervisor`)
    #[arg(requires_all = ["projects", "tasks"])]
    employees: Option<PathBuf>,

    /// Projects CSV (`Name`, `Start Date`, `Buffer`)
    projects: Option<PathBuf>,

    /// Tasks CSV (`Name`, `Description`, `Estimated Hours`)
    tasks: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Directory for rolling log files; file logging is off without it
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn into_config(self, base: PmsConfig) -> PmsConfig {
        let mut config = base;
        if let Some(path) = self.employees {
            config.employees_path = path;
        }
        if let Some(path) = self.projects {
            config.projects_path = path;
        }
        if let Some(path) = self.tasks {
            config.tasks_path = path;
        }
        if let Some(level) = self.log_level {
            config = config.with_log_level(level);
        }
        if let Some(dir) = self.log_dir {
            config = config.with_log_dir(dir);
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.into_config(PmsConfig::from_env())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("pms: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut config: PmsConfig) -> Result<(), String> {
    config.validate().map_err(|err| err.to_string())?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }
    log::info!(
        "event=cli_start module=cli status=ok version={}",
        pms_core::core_version()
    );

    let pms = ProjectManagementSystem::load(&config).map_err(|err| err.to_string())?;

    println!("Employees ({})", pms.employees().len());
    for employee in pms.employees() {
        println!("{}", pms.employee_summary(employee));
    }

    println!("\nProjects ({})", pms.projects().len());
    for project in pms.projects() {
        println!("{project}");
    }

    for project in pms.projects() {
        let tasks = pms.tasks_of(project);
        println!("\nTasks ({}) for {}", tasks.len(), project.name());
        for task in tasks {
            println!("{task}");
        }
    }

    println!("\nAll tasks ({})", pms.tasks().len());
    for task in pms.tasks() {
        println!("{task}");
    }
    Ok(())
}
