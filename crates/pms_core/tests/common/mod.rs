#![allow(dead_code)]

use pms_core::{PmsConfig, ProjectManagementSystem};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_config() -> PmsConfig {
    PmsConfig::new(
        fixture_path("employees.csv"),
        fixture_path("projects.csv"),
        fixture_path("tasks.csv"),
    )
}

pub fn load_fixture() -> ProjectManagementSystem {
    ProjectManagementSystem::load(&fixture_config()).unwrap()
}
