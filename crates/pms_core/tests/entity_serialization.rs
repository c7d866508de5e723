mod common;

use common::load_fixture;
use pms_core::{ProjectId, TaskId};

#[test]
fn project_serializes_with_ids_and_iso_dates() {
    let mut pms = load_fixture();
    let system_fix = pms.project_by_name("System Fix").unwrap().id();
    let transformation = pms.task_by_name("Data Transformation").unwrap().id();
    pms.assign_task_to_project(transformation, system_fix).unwrap();

    let json = serde_json::to_value(pms.project(system_fix).unwrap()).unwrap();
    assert_eq!(json["id"], ProjectId::from_key("System Fix").to_string());
    assert_eq!(json["name"], "System Fix");
    assert_eq!(json["start_date"], "2015-01-01");
    assert_eq!(json["end_date"], "2015-01-02");
    assert_eq!(json["buffer"], 0);
    assert_eq!(
        json["tasks"][0]["task_id"],
        TaskId::from_key("Data Transformation").to_string()
    );
    assert_eq!(json["tasks"][0]["estimated_hours"], 12);
}

#[test]
fn employee_serializes_relations_as_ids() {
    let pms = load_fixture();
    let parker = pms.employee_by_last_name("Parker").unwrap();
    let hanne = pms.employee_by_last_name("Hanne").unwrap();

    let json = serde_json::to_value(parker).unwrap();
    assert_eq!(json["first_name"], "Peter");
    assert_eq!(json["supervisor"], hanne.id().to_string());
    assert_eq!(json["projects"], serde_json::json!([]));
}
