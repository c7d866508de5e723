mod common;

use common::load_fixture;
use pms_core::{EntityKind, PmsError, ProjectId, TaskId};

#[test]
fn task_assignment_keeps_end_date_current() {
    let mut pms = load_fixture();
    let system_fix = pms.project_by_name("System Fix").unwrap().id();
    assert!(pms.project(system_fix).unwrap().tasks().is_empty());

    let transformation = pms.task_by_name("Data Transformation").unwrap().id();
    let coverage = pms.task_by_name("Test Coverage").unwrap().id();
    pms.assign_task_to_project(transformation, system_fix).unwrap();
    let project = pms.assign_task_to_project(coverage, system_fix).unwrap();
    assert_eq!(project.tasks().len(), 2);
    assert_eq!(project.end_date().to_string(), "2015-01-01");

    let cleaning = pms.task_by_name("Data Cleaning").unwrap().id();
    let project = pms.assign_task_to_project(cleaning, system_fix).unwrap();
    assert_eq!(project.tasks().len(), 3);
    assert_eq!(project.end_date().to_string(), "2015-01-05");
}

#[test]
fn removing_a_task_recomputes_end_date() {
    let mut pms = load_fixture();
    let system_fix = pms.project_by_name("System Fix").unwrap().id();
    let cleaning = pms.task_by_name("Data Cleaning").unwrap().id();

    pms.assign_task_to_project(cleaning, system_fix).unwrap();
    assert_eq!(pms.project(system_fix).unwrap().end_date().to_string(), "2015-01-05");

    assert!(pms.remove_task_from_project(cleaning, system_fix).unwrap());
    assert!(!pms.remove_task_from_project(cleaning, system_fix).unwrap());
    assert_eq!(pms.project(system_fix).unwrap().end_date().to_string(), "2015-01-01");
}

#[test]
fn third_project_is_rejected_softly() {
    let mut pms = load_fixture();
    let system_fix = pms.project_by_name("System Fix").unwrap().id();
    let mission = pms.project_by_name("Mission Impossible").unwrap().id();
    let kraken = pms.project_by_name("Kraken II").unwrap().id();
    let parker = pms.employee_by_last_name("Parker").unwrap().id();
    assert!(pms.employee(parker).unwrap().projects().is_empty());

    assert!(pms.assign_project_to_employee(system_fix, parker).unwrap());
    assert!(pms.assign_project_to_employee(kraken, parker).unwrap());
    assert!(!pms.assign_project_to_employee(mission, parker).unwrap());

    let parker = pms.employee(parker).unwrap();
    assert_eq!(parker.projects(), &[system_fix, kraken]);
    let names: Vec<&str> = pms.projects_of(parker).iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["System Fix", "Kraken II"]);
}

#[test]
fn removing_a_project_from_an_employee_frees_capacity() {
    let mut pms = load_fixture();
    let system_fix = pms.project_by_name("System Fix").unwrap().id();
    let mission = pms.project_by_name("Mission Impossible").unwrap().id();
    let kraken = pms.project_by_name("Kraken II").unwrap().id();
    let kent = pms.employee_by_last_name("Kent").unwrap().id();

    assert!(pms.assign_project_to_employee(system_fix, kent).unwrap());
    assert!(pms.assign_project_to_employee(kraken, kent).unwrap());
    assert!(pms.remove_project_from_employee(system_fix, kent).unwrap());
    assert!(pms.assign_project_to_employee(mission, kent).unwrap());
    assert_eq!(pms.employee(kent).unwrap().projects(), &[kraken, mission]);
}

#[test]
fn deleting_a_task_purges_it_from_every_project() {
    let mut pms = load_fixture();
    let system_fix = pms.project_by_name("System Fix").unwrap().id();
    let kraken = pms.project_by_name("Kraken II").unwrap().id();
    let transformation = pms.task_by_name("Data Transformation").unwrap().id();
    let deployment = pms.task_by_name("Deployment").unwrap().id();

    pms.assign_task_to_project(transformation, system_fix).unwrap();
    pms.assign_task_to_project(transformation, kraken).unwrap();
    pms.assign_task_to_project(transformation, kraken).unwrap();
    pms.assign_task_to_project(deployment, kraken).unwrap();
    assert_eq!(pms.project(kraken).unwrap().days_needed(), 8);

    let deleted = pms.delete_task(transformation).unwrap();
    assert_eq!(deleted.name(), "Data Transformation");
    assert_eq!(pms.tasks().len(), 8);
    assert!(pms.task_by_name("Data Transformation").is_err());

    let system_fix = pms.project(system_fix).unwrap();
    assert!(system_fix.tasks().is_empty());
    assert_eq!(system_fix.end_date().to_string(), "2015-01-01");

    let kraken = pms.project(kraken).unwrap();
    assert_eq!(kraken.task_ids().collect::<Vec<_>>(), vec![deployment]);
    assert_eq!(kraken.days_needed(), 7);
}

#[test]
fn deleting_a_project_purges_it_from_every_employee() {
    let mut pms = load_fixture();
    let system_fix = pms.project_by_name("System Fix").unwrap().id();
    let kraken = pms.project_by_name("Kraken II").unwrap().id();
    let parker = pms.employee_by_last_name("Parker").unwrap().id();
    let hanne = pms.employee_by_last_name("Hanne").unwrap().id();

    assert!(pms.assign_project_to_employee(system_fix, parker).unwrap());
    assert!(pms.assign_project_to_employee(kraken, hanne).unwrap());
    assert!(pms.assign_project_to_employee(system_fix, hanne).unwrap());

    pms.delete_project(system_fix).unwrap();
    assert_eq!(pms.projects().len(), 3);
    assert!(pms.employee(parker).unwrap().projects().is_empty());
    assert_eq!(pms.employee(hanne).unwrap().projects(), &[kraken]);
}

#[test]
fn deleting_twice_reports_not_found() {
    let mut pms = load_fixture();
    let zephyr = pms.project_by_name("Zephyr").unwrap().id();
    pms.delete_project(zephyr).unwrap();

    let err = pms.delete_project(zephyr).unwrap_err();
    assert!(matches!(err, PmsError::NotFound { entity: EntityKind::Project, .. }));

    let err = pms.delete_task(TaskId::from_key("Never Imported")).unwrap_err();
    assert!(matches!(err, PmsError::NotFound { entity: EntityKind::Task, .. }));
}

#[test]
fn total_days_sum_each_project_span() {
    let mut pms = load_fixture();
    let system_fix = pms.project_by_name("System Fix").unwrap().id();
    let mission = pms.project_by_name("Mission Impossible").unwrap().id();
    let transformation = pms.task_by_name("Data Transformation").unwrap().id();
    let cleaning = pms.task_by_name("Data Cleaning").unwrap().id();

    pms.assign_task_to_project(transformation, system_fix).unwrap();
    pms.assign_task_to_project(cleaning, system_fix).unwrap();

    assert_eq!(pms.maximum_days_to_work_for(&[system_fix, mission]).unwrap(), 28);
    assert!(pms
        .maximum_days_to_work_for(&[system_fix, ProjectId::from_key("Unknown")])
        .is_err());
}

#[test]
fn listings_render_in_display_format() {
    let mut pms = load_fixture();
    let kraken = pms.project_by_name("Kraken II").unwrap().id();
    let monitoring = pms.task_by_name("Monitoring").unwrap().id();
    pms.assign_task_to_project(monitoring, kraken).unwrap();

    let kraken = pms.project(kraken).unwrap();
    assert_eq!(kraken.to_string(), "Kraken II, 2017-01-01 to 2017-01-08, buffer: 5");
    let tasks: Vec<String> = pms.tasks_of(kraken).iter().map(|t| t.to_string()).collect();
    assert_eq!(tasks, vec!["Monitoring (1.250000 days): Set up dashboards"]);

    let parker = pms.employee_by_last_name("Parker").unwrap();
    assert_eq!(pms.employee_summary(parker), "Peter Parker, supervisor: Hanne");
}
