use asta_reader::reader::mdb::MdbReader;
use asta_reader::resource::ResourceType;
use asta_reader::{ProjectReader, read_file};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn write(dir: &Path, table: &str, lines: &[&str]) {
    fs::write(dir.join(format!("{table}.csv")), lines.join("\n")).unwrap();
}

/// Two projects exported with the legacy column names.
fn export() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "dodschem", &["SCHVER", "9006"]);
    write(
        root,
        "project_summary",
        &["PROJID,SHORT_NAME,STARU", "0,Alpha,2024-01-08 08:00:00", "1,Beta,2024-02-05 08:00:00"],
    );
    write(
        root,
        "bar",
        &[
            "PROJID,BARID,NAMH,NATURAL_ORDER,STARV,ENF",
            "0,1,Groundworks,1,2024-01-08 08:00:00,2024-01-09 17:00:00",
            "0,2,Frame,2,2024-01-10 08:00:00,2024-01-10 17:00:00",
            "1,3,Fit out,1,2024-02-05 08:00:00,2024-02-05 17:00:00",
        ],
    );
    write(
        root,
        "task",
        &[
            "PROJID,TASKID,NARE,BAR,NATURAO_ORDER,STARZ,ENJ",
            "0,10,Excavate,1,1,2024-01-08 08:00:00,2024-01-08 17:00:00",
            "0,11,Foundations,1,2,2024-01-09 08:00:00,2024-01-09 17:00:00",
            "0,12,Erect,2,1,2024-01-10 08:00:00,2024-01-10 17:00:00",
            "1,20,Partitions,3,1,2024-02-05 08:00:00,2024-02-05 17:00:00",
        ],
    );
    write(
        root,
        "link",
        &[
            "PROJID,LINKID,START_TASK,END_TASK,TYPI,END_LAG_TIMEHOURS",
            "0,1,10,11,0,",
            "0,2,11,12,2,3",
        ],
    );
    write(
        root,
        "permanent_resource",
        &["PROJID,PERMANENT_RESOURCEID,NASE,AVAILABILITY", "0,5,Site Gang Leader,1"],
    );
    write(root, "perm_resource_skill", &["PROJID,PERM_RESOURCE_SKILLID,PLAYER", "0,7,5"]);
    write(
        root,
        "permanent_schedul_allocation",
        &[
            "PROJID,PERMANENT_SCHEDUL_ALLOCATIONID,ALLOCATEE_TO,ALLOCATIOP_OF,EFFORW,PERCENT_COMPLETE,GIVEN_ALLOCATION",
            "0,30,10,7,28800,0.25,1",
            "0,31,99,7,28800,0,1",
        ],
    );
    dir
}

#[test]
fn lists_every_project_with_its_name() {
    let dir = export();
    let projects = MdbReader::new().list_projects(dir.path()).unwrap();
    let listed: Vec<(i32, Option<&str>)> = projects.iter().map(|(id, name)| (*id, name.as_deref())).collect();
    assert_eq!(listed, vec![(0, Some("Alpha")), (1, Some("Beta"))]);
}

#[test]
fn default_project_uses_legacy_column_names() {
    let dir = export();
    let project = read_file(dir.path()).unwrap();
    assert_eq!(project.properties.name.as_deref(), Some("Alpha"));
    assert_eq!(project.properties.start, Some(dt(2024, 1, 8, 8)));
    assert_eq!(project.properties.application_version, Some(9006));

    let excavate = project.task_by_name("Excavate").unwrap();
    assert_eq!(excavate.unique_id, Some(10));
    assert_eq!(excavate.start, Some(dt(2024, 1, 8, 8)));
    assert_eq!(excavate.bar_name.as_deref(), Some("Groundworks"));
    assert!(project.task_by_name("Partitions").is_none());
}

#[test]
fn links_resolve_with_renamed_columns() {
    let dir = export();
    let project = read_file(dir.path()).unwrap();
    assert_eq!(project.relations.len(), 2);
    let second = &project.relations[1];
    assert_eq!(project.task(second.predecessor).unique_id, Some(11));
    assert_eq!(project.task(second.successor).unique_id, Some(12));
    assert_eq!(second.lag.value, -3.0);
}

#[test]
fn resources_and_assignments_are_read() {
    let dir = export();
    let project = read_file(dir.path()).unwrap();
    let resource = project.resource_by_unique_id(5).unwrap();
    assert_eq!(resource.resource_type, ResourceType::Work);
    assert_eq!(resource.initials.as_deref(), Some("SGL"));
    assert_eq!(resource.availability[0].units, 100.0);

    // the allocation to an unknown task is dropped
    assert_eq!(project.assignments.len(), 1);
    let assignment = &project.assignments[0];
    assert_eq!(project.task(assignment.task).unique_id, Some(10));
    assert_eq!(assignment.work.map(|w| w.value), Some(8.0));
    assert_eq!(assignment.actual_work.map(|w| w.value), Some(2.0));
    assert_eq!(assignment.remaining_work.map(|w| w.value), Some(6.0));
    assert_eq!(assignment.units, Some(100.0));
}

#[test]
fn selected_project_reads_only_its_rows() {
    let dir = export();
    let project = MdbReader::new().project_id(1).read(dir.path()).unwrap();
    assert_eq!(project.properties.name.as_deref(), Some("Beta"));
    assert_eq!(project.tasks.len(), 1);
    assert_eq!(project.tasks[0].name.as_deref(), Some("Partitions"));
    assert!(project.relations.is_empty());
}

#[test]
fn read_all_returns_each_project() {
    let dir = export();
    let projects = MdbReader::new().read_all(dir.path()).unwrap();
    let names: Vec<Option<&str>> = projects.iter().map(|p| p.properties.name.as_deref()).collect();
    assert_eq!(names, vec![Some("Alpha"), Some("Beta")]);
}

#[test]
fn plain_file_is_not_an_export_directory() {
    let dir = export();
    let err = MdbReader::new().read(&dir.path().join("bar.csv")).unwrap_err();
    assert!(err.to_string().contains("not an export directory"));
}
