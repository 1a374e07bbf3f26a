#![cfg(feature = "sqlite")]

use asta_reader::custom_field::CustomValue;
use asta_reader::resource::ResourceType;
use asta_reader::{ProjectFile, ProjectReader, SqliteReader, read_file};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

const NON_WORKING_DAY: &str = "1,0,1,2,0,0";
const WORKING_DAY: &str = "1,0,3,2,0,80000,1,80000,170000,2,170000,0";

fn shifts() -> String {
    let mut days = vec![NON_WORKING_DAY];
    days.extend([WORKING_DAY; 5]);
    days.push(NON_WORKING_DAY);
    format!("0,{}", days.join(","))
}

const SCHEMA: &str = "
create table dodschem (schver integer);
create table project_summary (projid integer, short_name text, project_start text);
create table progress_period (id integer, projid integer, report_date text);
create table userr (projid integer, current_progress_period integer, current_baseline_id integer);
create table exceptionn (id integer, unique_bit_field integer);
create table work_pattern (id integer, name text, shifts text);
create table calendar (id integer, projid integer, name text, dominant_work_pattern integer,
    calendar integer, work_patterns text, exceptions text);
create table permanent_resource (id integer, projid integer, name text, availability real, calendar integer);
create table consumable_resource (id integer, projid integer, name text, availability real, measurement text);
create table bar (id integer, projid integer, name text, expanded_task integer, natural_order integer,
    bar_start text, bar_finish text);
create table expanded_task (id integer, projid integer, bar integer, name text);
create table task (id integer, projid integer, name text, bar integer, natural_order integer,
    linkable_start text, linkable_finish text, calendar integer, actual_duration text);
create table milestone (id integer, projid integer, name text, bar integer, natural_order integer,
    given_date_time text, completed integer);
create table hammock_task (id integer, projid integer, bar integer, natural_order integer);
create table task_completed_section (id integer, projid integer, task integer);
create table link (id integer, projid integer, start_task integer, end_task integer, link_kind integer,
    start_lag_time text, end_lag_time text);
create table permanent_schedul_allocation (id integer, projid integer, allocated_to integer,
    allocation_of integer, effort real, percent_complete real, given_allocation real);
create table perm_resource_skill (id integer, projid integer, player integer);

insert into dodschem values (9006);
insert into project_summary values (0, 'Main', '2024-01-08 08:00:00');
insert into project_summary values (1, 'Main baseline', '2024-01-01 08:00:00');
insert into progress_period values (1, 0, '2024-01-12 17:00:00');
insert into progress_period values (2, 0, '2024-01-19 17:00:00');
insert into userr values (0, 1, 5);
insert into exceptionn values (1, 8);
insert into exceptionn values (2, 1);
insert into calendar values (1, 0, 'Standard', 10, null, null, '1,2460670 0,2460671 0');
insert into permanent_resource values (5, 0, 'Site Gang Leader', 1, 1);
insert into consumable_resource values (6, 0, 'Concrete', 2, 'm3');
insert into bar values (1, 0, 'Groundworks', null, 1, '2024-01-08 08:00:00', '2024-01-09 17:00:00');
insert into bar values (2, 0, 'Frame', null, 2, '2024-01-10 08:00:00', '2024-01-10 17:00:00');
insert into bar values (3, 1, 'Groundworks', null, 1, '2024-01-01 08:00:00', '2024-01-01 17:00:00');
insert into task values (10, 0, 'Excavate', 1, 1, '2024-01-08 08:00:00', '2024-01-08 17:00:00', 1, '1,0,0');
insert into task values (11, 0, 'Foundations', 1, 2, '2024-01-09 08:00:00', '2024-01-09 17:00:00', 1, '1,0,0');
insert into task values (12, 0, 'Erect', 2, 1, '2024-01-10 08:00:00', '2024-01-10 17:00:00', 1, '1,0,0');
insert into task values (10, 1, 'Excavate', 3, 1, '2024-01-01 08:00:00', '2024-01-01 17:00:00', null, null);
insert into milestone values (20, 0, 'Handover', 2, 2, '2024-01-10 17:00:00', 0);
insert into link values (1, 0, 10, 11, 0, '1,0,0', '1,0,2');
insert into perm_resource_skill values (7, 0, 5);
insert into permanent_schedul_allocation values (30, 0, 10, 7, 28800, 0.5, 1);
";

const BASELINE: &str = "
create table baseline_summary (projid integer, baseline_id integer, baseline_project_id integer);
insert into baseline_summary values (0, 5, 1);
";

const FIELDS: &str = "
create table udf_defn (udf_id integer, obj_type integer, data_type integer, udf_name text);
create table udf_data (udf_id integer, obj_id integer, data_as_note text, data_as_number integer, data_as_date text);
create table code_library (id integer, projid integer, name text);
create table code_library_entry (id integer, projid integer, code_library integer, code_library_entry integer,
    short_name text, name text);
create table code_library_assignabl_codes (projid integer, codes integer, assigned_to integer);

insert into udf_defn values (100, 21, 9, 'Zone');
insert into udf_defn values (101, 62, 6, 'Grade');
insert into udf_defn values (102, 22, 13, 'Signed off');
insert into udf_data values (100, 10, 'North', null, null);
insert into udf_data values (101, 5, null, 3, null);
insert into udf_data values (102, 20, null, null, '2024-01-11 09:00:00');
insert into code_library values (1, 0, 'Area');
insert into code_library_entry values (2, 0, 1, 1, 'N1', 'North one');
insert into code_library_entry values (1, 0, 1, null, 'N', 'North');
insert into code_library_assignabl_codes values (0, 11, 2);
";

fn connection(batches: &[&str]) -> Connection {
    let mut sql = SCHEMA.to_string();
    sql.push_str(&format!(
        "insert into work_pattern values (10, 'Five day', '{}');",
        shifts()
    ));
    let connection = Connection::open_in_memory().unwrap();
    connection.execute_batch(&sql).unwrap();
    for batch in batches {
        connection.execute_batch(batch).unwrap();
    }
    connection
}

fn read(batches: &[&str]) -> ProjectFile {
    SqliteReader::new().read_connection(&connection(batches)).unwrap()
}

fn database_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("project.pp");
    let source = connection(&[BASELINE]);
    source
        .execute("vacuum into ?1", [path.to_string_lossy().into_owned()])
        .unwrap();
    path
}

#[test]
fn project_properties_follow_the_current_progress_period() {
    let project = read(&[]);
    assert_eq!(project.properties.name.as_deref(), Some("Main"));
    assert_eq!(project.properties.application_version, Some(9006));
    assert_eq!(project.properties.status_date, Some(dt(2024, 1, 12, 17)));
}

#[test]
fn packed_shifts_and_exceptions_build_the_calendar() {
    let project = read(&[]);
    let calendar = project.effective_calendar(Some(1));
    assert_eq!(calendar.work(dt(2024, 1, 8, 8), dt(2024, 1, 8, 17)), 9.0);
    assert!(!calendar.is_working_date(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()));
    assert!(!calendar.is_working_date(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()));
    assert!(calendar.is_working_date(NaiveDate::from_ymd_opt(2024, 12, 24).unwrap()));

    // the most used calendar becomes the project default
    assert_eq!(project.properties.default_calendar_id, Some(1));
    let excavate = project.task_by_unique_id(10).unwrap();
    assert_eq!(excavate.calendar_id, None);
    assert_eq!(excavate.duration.map(|d| d.value), Some(9.0));
}

#[test]
fn packed_durations_give_link_lag() {
    let project = read(&[]);
    assert_eq!(project.relations.len(), 1);
    assert_eq!(project.relations[0].lag.value, -2.0);
}

#[test]
fn resources_get_derived_calendars() {
    let project = read(&[]);
    let gang = project.resource_by_unique_id(5).unwrap();
    let derived = project.calendar_by_unique_id(gang.calendar_id.unwrap()).unwrap();
    assert_eq!(derived.name.as_deref(), Some("Site Gang Leader"));
    assert_eq!(derived.parent_id, Some(1));

    let concrete = project.resource_by_unique_id(6).unwrap();
    assert_eq!(concrete.resource_type, ResourceType::Material);
    assert_eq!(concrete.unit_of_measure.as_deref(), Some("m3"));
    assert_eq!(concrete.availability[0].units, 200.0);
    assert_eq!(concrete.calendar_id, None);

    let assignment = &project.assignments[0];
    assert_eq!(assignment.resource_unique_id, 5);
    assert_eq!(assignment.actual_work.map(|w| w.value), Some(4.0));
}

#[test]
fn missing_optional_tables_are_skipped() {
    let project = read(&[]);
    assert!(project.user_defined_fields.is_empty());
    assert!(project.activity_codes.is_empty());
    assert_eq!(project.task_by_unique_id(10).unwrap().baseline_start, None);
}

#[test]
fn user_defined_fields_attach_to_their_objects() {
    let project = read(&[FIELDS]);
    assert_eq!(project.user_defined_fields.len(), 3);
    assert_eq!(
        project.task_by_unique_id(10).unwrap().custom_fields.get(&100),
        Some(&CustomValue::Text("North".to_string()))
    );
    assert_eq!(
        project.resource_by_unique_id(5).unwrap().custom_fields.get(&101),
        Some(&CustomValue::Integer(3))
    );
    assert_eq!(
        project.task_by_unique_id(20).unwrap().custom_fields.get(&102),
        Some(&CustomValue::Date(dt(2024, 1, 11, 9)))
    );
}

#[test]
fn code_library_entries_form_a_value_hierarchy() {
    let project = read(&[FIELDS]);
    let area = &project.activity_codes[0];
    assert_eq!(area.name.as_deref(), Some("Area"));
    let names: Vec<Option<&str>> = area.values.iter().map(|v| v.name.as_deref()).collect();
    assert_eq!(names, vec![Some("N"), Some("N1")]);
    assert_eq!(area.value(2).unwrap().parent_unique_id, Some(1));
    assert_eq!(area.value(2).unwrap().description.as_deref(), Some("North one"));

    assert_eq!(project.task_by_unique_id(11).unwrap().activity_code_values, vec![2]);
}

#[test]
fn current_baseline_is_applied() {
    let project = read(&[BASELINE]);
    let excavate = project.task_by_unique_id(10).unwrap();
    assert_eq!(excavate.baseline_start, Some(dt(2024, 1, 1, 8)));
    assert_eq!(excavate.baseline_finish, Some(dt(2024, 1, 1, 17)));
    assert_eq!(project.task_by_unique_id(11).unwrap().baseline_start, None);
}

#[test]
fn file_projects_are_listed_and_read() {
    let dir = TempDir::new().unwrap();
    let path = database_file(&dir);
    let projects = SqliteReader::new().list_projects(&path).unwrap();
    assert_eq!(projects.get(&0).cloned().flatten().as_deref(), Some("Main"));
    assert_eq!(projects.get(&1).cloned().flatten().as_deref(), Some("Main baseline"));

    let project = read_file(&path).unwrap();
    assert_eq!(project.properties.name.as_deref(), Some("Main"));

    let all = SqliteReader::new().read_all(&path).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].tasks.len(), 1);
    assert_eq!(all[1].tasks[0].name.as_deref(), Some("Excavate"));
}
