use asta_reader::asta::TaskTables;
use asta_reader::relation::RelationType;
use asta_reader::{AstaReader, MapRow, ProjectFile, Row, Task, Value};
use chrono::{NaiveDate, NaiveDateTime};

fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn row(fields: Vec<(&str, Value)>) -> Box<dyn Row> {
    let mut row = MapRow::new();
    for (name, value) in fields {
        row.set(name, value);
    }
    Box::new(row)
}

fn bar(id: i32, name: &str, start: NaiveDateTime, finish: NaiveDateTime) -> Box<dyn Row> {
    row(vec![
        ("BARID", Value::Integer(id)),
        ("NAME", Value::Text(name.to_string())),
        ("NATURAL_ORDER", Value::Integer(id)),
        ("BAR_START", Value::Timestamp(start)),
        ("BAR_FINISH", Value::Timestamp(finish)),
    ])
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: i32,
    name: &str,
    bar: i32,
    order: i32,
    start: NaiveDateTime,
    finish: NaiveDateTime,
    actual_hours: f64,
    overall: f64,
) -> Box<dyn Row> {
    row(vec![
        ("TASKID", Value::Integer(id)),
        ("NAME", Value::Text(name.to_string())),
        ("BAR", Value::Integer(bar)),
        ("NATURAL_ORDER", Value::Integer(order)),
        ("LINKABLE_START", Value::Timestamp(start)),
        ("LINKABLE_FINISH", Value::Timestamp(finish)),
        ("ACTUAL_DURATION", Value::Double(actual_hours)),
        ("OVERALL_PERCENT_COMPLETE", Value::Double(overall)),
        ("OVERALL_PERCENT_COMPL_WEIGHT", Value::Double(1.0)),
    ])
}

fn project() -> ProjectFile {
    let mut task_a = task(41, "Task A", 1, 1, dt(2024, 1, 8, 8), dt(2024, 1, 8, 17), 4.0, 0.5);
    task_a = task_a.merge(
        &MapRow::new().with("RESUME", Value::Timestamp(dt(2024, 1, 8, 13))),
        "_",
    );

    let tables = TaskTables {
        bars: vec![
            bar(2, "Phase 2", dt(2024, 1, 10, 8), dt(2024, 1, 11, 12)),
            bar(1, "Phase 1", dt(2024, 1, 8, 8), dt(2024, 1, 9, 17)),
        ],
        tasks: vec![
            task(42, "Task B", 1, 2, dt(2024, 1, 9, 8), dt(2024, 1, 9, 17), 8.0, 1.0),
            task_a,
            task(43, "Task C", 2, 1, dt(2024, 1, 10, 8), dt(2024, 1, 10, 17), 8.0, 1.0),
            task(44, "Task D", 2, 2, dt(2024, 1, 11, 8), dt(2024, 1, 11, 12), 4.0, 1.0),
        ],
        completed_sections: vec![row(vec![
            ("ID", Value::Integer(5)),
            ("TASK", Value::Integer(42)),
        ])],
        ..TaskTables::default()
    };

    let mut reader = AstaReader::new();
    reader.process_tasks(tables).unwrap();
    reader
        .process_predecessors(&[row(vec![
            ("ID", Value::Integer(1)),
            ("START_TASK", Value::Integer(5)),
            ("END_TASK", Value::Integer(43)),
            ("LINK_KIND", Value::Integer(1)),
            ("START_LAG_TIME", Value::Double(0.0)),
            ("END_LAG_TIME", Value::Double(3.0)),
        ])])
        .unwrap();
    reader.into_project()
}

fn find<'p>(project: &'p ProjectFile, name: &str) -> &'p Task {
    project.task_by_name(name).unwrap()
}

#[test]
fn bar_becomes_parent_of_tasks_in_natural_order() {
    let project = project();
    let phase = find(&project, "Phase 1");
    let names: Vec<&str> = phase
        .children
        .iter()
        .filter_map(|key| project.task(*key).name.as_deref())
        .collect();
    assert_eq!(names, vec!["Task A", "Task B"]);
}

#[test]
fn partially_complete_leaf_reports_half_done() {
    let project = project();
    let task = find(&project, "Task A");
    assert_eq!(task.duration.map(|d| d.value), Some(8.0));
    assert_eq!(task.actual_duration.map(|d| d.value), Some(4.0));
    assert_eq!(task.percent_complete, Some(50.0));
    assert_eq!(task.actual_start, task.start);
    assert_eq!(task.actual_finish, None);
}

#[test]
fn complete_leaf_takes_its_scheduled_dates_as_actuals() {
    let project = project();
    let task = find(&project, "Task B");
    assert_eq!(task.percent_complete, Some(100.0));
    assert_eq!(task.remaining_duration.map(|d| d.value), Some(0.0));
    assert_eq!(task.actual_start, Some(dt(2024, 1, 9, 8)));
    assert_eq!(task.actual_finish, Some(dt(2024, 1, 9, 17)));
}

#[test]
fn summary_percent_is_duration_weighted() {
    let project = project();
    let phase = find(&project, "Phase 1");
    // 4h + 8h done out of 8h + 8h
    assert_eq!(phase.percent_complete, Some(75.0));
    assert_eq!(phase.actual_duration.map(|d| d.value), Some(12.0));
    assert_eq!(phase.remaining_duration.map(|d| d.value), Some(4.0));
    assert_eq!(phase.overall_percent_complete, Some(75.0));
    assert_eq!(phase.actual_start, Some(dt(2024, 1, 8, 8)));
    assert_eq!(phase.actual_finish, None);
}

#[test]
fn summary_finishes_when_every_child_has() {
    let project = project();
    let phase = find(&project, "Phase 2");
    assert_eq!(phase.actual_finish, Some(dt(2024, 1, 11, 12)));
    assert_eq!(phase.percent_complete, Some(100.0));
}

#[test]
fn completed_section_link_uses_end_lag_against_start() {
    let project = project();
    assert_eq!(project.relations.len(), 1);
    let relation = &project.relations[0];
    assert_eq!(project.task(relation.predecessor).unique_id, Some(42));
    assert_eq!(project.task(relation.successor).unique_id, Some(43));
    assert_eq!(relation.relation_type, RelationType::StartStart);
    assert_eq!(relation.lag.value, -3.0);
}

#[test]
fn milestone_only_summary_averages_leaf_percent() {
    let milestone = |id: i32, completed: bool| {
        row(vec![
            ("MILESTONEID", Value::Integer(id)),
            ("NAME", Value::Text(format!("M{id}"))),
            ("BAR", Value::Integer(1)),
            ("NATURAL_ORDER", Value::Integer(id)),
            ("GIVEN_DATE_TIME", Value::Timestamp(dt(2024, 1, 8, 17))),
            ("COMPLETED", Value::Boolean(completed)),
        ])
    };
    let tables = TaskTables {
        bars: vec![
            bar(1, "Gates", dt(2024, 1, 8, 8), dt(2024, 1, 8, 17)),
            bar(2, "Empty", dt(2024, 1, 8, 8), dt(2024, 1, 8, 17)),
        ],
        milestones: vec![milestone(1, true), milestone(2, false)],
        ..TaskTables::default()
    };

    let mut reader = AstaReader::new();
    reader.process_tasks(tables).unwrap();
    let project = reader.into_project();
    let gates = find(&project, "Gates");
    assert_eq!(gates.percent_complete, Some(50.0));
    // bars without children are dropped
    assert!(project.task_by_name("Empty").is_none());
}
