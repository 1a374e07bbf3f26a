use asta_reader::asta::{CalendarTables, TaskTables, build_row_hierarchy};
use asta_reader::task::{ConstraintType, MilestoneType};
use asta_reader::{AstaReader, MapRow, ProjectFile, Row, Task, Value};
use chrono::{NaiveDate, NaiveDateTime};

fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn row(fields: &[(&str, Value)]) -> Box<dyn Row> {
    let mut row = MapRow::new();
    for (name, value) in fields {
        row.set(*name, value.clone());
    }
    Box::new(row)
}

fn int(v: i32) -> Value {
    Value::Integer(v)
}

fn text(v: &str) -> Value {
    Value::Text(v.to_string())
}

fn ts(v: NaiveDateTime) -> Value {
    Value::Timestamp(v)
}

fn bar(id: i32, name: &str, expanded_task: Option<i32>, order: i32) -> Box<dyn Row> {
    let mut fields = vec![
        ("BARID", int(id)),
        ("NAME", text(name)),
        ("NATURAL_ORDER", int(order)),
        ("BAR_START", ts(dt(2024, 1, 8, 8))),
        ("BAR_FINISH", ts(dt(2024, 1, 9, 17))),
    ];
    if let Some(expanded_task) = expanded_task {
        fields.push(("EXPANDED_TASK", int(expanded_task)));
    }
    row(&fields)
}

/// Project bar 1 with phases 2 and 3 beneath it, plus a blank and a
/// "Displaced Items" bar at the top level.
fn tables() -> TaskTables {
    TaskTables {
        bars: vec![
            bar(3, "Phase B", Some(100), 2),
            bar(1, "Project", None, 1),
            bar(2, "Phase A", Some(100), 1),
            bar(4, "", None, 3),
            bar(5, "Displaced Items", None, 4),
        ],
        expanded_tasks: vec![row(&[
            ("EXPANDED_TASKID", int(100)),
            ("BAR", int(1)),
            ("NAME", text("Project")),
        ])],
        tasks: vec![
            row(&[
                ("TASKID", int(11)),
                ("NAME", text("Build")),
                ("BAR", int(2)),
                ("NATURAL_ORDER", int(2)),
                ("LINKABLE_START", ts(dt(2024, 1, 9, 8))),
                ("LINKABLE_FINISH", ts(dt(2024, 1, 9, 17))),
                ("CONSTRAINT_FLAG", int(0)),
                ("PLACEMENT", int(1)),
                ("START_CONSTRAINT_DATE", ts(dt(2024, 1, 9, 8))),
            ]),
            row(&[
                ("TASKID", int(10)),
                ("NAME", text("Design")),
                ("BAR", int(2)),
                ("NATURAL_ORDER", int(1)),
                ("LINKABLE_START", ts(dt(2024, 1, 8, 8))),
                ("RESUME", ts(dt(2024, 1, 8, 13))),
                ("LINKABLE_FINISH", ts(dt(2024, 1, 8, 17))),
                ("ACTUAL_DURATION", Value::Double(4.0)),
                ("NOTES", text("first|@|||second")),
            ]),
            row(&[
                ("TASKID", int(12)),
                ("NAME", text("Lost")),
                ("BAR", int(5)),
                ("NATURAL_ORDER", int(1)),
            ]),
        ],
        milestones: vec![row(&[
            ("MILESTONEID", int(20)),
            ("NAME", text("Done")),
            ("BAR", int(3)),
            ("NATURAL_ORDER", int(1)),
            ("GIVEN_DATE_TIME", ts(dt(2024, 1, 10, 17))),
            ("COMPLETED", Value::Boolean(true)),
            ("CONSTRAINT_FLAG", int(0)),
            ("PLACEMENT", int(1)),
            ("START_CONSTRAINT_DATE", ts(dt(2024, 1, 10, 8))),
        ])],
        hammocks: Vec::new(),
        completed_sections: vec![row(&[("ID", int(500)), ("TASK", int(10))])],
    }
}

fn read(links: Vec<Box<dyn Row>>) -> ProjectFile {
    let mut reader = AstaReader::new();
    reader.process_tasks(tables()).unwrap();
    reader.process_predecessors(&links).unwrap();
    reader.into_project()
}

fn task<'p>(project: &'p ProjectFile, unique_id: i32) -> &'p Task {
    project.task_by_unique_id(unique_id).unwrap()
}

#[test]
fn single_top_level_bar_is_elided_and_placeholders_pruned() {
    let project = read(Vec::new());
    let names: Vec<Option<&str>> = project
        .child_tasks
        .iter()
        .map(|key| project.task(*key).name.as_deref())
        .collect();
    assert_eq!(names, vec![Some("Phase A"), Some("Done")]);
    assert!(project.task_by_name("Lost").is_none());
    assert!(project.task_by_name("Project").is_none());
}

#[test]
fn leaves_are_ordered_and_numbered_in_outline_order() {
    let project = read(Vec::new());
    let phase = task(&project, 2);
    assert_eq!(phase.id, Some(1));
    assert_eq!(phase.outline_level, 1);

    let children: Vec<&Task> = phase.children.iter().map(|key| project.task(*key)).collect();
    assert_eq!(children[0].name.as_deref(), Some("Design"));
    assert_eq!(children[0].id, Some(2));
    assert_eq!(children[0].outline_level, 2);
    assert_eq!(children[0].bar_name.as_deref(), Some("Phase A"));
    assert_eq!(children[1].name.as_deref(), Some("Build"));
    assert_eq!(children[1].id, Some(3));
}

#[test]
fn bar_with_single_milestone_becomes_the_milestone() {
    let project = read(Vec::new());
    let done = task(&project, 20);
    assert!(done.milestone);
    assert_eq!(done.id, Some(4));
    assert_eq!(done.bar_name.as_deref(), Some("Phase B"));
    assert_eq!(done.milestone_type, Some(MilestoneType::Finish));
    assert_eq!(done.percent_complete, Some(100.0));
    assert_eq!(done.actual_finish, Some(dt(2024, 1, 10, 17)));
    // no predecessors, so placement resolves to start no earlier than
    assert_eq!(done.constraint_type, ConstraintType::StartNoEarlierThan);
    assert_eq!(done.constraint_date, Some(dt(2024, 1, 10, 8)));
}

#[test]
fn durations_are_rebuilt_from_dates() {
    let project = read(Vec::new());
    let design = task(&project, 10);
    assert_eq!(design.remaining_duration.map(|d| d.value), Some(4.0));
    assert_eq!(design.duration.map(|d| d.value), Some(8.0));
    assert_eq!(design.percent_complete, Some(50.0));
    assert_eq!(design.actual_start, Some(dt(2024, 1, 8, 8)));
    assert_eq!(design.notes.as_deref(), Some("first\nsecond"));

    let phase = task(&project, 2);
    assert_eq!(phase.duration.map(|d| d.value), Some(16.0));
}

#[test]
fn summary_rolls_up_progress_and_dates() {
    let project = read(Vec::new());
    let phase = task(&project, 2);
    assert_eq!(phase.percent_complete, Some(25.0));
    assert_eq!(phase.actual_duration.map(|d| d.value), Some(4.0));
    assert_eq!(phase.remaining_duration.map(|d| d.value), Some(12.0));
    assert_eq!(phase.actual_start, Some(dt(2024, 1, 8, 8)));
    assert_eq!(phase.actual_finish, None);
}

#[test]
fn default_calendar_is_created_when_no_task_names_one() {
    let project = read(Vec::new());
    let calendar = project.default_calendar().unwrap();
    assert_eq!(calendar.name.as_deref(), Some("Standard"));
}

#[test]
fn link_through_completed_section_resolves_to_its_task() {
    let project = read(vec![row(&[
        ("ID", int(1)),
        ("START_TASK", int(500)),
        ("END_TASK", int(11)),
        ("LINK_KIND", int(0)),
        ("END_LAG_TIME", Value::Double(3.0)),
    ])]);

    assert_eq!(project.relations.len(), 1);
    let relation = &project.relations[0];
    assert_eq!(project.task(relation.predecessor).unique_id, Some(10));
    assert_eq!(project.task(relation.successor).unique_id, Some(11));
    assert_eq!(relation.lag.value, -3.0);

    let build = task(&project, 11);
    assert_eq!(build.constraint_type, ConstraintType::AsLateAsPossible);
    assert_eq!(build.constraint_date, None);
}

#[test]
fn links_to_unknown_tasks_are_skipped() {
    let project = read(vec![row(&[
        ("ID", int(2)),
        ("START_TASK", int(999)),
        ("END_TASK", int(11)),
    ])]);
    assert!(project.relations.is_empty());
    assert_eq!(task(&project, 11).constraint_type, ConstraintType::StartNoEarlierThan);
}

#[test]
fn row_hierarchy_nests_bars_under_expanded_tasks() {
    let TaskTables {
        bars,
        expanded_tasks,
        tasks,
        milestones,
        hammocks,
        ..
    } = tables();
    let roots = build_row_hierarchy(bars, expanded_tasks, tasks, milestones, hammocks);
    let ids: Vec<Option<i32>> = roots.iter().map(|node| node.row.get_integer("BARID")).collect();
    assert_eq!(ids, vec![Some(2), Some(3)]);
    assert_eq!(roots[0].children.len(), 2);
    assert_eq!(roots[0].children[0].row.get_integer("TASKID"), Some(10));
}

#[test]
fn colliding_expanded_task_fields_are_prefixed() {
    let mut tables = tables();
    tables.bars.retain(|row| row.get_integer("BARID") != Some(4));
    tables.bars.push(bar(4, "Extra", None, 3));
    tables.tasks.push(row(&[("TASKID", int(13)), ("BAR", int(4)), ("NATURAL_ORDER", int(1))]));

    let roots = build_row_hierarchy(
        tables.bars,
        tables.expanded_tasks,
        tables.tasks,
        tables.milestones,
        tables.hammocks,
    );
    assert_eq!(roots.len(), 2);
    let project = &roots[0].row;
    assert_eq!(project.get_integer("BARID"), Some(1));
    assert_eq!(project.get_string("NAME").as_deref(), Some("Project"));
    assert_eq!(project.get_string("_NAME").as_deref(), Some("Project"));
    assert_eq!(project.get_integer("EXPANDED_TASKID"), Some(100));
    assert_eq!(project.get_integer("_BAR"), None);
    assert_eq!(project.get_integer("BAR"), Some(1));
}

#[test]
fn bar_holding_only_hammocks_produces_no_task() {
    let mut tables = tables();
    tables.bars.push(bar(6, "Hammocks", Some(100), 3));
    tables.hammocks.push(row(&[
        ("HAMMOCK_TASKID", int(30)),
        ("BAR", int(6)),
        ("NATURAL_ORDER", int(1)),
    ]));

    let mut reader = AstaReader::new();
    reader.process_tasks(tables).unwrap();
    let project = reader.into_project();
    assert!(project.task_by_name("Hammocks").is_none());
    assert_eq!(project.child_tasks.len(), 2);
}

fn set_calendar(rows: &mut [Box<dyn Row>], id_column: &str, id: i32, calendar: i32) {
    for slot in rows.iter_mut() {
        if slot.get_integer(id_column) == Some(id) {
            let mut updated = MapRow::new();
            for (name, value) in slot.entries() {
                updated.set(name, value.clone());
            }
            updated.set("CALENDAR", int(calendar));
            *slot = Box::new(updated);
        }
    }
}

#[test]
fn bar_without_expanded_calendar_takes_its_first_child_calendar() {
    let mut tables = tables();
    // a plain CALENDAR on the bar row is not the bar's own calendar
    set_calendar(&mut tables.bars, "BARID", 2, 3);
    set_calendar(&mut tables.tasks, "TASKID", 10, 2);
    set_calendar(&mut tables.tasks, "TASKID", 11, 1);
    set_calendar(&mut tables.milestones, "MILESTONEID", 20, 1);
    tables.tasks.push(row(&[
        ("TASKID", int(13)),
        ("NAME", text("Inspect")),
        ("BAR", int(2)),
        ("NATURAL_ORDER", int(3)),
        ("CALENDAR", int(1)),
    ]));

    let calendar = |id: i32, name: &str| row(&[("ID", int(id)), ("NAME", text(name))]);
    let mut reader = AstaReader::new();
    reader.process_calendars(
        vec![calendar(1, "Office"), calendar(2, "Site"), calendar(3, "Night")],
        &CalendarTables::default(),
    );
    reader.process_tasks(tables).unwrap();
    let project = reader.into_project();

    assert_eq!(project.properties.default_calendar_id, Some(1));
    assert_eq!(task(&project, 2).calendar_id, Some(2));
    assert_eq!(task(&project, 10).calendar_id, Some(2));
    assert_eq!(task(&project, 13).calendar_id, None);
}

#[test]
fn huge_actual_duration_leaves_finish_unknown() {
    let tables = TaskTables {
        bars: vec![bar(1, "Works", None, 1)],
        tasks: vec![row(&[
            ("TASKID", int(10)),
            ("NAME", text("Forever")),
            ("BAR", int(1)),
            ("NATURAL_ORDER", int(1)),
            ("EARLY_START_DATE", ts(dt(2024, 1, 8, 8))),
            ("ACTUAL_DURATION", Value::Double(1.0e9)),
        ])],
        ..TaskTables::default()
    };

    let mut reader = AstaReader::new();
    reader.process_tasks(tables).unwrap();
    let project = reader.into_project();
    let forever = project.task_by_name("Forever").unwrap();
    assert_eq!(forever.early_start, Some(dt(2024, 1, 8, 8)));
    assert_eq!(forever.early_finish, None);
    assert_eq!(forever.actual_duration.map(|d| d.value), Some(1.0e9));
}
