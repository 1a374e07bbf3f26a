use asta_reader::asta::{CalendarTables, exception_day_type};
use asta_reader::calendar::{DayType, TimeRange};
use asta_reader::{AstaReader, MapRow, ProjectFile, Row, Value};
use chrono::{NaiveDate, NaiveTime, Weekday};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h % 24, 0, 0).unwrap()
}

fn calendar(id: i32, name: &str, dominant: Option<i32>, parent: Option<i32>) -> Box<dyn Row> {
    let mut row = MapRow::new()
        .with("ID", Value::Integer(id))
        .with("NAME", Value::Text(name.to_string()));
    if let Some(dominant) = dominant {
        row.set("DOMINANT_WORK_PATTERN", Value::Integer(dominant));
    }
    if let Some(parent) = parent {
        row.set("CALENDAR", Value::Integer(parent));
    }
    Box::new(row)
}

fn entry(pattern: i32, exception: i32, start: u32, end: u32) -> Box<dyn Row> {
    Box::new(
        MapRow::new()
            .with("TIME_ENTRYID", Value::Integer(pattern))
            .with("EXCEPTION", Value::Integer(exception))
            .with("START_TIME", Value::Time(t(start)))
            .with("END_TIME", Value::Time(t(end))),
    )
}

fn boxed(row: MapRow) -> Box<dyn Row> {
    Box::new(row)
}

const WORKING: i32 = 1;
const NON_WORKING: i32 = 2;

/// Sunday off, Monday to Friday 08:00-12:00 and 13:00-17:00, Saturday off.
fn five_day_entries(pattern: i32) -> Vec<Box<dyn Row>> {
    let mut entries = vec![entry(pattern, NON_WORKING, 0, 0)];
    for _ in 0..5 {
        entries.push(entry(pattern, NON_WORKING, 0, 8));
        entries.push(entry(pattern, WORKING, 8, 12));
        entries.push(entry(pattern, NON_WORKING, 12, 13));
        entries.push(entry(pattern, WORKING, 13, 17));
        entries.push(entry(pattern, NON_WORKING, 17, 24));
    }
    entries.push(entry(pattern, NON_WORKING, 0, 0));
    entries
}

fn tables() -> CalendarTables {
    let mut time_entries = five_day_entries(10);
    time_entries.extend([
        entry(11, WORKING, 0, 6),
        entry(11, NON_WORKING, 6, 22),
        entry(11, WORKING, 22, 24),
        entry(11, NON_WORKING, 0, 0),
        entry(11, WORKING, 8, 17),
        entry(11, WORKING, 7, 9),
    ]);

    CalendarTables {
        exception_types: vec![
            boxed(
                MapRow::new()
                    .with("ID", Value::Integer(WORKING))
                    .with("UNIQUE_BIT_FIELD", Value::Integer(8)),
            ),
            boxed(
                MapRow::new()
                    .with("ID", Value::Integer(NON_WORKING))
                    .with("UNIQUE_BIT_FIELD", Value::Integer(1)),
            ),
        ],
        work_patterns: vec![
            boxed(
                MapRow::new()
                    .with("ID", Value::Integer(10))
                    .with("NAME", Value::Text("Five day".into())),
            ),
            boxed(
                MapRow::new()
                    .with("ID", Value::Integer(11))
                    .with("NAME", Value::Text("Nights".into())),
            ),
        ],
        work_pattern_assignments: vec![boxed(
            MapRow::new()
                .with("WORK_PATTERN_ASSIGNMENTID", Value::Integer(1))
                .with("WORK_PATTERN", Value::Integer(11))
                .with("START_DATE", Value::Timestamp(d(2024, 7, 1).and_time(NaiveTime::MIN)))
                .with("END_DATE", Value::Timestamp(d(2024, 8, 31).and_time(NaiveTime::MIN))),
        )],
        exception_assignments: vec![
            boxed(
                MapRow::new()
                    .with("EXCEPTION_ASSIGNMENTID", Value::Integer(1))
                    .with("START_DATE", Value::Timestamp(d(2024, 12, 25).and_time(NaiveTime::MIN)))
                    .with("END_DATE", Value::Timestamp(d(2024, 12, 26).and_time(NaiveTime::MIN))),
            ),
            // same range again
            boxed(
                MapRow::new()
                    .with("EXCEPTION_ASSIGNMENTID", Value::Integer(1))
                    .with("START_DATE", Value::Timestamp(d(2024, 12, 25).and_time(NaiveTime::MIN)))
                    .with("END_DATE", Value::Timestamp(d(2024, 12, 26).and_time(NaiveTime::MIN))),
            ),
        ],
        time_entries,
    }
}

fn project() -> ProjectFile {
    let mut reader = AstaReader::new();
    reader.process_calendars(
        vec![
            calendar(2, "Site", None, Some(1)),
            calendar(1, "Office", Some(10), None),
        ],
        &tables(),
    );
    reader.into_project()
}

#[test]
fn parents_are_read_before_children() {
    let project = project();
    let ids: Vec<i32> = project.calendars.iter().map(|c| c.unique_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(project.calendar_by_unique_id(2).unwrap().parent_id, Some(1));
}

#[test]
fn dominant_pattern_supplies_the_default_week() {
    let project = project();
    let office = project.calendar_by_unique_id(1).unwrap();
    assert_eq!(office.week.name, None);

    let monday = office.week.day(Weekday::Mon);
    assert_eq!(monday.day_type, DayType::Working);
    assert_eq!(
        monday.hours.as_deref(),
        Some(&[TimeRange::from_hours(8, 12), TimeRange::from_hours(13, 17)][..])
    );
    for weekday in [Weekday::Sat, Weekday::Sun] {
        let day = office.week.day(weekday);
        assert_eq!(day.day_type, DayType::NonWorking);
        assert_eq!(day.hours.as_deref(), Some(&[][..]));
    }
}

#[test]
fn dated_assignments_become_named_work_weeks() {
    let project = project();
    let office = project.calendar_by_unique_id(1).unwrap();
    assert_eq!(office.work_weeks.len(), 1);

    let nights = &office.work_weeks[0];
    assert_eq!(nights.name.as_deref(), Some("Nights"));
    let range = nights.range.unwrap();
    assert_eq!((range.start, range.end), (d(2024, 7, 1), d(2024, 8, 31)));
    assert_eq!(
        nights.day(Weekday::Sun).hours.as_deref(),
        Some(&[TimeRange::from_hours(0, 6), TimeRange::from_hours(22, 24)][..])
    );
    assert_eq!(
        nights.day(Weekday::Mon).hours.as_deref(),
        Some(&[TimeRange::from_hours(8, 17)][..])
    );
    // starting before the previous entry ended opens the next day
    assert_eq!(
        nights.day(Weekday::Tue).hours.as_deref(),
        Some(&[TimeRange::from_hours(7, 9)][..])
    );
    assert_eq!(nights.day(Weekday::Wed).day_type, DayType::NonWorking);
}

#[test]
fn exception_ending_at_midnight_ends_the_day_before() {
    let project = project();
    let office = project.calendar_by_unique_id(1).unwrap();
    assert_eq!(office.exceptions.len(), 1);
    assert_eq!(office.exceptions[0].range.end, d(2024, 12, 25));
    assert!(!office.exceptions[0].is_working());

    let effective = project.effective_calendar(Some(1));
    assert!(!effective.is_working_date(d(2024, 12, 25)));
    assert!(effective.is_working_date(d(2024, 12, 26)));
}

#[test]
fn child_calendar_inherits_parent_days() {
    let project = project();
    let site = project.effective_calendar(Some(2));
    // Monday 2024-01-08 08:00 to 17:00
    let start = d(2024, 1, 8).and_hms_opt(8, 0, 0).unwrap();
    let finish = d(2024, 1, 8).and_hms_opt(17, 0, 0).unwrap();
    assert_eq!(site.work(start, finish), 8.0);
    assert!(!site.is_working_date(d(2024, 1, 13)));
}

#[test]
fn exception_types_classify_by_bit_field() {
    assert_eq!(exception_day_type(8), DayType::Working);
    assert_eq!(exception_day_type(1), DayType::NonWorking);
}

#[test]
fn calendar_without_patterns_keeps_inherited_days() {
    let mut reader = AstaReader::new();
    reader.process_calendars(vec![calendar(7, "Bare", Some(99), None)], &CalendarTables::default());
    let project = reader.into_project();
    let bare = project.calendar_by_unique_id(7).unwrap();
    assert_eq!(bare.week.day(Weekday::Mon).day_type, DayType::Default);
    assert_eq!(bare.week.day(Weekday::Mon).hours, None);
}
