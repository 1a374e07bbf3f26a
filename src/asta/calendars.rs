use chrono::{NaiveTime, TimeDelta, Weekday};
use std::collections::HashMap;
use tracing::{debug, warn};

use super::AstaReader;
use crate::calendar::{DateRange, DayType, ProjectCalendar, TimeRange, WorkWeek};
use crate::graph::sort_hierarchy;
use crate::row::{Row, Rows};

/// Rows shared by every calendar in a project.
#[derive(Debug, Default)]
pub struct CalendarTables {
    /// Exception type definitions from the EXCEPTIONN table.
    pub exception_types: Rows,
    pub work_patterns: Rows,
    /// Each keyed to its calendar by WORK_PATTERN_ASSIGNMENTID.
    pub work_pattern_assignments: Rows,
    /// Each keyed to its calendar by EXCEPTION_ASSIGNMENTID.
    pub exception_assignments: Rows,
    /// Each keyed to its work pattern by TIME_ENTRYID, in day order.
    pub time_entries: Rows,
}

/// Exception type codes are bit flags: working, overtime and weekend
/// working count as working time, everything else does not.
pub fn exception_day_type(unique_bit_field: i32) -> DayType {
    match unique_bit_field {
        8 | 32 | 128 => DayType::Working,
        _ => DayType::NonWorking,
    }
}

fn group_by<'r>(rows: &'r [Box<dyn Row>], column: &str) -> HashMap<i32, Vec<&'r dyn Row>> {
    let mut map: HashMap<i32, Vec<&dyn Row>> = HashMap::new();
    for row in rows {
        if let Some(id) = row.get_integer(column) {
            map.entry(id).or_default().push(row.as_ref());
        }
    }
    map
}

struct CalendarLookup<'r> {
    exception_types: HashMap<i32, DayType>,
    work_patterns: HashMap<i32, &'r dyn Row>,
    work_pattern_assignments: HashMap<i32, Vec<&'r dyn Row>>,
    exception_assignments: HashMap<i32, Vec<&'r dyn Row>>,
    time_entries: HashMap<i32, Vec<&'r dyn Row>>,
}

impl<'r> CalendarLookup<'r> {
    fn new(tables: &'r CalendarTables) -> Self {
        Self {
            exception_types: tables
                .exception_types
                .iter()
                .filter_map(|row| {
                    let id = row.get_integer("ID")?;
                    Some((id, exception_day_type(row.get_int("UNIQUE_BIT_FIELD"))))
                })
                .collect(),
            work_patterns: tables
                .work_patterns
                .iter()
                .filter_map(|row| Some((row.get_integer("ID")?, row.as_ref())))
                .collect(),
            work_pattern_assignments: group_by(&tables.work_pattern_assignments, "WORK_PATTERN_ASSIGNMENTID"),
            exception_assignments: group_by(&tables.exception_assignments, "EXCEPTION_ASSIGNMENTID"),
            time_entries: group_by(&tables.time_entries, "TIME_ENTRYID"),
        }
    }

    /// Fill `week` from a work pattern's time entries.
    ///
    /// Entries run from Sunday onwards. An entry starting at midnight, or
    /// before the previous entry ended, opens the next day. Only entries whose
    /// exception type is working contribute hours.
    fn apply_work_pattern(&self, week: &mut WorkWeek, pattern_id: i32, default_week: bool) {
        let Some(pattern) = self.work_patterns.get(&pattern_id) else {
            return;
        };
        if !default_week {
            week.name = pattern.get_string("NAME");
        }
        let Some(entries) = self.time_entries.get(&pattern_id) else {
            return;
        };

        for day in week.days.iter_mut() {
            day.day_type = DayType::NonWorking;
        }

        let mut current_day = Weekday::Sat;
        let mut day_open = false;
        let mut previous_end: Option<NaiveTime> = None;
        for entry in entries {
            let start = entry.get_time("START_TIME").unwrap_or(NaiveTime::MIN);
            let end = entry.get_time("END_TIME").unwrap_or(NaiveTime::MIN);

            let wrapped = previous_end.is_some_and(|previous| previous != NaiveTime::MIN && start < previous);
            if start == NaiveTime::MIN || wrapped {
                current_day = current_day.succ();
                week.day_mut(current_day).hours = Some(Vec::new());
                day_open = true;
            }
            previous_end = Some(end);

            let day_type = entry
                .get_integer("EXCEPTION")
                .and_then(|id| self.exception_types.get(&id));
            if day_open && day_type == Some(&DayType::Working) {
                let day = week.day_mut(current_day);
                day.hours.get_or_insert_with(Vec::new).push(TimeRange::new(start, end));
                day.day_type = DayType::Working;
            }
        }
    }
}

impl AstaReader {
    /// Build calendars, parents before children.
    pub fn process_calendars(&mut self, calendars: Rows, tables: &CalendarTables) {
        let lookup = CalendarLookup::new(tables);
        let calendars = sort_hierarchy(
            calendars,
            |row| row.get_integer("ID"),
            |row| row.get_integer("CALENDAR"),
            None,
        );
        for row in &calendars {
            self.process_calendar(row.as_ref(), &lookup);
        }
        debug!(calendars = calendars.len(), "calendars processed");
    }

    fn process_calendar(&mut self, row: &dyn Row, lookup: &CalendarLookup<'_>) {
        let Some(unique_id) = row.get_integer("ID") else {
            warn!("calendar without an ID skipped");
            return;
        };
        let mut calendar = ProjectCalendar::new(unique_id);
        calendar.name = row.get_string("NAME");

        let dominant = row.get_integer("DOMINANT_WORK_PATTERN");
        let mut default_week_set = dominant.is_some_and(|id| lookup.work_patterns.contains_key(&id));
        if let Some(id) = dominant.filter(|_| default_week_set) {
            lookup.apply_work_pattern(&mut calendar.week, id, true);
        }

        for assignment in lookup.work_pattern_assignments.get(&unique_id).into_iter().flatten() {
            let Some(pattern_id) = assignment.get_integer("WORK_PATTERN") else {
                continue;
            };
            if Some(pattern_id) == dominant {
                continue;
            }
            if default_week_set {
                let mut week = WorkWeek::default();
                if let (Some(start), Some(end)) = (assignment.get_date("START_DATE"), assignment.get_date("END_DATE")) {
                    week.range = Some(DateRange::new(start.date(), end.date()));
                }
                lookup.apply_work_pattern(&mut week, pattern_id, false);
                calendar.add_work_week(week);
            } else {
                lookup.apply_work_pattern(&mut calendar.week, pattern_id, true);
                default_week_set = true;
            }
        }

        for exception in lookup.exception_assignments.get(&unique_id).into_iter().flatten() {
            let (Some(start), Some(mut end)) = (exception.get_date("START_DATE"), exception.get_date("END_DATE")) else {
                warn!(calendar = unique_id, "calendar exception without dates skipped");
                continue;
            };
            // ending at midnight means ending with the previous day
            if end.time() == NaiveTime::MIN {
                end = end.checked_sub_signed(TimeDelta::days(1)).unwrap_or(end);
            }
            calendar.add_exception(DateRange::new(start.date(), end.date()), Vec::new());
        }

        calendar.week.add_default_hours();
        calendar.parent_id = row
            .get_integer("CALENDAR")
            .filter(|id| self.project.calendar_by_unique_id(*id).is_some());

        self.project.add_calendar(calendar);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overtime_and_weekend_working_are_working() {
        assert_eq!(exception_day_type(32), DayType::Working);
        assert_eq!(exception_day_type(128), DayType::Working);
        assert_eq!(exception_day_type(16), DayType::NonWorking);
        assert_eq!(exception_day_type(i32::MIN), DayType::NonWorking);
    }
}
