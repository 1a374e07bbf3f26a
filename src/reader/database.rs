//! Reads Asta projects from a table store with the legacy MDB column names.

use std::collections::BTreeMap;
use tracing::debug;

use super::ReadResult;
use crate::asta::{AstaReader, CalendarTables, TaskTables, sort_rows};
use crate::project::ProjectFile;
use crate::row::{MapRow, Row, Rows};

/// A store of named tables.
pub trait DatabaseSource {
    /// Rows of `table` whose `keys` columns hold the given values, with
    /// upper case column names. A missing table yields no rows.
    fn rows(&self, table: &str, keys: &[(&str, i32)]) -> ReadResult<Rows>;
}

const PROJECT_SUMMARY_NAMES: &[(&str, &str)] = &[
    ("STARU", "PROJECT_START"),
    ("ENE", "PROJECT_END"),
    ("DURATIONHOURS", "DURATION"),
];

const BAR_NAMES: &[(&str, &str)] = &[("NAMH", "NAME"), ("STARV", "BAR_START"), ("ENF", "BAR_FINISH")];

const TASK_NAMES: &[(&str, &str)] = &[
    ("NARE", "NAME"),
    ("OVERALL_PERCENV_COMPLETE", "OVERALL_PERCENT_COMPLETE"),
    ("CONSTRAINU", "CONSTRAINT_FLAG"),
    ("CALENDAU", "CALENDAR"),
    ("GIVEN_DURATIONHOURS", "GIVEN_DURATION"),
    ("WBT", "WBS"),
    ("STARZ", "LINKABLE_START"),
    ("ENJ", "LINKABLE_FINISH"),
    ("ACTUAL_DURATIONHOURS", "ACTUAL_DURATION"),
    ("NOTET", "NOTES"),
    ("DURATION_TIMJ_UNIT", "DURATION_TIME_UNIT"),
    ("NATURAO_ORDER", "NATURAL_ORDER"),
];

const EXPANDED_TASK_NAMES: &[(&str, &str)] = &[
    ("NARE", "NAME"),
    ("OVERALL_PERCENV_COMPLETE", "OVERALL_PERCENT_COMPLETE"),
    ("CONSTRAINU", "CONSTRAINT_FLAG"),
    ("CALENDAU", "CALENDAR"),
];

const MILESTONE_NAMES: &[(&str, &str)] = &[
    ("NARE", "NAME"),
    ("OVERALL_PERCENV_COMPLETE", "OVERALL_PERCENT_COMPLETE"),
    ("CONSTRAINU", "CONSTRAINT_FLAG"),
    ("CALENDAU", "CALENDAR"),
    ("WBT", "WBS"),
    ("NATURAO_ORDER", "NATURAL_ORDER"),
];

const WORK_PATTERN_NAMES: &[(&str, &str)] = &[("WORK_PATTERNID", "ID"), ("NAMN", "NAME")];

const CALENDAR_NAMES: &[(&str, &str)] = &[("CALENDARID", "ID"), ("NAMK", "NAME")];

const PERMANENT_RESOURCE_NAMES: &[(&str, &str)] = &[
    ("PERMANENT_RESOURCEID", "ID"),
    ("NASE", "NAME"),
    ("CALENDAV", "CALENDAR"),
];

const CONSUMABLE_RESOURCE_NAMES: &[(&str, &str)] = &[
    ("CONSUMABLE_RESOURCEID", "ID"),
    ("NASE", "NAME"),
    ("CALENDAV", "CALENDAR"),
];

const LINK_NAMES: &[(&str, &str)] = &[
    ("LINKID", "ID"),
    ("START_LAG_TIMEHOURS", "START_LAG_TIME"),
    ("END_LAG_TIMEHOURS", "END_LAG_TIME"),
    ("TYPI", "LINK_KIND"),
];

const ALLOCATION_NAMES: &[(&str, &str)] = &[
    ("PERMANENT_SCHEDUL_ALLOCATIONID", "ID"),
    ("STARZ", "LINKABLE_START"),
    ("ENJ", "LINKABLE_FINISH"),
    ("ALLOCATEE_TO", "ALLOCATED_TO"),
    ("EFFORW", "EFFORT"),
    ("DELAAHOURS", "DELAY"),
    ("ALLOCATIOP_OF", "ALLOCATION_OF"),
];

const PROGRESS_PERIOD_NAMES: &[(&str, &str)] = &[("PROGRESS_PERIODID", "ID")];

const EXCEPTION_NAMES: &[(&str, &str)] = &[("EXCEPTIONNID", "ID")];

const COMPLETED_SECTION_NAMES: &[(&str, &str)] = &[("TASK_COMPLETED_SECTIONID", "ID")];

const SKILL_NAMES: &[(&str, &str)] = &[("PERM_RESOURCE_SKILLID", "ID")];

const EXCEPTION_ASSIGNMENT_NAMES: &[(&str, &str)] = &[("STARU_DATE", "START_DATE"), ("ENE_DATE", "END_DATE")];

const TIME_ENTRY_NAMES: &[(&str, &str)] = &[("EXCEPTIOP", "EXCEPTION")];

const PROJECT_KEY: &str = "PROJID";

/// Copy `row` with legacy column names replaced.
fn rename(row: &dyn Row, names: &[(&str, &str)]) -> Box<dyn Row> {
    let mut renamed = MapRow::new();
    for (name, value) in row.entries() {
        let name = names
            .iter()
            .find(|(legacy, _)| *legacy == name)
            .map_or(name, |(_, current)| *current);
        renamed.set(name, value.clone());
    }
    Box::new(renamed)
}

pub struct DatabaseReader<S> {
    source: S,
    project_id: i32,
}

impl<S: DatabaseSource> DatabaseReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            project_id: 0,
        }
    }

    pub fn project_id(mut self, project_id: i32) -> Self {
        self.project_id = project_id;
        self
    }

    /// Project IDs and their short names.
    pub fn list_projects(&self) -> ReadResult<BTreeMap<i32, Option<String>>> {
        let rows = self.table("project_summary", None, PROJECT_SUMMARY_NAMES)?;
        Ok(rows
            .iter()
            .filter_map(|row| Some((row.get_integer(PROJECT_KEY)?, row.get_string("SHORT_NAME"))))
            .collect())
    }

    pub fn read_all(&self) -> ReadResult<Vec<ProjectFile>> {
        self.list_projects()?
            .into_keys()
            .map(|id| self.read_project(id))
            .collect()
    }

    pub fn read(&self) -> ReadResult<ProjectFile> {
        self.read_project(self.project_id)
    }

    fn table(&self, name: &str, project_id: Option<i32>, names: &[(&str, &str)]) -> ReadResult<Rows> {
        let keys: Vec<(&str, i32)> = project_id.map(|id| (PROJECT_KEY, id)).into_iter().collect();
        let rows = self.source.rows(name, &keys)?;
        Ok(rows.iter().map(|row| rename(row.as_ref(), names)).collect())
    }

    fn read_project(&self, project_id: i32) -> ReadResult<ProjectFile> {
        let project = Some(project_id);
        let mut reader = AstaReader::new();

        let schema = self.table("dodschem", None, &[])?;
        let summary = self.table("project_summary", project, PROJECT_SUMMARY_NAMES)?;
        let progress_periods = self.table("progress_period", project, PROGRESS_PERIOD_NAMES)?;
        let user_settings = self.table("userr", project, &[])?;
        reader.process_project_properties(
            schema.first().and_then(|row| row.get_integer("SCHVER")),
            summary.first().map(|row| row.as_ref()),
            user_settings.first().map(|row| row.as_ref()),
            &progress_periods,
        )?;

        let mut exception_assignments = self.table("exception_assignment", None, EXCEPTION_ASSIGNMENT_NAMES)?;
        sort_rows(&mut exception_assignments, &["EXCEPTION_ASSIGNMENTID", "ORDF"]);
        let mut time_entries = self.table("time_entry", None, TIME_ENTRY_NAMES)?;
        sort_rows(&mut time_entries, &["TIME_ENTRYID", "ORDF"]);
        let calendar_tables = CalendarTables {
            exception_types: self.table("exceptionn", None, EXCEPTION_NAMES)?,
            work_patterns: self.table("work_pattern", None, WORK_PATTERN_NAMES)?,
            work_pattern_assignments: self.table("work_pattern_assignment", None, &[])?,
            exception_assignments,
            time_entries,
        };
        reader.process_calendars(self.table("calendar", project, CALENDAR_NAMES)?, &calendar_tables);

        let mut permanent = self.table("permanent_resource", project, PERMANENT_RESOURCE_NAMES)?;
        let mut consumable = self.table("consumable_resource", project, CONSUMABLE_RESOURCE_NAMES)?;
        sort_rows(&mut permanent, &["ID"]);
        sort_rows(&mut consumable, &["ID"]);
        reader.process_resources(&permanent, &consumable);

        reader.process_tasks(TaskTables {
            bars: self.table("bar", project, BAR_NAMES)?,
            expanded_tasks: self.table("expanded_task", project, EXPANDED_TASK_NAMES)?,
            tasks: self.table("task", project, TASK_NAMES)?,
            milestones: self.table("milestone", project, MILESTONE_NAMES)?,
            hammocks: self.table("hammock_task", project, &[])?,
            completed_sections: self.table("task_completed_section", project, COMPLETED_SECTION_NAMES)?,
        })?;

        let mut links = self.table("link", project, LINK_NAMES)?;
        sort_rows(&mut links, &["ID"]);
        reader.process_predecessors(&links)?;

        let mut allocations = self.table("permanent_schedul_allocation", project, ALLOCATION_NAMES)?;
        sort_rows(&mut allocations, &["ID"]);
        let skills = self.table("perm_resource_skill", project, SKILL_NAMES)?;
        reader.process_assignments(&allocations, &skills)?;

        debug!(project = project_id, "database project read");
        Ok(reader.into_project())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Value;

    #[test]
    fn legacy_names_are_replaced() {
        let row = MapRow::new()
            .with("LINKID", Value::Integer(4))
            .with("TYPI", Value::Integer(2))
            .with("PROJID", Value::Integer(0));
        let renamed = rename(&row, LINK_NAMES);
        assert_eq!(renamed.get_integer("ID"), Some(4));
        assert_eq!(renamed.get_integer("LINK_KIND"), Some(2));
        assert_eq!(renamed.get_integer("PROJID"), Some(0));
        assert!(!renamed.contains("LINKID"));
    }
}
