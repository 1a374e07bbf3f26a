//! Maps Asta table rows onto a [`ProjectFile`].
//!
//! The front-ends fetch rows from their own storage and hand them to an
//! [`AstaReader`] in a fixed order: project properties, calendars, resources,
//! tasks, predecessors, assignments, then user defined fields and code libraries
//! where the source has them.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::calendar::{EffectiveCalendar, ProjectCalendar};
use crate::duration::Duration;
use crate::project::ProjectFile;
use crate::reader::ReadResult;
use crate::resource::{self, Availability, Resource, ResourceAssignment, ResourceType};
use crate::row::{Row, Rows};
use crate::task::TaskKey;

mod calendars;
mod fields;
mod hierarchy;
mod relations;
mod rollup;

pub use calendars::{CalendarTables, exception_day_type};
pub use hierarchy::{TaskTables, build_row_hierarchy};
pub use relations::link_lag;

/// Accumulates a project from Asta rows. One instance per read.
#[derive(Debug, Default)]
pub struct AstaReader {
    project: ProjectFile,
    weights: HashMap<TaskKey, Option<f64>>,
    deferred_constraint_type: HashSet<TaskKey>,
    bar_map: HashMap<i32, TaskKey>,
    task_map: HashMap<i32, TaskKey>,
    milestone_map: HashMap<i32, TaskKey>,
    expanded_task_map: HashMap<i32, TaskKey>,
    completed_section_map: HashMap<i32, TaskKey>,
}

impl AstaReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(&self) -> &ProjectFile {
        &self.project
    }

    pub fn into_project(self) -> ProjectFile {
        self.project
    }

    pub fn process_project_properties(
        &mut self,
        schema_version: Option<i32>,
        project_summary: Option<&dyn Row>,
        user_settings: Option<&dyn Row>,
        progress_periods: &[Box<dyn Row>],
    ) -> ReadResult<()> {
        let properties = &mut self.project.properties;
        properties.application_version = schema_version;

        if let Some(row) = project_summary {
            properties.duration = Some(row.get_duration("DURATION")?);
            properties.start = row.get_date("PROJECT_START");
            properties.finish = row.get_date("PROJECT_END");
            properties.name = row.get_string("SHORT_NAME");
            properties.author = row.get_string("PROJECT_BY");
            properties.last_saved = row.get_date("LAST_EDITED_DATE");
        }

        let current_period = user_settings.and_then(|row| row.get_integer("CURRENT_PROGRESS_PERIOD"));
        let period = match current_period {
            Some(id) => progress_periods
                .iter()
                .find(|row| row.get_integer("ID") == Some(id)),
            None => progress_periods
                .iter()
                .max_by_key(|row| row.get_integer("ID")),
        };
        if let Some(period) = period {
            properties.status_date = period.get_date("REPORT_DATE");
        }
        Ok(())
    }

    /// Permanent resources become work resources, consumables become material
    /// resources. Each gets a calendar derived from its base calendar.
    pub fn process_resources(&mut self, permanent_rows: &[Box<dyn Row>], consumable_rows: &[Box<dyn Row>]) {
        for row in permanent_rows {
            let Some(unique_id) = row.get_integer("ID") else {
                warn!("permanent resource without an ID skipped");
                continue;
            };
            let name = row.get_string("NAME");
            let mut resource = Resource {
                unique_id,
                resource_type: ResourceType::Work,
                email: row.get_string("EMAIL_ADDRESS"),
                initials: name.as_deref().and_then(resource::initials),
                name,
                generic: row.get_boolean("CREATED_AS_FOLDER"),
                ..Resource::default()
            };
            resource.availability.push(Availability {
                from: None,
                to: None,
                units: row.get_double("AVAILABILITY").unwrap_or(0.0) * 100.0,
            });
            resource.calendar_id = self.derive_resource_calendar(row.get_integer("CALENDAR"), resource.name.as_deref());
            self.project.add_resource(resource);
        }

        for row in consumable_rows {
            let Some(unique_id) = row.get_integer("ID") else {
                warn!("consumable resource without an ID skipped");
                continue;
            };
            let name = row.get_string("NAME");
            let mut resource = Resource {
                unique_id,
                resource_type: ResourceType::Material,
                initials: name.as_deref().and_then(resource::initials),
                name,
                generic: row.get_boolean("CREATED_AS_FOLDER"),
                unit_of_measure: row.get_string("MEASUREMENT"),
                standard_rate: row.get_double("COST_PER_USEDEFAULTSAMOUNT"),
                ..Resource::default()
            };
            resource.availability.push(Availability {
                from: row.get_date("AVAILABLE_FROM"),
                to: row.get_date("AVAILABLE_TO"),
                units: row.get_double("AVAILABILITY").unwrap_or(0.0) * 100.0,
            });
            resource.calendar_id = self.derive_resource_calendar(row.get_integer("CALENDAR"), resource.name.as_deref());
            self.project.add_resource(resource);
        }

        debug!(
            permanent = permanent_rows.len(),
            consumable = consumable_rows.len(),
            "resources processed"
        );
    }

    fn derive_resource_calendar(&mut self, base_id: Option<i32>, name: Option<&str>) -> Option<i32> {
        let base = self.project.calendar_by_unique_id(base_id?)?.unique_id;
        let mut calendar = ProjectCalendar::new(self.project.next_calendar_unique_id());
        calendar.name = name.map(str::to_string);
        calendar.parent_id = Some(base);
        Some(self.project.add_calendar(calendar).unique_id)
    }

    /// Allocations of permanent resources to tasks, resolved through resource skills.
    pub fn process_assignments(&mut self, allocation_rows: &[Box<dyn Row>], skill_rows: &[Box<dyn Row>]) -> ReadResult<()> {
        let skills: HashMap<i32, &dyn Row> = skill_rows
            .iter()
            .filter_map(|row| row.get_integer("ID").map(|id| (id, row.as_ref())))
            .collect();

        for row in allocation_rows {
            let Some(task) = self.task_by_asta_id(row.get_integer("ALLOCATED_TO")) else {
                warn!(allocation = ?row.get_integer("ID"), "allocation references an unknown task");
                continue;
            };
            let Some(skill) = row.get_integer("ALLOCATION_OF").and_then(|id| skills.get(&id)) else {
                warn!(allocation = ?row.get_integer("ID"), "allocation references an unknown skill");
                continue;
            };
            let Some(resource) = skill
                .get_integer("PLAYER")
                .and_then(|id| self.project.resource_by_unique_id(id))
            else {
                warn!(allocation = ?row.get_integer("ID"), "allocation references an unknown resource");
                continue;
            };

            let percent_complete = row.get_percent("PERCENT_COMPLETE").unwrap_or(0.0);
            let work = row.get_work("EFFORT");
            let actual_work = work.value * percent_complete / 100.0;
            let remaining_work = work.value - actual_work;

            let assignment = ResourceAssignment {
                unique_id: row.get_integer("ID"),
                task,
                resource_unique_id: resource.unique_id,
                start: row.get_date("LINKABLE_START"),
                finish: row.get_date("LINKABLE_FINISH"),
                units: Some(row.get_double("GIVEN_ALLOCATION").unwrap_or(0.0) * 100.0),
                delay: Some(row.get_duration("DELAY")?),
                work: Some(work),
                actual_work: Some(Duration {
                    value: actual_work,
                    units: work.units,
                }),
                remaining_work: Some(Duration {
                    value: remaining_work,
                    units: work.units,
                }),
                percent_work_complete: Some(percent_complete),
                custom_fields: Default::default(),
            };
            self.project.add_assignment(assignment);
        }
        Ok(())
    }

    /// Resolve an Asta ID to a task: tasks, milestones, bars, expanded tasks, then completed sections.
    fn task_by_asta_id(&self, id: Option<i32>) -> Option<TaskKey> {
        let id = id?;
        [
            &self.task_map,
            &self.milestone_map,
            &self.bar_map,
            &self.expanded_task_map,
            &self.completed_section_map,
        ]
        .into_iter()
        .find_map(|map| map.get(&id).copied())
    }

    /// Calendar for duration arithmetic: the named calendar, else the first
    /// calendar read, else the standard week.
    fn working_calendar(&self, calendar_id: Option<i32>) -> EffectiveCalendar<'_> {
        let id = calendar_id
            .filter(|id| self.project.calendar_by_unique_id(*id).is_some())
            .or_else(|| self.project.calendars.first().map(|c| c.unique_id));
        match id {
            Some(_) => self.project.effective_calendar(id),
            None => EffectiveCalendar::standard(),
        }
    }
}

/// Orders rows on integer columns, missing values first.
fn compare_rows(a: &dyn Row, b: &dyn Row, columns: &[&str]) -> Ordering {
    columns
        .iter()
        .map(|column| a.get_integer(column).cmp(&b.get_integer(column)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Stable sort on integer columns.
pub fn sort_rows(rows: &mut Rows, columns: &[&str]) {
    rows.sort_by(|a, b| compare_rows(a.as_ref(), b.as_ref(), columns));
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
