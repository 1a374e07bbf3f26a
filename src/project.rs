use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::calendar::{EffectiveCalendar, ProjectCalendar};
use crate::custom_field::{ActivityCode, UserDefinedField};
use crate::duration::Duration;
use crate::relation::Relation;
use crate::resource::{Resource, ResourceAssignment};
use crate::task::{Task, TaskKey};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectProperties {
    pub file_application: String,
    pub file_type: String,
    /// Schema version of the source file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_version: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_date: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_calendar_id: Option<i32>,
}

impl Default for ProjectProperties {
    fn default() -> Self {
        Self {
            file_application: "Asta".to_string(),
            file_type: "PP".to_string(),
            application_version: None,
            name: None,
            author: None,
            start: None,
            finish: None,
            duration: None,
            last_saved: None,
            status_date: None,
            default_calendar_id: None,
        }
    }
}

/// A schedule read from an Asta file. Tasks live in an arena addressed by [`TaskKey`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectFile {
    pub properties: ProjectProperties,
    #[serde(default)]
    pub calendars: Vec<ProjectCalendar>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Top-level tasks in display order.
    #[serde(default)]
    pub child_tasks: Vec<TaskKey>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub assignments: Vec<ResourceAssignment>,
    #[serde(default)]
    pub activity_codes: Vec<ActivityCode>,
    #[serde(default)]
    pub user_defined_fields: Vec<UserDefinedField>,
}

impl ProjectFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_calendar(&mut self, calendar: ProjectCalendar) -> &mut ProjectCalendar {
        self.calendars.push(calendar);
        let index = self.calendars.len() - 1;
        &mut self.calendars[index]
    }

    pub fn add_resource(&mut self, resource: Resource) -> &mut Resource {
        self.resources.push(resource);
        let index = self.resources.len() - 1;
        &mut self.resources[index]
    }

    /// Append a task beneath `parent`, or at the top level.
    pub fn add_task(&mut self, parent: Option<TaskKey>) -> TaskKey {
        let key = TaskKey(self.tasks.len());
        self.tasks.push(Task {
            parent,
            ..Task::default()
        });
        match parent {
            Some(parent) => self.tasks[parent.0].children.push(key),
            None => self.child_tasks.push(key),
        }
        key
    }

    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    pub fn add_assignment(&mut self, assignment: ResourceAssignment) {
        self.assignments.push(assignment);
    }

    pub fn task(&self, key: TaskKey) -> &Task {
        &self.tasks[key.0]
    }

    pub fn task_mut(&mut self, key: TaskKey) -> &mut Task {
        &mut self.tasks[key.0]
    }

    pub fn task_keys(&self) -> impl Iterator<Item = TaskKey> + '_ {
        (0..self.tasks.len()).map(TaskKey)
    }

    pub fn task_by_unique_id(&self, unique_id: i32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.unique_id == Some(unique_id))
    }

    pub fn task_by_name(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name.as_deref() == Some(name))
    }

    pub fn calendar_by_unique_id(&self, unique_id: i32) -> Option<&ProjectCalendar> {
        self.calendars.iter().find(|c| c.unique_id == unique_id)
    }

    pub fn calendar_by_name(&self, name: &str) -> Option<&ProjectCalendar> {
        self.calendars.iter().find(|c| c.name.as_deref() == Some(name))
    }

    pub fn resource_by_unique_id(&self, unique_id: i32) -> Option<&Resource> {
        self.resources.iter().find(|r| r.unique_id == unique_id)
    }

    pub fn resource_by_unique_id_mut(&mut self, unique_id: i32) -> Option<&mut Resource> {
        self.resources.iter_mut().find(|r| r.unique_id == unique_id)
    }

    pub fn default_calendar(&self) -> Option<&ProjectCalendar> {
        self.properties
            .default_calendar_id
            .and_then(|id| self.calendar_by_unique_id(id))
    }

    /// Calendar arithmetic for `unique_id`, walking parents until a cycle or a missing link.
    pub fn effective_calendar(&self, unique_id: Option<i32>) -> EffectiveCalendar<'_> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut next = unique_id;
        while let Some(id) = next {
            if !seen.insert(id) {
                break;
            }
            let Some(calendar) = self.calendar_by_unique_id(id) else {
                break;
            };
            chain.push(calendar);
            next = calendar.parent_id;
        }
        EffectiveCalendar::new(chain)
    }

    pub fn next_calendar_unique_id(&self) -> i32 {
        self.calendars
            .iter()
            .map(|c| c.unique_id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Copy start, finish and duration from `baseline` onto tasks with the same unique ID.
    pub fn set_baseline(&mut self, baseline: &ProjectFile) {
        let by_id: HashMap<i32, &Task> = baseline
            .tasks
            .iter()
            .filter_map(|t| t.unique_id.map(|id| (id, t)))
            .collect();

        for task in self.tasks.iter_mut() {
            let Some(source) = task.unique_id.and_then(|id| by_id.get(&id)) else {
                continue;
            };
            task.baseline_start = source.start;
            task.baseline_finish = source.finish;
            task.baseline_duration = source.duration;
        }
    }
}
