use tracing::debug;

use super::AstaReader;
use crate::calendar::ProjectCalendar;
use crate::duration::Duration;
use crate::task::TaskKey;

const DEFAULT_CALENDAR_NAME: &str = "Standard";

fn earliest<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn latest<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

impl AstaReader {
    /// The calendar used by most tasks becomes the project default, and tasks
    /// using it drop their explicit reference. When most tasks have no
    /// calendar the default is a calendar named "Standard", created if absent.
    pub(super) fn derive_project_calendar(&mut self) {
        let mut counts: Vec<(Option<i32>, usize)> = Vec::new();
        for task in &self.project.tasks {
            match counts.iter_mut().find(|(id, _)| *id == task.calendar_id) {
                Some((_, count)) => *count += 1,
                None => counts.push((task.calendar_id, 1)),
            }
        }

        let mut winner: Option<(Option<i32>, usize)> = None;
        for (id, count) in counts {
            if winner.is_none_or(|(_, best)| count > best) {
                winner = Some((id, count));
            }
        }

        let default_id = match winner.and_then(|(id, _)| id) {
            Some(id) => {
                for task in self.project.tasks.iter_mut() {
                    if task.calendar_id == Some(id) {
                        task.calendar_id = None;
                    }
                }
                id
            }
            None => match self.project.calendar_by_name(DEFAULT_CALENDAR_NAME) {
                Some(calendar) => calendar.unique_id,
                None => {
                    let id = self.project.next_calendar_unique_id();
                    self.project
                        .add_calendar(ProjectCalendar::standard(id, DEFAULT_CALENDAR_NAME))
                        .unique_id
                }
            },
        };

        debug!(calendar = default_id, "default calendar");
        self.project.properties.default_calendar_id = Some(default_id);
    }

    /// Tasks without a source ID get one above the largest in use.
    pub(super) fn update_unique_ids(&mut self) {
        let mut next = self
            .project
            .tasks
            .iter()
            .filter_map(|t| t.unique_id)
            .max()
            .unwrap_or(0);
        for task in self.project.tasks.iter_mut().filter(|t| t.unique_id.is_none()) {
            next += 1;
            task.unique_id = Some(next);
        }
    }

    /// Number tasks in pre-order from 1 and record their depth.
    pub(super) fn update_structure(&mut self) {
        let mut id = 0;
        let mut stack: Vec<(TaskKey, u32)> = self
            .project
            .child_tasks
            .iter()
            .rev()
            .map(|key| (*key, 1))
            .collect();
        while let Some((key, level)) = stack.pop() {
            id += 1;
            let task = self.project.task_mut(key);
            task.id = Some(id);
            task.outline_level = level;
            stack.extend(task.children.iter().rev().map(|child| (*child, level + 1)));
        }
    }

    pub(super) fn update_dates(&mut self) {
        for key in self.project.child_tasks.clone() {
            self.update_summary_dates(key);
        }
    }

    /// Widen a summary's actual, early and late dates to cover its children.
    /// The actual finish is only set once every child has one.
    fn update_summary_dates(&mut self, key: TaskKey) {
        let children = self.project.task(key).children.clone();
        if children.is_empty() {
            return;
        }

        let parent = self.project.task(key);
        let mut actual_start = parent.actual_start;
        let mut actual_finish = parent.actual_finish;
        let mut early_start = parent.early_start;
        let mut early_finish = parent.early_finish;
        let mut late_start = parent.late_start;
        let mut late_finish = parent.late_finish;
        let mut finished = 0;

        for child in &children {
            self.update_summary_dates(*child);
            let task = self.project.task(*child);
            actual_start = earliest(actual_start, task.actual_start);
            actual_finish = latest(actual_finish, task.actual_finish);
            early_start = earliest(early_start, task.early_start);
            early_finish = latest(early_finish, task.early_finish);
            late_start = earliest(late_start, task.late_start);
            late_finish = latest(late_finish, task.late_finish);
            if task.actual_finish.is_some() {
                finished += 1;
            }
        }

        let parent = self.project.task_mut(key);
        parent.actual_start = actual_start;
        parent.early_start = early_start;
        parent.early_finish = early_finish;
        parent.late_start = late_start;
        parent.late_finish = late_finish;
        if finished == children.len() {
            parent.actual_finish = actual_finish;
        }
    }

    fn gather_leaves(&self, key: TaskKey, leaves: &mut Vec<TaskKey>) {
        let task = self.project.task(key);
        if task.children.is_empty() {
            leaves.push(key);
        } else {
            for child in &task.children {
                self.gather_leaves(*child, leaves);
            }
        }
    }

    /// Summary percent complete from the leaves beneath each summary task.
    pub(super) fn calculate_percent_complete(&mut self) {
        let mut leaves = Vec::new();
        for key in self.project.task_keys().collect::<Vec<_>>() {
            let task = self.project.task(key);
            if !task.is_summary() {
                continue;
            }
            if task.actual_finish.is_some() {
                self.project.task_mut(key).percent_complete = Some(100.0);
                continue;
            }

            leaves.clear();
            self.gather_leaves(key, &mut leaves);

            let mut total_percent_complete = 0.0;
            let mut total_overall_percent_complete = 0.0;
            let mut total_weight = 0.0;
            let mut total_actual_duration = 0.0;
            let mut total_duration = 0.0;
            for leaf in &leaves {
                let child = self.project.task(*leaf);
                total_percent_complete += child.percent_complete.unwrap_or(0.0);
                total_overall_percent_complete += child.overall_percent_complete.unwrap_or(0.0);
                total_weight += self.weights.get(leaf).copied().flatten().unwrap_or(0.0);
                total_actual_duration += child.actual_duration.map_or(0.0, |d| d.value);
                total_duration += child.duration.map_or(0.0, |d| d.value);
            }
            if total_weight == 0.0 {
                total_weight = 1.0;
            }

            let task = self.project.task_mut(key);
            task.overall_percent_complete = Some(total_overall_percent_complete / total_weight);

            if total_duration == 0.0 {
                // milestones only
                if total_percent_complete != 0.0 {
                    task.percent_complete = Some(total_percent_complete / leaves.len() as f64);
                }
            } else {
                let duration = task.duration.unwrap_or_else(Duration::zero);
                let percent_complete = total_actual_duration / total_duration * 100.0;
                let actual_duration = duration.value * percent_complete / 100.0;
                task.percent_complete = Some(percent_complete);
                task.actual_duration = Some(Duration {
                    value: actual_duration,
                    units: duration.units,
                });
                task.remaining_duration = Some(Duration {
                    value: duration.value - actual_duration,
                    units: duration.units,
                });
            }
        }
    }
}
