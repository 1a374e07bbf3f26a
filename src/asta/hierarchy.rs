use std::collections::HashMap;
use tracing::{debug, warn};

use super::{AstaReader, is_blank, sort_rows};
use crate::duration::Duration;
use crate::reader::ReadResult;
use crate::row::{Row, RowNode, Rows, Value};
use crate::task::{MilestoneType, TaskKey};

const LINE_BREAK: &str = "|@|||";

const DISPLACED_ITEMS: &str = "Displaced Items";

/// Prefix given to expanded task fields that collide with bar fields.
const EXPANDED_PREFIX: &str = "_";

/// Row sets describing the task structure.
#[derive(Debug, Default)]
pub struct TaskTables {
    pub bars: Rows,
    pub expanded_tasks: Rows,
    pub tasks: Rows,
    pub milestones: Rows,
    pub hammocks: Rows,
    pub completed_sections: Rows,
}

enum Child {
    Bar(usize),
    Leaf(usize),
}

/// Field merged onto a bar from its expanded task.
fn expanded_field<'r>(row: &'r dyn Row, name: &str) -> Option<&'r Value> {
    row.value(&format!("{EXPANDED_PREFIX}{name}"))
        .or_else(|| row.value(name))
}

fn expanded_integer(row: &dyn Row, name: &str) -> Option<i32> {
    expanded_field(row, name).and_then(Value::as_integer)
}

/// Nest leaves under bars and bars under the bars decorated by their parent
/// expanded task.
pub fn build_row_hierarchy(
    mut bars: Rows,
    expanded_tasks: Rows,
    tasks: Rows,
    milestones: Rows,
    hammocks: Rows,
) -> Vec<RowNode> {
    let mut leaves: Rows = tasks.into_iter().chain(milestones).chain(hammocks).collect();
    sort_rows(&mut bars, &["EXPANDED_TASK", "NATURAL_ORDER"]);
    sort_rows(&mut leaves, &["NATURAL_ORDER"]);

    let mut bar_index: HashMap<i32, usize> = HashMap::new();
    for (position, bar) in bars.iter().enumerate() {
        if let Some(id) = bar.get_integer("BARID") {
            bar_index.insert(id, position);
        }
    }

    let mut expanded_index: HashMap<i32, usize> = HashMap::new();
    for expanded_task in &expanded_tasks {
        let Some(&position) = expanded_task
            .get_integer("BAR")
            .and_then(|id| bar_index.get(&id))
        else {
            warn!(
                expanded_task = ?expanded_task.get_integer("EXPANDED_TASKID"),
                "expanded task references an unknown bar"
            );
            continue;
        };
        bars[position] = bars[position].merge(expanded_task.as_ref(), EXPANDED_PREFIX);
        if let Some(id) = expanded_task.get_integer("EXPANDED_TASKID") {
            expanded_index.insert(id, position);
        }
    }

    let mut children: Vec<Vec<Child>> = (0..bars.len()).map(|_| Vec::new()).collect();
    let mut top_level: Vec<usize> = Vec::new();
    for (position, bar) in bars.iter().enumerate() {
        let parent = bar
            .get_integer("EXPANDED_TASK")
            .and_then(|id| expanded_index.get(&id));
        match parent {
            Some(&parent) => children[parent].push(Child::Bar(position)),
            None => top_level.push(position),
        }
    }

    for (position, leaf) in leaves.iter().enumerate() {
        match leaf.get_integer("BAR").and_then(|id| bar_index.get(&id)) {
            Some(&bar) => children[bar].push(Child::Leaf(position)),
            None => warn!(bar = ?leaf.get_integer("BAR"), "leaf references an unknown bar"),
        }
    }

    top_level.retain(|position| {
        let name = bars[*position].get_string("NAME");
        !is_blank(name.as_deref()) && name.as_deref() != Some(DISPLACED_ITEMS)
    });

    let roots: Vec<Child> = if top_level.len() == 1 {
        std::mem::take(&mut children[top_level[0]])
    } else {
        top_level.into_iter().map(Child::Bar).collect()
    };

    let mut bars: Vec<Option<Box<dyn Row>>> = bars.into_iter().map(Some).collect();
    let mut leaves: Vec<Option<Box<dyn Row>>> = leaves.into_iter().map(Some).collect();
    roots
        .into_iter()
        .filter_map(|child| assemble(child, &mut bars, &mut leaves, &mut children))
        .collect()
}

fn assemble(
    child: Child,
    bars: &mut [Option<Box<dyn Row>>],
    leaves: &mut [Option<Box<dyn Row>>],
    children: &mut [Vec<Child>],
) -> Option<RowNode> {
    match child {
        Child::Leaf(position) => leaves[position].take().map(RowNode::new),
        Child::Bar(position) => {
            let mut node = RowNode::new(bars[position].take()?);
            let nested = std::mem::take(&mut children[position]);
            node.children = nested
                .into_iter()
                .filter_map(|c| assemble(c, bars, leaves, children))
                .collect();
            Some(node)
        }
    }
}

/// A bar holding only hammock rows, or nothing at all, produces no task.
fn is_empty_or_hammock_bar(node: &RowNode) -> bool {
    node.children.is_empty()
        || node
            .children
            .iter()
            .all(|c| c.row.get_integer("HAMMOCK_TASKID").is_some())
}

/// A bar with a single task or milestone child is replaced by that child.
fn skip_bar(node: &RowNode) -> bool {
    let [child] = node.children.as_slice() else {
        return false;
    };
    (child.row.get_integer("TASKID").is_some() || child.row.get_integer("MILESTONEID").is_some())
        && child.children.is_empty()
}

fn notes(row: &dyn Row) -> Option<String> {
    row.get_string("NOTES")
        .filter(|notes| !notes.is_empty())
        .map(|notes| notes.replace(LINE_BREAK, "\n"))
}

impl AstaReader {
    pub fn process_tasks(&mut self, tables: TaskTables) -> ReadResult<()> {
        let TaskTables {
            bars,
            expanded_tasks,
            tasks,
            milestones,
            hammocks,
            completed_sections,
        } = tables;

        let roots = build_row_hierarchy(bars, expanded_tasks, tasks, milestones, hammocks);
        self.create_tasks(None, None, &roots)?;
        self.populate_completed_sections(&completed_sections);
        self.derive_project_calendar();
        self.update_unique_ids();
        self.update_structure();
        self.update_dates();
        self.calculate_percent_complete();

        debug!(tasks = self.project.tasks.len(), "tasks processed");
        Ok(())
    }

    fn create_tasks(
        &mut self,
        parent: Option<TaskKey>,
        parent_name: Option<&str>,
        nodes: &[RowNode],
    ) -> ReadResult<()> {
        for node in nodes {
            let row = node.row.as_ref();
            let bar_id = row.get_integer("BARID");
            if bar_id.is_some() && is_empty_or_hammock_bar(node) {
                continue;
            }

            let key = self.project.add_task(parent);
            if let Some(id) = expanded_integer(row, "EXPANDED_TASKID") {
                self.expanded_task_map.insert(id, key);
            }

            match bar_id {
                Some(bar_id) => {
                    if skip_bar(node) {
                        let name = row.get_string("NAME");
                        self.populate_leaf(key, name.as_deref(), node.children[0].row.as_ref())?;
                    } else {
                        self.populate_bar(key, node);
                        let name = self.project.task(key).name.clone();
                        self.create_tasks(Some(key), name.as_deref(), &node.children)?;
                    }
                    self.bar_map.insert(bar_id, key);
                }
                None => self.populate_leaf(key, parent_name, row)?,
            }
        }
        Ok(())
    }

    fn populate_leaf(&mut self, key: TaskKey, parent_name: Option<&str>, row: &dyn Row) -> ReadResult<()> {
        if let Some(id) = row.get_integer("TASKID") {
            self.populate_task(key, row)?;
            self.task_map.insert(id, key);
        } else if let Some(id) = row.get_integer("MILESTONEID") {
            self.populate_milestone(key, row);
            self.milestone_map.insert(id, key);
        } else {
            // bar with no linked row
            let task = self.project.task_mut(key);
            task.unique_id = row.get_integer("BARID");
            task.name = row.get_string("NAME");
        }

        let task = self.project.task_mut(key);
        if is_blank(task.name.as_deref()) {
            task.name = parent_name.map(str::to_string);
        }
        task.bar_name = parent_name.map(str::to_string);
        Ok(())
    }

    fn resolve_calendar(&self, id: Option<i32>) -> Option<i32> {
        id.filter(|id| self.project.calendar_by_unique_id(*id).is_some())
    }

    fn populate_task(&mut self, key: TaskKey, row: &dyn Row) -> ReadResult<()> {
        let calendar_id = self.resolve_calendar(row.get_integer("CALENDAR"));
        let start = row.get_date("LINKABLE_START");
        let finish = row.get_date("LINKABLE_FINISH");
        let resume = row.get_date("RESUME");
        let actual_duration = row.get_duration("ACTUAL_DURATION")?;
        let overall_percent_complete = row.get_percent("OVERALL_PERCENT_COMPLETE");
        let complete = overall_percent_complete.is_some_and(|pct| pct > 99.0);

        // The stored duration is unreliable, so it is rebuilt from the dates.
        let mut remaining_duration = Duration::zero();
        if !complete {
            if let (Some(from), Some(to)) = (resume.or(start), finish) {
                remaining_duration = if time_unit_is_elapsed(row.get_int("DURATION_TIME_UNIT")) {
                    Duration::elapsed_hours((to - from).num_hours() as f64)
                } else {
                    Duration::hours(self.working_calendar(calendar_id).work(from, to))
                };
            }
        }
        let duration = Duration::hours(actual_duration.value + remaining_duration.value);

        let early_start = row.get_date("EARLY_START_DATE");
        let late_start = row.get_date("LATE_START_DATE");
        let calendar = self.working_calendar(calendar_id);
        let early_finish = row
            .get_date("EARLY_END_DATE_RS")
            .or_else(|| early_start.and_then(|d| calendar.date_after(d, duration.value)));
        let late_finish = row
            .get_date("LATE_END_DATE_RS")
            .or_else(|| late_start.and_then(|d| calendar.date_after(d, duration.value)));

        self.weights.insert(key, row.get_double("OVERALL_PERCENT_COMPL_WEIGHT"));

        let task = self.project.task_mut(key);
        task.unique_id = row.get_integer("TASKID");
        task.resume = resume;
        task.early_start = early_start;
        task.late_start = late_start;
        task.early_finish = early_finish;
        task.late_finish = late_finish;
        task.name = row.get_string("NAME");
        task.notes = notes(row);
        task.activity_id = row.get_string("UNIQUE_TASK_ID");
        task.calendar_id = calendar_id;
        task.start = start;
        task.finish = finish;
        task.overall_percent_complete = overall_percent_complete;
        task.remaining_duration = Some(remaining_duration);
        task.duration = Some(duration);
        task.actual_duration = Some(actual_duration);

        if complete {
            task.actual_duration = Some(duration);
            task.actual_start = start;
            task.actual_finish = finish;
            task.percent_complete = Some(100.0);
        } else if duration.value > 0.0 && actual_duration.value > 0.0 {
            let percent_complete = actual_duration.value / duration.value * 100.0;
            task.actual_start = start;
            task.percent_complete = Some(percent_complete);
            if percent_complete > 99.0 {
                task.actual_finish = finish;
            }
        } else {
            task.percent_complete = Some(0.0);
        }

        self.process_constraints(row, key);
        Ok(())
    }

    fn populate_bar(&mut self, key: TaskKey, node: &RowNode) {
        let row = node.row.as_ref();
        let calendar_id = row.get_integer(&format!("{EXPANDED_PREFIX}CALENDAR")).or_else(|| {
            node.children
                .first()
                .and_then(|child| child.row.get_integer("CALENDAR"))
        });
        let calendar_id = self.resolve_calendar(calendar_id);

        let mut name = row.get_string("NAME");
        if is_blank(name.as_deref()) {
            let expanded_name = row.get_string(&format!("{EXPANDED_PREFIX}NAME"));
            if !is_blank(expanded_name.as_deref()) {
                name = expanded_name;
            }
        }

        let start = row.get_date("BAR_START");
        let finish = row.get_date("BAR_FINISH");
        let duration = match (start, finish) {
            (Some(start), Some(finish)) => self.working_calendar(calendar_id).work(start, finish),
            _ => 0.0,
        };
        let activity_id = expanded_field(row, "UNIQUE_TASK_ID").map(|v| v.to_string());

        let task = self.project.task_mut(key);
        task.unique_id = row.get_integer("BARID");
        task.start = start;
        task.finish = finish;
        task.name = name;
        task.activity_id = activity_id;
        task.calendar_id = calendar_id;
        task.duration = Some(Duration::hours(duration));
    }

    fn populate_milestone(&mut self, key: TaskKey, row: &dyn Row) {
        let calendar_id = self.resolve_calendar(row.get_integer("CALENDAR"));
        self.weights.insert(key, row.get_double("OVERALL_PERCENT_COMPL_WEIGHT"));

        let task = self.project.task_mut(key);
        let date = row.get_date("GIVEN_DATE_TIME");
        task.milestone = true;
        task.unique_id = row.get_integer("MILESTONEID");
        task.start = date;
        task.finish = date;
        task.milestone_type = Some(match row.get_integer("MILESTONE_TYPE") {
            None | Some(1) => MilestoneType::Finish,
            Some(_) => MilestoneType::Start,
        });
        task.early_start = row.get_date("EARLY_START_DATE");
        task.late_start = row.get_date("LATE_START_DATE");
        task.early_finish = row.get_date("EARLY_END_DATE_RS").or(task.early_start);
        task.late_finish = row.get_date("LATE_END_DATE_RS").or(task.late_start);
        task.name = row.get_string("NAME");
        task.activity_id = row.get_string("UNIQUE_TASK_ID");
        task.calendar_id = calendar_id;
        task.duration = Some(Duration::zero());

        if row.get_boolean("COMPLETED") {
            task.percent_complete = Some(100.0);
            task.actual_start = task.start;
            task.actual_finish = task.finish;
        } else {
            task.percent_complete = Some(0.0);
        }

        self.process_constraints(row, key);
    }

    fn populate_completed_sections(&mut self, rows: &[Box<dyn Row>]) {
        for section in rows {
            let (Some(id), Some(task)) = (
                section.get_integer("ID"),
                self.task_by_asta_id(section.get_integer("TASK")),
            ) else {
                continue;
            };
            self.completed_section_map.insert(id, task);
        }
    }
}

/// Duration time units 10 to 18 are the elapsed variants, year down to second.
fn time_unit_is_elapsed(time_unit: i32) -> bool {
    (10..=18).contains(&time_unit)
}
