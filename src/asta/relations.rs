use tracing::{debug, warn};

use super::AstaReader;
use crate::duration::Duration;
use crate::reader::ReadResult;
use crate::relation::{Relation, RelationType};
use crate::row::Row;
use crate::task::{ConstraintType, TaskKey};

/// Combine the start and end lag of a link. The end lag counts against the
/// start lag; when both are present they are assumed to share units.
pub fn link_lag(start_lag: Duration, end_lag: Duration) -> Duration {
    match (start_lag.is_zero(), end_lag.is_zero()) {
        (true, true) => Duration::zero(),
        (false, true) => start_lag,
        (true, false) => Duration {
            value: -end_lag.value,
            units: end_lag.units,
        },
        (false, false) => Duration {
            value: start_lag.value - end_lag.value,
            units: start_lag.units,
        },
    }
}

impl AstaReader {
    /// Links become relations on their end task. Links whose tasks cannot be
    /// found are skipped.
    pub fn process_predecessors(&mut self, rows: &[Box<dyn Row>]) -> ReadResult<()> {
        let mut added = 0;
        for row in rows {
            let Some(predecessor) = self.task_by_asta_id(row.get_integer("START_TASK")) else {
                warn!(link = ?row.get_integer("ID"), "link start task not found");
                continue;
            };
            let Some(successor) = self.task_by_asta_id(row.get_integer("END_TASK")) else {
                warn!(link = ?row.get_integer("ID"), "link end task not found");
                continue;
            };

            let lag = link_lag(
                row.get_duration("START_LAG_TIME")?,
                row.get_duration("END_LAG_TIME")?,
            );
            self.project.add_relation(Relation {
                unique_id: row.get_integer("ID"),
                predecessor,
                successor,
                relation_type: RelationType::from_link_kind(row.get_int("LINK_KIND")),
                lag,
            });
            added += 1;

            if self.deferred_constraint_type.contains(&successor) {
                let task = self.project.task_mut(successor);
                task.constraint_type = ConstraintType::AsLateAsPossible;
                task.constraint_date = None;
            }
        }
        debug!(relations = added, "predecessors processed");
        Ok(())
    }

    /// Map the constraint flag onto a constraint type and date.
    ///
    /// Flag 0 with placement 1 means "as late as possible" for tasks with
    /// predecessors and "start no earlier than" otherwise. Predecessors are
    /// not known yet, so the task is noted and settled once links are read.
    pub(super) fn process_constraints(&mut self, row: &dyn Row, key: TaskKey) {
        let start_date = || row.get_date("START_CONSTRAINT_DATE");
        let end_date = || row.get_date("END_CONSTRAINT_DATE");

        let (constraint_type, constraint_date) = match row.get_int("CONSTRAINT_FLAG") {
            0 if row.get_int("PLACEMENT") == 1 => {
                self.deferred_constraint_type.insert(key);
                (ConstraintType::StartNoEarlierThan, start_date())
            }
            1 => (ConstraintType::MustStartOn, start_date()),
            2 => (ConstraintType::StartNoLaterThan, start_date()),
            3 => (ConstraintType::StartNoEarlierThan, start_date()),
            4 => (ConstraintType::MustFinishOn, end_date()),
            5 => (ConstraintType::FinishNoLaterThan, end_date()),
            6 => (ConstraintType::FinishNoEarlierThan, end_date()),
            8 => {
                self.project.task_mut(key).deadline = end_date();
                (ConstraintType::AsSoonAsPossible, None)
            }
            _ => (ConstraintType::AsSoonAsPossible, None),
        };

        let task = self.project.task_mut(key);
        task.constraint_type = constraint_type;
        task.constraint_date = constraint_date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_lag_alone_is_negated() {
        let lag = link_lag(Duration::zero(), Duration::hours(3.0));
        assert_eq!(lag.value, -3.0);
    }

    #[test]
    fn both_lags_subtract_in_start_units() {
        let lag = link_lag(Duration::elapsed_hours(8.0), Duration::hours(2.0));
        assert_eq!(lag, Duration::elapsed_hours(6.0));
    }
}
