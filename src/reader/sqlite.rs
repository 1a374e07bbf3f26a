//! Reader for Asta SQLite project files.

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension, Params, params};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use super::{ProjectReader, ReadError, ReadResult};
use crate::asta::{AstaReader, CalendarTables, TaskTables};
use crate::datatype::{parse_basic_time, parse_basic_timestamp, parse_epoch_timestamp};
use crate::project::ProjectFile;
use crate::row::{MapRow, Row, Rows, SqliteRow, Value};

const BASELINE_QUERY: &str = "select baseline_summary.baseline_project_id from baseline_summary \
    join userr on userr.projid = baseline_summary.projid and userr.current_baseline_id = baseline_summary.baseline_id \
    join project_summary on project_summary.projid = baseline_summary.baseline_project_id \
    where baseline_summary.projid = ?1";

#[derive(Debug, Clone, Default)]
pub struct SqliteReader {
    project_id: i32,
}

impl SqliteReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_id(mut self, project_id: i32) -> Self {
        self.project_id = project_id;
        self
    }

    pub fn list_projects(&self, path: &Path) -> ReadResult<BTreeMap<i32, Option<String>>> {
        let connection = open(path)?;
        let rows = Session::new(&connection).rows("select projid, short_name from project_summary", [])?;
        Ok(rows
            .iter()
            .filter_map(|row| Some((row.get_integer("PROJID")?, row.get_string("SHORT_NAME"))))
            .collect())
    }

    /// Read the configured project from an open connection, with its
    /// current baseline when one is recorded.
    pub fn read_connection(&self, connection: &Connection) -> ReadResult<ProjectFile> {
        Session::new(connection).read_with_baseline(self.project_id)
    }
}

fn open(path: &Path) -> ReadResult<Connection> {
    Ok(Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?)
}

impl ProjectReader for SqliteReader {
    fn read(&self, path: &Path) -> ReadResult<ProjectFile> {
        let connection = open(path)?;
        self.read_connection(&connection)
    }

    fn read_all(&self, path: &Path) -> ReadResult<Vec<ProjectFile>> {
        let connection = open(path)?;
        let session = Session::new(&connection);
        let ids: Vec<i32> = session
            .rows("select projid from project_summary order by projid", [])?
            .iter()
            .filter_map(|row| row.get_integer("PROJID"))
            .collect();
        ids.into_iter()
            .map(|id| session.read_with_baseline(id))
            .collect()
    }
}

struct Session<'c> {
    connection: &'c Connection,
}

impl<'c> Session<'c> {
    fn new(connection: &'c Connection) -> Self {
        Self { connection }
    }

    fn rows(&self, sql: &str, params: impl Params) -> ReadResult<Rows> {
        let mut stmt = self.connection.prepare(sql)?;
        let names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_ascii_uppercase)
            .collect();
        let rows = stmt.query_map(params, |row| {
            let mut fields = BTreeMap::new();
            for (index, name) in names.iter().enumerate() {
                let value = match row.get_ref(index)? {
                    ValueRef::Null => continue,
                    ValueRef::Integer(v) => i32::try_from(v).map_or(Value::Double(v as f64), Value::Integer),
                    ValueRef::Real(v) => Value::Double(v),
                    ValueRef::Text(v) | ValueRef::Blob(v) => Value::Text(String::from_utf8_lossy(v).into_owned()),
                };
                fields.entry(name.clone()).or_insert(value);
            }
            Ok(SqliteRow::from_fields(fields))
        })?;

        let mut result: Rows = Vec::new();
        for row in rows {
            result.push(Box::new(row?));
        }
        Ok(result)
    }

    fn table_exists(&self, table: &str) -> ReadResult<bool> {
        let found: Option<i32> = self
            .connection
            .query_row(
                "select 1 from sqlite_master where type = 'table' and name = ?1",
                params![table],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Rows of a table that only some files carry.
    fn optional_rows(&self, table: &str, sql: &str, params: impl Params) -> ReadResult<Rows> {
        if self.table_exists(table)? {
            self.rows(sql, params)
        } else {
            debug!(table, "table not present");
            Ok(Vec::new())
        }
    }

    fn read_with_baseline(&self, project_id: i32) -> ReadResult<ProjectFile> {
        let mut project = self.read_project(project_id)?;
        if let Some(baseline_id) = self.baseline_project_id(project_id)? {
            debug!(project = project_id, baseline = baseline_id, "reading baseline");
            let baseline = self.read_project(baseline_id)?;
            project.set_baseline(&baseline);
        }
        Ok(project)
    }

    fn baseline_project_id(&self, project_id: i32) -> ReadResult<Option<i32>> {
        if !self.table_exists("baseline_summary")? {
            return Ok(None);
        }
        let rows = self.rows(BASELINE_QUERY, params![project_id])?;
        Ok(rows
            .first()
            .and_then(|row| row.get_integer("BASELINE_PROJECT_ID"))
            .filter(|id| *id != project_id))
    }

    fn read_project(&self, project_id: i32) -> ReadResult<ProjectFile> {
        let mut reader = AstaReader::new();
        let id = params![project_id];

        let schema = self.rows("select * from dodschem", [])?;
        let summary = self.rows("select * from project_summary where projid = ?1", id)?;
        let progress_periods = self.rows("select * from progress_period where projid = ?1", id)?;
        let user_settings = self.rows("select * from userr where projid = ?1", id)?;
        reader.process_project_properties(
            schema.first().and_then(|row| row.get_integer("SCHVER")),
            summary.first().map(|row| row.as_ref()),
            user_settings.first().map(|row| row.as_ref()),
            &progress_periods,
        )?;

        let mut work_pattern_assignments: Rows = Vec::new();
        for row in self.rows("select id, work_patterns from calendar", [])? {
            let (Some(calendar), Some(data)) = (row.get_integer("ID"), row.get_string("WORK_PATTERNS")) else {
                continue;
            };
            work_pattern_assignments.extend(work_pattern_assignment_rows(calendar, &data)?);
        }
        let mut exception_assignments: Rows = Vec::new();
        for row in self.rows("select id, exceptions from calendar", [])? {
            let (Some(calendar), Some(data)) = (row.get_integer("ID"), row.get_string("EXCEPTIONS")) else {
                continue;
            };
            exception_assignments.extend(exception_assignment_rows(calendar, &data)?);
        }
        let mut time_entries: Rows = Vec::new();
        for row in self.rows("select id, shifts from work_pattern", [])? {
            let (Some(pattern), Some(data)) = (row.get_integer("ID"), row.get_string("SHIFTS")) else {
                continue;
            };
            time_entries.extend(time_entry_rows(pattern, &data)?);
        }
        let calendar_tables = CalendarTables {
            exception_types: self.rows("select * from exceptionn", [])?,
            work_patterns: self.rows("select * from work_pattern", [])?,
            work_pattern_assignments,
            exception_assignments,
            time_entries,
        };
        reader.process_calendars(
            self.rows("select * from calendar where projid = ?1 order by id", id)?,
            &calendar_tables,
        );

        let permanent = self.rows("select * from permanent_resource where projid = ?1 order by id", id)?;
        let consumable = self.rows("select * from consumable_resource where projid = ?1 order by id", id)?;
        reader.process_resources(&permanent, &consumable);

        reader.process_tasks(TaskTables {
            bars: self.rows("select id as barid, * from bar where projid = ?1", id)?,
            expanded_tasks: self.rows("select id as expanded_taskid, * from expanded_task where projid = ?1", id)?,
            tasks: self.rows("select id as taskid, * from task where projid = ?1", id)?,
            milestones: self.rows("select id as milestoneid, * from milestone where projid = ?1", id)?,
            hammocks: self.rows("select id as hammock_taskid, * from hammock_task where projid = ?1", id)?,
            completed_sections: self.rows("select * from task_completed_section where projid = ?1 order by id", id)?,
        })?;

        reader.process_predecessors(&self.rows("select * from link where projid = ?1 order by id", id)?)?;

        let allocations = self.rows("select * from permanent_schedul_allocation where projid = ?1 order by id", id)?;
        let skills = self.rows("select * from perm_resource_skill where projid = ?1", id)?;
        reader.process_assignments(&allocations, &skills)?;

        let definitions = self.optional_rows("udf_defn", "select * from udf_defn", [])?;
        let data = self.optional_rows("udf_data", "select * from udf_data", [])?;
        reader.process_user_defined_fields(&definitions, &data);

        let libraries = self.optional_rows("code_library", "select * from code_library where projid = ?1", id)?;
        let entries = self.optional_rows("code_library_entry", "select * from code_library_entry where projid = ?1", id)?;
        let assignments = self.optional_rows(
            "code_library_assignabl_codes",
            "select * from code_library_assignabl_codes where projid = ?1",
            id,
        )?;
        reader.process_code_libraries(&libraries, entries, &assignments);

        debug!(project = project_id, "sqlite project read");
        Ok(reader.into_project())
    }
}

// Calendar details are packed into strings of values separated by `,` or `:`.

fn packed_fields(data: &str) -> Vec<&str> {
    data.split([',', ':']).collect()
}

fn packed_field<'a>(fields: &[&'a str], index: usize, data: &str) -> ReadResult<&'a str> {
    fields
        .get(index)
        .copied()
        .ok_or_else(|| ReadError::InvalidData(format!("truncated calendar data: {data}")))
}

fn packed_integer(fields: &[&str], index: usize, data: &str) -> ReadResult<i32> {
    let value = packed_field(fields, index, data)?;
    value
        .trim()
        .parse()
        .map_err(|_| ReadError::InvalidData(format!("invalid integer {value:?} in calendar data: {data}")))
}

fn set_timestamp(row: &mut MapRow, name: &str, value: Option<chrono::NaiveDateTime>) {
    if let Some(value) = value {
        row.set(name, Value::Timestamp(value));
    }
}

/// Dated work patterns of a calendar, five fields per entry.
pub fn work_pattern_assignment_rows(calendar: i32, data: &str) -> ReadResult<Vec<Box<dyn Row>>> {
    let fields = packed_fields(data);
    let mut rows: Vec<Box<dyn Row>> = Vec::new();
    let mut index = 1;
    while index < fields.len() {
        let mut row = MapRow::new()
            .with("WORK_PATTERN_ASSIGNMENTID", Value::Integer(calendar))
            .with("WORK_PATTERN", Value::Integer(packed_integer(&fields, index + 1, data)?));
        set_timestamp(&mut row, "START_DATE", parse_basic_timestamp(packed_field(&fields, index + 3, data)?)?);
        set_timestamp(&mut row, "END_DATE", parse_basic_timestamp(packed_field(&fields, index + 4, data)?)?);
        rows.push(Box::new(row));
        index += 5;
    }
    Ok(rows)
}

/// Exception date ranges of a calendar, three fields per entry.
pub fn exception_assignment_rows(calendar: i32, data: &str) -> ReadResult<Vec<Box<dyn Row>>> {
    let fields = packed_fields(data);
    let mut rows: Vec<Box<dyn Row>> = Vec::new();
    let mut index = 1;
    while index < fields.len() {
        let mut row = MapRow::new().with("EXCEPTION_ASSIGNMENTID", Value::Integer(calendar));
        set_timestamp(&mut row, "START_DATE", parse_epoch_timestamp(packed_field(&fields, index, data)?)?);
        set_timestamp(&mut row, "END_DATE", parse_epoch_timestamp(packed_field(&fields, index + 1, data)?)?);
        rows.push(Box::new(row));
        index += 3;
    }
    Ok(rows)
}

/// Shifts of a work pattern: per day a count followed by that many
/// `exception type, start, end` triples.
pub fn time_entry_rows(work_pattern: i32, data: &str) -> ReadResult<Vec<Box<dyn Row>>> {
    let fields = packed_fields(data);
    let mut rows: Vec<Box<dyn Row>> = Vec::new();
    let mut index = 1;
    while index < fields.len() {
        index += 2;
        let count = packed_integer(&fields, index, data)?;
        index += 1;
        for _ in 0..count {
            let mut row = MapRow::new()
                .with("TIME_ENTRYID", Value::Integer(work_pattern))
                .with("EXCEPTION", Value::Integer(packed_integer(&fields, index, data)?));
            if let Some(start) = parse_basic_time(packed_field(&fields, index + 1, data)?)? {
                row.set("START_TIME", Value::Time(start));
            }
            if let Some(end) = parse_basic_time(packed_field(&fields, index + 2, data)?)? {
                row.set("END_TIME", Value::Time(end));
            }
            rows.push(Box::new(row));
            index += 3;
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_unpack_per_day_counts() {
        let rows = time_entry_rows(5, "0,1,2,2,8,080000,120000,8,130000,170000").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get_integer("EXCEPTION"), Some(8));
        assert_eq!(rows[1].get_time("START_TIME").map(|t| t.to_string()), Some("13:00:00".to_string()));
        assert_eq!(rows[1].get_integer("TIME_ENTRYID"), Some(5));
    }

    #[test]
    fn truncated_work_patterns_are_rejected() {
        assert!(work_pattern_assignment_rows(1, "0,1,2").is_err());
    }
}
