//! Reader for PowerProject text exports (PP files).

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use super::format::{FileFormat, TableDefinition};
use super::{ProjectReader, ReadError, ReadResult};
use crate::asta::{AstaReader, CalendarTables, TaskTables, sort_rows};
use crate::datatype::parse_column;
use crate::project::ProjectFile;
use crate::row::{MapRow, Rows};

const DELIMITER: char = ',';

/// Split text into records of comma separated tokens, one record per line.
///
/// A `"` directly after a lone `<` opens a quoted region which runs to the
/// next `"`, so commas and line breaks inside it are kept. Quotes stay in
/// the token.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut token = String::new();
    let mut quoted = false;

    for ch in text.chars() {
        if quoted {
            token.push(ch);
            if ch == '"' {
                quoted = false;
            }
            continue;
        }
        match ch {
            DELIMITER => record.push(std::mem::take(&mut token)),
            '\r' => {}
            '\n' => {
                if !token.is_empty() || !record.is_empty() {
                    record.push(std::mem::take(&mut token));
                }
                if !record.is_empty() {
                    records.push(std::mem::take(&mut record));
                }
            }
            '"' if token == "<" => {
                quoted = true;
                token.push(ch);
            }
            _ => token.push(ch),
        }
    }

    if !token.is_empty() || !record.is_empty() {
        record.push(token);
        records.push(record);
    }
    records
}

/// The `#<type> <id>` prefix of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHeader {
    pub record_type: i32,
    pub id: String,
}

impl RowHeader {
    pub fn parse(header: &str) -> Option<Self> {
        let header = header.strip_prefix('#')?;
        let digits = header.find(|c: char| !c.is_ascii_digit()).unwrap_or(header.len());
        let record_type = header[..digits].parse().ok()?;
        let id = header[digits..]
            .trim()
            .trim_end_matches(['-', '=', ':'])
            .trim()
            .to_string();
        Some(Self { record_type, id })
    }
}

/// Reads text exports.
///
/// The only layout built in is version 9006. Files written by any other
/// version fail with [`ReadError::UnsupportedVersion`] unless a matching
/// [`FileFormat`] is registered through [`TextFileReader::with_format`].
#[derive(Debug, Clone)]
pub struct TextFileReader {
    formats: HashMap<i32, FileFormat>,
}

impl Default for TextFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFileReader {
    pub fn new() -> Self {
        Self {
            formats: HashMap::new(),
        }
        .with_format(FileFormat::v9006())
    }

    pub fn with_format(mut self, format: FileFormat) -> Self {
        self.formats.insert(format.version, format);
        self
    }

    pub fn read_from<R: Read>(&self, mut input: R) -> ReadResult<ProjectFile> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        let (version, mut tables) = self.read_tables(&text)?;
        let mut take = |name: &str| tables.remove(name).unwrap_or_default();

        let mut reader = AstaReader::new();

        let summary = take("PROJECT_SUMMARY");
        reader.process_project_properties(Some(version), summary.first().map(|r| r.as_ref()), None, &[])?;

        let calendar_tables = CalendarTables {
            exception_types: take("EXCEPTIONN"),
            work_patterns: take("WORK_PATTERN"),
            work_pattern_assignments: Vec::new(),
            exception_assignments: take("EXCEPTION_ASSIGNMENT"),
            time_entries: take("TIME_ENTRY"),
        };
        reader.process_calendars(take("CALENDAR"), &calendar_tables);

        let mut permanent = take("PERMANENT_RESOURCE");
        let mut consumable = take("CONSUMABLE_RESOURCE");
        sort_rows(&mut permanent, &["ID"]);
        sort_rows(&mut consumable, &["ID"]);
        reader.process_resources(&permanent, &consumable);

        reader.process_tasks(TaskTables {
            bars: take("BAR"),
            expanded_tasks: take("EXPANDED_TASK"),
            tasks: take("TASK"),
            milestones: take("MILESTONE"),
            hammocks: take("HAMMOCK_TASK"),
            completed_sections: take("TASK_COMPLETED_SECTION"),
        })?;

        let mut links = take("LINK");
        sort_rows(&mut links, &["ID"]);
        reader.process_predecessors(&links)?;

        let mut allocations = take("PERMANENT_SCHEDUL_ALLOCATION");
        sort_rows(&mut allocations, &["ID"]);
        reader.process_assignments(&allocations, &take("PERM_RESOURCE_SKILL"))?;

        Ok(reader.into_project())
    }

    fn format(&self, token: &str) -> ReadResult<&FileFormat> {
        let version = token
            .get(2..)
            .and_then(|rest| rest.split(' ').next())
            .and_then(|v| v.trim().parse::<i32>().ok())
            .ok_or_else(|| ReadError::InvalidData(format!("invalid file version: {token:?}")))?;
        debug!(version, "text export version");
        self.formats
            .get(&version)
            .ok_or(ReadError::UnsupportedVersion(version))
    }

    fn read_tables(&self, text: &str) -> ReadResult<(i32, HashMap<&'static str, Rows>)> {
        let mut format: Option<&FileFormat> = None;
        let mut tables: HashMap<&'static str, Rows> = HashMap::new();

        for tokens in tokenize(text) {
            let mut columns: Vec<String> = Vec::new();
            let mut table: Option<&TableDefinition> = None;
            let mut prefix: Option<String> = None;

            for token in tokens {
                let mut token = Some(token);
                if columns.is_empty() {
                    let first = token.as_deref().unwrap_or_default();
                    if first.starts_with('#') {
                        if let Some(index) = first.rfind(':') {
                            let header = if first.ends_with('-') || first.ends_with('=') {
                                token.take()
                            } else {
                                let remainder = first[index + 1..].to_string();
                                let header = first[..index].to_string();
                                token = Some(remainder);
                                Some(header)
                            };
                            if let Some(header) = header.as_deref().and_then(RowHeader::parse) {
                                table = format.and_then(|f| f.table(header.record_type));
                                columns.push(header.id);
                            }
                        }
                    } else if first.starts_with('\0') {
                        format = Some(self.format(first)?);
                    }
                }

                let (Some(_), Some(mut token)) = (table, token) else {
                    continue;
                };
                if token.starts_with("<\"") && !token.ends_with("\">") {
                    prefix = Some(token);
                    continue;
                }
                if let Some(prefix) = prefix.take() {
                    token = format!("{prefix}{DELIMITER}{token}");
                }
                columns.push(token);
            }

            if let (Some(table), Some(format)) = (table, format) {
                if columns.len() > 1 {
                    let row = build_row(table, &columns, format.epoch_dates)?;
                    tables.entry(table.name).or_default().push(Box::new(row));
                }
            }
        }

        let format = format.ok_or_else(|| ReadError::InvalidData("no file version found".to_string()))?;
        debug!(tables = tables.len(), "text export tokenized");
        Ok((format.version, tables))
    }
}

fn build_row(table: &TableDefinition, data: &[String], epoch_dates: bool) -> ReadResult<MapRow> {
    let mut row = MapRow::new();
    for (column, value) in table.columns.iter().zip(data) {
        let Some(column) = column else {
            continue;
        };
        if let Some(value) = parse_column(table.name, column.name, value, column.column_type, epoch_dates)? {
            row.set(column.name, value);
        }
    }
    Ok(row)
}

impl ProjectReader for TextFileReader {
    fn read(&self, path: &Path) -> ReadResult<ProjectFile> {
        let file = File::open(path)?;
        self.read_from(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_region_keeps_commas_and_newlines() {
        let records = tokenize("a,<\"x, y\nz\">,b\nc\n");
        assert_eq!(records, vec![vec!["a", "<\"x, y\nz\">", "b"], vec!["c"]]);
    }

    #[test]
    fn quote_only_opens_after_lone_angle_bracket() {
        let records = tokenize("ab\"c,d\n");
        assert_eq!(records, vec![vec!["ab\"c", "d"]]);
    }

    #[test]
    fn header_parses_type_and_id() {
        assert_eq!(
            RowHeader::parse("#21 42"),
            Some(RowHeader {
                record_type: 21,
                id: "42".to_string()
            })
        );
        assert_eq!(RowHeader::parse("#7 3:=").map(|h| h.id), Some("3".to_string()));
        assert_eq!(RowHeader::parse("21 42"), None);
    }
}
