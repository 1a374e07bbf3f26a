//! Asta MDB databases exported to a directory of CSV files, one `<table>.csv`
//! per table with a header row.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::database::{DatabaseReader, DatabaseSource};
use super::{ProjectReader, ReadError, ReadResult};
use crate::project::ProjectFile;
use crate::row::{MapRow, Row, Rows, Value};

#[derive(Debug, Clone)]
pub struct ExportDirectory {
    root: PathBuf,
}

impl ExportDirectory {
    pub fn open(path: impl AsRef<Path>) -> ReadResult<Self> {
        let root = path.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(ReadError::InvalidData(format!(
                "{} is not an export directory",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{table}.csv"))
    }
}

impl DatabaseSource for ExportDirectory {
    fn rows(&self, table: &str, keys: &[(&str, i32)]) -> ReadResult<Rows> {
        let path = self.table_path(table);
        if !path.is_file() {
            debug!(table, "table not exported");
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_ascii_uppercase())
            .collect();

        let mut rows: Rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row = MapRow::new();
            for (name, field) in headers.iter().zip(record.iter()) {
                if !field.is_empty() {
                    row.set(name.as_str(), Value::Text(field.to_string()));
                }
            }
            // rows without the key column belong to every project
            let matches = keys
                .iter()
                .all(|(column, id)| row.get_integer(column).is_none_or(|value| value == *id));
            if matches {
                rows.push(Box::new(row));
            }
        }
        Ok(rows)
    }
}

/// Reader for MDB table exports.
#[derive(Debug, Clone, Default)]
pub struct MdbReader {
    project_id: i32,
}

impl MdbReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_id(mut self, project_id: i32) -> Self {
        self.project_id = project_id;
        self
    }

    pub fn list_projects(&self, path: &Path) -> ReadResult<BTreeMap<i32, Option<String>>> {
        DatabaseReader::new(ExportDirectory::open(path)?).list_projects()
    }
}

impl ProjectReader for MdbReader {
    fn read(&self, path: &Path) -> ReadResult<ProjectFile> {
        DatabaseReader::new(ExportDirectory::open(path)?)
            .project_id(self.project_id)
            .read()
    }

    fn read_all(&self, path: &Path) -> ReadResult<Vec<ProjectFile>> {
        DatabaseReader::new(ExportDirectory::open(path)?).read_all()
    }
}
