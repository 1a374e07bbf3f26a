use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::project::ProjectFile;

#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    Csv(csv::Error),
    InvalidData(String),
    UnsupportedVersion(i32),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "io error: {err}"),
            #[cfg(feature = "sqlite")]
            ReadError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            ReadError::Csv(err) => write!(f, "csv error: {err}"),
            ReadError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            ReadError::UnsupportedVersion(version) => {
                write!(f, "unsupported PP file format version {version}")
            }
        }
    }
}

impl std::error::Error for ReadError {}

impl From<io::Error> for ReadError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for ReadError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<csv::Error> for ReadError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type ReadResult<T> = Result<T, ReadError>;

pub trait ProjectReader {
    fn read(&self, path: &Path) -> ReadResult<ProjectFile>;

    /// Every project held by the source. Single-project formats return one.
    fn read_all(&self, path: &Path) -> ReadResult<Vec<ProjectFile>> {
        Ok(vec![self.read(path)?])
    }
}

pub mod database;
pub mod format;
pub mod mdb;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod text;

const SQLITE_HEADER: &[u8; 16] = b"SQLite format 3\0";

/// Read a project, choosing the reader from the input: a directory is an MDB
/// table export, a file with the SQLite header is a SQLite project, anything
/// else is a text export.
pub fn read_file(path: impl AsRef<Path>) -> ReadResult<ProjectFile> {
    let path = path.as_ref();
    if path.is_dir() {
        return mdb::MdbReader::new().read(path);
    }

    let mut header = [0u8; 16];
    let mut file = File::open(path)?;
    let read = file.read(&mut header)?;
    drop(file);

    if read == header.len() && &header == SQLITE_HEADER {
        #[cfg(feature = "sqlite")]
        return sqlite::SqliteReader::new().read(path);
        #[cfg(not(feature = "sqlite"))]
        return Err(ReadError::InvalidData(
            "SQLite support is not enabled".to_string(),
        ));
    }

    text::TextFileReader::new().read(path)
}
