pub mod asta;
pub mod calendar;
pub mod custom_field;
pub mod datatype;
pub mod duration;
pub mod graph;
pub mod project;
pub mod reader;
pub mod relation;
pub mod resource;
pub mod row;
pub mod task;

pub use asta::AstaReader;
pub use calendar::ProjectCalendar;
pub use duration::{Duration, TimeUnit};
pub use project::{ProjectFile, ProjectProperties};
pub use reader::mdb::MdbReader;
#[cfg(feature = "sqlite")]
pub use reader::sqlite::SqliteReader;
pub use reader::text::TextFileReader;
pub use reader::{ProjectReader, ReadError, ReadResult, read_file};
pub use row::{MapRow, Row, Value};
pub use task::{Task, TaskKey};
