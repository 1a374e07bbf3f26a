use asta_reader::reader::mdb::MdbReader;
#[cfg(feature = "sqlite")]
use asta_reader::SqliteReader;
use asta_reader::{ProjectFile, ProjectReader, ReadResult, TaskKey, TextFileReader, read_file};
use clap::Parser;
use std::collections::BTreeMap;
#[cfg(feature = "sqlite")]
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Inspect Asta PowerProject files: text exports, SQLite files and MDB table exports
#[derive(Parser)]
#[command(name = "cli", version = env!("CARGO_PKG_VERSION"), long_about = None)]
struct Cli {
    /// Project file, or a directory of CSV table exports
    path: PathBuf,

    /// Project to read from a multi-project file
    #[arg(long)]
    project: Option<i32>,

    /// List the projects in the file
    #[arg(long)]
    list: bool,

    /// Print the whole project as JSON
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "sqlite")]
fn is_sqlite(path: &Path) -> bool {
    let mut header = [0u8; 16];
    std::fs::File::open(path)
        .and_then(|mut file| file.read_exact(&mut header))
        .is_ok_and(|()| &header == b"SQLite format 3\0")
}

fn list_projects(path: &Path) -> ReadResult<BTreeMap<i32, Option<String>>> {
    if path.is_dir() {
        return MdbReader::new().list_projects(path);
    }
    #[cfg(feature = "sqlite")]
    if is_sqlite(path) {
        return SqliteReader::new().list_projects(path);
    }
    // text exports hold a single project
    let project = TextFileReader::new().read(path)?;
    Ok(BTreeMap::from([(0, project.properties.name)]))
}

fn read_project(path: &Path, project_id: Option<i32>) -> ReadResult<ProjectFile> {
    let Some(project_id) = project_id else {
        return read_file(path);
    };
    if path.is_dir() {
        return MdbReader::new().project_id(project_id).read(path);
    }
    #[cfg(feature = "sqlite")]
    if is_sqlite(path) {
        return SqliteReader::new().project_id(project_id).read(path);
    }
    read_file(path)
}

fn task_rows(project: &ProjectFile) -> Vec<[String; 7]> {
    fn visit(project: &ProjectFile, key: TaskKey, rows: &mut Vec<[String; 7]>) {
        let task = project.task(key);
        let indent = "  ".repeat(task.outline_level.saturating_sub(1) as usize);
        let opt = |value: Option<String>| value.unwrap_or_default();
        rows.push([
            opt(task.id.map(|v| v.to_string())),
            opt(task.unique_id.map(|v| v.to_string())),
            format!("{indent}{}", task.name.as_deref().unwrap_or_default()),
            opt(task.start.map(|v| v.format("%Y-%m-%d %H:%M").to_string())),
            opt(task.finish.map(|v| v.format("%Y-%m-%d %H:%M").to_string())),
            opt(task.duration.map(|v| format!("{:.2}", v.value))),
            opt(task.percent_complete.map(|v| format!("{v:.1}"))),
        ]);
        for child in &task.children {
            visit(project, *child, rows);
        }
    }

    let mut rows = Vec::new();
    for key in &project.child_tasks {
        visit(project, *key, &mut rows);
    }
    rows
}

fn table_line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::from("|");
    for (cell, width) in cells.zip(widths) {
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(width.saturating_sub(cell.chars().count())));
        out.push_str(" |");
    }
    out.push('\n');
    out
}

fn render_text_table(headers: &[&str], rows: &[[String; 7]]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&table_line(&widths, headers.iter().copied()));
    out.push_str(&sep);
    out.push('\n');
    for row in rows {
        out.push_str(&table_line(&widths, row.iter().map(String::as_str)));
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.list {
        for (id, name) in list_projects(&cli.path)? {
            println!("{id}\t{}", name.unwrap_or_default());
        }
        return Ok(());
    }

    let project = read_project(&cli.path, cli.project)?;
    debug!(tasks = project.tasks.len(), "project loaded");
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&project)?);
    } else {
        let headers = ["id", "unique_id", "name", "start", "finish", "duration", "percent"];
        print!("{}", render_text_table(&headers, &task_rows(&project)));
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
