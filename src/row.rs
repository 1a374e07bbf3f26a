use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeMap;
use std::fmt;

use crate::datatype;
use crate::duration::Duration;
use crate::reader::ReadResult;

/// A single field value as stored by a source.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i32),
    Double(f64),
    Text(String),
    Boolean(bool),
    Timestamp(NaiveDateTime),
    Time(NaiveTime),
}

const DATE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%y %H:%M:%S",
];

impl Value {
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            Value::Double(v) => Some(*v as i32),
            Value::Boolean(v) => Some(i32::from(*v)),
            Value::Text(v) => {
                let v = v.trim();
                v.parse::<i32>()
                    .ok()
                    .or_else(|| v.parse::<f64>().ok().map(|d| d as i32))
                    .or_else(|| match v.to_ascii_lowercase().as_str() {
                        "true" => Some(1),
                        "false" => Some(0),
                        _ => None,
                    })
            }
            Value::Timestamp(_) | Value::Time(_) => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(f64::from(*v)),
            Value::Double(v) => Some(*v),
            Value::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::Text(v) => v.trim().parse::<f64>().ok(),
            Value::Timestamp(_) | Value::Time(_) => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Timestamp(v) => Some(*v),
            Value::Text(v) => {
                let v = v.trim();
                DATE_FORMATS
                    .iter()
                    .find_map(|f| NaiveDateTime::parse_from_str(v, f).ok())
                    .or_else(|| {
                        NaiveDate::parse_from_str(v, "%Y-%m-%d")
                            .ok()
                            .map(|d| d.and_time(NaiveTime::MIN))
                    })
            }
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Value::Time(v) => Some(*v),
            Value::Timestamp(v) => Some(v.time()),
            Value::Text(v) => {
                let v = v.trim();
                NaiveTime::parse_from_str(v, "%H:%M:%S")
                    .ok()
                    .or_else(|| self.as_timestamp().map(|ts| ts.time()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Timestamp(v) => write!(f, "{v}"),
            Value::Time(v) => write!(f, "{v}"),
        }
    }
}

/// A named-field record with typed accessors. Missing fields read as `None`.
pub trait Row: fmt::Debug {
    fn value(&self, name: &str) -> Option<&Value>;

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_>;

    /// New row with this row's fields plus `other`'s; colliding names from
    /// `other` are stored as `prefix + name`.
    fn merge(&self, other: &dyn Row, prefix: &str) -> Box<dyn Row>;

    fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    fn get_string(&self, name: &str) -> Option<String> {
        self.value(name).map(|v| v.to_string())
    }

    fn get_integer(&self, name: &str) -> Option<i32> {
        self.value(name).and_then(Value::as_integer)
    }

    /// Integer value, zero when missing.
    fn get_int(&self, name: &str) -> i32 {
        self.get_integer(name).unwrap_or(0)
    }

    fn get_double(&self, name: &str) -> Option<f64> {
        self.value(name).and_then(Value::as_double)
    }

    /// Stored in hundredths.
    fn get_currency(&self, name: &str) -> Option<f64> {
        self.get_double(name).map(|v| v / 100.0)
    }

    /// Stored as a fraction, returned as a percentage.
    fn get_percent(&self, name: &str) -> Option<f64> {
        self.get_double(name).map(|v| v * 100.0)
    }

    fn get_boolean(&self, name: &str) -> bool {
        self.get_int(name) != 0
    }

    fn get_date(&self, name: &str) -> Option<NaiveDateTime> {
        self.value(name).and_then(Value::as_timestamp)
    }

    fn get_time(&self, name: &str) -> Option<NaiveTime> {
        self.value(name).and_then(Value::as_time)
    }

    /// Duration in hours; missing values are zero.
    fn get_duration(&self, name: &str) -> ReadResult<Duration> {
        Ok(Duration::hours(self.get_double(name).unwrap_or(0.0)))
    }

    /// Work stored in seconds, returned in hours.
    fn get_work(&self, name: &str) -> Duration {
        Duration::hours(self.get_double(name).unwrap_or(0.0) / 3600.0)
    }
}

fn merged_fields(row: &dyn Row, other: &dyn Row, prefix: &str) -> BTreeMap<String, Value> {
    let mut fields: BTreeMap<String, Value> = row
        .entries()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    for (name, value) in other.entries() {
        let key = if fields.contains_key(name) {
            format!("{prefix}{name}")
        } else {
            name.to_string()
        };
        fields.insert(key, value.clone());
    }
    fields
}

/// Row backed by a map; used for text exports, CSV exports and synthesized records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapRow {
    fields: BTreeMap<String, Value>,
}

impl MapRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.set(name, value);
        self
    }
}

impl Row for MapRow {
    fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_> {
        Box::new(self.fields.iter().map(|(k, v)| (k.as_str(), v)))
    }

    fn merge(&self, other: &dyn Row, prefix: &str) -> Box<dyn Row> {
        Box::new(MapRow::from_fields(merged_fields(self, other, prefix)))
    }
}

/// Row read from an Asta SQLite file. Durations there are packed as `unit,flag,value`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqliteRow {
    fields: BTreeMap<String, Value>,
}

impl SqliteRow {
    pub fn from_fields(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl Row for SqliteRow {
    fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_> {
        Box::new(self.fields.iter().map(|(k, v)| (k.as_str(), v)))
    }

    fn merge(&self, other: &dyn Row, prefix: &str) -> Box<dyn Row> {
        Box::new(SqliteRow::from_fields(merged_fields(self, other, prefix)))
    }

    fn get_duration(&self, name: &str) -> ReadResult<Duration> {
        match self.value(name) {
            None => Ok(Duration::zero()),
            Some(Value::Text(text)) => datatype::parse_duration_triple(text).map(Duration::hours),
            Some(other) => Ok(Duration::hours(other.as_double().unwrap_or(0.0))),
        }
    }
}

/// A row with the rows nested beneath it.
#[derive(Debug)]
pub struct RowNode {
    pub row: Box<dyn Row>,
    pub children: Vec<RowNode>,
}

impl RowNode {
    pub fn new(row: Box<dyn Row>) -> Self {
        Self {
            row,
            children: Vec::new(),
        }
    }
}

pub type Rows = Vec<Box<dyn Row>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_values_coerce_on_typed_access() {
        let row = MapRow::new()
            .with("ID", Value::Text("42".into()))
            .with("WEIGHT", Value::Text("2.75".into()))
            .with("START", Value::Text("2024-03-01 08:00:00".into()));
        assert_eq!(row.get_integer("ID"), Some(42));
        assert_eq!(row.get_int("WEIGHT"), 2);
        assert_eq!(row.get_double("WEIGHT"), Some(2.75));
        assert_eq!(
            row.get_date("START"),
            NaiveDate::from_ymd_opt(2024, 3, 1).and_then(|d| d.and_hms_opt(8, 0, 0))
        );
        assert_eq!(row.get_int("MISSING"), 0);
    }

    #[test]
    fn sqlite_duration_triple_requires_three_parts() {
        let mut fields = BTreeMap::new();
        fields.insert("GOOD".to_string(), Value::Text("1,0,7.5".into()));
        fields.insert("BAD".to_string(), Value::Text("1,7.5".into()));
        let row = SqliteRow::from_fields(fields);
        assert_eq!(row.get_duration("GOOD").unwrap(), Duration::hours(7.5));
        assert!(row.get_duration("BAD").is_err());
        assert_eq!(row.get_duration("NONE").unwrap(), Duration::zero());
    }
}
