//! Decoders for the field encodings used in Asta text exports and packed SQLite columns.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::reader::{ReadError, ReadResult};
use crate::row::Value;

/// Day number of 1900-01-01 in Asta's epoch encoding.
const ASTA_EPOCH_DAYS: i64 = 2_415_021;

const NULL_PAIR: &str = "-1 -1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Double,
    Varchar,
    Bit,
    Timestamp,
    Time,
}

fn invalid(value: &str, what: &str) -> ReadError {
    ReadError::InvalidData(format!("invalid {what}: {value}"))
}

fn epoch_base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1900, 1, 1)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

/// Strip an enclosing `<...>` and then an enclosing `"..."`.
pub fn parse_string(value: &str) -> String {
    let mut value = value;
    if value.starts_with('<') && value.len() >= 2 {
        value = strip_ends(value);
    }
    if value.starts_with('"') && value.len() >= 2 {
        value = strip_ends(value);
    }
    value.to_string()
}

fn strip_ends(value: &str) -> &str {
    let mut chars = value.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

pub fn parse_double(value: &str) -> ReadResult<Option<f64>> {
    let value = parse_string(value);
    if value.is_empty() || value == NULL_PAIR {
        return Ok(None);
    }
    let value = value.replacen("E+", "E", 1);
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| invalid(&value, "double"))
}

pub fn parse_integer(value: &str) -> ReadResult<Option<i32>> {
    if value.is_empty() || value.contains(' ') {
        return Ok(None);
    }
    if value.contains('.') {
        return Ok(parse_double(value)?.map(|v| v as i32));
    }
    value
        .parse::<i32>()
        .map(Some)
        .map_err(|_| invalid(value, "integer"))
}

pub fn parse_boolean(value: &str) -> ReadResult<Option<bool>> {
    Ok(parse_integer(value)?.map(|v| v != 0))
}

fn left_pad_six(value: &str) -> String {
    format!("{value:0>6}")
}

fn hhmmss(value: &str) -> ReadResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H%M%S").map_err(|_| invalid(value, "time"))
}

/// Timestamps stored as `days seconds` from the Asta epoch; a lone `HHMMSS` is a time on 1900-01-01.
pub fn parse_epoch_timestamp(value: &str) -> ReadResult<Option<NaiveDateTime>> {
    if value.is_empty() || value == NULL_PAIR {
        return Ok(None);
    }

    match value.split_once(' ') {
        None => {
            let time = hhmmss(&left_pad_six(value))?;
            Ok(Some(epoch_base().date().and_time(time)))
        }
        Some((days, seconds)) => {
            let days: i64 = days.parse().map_err(|_| invalid(value, "timestamp"))?;
            let seconds: i64 = seconds.parse().map_err(|_| invalid(value, "timestamp"))?;
            let offset = TimeDelta::try_days(days - ASTA_EPOCH_DAYS)
                .zip(TimeDelta::try_seconds(seconds))
                .and_then(|(d, s)| d.checked_add(&s))
                .ok_or_else(|| invalid(value, "timestamp"))?;
            epoch_base()
                .checked_add_signed(offset)
                .map(Some)
                .ok_or_else(|| invalid(value, "timestamp"))
        }
    }
}

/// Timestamps stored as `yyyyMMdd`, `yyyyMMdd 0` or `yyyyMMdd HHmmss`.
pub fn parse_basic_timestamp(value: &str) -> ReadResult<Option<NaiveDateTime>> {
    if value.is_empty() || value == NULL_PAIR || value == "0" {
        return Ok(None);
    }

    let (date, time) = match value.split_once(' ') {
        None => (value, None),
        Some((date, "0")) => (date, None),
        Some((date, time)) => (date, Some(time)),
    };

    let date = NaiveDate::parse_from_str(date, "%Y%m%d").map_err(|_| invalid(value, "date"))?;
    let time = match time {
        Some(time) => hhmmss(&left_pad_six(time))?,
        None => NaiveTime::MIN,
    };
    Ok(Some(date.and_time(time)))
}

/// Times stored as `HHmmss` without leading zeros.
pub fn parse_basic_time(value: &str) -> ReadResult<Option<NaiveTime>> {
    if value.is_empty() || value == "0" {
        return Ok(None);
    }
    hhmmss(&left_pad_six(value)).map(Some)
}

/// Hours from a packed `unit,flag,value` duration.
pub fn parse_duration_triple(value: &str) -> ReadResult<f64> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(ReadError::InvalidData(format!(
            "expected 3 duration components, found {}: {value}",
            parts.len()
        )));
    }
    parts[2]
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(value, "duration"))
}

/// Decode one text export field.
pub fn parse_column(
    table: &str,
    column: &str,
    data: &str,
    column_type: ColumnType,
    epoch_dates: bool,
) -> ReadResult<Option<Value>> {
    let value = match column_type {
        ColumnType::Bit => parse_boolean(data).map(|v| v.map(Value::Boolean)),
        ColumnType::Varchar => Ok(Some(Value::Text(parse_string(data)))),
        ColumnType::Time => parse_basic_time(data).map(|v| v.map(Value::Time)),
        ColumnType::Timestamp if epoch_dates => {
            parse_epoch_timestamp(data).map(|v| v.map(Value::Timestamp))
        }
        ColumnType::Timestamp => parse_basic_timestamp(data).map(|v| v.map(Value::Timestamp)),
        ColumnType::Double => parse_double(data).map(|v| v.map(Value::Double)),
        ColumnType::Integer => parse_integer(data).map(|v| v.map(Value::Integer)),
    };

    value.map_err(|err| {
        ReadError::InvalidData(format!(
            "Failed to parse {table}.{column} (data={data}, type={column_type:?}): {err}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .unwrap()
    }

    #[test]
    fn strings_lose_their_decoration() {
        assert_eq!(parse_string("<\"Survey, site\">"), "Survey, site");
        assert_eq!(parse_string("\"quoted\""), "quoted");
        assert_eq!(parse_string("plain"), "plain");
    }

    #[test]
    fn numeric_sentinels_are_absent() {
        assert_eq!(parse_double("-1 -1").unwrap(), None);
        assert_eq!(parse_double("").unwrap(), None);
        assert_eq!(parse_double("1.5E+2").unwrap(), Some(150.0));
        assert_eq!(parse_integer("3 4").unwrap(), None);
        assert_eq!(parse_integer("7.9").unwrap(), Some(7));
        assert_eq!(parse_boolean("2").unwrap(), Some(true));
        assert!(parse_integer("x").is_err());
    }

    #[test]
    fn epoch_timestamps_count_from_1900() {
        assert_eq!(
            parse_epoch_timestamp("2460670 3600").unwrap(),
            Some(at(2024, 12, 25, 1, 0, 0))
        );
        assert_eq!(parse_epoch_timestamp("83000").unwrap(), Some(at(1900, 1, 1, 8, 30, 0)));
        assert_eq!(parse_epoch_timestamp("-1 -1").unwrap(), None);
    }

    #[test]
    fn basic_timestamps_pad_their_time() {
        assert_eq!(
            parse_basic_timestamp("20240108 80000").unwrap(),
            Some(at(2024, 1, 8, 8, 0, 0))
        );
        assert_eq!(parse_basic_timestamp("20240108 0").unwrap(), Some(at(2024, 1, 8, 0, 0, 0)));
        assert_eq!(parse_basic_timestamp("0").unwrap(), None);
        assert_eq!(parse_basic_time("0").unwrap(), None);
        assert_eq!(parse_basic_time("93000").unwrap(), NaiveTime::from_hms_opt(9, 30, 0));
    }

    #[test]
    fn column_errors_name_the_column() {
        let err = parse_column("TASK", "NATURAL_ORDER", "abc", ColumnType::Integer, false).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TASK.NATURAL_ORDER (data=abc"));
        assert_eq!(
            parse_column("TASK", "START", "2460670 0", ColumnType::Timestamp, true).unwrap(),
            Some(Value::Timestamp(at(2024, 12, 25, 0, 0, 0)))
        );
    }
}
