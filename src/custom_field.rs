use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::duration::Duration;

/// Entity a user defined field is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldClass {
    Task,
    Resource,
    Assignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldDataType {
    Boolean,
    Integer,
    Numeric,
    Text,
    Date,
    Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDefinedField {
    pub unique_id: i32,
    pub name: String,
    pub field_class: FieldClass,
    pub data_type: FieldDataType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CustomValue {
    Boolean(bool),
    Integer(i32),
    Numeric(f64),
    Text(String),
    Date(NaiveDateTime),
    Duration(Duration),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCodeValue {
    pub unique_id: i32,
    pub sequence_number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_unique_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCode {
    pub unique_id: i32,
    pub sequence_number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub values: Vec<ActivityCodeValue>,
}

impl ActivityCode {
    pub fn value(&self, unique_id: i32) -> Option<&ActivityCodeValue> {
        self.values.iter().find(|v| v.unique_id == unique_id)
    }
}
