use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::custom_field::CustomValue;
use crate::duration::Duration;
use crate::task::TaskKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ResourceType {
    /// Permanent resources: people and equipment.
    #[default]
    Work,
    /// Consumable resources.
    Material,
}

/// Units available between two optional instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDateTime>,
    /// Percentage, 100 meaning one full unit.
    pub units: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resource {
    pub unique_id: i32,
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    pub generic: bool,
    /// The resource's own calendar, derived from its base calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_rate: Option<f64>,
    #[serde(default)]
    pub availability: Vec<Availability>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<i32, CustomValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceAssignment {
    pub unique_id: Option<i32>,
    pub task: TaskKey,
    pub resource_unique_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<NaiveDateTime>,
    /// Percentage of the resource allocated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_work: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_work: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_work_complete: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<i32, CustomValue>,
}

/// Initials from a name: the first character plus the character following each
/// space, unless that character is itself a space.
pub fn initials(name: &str) -> Option<String> {
    let chars: Vec<char> = name.chars().collect();
    let first = *chars.first()?;
    let mut result = String::from(first);

    let mut index = 1;
    while let Some(offset) = chars[index.min(chars.len())..].iter().position(|c| *c == ' ') {
        index += offset + 1;
        if let Some(c) = chars.get(index).filter(|c| **c != ' ') {
            result.push(*c);
        }
        index += 1;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_repeated_spaces() {
        assert_eq!(initials("Ada King Lovelace").as_deref(), Some("AKL"));
        assert_eq!(initials("Ada  King").as_deref(), Some("A"));
        assert_eq!(initials("").as_deref(), None);
    }
}
