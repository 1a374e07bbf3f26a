use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::{AstaReader, is_blank};
use crate::custom_field::{
    ActivityCode, ActivityCodeValue, CustomValue, FieldClass, FieldDataType, UserDefinedField,
};
use crate::duration::Duration;
use crate::graph::sort_hierarchy;
use crate::row::{Row, Rows, Value};

/// Entity kinds a user defined field can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectType {
    Bar,
    Task,
    Milestone,
    PermanentResource,
    ConsumableResource,
    PermanentScheduleAllocation,
}

impl ObjectType {
    fn from_id(id: i32) -> Option<Self> {
        match id {
            7 => Some(Self::Bar),
            21 => Some(Self::Task),
            22 => Some(Self::Milestone),
            61 => Some(Self::ConsumableResource),
            62 => Some(Self::PermanentResource),
            67 => Some(Self::PermanentScheduleAllocation),
            _ => None,
        }
    }

    fn field_class(self) -> FieldClass {
        match self {
            Self::Bar | Self::Task | Self::Milestone => FieldClass::Task,
            Self::PermanentResource | Self::ConsumableResource => FieldClass::Resource,
            Self::PermanentScheduleAllocation => FieldClass::Assignment,
        }
    }
}

fn field_data_type(id: i32) -> Option<FieldDataType> {
    match id {
        0 => Some(FieldDataType::Boolean),
        6 => Some(FieldDataType::Integer),
        8 => Some(FieldDataType::Numeric),
        9 | 24 => Some(FieldDataType::Text),
        13 => Some(FieldDataType::Date),
        15 => Some(FieldDataType::Duration),
        _ => None,
    }
}

// Stored numbers arrive either typed or as text depending on the source.
fn number_as_integer(row: &dyn Row) -> Option<i32> {
    match row.value("DATA_AS_NUMBER")? {
        Value::Integer(v) => Some(*v),
        Value::Double(v) => Some(*v as i32),
        Value::Text(v) => v.trim().parse().ok(),
        _ => None,
    }
}

fn number_as_double(row: &dyn Row) -> Option<f64> {
    match row.value("DATA_AS_NUMBER")? {
        Value::Integer(v) => Some(f64::from(*v)),
        Value::Double(v) => Some(*v),
        Value::Text(v) => v.trim().parse().ok(),
        _ => None,
    }
}

fn field_value(data_type: FieldDataType, row: &dyn Row) -> Option<CustomValue> {
    match data_type {
        FieldDataType::Boolean => Some(CustomValue::Boolean(number_as_integer(row) == Some(1))),
        FieldDataType::Integer => number_as_integer(row).map(CustomValue::Integer),
        FieldDataType::Numeric => number_as_double(row).map(CustomValue::Numeric),
        FieldDataType::Date => row.get_date("DATA_AS_DATE").map(CustomValue::Date),
        FieldDataType::Duration => Some(CustomValue::Duration(Duration::hours(
            number_as_double(row).unwrap_or(0.0),
        ))),
        FieldDataType::Text => row
            .value("DATA_AS_NOTE")
            .map(|v| CustomValue::Text(v.to_string())),
    }
}

impl AstaReader {
    /// Field definitions followed by the values attached to tasks,
    /// resources and assignments. Unknown object or data types are skipped.
    pub fn process_user_defined_fields(&mut self, definitions: &[Box<dyn Row>], data: &[Box<dyn Row>]) {
        let mut fields: HashMap<i32, (ObjectType, FieldDataType)> = HashMap::new();
        for row in definitions {
            let Some(object_type) = row.get_integer("OBJ_TYPE").and_then(ObjectType::from_id) else {
                continue;
            };
            let Some(data_type) = row.get_integer("DATA_TYPE").and_then(field_data_type) else {
                continue;
            };
            let Some(unique_id) = row.get_integer("UDF_ID") else {
                continue;
            };
            self.project.user_defined_fields.push(UserDefinedField {
                unique_id,
                name: row.get_string("UDF_NAME").unwrap_or_default(),
                field_class: object_type.field_class(),
                data_type,
            });
            fields.insert(unique_id, (object_type, data_type));
        }

        let mut assigned = 0;
        for row in data {
            let Some(field_id) = row.get_integer("UDF_ID") else {
                continue;
            };
            let Some(&(object_type, data_type)) = fields.get(&field_id) else {
                continue;
            };
            let Some(object_id) = row.get_integer("OBJ_ID") else {
                continue;
            };
            let Some(value) = field_value(data_type, row.as_ref()) else {
                continue;
            };

            let target = match object_type {
                ObjectType::Bar | ObjectType::Task | ObjectType::Milestone => {
                    let map = match object_type {
                        ObjectType::Bar => &self.bar_map,
                        ObjectType::Task => &self.task_map,
                        _ => &self.milestone_map,
                    };
                    match map.get(&object_id).copied() {
                        Some(key) => Some(&mut self.project.task_mut(key).custom_fields),
                        None => None,
                    }
                }
                ObjectType::PermanentResource | ObjectType::ConsumableResource => self
                    .project
                    .resource_by_unique_id_mut(object_id)
                    .map(|resource| &mut resource.custom_fields),
                ObjectType::PermanentScheduleAllocation => self
                    .project
                    .assignments
                    .iter_mut()
                    .find(|a| a.unique_id == Some(object_id))
                    .map(|assignment| &mut assignment.custom_fields),
            };
            if let Some(custom_fields) = target {
                custom_fields.insert(field_id, value);
                assigned += 1;
            }
        }
        debug!(
            fields = self.project.user_defined_fields.len(),
            values = assigned,
            "user defined fields processed"
        );
    }

    /// Code libraries become activity codes. Library entries form a value
    /// hierarchy, ordered by short name among siblings.
    pub fn process_code_libraries(&mut self, libraries: &[Box<dyn Row>], entries: Rows, assignments: &[Box<dyn Row>]) {
        for row in libraries {
            let Some(unique_id) = row.get_integer("ID") else {
                continue;
            };
            let sequence_number = self.project.activity_codes.len() as i32 + 1;
            self.project.activity_codes.push(ActivityCode {
                unique_id,
                sequence_number,
                name: row.get_string("NAME"),
                values: Vec::new(),
            });
        }

        let by_short_name = |a: &Box<dyn Row>, b: &Box<dyn Row>| a.get_string("SHORT_NAME").cmp(&b.get_string("SHORT_NAME"));
        let entries = sort_hierarchy(
            entries,
            |row| row.get_integer("ID"),
            |row| row.get_integer("CODE_LIBRARY_ENTRY"),
            Some(&by_short_name),
        );

        let mut known_values: HashSet<i32> = HashSet::new();
        for row in &entries {
            let Some(code) = row
                .get_integer("CODE_LIBRARY")
                .and_then(|id| self.project.activity_codes.iter().position(|c| c.unique_id == id))
            else {
                continue;
            };
            let Some(unique_id) = row.get_integer("ID") else {
                continue;
            };

            let description = row.get_string("NAME");
            let mut name = row.get_string("SHORT_NAME");
            if is_blank(name.as_deref()) {
                name = description.clone();
            }
            let parent_unique_id = row
                .get_integer("CODE_LIBRARY_ENTRY")
                .filter(|id| known_values.contains(id));

            let code = &mut self.project.activity_codes[code];
            let sequence_number = code.values.len() as i32 + 1;
            code.values.push(ActivityCodeValue {
                unique_id,
                sequence_number,
                name,
                description,
                parent_unique_id,
            });
            known_values.insert(unique_id);
        }

        for row in assignments {
            let Some(value) = row
                .get_integer("ASSIGNED_TO")
                .filter(|id| known_values.contains(id))
            else {
                continue;
            };
            // hammock tasks have no task
            let Some(task) = self.task_by_asta_id(row.get_integer("CODES")) else {
                continue;
            };
            self.project.task_mut(task).activity_code_values.push(value);
        }
    }
}
