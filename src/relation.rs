use serde::{Deserialize, Serialize};

use crate::duration::Duration;
use crate::task::TaskKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RelationType {
    #[default]
    FinishStart,
    StartStart,
    FinishFinish,
    StartFinish,
}

impl RelationType {
    /// Link kinds in stored order; anything out of range is finish-to-start.
    pub fn from_link_kind(kind: i32) -> Self {
        const TYPES: [RelationType; 4] = [
            RelationType::FinishStart,
            RelationType::StartStart,
            RelationType::FinishFinish,
            RelationType::StartFinish,
        ];
        usize::try_from(kind)
            .ok()
            .and_then(|index| TYPES.get(index).copied())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<i32>,
    pub predecessor: TaskKey,
    pub successor: TaskKey,
    pub relation_type: RelationType,
    pub lag: Duration,
}
