use serde::{Deserialize, Serialize};

/// Telegram chat identifier of a recipient group. Supergroup ids are negative.
pub type GroupId = i64;

/// A selectable recipient group, as listed next to its checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOption {
    pub group_id: GroupId,
    pub group_name: String,
}

impl GroupOption {
    pub fn new(group_id: GroupId, group_name: impl Into<String>) -> Self {
        Self {
            group_id,
            group_name: group_name.into(),
        }
    }
}
