use serde::{Deserialize, Serialize};

/// A roster entry. Employees are keyed by their user-entered `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    pub id: String,
    pub name: String,
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
