use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Quantity, RecordId};

/// One expenditure entry logged against a project's allowances.
///
/// The project is referenced by its user-facing `project_id`, the employee by an
/// id/name pair that is not checked against the roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsageRecord {
    pub project_id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub date: String,
    pub lodging_construction_local_spent: Quantity,
    pub lodging_construction_foreign_spent: Quantity,
    pub lodging_supervision_local_spent: Quantity,
    pub lodging_supervision_foreign_spent: Quantity,
    pub construction_overtime_spent: Quantity,
    pub supervision_overtime_spent: Quantity,
    #[serde(rename = "_id")]
    pub id: RecordId,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UsageRecord {
    pub fn new(project_id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            date: date.into(),
            ..Default::default()
        }
    }

    pub fn with_employee(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.employee_id = id.into();
        self.employee_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_file_format() {
        let mut record = UsageRecord::new("P1", "2025-03-01").with_employee("E1", "Lin");
        record.construction_overtime_spent = Quantity::from(2);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["projectId"], "P1");
        assert_eq!(json["employeeName"], "Lin");
        assert_eq!(json["constructionOvertimeSpent"], 2);
        assert_eq!(json["lodgingSupervisionLocalSpent"], 0);
        assert_eq!(json["_id"], "");
    }
}
