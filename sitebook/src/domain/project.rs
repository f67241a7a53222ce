use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use super::{ContractMethod, ProjectCategory, ProjectStatus, ProjectType, Quantity, RecordId};

/// A construction project record.
///
/// `project_id` is the user-facing key that usage records point at; `id` is the
/// generated internal identifier used for edits. Fields the tracker does not know
/// about are carried in `extra` so they are written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub project_id: String,
    pub contract_id: String,
    pub status: String,
    pub project_name: String,
    pub year: String,
    pub category: String,
    pub method: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub designer: String,
    pub contractor: String,
    pub supervisor: String,
    pub assistant_supervisor: String,
    pub in_charge: String,
    pub location: String,
    pub note: String,
    pub start_date: String,
    pub end_date: String,

    // Budgeted allowances
    pub construction_overtime: Quantity,
    pub supervision_overtime: Quantity,
    pub lodging_construction_local: Quantity,
    pub lodging_construction_foreign: Quantity,
    pub lodging_supervision_local: Quantity,
    pub lodging_supervision_foreign: Quantity,

    pub business_trip: String,
    pub budget_note: String,
    #[serde(rename = "_id")]
    pub id: RecordId,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn new(project_id: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            project_name: project_name.into(),
            ..Default::default()
        }
    }

    pub fn status_choice(&self) -> Option<ProjectStatus> {
        ProjectStatus::from_str(&self.status).ok()
    }

    pub fn category_choice(&self) -> Option<ProjectCategory> {
        ProjectCategory::from_str(&self.category).ok()
    }

    pub fn method_choice(&self) -> Option<ContractMethod> {
        ContractMethod::from_str(&self.method).ok()
    }

    pub fn type_choice(&self) -> Option<ProjectType> {
        ProjectType::from_str(&self.project_type).ok()
    }

    fn extra_text(&self, key: &str) -> &str {
        self.extra.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Name shown in lists. Bare-array files from the first version of the tracker
    /// stored it as `name`.
    pub fn display_name(&self) -> &str {
        if self.project_name.is_empty() {
            self.extra_text("name")
        } else {
            &self.project_name
        }
    }

    /// Text the project list search matches against.
    pub fn search_text(&self) -> String {
        [
            self.project_id.as_str(),
            self.display_name(),
            self.extra_text("client"),
            self.contract_id.as_str(),
            self.contractor.as_str(),
            self.designer.as_str(),
            self.supervisor.as_str(),
            self.in_charge.as_str(),
            self.location.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let project: Project = serde_json::from_str(r#"{"projectId":"P1"}"#).unwrap();
        assert_eq!(project.project_id, "P1");
        assert_eq!(project.project_name, "");
        assert_eq!(project.lodging_construction_local.value(), 0.0);
        assert!(project.id.is_empty());
    }

    #[test]
    fn legacy_name_and_client_are_shown_and_searchable() {
        let project: Project =
            serde_json::from_str(r#"{"id":"PRJ-1","name":"Harbour","client":"City"}"#).unwrap();
        assert_eq!(project.display_name(), "Harbour");
        assert_eq!(project.search_text(), "Harbour City");
        assert_eq!(Project::new("P1", "Trunk").display_name(), "Trunk");
    }

    #[test]
    fn wire_names_match_file_format() {
        let mut project = Project::new("P1", "Fiber trunk");
        project.project_type = "新設".to_string();
        project.id = RecordId::from("abc");
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["projectId"], "P1");
        assert_eq!(json["type"], "新設");
        assert_eq!(json["_id"], "abc");
        assert_eq!(json["lodgingSupervisionForeign"], 0);
        assert_eq!(json["assistantSupervisor"], "");
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let raw = r#"{"projectId":"P1","progress":40,"client":"ACME"}"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.extra["progress"], 40);
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["client"], "ACME");
    }

    #[test]
    fn choices_parse_from_stored_strings() {
        let mut project = Project::new("P1", "x");
        project.status = "已完工".to_string();
        project.category = "寬頻".to_string();
        assert_eq!(project.status_choice(), Some(ProjectStatus::Completed));
        assert_eq!(project.category_choice(), Some(ProjectCategory::Broadband));
        assert_eq!(project.method_choice(), None);
    }

    #[test]
    fn search_text_skips_empty_fields() {
        let mut project = Project::new("P1", "Trunk line");
        project.contractor = "ACME".to_string();
        assert_eq!(project.search_text(), "P1 Trunk line ACME");
    }
}
