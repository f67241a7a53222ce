use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ledger::{compute_remaining, records_for, RemainingAllowances};
use crate::{Employee, Project, RecordId, StoreError, UsageRecord};

/// File name given to a document that has never been saved.
pub const UNTITLED_FILE_NAME: &str = "未命名專案檔.json";

/// The composite document: every collection the tracker persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectDocument {
    pub projects: Vec<Project>,
    pub time_entries: Vec<UsageRecord>,
    pub employees: Vec<Employee>,
}

impl ProjectDocument {
    /// Give every project and usage record without an `_id` a fresh one.
    /// Returns how many ids were assigned.
    pub fn assign_missing_ids(&mut self) -> usize {
        let mut assigned = 0;
        for project in self.projects.iter_mut().filter(|p| p.id.is_empty()) {
            project.id = RecordId::generate();
            assigned += 1;
        }
        for record in self.time_entries.iter_mut().filter(|r| r.id.is_empty()) {
            record.id = RecordId::generate();
            assigned += 1;
        }
        assigned
    }
}

/// The in-memory state of one editing session.
///
/// All mutations go through the methods below and mark the session as having unsaved
/// changes. Only a successful save (see [`crate::persistence`]) clears the flag.
#[derive(Debug, Clone, Default)]
pub struct Session {
    document: ProjectDocument,
    unsaved: bool,
}

impl Session {
    /// A fresh, empty document. It has never been written, so it starts unsaved.
    pub fn new_document() -> Self {
        Self {
            document: ProjectDocument::default(),
            unsaved: true,
        }
    }

    /// Wrap a document read from disk.
    pub fn from_loaded(mut document: ProjectDocument) -> Self {
        let assigned = document.assign_missing_ids();
        if assigned > 0 {
            debug!(assigned, "assigned ids to records loaded without one");
        }
        Self {
            document,
            unsaved: false,
        }
    }

    pub fn document(&self) -> &ProjectDocument {
        &self.document
    }

    pub fn projects(&self) -> &[Project] {
        &self.document.projects
    }

    pub fn usage_records(&self) -> &[UsageRecord] {
        &self.document.time_entries
    }

    pub fn employees(&self) -> &[Employee] {
        &self.document.employees
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub(crate) fn mark_saved(&mut self) {
        self.unsaved = false;
    }

    fn touch(&mut self) {
        self.unsaved = true;
    }

    pub fn project(&self, id: &RecordId) -> Option<&Project> {
        self.document.projects.iter().find(|p| &p.id == id)
    }

    /// First project with the given user-facing key.
    pub fn project_by_key(&self, project_id: &str) -> Option<&Project> {
        self.document
            .projects
            .iter()
            .find(|p| p.project_id == project_id)
    }

    pub fn usage_for_project<'a>(
        &'a self,
        project: &'a Project,
    ) -> impl Iterator<Item = &'a UsageRecord> + 'a {
        records_for(project, &self.document.time_entries)
    }

    pub fn remaining_for(&self, project: &Project) -> RemainingAllowances {
        compute_remaining(project, &self.document.time_entries)
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.document.employees.iter().find(|e| e.id == id)
    }

    /// Resolve an employee id/name pair against the roster.
    ///
    /// A known id wins and supplies the name; otherwise a known name supplies the id;
    /// otherwise both values are returned as typed.
    pub fn resolve_employee(&self, id: &str, name: &str) -> (String, String) {
        let id = id.trim();
        let name = name.trim();
        if !id.is_empty() {
            if let Some(employee) = self.employee(id) {
                return (employee.id.clone(), employee.name.clone());
            }
        }
        if !name.is_empty() {
            if let Some(employee) = self.document.employees.iter().find(|e| e.name == name) {
                return (employee.id.clone(), employee.name.clone());
            }
        }
        (id.to_string(), name.to_string())
    }

    /// Add a project at the top of the list under a newly generated internal id.
    pub fn add_project(&mut self, mut project: Project) -> RecordId {
        project.id = RecordId::generate();
        let id = project.id.clone();
        debug!(project_id = %project.project_id, %id, "adding project");
        self.document.projects.insert(0, project);
        self.touch();
        id
    }

    /// Replace a whole project record, matched by internal id.
    pub fn edit_project(&mut self, project: Project) -> Result<(), StoreError> {
        let Some(existing) = self
            .document
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
        else {
            warn!(id = %project.id, "edit of unknown project rejected");
            return Err(StoreError::ProjectNotFound(project.id));
        };
        if existing.project_id != project.project_id {
            warn!(
                expected = %existing.project_id,
                found = %project.project_id,
                "project id change rejected"
            );
            return Err(StoreError::ProjectIdImmutable {
                expected: existing.project_id.clone(),
                found: project.project_id,
            });
        }
        *existing = project;
        self.touch();
        Ok(())
    }

    /// Append a usage record, filling the employee pair from the roster when it
    /// matches.
    pub fn add_usage_record(&mut self, mut record: UsageRecord) -> RecordId {
        let (employee_id, employee_name) =
            self.resolve_employee(&record.employee_id, &record.employee_name);
        record.employee_id = employee_id;
        record.employee_name = employee_name;
        record.id = RecordId::generate();
        let id = record.id.clone();
        debug!(project_id = %record.project_id, %id, "adding usage record");
        self.document.time_entries.push(record);
        self.touch();
        id
    }

    pub fn delete_usage_record(&mut self, id: &RecordId) -> Result<UsageRecord, StoreError> {
        let index = self
            .document
            .time_entries
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| StoreError::UsageRecordNotFound(id.clone()))?;
        let removed = self.document.time_entries.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Append an employee. Ids are natural keys: a duplicate is rejected.
    pub fn add_employee(&mut self, employee: Employee) -> Result<(), StoreError> {
        if self.employee(&employee.id).is_some() {
            warn!(id = %employee.id, "duplicate employee rejected");
            return Err(StoreError::DuplicateEmployee(employee.id));
        }
        self.document.employees.push(employee);
        self.touch();
        Ok(())
    }

    /// Remove an employee. Usage records that name them are left as they are.
    pub fn delete_employee(&mut self, id: &str) -> Result<Employee, StoreError> {
        let index = self
            .document
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::EmployeeNotFound(id.to_string()))?;
        let removed = self.document.employees.remove(index);
        self.touch();
        Ok(removed)
    }
}
