use thiserror::Error;

use crate::RecordId;

/// Rejected record store mutations. The store is unchanged whenever one is returned.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("project not found: {0}")]
    ProjectNotFound(RecordId),
    #[error("project id cannot change after creation (was '{expected}', got '{found}')")]
    ProjectIdImmutable { expected: String, found: String },
    #[error("usage record not found: {0}")]
    UsageRecordNotFound(RecordId),
    #[error("employee id '{0}' already exists")]
    DuplicateEmployee(String),
    #[error("employee not found: {0}")]
    EmployeeNotFound(String),
}
