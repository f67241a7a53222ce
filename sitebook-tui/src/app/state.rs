use sitebook::RecordId;

use super::forms::{EmployeeForm, UsageForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Welcome,
    Projects,
    AddProject,
    EditProject,
    Usage,
    Employees,
    Reports,
}

impl View {
    /// Views that need an open document.
    pub fn requires_document(self) -> bool {
        !matches!(self, View::Welcome)
    }
}

/// State of the usage-entry modal for one project.
#[derive(Debug, Clone)]
pub struct UsagePanel {
    pub project: RecordId,
    pub form: UsageForm,
    pub selected_record: usize,
    pub records_focused: bool,
}

/// State of the employee roster screen.
#[derive(Debug, Clone, Default)]
pub struct RosterPanel {
    pub form: EmployeeForm,
    pub selected: usize,
    pub list_focused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    Open,
    SaveAs,
}

/// The path prompt standing in for a file picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrompt {
    pub purpose: PromptPurpose,
    pub input: TextInput,
}

/// What happens when a confirmation is accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    DiscardAndOpen,
    DiscardAndNew,
    DiscardAndQuit,
    DeleteUsageRecord(RecordId),
    DeleteEmployee(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
}

/// A single-line text input with a cursor that may sit mid-string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Replace the whole value and park the cursor at the end.
    pub fn set(&mut self, s: &str) {
        self.value = s.to_string();
        self.cursor = self.value.len();
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }
}
