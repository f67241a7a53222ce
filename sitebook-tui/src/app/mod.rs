use crate::config::SitebookConfig;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use sitebook::persistence::{
    suggested_file_name, DocumentShape, FileHandle, LoadedDocument, SaveOutcome,
};
use sitebook::{Project, RecordId, Session, StoreError, UsageRecord, UNTITLED_FILE_NAME};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::warn;

mod forms;
mod navigation;
mod state;
pub use forms::{FieldKind, Form, FormField, ProjectForm, UsageForm};
pub use state::{
    ConfirmAction, ConfirmDialog, PathPrompt, PromptPurpose, RosterPanel, TextInput, UsagePanel,
    View,
};

/// How long a status message stays on screen.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

/// Path chosen in a prompt, ready to hand to the file store.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptResult {
    Open(PathBuf),
    SaveAs(PathBuf),
}

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,
    status_set_at: Option<Instant>,

    // Document
    pub session: Session,
    pub has_document: bool,
    pub file: Option<FileHandle>,
    pub file_name: Option<String>,

    // Project list with fuzzy search
    pub search_input: TextInput,
    pub filtered_projects: Vec<usize>, // Indices into session.projects()
    pub project_index: usize,
    pub list_focused: bool,

    // Add form / edit modal
    pub project_form: Option<ProjectForm>,

    // Usage modal
    pub usage: Option<UsagePanel>,

    // Employee roster
    pub roster: RosterPanel,

    pub report_scroll: usize,

    // Overlays, topmost last
    pub path_prompt: Option<PathPrompt>,
    pub confirm: Option<ConfirmDialog>,
    pub alert: Option<String>,

    pub prompt_prefix: String,
}

impl App {
    pub fn new(cfg: &SitebookConfig) -> Self {
        Self {
            running: true,
            current_view: View::Welcome,
            status_message: None,
            status_set_at: None,
            session: Session::default(),
            has_document: false,
            file: None,
            file_name: None,
            search_input: TextInput::new(),
            filtered_projects: Vec::new(),
            project_index: 0,
            list_focused: true,
            project_form: None,
            usage: None,
            roster: RosterPanel::default(),
            report_scroll: 0,
            path_prompt: None,
            confirm: None,
            alert: None,
            prompt_prefix: cfg.prompt_prefix(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_set_at = Some(Instant::now());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_set_at = None;
    }

    /// Drop the status message once it has been visible for [`STATUS_TTL`].
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(set_at) = self.status_set_at {
            if now.duration_since(set_at) >= STATUS_TTL {
                self.clear_status();
            }
        }
    }

    pub fn show_alert(&mut self, message: String) {
        self.alert = Some(message);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.has_document && self.session.has_unsaved_changes()
    }

    /// File name shown in the header, with a marker while there are unsaved changes.
    pub fn document_title(&self) -> String {
        if !self.has_document {
            return "No file".to_string();
        }
        let name = self.file_name.as_deref().unwrap_or(UNTITLED_FILE_NAME);
        if self.session.has_unsaved_changes() {
            format!("{name} *")
        } else {
            name.to_string()
        }
    }

    pub fn navigate_to(&mut self, view: View) {
        if view.requires_document() && !self.has_document {
            self.set_status("Open a file (Ctrl+O) or start a new one (Ctrl+N) first".to_string());
            return;
        }
        if view == self.current_view {
            return;
        }

        match self.current_view {
            View::AddProject | View::EditProject => self.project_form = None,
            View::Usage => self.usage = None,
            _ => {}
        }

        match view {
            View::AddProject => self.project_form = Some(ProjectForm::add()),
            View::EditProject | View::Usage => {
                // Entered through begin_edit_selected / open_usage_for_selected.
                return;
            }
            View::Projects => self.filter_projects(),
            View::Reports => self.report_scroll = 0,
            View::Employees | View::Welcome => {}
        }
        self.current_view = view;
    }

    /// Whether a form holds input that has not been submitted.
    pub fn form_in_progress(&self) -> bool {
        let project_dirty = self.project_form.as_ref().is_some_and(|f| f.form.modified);
        let usage_dirty = self.usage.as_ref().is_some_and(|u| u.form.form.modified);
        project_dirty || usage_dirty
    }

    // ── File lifecycle ──────────────────────────────────────────────────────

    pub fn request_open(&mut self) {
        if self.has_unsaved_changes() {
            self.confirm_discard(ConfirmAction::DiscardAndOpen);
        } else {
            self.open_path_prompt(PromptPurpose::Open);
        }
    }

    pub fn request_new_document(&mut self) {
        if self.has_unsaved_changes() {
            self.confirm_discard(ConfirmAction::DiscardAndNew);
        } else {
            self.start_new_document();
        }
    }

    pub fn request_quit(&mut self) {
        if self.has_unsaved_changes() {
            self.confirm_discard(ConfirmAction::DiscardAndQuit);
        } else {
            self.quit();
        }
    }

    fn confirm_discard(&mut self, action: ConfirmAction) {
        self.confirm = Some(ConfirmDialog {
            title: "Unsaved changes".to_string(),
            message: "有未儲存變更，確定要放棄嗎？ (unsaved changes will be lost)".to_string(),
            action,
        });
    }

    pub fn start_new_document(&mut self) {
        self.load_session(Session::new_document(), None, UNTITLED_FILE_NAME.to_string());
        self.set_status("Started a new document".to_string());
    }

    pub fn apply_loaded(&mut self, loaded: LoadedDocument) {
        let LoadedDocument {
            handle,
            document,
            shape,
        } = loaded;
        let name = handle.name();
        let count = document.projects.len();
        self.load_session(Session::from_loaded(document), Some(handle), name.clone());
        let mut status = format!("Opened {name} ({count} projects)");
        if shape == DocumentShape::Legacy {
            status.push_str(", legacy format");
        }
        self.set_status(status);
    }

    fn load_session(&mut self, session: Session, file: Option<FileHandle>, name: String) {
        self.session = session;
        self.has_document = true;
        self.file = file;
        self.file_name = Some(name);
        self.project_form = None;
        self.usage = None;
        self.roster = RosterPanel::default();
        self.search_input.clear();
        self.project_index = 0;
        self.list_focused = true;
        self.current_view = View::Projects;
        self.filter_projects();
    }

    pub fn open_path_prompt(&mut self, purpose: PromptPurpose) {
        let mut initial = self.prompt_prefix.clone();
        if purpose == PromptPurpose::SaveAs {
            initial.push_str(&suggested_file_name(crate::time_utils::today()));
        }
        self.path_prompt = Some(PathPrompt {
            purpose,
            input: TextInput::from_str(&initial),
        });
    }

    /// Close the prompt silently, as a cancelled file picker does.
    pub fn cancel_path_prompt(&mut self) {
        self.path_prompt = None;
    }

    /// Close the prompt and return the chosen path. A blank path counts as a cancel.
    pub fn submit_path_prompt(&mut self) -> Option<PromptResult> {
        let prompt = self.path_prompt.take()?;
        let value = prompt.input.value.trim();
        if value.is_empty() {
            return None;
        }
        let path = PathBuf::from(value);
        Some(match prompt.purpose {
            PromptPurpose::Open => PromptResult::Open(path),
            PromptPurpose::SaveAs => PromptResult::SaveAs(path),
        })
    }

    /// Check that a save may start now, explaining in the status line when not.
    pub fn can_save(&mut self) -> bool {
        if !self.has_document {
            self.set_status("Nothing to save yet".to_string());
            return false;
        }
        if self.form_in_progress() {
            self.set_status("Finish or cancel the form before saving".to_string());
            return false;
        }
        true
    }

    pub fn apply_save_outcome(&mut self, outcome: SaveOutcome) {
        match outcome {
            SaveOutcome::Written(handle) => self.apply_saved_as(handle),
            SaveOutcome::Downloaded(path) => {
                self.set_status(format!("Saved a copy to {}", path.display()));
            }
            SaveOutcome::NeedsPath => self.open_path_prompt(PromptPurpose::SaveAs),
        }
    }

    pub fn apply_saved_as(&mut self, handle: FileHandle) {
        let name = handle.name();
        self.set_status(format!("Saved {name}"));
        self.file_name = Some(name);
        self.file = Some(handle);
    }

    // ── Project list ────────────────────────────────────────────────────────

    /// Filter projects based on search input using fuzzy matching
    pub fn filter_projects(&mut self) {
        let query = self.search_input.value.trim();
        let projects = self.session.projects();
        if query.is_empty() {
            self.filtered_projects = (0..projects.len()).collect();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(usize, i64)> = projects
                .iter()
                .enumerate()
                .filter_map(|(i, project)| {
                    matcher
                        .fuzzy_match(&project.search_text(), query)
                        .map(|score| (i, score))
                })
                .collect();
            scored.sort_by(|a, b| b.1.cmp(&a.1));
            self.filtered_projects = scored.into_iter().map(|(i, _)| i).collect();
        }
        if self.project_index >= self.filtered_projects.len() {
            self.project_index = self.filtered_projects.len().saturating_sub(1);
        }
    }

    pub fn search_input_char(&mut self, c: char) {
        self.search_input.insert(c);
        self.project_index = 0;
        self.filter_projects();
    }

    pub fn search_input_backspace(&mut self) {
        self.search_input.backspace();
        self.filter_projects();
    }

    pub fn search_input_clear(&mut self) {
        self.search_input.clear();
        self.filter_projects();
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let idx = *self.filtered_projects.get(self.project_index)?;
        self.session.projects().get(idx)
    }

    pub fn begin_edit_selected(&mut self) {
        let Some(form) = self.selected_project().map(ProjectForm::edit) else {
            self.set_status("No project selected".to_string());
            return;
        };
        self.project_form = Some(form);
        self.current_view = View::EditProject;
    }

    pub fn cancel_project_form(&mut self) {
        self.project_form = None;
        self.current_view = View::Projects;
        self.filter_projects();
    }

    /// Validate and commit the add form or edit modal. Validation problems stay
    /// inline in the form.
    pub fn submit_project_form(&mut self) {
        let Some(form) = self.project_form.as_mut() else {
            return;
        };
        let project = match form.to_project() {
            Ok(project) => project,
            Err(e) => {
                form.form.error = Some(e.to_string());
                return;
            }
        };
        let label = project.project_id.clone();
        let is_edit = form.is_edit();
        if is_edit {
            if let Err(e) = self.session.edit_project(project) {
                warn!(error = %e, "project edit rejected");
                self.show_alert(e.to_string());
                return;
            }
            self.set_status(format!("Updated project {label}"));
        } else {
            self.session.add_project(project);
            self.project_index = 0;
            self.search_input.clear();
            self.set_status(format!("Added project {label}"));
        }
        self.cancel_project_form();
    }

    // ── Usage modal ─────────────────────────────────────────────────────────

    pub fn open_usage_for_selected(&mut self) {
        let today = crate::time_utils::format_date(crate::time_utils::today());
        let Some(panel) = self.selected_project().map(|project| UsagePanel {
            project: project.id.clone(),
            form: UsageForm::new(&project.project_id, &today),
            selected_record: 0,
            records_focused: false,
        }) else {
            self.set_status("No project selected".to_string());
            return;
        };
        self.usage = Some(panel);
        self.current_view = View::Usage;
    }

    pub fn close_usage(&mut self) {
        self.usage = None;
        self.current_view = View::Projects;
    }

    pub fn usage_project(&self) -> Option<&Project> {
        let panel = self.usage.as_ref()?;
        self.session.project(&panel.project)
    }

    /// Usage records of the project open in the usage modal, in file order.
    pub fn usage_records(&self) -> Vec<&UsageRecord> {
        match self.usage_project() {
            Some(project) => self.session.usage_for_project(project).collect(),
            None => Vec::new(),
        }
    }

    pub fn sync_usage_employee(&mut self) {
        if let Some(panel) = self.usage.as_mut() {
            panel.form.sync_employee(&self.session);
        }
    }

    pub fn submit_usage_form(&mut self) {
        let Some(panel) = self.usage.as_mut() else {
            return;
        };
        let record = match panel.form.to_record() {
            Ok(record) => record,
            Err(e) => {
                panel.form.form.error = Some(e.to_string());
                return;
            }
        };
        panel.form = panel.form.next_entry();
        self.session.add_usage_record(record);

        let overdrawn = self
            .usage_project()
            .map(|p| self.session.remaining_for(p).overdrawn())
            .unwrap_or_default();
        if overdrawn.is_empty() {
            self.set_status("Usage recorded".to_string());
        } else {
            let labels: Vec<&str> = overdrawn.iter().map(|(c, _)| c.label()).collect();
            self.set_status(format!("Usage recorded; over budget: {}", labels.join(", ")));
        }
    }

    pub fn request_delete_selected_usage(&mut self) {
        let Some(panel) = self.usage.as_ref() else {
            return;
        };
        let Some(record) = self.usage_records().get(panel.selected_record).copied() else {
            return;
        };
        let who = if record.employee_name.is_empty() {
            record.employee_id.clone()
        } else {
            record.employee_name.clone()
        };
        self.confirm = Some(ConfirmDialog {
            title: "Delete usage record".to_string(),
            message: format!("Delete the {} entry for {}?", record.date, who),
            action: ConfirmAction::DeleteUsageRecord(record.id.clone()),
        });
    }

    // ── Employee roster ─────────────────────────────────────────────────────

    pub fn submit_employee_form(&mut self) {
        let employee = match self.roster.form.to_employee() {
            Ok(employee) => employee,
            Err(e) => {
                self.roster.form.form.error = Some(e.to_string());
                return;
            }
        };
        let label = format!("{} {}", employee.id, employee.name);
        match self.session.add_employee(employee) {
            Ok(()) => {
                self.roster.form = forms::EmployeeForm::new();
                self.set_status(format!("Added employee {label}"));
            }
            Err(e) => self.show_alert(e.to_string()),
        }
    }

    pub fn request_delete_selected_employee(&mut self) {
        let Some(employee) = self.session.employees().get(self.roster.selected) else {
            return;
        };
        self.confirm = Some(ConfirmDialog {
            title: "Delete employee".to_string(),
            message: format!("Delete {} ({})?", employee.name, employee.id),
            action: ConfirmAction::DeleteEmployee(employee.id.clone()),
        });
    }

    // ── Confirm dialog ──────────────────────────────────────────────────────

    pub fn confirm_yes(&mut self) {
        let Some(dialog) = self.confirm.take() else {
            return;
        };
        match dialog.action {
            ConfirmAction::DiscardAndOpen => self.open_path_prompt(PromptPurpose::Open),
            ConfirmAction::DiscardAndNew => self.start_new_document(),
            ConfirmAction::DiscardAndQuit => self.quit(),
            ConfirmAction::DeleteUsageRecord(id) => self.delete_usage_record(&id),
            ConfirmAction::DeleteEmployee(id) => self.delete_employee(&id),
        }
    }

    pub fn confirm_no(&mut self) {
        self.confirm = None;
    }

    fn delete_usage_record(&mut self, id: &RecordId) {
        match self.session.delete_usage_record(id) {
            Ok(_) => {
                let len = self.usage_records().len();
                if let Some(panel) = self.usage.as_mut() {
                    panel.selected_record = panel.selected_record.min(len.saturating_sub(1));
                    if len == 0 {
                        panel.records_focused = false;
                    }
                }
                self.set_status("Usage record deleted".to_string());
            }
            Err(e) => self.report_store_error(e),
        }
    }

    fn delete_employee(&mut self, id: &str) {
        match self.session.delete_employee(id) {
            Ok(employee) => {
                let len = self.session.employees().len();
                self.roster.selected = self.roster.selected.min(len.saturating_sub(1));
                if len == 0 {
                    self.roster.list_focused = false;
                }
                self.set_status(format!("Deleted employee {}", employee.id));
            }
            Err(e) => self.report_store_error(e),
        }
    }

    fn report_store_error(&mut self, e: StoreError) {
        warn!(error = %e, "mutation rejected");
        self.show_alert(e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitebook::ledger::AllowanceCategory;
    use sitebook::{Employee, ProjectDocument, Quantity};

    pub(crate) fn app_with(document: ProjectDocument) -> App {
        let mut app = App::new(&SitebookConfig::default());
        app.apply_loaded(LoadedDocument {
            handle: FileHandle::new("/tmp/projects.json", true),
            document,
            shape: DocumentShape::Composite,
        });
        app
    }

    fn sample_document() -> ProjectDocument {
        let mut trunk = Project::new("P1", "Trunk line");
        trunk.lodging_construction_local = Quantity::from(10);
        trunk.contractor = "Acme".to_string();
        let mut office = Project::new("P2", "Office fit-out");
        office.location = "Taipei".to_string();
        ProjectDocument {
            projects: vec![trunk, office],
            time_entries: Vec::new(),
            employees: vec![Employee::new("E1", "Lin")],
        }
    }

    fn fill(form: &mut Form, key: &str, value: &str) {
        form.focused = form.fields.iter().position(|f| f.key == key).unwrap();
        for c in value.chars() {
            form.input_char(c);
        }
    }

    #[test]
    fn views_need_a_document() {
        let mut app = App::new(&SitebookConfig::default());
        app.navigate_to(View::Projects);
        assert_eq!(app.current_view, View::Welcome);
        assert!(app.status_message.is_some());

        app.start_new_document();
        assert_eq!(app.current_view, View::Projects);
        assert!(app.has_unsaved_changes());
        assert_eq!(app.document_title(), format!("{UNTITLED_FILE_NAME} *"));
    }

    #[test]
    fn loaded_document_is_clean_and_listed() {
        let app = app_with(sample_document());
        assert!(!app.has_unsaved_changes());
        assert_eq!(app.document_title(), "projects.json");
        assert_eq!(app.filtered_projects, vec![0, 1]);
        assert_eq!(app.selected_project().unwrap().project_id, "P1");
    }

    #[test]
    fn search_matches_secondary_fields() {
        let mut app = app_with(sample_document());
        for c in "taipei".chars() {
            app.search_input_char(c);
        }
        assert_eq!(app.filtered_projects, vec![1]);
        app.search_input_clear();
        assert_eq!(app.filtered_projects.len(), 2);
    }

    #[test]
    fn adding_a_project_prepends_and_marks_unsaved() {
        let mut app = app_with(sample_document());
        app.navigate_to(View::AddProject);
        let form = &mut app.project_form.as_mut().unwrap().form;
        fill(form, "projectId", "P3");
        fill(form, "projectName", "Relay");
        app.submit_project_form();

        assert_eq!(app.current_view, View::Projects);
        assert!(app.project_form.is_none());
        assert_eq!(app.session.projects()[0].project_id, "P3");
        assert!(app.has_unsaved_changes());
    }

    #[test]
    fn invalid_form_stays_open_with_message() {
        let mut app = app_with(sample_document());
        app.navigate_to(View::AddProject);
        app.submit_project_form();
        let form = app.project_form.as_ref().unwrap();
        assert_eq!(form.form.error.as_deref(), Some("Project ID is required"));
        assert_eq!(app.current_view, View::AddProject);
        assert_eq!(app.session.projects().len(), 2);
    }

    #[test]
    fn editing_replaces_the_selected_project() {
        let mut app = app_with(sample_document());
        app.begin_edit_selected();
        assert_eq!(app.current_view, View::EditProject);
        let form = &mut app.project_form.as_mut().unwrap().form;
        fill(form, "note", "checked");
        app.submit_project_form();

        let project = app.session.project_by_key("P1").unwrap();
        assert_eq!(project.note, "checked");
        assert_eq!(project.lodging_construction_local, Quantity::from(10));
        assert_eq!(app.session.projects().len(), 2);
    }

    #[test]
    fn project_key_with_stray_whitespace_stays_linked() {
        let mut project = Project::new("P1 ", "Trunk line");
        project.lodging_construction_local = Quantity::from(10);
        let mut app = app_with(ProjectDocument {
            projects: vec![project],
            ..Default::default()
        });

        app.open_usage_for_selected();
        let form = &mut app.usage.as_mut().unwrap().form.form;
        fill(form, "lodgingConstructionLocalSpent", "4");
        app.submit_usage_form();
        assert_eq!(app.usage_records().len(), 1);
        assert_eq!(app.session.usage_records()[0].project_id, "P1 ");
        let project = app.usage_project().unwrap();
        assert_eq!(
            app.session
                .remaining_for(project)
                .get(AllowanceCategory::LodgingConstructionLocal),
            6.0
        );

        app.close_usage();
        app.begin_edit_selected();
        let form = &mut app.project_form.as_mut().unwrap().form;
        fill(form, "note", "checked");
        app.submit_project_form();
        assert!(app.alert.is_none());
        assert_eq!(app.session.project_by_key("P1 ").unwrap().note, "checked");
    }

    #[test]
    fn save_is_refused_while_a_form_has_input() {
        let mut app = app_with(sample_document());
        app.navigate_to(View::AddProject);
        assert!(app.can_save());
        let form = &mut app.project_form.as_mut().unwrap().form;
        fill(form, "projectId", "P");
        assert!(!app.can_save());
        app.navigate_to(View::Projects);
        assert!(app.can_save());
    }

    #[test]
    fn usage_entries_reduce_remaining_and_can_be_deleted() {
        let mut app = app_with(sample_document());
        app.open_usage_for_selected();
        assert_eq!(app.current_view, View::Usage);

        let form = &mut app.usage.as_mut().unwrap().form.form;
        fill(form, "employeeId", "E1");
        fill(form, "lodgingConstructionLocalSpent", "4");
        app.sync_usage_employee();
        app.submit_usage_form();

        let records = app.usage_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_name, "Lin");
        let project = app.usage_project().unwrap();
        let remaining = app.session.remaining_for(project);
        assert_eq!(
            remaining.get(sitebook::ledger::AllowanceCategory::LodgingConstructionLocal),
            6.0
        );

        app.usage.as_mut().unwrap().records_focused = true;
        app.request_delete_selected_usage();
        assert!(matches!(
            app.confirm.as_ref().map(|c| &c.action),
            Some(ConfirmAction::DeleteUsageRecord(_))
        ));
        app.confirm_yes();
        assert!(app.usage_records().is_empty());
        let project = app.usage_project().unwrap();
        assert_eq!(
            app.session
                .remaining_for(project)
                .get(sitebook::ledger::AllowanceCategory::LodgingConstructionLocal),
            10.0
        );
    }

    #[test]
    fn overdrawing_is_reported_in_status() {
        let mut app = app_with(sample_document());
        app.open_usage_for_selected();
        let form = &mut app.usage.as_mut().unwrap().form.form;
        fill(form, "lodgingConstructionLocalSpent", "12");
        app.submit_usage_form();
        let status = app.status_message.clone().unwrap();
        assert!(status.contains("over budget"), "{status}");
    }

    #[test]
    fn duplicate_employee_raises_alert() {
        let mut app = app_with(sample_document());
        app.navigate_to(View::Employees);
        fill(&mut app.roster.form.form, "id", "E1");
        fill(&mut app.roster.form.form, "name", "Someone");
        app.submit_employee_form();
        assert_eq!(app.alert.as_deref(), Some("employee id 'E1' already exists"));
        assert_eq!(app.session.employees().len(), 1);
        assert!(!app.has_unsaved_changes());
    }

    #[test]
    fn unsaved_changes_guard_open_new_and_quit() {
        let mut app = app_with(sample_document());
        app.request_open();
        assert!(app.confirm.is_none());
        assert_eq!(
            app.path_prompt.as_ref().map(|p| p.purpose),
            Some(PromptPurpose::Open)
        );
        app.cancel_path_prompt();

        app.session.add_employee(Employee::new("E2", "Chen")).unwrap();
        app.request_quit();
        assert!(app.running);
        app.confirm_no();
        app.request_new_document();
        assert_eq!(
            app.confirm.as_ref().map(|c| c.action.clone()),
            Some(ConfirmAction::DiscardAndNew)
        );
        app.confirm_yes();
        assert!(app.session.projects().is_empty());
        assert_eq!(app.file_name.as_deref(), Some(UNTITLED_FILE_NAME));
    }

    #[test]
    fn blank_prompt_counts_as_cancel() {
        let mut app = app_with(sample_document());
        app.open_path_prompt(PromptPurpose::Open);
        assert_eq!(app.submit_path_prompt(), None);
        assert!(app.path_prompt.is_none());

        app.open_path_prompt(PromptPurpose::SaveAs);
        let prompt = app.path_prompt.as_ref().unwrap();
        assert!(prompt.input.value.starts_with("project_"));
        assert!(prompt.input.value.ends_with(".json"));
        assert!(matches!(
            app.submit_path_prompt(),
            Some(PromptResult::SaveAs(_))
        ));
    }

    #[test]
    fn needs_path_outcome_opens_save_as_prompt() {
        let mut app = App::new(&SitebookConfig::default());
        app.start_new_document();
        app.apply_save_outcome(SaveOutcome::NeedsPath);
        assert_eq!(
            app.path_prompt.as_ref().map(|p| p.purpose),
            Some(PromptPurpose::SaveAs)
        );
    }

    #[test]
    fn status_expires_after_ttl() {
        let mut app = App::new(&SitebookConfig::default());
        app.set_status("hello".to_string());
        let set_at = Instant::now();
        app.expire_status(set_at);
        assert!(app.status_message.is_some());
        app.expire_status(set_at + STATUS_TTL + Duration::from_millis(1));
        assert!(app.status_message.is_none());
    }
}
