//! Typed input forms for the three record kinds.
//!
//! A [`Form`] is an ordered list of labelled text inputs. Each record kind wraps one
//! and knows how to build it from a record and turn it back into one.

use sitebook::ledger::AllowanceCategory;
use sitebook::{
    choice_values, ContractMethod, Employee, Project, ProjectCategory, ProjectStatus, ProjectType,
    Quantity, RecordId, Session, UsageRecord,
};
use thiserror::Error;
use time::macros::format_description;

use super::TextInput;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{0} must be a date (YYYY-MM-DD)")]
    InvalidDate(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Choice(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Shown but not editable.
    pub locked: bool,
    pub input: TextInput,
}

impl FormField {
    fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            locked: false,
            input: TextInput::new(),
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn cycle_choice(&mut self, forward: bool) {
        let FieldKind::Choice(options) = &self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let next = match options.iter().position(|o| *o == self.input.value) {
            Some(i) if forward => (i + 1) % options.len(),
            Some(i) => (i + options.len() - 1) % options.len(),
            None => 0,
        };
        let value = options[next].clone();
        self.input.set(&value);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub focused: usize,
    pub error: Option<String>,
    /// Set once the user changes any field.
    pub modified: bool,
}

impl Form {
    fn with_fields(fields: Vec<FormField>) -> Self {
        let mut form = Self {
            fields,
            ..Default::default()
        };
        if form.fields.first().is_some_and(|f| f.locked) {
            form.focus_next();
        }
        form
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn focused_key(&self) -> Option<&'static str> {
        self.focused_field().map(|f| f.key)
    }

    fn editable_field(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused).filter(|f| !f.locked)
    }

    pub fn focus_next(&mut self) {
        let len = self.fields.len();
        for step in 1..=len {
            let idx = (self.focused + step) % len;
            if !self.fields[idx].locked {
                self.focused = idx;
                return;
            }
        }
    }

    pub fn focus_previous(&mut self) {
        let len = self.fields.len();
        for step in 1..=len {
            let idx = (self.focused + len - step) % len;
            if !self.fields[idx].locked {
                self.focused = idx;
                return;
            }
        }
    }

    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.editable_field() else {
            return;
        };
        if matches!(field.kind, FieldKind::Choice(_)) {
            return;
        }
        field.input.insert(c);
        self.modified = true;
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.editable_field() else {
            return;
        };
        if matches!(field.kind, FieldKind::Choice(_)) {
            return;
        }
        field.input.backspace();
        self.modified = true;
    }

    /// Left/Right: move the cursor in text fields, step through options in choice
    /// fields.
    pub fn move_horizontal(&mut self, left: bool) {
        let Some(field) = self.editable_field() else {
            return;
        };
        if matches!(field.kind, FieldKind::Choice(_)) {
            field.cycle_choice(!left);
            self.modified = true;
        } else if left {
            field.input.move_left();
        } else {
            field.input.move_right();
        }
    }

    pub fn cursor_home_end(&mut self, home: bool) {
        if let Some(field) = self.editable_field() {
            if home {
                field.input.home();
            } else {
                field.input.end();
            }
        }
    }

    pub fn clear_focused(&mut self) {
        if let Some(field) = self.editable_field() {
            if !matches!(field.kind, FieldKind::Choice(_)) {
                field.input.clear();
                self.modified = true;
            }
        }
    }

    fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn value(&self, key: &str) -> &str {
        self.field(key).map(|f| f.input.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, key: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.input.set(value);
        }
    }

    /// Check required, numeric and date fields in display order.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in &self.fields {
            let value = field.input.value.trim();
            if value.is_empty() {
                if field.required {
                    return Err(FormError::Required(field.label));
                }
                continue;
            }
            match field.kind {
                FieldKind::Number if Quantity::parse_input(value).is_none() => {
                    return Err(FormError::NotANumber(field.label));
                }
                FieldKind::Date if !is_iso_date(value) => {
                    return Err(FormError::InvalidDate(field.label));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn text(&self, key: &str) -> String {
        self.value(key).trim().to_string()
    }

    fn is_locked(&self, key: &str) -> bool {
        self.field(key).is_some_and(|f| f.locked)
    }

    fn quantity(&self, key: &str) -> Quantity {
        Quantity::parse_input(self.value(key)).unwrap_or_default()
    }
}

pub fn is_iso_date(value: &str) -> bool {
    time::Date::parse(value, format_description!("[year]-[month]-[day]")).is_ok()
}

fn text(key: &'static str, label: &'static str) -> FormField {
    FormField::new(key, label, FieldKind::Text)
}

fn number(key: &'static str, label: &'static str) -> FormField {
    FormField::new(key, label, FieldKind::Number)
}

fn date(key: &'static str, label: &'static str) -> FormField {
    FormField::new(key, label, FieldKind::Date)
}

fn choice(key: &'static str, label: &'static str, options: Vec<String>) -> FormField {
    let mut field = FormField::new(key, label, FieldKind::Choice(options));
    field.cycle_choice(true);
    field
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectFormMode {
    Add,
    Edit(RecordId),
}

/// Add/edit form for a project. Editing keeps fields the form does not show.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub mode: ProjectFormMode,
    pub form: Form,
    base: Project,
}

const PROJECT_TEXT_KEYS: &[&str] = &[
    "projectId",
    "contractId",
    "projectName",
    "status",
    "year",
    "category",
    "method",
    "type",
    "designer",
    "contractor",
    "supervisor",
    "assistantSupervisor",
    "inCharge",
    "location",
    "startDate",
    "endDate",
    "businessTrip",
    "budgetNote",
    "note",
];

fn project_text_mut<'a>(project: &'a mut Project, key: &str) -> Option<&'a mut String> {
    Some(match key {
        "projectId" => &mut project.project_id,
        "contractId" => &mut project.contract_id,
        "projectName" => &mut project.project_name,
        "status" => &mut project.status,
        "year" => &mut project.year,
        "category" => &mut project.category,
        "method" => &mut project.method,
        "type" => &mut project.project_type,
        "designer" => &mut project.designer,
        "contractor" => &mut project.contractor,
        "supervisor" => &mut project.supervisor,
        "assistantSupervisor" => &mut project.assistant_supervisor,
        "inCharge" => &mut project.in_charge,
        "location" => &mut project.location,
        "startDate" => &mut project.start_date,
        "endDate" => &mut project.end_date,
        "businessTrip" => &mut project.business_trip,
        "budgetNote" => &mut project.budget_note,
        "note" => &mut project.note,
        _ => return None,
    })
}

impl ProjectForm {
    fn fields() -> Vec<FormField> {
        let mut fields = vec![
            text("projectId", "Project ID").required(),
            text("contractId", "Contract ID"),
            text("projectName", "Project name").required(),
            choice("status", "Status", choice_values::<ProjectStatus>()),
            text("year", "Year"),
            choice("category", "Category", choice_values::<ProjectCategory>()),
            choice("method", "Method", choice_values::<ContractMethod>()),
            choice("type", "Type", choice_values::<ProjectType>()),
            text("designer", "Designer"),
            text("contractor", "Contractor"),
            text("supervisor", "Supervisor"),
            text("assistantSupervisor", "Assistant supervisor"),
            text("inCharge", "In charge"),
            text("location", "Location"),
            date("startDate", "Start date"),
            date("endDate", "End date"),
        ];
        fields.extend(AllowanceCategory::all().map(|c| number(c.budget_key(), c.label())));
        fields.extend([
            text("businessTrip", "Business trip"),
            text("budgetNote", "Budget note"),
            text("note", "Note"),
        ]);
        fields
    }

    pub fn add() -> Self {
        Self {
            mode: ProjectFormMode::Add,
            form: Form::with_fields(Self::fields()),
            base: Project::default(),
        }
    }

    /// Edit form for an existing project. The project ID is locked: usage records
    /// refer to it.
    pub fn edit(project: &Project) -> Self {
        let mut fields = Self::fields();
        let mut source = project.clone();
        for field in &mut fields {
            if let Some(value) = project_text_mut(&mut source, field.key) {
                field.input.set(value);
            }
            if field.key == "projectId" {
                field.locked = true;
            }
        }
        for category in AllowanceCategory::all() {
            if let Some(field) = fields.iter_mut().find(|f| f.key == category.budget_key()) {
                field.input.set(&category.budgeted(project).to_input());
            }
        }
        Self {
            mode: ProjectFormMode::Edit(project.id.clone()),
            form: Form::with_fields(fields),
            base: project.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, ProjectFormMode::Edit(_))
    }

    /// Validate and build the record. Locked fields and fields left untouched on edit
    /// keep their stored value verbatim; only changed input is trimmed.
    pub fn to_project(&self) -> Result<Project, FormError> {
        self.form.validate()?;
        let mut project = self.base.clone();
        for key in PROJECT_TEXT_KEYS {
            if self.form.is_locked(key) {
                continue;
            }
            let input = self.form.value(key);
            if let Some(slot) = project_text_mut(&mut project, key) {
                if slot.as_str() != input {
                    *slot = input.trim().to_string();
                }
            }
        }
        for category in AllowanceCategory::all() {
            let input = self.form.value(category.budget_key());
            let current = category.budgeted(&self.base);
            if input != current.to_input() {
                *category.budgeted_mut(&mut project) = self.form.quantity(category.budget_key());
            }
        }
        if let ProjectFormMode::Edit(id) = &self.mode {
            project.id = id.clone();
        }
        Ok(project)
    }
}

/// Entry form in the usage modal. The project is fixed by the modal and its key is
/// kept exactly as stored, since records match it by plain string equality.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageForm {
    project_id: String,
    pub form: Form,
}

impl UsageForm {
    pub fn new(project_id: &str, today: &str) -> Self {
        let mut project = text("projectId", "Project ID");
        project.locked = true;
        project.input.set(project_id);
        let mut day = date("date", "Date").required();
        day.input.set(today);
        let mut fields = vec![
            project,
            day,
            text("employeeId", "Employee ID"),
            text("employeeName", "Employee name"),
        ];
        fields.extend(AllowanceCategory::all().map(|c| number(c.spent_key(), c.label())));
        Self {
            project_id: project_id.to_string(),
            form: Form::with_fields(fields),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Fill the other half of the employee pair when the field being typed in matches
    /// a roster entry.
    pub fn sync_employee(&mut self, session: &Session) {
        match self.form.focused_key() {
            Some("employeeId") => {
                let id = self.form.value("employeeId").trim().to_string();
                if let Some(employee) = session.employee(&id) {
                    let name = employee.name.clone();
                    self.form.set_value("employeeName", &name);
                }
            }
            Some("employeeName") => {
                let name = self.form.value("employeeName").trim().to_string();
                if name.is_empty() {
                    return;
                }
                if let Some(employee) = session.employees().iter().find(|e| e.name == name) {
                    let id = employee.id.clone();
                    self.form.set_value("employeeId", &id);
                }
            }
            _ => {}
        }
    }

    pub fn to_record(&self) -> Result<UsageRecord, FormError> {
        self.form.validate()?;
        let mut record = UsageRecord::new(self.project_id.clone(), self.form.text("date"))
            .with_employee(self.form.text("employeeId"), self.form.text("employeeName"));
        for category in AllowanceCategory::all() {
            *category.spent_mut(&mut record) = self.form.quantity(category.spent_key());
        }
        Ok(record)
    }

    /// Fresh form for the next entry on the same project and date.
    pub fn next_entry(&self) -> Self {
        Self::new(&self.project_id, self.form.value("date"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub form: Form,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self {
            form: Form::with_fields(vec![
                text("id", "Employee ID").required(),
                text("name", "Name").required(),
            ]),
        }
    }

    pub fn to_employee(&self) -> Result<Employee, FormError> {
        self.form.validate()?;
        Ok(Employee::new(self.form.text("id"), self.form.text("name")))
    }
}
