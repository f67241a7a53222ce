use super::*;

impl App {
    /// Move selection down in the project list
    pub fn project_select_next(&mut self) {
        if self.project_index + 1 < self.filtered_projects.len() {
            self.project_index += 1;
        }
    }

    /// Move selection up in the project list
    pub fn project_select_previous(&mut self) {
        self.project_index = self.project_index.saturating_sub(1);
    }

    /// Toggle focus between the search input and the project list
    pub fn toggle_list_focus(&mut self) {
        self.list_focused = !self.list_focused;
    }

    /// Switch the usage modal between the entry form and the record list.
    /// The list only takes focus when it has something to select.
    pub fn usage_toggle_focus(&mut self) {
        let has_records = !self.usage_records().is_empty();
        if let Some(panel) = self.usage.as_mut() {
            panel.records_focused = !panel.records_focused && has_records;
        }
    }

    pub fn usage_record_next(&mut self) {
        let len = self.usage_records().len();
        if let Some(panel) = self.usage.as_mut() {
            if panel.selected_record + 1 < len {
                panel.selected_record += 1;
            }
        }
    }

    pub fn usage_record_previous(&mut self) {
        if let Some(panel) = self.usage.as_mut() {
            panel.selected_record = panel.selected_record.saturating_sub(1);
        }
    }

    pub fn roster_toggle_focus(&mut self) {
        let has_employees = !self.session.employees().is_empty();
        self.roster.list_focused = !self.roster.list_focused && has_employees;
    }

    pub fn roster_next(&mut self) {
        if self.roster.selected + 1 < self.session.employees().len() {
            self.roster.selected += 1;
        }
    }

    pub fn roster_previous(&mut self) {
        self.roster.selected = self.roster.selected.saturating_sub(1);
    }

    pub fn report_scroll_down(&mut self) {
        self.report_scroll = self.report_scroll.saturating_add(1);
    }

    pub fn report_scroll_up(&mut self) {
        self.report_scroll = self.report_scroll.saturating_sub(1);
    }

    /// The form receiving keystrokes in the current view, if any.
    pub fn active_form_mut(&mut self) -> Option<&mut Form> {
        match self.current_view {
            View::AddProject | View::EditProject => {
                self.project_form.as_mut().map(|f| &mut f.form)
            }
            View::Usage => self
                .usage
                .as_mut()
                .filter(|u| !u.records_focused)
                .map(|u| &mut u.form.form),
            View::Employees if !self.roster.list_focused => Some(&mut self.roster.form.form),
            _ => None,
        }
    }
}
