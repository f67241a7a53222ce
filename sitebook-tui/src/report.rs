use sitebook::format_amount;
use sitebook::ledger::{ledger_lines, overdrawn_projects};
use sitebook::{Project, UsageRecord};
use std::fmt::Write;

/// Plain-text allowance report for the `report` command.
pub fn render_report(projects: &[Project], records: &[UsageRecord], overdrawn_only: bool) -> String {
    let mut out = String::new();
    let shortfalls = overdrawn_projects(projects, records);

    let listed: Vec<&Project> = if overdrawn_only {
        shortfalls.iter().map(|s| s.project).collect()
    } else {
        projects.iter().collect()
    };

    for project in &listed {
        let _ = writeln!(out, "{}  {}", project.project_id, project.display_name());
        let _ = writeln!(
            out,
            "  {:<30}{:>10}{:>10}{:>10}",
            "Allowance", "Budget", "Spent", "Remaining"
        );
        for line in ledger_lines(project, records) {
            let mark = if line.is_overdrawn() { "!" } else { " " };
            let _ = writeln!(
                out,
                "{} {:<30}{:>10}{:>10}{:>10}",
                mark,
                line.category.label(),
                format_amount(line.budgeted),
                format_amount(line.spent),
                format_amount(line.remaining),
            );
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{} project(s), {} over budget",
        projects.len(),
        shortfalls.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitebook::Quantity;

    fn fixture() -> (Vec<Project>, Vec<UsageRecord>) {
        let mut p1 = Project::new("P1", "Trunk");
        p1.lodging_construction_local = Quantity::from(10);
        let mut p2 = Project::new("P2", "Relay");
        p2.construction_overtime = Quantity::from(4);

        let mut a = UsageRecord::new("P1", "2025-03-01");
        a.lodging_construction_local_spent = Quantity::from(4);
        let mut b = UsageRecord::new("P1", "2025-03-02");
        b.lodging_construction_local_spent = Quantity::Text("3".to_string());
        let mut c = UsageRecord::new("P2", "2025-03-02");
        c.construction_overtime_spent = Quantity::from(6.5);
        (vec![p1, p2], vec![a, b, c])
    }

    #[test]
    fn report_lists_every_project_with_remaining_values() {
        let (projects, records) = fixture();
        let report = render_report(&projects, &records, false);
        assert!(report.contains("P1  Trunk"));
        assert!(report.contains("P2  Relay"));
        let lodging = report
            .lines()
            .find(|l| l.contains("Construction lodging (local)"))
            .unwrap();
        assert!(lodging.starts_with(' '));
        assert!(lodging.trim_end().ends_with('3'), "{lodging}");
        assert!(report.ends_with("2 project(s), 1 over budget\n"));
    }

    #[test]
    fn overdrawn_only_report_marks_negative_lines() {
        let (projects, records) = fixture();
        let report = render_report(&projects, &records, true);
        assert!(!report.contains("P1  Trunk"));
        let overtime = report
            .lines()
            .find(|l| l.contains("Construction overtime"))
            .unwrap();
        assert!(overtime.starts_with('!'));
        assert!(overtime.trim_end().ends_with("-2.5"), "{overtime}");
    }
}
