//! Allowance reconciliation: budgeted amounts minus what has been spent.
//!
//! Everything here is recomputed from the full usage list on every call; nothing is
//! cached between queries.

use strum::{EnumIter, IntoEnumIterator};

use crate::{Project, Quantity, UsageRecord};

/// One of the six budget lines every project carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum AllowanceCategory {
    LodgingConstructionLocal,
    LodgingConstructionForeign,
    LodgingSupervisionLocal,
    LodgingSupervisionForeign,
    ConstructionOvertime,
    SupervisionOvertime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowanceUnit {
    Nights,
    Hours,
}

impl AllowanceCategory {
    pub fn all() -> impl Iterator<Item = AllowanceCategory> {
        Self::iter()
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            AllowanceCategory::LodgingConstructionLocal => "Construction lodging (local)",
            AllowanceCategory::LodgingConstructionForeign => "Construction lodging (away)",
            AllowanceCategory::LodgingSupervisionLocal => "Supervision lodging (local)",
            AllowanceCategory::LodgingSupervisionForeign => "Supervision lodging (away)",
            AllowanceCategory::ConstructionOvertime => "Construction overtime",
            AllowanceCategory::SupervisionOvertime => "Supervision overtime",
        }
    }

    /// Short column heading.
    pub fn short_label(self) -> &'static str {
        match self {
            AllowanceCategory::LodgingConstructionLocal => "C.Lodge L",
            AllowanceCategory::LodgingConstructionForeign => "C.Lodge A",
            AllowanceCategory::LodgingSupervisionLocal => "S.Lodge L",
            AllowanceCategory::LodgingSupervisionForeign => "S.Lodge A",
            AllowanceCategory::ConstructionOvertime => "C.OT",
            AllowanceCategory::SupervisionOvertime => "S.OT",
        }
    }

    pub fn unit(self) -> AllowanceUnit {
        match self {
            AllowanceCategory::ConstructionOvertime | AllowanceCategory::SupervisionOvertime => {
                AllowanceUnit::Hours
            }
            _ => AllowanceUnit::Nights,
        }
    }

    /// Project field holding the budget, by its file name.
    pub fn budget_key(self) -> &'static str {
        match self {
            AllowanceCategory::LodgingConstructionLocal => "lodgingConstructionLocal",
            AllowanceCategory::LodgingConstructionForeign => "lodgingConstructionForeign",
            AllowanceCategory::LodgingSupervisionLocal => "lodgingSupervisionLocal",
            AllowanceCategory::LodgingSupervisionForeign => "lodgingSupervisionForeign",
            AllowanceCategory::ConstructionOvertime => "constructionOvertime",
            AllowanceCategory::SupervisionOvertime => "supervisionOvertime",
        }
    }

    /// Usage record field holding the spent amount, by its file name.
    pub fn spent_key(self) -> &'static str {
        match self {
            AllowanceCategory::LodgingConstructionLocal => "lodgingConstructionLocalSpent",
            AllowanceCategory::LodgingConstructionForeign => "lodgingConstructionForeignSpent",
            AllowanceCategory::LodgingSupervisionLocal => "lodgingSupervisionLocalSpent",
            AllowanceCategory::LodgingSupervisionForeign => "lodgingSupervisionForeignSpent",
            AllowanceCategory::ConstructionOvertime => "constructionOvertimeSpent",
            AllowanceCategory::SupervisionOvertime => "supervisionOvertimeSpent",
        }
    }

    pub fn budgeted(self, project: &Project) -> &Quantity {
        match self {
            AllowanceCategory::LodgingConstructionLocal => &project.lodging_construction_local,
            AllowanceCategory::LodgingConstructionForeign => &project.lodging_construction_foreign,
            AllowanceCategory::LodgingSupervisionLocal => &project.lodging_supervision_local,
            AllowanceCategory::LodgingSupervisionForeign => &project.lodging_supervision_foreign,
            AllowanceCategory::ConstructionOvertime => &project.construction_overtime,
            AllowanceCategory::SupervisionOvertime => &project.supervision_overtime,
        }
    }

    pub fn budgeted_mut(self, project: &mut Project) -> &mut Quantity {
        match self {
            AllowanceCategory::LodgingConstructionLocal => &mut project.lodging_construction_local,
            AllowanceCategory::LodgingConstructionForeign => {
                &mut project.lodging_construction_foreign
            }
            AllowanceCategory::LodgingSupervisionLocal => &mut project.lodging_supervision_local,
            AllowanceCategory::LodgingSupervisionForeign => {
                &mut project.lodging_supervision_foreign
            }
            AllowanceCategory::ConstructionOvertime => &mut project.construction_overtime,
            AllowanceCategory::SupervisionOvertime => &mut project.supervision_overtime,
        }
    }

    pub fn spent(self, record: &UsageRecord) -> &Quantity {
        match self {
            AllowanceCategory::LodgingConstructionLocal => &record.lodging_construction_local_spent,
            AllowanceCategory::LodgingConstructionForeign => {
                &record.lodging_construction_foreign_spent
            }
            AllowanceCategory::LodgingSupervisionLocal => &record.lodging_supervision_local_spent,
            AllowanceCategory::LodgingSupervisionForeign => {
                &record.lodging_supervision_foreign_spent
            }
            AllowanceCategory::ConstructionOvertime => &record.construction_overtime_spent,
            AllowanceCategory::SupervisionOvertime => &record.supervision_overtime_spent,
        }
    }

    pub fn spent_mut(self, record: &mut UsageRecord) -> &mut Quantity {
        match self {
            AllowanceCategory::LodgingConstructionLocal => {
                &mut record.lodging_construction_local_spent
            }
            AllowanceCategory::LodgingConstructionForeign => {
                &mut record.lodging_construction_foreign_spent
            }
            AllowanceCategory::LodgingSupervisionLocal => {
                &mut record.lodging_supervision_local_spent
            }
            AllowanceCategory::LodgingSupervisionForeign => {
                &mut record.lodging_supervision_foreign_spent
            }
            AllowanceCategory::ConstructionOvertime => &mut record.construction_overtime_spent,
            AllowanceCategory::SupervisionOvertime => &mut record.supervision_overtime_spent,
        }
    }
}

/// Remaining quantity per category for one project. Values may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RemainingAllowances {
    values: [f64; 6],
}

impl RemainingAllowances {
    pub fn get(&self, category: AllowanceCategory) -> f64 {
        self.values[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (AllowanceCategory, f64)> + '_ {
        AllowanceCategory::all().map(move |c| (c, self.get(c)))
    }

    /// Categories that have been overspent, with their (negative) remainder.
    pub fn overdrawn(&self) -> Vec<(AllowanceCategory, f64)> {
        self.iter().filter(|(_, remaining)| *remaining < 0.0).collect()
    }

    pub fn is_overdrawn(&self) -> bool {
        self.values.iter().any(|v| *v < 0.0)
    }
}

/// Usage records that belong to `project` (exact, case-sensitive key match).
pub fn records_for<'a>(
    project: &'a Project,
    usage_records: &'a [UsageRecord],
) -> impl Iterator<Item = &'a UsageRecord> + 'a {
    usage_records
        .iter()
        .filter(move |r| r.project_id == project.project_id)
}

fn spent_totals(project: &Project, usage_records: &[UsageRecord]) -> [f64; 6] {
    let mut totals = [0.0; 6];
    for record in records_for(project, usage_records) {
        for category in AllowanceCategory::all() {
            totals[category.index()] += category.spent(record).value();
        }
    }
    totals
}

/// Remaining allowance per category: budget minus everything spent against the
/// project. No clamping; callers decide how to flag negative values.
pub fn compute_remaining(project: &Project, usage_records: &[UsageRecord]) -> RemainingAllowances {
    let spent = spent_totals(project, usage_records);
    let mut values = [0.0; 6];
    for category in AllowanceCategory::all() {
        let i = category.index();
        values[i] = category.budgeted(project).value() - spent[i];
    }
    RemainingAllowances { values }
}

/// A display row of the ledger for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerLine {
    pub category: AllowanceCategory,
    pub budgeted: f64,
    pub spent: f64,
    pub remaining: f64,
}

impl LedgerLine {
    pub fn is_overdrawn(&self) -> bool {
        self.remaining < 0.0
    }
}

pub fn ledger_lines(project: &Project, usage_records: &[UsageRecord]) -> Vec<LedgerLine> {
    let spent = spent_totals(project, usage_records);
    AllowanceCategory::all()
        .map(|category| {
            let budgeted = category.budgeted(project).value();
            let spent = spent[category.index()];
            LedgerLine {
                category,
                budgeted,
                spent,
                remaining: budgeted - spent,
            }
        })
        .collect()
}

/// A project with at least one overspent category.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortfall<'a> {
    pub project: &'a Project,
    pub categories: Vec<(AllowanceCategory, f64)>,
}

pub fn overdrawn_projects<'a>(
    projects: &'a [Project],
    usage_records: &[UsageRecord],
) -> Vec<Shortfall<'a>> {
    projects
        .iter()
        .filter_map(|project| {
            let categories = compute_remaining(project, usage_records).overdrawn();
            if categories.is_empty() {
                None
            } else {
                Some(Shortfall {
                    project,
                    categories,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;

    fn project(key: &str) -> Project {
        let mut p = Project::new(key, "Trunk line");
        p.lodging_construction_local = Quantity::from(10);
        p.construction_overtime = Quantity::Text("12".to_string());
        p.supervision_overtime = Quantity::from(1.5);
        p
    }

    fn usage(key: &str, lodging: i64) -> UsageRecord {
        let mut r = UsageRecord::new(key, "2025-03-01");
        r.lodging_construction_local_spent = Quantity::from(lodging);
        r
    }

    #[test]
    fn remaining_is_budget_minus_matching_spend() {
        let p = project("P1");
        let records = vec![usage("P1", 4), usage("P1", 3)];
        let remaining = compute_remaining(&p, &records);
        assert_eq!(remaining.get(AllowanceCategory::LodgingConstructionLocal), 3.0);
        assert_eq!(remaining.get(AllowanceCategory::ConstructionOvertime), 12.0);
        assert_eq!(remaining.get(AllowanceCategory::SupervisionOvertime), 1.5);
        assert_eq!(remaining.get(AllowanceCategory::LodgingSupervisionForeign), 0.0);
    }

    #[test]
    fn other_projects_and_case_variants_are_ignored() {
        let p = project("P1");
        let records = vec![usage("P2", 4), usage("p1", 5), usage("P1", 1)];
        let remaining = compute_remaining(&p, &records);
        assert_eq!(remaining.get(AllowanceCategory::LodgingConstructionLocal), 9.0);
    }

    #[test]
    fn overspending_goes_negative_and_is_reported() {
        let p = project("P1");
        let mut extra = usage("P1", 0);
        extra.supervision_overtime_spent = Quantity::from(4);
        let records = vec![usage("P1", 11), extra];
        let remaining = compute_remaining(&p, &records);
        assert_eq!(remaining.get(AllowanceCategory::LodgingConstructionLocal), -1.0);
        assert!(remaining.is_overdrawn());
        assert_eq!(
            remaining.overdrawn(),
            vec![
                (AllowanceCategory::LodgingConstructionLocal, -1.0),
                (AllowanceCategory::SupervisionOvertime, -2.5),
            ]
        );
    }

    #[test]
    fn non_numeric_values_count_as_zero() {
        let mut p = project("P1");
        p.lodging_construction_local = Quantity::Text("ten".to_string());
        let mut r = usage("P1", 0);
        r.lodging_construction_local_spent = Quantity::Text("".to_string());
        r.construction_overtime_spent = Quantity::Unset;
        let remaining = compute_remaining(&p, &[r]);
        assert_eq!(remaining.get(AllowanceCategory::LodgingConstructionLocal), 0.0);
        assert_eq!(remaining.get(AllowanceCategory::ConstructionOvertime), 12.0);
    }

    #[test]
    fn computing_twice_gives_identical_results() {
        let p = project("P1");
        let records = vec![usage("P1", 2), usage("P1", 7)];
        assert_eq!(compute_remaining(&p, &records), compute_remaining(&p, &records));
    }

    #[test]
    fn ledger_lines_agree_with_remaining() {
        let p = project("P1");
        let records = vec![usage("P1", 4), usage("P1", 3)];
        let remaining = compute_remaining(&p, &records);
        let lines = ledger_lines(&p, &records);
        assert_eq!(lines.len(), 6);
        for line in &lines {
            assert_eq!(line.remaining, remaining.get(line.category));
            assert_eq!(line.remaining, line.budgeted - line.spent);
        }
        assert_eq!(lines[0].spent, 7.0);
    }

    #[test]
    fn overdrawn_projects_lists_only_shortfalls() {
        let projects = vec![project("P1"), project("P2")];
        let records = vec![usage("P2", 15)];
        let shortfalls = overdrawn_projects(&projects, &records);
        assert_eq!(shortfalls.len(), 1);
        assert_eq!(shortfalls[0].project.project_id, "P2");
        assert_eq!(
            shortfalls[0].categories,
            vec![(AllowanceCategory::LodgingConstructionLocal, -5.0)]
        );
    }

    #[test]
    fn field_keys_match_units() {
        assert_eq!(AllowanceCategory::all().count(), 6);
        assert_eq!(
            AllowanceCategory::ConstructionOvertime.unit(),
            AllowanceUnit::Hours
        );
        assert_eq!(
            AllowanceCategory::LodgingSupervisionForeign.spent_key(),
            "lodgingSupervisionForeignSpent"
        );
    }
}
