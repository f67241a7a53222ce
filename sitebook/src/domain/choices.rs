use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Construction status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ProjectStatus {
    #[strum(serialize = "未開工")]
    NotStarted,
    #[strum(serialize = "施工中")]
    InProgress,
    #[strum(serialize = "主體完工")]
    StructureComplete,
    #[strum(serialize = "已完工")]
    Completed,
    #[strum(serialize = "停工中")]
    Suspended,
}

/// Network discipline the project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ProjectCategory {
    #[strum(serialize = "傳輸")]
    Transmission,
    #[strum(serialize = "寬頻")]
    Broadband,
    #[strum(serialize = "交換")]
    Switching,
}

/// How the work is contracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ContractMethod {
    #[strum(serialize = "自辦")]
    InHouse,
    #[strum(serialize = "發包")]
    Outsourced,
    #[strum(serialize = "發包/自辦")]
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ProjectType {
    #[strum(serialize = "新設")]
    New,
    #[strum(serialize = "擴充")]
    Expansion,
    #[strum(serialize = "汰換")]
    Replacement,
}

/// Stored values of every variant, in declaration order.
pub fn choice_values<T>() -> Vec<String>
where
    T: IntoEnumIterator + ToString,
{
    T::iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn stored_strings_parse() {
        assert_eq!(ProjectStatus::from_str("施工中").unwrap(), ProjectStatus::InProgress);
        assert_eq!(ContractMethod::from_str("發包/自辦").unwrap(), ContractMethod::Mixed);
        assert!(ProjectCategory::from_str("unknown").is_err());
    }

    #[test]
    fn choice_values_follow_declaration_order() {
        assert_eq!(
            choice_values::<ProjectType>(),
            vec!["新設".to_string(), "擴充".to_string(), "汰換".to_string()]
        );
        assert_eq!(choice_values::<ProjectStatus>().len(), 5);
    }
}
