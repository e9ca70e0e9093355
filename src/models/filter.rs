use serde::Deserialize;

/// Role filter sent by the dashboard: `"all"` or an exact role title.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum RoleFilter {
    #[default]
    All,
    Exact(String),
}

impl RoleFilter {
    pub fn matches(&self, role: &str) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Exact(wanted) => wanted == role,
        }
    }
}

impl From<String> for RoleFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value == "all" {
            RoleFilter::All
        } else {
            RoleFilter::Exact(value)
        }
    }
}

impl From<&str> for RoleFilter {
    fn from(value: &str) -> Self {
        RoleFilter::from(value.to_string())
    }
}

/// Named years-of-experience ranges offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum ExperienceBand {
    #[default]
    All,
    /// 0-2 years
    Entry,
    /// 3-5 years
    Mid,
    /// 6-10 years
    Senior,
    /// more than 10 years
    Expert,
}

impl ExperienceBand {
    pub fn contains(&self, years: u32) -> bool {
        match self {
            ExperienceBand::All => true,
            ExperienceBand::Entry => years <= 2,
            ExperienceBand::Mid => (3..=5).contains(&years),
            ExperienceBand::Senior => (6..=10).contains(&years),
            ExperienceBand::Expert => years > 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceBand::All => "all",
            ExperienceBand::Entry => "0-2",
            ExperienceBand::Mid => "3-5",
            ExperienceBand::Senior => "6-10",
            ExperienceBand::Expert => "10+",
        }
    }
}

impl From<&str> for ExperienceBand {
    fn from(value: &str) -> Self {
        // An unescaped `10+` in a query string arrives as `10 `.
        match value.trim() {
            "0-2" => ExperienceBand::Entry,
            "3-5" => ExperienceBand::Mid,
            "6-10" => ExperienceBand::Senior,
            "10+" | "10" => ExperienceBand::Expert,
            _ => ExperienceBand::All,
        }
    }
}

impl From<String> for ExperienceBand {
    fn from(value: String) -> Self {
        ExperienceBand::from(value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    ExperienceAsc,
    ExperienceDesc,
    NewestFirst,
    OldestFirst,
    /// Keeps the incoming order. Unknown sort tokens land here.
    Unsorted,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name",
            SortKey::NameDesc => "name-desc",
            SortKey::ExperienceAsc => "experience",
            SortKey::ExperienceDesc => "experience-desc",
            SortKey::NewestFirst => "date",
            SortKey::OldestFirst => "date-desc",
            SortKey::Unsorted => "none",
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value {
            "name" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "experience" => SortKey::ExperienceAsc,
            "experience-desc" => SortKey::ExperienceDesc,
            "date" => SortKey::NewestFirst,
            "date-desc" => SortKey::OldestFirst,
            _ => SortKey::Unsorted,
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::from(value.as_str())
    }
}

/// Search, filter and sort selection for the candidate list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: String,
    pub role: RoleFilter,
    pub experience: ExperienceBand,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn sorted_by(sort: SortKey) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn is_filtering(&self) -> bool {
        !self.search.is_empty()
            || self.role != RoleFilter::All
            || self.experience != ExperienceBand::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive() {
        assert!(ExperienceBand::Entry.contains(0));
        assert!(ExperienceBand::Entry.contains(2));
        assert!(!ExperienceBand::Entry.contains(3));
        assert!(ExperienceBand::Mid.contains(3));
        assert!(ExperienceBand::Mid.contains(5));
        assert!(ExperienceBand::Senior.contains(6));
        assert!(ExperienceBand::Senior.contains(10));
        assert!(!ExperienceBand::Expert.contains(10));
        assert!(ExperienceBand::Expert.contains(11));
    }

    #[test]
    fn unknown_tokens_have_no_effect() {
        assert_eq!(ExperienceBand::from("senior"), ExperienceBand::All);
        assert_eq!(SortKey::from("salary"), SortKey::Unsorted);
        assert_eq!(RoleFilter::from("all"), RoleFilter::All);
        assert_eq!(
            RoleFilter::from("Designer"),
            RoleFilter::Exact("Designer".to_string())
        );
    }

    #[test]
    fn expert_band_survives_form_decoding() {
        assert_eq!(ExperienceBand::from("10+"), ExperienceBand::Expert);
        assert_eq!(ExperienceBand::from("10 "), ExperienceBand::Expert);
        assert_eq!(ExperienceBand::from(" 3-5 "), ExperienceBand::Mid);
    }

    #[test]
    fn criteria_deserialize_from_dashboard_tokens() {
        let criteria: FilterCriteria = serde_json::from_str(
            r#"{"search":"ann","role":"Backend Developer","experience":"10+","sort":"date-desc"}"#,
        )
        .unwrap();
        assert_eq!(criteria.search, "ann");
        assert_eq!(criteria.role, RoleFilter::Exact("Backend Developer".into()));
        assert_eq!(criteria.experience, ExperienceBand::Expert);
        assert_eq!(criteria.sort, SortKey::OldestFirst);
        assert!(criteria.is_filtering());

        let defaults: FilterCriteria = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, FilterCriteria::default());
        assert!(!defaults.is_filtering());
    }
}
