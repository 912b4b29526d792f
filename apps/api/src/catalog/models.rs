use serde::{Deserialize, Serialize};

/// Compensation figures in whole dollars per year. Invariant: `entry <= median <= senior`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalaryRange {
    pub entry: u32,
    pub median: u32,
    pub senior: u32,
}

impl SalaryRange {
    pub fn is_ordered(&self) -> bool {
        self.entry <= self.median && self.median <= self.senior
    }
}

/// A single career profile. Records are loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub description: String,
    pub detailed_description: String,
    pub interests: Vec<String>,
    pub salary_range: SalaryRange,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    /// e.g. "Much faster than average (25% growth)"
    pub outlook: String,
    #[serde(default)]
    pub work_environment: Option<String>,
    #[serde(default)]
    pub typical_day: Vec<String>,
    #[serde(default)]
    pub action_steps: Vec<String>,
    /// Not reciprocal, and may name ids that are not in the catalog.
    #[serde(default)]
    pub related_careers: Vec<String>,
}

impl CareerRecord {
    /// The qualitative part of `outlook`, before any parenthesized figure.
    pub fn growth_descriptor(&self) -> &str {
        self.outlook
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
    }

    pub fn has_interest(&self, tag: &str) -> bool {
        self.interests.iter().any(|i| i == tag)
    }
}
