//! Filter evaluator. A multi-predicate browse filter over the catalog.
//!
//! Fields combine with AND. Within `interest_tags` the match is OR: a record
//! needs only one of the selected tags. The evaluator is total: unknown
//! categories or odd search strings simply match nothing.

use serde::{Deserialize, Serialize};

use crate::catalog::CareerRecord;

/// Sentinel the browse UI sends for "any category".
pub const ANY_CATEGORY: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum CategoryFilter {
    #[default]
    Any,
    Exact(String),
}

impl CategoryFilter {
    /// Maps the UI value to a filter; `"All"` (or nothing) means any.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some(ANY_CATEGORY) => CategoryFilter::Any,
            Some(category) => CategoryFilter::Exact(category.to_string()),
        }
    }

    fn matches(&self, record: &CareerRecord) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Exact(category) => record.category == *category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub category: CategoryFilter,
    pub interest_tags: Vec<String>,
    pub salary_floor: u32,
    pub salary_ceiling: u32,
    /// Matched verbatim; callers normalize whitespace before building a `FilterSpec`.
    pub search_text: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            category: CategoryFilter::Any,
            interest_tags: Vec::new(),
            salary_floor: 0,
            salary_ceiling: u32::MAX,
            search_text: String::new(),
        }
    }
}

impl FilterSpec {
    pub fn matches(&self, record: &CareerRecord) -> bool {
        self.category.matches(record)
            && self.matches_interests(record)
            && self.matches_salary(record)
            && self.matches_search(record)
    }

    fn matches_interests(&self, record: &CareerRecord) -> bool {
        self.interest_tags.is_empty() || self.interest_tags.iter().any(|t| record.has_interest(t))
    }

    fn matches_salary(&self, record: &CareerRecord) -> bool {
        let median = record.salary_range.median;
        median >= self.salary_floor && median <= self.salary_ceiling
    }

    fn matches_search(&self, record: &CareerRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        record.title.to_lowercase().contains(&needle)
            || record.description.to_lowercase().contains(&needle)
    }
}

/// Returns the records passing the filter, in catalog order.
pub fn apply_filter<'a>(records: &'a [CareerRecord], spec: &FilterSpec) -> Vec<&'a CareerRecord> {
    records.iter().filter(|r| spec.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::record;
    use crate::catalog::Catalog;

    fn ids<'a>(records: &[&'a CareerRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn sample() -> Vec<CareerRecord> {
        let mut designer = record("ux-designer", "Design", &["design", "psychology"], 105000);
        designer.title = "UX Designer".to_string();
        designer.description = "Craft intuitive digital experiences".to_string();
        let mut developer = record("software-developer", "Technology", &["technology"], 120000);
        developer.title = "Software Developer".to_string();
        developer.description = "Build and DESIGN software systems".to_string();
        let mut analyst = record("data-analyst", "Technology", &["analysis", "mathematics"], 85000);
        analyst.title = "Data Analyst".to_string();
        analyst.description = "Turn data into insight".to_string();
        vec![designer, developer, analyst]
    }

    #[test]
    fn test_category_filter_selects_exact_match() {
        let records = vec![
            record("d", "Design", &["design"], 90000),
            record("t", "Technology", &["technology"], 90000),
        ];
        let spec = FilterSpec {
            category: CategoryFilter::Exact("Design".into()),
            salary_ceiling: 250000,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_filter(&records, &spec)), vec!["d"]);
    }

    #[test]
    fn test_unknown_category_yields_no_matches() {
        let spec = FilterSpec {
            category: CategoryFilter::Exact("Astronomy".into()),
            ..FilterSpec::default()
        };
        assert!(apply_filter(&sample(), &spec).is_empty());
    }

    #[test]
    fn test_default_spec_matches_everything_in_order() {
        let records = sample();
        let matched = apply_filter(&records, &FilterSpec::default());
        assert_eq!(
            ids(&matched),
            vec!["ux-designer", "software-developer", "data-analyst"]
        );
    }

    #[test]
    fn test_interest_tags_use_or_semantics() {
        let spec = FilterSpec {
            interest_tags: vec!["psychology".into(), "mathematics".into()],
            ..FilterSpec::default()
        };
        assert_eq!(
            ids(&apply_filter(&sample(), &spec)),
            vec!["ux-designer", "data-analyst"]
        );
    }

    #[test]
    fn test_unregistered_interest_tag_matches_nothing() {
        let spec = FilterSpec {
            interest_tags: vec!["underwater-welding".into()],
            ..FilterSpec::default()
        };
        assert!(apply_filter(&sample(), &spec).is_empty());
    }

    #[test]
    fn test_salary_bounds_are_inclusive_on_median() {
        let spec = FilterSpec {
            salary_floor: 85000,
            salary_ceiling: 105000,
            ..FilterSpec::default()
        };
        assert_eq!(
            ids(&apply_filter(&sample(), &spec)),
            vec!["ux-designer", "data-analyst"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let spec = FilterSpec {
            search_text: "design".into(),
            ..FilterSpec::default()
        };
        // title match and description match
        assert_eq!(
            ids(&apply_filter(&sample(), &spec)),
            vec!["ux-designer", "software-developer"]
        );
    }

    #[test]
    fn test_search_ignores_other_fields() {
        let spec = FilterSpec {
            search_text: "Technology".into(),
            ..FilterSpec::default()
        };
        // category is not searched
        assert!(apply_filter(&sample(), &spec).is_empty());
    }

    #[test]
    fn test_whitespace_search_is_literal() {
        let spec = FilterSpec {
            search_text: "   ".into(),
            ..FilterSpec::default()
        };
        assert!(apply_filter(&sample(), &spec).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::builtin().unwrap();
        let spec = FilterSpec {
            interest_tags: vec!["creativity".into()],
            salary_ceiling: 130000,
            ..FilterSpec::default()
        };
        let first = apply_filter(catalog.all(), &spec);
        let second = apply_filter(catalog.all(), &spec);
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_adding_interest_tags_never_shrinks_result() {
        let catalog = Catalog::builtin().unwrap();
        let mut spec = FilterSpec {
            interest_tags: vec!["design".into()],
            ..FilterSpec::default()
        };
        let mut previous = apply_filter(catalog.all(), &spec).len();
        for tag in ["mathematics", "healthcare", "leadership"] {
            spec.interest_tags.push(tag.into());
            let count = apply_filter(catalog.all(), &spec).len();
            assert!(count >= previous);
            previous = count;
        }
    }

    #[test]
    fn test_lowering_ceiling_never_grows_result() {
        let catalog = Catalog::builtin().unwrap();
        let mut previous = usize::MAX;
        for ceiling in [250000, 150000, 100000, 80000, 50000] {
            let spec = FilterSpec {
                salary_ceiling: ceiling,
                ..FilterSpec::default()
            };
            let count = apply_filter(catalog.all(), &spec).len();
            assert!(count <= previous);
            previous = count;
        }
    }

    #[test]
    fn test_category_from_param() {
        assert_eq!(CategoryFilter::from_param(None), CategoryFilter::Any);
        assert_eq!(CategoryFilter::from_param(Some("All")), CategoryFilter::Any);
        assert_eq!(
            CategoryFilter::from_param(Some("Design")),
            CategoryFilter::Exact("Design".into())
        );
    }
}
