//! Catalog store: the read-only set of career records loaded once at startup.
//!
//! Lookup by id is O(1) through an index built at load time. The category and
//! interest vocabularies are derived once here and cached for the process lifetime.

pub mod handlers;
pub mod models;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use thiserror::Error;
use tracing::info;

pub use models::CareerRecord;

/// The career table bundled with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/careers.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Record at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("Duplicate record id '{0}'")]
    DuplicateId(String),

    #[error("Record '{0}' has no interest tags")]
    NoInterests(String),

    #[error("Record '{id}' has an unordered salary range ({entry} / {median} / {senior})")]
    SalaryOrder {
        id: String,
        entry: u32,
        median: u32,
        senior: u32,
    },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CareerRecord>,
    index: HashMap<String, usize>,
    categories: Vec<String>,
    interest_tags: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from records in declaration order, validating each one.
    pub fn new(records: Vec<CareerRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { position });
            }
            if record.interests.is_empty() {
                return Err(CatalogError::NoInterests(record.id.clone()));
            }
            let salary = record.salary_range;
            if !salary.is_ordered() {
                return Err(CatalogError::SalaryOrder {
                    id: record.id.clone(),
                    entry: salary.entry,
                    median: salary.median,
                    senior: salary.senior,
                });
            }
            if index.insert(record.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }

        let categories = distinct_in_order(records.iter().map(|r| r.category.as_str()));
        let interest_tags = distinct_in_order(
            records
                .iter()
                .flat_map(|r| r.interests.iter().map(String::as_str)),
        );

        Ok(Self {
            records,
            index,
            categories,
            interest_tags,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CareerRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Loads from `path` when given, otherwise the bundled table.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                Self::from_json(&std::fs::read_to_string(path)?)?
            }
            None => Self::builtin()?,
        };
        info!(
            "Catalog loaded: {} records, {} categories, {} interest tags",
            catalog.len(),
            catalog.categories.len(),
            catalog.interest_tags.len()
        );
        Ok(catalog)
    }

    /// All records in declaration order.
    pub fn all(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&CareerRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn interest_tags(&self) -> &[String] {
        &self.interest_tags
    }

    /// Resolves a record's related ids in catalog order. Dangling ids are skipped.
    pub fn related(&self, id: &str) -> Vec<&CareerRecord> {
        let Some(record) = self.get(id) else {
            return Vec::new();
        };
        let wanted: HashSet<&str> = record.related_careers.iter().map(String::as_str).collect();
        self.records
            .iter()
            .filter(|r| wanted.contains(r.id.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Record builder shared by unit tests across modules.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(id: &str, category: &str, interests: &[&str], median: u32) -> CareerRecord {
        CareerRecord {
            id: id.to_string(),
            title: id.replace('-', " "),
            category: category.to_string(),
            subcategory: String::new(),
            description: format!("Work as a {}", id.replace('-', " ")),
            detailed_description: String::new(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            salary_range: models::SalaryRange {
                entry: median / 2,
                median,
                senior: median * 2,
            },
            education: vec![],
            skills: vec![],
            outlook: "Average (5% growth)".to_string(),
            work_environment: None,
            typical_day: vec![],
            action_steps: vec![],
            related_careers: vec![],
        }
    }
}
