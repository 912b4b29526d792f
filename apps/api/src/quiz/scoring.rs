//! Scoring engine. Ranks the catalog against a set of quiz answers.
//!
//! Default: `WeightedMatchScorer` (pure-Rust, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; ranking itself is a free function
//! so any scorer gets the same stable ordering and truncation.

use serde::Serialize;

use crate::catalog::CareerRecord;
use crate::quiz::answers::QuizAnswerSet;
use crate::quiz::questions::{GROWTH, GROWTH_VERY_IMPORTANT, INTERESTS, SALARY, SKILLS};

/// Number of careers shown on the results page.
pub const TOP_MATCHES: usize = 6;

/// Outlook phrase rewarded when growth is very important. Matches both the
/// "Faster than average" and "Much faster than average" descriptors.
const GROWTH_PHRASE: &str = "faster than average";

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Points earned by each component. `total()` is the raw, unnormalized sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub interests: u32,
    pub skills: u32,
    pub salary: u32,
    pub growth: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.interests + self.skills + self.salary + self.growth
    }
}

/// A ranked career. Serializes as the record's fields plus `matchScore`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch<'a> {
    #[serde(flatten)]
    pub career: &'a CareerRecord,
    pub match_score: u32,
    pub breakdown: ScoreBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one record against an answer set. Implementations must be
/// deterministic and total: absent or unparseable answers score zero.
pub trait MatchScorer: Send + Sync {
    fn score(&self, record: &CareerRecord, answers: &QuizAnswerSet) -> ScoreBreakdown;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWeights {
    pub per_interest: u32,
    pub per_skill: u32,
    pub salary: u32,
    pub growth: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            per_interest: 10,
            per_skill: 10,
            salary: 20,
            growth: 10,
        }
    }
}

/// Algorithm:
/// 1. +per_interest for every selected interest the record carries (uncapped)
/// 2. +per_skill for every selected skill found, case-insensitively, inside any skill label
/// 3. +salary when the median falls in the selected band (all-or-nothing)
/// 4. +growth when growth is "very" important and the outlook is faster than average
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMatchScorer {
    pub weights: MatchWeights,
}

impl MatchScorer for WeightedMatchScorer {
    fn score(&self, record: &CareerRecord, answers: &QuizAnswerSet) -> ScoreBreakdown {
        let w = &self.weights;

        let interest_hits = answers
            .selected(INTERESTS)
            .into_iter()
            .filter(|tag| record.has_interest(tag))
            .count() as u32;

        let skill_labels: Vec<String> = record.skills.iter().map(|s| s.to_lowercase()).collect();
        let skill_hits = answers
            .selected(SKILLS)
            .into_iter()
            .map(str::to_lowercase)
            .filter(|kw| skill_labels.iter().any(|label| label.contains(kw.as_str())))
            .count() as u32;

        let salary_hit = answers
            .single(SALARY)
            .and_then(SalaryTarget::parse)
            .is_some_and(|target| target.contains(record.salary_range.median));

        let growth_hit = answers.single(GROWTH) == Some(GROWTH_VERY_IMPORTANT)
            && is_faster_than_average(record);

        ScoreBreakdown {
            interests: interest_hits * w.per_interest,
            skills: skill_hits * w.per_skill,
            salary: if salary_hit { w.salary } else { 0 },
            growth: if growth_hit { w.growth } else { 0 },
        }
    }
}

fn is_faster_than_average(record: &CareerRecord) -> bool {
    record
        .growth_descriptor()
        .to_lowercase()
        .contains(GROWTH_PHRASE)
}

// ────────────────────────────────────────────────────────────────────────────
// Salary band parsing
// ────────────────────────────────────────────────────────────────────────────

/// A salary band in dollars, parsed from labels like `"75-100"` or `"150+"` (thousands).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryTarget {
    pub min: u32,
    pub max: Option<u32>,
}

impl SalaryTarget {
    pub fn parse(label: &str) -> Option<Self> {
        match label.split_once('-') {
            Some((min, max)) => Some(Self {
                min: parse_thousands(min)?,
                max: Some(parse_thousands(max)?),
            }),
            None => Some(Self {
                min: parse_thousands(label)?,
                max: None,
            }),
        }
    }

    pub fn contains(&self, median: u32) -> bool {
        match self.max {
            Some(max) => self.min <= median && median <= max,
            None => median >= self.min,
        }
    }
}

fn parse_thousands(part: &str) -> Option<u32> {
    part.strip_suffix('+')
        .unwrap_or(part)
        .parse::<u32>()
        .ok()?
        .checked_mul(1000)
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Scores every record, sorts by score descending (ties keep catalog order)
/// and keeps the first `limit`. Zero scores are ranked, never dropped.
pub fn rank_matches<'a>(
    records: &'a [CareerRecord],
    answers: &QuizAnswerSet,
    scorer: &dyn MatchScorer,
    limit: usize,
) -> Vec<CareerMatch<'a>> {
    let mut matches: Vec<CareerMatch<'a>> = records
        .iter()
        .map(|career| {
            let breakdown = scorer.score(career, answers);
            CareerMatch {
                career,
                match_score: breakdown.total(),
                breakdown,
            }
        })
        .collect();

    // Vec::sort_by is stable
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(limit);
    matches
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
