use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Category given to candidates whose line carries none, and to records the
/// enrichment service introduces on its own.
pub const DEFAULT_CATEGORY: &str = "Technology";

/// Upper bound on the number of careers returned for one request.
pub const MAX_CAREERS: usize = 10;

/// A career name pulled out of model output, ranked by emission order (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerCandidate {
    pub id: u32,
    pub name: String,
    pub category: String,
}

impl CareerCandidate {
    /// Builds ranked candidates from sanitized lines.
    ///
    /// A line may carry a category after a `|` (`"Data Engineer | Data"`).
    /// Emphasis markers around the name are trimmed, blank names skipped, and
    /// case-insensitive duplicates dropped before ranks are handed out, so ids
    /// always run 1..=N without gaps.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Vec<CareerCandidate> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for line in lines {
            let (name, category) = match line.as_ref().split_once('|') {
                Some((name, category)) => (clean_name(name), clean_name(category)),
                None => (clean_name(line.as_ref()), String::new()),
            };
            if name.is_empty() || !seen.insert(name.to_lowercase()) {
                continue;
            }
            let category = if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category
            };
            candidates.push(CareerCandidate {
                id: candidates.len() as u32 + 1,
                name,
                category,
            });
        }

        candidates
    }
}

fn clean_name(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| c == '*' || c == '_' || c == '`' || c.is_whitespace())
        .to_string()
}

/// Three-tier salary band, free text per tier (e.g. "$60k - $80k").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub entry_level: String,
    pub mid_level: String,
    pub senior_level: String,
}

/// A candidate plus whatever structured data the tables or the enrichment call supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub salary_range: Option<SalaryRange>,
    pub roles_offered: Option<Vec<String>>,
    pub required_skills: Option<Vec<String>>,
}

impl From<CareerCandidate> for CareerRecord {
    fn from(candidate: CareerCandidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            category: candidate.category,
            description: None,
            salary_range: None,
            roles_offered: None,
            required_skills: None,
        }
    }
}

impl CareerRecord {
    /// True once all four enrichment fields are present.
    pub fn is_complete(&self) -> bool {
        self.description.is_some()
            && self.salary_range.is_some()
            && self.roles_offered.is_some()
            && self.required_skills.is_some()
    }
}
