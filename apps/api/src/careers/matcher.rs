//! Local Lookup Matcher: fills candidates from the reference tables.

use crate::careers::models::{CareerCandidate, CareerRecord};
use crate::careers::reference::ReferenceTables;

/// Candidates split by whether the tables covered every enrichment field.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    pub matched: Vec<CareerRecord>,
    /// Records still missing at least one field. They may carry partial table data.
    pub unmatched: Vec<CareerRecord>,
}

/// Looks each candidate up in both tables, in order.
///
/// The description comes from the career table. Salary range, roles and skills
/// always come together from one salary-table entry. `id`, `name` and
/// `category` are never touched.
pub fn match_candidates(
    candidates: Vec<CareerCandidate>,
    tables: &ReferenceTables,
) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    for candidate in candidates {
        let mut record = CareerRecord::from(candidate);

        if let Some(entry) = tables.find_description(&record.name) {
            record.description = Some(entry.description.clone());
        }

        if let Some(entry) = tables.find_salary(&record.name) {
            record.salary_range = Some(entry.salary_range.clone());
            record.roles_offered = Some(entry.roles_offered.clone());
            record.required_skills = Some(entry.required_skills.clone());
        }

        if record.is_complete() {
            outcome.matched.push(record);
        } else {
            outcome.unmatched.push(record);
        }
    }

    outcome
}
