use std::collections::HashSet;

use crate::careers::models::{CareerRecord, MAX_CAREERS};

/// Combines matched and enriched records into the final list: one record per
/// id, ascending by id, at most `MAX_CAREERS` long.
pub fn assemble(matched: Vec<CareerRecord>, enriched: Vec<CareerRecord>) -> Vec<CareerRecord> {
    let mut seen = HashSet::new();
    let mut records: Vec<CareerRecord> = matched
        .into_iter()
        .chain(enriched)
        .filter(|record| seen.insert(record.id))
        .collect();

    records.sort_by_key(|record| record.id);
    records.truncate(MAX_CAREERS);
    records
}
