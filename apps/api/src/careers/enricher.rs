//! Fallback Enricher: one batched generation call for everything the tables missed.
//!
//! Failures here never reach the caller. A failed or unparseable call leaves
//! the records as they were and the request carries on with partial data.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::careers::models::{CareerRecord, SalaryRange, DEFAULT_CATEGORY};
use crate::careers::prompts::ENRICHMENT_PROMPT_TEMPLATE;
use crate::careers::sanitizer::strip_reasoning;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};

/// One element of the enrichment reply. Missing fields are tolerated and
/// simply leave the record's field absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnrichedCareer {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
    #[serde(default)]
    pub roles_offered: Option<Vec<String>>,
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
}

/// Enriches `unmatched` with a single generation call.
///
/// `requested` holds the lowercased name of every candidate in the request and
/// `max_id` the highest id among them. Records the service introduces on its
/// own are numbered after `max_id`.
pub async fn enrich_unmatched(
    generator: &dyn TextGenerator,
    unmatched: Vec<CareerRecord>,
    requested: &HashSet<String>,
    max_id: u32,
) -> Vec<CareerRecord> {
    if unmatched.is_empty() {
        return unmatched;
    }

    let names: Vec<&str> = unmatched.iter().map(|r| r.name.as_str()).collect();
    let prompt = match build_enrichment_prompt(&names) {
        Ok(prompt) => prompt,
        Err(e) => {
            warn!("Could not build enrichment prompt: {e}");
            return unmatched;
        }
    };

    info!("Requesting fallback enrichment for {} careers", names.len());

    let reply = match generator.generate(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Fallback enrichment call failed, keeping partial records: {e}");
            return unmatched;
        }
    };

    match parse_enrichment(&reply) {
        Ok(entries) => merge_enrichment(unmatched, entries, requested, max_id),
        Err(e) => {
            warn!("Fallback enrichment reply was not a career array, keeping partial records: {e}");
            unmatched
        }
    }
}

fn build_enrichment_prompt(names: &[&str]) -> Result<String, LlmError> {
    let names_json = serde_json::to_string(names)?;
    Ok(ENRICHMENT_PROMPT_TEMPLATE
        .replace("{names_json}", &names_json)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION))
}

/// Parses the enrichment reply, tolerating reasoning spans, code fences and
/// prose around the array.
pub fn parse_enrichment(reply: &str) -> Result<Vec<EnrichedCareer>, LlmError> {
    let cleaned = strip_reasoning(reply);
    let body = strip_json_fences(&cleaned);

    match serde_json::from_str(body) {
        Ok(entries) => Ok(entries),
        Err(e) => match array_span(body) {
            Some(span) => serde_json::from_str(span).map_err(LlmError::Parse),
            None => Err(LlmError::Parse(e)),
        },
    }
}

/// The outermost `[ ... ]` span, if any.
fn array_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Folds enrichment entries into the records.
///
/// Names are compared case-insensitively. Only absent fields are filled, so
/// anything the tables already supplied stays as it was. Entries naming a
/// requested career outside `records` are dropped; entries the request never
/// named become new records in the default category.
pub fn merge_enrichment(
    mut records: Vec<CareerRecord>,
    entries: Vec<EnrichedCareer>,
    requested: &HashSet<String>,
    max_id: u32,
) -> Vec<CareerRecord> {
    let mut next_id = records.iter().map(|r| r.id).max().unwrap_or(0).max(max_id) + 1;

    for entry in entries {
        let name = entry.name.trim();
        if name.is_empty() {
            continue;
        }
        let needle = name.to_lowercase();

        let index = match records.iter().position(|r| r.name.to_lowercase() == needle) {
            Some(index) => index,
            None if requested.contains(&needle) => {
                debug!("Ignoring enrichment for '{name}', already settled by the tables");
                continue;
            }
            None => {
                info!("Enrichment returned unrequested career '{name}', adding it as #{next_id}");
                records.push(CareerRecord {
                    id: next_id,
                    name: name.to_string(),
                    category: DEFAULT_CATEGORY.to_string(),
                    description: None,
                    salary_range: None,
                    roles_offered: None,
                    required_skills: None,
                });
                next_id += 1;
                records.len() - 1
            }
        };

        let record = &mut records[index];
        if record.description.is_none() {
            record.description = entry.description;
        }
        if record.salary_range.is_none() {
            record.salary_range = entry.salary_range;
        }
        if record.roles_offered.is_none() {
            record.roles_offered = entry.roles_offered;
        }
        if record.required_skills.is_none() {
            record.required_skills = entry.required_skills;
        }
    }

    records
}
