//! Suggestion pipeline.
//!
//! Flow: selections → primary prompt → generate → sanitize → candidates →
//!       match against tables → batched fallback enrichment → assemble.
//!
//! The primary call fails hard. The enrichment call never does.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info};

use crate::careers::assembler::assemble;
use crate::careers::enricher::enrich_unmatched;
use crate::careers::matcher::{match_candidates, MatchOutcome};
use crate::careers::models::{CareerCandidate, CareerRecord, MAX_CAREERS};
use crate::careers::prompts::SUGGESTION_PROMPT_TEMPLATE;
use crate::careers::reference::ReferenceTables;
use crate::careers::sanitizer::sanitize_response;
use crate::errors::AppError;
use crate::llm_client::prompts::NO_COMMENTARY_INSTRUCTION;
use crate::llm_client::TextGenerator;

/// Caller selections grouped by category ("Technical Skills", "Interests", ...).
pub type Selections = BTreeMap<String, Vec<String>>;

/// Runs the full pipeline for one request.
pub async fn suggest_careers(
    generator: &dyn TextGenerator,
    tables: &ReferenceTables,
    selections: &Selections,
) -> Result<Vec<CareerRecord>, AppError> {
    let prompt = build_suggestion_prompt(selections)?;

    let reply = generator.generate(&prompt).await?;
    let lines = sanitize_response(&reply);
    let candidates = CareerCandidate::from_lines(&lines);

    if candidates.is_empty() {
        return Err(AppError::MalformedResponse(
            "model reply contained no career names".to_string(),
        ));
    }

    info!("Extracted {} career candidates", candidates.len());
    Ok(match_and_enrich(generator, tables, candidates).await)
}

/// The matching routine proper: tables first, one enrichment call for the
/// rest, then ordering and truncation. Never fails.
pub async fn match_and_enrich(
    generator: &dyn TextGenerator,
    tables: &ReferenceTables,
    candidates: Vec<CareerCandidate>,
) -> Vec<CareerRecord> {
    let max_id = candidates.iter().map(|c| c.id).max().unwrap_or(0);
    let requested: HashSet<String> = candidates.iter().map(|c| c.name.to_lowercase()).collect();

    let MatchOutcome { matched, unmatched } = match_candidates(candidates, tables);

    // Ranks past the cap never reach the output.
    let unmatched: Vec<CareerRecord> = unmatched
        .into_iter()
        .filter(|record| record.id as usize <= MAX_CAREERS)
        .collect();
    debug!(
        "Table lookup: {} fully matched, {} need enrichment",
        matched.len(),
        unmatched.len()
    );

    let enriched = enrich_unmatched(generator, unmatched, &requested, max_id).await;
    assemble(matched, enriched)
}

/// Renders the selections into the primary prompt. Rejects selections with
/// no usable item.
fn build_suggestion_prompt(selections: &Selections) -> Result<String, AppError> {
    let sections: Vec<String> = selections
        .iter()
        .filter_map(|(category, items)| {
            let items: Vec<&str> = items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .collect();
            (!items.is_empty()).then(|| format!("{}: {}", category.trim(), items.join(", ")))
        })
        .collect();

    if sections.is_empty() {
        return Err(AppError::Validation(
            "Select at least one skill, interest or hobby".to_string(),
        ));
    }

    Ok(SUGGESTION_PROMPT_TEMPLATE
        .replace("{selections}", &sections.join("\n"))
        .replace("{no_commentary}", NO_COMMENTARY_INSTRUCTION))
}
