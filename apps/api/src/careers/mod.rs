// Career suggestions: sanitize model output, match against the reference
// tables, enrich the rest with one fallback call, assemble the final list.
// All LLM calls go through llm_client.

pub mod assembler;
pub mod enricher;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod reference;
pub mod sanitizer;
