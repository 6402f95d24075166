// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to prompts whose reply is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations, reasoning or apologies.";

/// Appended to prompts whose reply is parsed line by line.
pub const NO_COMMENTARY_INSTRUCTION: &str = "Do NOT include any introduction, \
    explanation, reasoning or closing remarks. Output only the requested lines.";
