// All LLM prompt constants for the careers module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Primary suggestion prompt. Replace `{selections}` and `{no_commentary}` before sending.
pub const SUGGESTION_PROMPT_TEMPLATE: &str = r#"You are a career counsellor for students in technology.

Based on the following selections, suggest exactly 10 career paths that fit them best, most relevant first.

SELECTIONS:
{selections}

Output format, one career per line, nothing else:
1. Career Title | Category
2. Career Title | Category

Use common, industry-standard job titles (e.g. "Frontend Developer", "Data Engineer").
Category is a short field name such as "Software", "Data", "Security", "Design" or "Hardware".
{no_commentary}"#;

/// Batched enrichment prompt. Replace `{names_json}` and `{json_only}` before sending.
pub const ENRICHMENT_PROMPT_TEMPLATE: &str = r#"Provide structured career information for each of these careers:
{names_json}

Return a JSON ARRAY with one object per career, using the career names exactly as given:
[
  {
    "name": "Career Title",
    "description": "Two sentences describing the work.",
    "salary_range": {
      "entry_level": "$50,000 - $70,000",
      "mid_level": "$70,000 - $100,000",
      "senior_level": "$100,000 - $150,000"
    },
    "roles_offered": ["Role 1", "Role 2", "Role 3", "Role 4"],
    "required_skills": ["Skill 1", "Skill 2", "Skill 3", "Skill 4"]
  }
]

Exactly 3 salary tiers, exactly 4 roles and exactly 4 skills per career.
{json_only}"#;
