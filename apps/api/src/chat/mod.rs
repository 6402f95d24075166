//! Follow-up conversation grounded in the session's career list.

pub mod handlers;
pub mod prompts;

use tracing::debug;

use crate::careers::models::CareerRecord;
use crate::careers::sanitizer::strip_reasoning;
use crate::chat::prompts::{CHAT_SYSTEM, NO_CAREERS_CONTEXT};
use crate::errors::AppError;
use crate::llm_client::{ChatMessage, TextGenerator};

/// Only this many prior turns are replayed to the model.
const MAX_HISTORY_MESSAGES: usize = 20;

/// Answers `message` given the prior `history` and the careers last suggested
/// to this session. Reasoning spans are stripped from the reply.
pub async fn reply(
    generator: &dyn TextGenerator,
    careers: &[CareerRecord],
    history: &[ChatMessage],
    message: &str,
) -> Result<String, AppError> {
    let messages = build_conversation(careers, history, message);
    debug!("Chat turn with {} messages", messages.len());

    let raw = generator.chat(&messages).await?;
    let text = strip_reasoning(&raw);
    if text.is_empty() {
        return Err(AppError::MalformedResponse(
            "chat reply was empty after removing reasoning".to_string(),
        ));
    }
    Ok(text)
}

fn build_conversation(
    careers: &[CareerRecord],
    history: &[ChatMessage],
    message: &str,
) -> Vec<ChatMessage> {
    let system = CHAT_SYSTEM.replace("{careers}", &describe_careers(careers));

    let replayed: Vec<&ChatMessage> = history
        .iter()
        .filter(|m| (m.role == "user" || m.role == "assistant") && !m.content.trim().is_empty())
        .collect();
    let skip = replayed.len().saturating_sub(MAX_HISTORY_MESSAGES);

    std::iter::once(ChatMessage::system(system))
        .chain(replayed.into_iter().skip(skip).cloned())
        .chain(std::iter::once(ChatMessage::user(message.trim())))
        .collect()
}

fn describe_careers(careers: &[CareerRecord]) -> String {
    if careers.is_empty() {
        return NO_CAREERS_CONTEXT.to_string();
    }

    careers
        .iter()
        .map(|career| {
            let mut line = format!("{}. {} ({})", career.id, career.name, career.category);
            if let Some(description) = &career.description {
                line.push_str(&format!(": {description}"));
            }
            if let Some(salary) = &career.salary_range {
                line.push_str(&format!(
                    " Salary: entry {}, mid {}, senior {}.",
                    salary.entry_level, salary.mid_level, salary.senior_level
                ));
            }
            if let Some(skills) = &career.required_skills {
                line.push_str(&format!(" Skills: {}.", skills.join(", ")));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
