//! Prompt assembly for the memory-context chat endpoint. Pure and
//! deterministic: the same messages and memory context always produce the
//! same prompt string.

use crate::web::models::{ChatMessage, Role};

pub const NO_MEMORIES_PLACEHOLDER: &str = "No memories available yet.";

const SYSTEM_INSTRUCTIONS: &str = "You are an AI assistant that helps users access and analyze their personal memories.
Your task is to use the provided memory context to assist the user by:
1. Retrieving relevant memories when asked
2. Finding connections between different memories
3. Providing insights and advice based on the user's personal experiences
4. Answering questions using information from their memories";

const CLOSING_INSTRUCTIONS: &str = "Respond in a helpful, friendly manner. If you cannot find relevant information in the memories, acknowledge this and provide a general response.";

/// Render the full single-turn prompt: system instructions, the user's memory
/// database (or a placeholder when empty), the conversation so far, and the
/// current question.
pub fn build_prompt(history: &[ChatMessage], question: &str, memory_context: Option<&str>) -> String {
    let memory_block = match memory_context {
        Some(ctx) if !ctx.is_empty() => ctx,
        _ => NO_MEMORIES_PLACEHOLDER,
    };

    let conversation_history = history
        .iter()
        .map(|msg| match msg.role {
            Role::User => format!("User: {}", msg.content),
            Role::Assistant => format!("Assistant: {}", msg.content),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{SYSTEM_INSTRUCTIONS}\n\nBelow is the user's memory database. Use this information to respond to their query:\n\n{memory_block}\n\nConversation history:\n{conversation_history}\n\nUser's current question: {question}\n\n{CLOSING_INSTRUCTIONS}"
    )
}
