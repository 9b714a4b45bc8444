//! Memory records and their caller-side serialization. Persistence lives in
//! an external store; this service only ever sees memories as the
//! `memoryContext` text block built by [`format_memory_context`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub timestamp: String,
    #[serde(rename = "userId")]
    pub owner_id: String,
}

/// Render a memory snapshot into the text block the chat endpoint expects as
/// `memoryContext`: one Title/Category/Content/Tags/Date stanza per record,
/// each terminated by a blank line.
pub fn format_memory_context(memories: &[MemoryRecord]) -> String {
    memories
        .iter()
        .map(|memory| {
            format!(
                "Title: {}\nCategory: {}\nContent: {}\nTags: {}\nDate: {}\n\n",
                memory.title,
                memory.category,
                memory.content,
                memory.tags.join(", "),
                memory.timestamp
            )
        })
        .collect()
}
