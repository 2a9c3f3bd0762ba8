//! Chat service result shapes.
//!
//! The chat backend cites sources either as plain strings or as structured
//! objects carrying framework metadata. Both forms are modeled explicitly so
//! consumers resolve them through one place instead of duck-typing.

use serde::{Deserialize, Serialize};

/// A citation attached to a chat answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatSource {
    #[serde(rename_all = "camelCase")]
    Structured {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        framework: String,
        #[serde(rename = "type")]
        source_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        relevance_score: Option<f64>,
    },
    Text(String),
}

impl ChatSource {
    /// Display label: the string itself, or title falling back to framework.
    pub fn label(&self) -> &str {
        match self {
            ChatSource::Text(text) => text,
            ChatSource::Structured {
                title, framework, ..
            } => title.as_deref().unwrap_or(framework),
        }
    }

    /// Relevance is only available for structured sources.
    pub fn relevance(&self) -> Option<f64> {
        match self {
            ChatSource::Text(_) => None,
            ChatSource::Structured {
                relevance_score, ..
            } => *relevance_score,
        }
    }
}

/// Response shape of the chat service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub confidence: f64,
    #[serde(default)]
    pub sources: Vec<ChatSource>,
}
