//! Core conversation types (provider-agnostic).
//!
//! These types represent the universal concepts shared across model
//! providers. Provider-specific wire details belong in adapter modules.

use super::errors::ModelError;
use crate::tools::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;

/// The role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A tool call requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Opaque correlation token, unique per call within a turn.
    pub id: String,
    /// Name of the tool to invoke (matched case-insensitively).
    pub name: String,
    /// Arguments as JSON.
    pub input: Value,
}

/// The result the orchestrator produced for a tool call.
///
/// Never produced by the model; every [`ToolCall`] in a turn receives
/// exactly one of these before the next model invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResult {
    Success {
        tool_call_id: String,
        output: Value,
    },
    Failure {
        tool_call_id: String,
        error: ToolError,
    },
}

impl ToolResult {
    /// The correlation token of the originating call.
    pub fn tool_call_id(&self) -> &str {
        match self {
            Self::Success { tool_call_id, .. } | Self::Failure { tool_call_id, .. } => tool_call_id,
        }
    }

    /// The string content delivered back into the conversation.
    pub fn content(&self) -> String {
        match self {
            Self::Success { output, .. } => output.to_string(),
            Self::Failure { error, .. } => error.to_string(),
        }
    }
}

/// A part of a turn: text, a tool call, or a tool result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Part {
    Text(String),
    ToolCall(ToolCall),
    ToolResult(ToolResult),
}

/// One entry in the conversation log.
///
/// The conversation is an append-only `Vec<Message>`, created fresh per
/// query and discarded after the final answer is returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Message {
    /// Create a user message with text.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::Text(text.into())],
        }
    }

    /// Create an assistant message with text.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            parts: vec![Part::Text(text.into())],
        }
    }

    /// Create the turn carrying a round's tool results, in call order.
    pub fn tool_results(results: Vec<ToolResult>) -> Self {
        Self {
            role: Role::User,
            parts: results.into_iter().map(Part::ToolResult).collect(),
        }
    }

    /// Get combined text content from all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract all tool calls from this message, order preserved.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::ToolCall(call) => Some(call.clone()),
                _ => None,
            })
            .collect()
    }
}

/// A tool definition exposed to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// JSON Schema for the parameters object.
    pub schema: Value,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Everything needed for a model request.
#[derive(Debug, Clone)]
pub struct ModelRequest<'a> {
    pub messages: &'a [Message],
    pub tools: &'a [ToolSpec],
}

/// The response from a model.
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub message: Message,
    pub usage: Usage,
}

/// Trait for model provider backends.
pub trait Backend: Send + Sync {
    fn call(
        &self,
        request: ModelRequest<'_>,
    ) -> impl Future<Output = Result<ModelResponse, ModelError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_text_extraction() {
        let msg = Message {
            role: Role::Assistant,
            parts: vec![
                Part::Text("Hello ".into()),
                Part::ToolCall(ToolCall {
                    id: "1".into(),
                    name: "search_hotels".into(),
                    input: Value::Null,
                }),
                Part::Text("world".into()),
            ],
        };
        assert_eq!(msg.text(), "Hello world");
    }

    #[test]
    fn message_tool_calls_preserve_order() {
        let msg = Message {
            role: Role::Assistant,
            parts: vec![
                Part::Text("Let me check".into()),
                Part::ToolCall(ToolCall {
                    id: "1".into(),
                    name: "search_hotels".into(),
                    input: Value::Null,
                }),
                Part::ToolCall(ToolCall {
                    id: "2".into(),
                    name: "get_hotel_details".into(),
                    input: Value::Null,
                }),
            ],
        };
        let calls = msg.tool_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].name, "search_hotels");
        assert_eq!(calls[1].name, "get_hotel_details");
    }

    #[test]
    fn tool_results_turn_keeps_call_order() {
        let msg = Message::tool_results(vec![
            ToolResult::Success {
                tool_call_id: "a".into(),
                output: Value::Null,
            },
            ToolResult::Failure {
                tool_call_id: "b".into(),
                error: ToolError::NotFound("bogus".into()),
            },
        ]);

        assert_eq!(msg.role, Role::User);
        let ids: Vec<&str> = msg
            .parts
            .iter()
            .map(|part| match part {
                Part::ToolResult(result) => result.tool_call_id(),
                _ => panic!("expected tool result part"),
            })
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn tool_result_content() {
        let success = ToolResult::Success {
            tool_call_id: "1".into(),
            output: serde_json::json!({"total_locations": 5}),
        };
        assert_eq!(success.content(), r#"{"total_locations":5}"#);

        let failure = ToolResult::Failure {
            tool_call_id: "2".into(),
            error: ToolError::NotFound("book_flight".into()),
        };
        assert_eq!(failure.content(), "unknown tool: book_flight");
    }
}
