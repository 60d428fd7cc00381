//! OpenAI chat-completions backend.

use crate::model::{
    Backend, Message, ModelError, ModelRequest, ModelResponse, Part, Role, ToolCall, ToolSpec,
    Usage,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4.1";

const API_KEY_ENV: &str = "OPENAI_API_KEY";
const MODEL_ENV: &str = "CONCIERGE_MODEL";

// ─────────────────────────────────────────────────────────────────────────────
// API Wire Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<ApiMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<ApiTool>,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<ApiToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl ApiMessage {
    fn text(role: &'static str, content: String) -> Self {
        Self {
            role,
            content: Some(content),
            tool_calls: None,
            tool_call_id: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiToolCall {
    id: String,
    #[serde(rename = "type")]
    call_type: String,
    function: ApiFunctionCall,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiFunctionCall {
    name: String,
    /// JSON-encoded argument object.
    arguments: String,
}

#[derive(Debug, Serialize)]
struct ApiTool {
    #[serde(rename = "type")]
    tool_type: &'static str,
    function: ApiFunction,
}

#[derive(Debug, Serialize)]
struct ApiFunction {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
    #[serde(default)]
    usage: ApiUsage,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<ApiToolCall>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Backend Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for creating an OpenAI backend.
#[derive(Debug, Clone)]
pub struct OpenAiBackendBuilder {
    api_key: String,
    model: String,
}

impl OpenAiBackendBuilder {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build the backend. The credential is validated here, once, not per
    /// call.
    pub fn build(self) -> Result<OpenAiBackend, ModelError> {
        if self.api_key.trim().is_empty() {
            return Err(ModelError::MissingCredential(format!(
                "{API_KEY_ENV} not set"
            )));
        }
        Ok(OpenAiBackend {
            client: reqwest::Client::new(),
            api_key: self.api_key,
            model: self.model,
        })
    }
}

/// OpenAI chat-completions backend.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    pub fn builder(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> OpenAiBackendBuilder {
        OpenAiBackendBuilder::new(api_key, model)
    }

    /// Build a backend from the process environment, reading the credential
    /// once at startup.
    pub fn from_env() -> Result<Self, ModelError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ModelError::MissingCredential(format!("{API_KEY_ENV} not set")))?;
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::builder(api_key, model).build()
    }

    fn messages_to_api(messages: &[Message]) -> Vec<ApiMessage> {
        let mut api = Vec::new();
        for msg in messages {
            match msg.role {
                Role::Assistant => api.push(Self::assistant_to_api(msg)),
                Role::User => {
                    // Tool-result parts become individual role:"tool" wire
                    // messages; text parts stay a user message. Order is
                    // preserved part by part.
                    let mut text = String::new();
                    for part in &msg.parts {
                        match part {
                            Part::Text(t) => text.push_str(t),
                            Part::ToolResult(result) => api.push(ApiMessage {
                                role: "tool",
                                content: Some(result.content()),
                                tool_calls: None,
                                tool_call_id: Some(result.tool_call_id().to_string()),
                            }),
                            // Tool calls are never carried on user turns.
                            Part::ToolCall(_) => {}
                        }
                    }
                    if !text.is_empty() {
                        api.push(ApiMessage::text("user", text));
                    }
                }
            }
        }
        api
    }

    fn assistant_to_api(msg: &Message) -> ApiMessage {
        let text = msg.text();
        let calls: Vec<ApiToolCall> = msg
            .parts
            .iter()
            .filter_map(|part| match part {
                Part::ToolCall(call) => Some(ApiToolCall {
                    id: call.id.clone(),
                    call_type: "function".into(),
                    function: ApiFunctionCall {
                        name: call.name.clone(),
                        arguments: call.input.to_string(),
                    },
                }),
                _ => None,
            })
            .collect();

        ApiMessage {
            role: "assistant",
            content: (!text.is_empty()).then_some(text),
            tool_calls: (!calls.is_empty()).then_some(calls),
            tool_call_id: None,
        }
    }

    fn tool_to_api(spec: &ToolSpec) -> ApiTool {
        ApiTool {
            tool_type: "function",
            function: ApiFunction {
                name: spec.name.clone(),
                description: spec.description.clone(),
                parameters: spec.schema.clone(),
            },
        }
    }

    fn response_to_message(msg: ApiResponseMessage) -> Result<Message, ModelError> {
        let mut parts = Vec::new();
        if let Some(text) = msg.content {
            if !text.is_empty() {
                parts.push(Part::Text(text));
            }
        }
        for call in msg.tool_calls {
            let input: Value = serde_json::from_str(&call.function.arguments)
                .map_err(|e| ModelError::InvalidResponse(format!("tool call arguments: {e}")))?;
            parts.push(Part::ToolCall(ToolCall {
                id: call.id,
                name: call.function.name,
                input,
            }));
        }
        Ok(Message {
            role: Role::Assistant,
            parts,
        })
    }
}

impl std::fmt::Display for OpenAiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "openai({})", self.model)
    }
}

impl Backend for OpenAiBackend {
    async fn call(&self, request: ModelRequest<'_>) -> Result<ModelResponse, ModelError> {
        let api_request = ApiRequest {
            model: self.model.clone(),
            messages: Self::messages_to_api(request.messages),
            tools: request.tools.iter().map(Self::tool_to_api).collect(),
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&api_request)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api(format!("{status}: {body}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::InvalidResponse("no choices in response".into()))?;

        let message = Self::response_to_message(choice.message)?;
        let usage = Usage {
            input_tokens: api_response.usage.prompt_tokens,
            output_tokens: api_response.usage.completion_tokens,
        };

        Ok(ModelResponse { message, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToolResult;
    use serde_json::json;

    #[test]
    fn empty_api_key_is_rejected_at_construction() {
        let err = OpenAiBackend::builder("", DEFAULT_MODEL).build().unwrap_err();
        assert!(matches!(err, ModelError::MissingCredential(_)));
    }

    #[test]
    fn response_with_tool_calls_decodes_parsed_arguments() {
        let raw = json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {
                            "name": "search_hotels",
                            "arguments": "{\"location\": \"tokyo\", \"max_price\": 300}"
                        }
                    }]
                }
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 34}
        });
        let api_response: ApiResponse = serde_json::from_value(raw).unwrap();
        let message =
            OpenAiBackend::response_to_message(api_response.choices.into_iter().next().unwrap().message)
                .unwrap();

        let calls = message.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, "call_abc");
        assert_eq!(calls[0].name, "search_hotels");
        assert_eq!(calls[0].input, json!({"location": "tokyo", "max_price": 300}));
    }

    #[test]
    fn malformed_arguments_are_invalid_response() {
        let msg = ApiResponseMessage {
            content: None,
            tool_calls: vec![ApiToolCall {
                id: "call_1".into(),
                call_type: "function".into(),
                function: ApiFunctionCall {
                    name: "search_hotels".into(),
                    arguments: "{not json".into(),
                },
            }],
        };
        let err = OpenAiBackend::response_to_message(msg).unwrap_err();
        assert!(matches!(err, ModelError::InvalidResponse(_)));
    }

    #[test]
    fn tool_results_flatten_into_tool_wire_messages() {
        let messages = vec![
            Message::user("find hotels"),
            Message {
                role: Role::Assistant,
                parts: vec![Part::ToolCall(ToolCall {
                    id: "call_1".into(),
                    name: "search_hotels".into(),
                    input: json!({"location": "tokyo"}),
                })],
            },
            Message::tool_results(vec![
                ToolResult::Success {
                    tool_call_id: "call_1".into(),
                    output: json!({"total_available": 2}),
                },
            ]),
        ];

        let api = OpenAiBackend::messages_to_api(&messages);
        assert_eq!(api.len(), 3);
        assert_eq!(api[0].role, "user");
        assert_eq!(api[1].role, "assistant");
        assert_eq!(api[2].role, "tool");
        assert_eq!(api[2].tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(api[2].content.as_deref(), Some(r#"{"total_available":2}"#));

        let call = api[1].tool_calls.as_ref().unwrap();
        assert_eq!(call[0].function.arguments, r#"{"location":"tokyo"}"#);
    }

    #[test]
    fn tool_spec_maps_to_function_declaration() {
        let spec = ToolSpec {
            name: "get_available_locations".into(),
            description: "Get all available booking locations.".into(),
            schema: json!({"type": "object", "properties": {}}),
        };
        let api = OpenAiBackend::tool_to_api(&spec);

        assert_eq!(api.tool_type, "function");
        assert_eq!(api.function.name, "get_available_locations");
        assert_eq!(api.function.parameters, json!({"type": "object", "properties": {}}));
    }
}
