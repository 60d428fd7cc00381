//! The tool-call orchestration loop.

use crate::model::{Backend, Message, ModelError, ModelRequest, ToolResult};
use crate::tools::ToolHost;
use tracing::{debug, error, warn};

/// Drives one query through the model / tool-dispatch cycle.
///
/// Each call to [`process`](Orchestrator::process) runs a fresh
/// conversation: a user turn, a model invocation, at most one round of
/// tool dispatch, and a final model invocation when tools were requested.
/// If the second reply requests further tools its text is returned as-is;
/// there is no multi-round chaining.
pub struct Orchestrator<B, H> {
    backend: B,
    tools: H,
}

impl<B: Backend, H: ToolHost> Orchestrator<B, H> {
    pub fn new(backend: B, tools: H) -> Self {
        Self { backend, tools }
    }

    /// Answer a natural-language query.
    ///
    /// Faults never escape: model and tool failures are rendered into the
    /// returned answer text.
    pub async fn process(&self, query: &str) -> String {
        match self.run(query).await {
            Ok(answer) => answer,
            Err(e) => {
                error!("query failed: {e}");
                format!("Error processing query: {e}")
            }
        }
    }

    async fn run(&self, query: &str) -> Result<String, ModelError> {
        let mut messages = vec![Message::user(query)];

        let response = self
            .backend
            .call(ModelRequest {
                messages: &messages,
                tools: self.tools.specs(),
            })
            .await?;

        let calls = response.message.tool_calls();
        if calls.is_empty() {
            // Direct answer: the second invocation never happens.
            return Ok(response.message.text());
        }

        messages.push(response.message);

        // Dispatch sequentially, in the order the model issued the calls.
        // Result ordering must match call ordering for correlation.
        let mut results = Vec::with_capacity(calls.len());
        for call in &calls {
            debug!(tool = %call.name, id = %call.id, "dispatching tool call");
            let result = match self.tools.execute(call).await {
                Ok(output) => ToolResult::Success {
                    tool_call_id: call.id.clone(),
                    output,
                },
                Err(e) => {
                    warn!(tool = %call.name, "tool call failed: {e}");
                    ToolResult::Failure {
                        tool_call_id: call.id.clone(),
                        error: e,
                    }
                }
            };
            results.push(result);
        }
        messages.push(Message::tool_results(results));

        let final_response = self
            .backend
            .call(ModelRequest {
                messages: &messages,
                tools: self.tools.specs(),
            })
            .await?;

        Ok(final_response.message.text())
    }
}
