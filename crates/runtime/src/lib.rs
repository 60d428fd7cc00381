//! Concierge runtime — the tool-call orchestration core.
//!
//! This crate drives a natural-language hotel query through a language
//! model that may request execution of local tools, and produces the
//! final answer string.
//!
//! # Overview
//!
//! The runtime is organized around these concepts:
//!
//! - **Orchestrator**: runs one query through the model / tool-dispatch
//!   cycle and renders every fault into the returned answer text.
//! - **Backend**: a trait abstracting the model provider; the shipped
//!   implementation talks to the OpenAI chat-completions API.
//! - **ToolHost**: a trait providing tool specifications and executing
//!   tool calls; the shipped implementation serves the hotel dataset.
//!
//! # Example
//!
//! ```ignore
//! use dataset::HotelStore;
//! use runtime::{HotelToolHost, OpenAiBackend, Orchestrator};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), runtime::ModelError> {
//! let backend = OpenAiBackend::from_env()?;
//! let store = Arc::new(HotelStore::sample());
//! let orchestrator = Orchestrator::new(backend, HotelToolHost::new(store));
//!
//! let answer = orchestrator
//!     .process("What hotels are available in Tokyo under $300 per night?")
//!     .await;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

pub mod model;
pub mod orchestrator;
pub mod providers;
pub mod tools;

// Conversation and provider types
pub use model::{
    Backend, Message, ModelError, ModelRequest, ModelResponse, Part, Role, ToolCall, ToolResult,
    ToolSpec, Usage,
};

// Orchestration loop
pub use orchestrator::Orchestrator;

// Provider backends
pub use providers::OpenAiBackend;

// Tool execution
pub use tools::{HotelToolHost, ToolError, ToolHost};
