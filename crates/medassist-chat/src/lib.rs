//! Language model access for reply phrasing.
//!
//! The orchestrator only sees the `ChatModel` trait. Providers talk to a
//! local Ollama server or an OpenAI-compatible endpoint; `StubModel` gives
//! tests a deterministic stand-in.

pub mod prompts;
pub mod providers;
pub mod stub;
pub mod types;

pub use providers::{create_model, OllamaModel, OpenAiCompatModel};
pub use stub::StubModel;
pub use types::*;
