//! Ollama chat client and reply parsing.

pub mod client;
pub mod tags;

pub use client::{ChatModel, OllamaClient};
pub use tags::{extract_tag, strip_code_fences, strip_leading_marker};
