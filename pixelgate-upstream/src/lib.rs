#![deny(missing_docs)]
//! Streaming client for the upstream text-generation service.
//!
//! The upstream is an Ollama-style local server: POST `/api/generate` with
//! `stream: true` returns newline-delimited JSON objects of shape
//! `{"response": string, "done": boolean}`. This crate turns that body into a
//! stream of [`GenerateEvent`]s, buffering partial lines across network
//! chunks and skipping lines that fail to decode.
//!
//! [`GenerateEvent`]: pixelgate_types::GenerateEvent

mod client;
mod error;
mod streaming;
mod types;

pub use client::GenerateClient;
pub use streaming::GenerateStream;
pub use types::GenerateRequest;
