#![deny(missing_docs)]
//! HTTP gateway for the PixelVision chat feature.
//!
//! Accepts `POST /api/chat` with `{"question": string}`, proxies the question
//! to a locally hosted generation service, and streams the answer back as
//! newline-delimited JSON frames, re-chunked into complete sentences by
//! [`pixelgate_chunker::SentenceChunker`].
//!
//! Error contract: 400 for a bad request body, 503/504 when the upstream is
//! unreachable or times out before streaming begins, and a single terminal
//! `{"error": ...}` frame for failures after headers have been sent.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod stream;
