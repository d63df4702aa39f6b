//! # Autoreplace Architecture
//!
//! Autoreplace is a **UI-agnostic substitution library** with a thin CLI
//! client: an ordered list of literal (source, replacement) patterns,
//! persisted as JSON, applied sequentially to a document's text.
//!
//! ## The Layers
//!
//! ```text
//! CLI (main.rs + args.rs)
//!   the only place that knows about stdout/stderr/exit codes
//!         │
//!         ▼
//! API facade (api.rs)
//!   dispatches to commands, owns the session's pattern store
//!         │
//!         ▼
//! Commands (commands/*.rs)
//!   business logic per operation, returns structured CmdResult
//!         │
//!         ▼
//! Engine (engine.rs) + Storage (store/, document.rs)
//!   pure substitution over text; ConfigStore and DocumentSink traits
//!   with file-backed and in-memory implementations
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, and never writes to stdout/stderr or assumes a terminal.
//! The engine in particular is a pure function: text and patterns in, text
//! and a replacement count out. Reading the document and writing it back
//! live behind the [`document::DocumentSink`] seam, and write-back only
//! happens when the count is non-zero.
//!
//! ## Pattern Order Is Semantics
//!
//! Patterns apply sequentially, in list order. A later pattern can match
//! text produced by an earlier pattern's replacement (chaining), so the
//! order of the persisted list is user-controlled behavior, not an
//! implementation detail. See [`engine`] for the scan-cursor details,
//! including the legacy cursor-advance quirk kept for compatibility.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`engine`]: The pure substitution algorithm
//! - [`store`]: ConfigStore trait, pattern store, file/memory backends
//! - [`document`]: DocumentSink trait, file/memory documents
//! - [`config`]: Persisted configuration with lenient default-merging
//! - [`model`]: The `Pattern` type
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod model;
pub mod store;
