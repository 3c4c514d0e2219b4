//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student record library**. This is not a CLI
//! application that happens to have some library code; it is a library that
//! happens to have a CLI client.
//!
//! That distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, renders tables, prompts, colors        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the registry                            │
//! │  - Normalizes inputs (student ids → store indices)          │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (registry.rs, validate.rs, filter.rs)                 │
//! │  - Pure business logic: validation, id uniqueness, the      │
//! │    edit cursor, search                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StudentStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selecting Records
//!
//! The table a user sees may be filtered, and raw indices shift on every
//! delete. UI clients therefore select records by the student id (unique
//! and stable by construction), and the API resolves it to the current
//! store index at dispatch time. Raw indices appear only at the registry
//! boundary, where they are bounds-checked.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, registry, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`CmdResult`, `Result<...>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core could sit behind a desktop form or a web service.
//!
//! One consequence worth knowing: persistence is write-through and
//! best-effort. Every successful mutation is saved before the call
//! returns, but a failed save never rolls the mutation back. The failure
//! is captured and reported as a warning while the in-memory roster
//! stays authoritative for the session.
//!
//! ## Testing Strategy
//!
//! 1. **Core** (`registry.rs`, `validate.rs`, `filter.rs`): thorough
//!    unit tests of the business logic against `InMemoryStore`. This is
//!    where the lion's share of testing lives.
//! 2. **API** (`api.rs`): tests that intents dispatch correctly and come
//!    back as the right structured results.
//! 3. **CLI** (`tests/`): end-to-end runs of the binary against a
//!    temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`registry`]: The record collection and its edit cursor
//! - [`validate`]: Draft validation rules
//! - [`filter`]: Search filtering
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Student`, `StudentDraft`, `Mode`)
//! - [`outcome`]: Structured results handed to presentation layers
//! - [`export`]: CSV export
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod model;
pub mod outcome;
pub mod registry;
pub mod store;
pub mod validate;
