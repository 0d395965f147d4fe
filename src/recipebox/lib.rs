//! # Recipebox Architecture
//!
//! Recipebox keeps a personal recipe collection in one plain text file. The
//! library does the work; the `recipebox` binary is a thin client over it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders recipes, owns stdout/stderr    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - Resolves indexes and names, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Recipe Book (book.rs)                                      │
//! │  - In-memory collection, dirty flag, change notifications   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/) over the Text Codec (codec.rs)            │
//! │  - FileSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through the `log` facade; the binary decides where they end
//! up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`book`]: The recipe collection and its observers
//! - [`codec`]: Reading and writing the recipe text format
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Recipe` and `Ingredient`
//! - [`index`]: One-based display indexes and selectors
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
