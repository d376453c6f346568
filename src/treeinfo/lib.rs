//! # Treeinfo Architecture
//!
//! Treeinfo lets you annotate any path in a directory tree by dropping small
//! `.info` files next to the things they describe. Each line of an info file is
//! `<path> <annotation>`, with `<path>` relative to the info file's directory.
//!
//! Like any tool that wants to stay testable, treeinfo is a **library that happens
//! to have a CLI**. The resolution engine never touches the filesystem; everything
//! that does lives behind the [`store::InfoStore`] trait.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders results, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over the store        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (parser, info_file, paths, set, validation)         │
//! │  - Pure values in, pure values out. No I/O whatsoever.      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - InfoStore trait: FsStore (production), MemStore (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Engine
//!
//! An [`info_file::InfoFile`] is parsed once into typed lines plus an index from
//! local path to line position. Edits touch only the line they concern, so comments,
//! blank lines and even broken lines survive a parse → serialize round trip.
//!
//! An [`set::InfoFileSet`] holds every info file under a root together with a single
//! "does this path exist" predicate captured at load time. Its operations
//! (`gather`, `validate`, `clean`, `distribute`, `remove_empty`) never mutate the set
//! they are called on; they return new values, so they compose freely:
//!
//! ```text
//! load → clean → distribute → remove_empty → validate → write
//! ```
//!
//! ## Precedence
//!
//! Several info files may annotate the same target. The winner is the annotation
//! whose info file is closest to the target's directory (see [`paths::distance`]),
//! then the lexicographically smaller info directory, then the earlier line.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction, discovery and write-back
//! - [`set`]: Collection-level operations over info files
//! - [`info_file`]: One info file: typed lines, index, round-trip edits
//! - [`parser`]: The single-line tokenizer
//! - [`paths`]: Slash-separated path algebra and the distance metric
//! - [`validation`]: Issue and result types
//! - [`model`]: The `Annotation` value
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod info_file;
pub mod model;
pub mod parser;
pub mod paths;
pub mod set;
pub mod store;
pub mod validation;
