//! Notes MCP server library.
//!
//! The binary in `main.rs` wires [`NotesService`] to a stdio transport; the
//! modules here hold everything testable in-process:
//!
//! - [`service`] - tool dispatch and the MCP handler surface
//! - [`resources`] - read-only `notes://` views
//! - [`prompts`] - parameterized prompt templates

pub mod prompts;
pub mod resources;
pub mod service;

pub use service::NotesService;
