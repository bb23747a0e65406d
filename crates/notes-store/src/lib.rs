//! # Notes Store
//!
//! In-memory note collection backing the notes MCP server.
//!
//! ## Features
//!
//! - **Session-scoped storage** - one collection, created empty at server
//!   start, discarded at shutdown
//! - **CRUD primitives** - insert/get/update/delete with typed errors
//! - **Tag filtering** - exact, case-sensitive membership checks
//! - **Text search** - case-insensitive substring match on title/content
//!
//! All read and write access to notes funnels through [`NoteStore`]; the
//! server layer owns a single store instance and passes it by reference to
//! the view and prompt renderers.

mod error;
mod model;
mod store;

pub use error::{Result, StoreError};
pub use model::Note;
pub use store::{NoteStore, NoteUpdate};
