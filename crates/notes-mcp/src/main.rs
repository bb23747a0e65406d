//! Notes MCP Server
//!
//! Exposes a session-scoped, in-memory note collection to AI agents via the
//! MCP protocol.
//!
//! ## Tools
//!
//! - `create_note` - create a note with title, content, and optional tags
//! - `list_notes` - list all notes, or only those carrying an exact tag
//! - `get_note` - fetch one note by id
//! - `update_note` - partially update title/content/tags
//! - `delete_note` - remove a note
//! - `search_notes` - case-insensitive substring search over title/content
//!
//! ## Resources
//!
//! - `notes://all` - full JSON dump of the collection
//! - `notes://summary` - plain-text note count and tag statistics
//!
//! ## Prompts
//!
//! - `summarize_notes` - summarize the collection, optionally by tag
//! - `organize_notes` - ask for organizational suggestions
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "notes": {
//!       "command": "notes-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

use notes_mcp::NotesService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Notes MCP server");

    let service = NotesService::new();
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("Notes MCP server stopped");
    Ok(())
}
