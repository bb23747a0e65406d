//! MCP service for the note collection.
//!
//! Exposes six note tools plus the `notes://` views and prompt templates to
//! AI agents via the MCP protocol. The tool router keeps discovery and
//! dispatch in sync: a tool exists for callers exactly when a `#[tool]`
//! handler exists here.

use std::sync::{Arc, Mutex, MutexGuard};

use notes_store::{NoteStore, NoteUpdate};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, GetPromptRequestParam, GetPromptResult, Implementation, JsonObject,
    ListPromptsResult, ListResourcesResult, PaginatedRequestParam, PromptMessage,
    PromptMessageRole, ReadResourceRequestParam, ReadResourceResult, ResourceContents,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use serde::Deserialize;
use serde_json::Value;

use crate::prompts;
use crate::resources;

/// Notes MCP Service
#[derive(Clone)]
pub struct NotesService {
    /// The one mutable collection; single mutual-exclusion boundary.
    store: Arc<Mutex<NoteStore>>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl Default for NotesService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesService {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(NoteStore::new())),
            tool_router: Self::tool_router(),
        }
    }

    fn store(&self) -> Result<MutexGuard<'_, NoteStore>, McpError> {
        self.store
            .lock()
            .map_err(|_| McpError::internal_error("note store mutex poisoned", None))
    }
}

// ============================================================================
// Tool Input Schemas
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateNoteRequest {
    /// Note title (must not be empty)
    #[schemars(description = "Title of the note")]
    pub title: String,

    /// Note body
    #[schemars(description = "Content of the note")]
    pub content: String,

    /// Optional labels
    #[schemars(description = "Tags to attach to the note")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListNotesRequest {
    /// Exact tag to filter by
    #[schemars(description = "Only return notes carrying this tag (exact, case-sensitive)")]
    pub tag: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetNoteRequest {
    /// Note id
    #[schemars(description = "ID of the note to fetch")]
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateNoteRequest {
    /// Note id
    #[schemars(description = "ID of the note to update")]
    pub id: String,

    /// Replacement title
    #[schemars(description = "New title (omit to keep the current one)")]
    pub title: Option<String>,

    /// Replacement body
    #[schemars(description = "New content (omit to keep the current one)")]
    pub content: Option<String>,

    /// Replacement tag list
    #[schemars(description = "New tag list (omit to keep the current one)")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteNoteRequest {
    /// Note id
    #[schemars(description = "ID of the note to delete")]
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchNotesRequest {
    /// Substring to look for
    #[schemars(description = "Text to match against titles and contents (case-insensitive)")]
    pub query: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NotesService {
    /// Create a new note
    #[tool(description = "Create a new note with a title, content, and optional tags.")]
    pub async fn create_note(
        &self,
        Parameters(request): Parameters<CreateNoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        if request.title.trim().is_empty() {
            return Ok(CallToolResult::error(vec![Content::text(
                "Error: title must not be empty",
            )]));
        }
        let mut store = self.store()?;
        let id = store.insert(
            request.title,
            request.content,
            request.tags.unwrap_or_default(),
        );
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Note created successfully with ID: {id}"
        ))]))
    }

    /// List notes, optionally filtered by tag
    #[tool(description = "List all notes, or only the notes carrying an exact tag.")]
    pub async fn list_notes(
        &self,
        Parameters(request): Parameters<ListNotesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let store = self.store()?;
        let notes = store.list(request.tag.as_deref());
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&notes).unwrap_or_default(),
        )]))
    }

    /// Fetch a single note by id
    #[tool(description = "Get a single note by its ID.")]
    pub async fn get_note(
        &self,
        Parameters(request): Parameters<GetNoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        let store = self.store()?;
        match store.get(&request.id) {
            Ok(note) => Ok(CallToolResult::success(vec![Content::text(
                serde_json::to_string_pretty(note).unwrap_or_default(),
            )])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {e}"
            ))])),
        }
    }

    /// Partially update a note
    #[tool(
        description = "Update a note's title, content, and/or tags. Omitted fields are left unchanged."
    )]
    pub async fn update_note(
        &self,
        Parameters(request): Parameters<UpdateNoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut store = self.store()?;
        let id = request.id;
        let update = NoteUpdate {
            title: request.title,
            content: request.content,
            tags: request.tags,
        };
        match store.update(&id, update) {
            Ok(()) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Note {id} updated successfully"
            ))])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {e}"
            ))])),
        }
    }

    /// Delete a note
    #[tool(description = "Delete a note by its ID.")]
    pub async fn delete_note(
        &self,
        Parameters(request): Parameters<DeleteNoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut store = self.store()?;
        match store.delete(&request.id) {
            Ok(()) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Note {} deleted successfully",
                request.id
            ))])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {e}"
            ))])),
        }
    }

    /// Full-text search over titles and contents
    #[tool(
        description = "Search notes by a case-insensitive substring of their title or content."
    )]
    pub async fn search_notes(
        &self,
        Parameters(request): Parameters<SearchNotesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let store = self.store()?;
        let matches = store.search(&request.query);
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&matches).unwrap_or_default(),
        )]))
    }
}

// ============================================================================
// Views and prompt resolution
// ============================================================================

impl NotesService {
    /// Resolve a `notes://` address to a read-only snapshot.
    pub fn read_view(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let store = self.store()?;
        match uri {
            resources::ALL_URI => {
                let mut contents = ResourceContents::text(resources::render_all(&store), uri);
                if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
                    *mime_type = Some(resources::ALL_MIME_TYPE.into());
                }
                Ok(ReadResourceResult {
                    contents: vec![contents],
                })
            }
            resources::SUMMARY_URI => {
                let mut contents = ResourceContents::text(resources::render_summary(&store), uri);
                if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
                    *mime_type = Some(resources::SUMMARY_MIME_TYPE.into());
                }
                Ok(ReadResourceResult {
                    contents: vec![contents],
                })
            }
            _ => Err(McpError::resource_not_found(
                format!("Unknown resource: {uri}"),
                Some(serde_json::json!({ "uri": uri })),
            )),
        }
    }

    /// Resolve a template name plus arguments into prompt messages.
    pub fn resolve_prompt(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<GetPromptResult, McpError> {
        let store = self.store()?;
        let text = match name {
            prompts::SUMMARIZE_NOTES => {
                let tag = match arguments.as_ref().and_then(|args| args.get("tag")) {
                    None | Some(Value::Null) => None,
                    Some(Value::String(tag)) => Some(tag.clone()),
                    Some(other) => {
                        return Err(McpError::invalid_params(
                            format!("tag must be a string, got: {other}"),
                            None,
                        ));
                    }
                };
                prompts::summarize_notes(&store, tag.as_deref())
            }
            prompts::ORGANIZE_NOTES => prompts::organize_notes(&store),
            _ => {
                return Err(McpError::invalid_params(
                    format!("Unknown prompt: {name}"),
                    None,
                ));
            }
        };
        Ok(GetPromptResult {
            description: None,
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}

// ============================================================================
// MCP handler surface
// ============================================================================

#[tool_handler]
impl ServerHandler for NotesService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "A simple in-memory notes server. Use the note tools to create, list, \
                 update, search, and delete notes; read notes://all or notes://summary \
                 for snapshots; and use the prompts to summarize or organize the collection."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: resources::view_descriptors(),
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_view(&request.uri)
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: prompts::prompt_descriptors(),
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.resolve_prompt(&request.name, request.arguments)
    }
}
