//! MCP tool surface for agent players.

use crate::api::{GameStateResponse, ValidateWordResponse};
use crate::{RegistryError, SessionRegistry};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strictly_boggle::{Board, Coordinate, SessionSnapshot};
use tracing::{info, instrument, warn};

/// Request for submitting a word.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SubmitWordRequest {
    /// Session ID returned by `new_game`.
    pub session_id: String,
    /// Traced cells as `[row, col]` pairs, starting at the first letter.
    #[schemars(with = "Vec<(i32, i32)>")]
    pub positions: Vec<Coordinate>,
}

/// Request for reading session state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetStateRequest {
    /// Session ID.
    pub session_id: String,
}

/// Result of the `new_game` tool.
#[derive(Debug, Clone, Serialize)]
pub struct NewSessionResponse {
    /// Id to pass with later tool calls.
    pub session_id: String,
    /// The board, as rows of letters.
    pub board: Board,
    /// Always 0.
    pub score: u32,
    /// Always empty.
    pub found_words: Vec<String>,
}

impl NewSessionResponse {
    fn new(session_id: String, snapshot: SessionSnapshot) -> Self {
        Self {
            session_id,
            board: snapshot.board,
            score: snapshot.score,
            found_words: snapshot.found_words,
        }
    }
}

/// Main MCP handler.
pub struct BoggleServer {
    registry: SessionRegistry,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BoggleServer {
    /// Creates a handler over a shared registry.
    #[instrument(skip(registry))]
    pub fn new(registry: SessionRegistry) -> Self {
        info!("Creating MCP handler");
        Self {
            registry,
            tool_router: Self::tool_router(),
        }
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    #[tool(description = "Start a new word-search game. Returns a session ID and a square letter board; rows and columns are numbered from 0 at the top left.")]
    pub async fn new_game(&self) -> Result<CallToolResult, McpError> {
        let (session_id, snapshot) = self.registry.create();
        info!(session_id = %session_id, "Started game for agent");

        json_result(&NewSessionResponse::new(session_id, snapshot))
    }

    /// Submits a traced word.
    #[instrument(skip(self, req), fields(session_id = %req.session_id, len = req.positions.len()))]
    #[tool(description = "Submit a word by listing the [row, col] cells it is traced through. Cells must touch (diagonals count), may not repeat, and the word needs at least 3 letters.")]
    pub async fn submit_word(
        &self,
        Parameters(req): Parameters<SubmitWordRequest>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .registry
            .attempt(&req.session_id, &req.positions)
            .map_err(not_found)?;
        json_result(&ValidateWordResponse::from(outcome))
    }

    /// Reads a session's board, score and words.
    #[instrument(skip(self, req), fields(session_id = %req.session_id))]
    #[tool(description = "Get the board, score and words found so far")]
    pub async fn get_state(
        &self,
        Parameters(req): Parameters<GetStateRequest>,
    ) -> Result<CallToolResult, McpError> {
        let snapshot = self
            .registry
            .snapshot(&req.session_id)
            .map_err(not_found)?;
        json_result(&GameStateResponse::from(snapshot))
    }
}

fn not_found(err: RegistryError) -> McpError {
    warn!(error = %err, "Unknown session");
    McpError::invalid_params(format!("{}. Use new_game first.", err), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Failed to encode result: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BoggleServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.instructions = Some(
            "Word-search game server. Call new_game, then submit_word with paths of adjacent cells."
                .into(),
        );
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegistryLimits;
    use std::sync::Arc;
    use strictly_boggle::{Board, Dictionary, FixedBoard};

    fn server() -> (BoggleServer, SessionRegistry) {
        let board = Board::from_rows(&["CATS", "DOGE", "BIRD", "FISH"]).unwrap();
        let registry = SessionRegistry::new(
            Arc::new(Dictionary::from_words(["cat"])),
            FixedBoard::new(board),
            RegistryLimits::default(),
        );
        (BoggleServer::new(registry.clone()), registry)
    }

    #[tokio::test]
    async fn test_new_game_registers_session() {
        let (server, registry) = server();
        assert!(server.new_game().await.is_ok());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_new_session_response_has_empty_progress() {
        let (_, registry) = server();
        let (session_id, snapshot) = registry.create();
        let body = serde_json::to_value(NewSessionResponse::new(session_id.clone(), snapshot))
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "session_id": session_id,
                "board": [
                    ["C", "A", "T", "S"],
                    ["D", "O", "G", "E"],
                    ["B", "I", "R", "D"],
                    ["F", "I", "S", "H"]
                ],
                "score": 0,
                "found_words": []
            })
        );
    }

    #[tokio::test]
    async fn test_submit_word_updates_shared_registry() {
        let (server, registry) = server();
        let (session_id, _) = registry.create();
        let req = SubmitWordRequest {
            session_id: session_id.clone(),
            positions: vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
            ],
        };
        assert!(server.submit_word(Parameters(req)).await.is_ok());
        assert_eq!(registry.snapshot(&session_id).unwrap().score, 1);
    }

    #[tokio::test]
    async fn test_unknown_session_is_invalid_params() {
        let (server, _) = server();
        let req = GetStateRequest {
            session_id: "missing".to_string(),
        };
        assert!(server.get_state(Parameters(req)).await.is_err());
    }
}
