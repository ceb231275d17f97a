use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::tool;
use rmcp::tool_handler;
use rmcp::tool_router;
use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::warn;

use crate::connector::api::Container;
use crate::domain::{DomainError, ReviewRequest, ReviewSession, VariantCount, MAX_VARIANTS};

use super::tools::ReviewOutput;

fn default_count() -> usize {
    MAX_VARIANTS
}

/// Input parameters for the review_text tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReviewToolInput {
    /// The text to review
    pub text: String,

    /// Aspects to concentrate on (e.g., ["grammar", "structure"]); empty means general quality
    #[serde(default)]
    pub focus_areas: Vec<String>,

    /// Free-form extra instructions for the reviewer
    #[serde(default)]
    pub instructions: String,
}

/// Input parameters for the trim_text tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TrimToolInput {
    /// The text to shorten
    pub text: String,
}

/// Input parameters for the paraphrase_text tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ParaphraseToolInput {
    /// The text to paraphrase
    pub text: String,

    /// Number of variants to return (1 to 3, default: 3)
    #[serde(default = "default_count")]
    pub count: usize,
}

/// MCP Server that exposes the review, trim and paraphrase actions.
///
/// Holds the last review of this server session so `review_again` can
/// repeat it.
#[derive(Clone)]
pub struct ReviewMateMcpServer {
    container: Arc<Container>,
    last_review: Arc<Mutex<Option<ReviewSession>>>,
    tool_router: ToolRouter<Self>,
}

/// Render a failed action as a tool-level error the client can show.
fn status_result(error: DomainError) -> CallToolResult {
    warn!("Tool call failed: {error}");
    CallToolResult::error(vec![Content::text(error.status_message())])
}

fn review_result(session: &ReviewSession) -> Result<CallToolResult, McpError> {
    let output = ReviewOutput::from(session.result());
    let json = serde_json::to_string_pretty(&output).map_err(|e| {
        McpError::internal_error(format!("Failed to serialize review: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl ReviewMateMcpServer {
    pub fn new(container: Arc<Container>) -> Self {
        Self {
            container,
            last_review: Arc::new(Mutex::new(None)),
            tool_router: Self::tool_router(),
        }
    }

    /// Review a passage of academic writing. Returns up to 10 short comments, each with the
    /// quoted passage it refers to and a severity, plus an optional overall summary.
    #[tool(name = "review_text")]
    async fn review_text(
        &self,
        params: Parameters<ReviewToolInput>,
    ) -> Result<CallToolResult, McpError> {
        let input = params.0;
        let request = ReviewRequest::new(input.text)
            .with_focus_areas(input.focus_areas)
            .with_custom_instructions(input.instructions);

        let use_case = self.container.review_text_use_case();
        let session = match use_case.execute(request).await {
            Ok(session) => session,
            Err(e) => return Ok(status_result(e)),
        };

        let result = review_result(&session);
        *self.last_review.lock().await = Some(session);
        result
    }

    /// Repeat the last review_text call of this session with the same text, focus areas and
    /// instructions.
    #[tool(name = "review_again")]
    async fn review_again(&self) -> Result<CallToolResult, McpError> {
        let Some(previous) = self.last_review.lock().await.clone() else {
            return Ok(status_result(DomainError::not_found(
                "no review has been run in this session",
            )));
        };

        let use_case = self.container.review_text_use_case();
        let session = match use_case.review_again(&previous).await {
            Ok(session) => session,
            Err(e) => return Ok(status_result(e)),
        };

        let result = review_result(&session);
        *self.last_review.lock().await = Some(session);
        result
    }

    /// Shorten a passage while keeping its meaning. Returns only the revised text.
    #[tool(name = "trim_text")]
    async fn trim_text(
        &self,
        params: Parameters<TrimToolInput>,
    ) -> Result<CallToolResult, McpError> {
        let use_case = self.container.trim_use_case();
        match use_case.execute(&params.0.text).await {
            Ok(trimmed) => Ok(CallToolResult::success(vec![Content::text(trimmed)])),
            Err(e) => Ok(status_result(e)),
        }
    }

    /// Paraphrase a passage. Returns a JSON array of 1 to 3 alternative versions.
    #[tool(name = "paraphrase_text")]
    async fn paraphrase_text(
        &self,
        params: Parameters<ParaphraseToolInput>,
    ) -> Result<CallToolResult, McpError> {
        let input = params.0;
        let use_case = self.container.paraphrase_use_case();

        let variants = match use_case
            .execute(&input.text, VariantCount::new(input.count))
            .await
        {
            Ok(variants) => variants,
            Err(e) => return Ok(status_result(e)),
        };

        let json = serde_json::to_string_pretty(&variants).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize variants: {}", e), None)
        })?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ReviewMateMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Writing review assistant. Use review_text to get inline feedback on a passage, \
                 review_again to repeat the last review, trim_text to shorten a passage and \
                 paraphrase_text to get alternative phrasings."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::api::ContainerConfig;
    use crate::connector::MockChatClient;
    use serde_json::Value;
    use tempfile::{tempdir, TempDir};

    const REVIEW_JSON: &str =
        r#"{"comments":[{"quote":"teh","comment":"Typo.","severity":"warning"}],"summary":"Short."}"#;

    fn server_with(client: Arc<MockChatClient>) -> (TempDir, ReviewMateMcpServer) {
        let dir = tempdir().expect("tempdir");
        let container = Container::with_chat_client(
            ContainerConfig {
                data_dir: dir.path().to_string_lossy().to_string(),
                env_overrides: false,
            },
            client,
        );
        (dir, ReviewMateMcpServer::new(Arc::new(container)))
    }

    fn first_text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"][0]["text"].as_str().unwrap_or_default().to_string()
    }

    fn is_error(result: &CallToolResult) -> bool {
        let value = serde_json::to_value(result).unwrap();
        value["isError"].as_bool().unwrap_or(false)
    }

    #[tokio::test]
    async fn review_again_without_a_prior_review_reports_status() {
        let client = Arc::new(MockChatClient::with_response(REVIEW_JSON));
        let (_dir, server) = server_with(client.clone());

        let result = server.review_again().await.unwrap();

        assert!(is_error(&result));
        assert!(first_text(&result).starts_with("Nothing to repeat"));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn review_again_repeats_the_session_review() {
        let client = Arc::new(MockChatClient::with_response(REVIEW_JSON));
        let (_dir, server) = server_with(client.clone());
        server
            .container
            .settings_use_case()
            .update(Some("sk-test".to_string()), None, None)
            .await
            .unwrap();

        let first = server
            .review_text(Parameters(ReviewToolInput {
                text: "teh draft".to_string(),
                focus_areas: vec!["spelling".to_string()],
                instructions: String::new(),
            }))
            .await
            .unwrap();
        assert!(!is_error(&first));
        let parsed: Value = serde_json::from_str(&first_text(&first)).unwrap();
        assert_eq!(parsed["comments"][0]["severity"], "warning");
        assert_eq!(parsed["summary"], "Short.");

        let again = server.review_again().await.unwrap();
        assert!(!is_error(&again));

        let requests = client.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].user(), requests[1].user());
    }

    #[tokio::test]
    async fn blank_trim_input_is_a_status_not_a_request() {
        let client = Arc::new(MockChatClient::with_response("ignored"));
        let (_dir, server) = server_with(client.clone());

        let result = server
            .trim_text(Parameters(TrimToolInput {
                text: "  ".to_string(),
            }))
            .await
            .unwrap();

        assert!(is_error(&result));
        assert_eq!(first_text(&result), "No text selected. Nothing to do.");
        assert_eq!(client.call_count(), 0);
    }
}
