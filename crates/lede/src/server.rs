//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes summarization over MCP on stdio. The server is a presentation
//! layer: every `#[tool]` method delegates to [`lede_core`] and converts its
//! errors into [`McpError`].
//!
//! The stop-word set is built once per server and shared by every call.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use lede_core::summarize::DEFAULT_SUMMARY_LENGTH;
use lede_core::{SummarizeError, Summarizer, TextStats};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `summarize_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SummarizeTextParams {
    /// The text to summarize.
    pub text: String,
    /// Number of sentences in the summary (1-20). Defaults to the configured length.
    pub sentences: Option<usize>,
}

/// Parameters for the `text_stats` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextStatsParams {
    /// The text to measure.
    pub text: String,
}

/// MCP server exposing summarization to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    summarizer: Summarizer,
    summary_length: usize,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(
            Summarizer::english(),
            DEFAULT_SUMMARY_LENGTH,
            Some(lede_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

fn summarize_error(err: &SummarizeError) -> McpError {
    McpError::internal_error(format!("{}: {err}", err.kind()), None)
}

#[tool_router]
impl ProjectServer {
    /// Create a server around a configured summarizer.
    pub fn new(summarizer: Summarizer, summary_length: usize, max_input_bytes: Option<usize>) -> Self {
        Self {
            summarizer,
            summary_length,
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_input_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Summarize text by word frequency and sentence position.
    #[tool(
        description = "Summarize text extractively. Returns the selected sentences in document order with scores, keywords, and input/summary statistics."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn summarize_text(
        &self,
        Parameters(params): Parameters<SummarizeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "summarize_text", sentences = ?params.sentences, "executing MCP tool");
        self.check_input_size(&params.text)?;

        let length = params.sentences.unwrap_or(self.summary_length);
        let report = self
            .summarizer
            .summarize(&params.text, length)
            .map_err(|e| summarize_error(&e))?;
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "summarize_text",
            selected = report.sentences.len(),
            compression_ratio = report.compression_ratio,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Character, word and sentence counts.
    #[tool(description = "Count characters, words, and sentences in text without summarizing it.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn text_stats(
        &self,
        Parameters(params): Parameters<TextStatsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "text_stats", "executing MCP tool");
        self.check_input_size(&params.text)?;

        let stats = TextStats::of(&params.text);
        let json = serde_json::to_string_pretty(&stats)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "text_stats", words = stats.words, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use summarize_text to condense prose into its most \
                 representative sentences and text_stats to measure it.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
