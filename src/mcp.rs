use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::split::{default_output_dir, split_to_dir};
use crate::pdf::PdfDocument;

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfSplitRequest {
    #[schemars(description = "Path to the PDF file to split")]
    pub path: String,
    #[schemars(description = "Comma-separated start pages (e.g., '1,5,12,20')")]
    pub pages: String,
    #[schemars(description = "Output directory (default: the source file's directory)")]
    pub output_dir: Option<String>,
    #[schemars(
        description = "Exclude the first two and last two pages before splitting; start pages then count from the first kept page (default: false)"
    )]
    #[serde(default)]
    pub trim_covers: bool,
}

#[derive(Debug, Clone)]
pub struct SplitServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl SplitServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for SplitServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl SplitServer {
    #[tool(description = "Get a PDF's page count, title/author, and the page ranges available for splitting")]
    fn pdf_info(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        match PdfDocument::open(&path) {
            Ok(doc) => {
                let info = doc.get_info();
                let trimmed_page_count = if info.page_count >= 5 {
                    Some(info.page_count - 4)
                } else {
                    None
                };
                let result = PdfInfoResult {
                    path,
                    page_count: info.page_count,
                    title: info.title,
                    author: info.author,
                    trimmed_page_count,
                };
                serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Cut a PDF into contiguous ranges at the given start pages and write one file per range")]
    fn pdf_split(&self, Parameters(req): Parameters<PdfSplitRequest>) -> String {
        let input = Path::new(&req.path);
        let output_dir = match &req.output_dir {
            Some(dir) => PathBuf::from(dir),
            None => default_output_dir(input),
        };

        match split_to_dir(input, &output_dir, &req.pages, req.trim_covers) {
            Ok(report) => {
                let result = SplitResult {
                    output_dir: output_dir.display().to_string(),
                    files_written: report.files.len() as u32,
                    files: report
                        .files
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect(),
                    warnings: report.warnings,
                };
                serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {}", e),
        }
    }
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PdfInfoResult {
    pub path: String,
    pub page_count: u32,
    pub title: Option<String>,
    pub author: Option<String>,
    /// Pages left between the covers, absent when the document is too
    /// short to trim
    pub trimmed_page_count: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SplitResult {
    pub output_dir: String,
    pub files_written: u32,
    pub files: Vec<String>,
    pub warnings: Vec<String>,
}

impl ServerHandler for SplitServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF splitting tools. Use pdf_info to see a document's page count and the \
                 ranges available for splitting, and pdf_split to cut it into contiguous \
                 ranges at given start pages, optionally trimming two cover pages at each end."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = SplitServer::new();

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
