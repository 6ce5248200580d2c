//! Line-delimited JSON driver.
//!
//! Each input line is one request, either
//! `{"tool": "...", "arguments": {...}}` or `{"list_tools": true}`.
//! Each request produces exactly one output line. Blank lines are skipped.

use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use assetops_core::envelope::OperationResult;

use crate::dispatcher::ToolDispatcher;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Request {
    ListTools {
        list_tools: bool,
    },
    Call {
        tool: String,
        #[serde(default)]
        arguments: Value,
    },
}

/// Serve requests from `reader` until end of input.
pub async fn serve<R, W>(
    dispatcher: &ToolDispatcher,
    reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled: u64 = 0;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(dispatcher, &line).await;
        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');
        writer.write_all(encoded.as_bytes()).await?;
        writer.flush().await?;
        handled += 1;
    }

    tracing::info!(requests = handled, "Input closed, stopping");
    Ok(())
}

async fn handle_line(dispatcher: &ToolDispatcher, line: &str) -> Value {
    let request = match serde_json::from_str::<Request>(line) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed request line");
            return envelope(OperationResult::failure(format!("Malformed request: {e}")));
        }
    };

    match request {
        Request::ListTools { list_tools: true } => {
            json!({ "tools": dispatcher.tool_definitions() })
        }
        Request::ListTools { list_tools: false } => envelope(OperationResult::failure(
            "Malformed request: list_tools must be true",
        )),
        Request::Call { tool, arguments } => {
            tracing::info!(tool = %tool, "Tool call");
            envelope(dispatcher.dispatch(&tool, arguments).await)
        }
    }
}

fn envelope(result: OperationResult) -> Value {
    // OperationResult holds only strings, bools and JSON values.
    serde_json::to_value(result).unwrap_or_else(|e| {
        json!({ "success": false, "errorMessage": e.to_string() })
    })
}
