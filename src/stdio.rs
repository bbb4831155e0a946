use crate::mcp::dto::{McpRequest, McpResponse, PARSE_ERROR};
use crate::mcp::handler;
use crate::OpusServer;
use serde_json::json;
use std::io::{self, BufRead, Write};

/// Serves newline-delimited JSON-RPC until `reader` hits EOF.
pub fn serve<R: BufRead, W: Write>(server: &OpusServer, reader: R, mut writer: W) -> io::Result<()> {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Error reading from stdin: {}", e);
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        tracing::debug!("Received: {}", line);

        let response = match serde_json::from_str::<McpRequest>(line) {
            Ok(request) => {
                let notification = request.is_notification();
                let response = handler::handle_request(server, request);
                if notification {
                    continue;
                }
                response
            }
            Err(e) => {
                tracing::error!("Failed to parse request: {}", e);
                McpResponse::failure(None, PARSE_ERROR, "Parse error")
                    .with_data(json!({ "details": e.to_string() }))
            }
        };

        let response_json = serde_json::to_string(&response)?;
        tracing::debug!("Sending: {}", response_json);
        writeln!(writer, "{}", response_json)?;
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpusConfig;
    use serde_json::Value;
    use std::io::Cursor;

    fn run(input: &str) -> Vec<Value> {
        let server = OpusServer::new(OpusConfig::default()).unwrap();
        let mut out = Vec::new();
        serve(&server, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn answers_each_request_line() {
        let replies = run(concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"initialize"}"#,
            "\n"
        ));
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["id"], 1);
        assert_eq!(replies[0]["result"]["ok"], true);
        assert_eq!(replies[1]["result"]["serverInfo"]["name"], "openopus-mcp");
    }

    #[test]
    fn notifications_get_no_reply() {
        let replies = run(concat!(
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":"a","method":"ping"}"#,
            "\n"
        ));
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["id"], "a");
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let replies = run("not json\n");
        assert_eq!(replies[0]["error"]["code"], PARSE_ERROR);
        assert!(replies[0]["error"]["data"]["details"].is_string());
    }
}
