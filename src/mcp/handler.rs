use crate::error::{OpusError, Result};
use crate::server::OpusServer;
use crate::tools::{composers, genres, works};
use jsonschema::JSONSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use super::dto::{
    McpRequest, McpResponse, ToolCall, ToolResult, INTERNAL_ERROR, INVALID_PARAMS,
    METHOD_NOT_FOUND,
};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub fn handle_request(server: &OpusServer, request: McpRequest) -> McpResponse {
    match request.method.as_str() {
        "tools/list" => McpResponse::success(request.id, json!({ "tools": server.get_tools() })),
        "tools/call" => {
            let Some(params) = request.params else {
                return McpResponse::failure(request.id, INVALID_PARAMS, "Missing parameters");
            };
            let Ok(tool_call) = serde_json::from_value::<ToolCall>(params) else {
                return McpResponse::failure(
                    request.id,
                    INVALID_PARAMS,
                    "Invalid tool call parameters",
                );
            };
            match handle_tool_call(server, tool_call) {
                Ok(result) => McpResponse::success(
                    request.id,
                    json!({
                        "content": [
                            { "type": "text", "text": result.content }
                        ],
                        "isError": result.is_error
                    }),
                ),
                Err(e) => {
                    let code = match e {
                        OpusError::ValidationError(_) => INVALID_PARAMS,
                        _ => INTERNAL_ERROR,
                    };
                    McpResponse::failure(request.id, code, format!("Tool execution failed: {}", e))
                }
            }
        }
        "initialize" => McpResponse::success(
            request.id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": { "name": "openopus-mcp", "version": env!("CARGO_PKG_VERSION") }
            }),
        ),
        "ping" | "notifications/initialized" => McpResponse::success(request.id, json!({ "ok": true })),
        _ => McpResponse::failure(
            request.id,
            METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        ),
    }
}

pub(crate) fn handle_tool_call(server: &OpusServer, tool_call: ToolCall) -> Result<ToolResult> {
    tracing::info!("Handling tool call: {}", tool_call.name);
    let tool = server
        .find_tool(&tool_call.name)
        .ok_or_else(|| OpusError::api_error(format!("Unknown tool: {}", tool_call.name)))?;
    let arguments = match tool_call.arguments {
        Value::Null => json!({}),
        other => other,
    };
    validate_arguments(&tool.input_schema, &arguments)?;

    let catalog = server.catalog();
    let result = match tool.name.as_str() {
        "list_popular_composers" => {
            output(composers::list_popular_composers(catalog, input(arguments)?)?)?
        }
        "list_essential_composers" => {
            output(composers::list_essential_composers(catalog, input(arguments)?)?)?
        }
        "list_composers_by_first_letter" => {
            output(composers::list_composers_by_first_letter(catalog, input(arguments)?)?)?
        }
        "list_composers_by_period" => {
            output(composers::list_composers_by_period(catalog, input(arguments)?)?)?
        }
        "search_composers_by_name" => {
            output(composers::search_composers_by_name(catalog, input(arguments)?)?)?
        }
        "list_composers_by_id" => {
            output(composers::list_composers_by_id(catalog, input(arguments)?)?)?
        }
        "list_genres_by_composer_id" => {
            output(genres::list_genres_by_composer_id(catalog, input(arguments)?)?)?
        }
        "list_works_by_composer_id_and_genre" => {
            output(works::list_works_by_composer_id_and_genre(catalog, input(arguments)?)?)?
        }
        "list_works_by_composer_id" => {
            output(works::list_works_by_composer_id(catalog, input(arguments)?)?)?
        }
        "list_popular_works_by_composer_id" => {
            output(works::list_popular_works_by_composer_id(catalog, input(arguments)?)?)?
        }
        "list_essential_works_by_composer_id" => {
            output(works::list_essential_works_by_composer_id(catalog, input(arguments)?)?)?
        }
        "search_works" => output(works::search_works(catalog, input(arguments)?)?)?,
        other => return Err(OpusError::internal(format!("Tool has no handler: {}", other))),
    };

    Ok(ToolResult {
        content: serde_json::to_string_pretty(&result)?,
        is_error: false,
    })
}

fn validate_arguments(schema: &Value, arguments: &Value) -> Result<()> {
    let compiled = JSONSchema::compile(schema)
        .map_err(|e| OpusError::internal(format!("Invalid tool schema: {}", e)))?;
    if let Err(errors) = compiled.validate(arguments) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(OpusError::validation_error(format!(
            "Invalid arguments: {}",
            details
        )));
    }
    Ok(())
}

fn input<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments)
        .map_err(|e| OpusError::validation_error(format!("Invalid arguments: {}", e)))
}

fn output<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
