pub mod dto;
pub mod handler;

pub use dto::{McpError, McpRequest, McpResponse, Tool, ToolCall, ToolResult};
pub use handler::handle_request;
