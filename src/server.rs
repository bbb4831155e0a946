use crate::catalog::{CatalogClient, Genre};
use crate::config::OpusConfig;
use crate::error::Result;
use crate::mcp::dto::{Tool, ToolCall, ToolResult};
use crate::mcp::handler;
use serde_json::{json, Value};

pub struct OpusServer {
    config: OpusConfig,
    catalog: CatalogClient,
}

impl OpusServer {
    pub fn new(config: OpusConfig) -> Result<Self> {
        let catalog = CatalogClient::from_config(&config.catalog)?;
        Ok(Self { config, catalog })
    }

    /// Server backed by a caller-supplied catalog client.
    pub fn with_catalog(config: OpusConfig, catalog: CatalogClient) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &OpusConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    pub fn get_tools(&self) -> Vec<Tool> {
        let composer_id = json!({ "type": "string", "minLength": 1, "description": "OpenOpus composer id, e.g. \"145\"" });
        let genre_labels = Genre::VARIANTS
            .iter()
            .map(|genre| genre.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            tool(
                "list_popular_composers",
                "List the most popular composers in the OpenOpus catalog",
                json!({ "type": "object", "properties": {} }),
            ),
            tool(
                "list_essential_composers",
                "List the essential (recommended) composers",
                json!({ "type": "object", "properties": {} }),
            ),
            tool(
                "list_composers_by_first_letter",
                "List composers whose name starts with a letter",
                json!({
                    "type": "object",
                    "properties": {
                        "letter": { "type": "string", "minLength": 1, "maxLength": 1 }
                    },
                    "required": ["letter"]
                }),
            ),
            tool(
                "list_composers_by_period",
                "List composers of a period (Medieval, Renaissance, Baroque, Classical, Early Romantic, Romantic, Late Romantic, 20th Century, Post-War, 21st Century)",
                json!({
                    "type": "object",
                    "properties": {
                        "period": { "type": "string", "minLength": 1 }
                    },
                    "required": ["period"]
                }),
            ),
            tool(
                "search_composers_by_name",
                "Search composers by name",
                json!({
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "minLength": 1 }
                    },
                    "required": ["name"]
                }),
            ),
            tool(
                "list_composers_by_id",
                "Fetch composers by id (one id or a list of ids)",
                json!({
                    "type": "object",
                    "properties": {
                        "ids": {
                            "anyOf": [
                                { "type": "string", "minLength": 1 },
                                { "type": "array", "items": { "type": "string" }, "minItems": 1 }
                            ]
                        }
                    },
                    "required": ["ids"]
                }),
            ),
            tool(
                "list_genres_by_composer_id",
                "List the genres a composer wrote in",
                json!({
                    "type": "object",
                    "properties": { "composer_id": composer_id },
                    "required": ["composer_id"]
                }),
            ),
            tool(
                "list_works_by_composer_id_and_genre",
                "List a composer's works in one genre",
                json!({
                    "type": "object",
                    "properties": {
                        "composer_id": composer_id,
                        "genre": { "type": "string", "minLength": 1, "description": format!("One of: {}", genre_labels) }
                    },
                    "required": ["composer_id", "genre"]
                }),
            ),
            tool(
                "list_works_by_composer_id",
                "List all works of a composer",
                composer_only(&composer_id),
            ),
            tool(
                "list_popular_works_by_composer_id",
                "List a composer's popular works",
                composer_only(&composer_id),
            ),
            tool(
                "list_essential_works_by_composer_id",
                "List a composer's essential (recommended) works",
                composer_only(&composer_id),
            ),
            tool(
                "search_works",
                "Search a composer's works by title, optionally within a genre",
                json!({
                    "type": "object",
                    "properties": {
                        "composer_id": composer_id,
                        "title": { "type": "string", "minLength": 1 },
                        "genre": { "type": "string", "description": format!("One of: {} (default all)", genre_labels) }
                    },
                    "required": ["composer_id", "title"]
                }),
            ),
        ]
    }

    pub fn find_tool(&self, name: &str) -> Option<Tool> {
        self.get_tools().into_iter().find(|tool| tool.name == name)
    }

    /// Runs one tool call. Blocks on the catalog request.
    pub fn handle_tool_call(&self, tool_call: ToolCall) -> Result<ToolResult> {
        handler::handle_tool_call(self, tool_call)
    }
}

fn tool(name: &str, description: &str, input_schema: Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

fn composer_only(composer_id: &Value) -> Value {
    json!({
        "type": "object",
        "properties": { "composer_id": composer_id },
        "required": ["composer_id"]
    })
}
