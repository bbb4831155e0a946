use jsonschema::JSONSchema;
use openopus_mcp::{OpusConfig, OpusServer};

#[test]
fn list_tools_covers_every_catalog_lookup() {
    let server = OpusServer::new(OpusConfig::default()).unwrap();
    let tools = server.get_tools();
    assert_eq!(tools.len(), 12);
    let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
    for expected in [
        "list_popular_composers",
        "list_essential_composers",
        "list_composers_by_first_letter",
        "list_composers_by_period",
        "search_composers_by_name",
        "list_composers_by_id",
        "list_genres_by_composer_id",
        "list_works_by_composer_id_and_genre",
        "list_works_by_composer_id",
        "list_popular_works_by_composer_id",
        "list_essential_works_by_composer_id",
        "search_works",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }
}

#[test]
fn every_input_schema_compiles() {
    let server = OpusServer::new(OpusConfig::default()).unwrap();
    for tool in server.get_tools() {
        assert!(
            JSONSchema::compile(&tool.input_schema).is_ok(),
            "{} has an invalid schema",
            tool.name
        );
        assert_eq!(tool.input_schema["type"], "object");
    }
}

#[test]
fn find_tool_by_name() {
    let server = OpusServer::new(OpusConfig::default()).unwrap();
    let tool = server.find_tool("search_works").unwrap();
    assert_eq!(tool.input_schema["required"][1], "title");
    assert!(server.find_tool("get_cat_fact").is_none());
}
