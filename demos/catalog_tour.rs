// Minimal example: query the live catalog directly and through OpusServer
use anyhow::Result;
use openopus_mcp::mcp::ToolCall;
use openopus_mcp::{Genre, OpusConfig, OpusServer};
use serde_json::json;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let server = OpusServer::new(OpusConfig::from_env()?)?;
    let catalog = server.catalog();

    println!("Popular composers:");
    for composer in catalog.list_popular_composers()?.iter().take(5) {
        println!(" - [{}] {} ({})", composer.id, composer.complete_name, composer.epoch);
    }

    let genres = catalog.list_genres_by_composer_id("145")?;
    println!("Beethoven genres: {}", genres.join(", "));

    for work in catalog.list_works_by_composer_id_and_genre("145", Genre::Keyboard)?.iter().take(5) {
        println!(" - {} {}", work.title, work.subtitle);
    }

    let search = ToolCall {
        name: "search_works".into(),
        arguments: json!({ "composer_id": "145", "title": "sonata", "genre": "Chamber" }),
    };
    println!("search_works -> {}", server.handle_tool_call(search)?.content);
    Ok(())
}
