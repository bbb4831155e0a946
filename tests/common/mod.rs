// Local stand-in for the OpenOpus catalog service.
#![allow(dead_code)]

use axum::http::{header::CONTENT_TYPE, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::sync::{Arc, Mutex};

pub struct MockCatalog {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockCatalog {
    pub fn start() -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let recorded = Arc::clone(&requests);
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                let app = Router::new().fallback(move |uri: Uri| {
                    let recorded = Arc::clone(&recorded);
                    async move {
                        recorded.lock().unwrap().push(uri.path().to_string());
                        respond(uri.path())
                    }
                });
                axum::serve(listener, app).await.unwrap();
            });
        });

        Self { base_url, requests }
    }

    /// Base URL under which every response has the given flavour.
    pub fn url(&self, prefix: &str) -> String {
        format!("{}/{}", self.base_url, prefix)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn respond(path: &str) -> Response {
    if path.starts_with("/html/") {
        return (
            [(CONTENT_TYPE, "text/html; charset=UTF-8")],
            "<html><body>maintenance</body></html>",
        )
            .into_response();
    }
    if path.starts_with("/broken/") {
        return json_body("{\"composers\": [");
    }
    if path.starts_with("/gone/") {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    }
    if path.starts_with("/absent/") {
        return (
            StatusCode::NOT_FOUND,
            [(CONTENT_TYPE, "application/json")],
            NOTHING_FOUND,
        )
            .into_response();
    }

    match path {
        "/composer/list/pop.json" => json_body(POPULAR_COMPOSERS),
        "/composer/list/ids/178,10.json" => json_body(COMPOSERS_BY_ID),
        "/genre/list/composer/145.json" => json_body(BEETHOVEN_GENRES),
        "/work/list/composer/145/genre/Popular.json" => json_body(BEETHOVEN_POPULAR_WORKS),
        _ => json_body(NOTHING_FOUND),
    }
}

fn json_body(body: &'static str) -> Response {
    ([(CONTENT_TYPE, "application/json")], body).into_response()
}

const POPULAR_COMPOSERS: &str = r#"{
  "status": {"success": "true", "rows": 2},
  "composers": [
    {"id": "145", "name": "Beethoven", "complete_name": "Ludwig van Beethoven",
     "birth": "1770-01-01", "death": "1827-01-01", "epoch": "Early Romantic",
     "portrait": "https://assets.openopus.org/portraits/12091447-1568084857.jpg"},
    {"id": "196", "name": "Mozart", "complete_name": "Wolfgang Amadeus Mozart",
     "birth": "1756-01-01", "death": "1791-01-01", "epoch": "Classical",
     "portrait": "https://assets.openopus.org/portraits/21459195-1568084925.jpg"}
  ]
}"#;

const COMPOSERS_BY_ID: &str = r#"{
  "status": {"success": "true", "rows": 2},
  "composers": [
    {"id": "178", "name": "Milhaud", "complete_name": "Darius Milhaud",
     "birth": "1892-01-01", "death": "1974-01-01", "epoch": "20th Century", "portrait": ""},
    {"id": "10", "name": "Arvo Pärt", "complete_name": "Arvo Pärt",
     "birth": "1935-01-01", "death": null, "epoch": "Post-War", "portrait": ""}
  ]
}"#;

const BEETHOVEN_GENRES: &str = r#"{
  "status": {"success": "true"},
  "composer": {"id": "145", "name": "Beethoven"},
  "genres": ["Chamber", "Keyboard", "Orchestral", "Stage", "Vocal"]
}"#;

const BEETHOVEN_POPULAR_WORKS: &str = r#"{
  "status": {"success": "true", "rows": 1},
  "composer": {"id": "145", "name": "Beethoven"},
  "works": [
    {"title": "Symphony no. 9 in D minor, op. 125", "subtitle": "\"Choral\"",
     "searchterms": "", "popular": "1", "recommended": "1", "id": "15370", "genre": "Orchestral"}
  ]
}"#;

const NOTHING_FOUND: &str = r#"{"status": {"success": "false", "error": "Nothing found"}}"#;
