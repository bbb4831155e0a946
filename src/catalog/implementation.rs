use super::dto::{Composer, DataType, Genre, Work};
use super::helpers::{escape_url, join_items, join_path};
use crate::config::{CatalogConfig, DEFAULT_API_URL};
use crate::error::{OpusError, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

pub const JSON_CONTENT_TYPE: &str = "application/json";

const BODY_PREVIEW_CHARS: usize = 200;

/// Blocking client for the OpenOpus catalog service.
///
/// Every lookup is a single GET against
/// `{base_url}/{resource}/list/{filter}/{items}.json`; the records are read
/// from the array under the resource's envelope key.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&CatalogConfig {
            api_url: base_url.into(),
            ..CatalogConfig::default()
        })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| OpusError::config_error(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_http_client(http, config.api_url.clone()))
    }

    /// Wraps an existing session, e.g. one with custom proxies or headers.
    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `url` and returns the parsed JSON body.
    ///
    /// The HTTP status is not inspected. Fails with
    /// [`OpusError::ContentTypeError`] unless the response is exactly
    /// `application/json`, and with [`OpusError::ParseError`] when the body is
    /// not valid JSON.
    pub fn get_json(&self, url: &str) -> Result<Value> {
        let escaped = escape_url(url);
        tracing::debug!("GET {}", escaped);
        let response = self.http.get(&escaped).send()?;
        let observed = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text()?;
        decode_json(observed.as_deref(), &body)
    }

    pub fn list_data<T, S>(&self, data_type: DataType, list_by: &str, items: &[S]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        S: AsRef<str>,
    {
        let target = self.list_url(data_type, list_by, items);
        let envelope = self.get_json(&target)?;
        let records = extract_records(envelope, data_type.key())?;
        tracing::debug!(
            key = data_type.key(),
            count = records.len(),
            "catalog lookup finished"
        );
        Ok(records)
    }

    /// Unescaped request URL for a list lookup.
    pub fn list_url<S: AsRef<str>>(&self, data_type: DataType, list_by: &str, items: &[S]) -> String {
        let joined_items = join_items(items);
        let path = join_path(&[
            self.base_url.as_str(),
            data_type.resource(),
            "list",
            list_by,
            joined_items.as_str(),
        ]);
        format!("{}.json", path)
    }

    pub fn list_popular_composers(&self) -> Result<Vec<Composer>> {
        self.list_data(DataType::Composers, "", &["pop"])
    }

    pub fn list_essential_composers(&self) -> Result<Vec<Composer>> {
        self.list_data(DataType::Composers, "", &["rec"])
    }

    pub fn list_composers_by_first_letter(&self, letter: &str) -> Result<Vec<Composer>> {
        self.list_data(DataType::Composers, "name", &[letter])
    }

    pub fn list_composers_by_period(&self, period: &str) -> Result<Vec<Composer>> {
        self.list_data(DataType::Composers, "epoch", &[period])
    }

    /// Matching semantics (prefix or substring) are up to the service.
    pub fn search_composers_by_name(&self, name: &str) -> Result<Vec<Composer>> {
        self.list_data(DataType::Composers, "search", &[name])
    }

    pub fn list_composers_by_id<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Composer>> {
        self.list_data(DataType::Composers, "ids", ids)
    }

    pub fn list_genres_by_composer_id(&self, composer_id: &str) -> Result<Vec<String>> {
        self.list_data(DataType::Genres, "composer", &[composer_id])
    }

    pub fn list_works_by_composer_id_and_genre(
        &self,
        composer_id: &str,
        genre: Genre,
    ) -> Result<Vec<Work>> {
        let list_by = join_path(&["composer", composer_id, "genre"]);
        self.list_data(DataType::Works, &list_by, &[genre.as_str()])
    }

    pub fn list_works_by_composer_id(&self, composer_id: &str) -> Result<Vec<Work>> {
        self.list_works_by_composer_id_and_genre(composer_id, Genre::All)
    }

    pub fn list_popular_works_by_composer_id(&self, composer_id: &str) -> Result<Vec<Work>> {
        self.list_works_by_composer_id_and_genre(composer_id, Genre::Popular)
    }

    pub fn list_essential_works_by_composer_id(&self, composer_id: &str) -> Result<Vec<Work>> {
        self.list_works_by_composer_id_and_genre(composer_id, Genre::Essential)
    }

    pub fn search_works_by_composer_id_title_and_genre(
        &self,
        composer_id: &str,
        title: &str,
        genre: Genre,
    ) -> Result<Vec<Work>> {
        let list_by = join_path(&["composer", composer_id, "genre", genre.as_str(), "search"]);
        self.list_data(DataType::Works, &list_by, &[title])
    }

    pub fn search_works_by_composer_id_and_title(
        &self,
        composer_id: &str,
        title: &str,
    ) -> Result<Vec<Work>> {
        self.search_works_by_composer_id_title_and_genre(composer_id, title, Genre::All)
    }
}

pub(crate) fn decode_json(observed: Option<&str>, body: &str) -> Result<Value> {
    if observed != Some(JSON_CONTENT_TYPE) {
        tracing::warn!(
            content_type = observed.unwrap_or("none"),
            body = %preview(body),
            "unexpected response content type"
        );
        return Err(OpusError::content_type(observed, JSON_CONTENT_TYPE));
    }
    Ok(serde_json::from_str(body)?)
}

pub(crate) fn extract_records<T: DeserializeOwned>(envelope: Value, key: &str) -> Result<Vec<T>> {
    let records = match envelope {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    };
    match records {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrong_content_type_names_both_types() {
        let err = decode_json(Some("text/html; charset=UTF-8"), "<html></html>").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("text/html; charset=UTF-8"));
        assert!(message.contains("application/json"));
        assert!(matches!(err, OpusError::ContentTypeError { .. }));
    }

    #[test]
    fn missing_content_type_is_rejected() {
        let err = decode_json(None, "{}").unwrap_err();
        assert!(err.to_string().contains("'none'"));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = decode_json(Some(JSON_CONTENT_TYPE), "{\"composers\": [").unwrap_err();
        assert!(matches!(err, OpusError::ParseError(_)));
    }

    #[test]
    fn missing_or_null_key_yields_empty_list() {
        let status_only = json!({"status": {"success": "false", "error": "not found"}});
        let composers: Vec<Composer> = extract_records(status_only, "composers").unwrap();
        assert!(composers.is_empty());

        let null_key = json!({"works": null});
        let works: Vec<Work> = extract_records(null_key, "works").unwrap();
        assert!(works.is_empty());
    }

    #[test]
    fn records_come_from_the_named_key() {
        let envelope = json!({
            "status": {"success": "true"},
            "genres": ["Keyboard", "Orchestral"]
        });
        let genres: Vec<String> = extract_records(envelope, "genres").unwrap();
        assert_eq!(genres, vec!["Keyboard", "Orchestral"]);
    }

    #[test]
    fn wrong_record_shape_is_parse_error() {
        let envelope = json!({"genres": "Keyboard"});
        let err = extract_records::<String>(envelope, "genres").unwrap_err();
        assert!(matches!(err, OpusError::ParseError(_)));
    }

    #[test]
    fn unusable_user_agent_is_config_error() {
        let config = CatalogConfig {
            user_agent: "bad\nagent".to_string(),
            ..CatalogConfig::default()
        };
        let err = CatalogClient::from_config(&config).err().unwrap();
        assert!(matches!(err, OpusError::ConfigError(_)), "{err:?}");
        assert!(err.to_string().contains("Failed to build HTTP client"));
    }

    #[test]
    fn list_urls() {
        let client = CatalogClient::with_base_url("https://api.openopus.org/").unwrap();
        assert_eq!(
            client.list_url(DataType::Composers, "", &["pop"]),
            "https://api.openopus.org/composer/list/pop.json"
        );
        let ids = client.list_url(DataType::Composers, "ids", &["178", "10"]);
        assert!(ids.contains("178,10"));
        assert_eq!(
            client.list_url::<&str>(DataType::Composers, "name", &[]),
            "https://api.openopus.org/composer/list/name.json"
        );
        assert_eq!(
            client.list_url(DataType::Works, "composer/129/genre/all/search", &["sonata"]),
            "https://api.openopus.org/work/list/composer/129/genre/all/search/sonata.json"
        );
    }
}
