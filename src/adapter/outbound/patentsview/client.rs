//! PatentsView query API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::domain::PatentId;
use crate::error::{Error, Result};
use crate::port::outbound::search::PatentSearch;

/// Legacy PatentsView patents query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.patentsview.org/patents/query";

/// Fields requested for every lookup.
pub const FIELDS: [&str; 11] = [
    "patent_number",
    "patent_title",
    "abstract",
    "patent_date",
    "application_number",
    "filing_date",
    "cpc_subgroup_id",
    "ipc_subgroup_id",
    "uspc_mainclass_id",
    "assignees",
    "inventors",
];

/// Query object sent as the `q` parameter.
#[derive(Debug, Serialize)]
struct Query<'a> {
    q: serde_json::Value,
    f: &'a [&'a str],
}

impl<'a> Query<'a> {
    fn for_patent(id: &PatentId) -> Self {
        Self {
            q: json!({ "_eq": { "patent_number": id.as_str() } }),
            f: &FIELDS,
        }
    }
}

/// HTTP client for the PatentsView query API.
#[derive(Debug)]
pub struct PatentsView {
    client: Client,
    base_url: Url,
}

impl PatentsView {
    /// Create a client for the given query endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Full request URL for a patent: the whole query object JSON-encoded
    /// into a single `q` parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be serialized.
    pub fn query_url(&self, id: &PatentId) -> Result<Url> {
        let query = serde_json::to_string(&Query::for_patent(id))?;
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("q", &query);
        Ok(url)
    }
}

#[async_trait]
impl PatentSearch for PatentsView {
    fn name(&self) -> &'static str {
        "patentsview"
    }

    async fn query(&self, id: &PatentId) -> Result<String> {
        let url = self.query_url(id)?;
        debug!(patent = %id, "querying patent search API");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_query(url: &Url) -> serde_json::Value {
        let (_, q) = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .expect("q parameter present");
        serde_json::from_str(&q).expect("q is JSON")
    }

    #[test]
    fn query_url_encodes_equality_filter_and_fields() {
        let client = PatentsView::new(DEFAULT_BASE_URL).unwrap();
        let id = PatentId::parse("11234567").unwrap();

        let url = client.query_url(&id).unwrap();
        assert!(url.as_str().starts_with(DEFAULT_BASE_URL));
        assert_eq!(url.query_pairs().count(), 1);

        let query = decoded_query(&url);
        assert_eq!(query["q"]["_eq"]["patent_number"], "11234567");

        let fields: Vec<&str> = query["f"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f.as_str().unwrap())
            .collect();
        assert_eq!(fields, FIELDS);
    }

    #[test]
    fn query_url_escapes_identifier() {
        let client = PatentsView::new(DEFAULT_BASE_URL).unwrap();
        let id = PatentId::parse(r#"1"2&3"#).unwrap();

        let url = client.query_url(&id).unwrap();
        assert_eq!(decoded_query(&url)["q"]["_eq"]["patent_number"], r#"1"2&3"#);
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(PatentsView::new("::not-a-url"), Err(Error::Url(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_an_error() {
        let client = PatentsView::new("http://127.0.0.1:9/patents/query").unwrap();
        let id = PatentId::parse("1").unwrap();
        assert!(matches!(client.query(&id).await, Err(Error::Http(_))));
    }

    #[tokio::test]
    async fn error_status_carries_code_and_body() {
        use axum::http::StatusCode;
        use axum::routing::get;

        let app = axum::Router::new().route(
            "/patents/query",
            get(|| async { (StatusCode::UNAUTHORIZED, "invalid api key") }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        let client = PatentsView::new(&format!("http://{addr}/patents/query")).unwrap();
        let id = PatentId::parse("11234567").unwrap();

        match client.query(&id).await {
            Err(Error::Api { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }
}
