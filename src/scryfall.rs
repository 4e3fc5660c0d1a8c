use crate::card::{CanonicalCard, CardIdentifier};
use crate::decklist::to_card_identifiers;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

/// Scryfall rejects collection requests with more identifiers than this.
pub const MAX_IDENTIFIERS_PER_REQUEST: usize = 75;

#[derive(Serialize)]
struct CollectionRequest<'a> {
    identifiers: &'a [CardIdentifier],
}

#[derive(Deserialize, Debug, Default)]
pub struct CollectionResponse {
    #[serde(default)]
    pub data: Vec<CanonicalCard>,
    /// Passed through untouched; Scryfall reports the unmatched identifier objects.
    #[serde(default)]
    pub not_found: Vec<serde_json::Value>,
}

pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        )),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

#[derive(Clone, Debug)]
pub struct ScryfallClient {
    client: Client,
    url: Url,
}

impl ScryfallClient {
    pub fn new(url: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().default_headers(default_headers()).build()?;
        Ok(ScryfallClient { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Resolve card names in bulk. Chunks are sent one after another and
    /// merged in order; the first failing chunk fails the whole lookup.
    pub async fn fetch_collection(
        &self,
        names: &[String],
    ) -> Result<CollectionResponse, reqwest::Error> {
        let identifiers = to_card_identifiers(names);
        let mut merged = CollectionResponse::default();

        tracing::debug!(
            "Looking up {} identifiers in {} request(s)",
            identifiers.len(),
            identifiers.len().div_ceil(MAX_IDENTIFIERS_PER_REQUEST)
        );

        for chunk in identifiers.chunks(MAX_IDENTIFIERS_PER_REQUEST) {
            let page = self
                .fetch_chunk(chunk)
                .await
                .inspect_err(|e| tracing::error!("Scryfall collection lookup failed: {}", e))?;
            merged.data.extend(page.data);
            merged.not_found.extend(page.not_found);
        }

        Ok(merged)
    }

    async fn fetch_chunk(
        &self,
        identifiers: &[CardIdentifier],
    ) -> Result<CollectionResponse, reqwest::Error> {
        let response = self
            .client
            .post(self.url.clone())
            .json(&CollectionRequest { identifiers })
            .send()
            .await?
            .error_for_status()?;
        response.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap as RequestHeaders, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    async fn spawn(app: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Url::parse(&format!("http://{}/cards/collection", addr)).unwrap()
    }

    /// Resolves every name except those starting with "Missing"; records batch sizes.
    fn fake_scryfall(batches: Arc<Mutex<Vec<usize>>>) -> Router {
        Router::new().route(
            "/cards/collection",
            post(move |Json(body): Json<Value>| {
                let batches = batches.clone();
                async move {
                    let identifiers = body["identifiers"]
                        .as_array()
                        .cloned()
                        .unwrap_or_default();
                    batches.lock().unwrap().push(identifiers.len());
                    let (missing, found): (Vec<Value>, Vec<Value>) =
                        identifiers.into_iter().partition(|id| {
                            id["name"].as_str().unwrap_or("").starts_with("Missing")
                        });
                    let data: Vec<Value> = found
                        .iter()
                        .map(|id| json!({ "name": id["name"], "type_line": "Artifact" }))
                        .collect();
                    Json(json!({ "object": "list", "not_found": missing, "data": data }))
                }
            }),
        )
    }

    #[tokio::test]
    async fn test_resolves_and_reports_not_found() {
        let batches = Arc::new(Mutex::new(Vec::new()));
        let url = spawn(fake_scryfall(batches.clone())).await;
        let client = ScryfallClient::new(url).unwrap();

        let names = vec![
            "Sol Ring".to_string(),
            "Missing Card".to_string(),
            "Llanowar Elves".to_string(),
        ];
        let result = client.fetch_collection(&names).await.unwrap();

        let resolved: Vec<_> = result.data.iter().map(|c| c.name.clone().unwrap()).collect();
        assert_eq!(resolved, vec!["Sol Ring", "Llanowar Elves"]);
        assert_eq!(result.not_found, vec![json!({ "name": "Missing Card" })]);
        assert_eq!(*batches.lock().unwrap(), vec![3]);
    }

    #[tokio::test]
    async fn test_large_decklists_are_chunked() {
        let batches = Arc::new(Mutex::new(Vec::new()));
        let url = spawn(fake_scryfall(batches.clone())).await;
        let client = ScryfallClient::new(url).unwrap();

        let names: Vec<String> = (0..80).map(|i| format!("Card {}", i)).collect();
        let result = client.fetch_collection(&names).await.unwrap();

        assert_eq!(*batches.lock().unwrap(), vec![75, 5]);
        assert_eq!(result.data.len(), 80);
        assert_eq!(result.data[0].name.as_deref(), Some("Card 0"));
        assert_eq!(result.data[79].name.as_deref(), Some("Card 79"));
    }

    #[tokio::test]
    async fn test_empty_lookup_sends_nothing() {
        let batches = Arc::new(Mutex::new(Vec::new()));
        let url = spawn(fake_scryfall(batches.clone())).await;
        let client = ScryfallClient::new(url).unwrap();

        let result = client.fetch_collection(&[]).await.unwrap();
        assert!(result.data.is_empty());
        assert!(result.not_found.is_empty());
        assert!(batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sends_identifying_headers() {
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = seen.clone();
        let app = Router::new().route(
            "/cards/collection",
            post(move |headers: RequestHeaders| {
                let seen = seen_clone.clone();
                async move {
                    let agent = headers
                        .get("user-agent")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    *seen.lock().unwrap() = agent;
                    Json(json!({ "data": [], "not_found": [] }))
                }
            }),
        );
        let client = ScryfallClient::new(spawn(app).await).unwrap();
        client.fetch_collection(&["Sol Ring".to_string()]).await.unwrap();

        let agent = seen.lock().unwrap().clone().unwrap();
        assert!(agent.starts_with("thematic_proxy/"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let app = Router::new().route(
            "/cards/collection",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let client = ScryfallClient::new(spawn(app).await).unwrap();
        let err = client
            .fetch_collection(&["Sol Ring".to_string()])
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{}/cards/collection", addr)).unwrap();
        let client = ScryfallClient::new(url).unwrap();
        assert!(client
            .fetch_collection(&["Sol Ring".to_string()])
            .await
            .is_err());
    }
}
