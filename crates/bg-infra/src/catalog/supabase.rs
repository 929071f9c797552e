use async_trait::async_trait;
use bg_core::catalog::CatalogEntry;
use bg_core::ports::{CatalogSourceError, CatalogSourcePort};
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, debug_span, warn, Instrument};

/// Catalog source backed by a hosted Supabase project (PostgREST API).
///
/// Issues `GET {url}/rest/v1/{table}?select=*` authenticated with the
/// project's anon key. No timeout or retry is applied.
pub struct SupabaseCatalogSource {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

/// Error payload returned by PostgREST on failure.
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    message: Option<String>,
}

impl SupabaseCatalogSource {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, anon_key)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    async fn fetch_rows(&self, url: &str) -> Result<Vec<CatalogEntry>, CatalogSourceError> {
        let response = self
            .client
            .get(url)
            .query(&[("select", "*")])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogSourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogSourceError::Backend {
                status: status.as_u16(),
                message: backend_message(&body, status),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogSourceError::Transport(e.to_string()))?;
        let raw_rows: Vec<serde_json::Value> =
            serde_json::from_slice(&body).map_err(|e| CatalogSourceError::Decode(e.to_string()))?;

        let rows: Vec<CatalogEntry> = raw_rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value(row) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(index, error = %e, "skipping catalog row that is not an object");
                    None
                }
            })
            .collect();

        debug!(rows = rows.len(), "catalog rows received");
        Ok(rows)
    }
}

#[async_trait]
impl CatalogSourcePort for SupabaseCatalogSource {
    async fn query(&self, table: &str) -> Result<Vec<CatalogEntry>, CatalogSourceError> {
        let span = debug_span!("infra.supabase.query", table);
        self.fetch_rows(&self.table_url(table)).instrument(span).await
    }
}

fn backend_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(RestErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<RestErrorBody>(body)
    {
        return message;
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn table_url_joins_without_double_slash() {
        let source = SupabaseCatalogSource::new("https://demo.supabase.co/", "key");

        assert_eq!(
            source.table_url("books"),
            "https://demo.supabase.co/rest/v1/books"
        );
    }

    #[test]
    fn backend_message_prefers_rest_error_message() {
        let body = r#"{"code":"42P01","message":"relation \"public.books\" does not exist"}"#;

        assert_eq!(
            backend_message(body, StatusCode::NOT_FOUND),
            "relation \"public.books\" does not exist"
        );
    }

    #[test]
    fn backend_message_falls_back_to_body_then_reason() {
        assert_eq!(
            backend_message("  upstream down  ", StatusCode::BAD_GATEWAY),
            "upstream down"
        );
        assert_eq!(
            backend_message("", StatusCode::SERVICE_UNAVAILABLE),
            "Service Unavailable"
        );
    }
}
