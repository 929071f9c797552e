use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::CatalogEntry;

/// Why the remote catalog could not be read.
#[derive(Debug, Error)]
pub enum CatalogSourceError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with an error status.
    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// The response body was not a list of catalog rows.
    #[error("failed to decode catalog rows: {0}")]
    Decode(String),
}

/// Read-only access to a row store holding catalog tables.
#[async_trait]
pub trait CatalogSourcePort: Send + Sync {
    /// Select every row of `table`.
    ///
    /// Error semantics:
    /// - Transport: connection or request failure
    /// - Backend  : non-success response from the service
    /// - Decode   : response body is not a list of rows
    async fn query(&self, table: &str) -> Result<Vec<CatalogEntry>, CatalogSourceError>;
}

#[cfg(test)]
mockall::mock! {
    pub CatalogSource {}

    #[async_trait]
    impl CatalogSourcePort for CatalogSource {
        async fn query(&self, table: &str) -> Result<Vec<CatalogEntry>, CatalogSourceError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_port_is_usable_as_trait_object() {
        let mut mock = MockCatalogSource::new();
        mock.expect_query()
            .withf(|table| table.to_string() == "books")
            .returning(|_| Ok(vec![CatalogEntry::new(1, "Dune", "Frank Herbert", 1, 4.0)]));

        let port: std::sync::Arc<dyn CatalogSourcePort> = std::sync::Arc::new(mock);
        let rows = port.query("books").await.unwrap();

        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_error_messages() {
        let err = CatalogSourceError::Backend {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "backend returned 401: Invalid API key");
        assert_eq!(
            CatalogSourceError::Transport("connection refused".to_string()).to_string(),
            "transport error: connection refused"
        );
    }
}
