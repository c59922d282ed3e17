//! Production resolver backed by the SIMBAD `sim-id` endpoint.

use url::Url;

use super::ObjectResolver;
use super::parse::FieldPatterns;
use crate::config::SimbadConfig;
use crate::error::{Error, ResolveError};
use crate::types::StarRecord;

/// Resolver that queries the classic SIMBAD identifier endpoint.
///
/// One HTTP GET per identifier against `/simbad/sim-id`, with the identifier
/// form-encoded into the query string the same way the service's own search
/// form submits it. The response page is scanned for the record's fields.
#[derive(Debug)]
pub struct SimbadResolver {
    /// HTTP client, carries the configured per-request timeout
    http_client: reqwest::Client,

    /// Fully resolved sim-id endpoint, query pairs appended per request
    endpoint: Url,

    /// Compiled field extraction patterns
    patterns: FieldPatterns,
}

impl SimbadResolver {
    /// Create a resolver from service configuration.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the base URL does not parse or the HTTP
    /// client cannot be built.
    pub fn new(config: &SimbadConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(|e| Error::Config {
            message: format!("invalid base URL '{}': {e}", config.base_url),
            key: Some("simbad.base_url".to_string()),
        })?;

        let endpoint = base_url.join("/simbad/sim-id").map_err(|e| Error::Config {
            message: format!("base URL '{}' cannot carry a path: {e}", config.base_url),
            key: Some("simbad.base_url".to_string()),
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent("starsweep catalog sweeper")
            .build()
            .map_err(|e| Error::Config {
                message: format!("failed to create HTTP client: {e}"),
                key: None,
            })?;

        let patterns = FieldPatterns::compile().map_err(|e| Error::Config {
            message: format!("failed to compile extraction patterns: {e}"),
            key: None,
        })?;

        Ok(Self {
            http_client,
            endpoint,
            patterns,
        })
    }

    /// Build the query URL for one identifier.
    ///
    /// The query serializer form-encodes the identifier, turning its space
    /// into `+` exactly as the service's search form does.
    fn object_url(&self, ident: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("Ident", ident)
            .append_pair("NbIdent", "1")
            .append_pair("Radius", "2")
            .append_pair("Radius.unit", "arcmin")
            .append_pair("submit", "submit id");
        url
    }
}

#[async_trait::async_trait]
impl ObjectResolver for SimbadResolver {
    async fn resolve(&self, ident: &str) -> Result<StarRecord, ResolveError> {
        let url = self.object_url(ident);
        tracing::debug!(ident = %ident, "querying catalog service");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ResolveError::Network {
                ident: ident.to_string(),
                source: e,
            })?;

        // Check HTTP status before trying to parse the response body
        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Status {
                ident: ident.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ResolveError::Network {
            ident: ident.to_string(),
            source: e,
        })?;

        self.patterns
            .extract_record(ident, &body)
            .ok_or_else(|| ResolveError::NotFound {
                ident: ident.to_string(),
            })
    }
}
