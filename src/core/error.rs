use thiserror::Error;

/// Errors surfaced by the gateway.
///
/// Two kinds from the caller's point of view: remote-service failures
/// (`Network`, `Api`) and schema mismatches (`SchemaMismatch`). `Configuration`
/// covers client-side setup problems before any request leaves the process.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure: DNS, connect, TLS, timeout.
    #[error("network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The remote service answered with a non-success status. Covers auth,
    /// rate-limit, and server-side errors; the body text is preserved as-is.
    #[error("remote service error (status {status_code}): {message}")]
    Api { message: String, status_code: u16 },

    /// The response body cannot be parsed into the requested structure.
    #[error("schema mismatch: {message}")]
    SchemaMismatch {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Missing environment variables, client build failure, or an
    /// unserializable request.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl GatewayError {
    /// True for failures originating at or on the way to the remote service.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Api { .. })
    }

    /// True when the response payload did not conform to the requested shape.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::SchemaMismatch { .. })
    }
}
