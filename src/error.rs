//! Relay-wide error types shared by the exchange, fetch, and serving layers.

// self
use crate::_prelude::*;

/// Relay-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical relay error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Outbound JSON payload could not be serialized.
	#[error("JSON payload could not be serialized.")]
	Encode {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Request URL could not be assembled from the configured base and path.
	#[error("Request URL could not be constructed.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Underlying HTTP client reported a transport failure.
	#[error("Network error occurred while calling {endpoint}.")]
	Transport {
		/// Endpoint path the request was headed for.
		endpoint: String,
		/// Transport-specific network error.
		#[source]
		source: reqwest::Error,
	},
	/// Response body could not be read from the wire.
	#[error("Response body could not be read from {endpoint}.")]
	BodyRead {
		/// Endpoint path the response came from.
		endpoint: String,
		/// Transport-specific read failure.
		#[source]
		source: reqwest::Error,
	},
	/// Provider responded with a body that is not the expected JSON shape.
	#[error("{endpoint} returned malformed JSON.")]
	Decode {
		/// Endpoint path the response came from.
		endpoint: String,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Token endpoint response decoded cleanly but carried an empty access token.
	#[error("Token endpoint response is missing an access token.")]
	MissingAccessToken,
	/// TLS certificate or key material could not be loaded.
	#[error("TLS certificate or key material could not be loaded.")]
	Tls {
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Listening socket failed to bind or the server loop terminated.
	#[error("Listener failed to bind or serve.")]
	Listen {
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
}
