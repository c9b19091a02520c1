//! Relay assembly and the per-callback exchange sequence.

// self
use crate::{_prelude::*, config::RelayConfig, http::RelayHttpClient};

/// Coordinates one callback's exchange sequence against the configured provider.
///
/// The relay owns the HTTP client wrapper and the immutable configuration so the individual
/// steps (exchange, verify, enumerate) can focus on their own wire formats. Nothing is shared
/// between overlapping callbacks beyond these two read-only values.
#[derive(Clone, Debug)]
pub struct Relay {
	/// HTTP client wrapper used for every outbound provider request.
	pub http_client: RelayHttpClient,
	/// Immutable configuration shared across callbacks.
	pub config: Arc<RelayConfig>,
}
impl Relay {
	/// Creates a relay with a stock reqwest-backed transport.
	pub fn new(config: RelayConfig) -> Self {
		let http_client = RelayHttpClient::new(config.user_agent.clone());

		Self::with_http_client(config, http_client)
	}

	/// Creates a relay that reuses a caller-provided HTTP client wrapper.
	pub fn with_http_client(config: RelayConfig, http_client: RelayHttpClient) -> Self {
		Self { http_client, config: Arc::new(config) }
	}

	/// Runs the full sequence for one delivered code: exchange, then verify, then enumerate.
	///
	/// The exchange short-circuits the sequence; no downstream endpoint is contacted without a
	/// non-empty access token. Once a token is in hand, the verifier and enumerator both run
	/// unconditionally in that order, each logging its own failure without stopping the other.
	pub async fn run_exchange_sequence(&self, code: &str) -> Result<()> {
		let token = self.exchange_code(code).await?;

		if let Err(error) = self.verify_identity(&token).await {
			tracing::warn!(error = %error, "Identity verification call failed.");
		}
		if let Err(error) = self.enumerate_resources(&token).await {
			tracing::warn!(error = %error, "Resource enumeration call failed.");
		}

		Ok(())
	}
}
