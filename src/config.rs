//! Process-wide immutable relay configuration.
//!
//! Every component reads the same [`RelayConfig`] behind an [`Arc`]; nothing is mutated after
//! startup. The provider endpoints default to Atlassian's fixed URLs and exist as data so tests
//! can aim the relay at a mock provider.

// self
use crate::{_prelude::*, token::TokenSecret};

/// Fixed token endpoint of the identity provider.
pub const ATLASSIAN_TOKEN_URL: &str = "https://auth.atlassian.com/oauth/token";
/// Fixed base URL for authenticated API calls.
pub const ATLASSIAN_API_URL: &str = "https://api.atlassian.com";
/// Landing page the callback redirects browsers to, regardless of exchange outcome.
pub const LANDING_URL: &str = "https://atlassian.com/";
/// Desktop-browser user agent presented on every outbound request.
pub const USER_AGENT: &str =
	"Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_2) AppleWebKit/600.8.9 (KHTML, like Gecko)";

/// TLS certificate/key pair; presence selects encrypted serving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TlsPaths {
	/// Path to the PEM certificate file.
	pub cert: PathBuf,
	/// Path to the matching PEM private key file.
	pub key: PathBuf,
}

/// Immutable configuration shared by every component of the relay.
#[derive(Clone, Debug)]
pub struct RelayConfig {
	/// Listening port for the callback route.
	pub port: u16,
	/// OAuth 2.0 client identifier issued by the provider.
	pub client_id: String,
	/// OAuth 2.0 client secret issued by the provider.
	pub client_secret: TokenSecret,
	/// Redirect URI registered with the provider, echoed during the exchange.
	pub redirect_uri: String,
	/// Optional TLS material for the listener.
	pub tls: Option<TlsPaths>,
	/// Token endpoint POSTed during the exchange.
	pub token_endpoint: Url,
	/// Base URL for bearer-authenticated API calls.
	pub api_base: Url,
	/// Landing page URL returned in the callback's `Location` header.
	pub landing_url: String,
	/// User-agent header applied to every outbound request.
	pub user_agent: String,
}
impl RelayConfig {
	/// Creates a configuration with the fixed Atlassian endpoints and default port.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self {
			port: 443,
			client_id: client_id.into(),
			client_secret: TokenSecret::new(client_secret),
			redirect_uri: redirect_uri.into(),
			tls: None,
			token_endpoint: Url::parse(ATLASSIAN_TOKEN_URL)
				.expect("Hardcoded token endpoint URL must parse."),
			api_base: Url::parse(ATLASSIAN_API_URL).expect("Hardcoded API base URL must parse."),
			landing_url: LANDING_URL.into(),
			user_agent: USER_AGENT.into(),
		}
	}

	/// Overrides the listening port.
	pub fn with_port(mut self, port: u16) -> Self {
		self.port = port;

		self
	}

	/// Attaches TLS material, switching the listener to encrypted serving.
	pub fn with_tls(mut self, tls: TlsPaths) -> Self {
		self.tls = Some(tls);

		self
	}

	/// Overrides the token endpoint.
	pub fn with_token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = url;

		self
	}

	/// Overrides the API base URL.
	pub fn with_api_base(mut self, url: Url) -> Self {
		self.api_base = url;

		self
	}

	/// Overrides the landing page URL.
	pub fn with_landing_url(mut self, url: impl Into<String>) -> Self {
		self.landing_url = url.into();

		self
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_point_at_atlassian() {
		let config = RelayConfig::new("id", "secret", "https://relay.example.com/callback");

		assert_eq!(config.port, 443);
		assert_eq!(config.token_endpoint.as_str(), "https://auth.atlassian.com/oauth/token");
		assert_eq!(config.api_base.as_str(), "https://api.atlassian.com/");
		assert_eq!(config.landing_url, "https://atlassian.com/");
		assert!(config.tls.is_none());
	}

	#[test]
	fn builder_setters_override_defaults() {
		let tls = TlsPaths { cert: "cert.pem".into(), key: "key.pem".into() };
		let config = RelayConfig::new("id", "secret", "uri").with_port(8443).with_tls(tls.clone());

		assert_eq!(config.port, 8443);
		assert_eq!(config.tls, Some(tls));
	}

	#[test]
	fn debug_redacts_client_secret() {
		let config = RelayConfig::new("id", "super-secret", "uri");

		assert!(!format!("{config:?}").contains("super-secret"));
	}
}
