// crates.io
use httpmock::MockServer;
use url::Url;
// self
use oauth2_relay::{config::RelayConfig, flow::Relay};

pub const CLIENT_ID: &str = "client-it";
pub const CLIENT_SECRET: &str = "secret-it";
pub const REDIRECT_URI: &str = "https://relay.example.com/callback";

/// Builds a relay whose token endpoint and API base both point at the mock provider.
pub fn mock_relay(server: &MockServer) -> Relay {
	let token_endpoint =
		Url::parse(&server.url("/token")).expect("Mock token endpoint should parse.");
	let api_base = Url::parse(&server.base_url()).expect("Mock API base should parse.");
	let config = RelayConfig::new(CLIENT_ID, CLIENT_SECRET, REDIRECT_URI)
		.with_token_endpoint(token_endpoint)
		.with_api_base(api_base);

	Relay::new(config)
}
