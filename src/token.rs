//! Transient wire records for the token exchange.
//!
//! Every value here lives for exactly one callback: built, sent or decoded, then dropped.

// self
use crate::{_prelude::*, config::RelayConfig};

/// Grant label sent on every exchange request.
pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";

/// Redacted token secret wrapper keeping bearer material out of logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Checks whether the wrapped secret is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// JSON body POSTed to the token endpoint when exchanging an authorization code.
#[derive(Clone, Serialize)]
pub struct TokenExchangeRequest {
	/// Fixed `authorization_code` grant label.
	pub grant_type: &'static str,
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: String,
	/// One-time authorization code delivered via the callback.
	pub code: String,
	/// Redirect URI registered with the provider.
	pub redirect_uri: String,
}
impl TokenExchangeRequest {
	/// Builds the exchange body for `code` from the configured client credentials.
	pub fn new(config: &RelayConfig, code: impl Into<String>) -> Self {
		Self {
			grant_type: GRANT_AUTHORIZATION_CODE,
			client_id: config.client_id.clone(),
			client_secret: config.client_secret.expose().to_owned(),
			code: code.into(),
			redirect_uri: config.redirect_uri.clone(),
		}
	}
}

/// Decoded token endpoint response.
///
/// Every field tolerates absence so partial provider error bodies still decode; the only
/// validity check downstream is whether `access_token` is non-empty.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AccessTokenResponse {
	/// Bearer token granted by the provider; empty when the exchange failed.
	#[serde(default)]
	pub access_token: TokenSecret,
	/// Token type label, `bearer` on success.
	#[serde(default)]
	pub token_type: String,
	/// Space-separated scopes granted to the token.
	#[serde(default)]
	pub scope: String,
	/// Token lifetime in seconds.
	#[serde(default)]
	pub expires_in: u64,
	/// OAuth error code, present when the provider rejected the exchange.
	#[serde(default)]
	pub error: Option<String>,
	/// Human-readable description accompanying `error`.
	#[serde(default)]
	pub error_description: Option<String>,
}
