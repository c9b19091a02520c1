//! Authorization-code exchange against the provider's token endpoint.

// self
use crate::{
	_prelude::*,
	flow::Relay,
	token::{AccessTokenResponse, TokenExchangeRequest},
};

impl Relay {
	/// Exchanges a freshly delivered authorization code for an access token.
	///
	/// POSTs the JSON exchange body to the configured token endpoint and logs the raw response
	/// verbatim before decoding. The provider's `error`/`error_description` fields are decoded
	/// but not branched on; the sole validity check is a non-empty `access_token`.
	pub async fn exchange_code(&self, code: &str) -> Result<AccessTokenResponse> {
		tracing::info!("Exchanging authorization code for an access token.");

		let request = TokenExchangeRequest::new(&self.config, code);
		let body = serde_json::to_vec(&request).map_err(|source| Error::Encode { source })?;
		let bytes = self.http_client.post_json(&self.config.token_endpoint, body).await?;

		tracing::info!(body = %String::from_utf8_lossy(&bytes), "Token endpoint response.");

		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
		let response: AccessTokenResponse = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| Error::Decode {
				endpoint: self.config.token_endpoint.path().to_owned(),
				source,
			})?;

		if response.access_token.is_empty() {
			return Err(Error::MissingAccessToken);
		}

		Ok(response)
	}
}
