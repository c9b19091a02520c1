//! Outbound transport shared by the token exchange and the authenticated API calls.

// crates.io
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
// self
use crate::{_prelude::*, token::TokenSecret};

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The wrapper owns the user-agent string presented upstream and returns raw body bytes to its
/// callers. HTTP status codes are not inspected at this layer: a non-2xx body comes back like any
/// other payload, and the caller logs it verbatim.
#[derive(Clone, Debug)]
pub struct RelayHttpClient {
	client: ReqwestClient,
	user_agent: String,
}
impl RelayHttpClient {
	/// Creates a stock reqwest-backed client presenting `user_agent`.
	pub fn new(user_agent: impl Into<String>) -> Self {
		Self::with_client(ReqwestClient::new(), user_agent)
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient, user_agent: impl Into<String>) -> Self {
		Self { client, user_agent: user_agent.into() }
	}

	/// POSTs a JSON `body` to `url` and returns the raw response body bytes.
	pub async fn post_json(&self, url: &Url, body: Vec<u8>) -> Result<Vec<u8>> {
		let endpoint = url.path().to_owned();
		let response = self
			.client
			.post(url.clone())
			.header(CONTENT_TYPE, "application/json")
			.header(USER_AGENT, &self.user_agent)
			.body(body)
			.send()
			.await
			.map_err(|source| Error::Transport { endpoint: endpoint.clone(), source })?;

		response.bytes().await.map(|bytes| bytes.to_vec()).map_err(|source| Error::BodyRead {
			endpoint,
			source,
		})
	}

	/// Issues a bearer-authenticated GET for `path` under `base` and returns the raw body bytes.
	///
	/// Sends `Accept: application/json`, `Authorization: Bearer <token>`, and the configured user
	/// agent. Carries no hidden state: identical inputs against a deterministic endpoint yield
	/// byte-identical bodies.
	pub async fn get_authenticated(
		&self,
		base: &Url,
		path: &str,
		token: &TokenSecret,
	) -> Result<Vec<u8>> {
		let uri = base.join(path).map_err(|source| Error::InvalidEndpoint { source })?;
		let response = self
			.client
			.get(uri)
			.header(ACCEPT, "application/json")
			.header(AUTHORIZATION, format!("Bearer {}", token.expose()))
			.header(USER_AGENT, &self.user_agent)
			.send()
			.await
			.map_err(|source| Error::Transport { endpoint: path.to_owned(), source })?;

		response.bytes().await.map(|bytes| bytes.to_vec()).map_err(|source| Error::BodyRead {
			endpoint: path.to_owned(),
			source,
		})
	}
}
