//! HTTP callback listener: one route, an unconditional redirect, and the synchronous exchange
//! sequence behind it.

// std
use std::net::SocketAddr;
// crates.io
use axum::{
	Router,
	extract::{RawQuery, State},
	http::{HeaderMap, StatusCode, Uri, header},
	response::{IntoResponse, Response},
	routing::get,
};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
// self
use crate::{_prelude::*, flow::Relay};

/// Query parameters delivered by the provider redirect; absent values decode as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackParams {
	/// Opaque `state` value round-tripped by the provider. Logged, never validated.
	pub state: String,
	/// One-time authorization code to exchange.
	pub code: String,
}

/// Builds the single-route callback router backed by `relay`.
pub fn build_router(relay: Arc<Relay>) -> Router {
	Router::new()
		.route("/callback", get(callback))
		.with_state(relay)
		.layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves until the process is terminated.
///
/// TLS material in the configuration selects encrypted serving; otherwise the listener speaks
/// plaintext. Bind and TLS-load failures are returned to the caller, which treats them as fatal.
pub async fn serve(relay: Arc<Relay>) -> Result<()> {
	let config = relay.config.clone();
	let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
	let router = build_router(relay);

	if let Some(tls) = &config.tls {
		tracing::info!(address = %addr, "Starting HTTPS listener.");

		let rustls = RustlsConfig::from_pem_file(&tls.cert, &tls.key)
			.await
			.map_err(|source| Error::Tls { source })?;

		axum_server::bind_rustls(addr, rustls)
			.serve(router.into_make_service())
			.await
			.map_err(|source| Error::Listen { source })?;
	} else {
		tracing::info!(address = %addr, "Starting HTTP listener.");

		let listener =
			TcpListener::bind(addr).await.map_err(|source| Error::Listen { source })?;

		axum::serve(listener, router).await.map_err(|source| Error::Listen { source })?;
	}

	Ok(())
}

/// Handles the provider redirect.
///
/// An unparseable query answers 400 and aborts this request only. Otherwise the requester's
/// declared agent, the request URI, and the `state` value are logged, the exchange sequence runs
/// to completion inside this handler, and the browser is sent to the landing page with a 302 no
/// matter how the sequence fared.
async fn callback(
	State(relay): State<Arc<Relay>>,
	uri: Uri,
	headers: HeaderMap,
	RawQuery(query): RawQuery,
) -> Response {
	let Some(params) = parse_query(query.as_deref().unwrap_or_default()) else {
		tracing::warn!(uri = %uri, "Callback query string could not be parsed.");

		return StatusCode::BAD_REQUEST.into_response();
	};
	let agent = headers
		.get(header::USER_AGENT)
		.and_then(|value| value.to_str().ok())
		.unwrap_or_default();

	tracing::info!(agent = %agent, uri = %uri, state = %params.state, "Provider callback received.");

	if let Err(error) = relay.run_exchange_sequence(&params.code).await {
		tracing::warn!(error = %error, "Exchange sequence halted.");
	}

	(StatusCode::FOUND, [(header::LOCATION, relay.config.landing_url.clone())]).into_response()
}

/// Parses the callback query string, rejecting malformed percent escapes and non-UTF-8 data.
///
/// Unknown keys are ignored; missing `state`/`code` decode as empty strings.
fn parse_query(query: &str) -> Option<CallbackParams> {
	let mut params = CallbackParams::default();

	for pair in query.split('&').filter(|pair| !pair.is_empty()) {
		let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
		let key = decode_component(key)?;
		let value = decode_component(value)?;

		match key.as_str() {
			"state" => params.state = value,
			"code" => params.code = value,
			_ => (),
		}
	}

	Some(params)
}

/// Decodes one `application/x-www-form-urlencoded` component.
fn decode_component(raw: &str) -> Option<String> {
	let bytes = raw.as_bytes();
	let mut decoded = Vec::with_capacity(bytes.len());
	let mut index = 0;

	while index < bytes.len() {
		match bytes[index] {
			b'%' => {
				let high = (*bytes.get(index + 1)? as char).to_digit(16)?;
				let low = (*bytes.get(index + 2)? as char).to_digit(16)?;

				decoded.push((high * 16 + low) as u8);

				index += 3;
			},
			b'+' => {
				decoded.push(b' ');

				index += 1;
			},
			byte => {
				decoded.push(byte);

				index += 1;
			},
		}
	}

	String::from_utf8(decoded).ok()
}
