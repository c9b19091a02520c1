//! Bearer-authenticated API calls: identity verification and resource enumeration.

// crates.io
use serde_json::ser::{PrettyFormatter, Serializer as JsonSerializer};
// self
use crate::{_prelude::*, flow::Relay, token::AccessTokenResponse};

/// Identity verification path under the API base.
pub const ME_PATH: &str = "/me";
/// Accessible-resources listing path under the API base.
pub const RESOURCES_PATH: &str = "/oauth/token/accessible-resources";

/// One tenant/site the access token is authorized to operate against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibleResource {
	/// Cloud identifier of the resource.
	pub id: String,
	/// Base URL of the resource.
	pub url: String,
	/// Display name of the resource.
	pub name: String,
	/// Scopes granted to the token for this resource.
	pub scopes: Vec<String>,
}

impl Relay {
	/// GETs the provider's "who am I" endpoint and logs the raw payload verbatim.
	///
	/// The identity payload is never parsed; whatever bytes come back, including none, are
	/// diagnostic output only.
	pub async fn verify_identity(&self, token: &AccessTokenResponse) -> Result<Vec<u8>> {
		let bytes = self
			.http_client
			.get_authenticated(&self.config.api_base, ME_PATH, &token.access_token)
			.await?;

		tracing::info!(body = %String::from_utf8_lossy(&bytes), "GET {}.", ME_PATH);

		Ok(bytes)
	}

	/// GETs the accessible-resources listing and prints per-resource guidance to stdout.
	///
	/// The raw body is logged before decoding. A body that fails to decode produces no
	/// per-resource output at all. Resources are emitted in provider order, each as a
	/// tab-indented JSON descriptor followed by a ready-to-paste search command embedding the
	/// resource id and the live bearer token.
	pub async fn enumerate_resources(
		&self,
		token: &AccessTokenResponse,
	) -> Result<Vec<AccessibleResource>> {
		let bytes = self
			.http_client
			.get_authenticated(&self.config.api_base, RESOURCES_PATH, &token.access_token)
			.await?;

		tracing::info!(body = %String::from_utf8_lossy(&bytes), "GET {}.", RESOURCES_PATH);

		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
		let resources: Vec<AccessibleResource> =
			serde_path_to_error::deserialize(&mut deserializer).map_err(|source| Error::Decode {
				endpoint: RESOURCES_PATH.to_owned(),
				source,
			})?;

		for resource in &resources {
			println!("{}", pretty_descriptor(resource)?);
			print!("{}", search_command(&self.config.api_base, resource, token));
		}

		Ok(resources)
	}
}

/// Renders a resource descriptor as tab-indented JSON.
pub fn pretty_descriptor(resource: &AccessibleResource) -> Result<String> {
	let mut buf = Vec::new();
	let formatter = PrettyFormatter::with_indent(b"\t");
	let mut serializer = JsonSerializer::with_formatter(&mut buf, formatter);

	resource.serialize(&mut serializer).map_err(|source| Error::Encode { source })?;

	Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Formats the follow-up `curl` probe for one accessible resource.
///
/// The command embeds the live bearer token in plaintext; the printed output is meant to be
/// copy-pasted as-is.
pub fn search_command(
	api_base: &Url,
	resource: &AccessibleResource,
	token: &AccessTokenResponse,
) -> String {
	let base = api_base.as_str().trim_end_matches('/');

	format!(
		"Carry on...\ncurl \"{base}/ex/confluence/{id}/rest/api/search?cql=type=page&limit=1\" \\\n--header 'Accept: application/json' \\\n--header 'Authorization: Bearer {token}' \\\n",
		id = resource.id,
		token = token.access_token.expose(),
	)
}
