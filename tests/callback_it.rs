// std
use std::sync::Arc;
// crates.io
use axum::{
	body::Body,
	http::{Request, StatusCode, header::LOCATION},
};
use httpmock::prelude::*;
use tower::ServiceExt;
// self
use oauth2_relay::server::build_router;

#[path = "common.rs"]
mod common;

const ERROR_BODY: &str = r#"{"access_token":"","error":"invalid_grant","error_description":"already used"}"#;
const SUCCESS_BODY: &str =
	r#"{"access_token":"access-success","token_type":"bearer","scope":"read:confluence","expires_in":3600}"#;
const RESOURCES_BODY: &str =
	r#"[{"id":"abc123","url":"https://x.atlassian.net","name":"Site X","scopes":["read:confluence"]}]"#;

#[tokio::test]
async fn callback_redirects_to_landing_page_for_valid_queries() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200).header("content-type", "application/json").body(ERROR_BODY);
		})
		.await;
	let app = build_router(Arc::new(common::mock_relay(&server)));
	let response = app
		.oneshot(
			Request::builder()
				.uri("/callback?code=abc&state=xyz")
				.body(Body::empty())
				.expect("Request should build."),
		)
		.await
		.expect("Router should answer.");

	assert_eq!(response.status(), StatusCode::FOUND);
	assert_eq!(
		response
			.headers()
			.get(LOCATION)
			.expect("Location header should be set.")
			.to_str()
			.expect("Location header should be visible ASCII."),
		"https://atlassian.com/",
	);

	token_mock.assert_async().await;
}

#[tokio::test]
async fn callback_redirects_even_without_a_code() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200).header("content-type", "application/json").body(ERROR_BODY);
		})
		.await;
	let app = build_router(Arc::new(common::mock_relay(&server)));
	let response = app
		.oneshot(
			Request::builder().uri("/callback").body(Body::empty()).expect("Request should build."),
		)
		.await
		.expect("Router should answer.");

	// The exchange still runs with an empty code and fails at the provider; the browser-facing
	// response is unchanged.
	assert_eq!(response.status(), StatusCode::FOUND);
	assert!(response.headers().get(LOCATION).is_some());

	token_mock.assert_async().await;
}

#[tokio::test]
async fn callback_rejects_malformed_queries_without_redirecting() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200).header("content-type", "application/json").body(ERROR_BODY);
		})
		.await;
	let app = build_router(Arc::new(common::mock_relay(&server)));
	let response = app
		.oneshot(
			Request::builder()
				.uri("/callback?code=%zz")
				.body(Body::empty())
				.expect("Request should build."),
		)
		.await
		.expect("Router should answer.");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert!(response.headers().get(LOCATION).is_none());
	assert_eq!(token_mock.hits_async().await, 0);
}

#[tokio::test]
async fn empty_access_token_halts_before_downstream_calls() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200).header("content-type", "application/json").body(ERROR_BODY);
		})
		.await;
	let me_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/me");
			then.status(200).body("{}");
		})
		.await;
	let resources_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/token/accessible-resources");
			then.status(200).body("[]");
		})
		.await;
	let app = build_router(Arc::new(common::mock_relay(&server)));
	let response = app
		.oneshot(
			Request::builder()
				.uri("/callback?code=stale&state=s")
				.body(Body::empty())
				.expect("Request should build."),
		)
		.await
		.expect("Router should answer.");

	assert_eq!(response.status(), StatusCode::FOUND);

	token_mock.assert_async().await;

	assert_eq!(me_mock.hits_async().await, 0);
	assert_eq!(resources_mock.hits_async().await, 0);
}

#[tokio::test]
async fn successful_exchange_calls_each_downstream_endpoint_once_with_the_bearer_token() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token").header("content-type", "application/json");
			then.status(200).header("content-type", "application/json").body(SUCCESS_BODY);
		})
		.await;
	let me_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/me")
				.header("authorization", "Bearer access-success")
				.header("accept", "application/json");
			then.status(200).body(r#"{"account_id":"42"}"#);
		})
		.await;
	let resources_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/oauth/token/accessible-resources")
				.header("authorization", "Bearer access-success")
				.header("accept", "application/json");
			then.status(200).header("content-type", "application/json").body(RESOURCES_BODY);
		})
		.await;
	let app = build_router(Arc::new(common::mock_relay(&server)));
	let response = app
		.oneshot(
			Request::builder()
				.uri("/callback?code=valid-code&state=s")
				.body(Body::empty())
				.expect("Request should build."),
		)
		.await
		.expect("Router should answer.");

	assert_eq!(response.status(), StatusCode::FOUND);

	token_mock.assert_async().await;
	me_mock.assert_async().await;
	resources_mock.assert_async().await;
}
