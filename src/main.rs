//! CLI entrypoint for the callback relay.

// std
use std::{path::PathBuf, sync::Arc};
// crates.io
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
// self
use oauth2_relay::{
	config::{RelayConfig, TlsPaths},
	flow::Relay,
	server,
};

#[derive(Parser)]
#[command(name = "oauth2-relay", version)]
#[command(about = "Catch the OAuth redirect, exchange the code, enumerate accessible resources.")]
struct Args {
	/// Port to serve on.
	#[arg(long, default_value_t = 443)]
	port: u16,
	/// OAuth client identifier issued by the provider.
	#[arg(long = "client-id", default_value = "")]
	client_id: String,
	/// OAuth client secret issued by the provider.
	#[arg(long = "client-secret", default_value = "")]
	client_secret: String,
	/// Redirect URI registered with the provider.
	#[arg(long = "redirect-uri", default_value = "")]
	redirect_uri: String,
	/// Path to a PEM certificate file; selects TLS serving together with --key.
	#[arg(short = 'c', long, requires = "key")]
	cert: Option<PathBuf>,
	/// Path to the matching PEM private key file.
	#[arg(short = 'k', long, requires = "cert")]
	key: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
		.init();

	let args = Args::parse();
	let mut config = RelayConfig::new(args.client_id, args.client_secret, args.redirect_uri)
		.with_port(args.port);

	if let (Some(cert), Some(key)) = (args.cert, args.key) {
		config = config.with_tls(TlsPaths { cert, key });
	}

	server::serve(Arc::new(Relay::new(config))).await?;

	Ok(())
}
