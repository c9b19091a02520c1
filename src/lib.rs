//! Atlassian-flavored OAuth 2.0 authorization-code relay: catch the provider redirect, exchange
//! the code for a bearer token, and enumerate every resource the token can reach.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod config;
pub mod error;
pub mod exchange;
pub mod flow;
pub mod http;
pub mod server;
pub mod token;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		path::PathBuf,
		sync::Arc,
	};

	pub use reqwest::Client as ReqwestClient;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
use {anyhow as _, clap as _, tracing_subscriber as _};
#[cfg(test)] use {httpmock as _, tower as _};
