//! # Figihover Core
//!
//! Security identifier recognition and OpenFIGI lookups for editor hovers.
//!
//! ## Overview
//!
//! - **Identifier validation**: ISIN, SEDOL (with check digit) and CUSIP shapes
//! - **Mapping wire types** for the OpenFIGI `/mapping` endpoint
//! - **Lookup client** with structured, never-panicking errors
//! - **Hover provider** turning a document position into display content
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Endpoint, API key and timeout resolution |
//! | [`error`] | Validation and configuration errors |
//! | [`hover`] | Word lookup, rendering and the hover provider |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`identifier`] | Shape classification and SEDOL checksum |
//! | [`lookup`] | OpenFIGI client and lookup errors |
//! | [`mapping`] | Mapping request/response types |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use figihover_core::{HoverProvider, LookupConfig, OpenFigiClient, Position};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = HoverProvider::new(OpenFigiClient::new(LookupConfig::default()));
//!     let content = provider
//!         .provide_hover("buy US0378331005", Position::new(0, 6))
//!         .await;
//!     println!("{}", content.text());
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Host (CLI)     │
//! └────────┬────────┘
//!          │ document + position
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Hover Provider  │────▶│ Identifier       │
//! └────────┬────────┘     │ Validator        │
//!          │              └──────────────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ OpenFIGI Client │────▶│ HTTP Client      │
//! └─────────────────┘     │ (reqwest/fixture)│
//!                         └──────────────────┘
//! ```
//!
//! ## Security
//!
//! The API key is sent only as the `X-OPENFIGI-APIKEY` header and is never
//! logged or printed by `Debug`.

pub mod config;
pub mod error;
pub mod hover;
pub mod http_client;
pub mod identifier;
pub mod lookup;
pub mod mapping;

pub use config::{HostSettings, LookupConfig, LookupConfigBuilder};

pub use error::{ConfigError, ValidationError};

pub use hover::{HoverContent, HoverProvider, Position, WordRange};

pub use http_client::{
    FixtureHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse,
    ReqwestHttpClient,
};

pub use identifier::{classify, ClassifiedIdentifier, IdentifierKind, Rejection};

pub use lookup::{LookupError, LookupErrorKind, OpenFigiClient};

pub use mapping::{MappingJob, SecurityProfile};
