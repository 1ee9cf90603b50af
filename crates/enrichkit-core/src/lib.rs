//! # Enrichkit Core
//!
//! Rate-limited, retry-aware client for company and person enrichment APIs.
//!
//! ## Overview
//!
//! - **Strict rate limiting** shared by every call through one injected
//!   [`RateLimiter`]
//! - **Pluggable transport** behind the [`HttpClient`] trait (reqwest in
//!   production, scripted clients in tests)
//! - **Deeply nullable response models**: any nested field may be absent
//! - **Bounded polling** for lookups the upstream answers with `202 Accepted`
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`EnrichmentClient`] façade, one method per endpoint |
//! | [`config`] | Client configuration and environment loading |
//! | [`endpoint`] | Endpoint catalogue and request value |
//! | [`error`] | Error taxonomy |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`models`] | Request options and response schemas |
//! | [`normalize`] | JSON parsing and payload filtering |
//! | [`retry`] | Fixed-delay poll-until-terminal combinator |
//! | [`throttling`] | Strict FIFO rate limiter |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use enrichkit_core::{ClientConfig, EmailLookupOptions, EnrichmentClient, RateLimiter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let limiter = Arc::new(RateLimiter::default());
//!     let client = EnrichmentClient::new(ClientConfig::from_env(), limiter)?;
//!
//!     let lookup = client
//!         .email_lookup(&EmailLookupOptions::new("alex@acme.com").with_max_retries(3))
//!         .await?;
//!
//!     if let Some(person) = lookup.person() {
//!         println!("{:?}", person.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Company enrichment, name-to-domain and IP reveal are best-effort: they
//! return `Option<T>` and any failure becomes `None`. The remaining operations
//! return [`EnrichmentError`]:
//!
//! ```rust
//! use enrichkit_core::EnrichmentError;
//!
//! fn describe(error: &EnrichmentError) -> &'static str {
//!     match error {
//!         EnrichmentError::Configuration(_) => "fix the configuration",
//!         EnrichmentError::Timeout { .. } => "upstream too slow",
//!         EnrichmentError::Status { .. } => "upstream rejected the call",
//!         EnrichmentError::MalformedResponse(_) => "unexpected payload",
//!         _ => "other failure",
//!     }
//! }
//! ```
//!
//! A lookup that is still queued after polling is a normal result
//! ([`EmailLookup::Queued`]), not an error.
//!
//! ## Security
//!
//! - The API key is sent as HTTP Basic credentials and redacted from `Debug`
//!   output
//! - All upstream endpoints use HTTPS

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http_client;
pub mod models;
pub mod normalize;
pub mod retry;
pub mod throttling;

pub use client::EnrichmentClient;

pub use config::ClientConfig;

pub use endpoint::{Endpoint, EnrichmentRequest};

pub use error::EnrichmentError;

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use models::{
    filter_employment_prospector_v2, BasicCompany, CompanyEnrichmentOptions, CompanyResponse,
    CompanyReveal, CompanySearchOptions, CompanySearchResponse, EmailLookup, EmailLookupOptions,
    EmailLookupResponse, EmploymentAttributes, PeopleSearchOptionsV1, PeopleSearchOptionsV2,
    PersonAttributesV2, ProspectorResponseV1, ProspectorResponseV2,
};

pub use normalize::filter_object;

pub use retry::{poll_until_terminal, PollOutcome, PollResponse, PollState, PollTerminal, RetryPolicy};

pub use throttling::{RateLimiter, RateWindow};
