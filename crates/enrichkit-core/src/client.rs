//! Enrichment client façade.
//!
//! Every operation follows the same pipeline:
//!
//! ```text
//! options ──▶ query params ──▶ RateLimiter::acquire ──▶ HttpClient::execute
//!                                      ▲                        │
//!                                      └──── poll (202) ◀───────┤
//!                                                               ▼
//!                                                     normalize::parse ──▶ T
//! ```
//!
//! Best-effort lookups (see [`Endpoint::is_best_effort`]) return `Option<T>`
//! and resolve to `None` on any failure. Everything else returns
//! `Result<T, EnrichmentError>`.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, EnrichmentRequest};
use crate::error::{EnrichmentError, Result};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::models::{
    BasicCompany, CompanyEnrichmentOptions, CompanyResponse, CompanyReveal, CompanySearchOptions,
    CompanySearchResponse, EmailLookup, EmailLookupOptions, PeopleSearchOptionsV1,
    PeopleSearchOptionsV2, ProspectorResponseV1, ProspectorResponseV2,
};
use crate::normalize::{parse, parse_optional, to_query_params};
use crate::retry::{poll_until_terminal, PollOutcome, RetryPolicy};
use crate::throttling::RateLimiter;

const PAGE_SIZE_PARAM: &str = "page_size";

type QueryPairs = Vec<(String, String)>;

/// Client for the enrichment endpoints.
///
/// The rate limiter is injected so several clients can share one budget.
pub struct EnrichmentClient {
    http_client: Arc<dyn HttpClient>,
    rate_limiter: Arc<RateLimiter>,
    auth: HttpAuth,
    timeout_ms: u64,
    max_page_size: u32,
    poll_delay: Duration,
}

impl EnrichmentClient {
    /// Builds a client on the reqwest transport.
    ///
    /// Fails with [`EnrichmentError::Configuration`] when no API key is set or
    /// the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig, rate_limiter: Arc<RateLimiter>) -> Result<Self> {
        config.require_api_key()?;
        let http_client = ReqwestHttpClient::new()
            .map_err(|error| EnrichmentError::Configuration(error.to_string()))?;
        Self::with_http_client(config, rate_limiter, Arc::new(http_client))
    }

    /// Builds a client from [`ClientConfig::from_env`].
    pub fn from_env(rate_limiter: Arc<RateLimiter>) -> Result<Self> {
        Self::new(ClientConfig::from_env(), rate_limiter)
    }

    pub fn with_http_client(
        config: ClientConfig,
        rate_limiter: Arc<RateLimiter>,
        http_client: Arc<dyn HttpClient>,
    ) -> Result<Self> {
        let auth = HttpAuth::basic(config.require_api_key()?);

        Ok(Self {
            http_client,
            rate_limiter,
            auth,
            timeout_ms: config.timeout_ms(),
            max_page_size: config.max_page_size.max(1),
            poll_delay: config.poll_delay,
        })
    }

    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.rate_limiter
    }

    /// Closes the injected rate limiter, cancelling queued waits. Calls
    /// already on the wire are not interrupted.
    pub fn close(&self) {
        self.rate_limiter.close();
    }

    pub async fn company_enrichment(
        &self,
        options: &CompanyEnrichmentOptions,
    ) -> Option<CompanyResponse> {
        let params = to_query_params(options);
        self.dispatch(Endpoint::CompanyEnrichment, params)
            .await
            .ok()
            .flatten()
    }

    /// Company discovery. A caller-set page size is capped at the maximum; an
    /// unset one is left to the upstream default.
    pub async fn company_search(
        &self,
        options: &CompanySearchOptions,
    ) -> Result<CompanySearchResponse> {
        let params = self.query_params(Endpoint::CompanySearch, options, options.page_size);
        self.fetch(Endpoint::CompanySearch, params).await
    }

    pub async fn company_autocomplete(&self, name: &str) -> Result<Vec<BasicCompany>> {
        let params = vec![(String::from("query"), name.to_owned())];
        self.fetch(Endpoint::CompanyAutocomplete, Ok(params)).await
    }

    pub async fn prospector_people_v2(
        &self,
        options: &PeopleSearchOptionsV2,
    ) -> Result<ProspectorResponseV2> {
        let params = self.query_params(Endpoint::PeopleSearchV2, options, options.page_size);
        self.fetch(Endpoint::PeopleSearchV2, params).await
    }

    /// People search v1. `load_email` asks the upstream to include email
    /// addresses in the results.
    pub async fn prospector_people_v1(
        &self,
        options: &PeopleSearchOptionsV1,
        load_email: bool,
    ) -> Result<ProspectorResponseV1> {
        let params = self
            .query_params(Endpoint::PeopleSearchV1, options, options.page_size)
            .map(|mut params| {
                params.push((String::from("email"), load_email.to_string()));
                params
            });
        self.fetch(Endpoint::PeopleSearchV1, params).await
    }

    /// Looks up a person by email.
    ///
    /// The upstream answers 202 while it is still building the record. With
    /// `max_retries` set, the identical request is re-sent after a fixed delay
    /// until the answer is final or the budget is spent. A lookup that is still
    /// queued at the end is returned as [`EmailLookup::Queued`], not as an
    /// error.
    pub async fn email_lookup(&self, options: &EmailLookupOptions) -> Result<EmailLookup> {
        if options.email.trim().is_empty() {
            return Err(EnrichmentError::InvalidRequest(String::from(
                "email lookup requires a non-empty email",
            )));
        }

        let mut request = EnrichmentRequest::new(
            Endpoint::EmailLookup,
            vec![(String::from("email"), options.email.clone())],
        );
        if let Some(max_retries) = options.max_retries.filter(|retries| *retries > 0) {
            request =
                request.with_retry_policy(RetryPolicy::fixed(self.poll_delay, max_retries));
        }

        let outcome = self.execute(&request).await?;
        if outcome.is_ready() {
            return parse(&outcome.value.body).map(EmailLookup::Ready);
        }

        debug!(
            attempts = outcome.state.attempts_made,
            "email lookup still queued after polling"
        );
        Ok(EmailLookup::Queued {
            attempts: outcome.state.attempts_made,
            body: parse_optional(&outcome.value.body)?,
        })
    }

    pub async fn name_to_domain(&self, name: &str) -> Option<BasicCompany> {
        let params = vec![(String::from("name"), name.to_owned())];
        self.dispatch(Endpoint::NameToDomain, Ok(params))
            .await
            .ok()
            .flatten()
    }

    pub async fn reveal_company_from_ip(&self, ip: &str) -> Option<CompanyReveal> {
        let params = vec![(String::from("ip"), ip.to_owned())];
        self.dispatch(Endpoint::RevealFromIp, Ok(params))
            .await
            .ok()
            .flatten()
    }

    /// Sends `request`, polling while the upstream answers 202 if the request
    /// carries a retry policy.
    pub async fn execute(&self, request: &EnrichmentRequest) -> Result<PollOutcome<HttpResponse>> {
        let policy = request.retry_policy().copied().unwrap_or_default();
        poll_until_terminal(&policy, || self.send(request)).await
    }

    async fn send(&self, request: &EnrichmentRequest) -> Result<HttpResponse> {
        self.rate_limiter.acquire().await?;

        let endpoint = request.endpoint();
        let http_request = HttpRequest::get(endpoint.url())
            .with_query(request.params().to_vec())
            .with_auth(&self.auth)
            .with_timeout_ms(self.timeout_ms);
        debug!(%endpoint, url = %http_request.full_url(), "sending enrichment request");

        let response = self
            .http_client
            .execute(http_request)
            .await
            .map_err(|error| EnrichmentError::from_http(error, self.timeout_ms))?;

        debug!(%endpoint, status = response.status, "enrichment response received");
        if !response.is_success() {
            return Err(EnrichmentError::Status {
                status: response.status,
                body: response.body_text(),
            });
        }

        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: &EnrichmentRequest) -> Result<T> {
        let outcome = self.execute(request).await?;
        parse(&outcome.value.body)
    }

    /// Runs one GET against `endpoint`. For best-effort endpoints every
    /// failure, parameter errors included, becomes `Ok(None)`; any other
    /// endpoint yields `Ok(Some(_))` or the error.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: Result<QueryPairs>,
    ) -> Result<Option<T>> {
        let result = match params {
            Ok(params) => self.fetch_json(&EnrichmentRequest::new(endpoint, params)).await,
            Err(error) => Err(error),
        };

        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) if endpoint.is_best_effort() => {
                debug!(%endpoint, %error, "best-effort lookup returned no data");
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: Result<QueryPairs>,
    ) -> Result<T> {
        self.dispatch(endpoint, params).await?.ok_or_else(|| {
            EnrichmentError::MalformedResponse(format!("{endpoint} returned no data"))
        })
    }

    fn query_params<P: Serialize>(
        &self,
        endpoint: Endpoint,
        options: &P,
        page_size: Option<u32>,
    ) -> Result<QueryPairs> {
        let mut params = to_query_params(options)?;
        let requested = page_size.filter(|size| *size > 0);
        if endpoint.is_paginated() || requested.is_some() {
            params.retain(|(key, _)| key != PAGE_SIZE_PARAM);
            params.push((
                String::from(PAGE_SIZE_PARAM),
                self.page_size(requested).to_string(),
            ));
        }
        Ok(params)
    }

    /// `min(max_page_size, requested)`; unset or zero asks for a full page.
    fn page_size(&self, requested: Option<u32>) -> u32 {
        requested
            .filter(|size| *size > 0)
            .map_or(self.max_page_size, |size| size.min(self.max_page_size))
    }
}
