//! Upstream endpoint catalogue and the immutable request value sent to it.

use std::fmt::{Display, Formatter};

use crate::retry::RetryPolicy;

/// Remote endpoint family served by [`crate::EnrichmentClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CompanyEnrichment,
    CompanySearch,
    CompanyAutocomplete,
    PeopleSearchV1,
    PeopleSearchV2,
    EmailLookup,
    NameToDomain,
    RevealFromIp,
}

impl Endpoint {
    pub const ALL: [Self; 8] = [
        Self::CompanyEnrichment,
        Self::CompanySearch,
        Self::CompanyAutocomplete,
        Self::PeopleSearchV1,
        Self::PeopleSearchV2,
        Self::EmailLookup,
        Self::NameToDomain,
        Self::RevealFromIp,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompanyEnrichment => "company_enrichment",
            Self::CompanySearch => "company_search",
            Self::CompanyAutocomplete => "company_autocomplete",
            Self::PeopleSearchV1 => "people_search_v1",
            Self::PeopleSearchV2 => "people_search_v2",
            Self::EmailLookup => "email_lookup",
            Self::NameToDomain => "name_to_domain",
            Self::RevealFromIp => "reveal_from_ip",
        }
    }

    pub const fn url(self) -> &'static str {
        match self {
            Self::CompanyEnrichment => "https://company-stream.clearbit.com/v2/companies/find",
            Self::CompanySearch => "https://discovery.clearbit.com/v1/companies/search",
            Self::CompanyAutocomplete => "https://autocomplete.clearbit.com/v1/companies/suggest",
            Self::PeopleSearchV1 => "https://prospector.clearbit.com/v1/people/search",
            Self::PeopleSearchV2 => "https://prospector.clearbit.com/v2/people/search",
            Self::EmailLookup => "https://person.clearbit.com/v2/people/find",
            Self::NameToDomain => "https://company.clearbit.com/v1/domains/find",
            Self::RevealFromIp => "https://reveal.clearbit.com/v1/companies/find",
        }
    }

    /// Advisory lookups where "no data" is a normal outcome. Their failures
    /// resolve to `None` instead of an error.
    pub const fn is_best_effort(self) -> bool {
        matches!(
            self,
            Self::CompanyEnrichment | Self::NameToDomain | Self::RevealFromIp
        )
    }

    /// People searches always carry a `page_size`, capped at the client's
    /// maximum.
    pub const fn is_paginated(self) -> bool {
        matches!(self, Self::PeopleSearchV1 | Self::PeopleSearchV2)
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical call: endpoint, normalized query pairs and optional polling.
///
/// Fields are private; re-issuing a polled call sends the identical request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentRequest {
    endpoint: Endpoint,
    params: Vec<(String, String)>,
    retry_policy: Option<RetryPolicy>,
}

impl EnrichmentRequest {
    pub fn new(endpoint: Endpoint, params: Vec<(String, String)>) -> Self {
        Self {
            endpoint,
            params,
            retry_policy: None,
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = Some(retry_policy);
        self
    }

    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub const fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.retry_policy.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_advisory_lookups_are_best_effort() {
        let best_effort: Vec<_> = Endpoint::ALL
            .into_iter()
            .filter(|endpoint| endpoint.is_best_effort())
            .collect();

        assert_eq!(
            best_effort,
            vec![
                Endpoint::CompanyEnrichment,
                Endpoint::NameToDomain,
                Endpoint::RevealFromIp
            ]
        );
    }

    #[test]
    fn every_endpoint_targets_https() {
        for endpoint in Endpoint::ALL {
            assert!(endpoint.url().starts_with("https://"), "{endpoint}");
        }
    }

    #[test]
    fn only_people_searches_force_a_page_size() {
        let paginated: Vec<_> = Endpoint::ALL
            .into_iter()
            .filter(|endpoint| endpoint.is_paginated())
            .collect();

        assert_eq!(
            paginated,
            vec![Endpoint::PeopleSearchV1, Endpoint::PeopleSearchV2]
        );
    }

    #[test]
    fn new_request_does_not_poll() {
        let request = EnrichmentRequest::new(
            Endpoint::EmailLookup,
            vec![(String::from("email"), String::from("alex@acme.com"))],
        );

        assert_eq!(request.params()[0].1, "alex@acme.com");
        assert_eq!(request.retry_policy(), None);
    }
}
