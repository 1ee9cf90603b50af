//! Request options. Unset fields and empty lists never reach the query string.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyEnrichmentOptions {
    pub domain: String,
    pub webhook_url: Option<String>,
    pub company_name: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
}

impl CompanyEnrichmentOptions {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }
}

/// Discovery query, e.g. `tech:google_apps` or
/// `or:(twitter_followers:10000~ type:nonprofit)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanySearchOptions {
    pub query: String,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

impl CompanySearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeopleSearchOptionsV2 {
    pub domains: Vec<String>,
    pub names: Vec<String>,
    pub roles: Vec<String>,
    pub seniorities: Vec<String>,
    pub titles: Vec<String>,
    pub locations: Vec<String>,
    pub employees_ranges: Vec<String>,
    pub company_tags: Vec<String>,
    pub company_tech: Vec<String>,
    pub company_types: Vec<String>,
    pub industries: Vec<String>,
    pub revenue_ranges: Vec<String>,
    pub linkedin_profile_handles: Vec<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub suppression: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeopleSearchOptionsV1 {
    pub domain: String,
    pub role: Option<String>,
    pub roles: Vec<String>,
    pub seniority: Option<String>,
    pub seniorities: Vec<String>,
    pub title: Option<String>,
    pub titles: Vec<String>,
    pub city: Option<String>,
    pub cities: Vec<String>,
    pub state: Option<String>,
    pub states: Vec<String>,
    pub country: Option<String>,
    pub countries: Vec<String>,
    pub name: Option<String>,
    pub query: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub suppression: Option<String>,
}

impl PeopleSearchOptionsV1 {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }
}

/// Email lookup input. `max_retries` opts into polling while the upstream
/// answers 202; unset or zero returns the first response as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailLookupOptions {
    pub email: String,
    pub max_retries: Option<u32>,
}

impl EmailLookupOptions {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            max_retries: None,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }
}
