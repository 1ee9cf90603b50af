//! # Models
//!
//! Request options and response schemas for the enrichment endpoints.
//!
//! ## Nullability
//!
//! Upstream records are partial: any branch may be missing or `null`
//! depending on what the data provider knows. Response types therefore declare
//! every field as `Option`, at every nesting level. Only record identifiers
//! (`id`, `ip`) and pagination counters are required; a body without them is a
//! malformed response.
//!
//! Lists go through [`crate::normalize::sparse_list`], which drops `null`
//! elements instead of rejecting the whole record.
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`CompanyResponse`] | company enrichment, search results, reveal |
//! | [`CompanySearchResponse`] | company search |
//! | [`BasicCompany`] | autocomplete, name-to-domain |
//! | [`EmailLookupResponse`] | email lookup |
//! | [`ProspectorResponseV1`] / [`ProspectorResponseV2`] | people search |
//! | [`CompanyReveal`] | reveal from IP |

mod company;
mod options;
mod person;
mod reference;
mod reveal;

pub use company::{
    BasicCompany, Category, CompanyGeo, CompanyMetrics, CompanyResponse, CompanySearchResponse,
    CompanySite, DomainRef, FacebookProfile, Handle, Identifiers, TwitterProfile,
};
pub use options::{
    CompanyEnrichmentOptions, CompanySearchOptions, EmailLookupOptions, PeopleSearchOptionsV1,
    PeopleSearchOptionsV2,
};
pub use person::{
    EmailAttributes, EmailLookup, EmailLookupResponse, EmploymentAttributes, GithubProfile,
    GravatarAvatar, GravatarProfile, GravatarUrl, PersonAttributesV2, PersonEmployment, PersonGeo,
    PersonName, PersonTwitter, PhoneAttributes, ProspectCompany, ProspectV1, ProspectorResponseV1,
    ProspectorResponseV2,
};
pub use reference::{
    filter_employment_prospector_v2, PERSON_ROLES, SENIORITIES, SENIORITIES_V2, SUB_INDUSTRIES,
};
pub use reveal::{CompanyReveal, ConfidenceScore, GeoIp};
