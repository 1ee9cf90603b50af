use serde::{Deserialize, Serialize};

use crate::models::company::Handle;
use crate::normalize::sparse_list;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub full_name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

/// Person record returned by the email lookup endpoint.
///
/// Every field is optional, `id` included: a queued lookup may answer with a
/// placeholder body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLookupResponse {
    pub id: Option<String>,
    pub name: Option<PersonName>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub utc_offset: Option<f64>,
    pub geo: Option<PersonGeo>,
    pub bio: Option<String>,
    pub site: Option<String>,
    pub avatar: Option<String>,
    pub employment: Option<PersonEmployment>,
    pub facebook: Option<Handle>,
    pub github: Option<GithubProfile>,
    pub twitter: Option<PersonTwitter>,
    pub linkedin: Option<Handle>,
    pub googleplus: Option<Handle>,
    pub gravatar: Option<GravatarProfile>,
    pub fuzzy: Option<bool>,
    pub email_provider: Option<bool>,
    pub indexed_at: Option<String>,
    pub phone: Option<String>,
    pub active_at: Option<String>,
    pub inactive_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonGeo {
    pub city: Option<String>,
    pub state: Option<String>,
    pub state_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonEmployment {
    pub domain: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub role: Option<String>,
    pub sub_role: Option<String>,
    pub seniority: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubProfile {
    pub handle: Option<String>,
    pub id: Option<String>,
    pub avatar: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonTwitter {
    pub handle: Option<String>,
    pub id: Option<String>,
    pub bio: Option<String>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub statuses: Option<u64>,
    pub favorites: Option<u64>,
    pub location: Option<String>,
    pub site: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravatarProfile {
    pub handle: Option<String>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub urls: Option<Vec<GravatarUrl>>,
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub avatars: Option<Vec<GravatarAvatar>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravatarUrl {
    pub value: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravatarAvatar {
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub avatar_type: Option<String>,
}

/// Terminal result of an email lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum EmailLookup {
    /// The upstream answered with a final record.
    Ready(EmailLookupResponse),
    /// The upstream was still processing when polling stopped. `attempts`
    /// counts every request sent; `body` is the last queued body, if any.
    Queued {
        attempts: u32,
        body: Option<EmailLookupResponse>,
    },
}

impl EmailLookup {
    pub const fn is_queued(&self) -> bool {
        matches!(self, Self::Queued { .. })
    }

    pub fn person(&self) -> Option<&EmailLookupResponse> {
        match self {
            Self::Ready(person) => Some(person),
            Self::Queued { .. } => None,
        }
    }

    pub fn into_person(self) -> Option<EmailLookupResponse> {
        match self {
            Self::Ready(person) => Some(person),
            Self::Queued { .. } => None,
        }
    }
}

/// One employment entry of a people-search v2 result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentAttributes {
    pub company: Option<String>,
    pub domain: Option<String>,
    pub linkedin: Option<String>,
    pub title: Option<String>,
    pub role: Option<String>,
    pub sub_role: Option<String>,
    pub seniority: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub present: Option<bool>,
    pub highlight: Option<bool>,
}

impl EmploymentAttributes {
    /// An employment without an end date is current.
    pub fn is_current(&self) -> bool {
        self.end_date.as_deref().map_or(true, str::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAttributes {
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub email_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneAttributes {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub phone_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAttributesV2 {
    pub id: String,
    pub name: Option<PersonName>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub employments: Option<Vec<EmploymentAttributes>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub emails: Option<Vec<EmailAttributes>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub phones: Option<Vec<PhoneAttributes>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectorResponseV2 {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    #[serde(default, deserialize_with = "sparse_list")]
    pub results: Option<Vec<PersonAttributesV2>>,
}

impl ProspectorResponseV2 {
    pub fn results(&self) -> &[PersonAttributesV2] {
        self.results.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectCompany {
    pub name: Option<String>,
}

/// People-search v1 result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectV1 {
    pub id: String,
    pub name: Option<PersonName>,
    pub title: Option<String>,
    pub role: Option<String>,
    pub sub_role: Option<String>,
    pub seniority: Option<String>,
    pub company: Option<ProspectCompany>,
    pub email: Option<String>,
    pub verified: Option<bool>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectorResponseV1 {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    #[serde(default, deserialize_with = "sparse_list")]
    pub results: Option<Vec<ProspectV1>>,
}

impl ProspectorResponseV1 {
    pub fn results(&self) -> &[ProspectV1] {
        self.results.as_deref().unwrap_or_default()
    }
}
