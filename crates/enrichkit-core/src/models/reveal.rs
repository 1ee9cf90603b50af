use serde::{Deserialize, Serialize};

use crate::models::company::CompanyResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceScore {
    VeryHigh,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoIp {
    pub city: Option<String>,
    pub state: Option<String>,
    pub state_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
}

/// Company behind an IP address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyReveal {
    pub ip: String,
    pub fuzzy: Option<bool>,
    pub domain: Option<String>,
    #[serde(rename = "type")]
    pub reveal_type: Option<String>,
    pub company: Option<CompanyResponse>,
    #[serde(rename = "geoIP")]
    pub geo_ip: Option<GeoIp>,
    pub confidence_score: Option<ConfidenceScore>,
    pub role: Option<String>,
    pub seniority: Option<String>,
}
