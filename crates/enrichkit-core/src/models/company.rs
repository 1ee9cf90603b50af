use serde::{Deserialize, Serialize};

use crate::normalize::sparse_list;

/// Enriched company record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: String,
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub domain_aliases: Option<Vec<String>>,
    pub site: Option<CompanySite>,
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub founded_year: Option<i32>,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub utc_offset: Option<f64>,
    pub geo: Option<CompanyGeo>,
    pub logo: Option<String>,
    pub facebook: Option<FacebookProfile>,
    pub linkedin: Option<Handle>,
    pub twitter: Option<TwitterProfile>,
    pub crunchbase: Option<Handle>,
    pub email_provider: Option<bool>,
    #[serde(rename = "type")]
    pub company_type: Option<String>,
    pub ticker: Option<String>,
    pub identifiers: Option<Identifiers>,
    pub phone: Option<String>,
    pub metrics: Option<CompanyMetrics>,
    pub indexed_at: Option<String>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub tech: Option<Vec<String>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub tech_categories: Option<Vec<String>>,
    pub parent: Option<DomainRef>,
    pub ultimate_parent: Option<DomainRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySite {
    #[serde(default, deserialize_with = "sparse_list")]
    pub phone_numbers: Option<Vec<String>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub email_addresses: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub sector: Option<String>,
    pub industry_group: Option<String>,
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
    pub gics_code: Option<String>,
    pub sic_code: Option<String>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub sic4_codes: Option<Vec<String>>,
    pub naics_code: Option<String>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub naics6_codes: Option<Vec<String>>,
    #[serde(default, deserialize_with = "sparse_list")]
    pub naics6_codes2022: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyGeo {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub sub_premise: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub state_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookProfile {
    pub handle: Option<String>,
    pub likes: Option<u64>,
}

/// Social profile that only carries a handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handle {
    pub handle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterProfile {
    pub handle: Option<String>,
    pub id: Option<String>,
    pub bio: Option<String>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub location: Option<String>,
    pub site: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifiers {
    #[serde(rename = "usEIN")]
    pub us_ein: Option<String>,
    #[serde(rename = "usCIK")]
    pub us_cik: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMetrics {
    pub alexa_us_rank: Option<u64>,
    pub alexa_global_rank: Option<u64>,
    pub traffic_rank: Option<String>,
    pub employees: Option<u64>,
    pub employees_range: Option<String>,
    pub market_cap: Option<String>,
    pub raised: Option<f64>,
    pub annual_revenue: Option<String>,
    pub estimated_annual_revenue: Option<String>,
    pub fiscal_year_end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRef {
    pub domain: Option<String>,
}

/// Page of company search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySearchResponse {
    pub total: u64,
    pub page: u32,
    #[serde(default, deserialize_with = "sparse_list")]
    pub results: Option<Vec<CompanyResponse>>,
}

impl CompanySearchResponse {
    pub fn results(&self) -> &[CompanyResponse] {
        self.results.as_deref().unwrap_or_default()
    }
}

/// Name, domain and logo, as returned by autocomplete and name-to-domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicCompany {
    pub domain: String,
    pub logo: Option<String>,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::parse;

    #[test]
    fn sparse_company_record_parses() {
        let body = br#"{
            "id": "c_acme",
            "name": "Acme",
            "domainAliases": ["acme.io", null],
            "site": null,
            "category": { "sector": "Industrials", "sic4Codes": null },
            "geo": { "city": "Denver", "lat": 39.74, "lng": null },
            "metrics": { "employees": 250, "raised": null, "fiscalYearEnd": "12" },
            "identifiers": { "usEIN": "12-3456789", "usCIK": null },
            "type": "private",
            "ultimateParent": { "domain": null }
        }"#;

        let company: CompanyResponse = parse(body).expect("sparse record");

        assert_eq!(company.id, "c_acme");
        assert_eq!(company.domain_aliases, Some(vec![String::from("acme.io")]));
        assert_eq!(company.site, None);
        assert_eq!(company.twitter, None);
        assert_eq!(company.company_type.as_deref(), Some("private"));
        let category = company.category.expect("category present");
        assert_eq!(category.sector.as_deref(), Some("Industrials"));
        assert_eq!(category.sic4_codes, None);
        assert_eq!(company.geo.and_then(|geo| geo.lng), None);
        assert_eq!(company.metrics.and_then(|m| m.employees), Some(250));
        assert_eq!(
            company.identifiers.and_then(|ids| ids.us_ein).as_deref(),
            Some("12-3456789")
        );
        assert_eq!(company.ultimate_parent, Some(DomainRef { domain: None }));
    }

    #[test]
    fn search_page_tolerates_null_results() {
        let page: CompanySearchResponse =
            parse(br#"{"total":0,"page":1,"results":null}"#).expect("empty page");
        assert!(page.results().is_empty());
    }

    #[test]
    fn autocomplete_entry_allows_missing_logo() {
        let companies: Vec<BasicCompany> =
            parse(br#"[{"domain":"acme.com","name":"Acme","logo":null}]"#).expect("suggestions");
        assert_eq!(companies[0].logo, None);
    }
}
