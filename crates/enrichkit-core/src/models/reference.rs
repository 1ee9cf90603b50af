//! Static reference data accepted by the people-search filters, plus pure
//! helpers over search results.

use crate::models::person::EmploymentAttributes;

pub const PERSON_ROLES: &[&str] = &[
    "communications",
    "customer_service",
    "education",
    "engineering",
    "finance",
    "health_professional",
    "human_resources",
    "information_technology",
    "leadership",
    "legal",
    "marketing",
    "operations",
    "product",
    "public_relations",
    "real_estate",
    "recruiting",
    "research",
    "sales",
];

/// Seniorities for people-search v2.
pub const SENIORITIES_V2: &[&str] = &[
    "Executive", "VP", "Owner", "Partner", "Director", "Manager", "Senior", "Entry",
];

/// Seniorities for people-search v1.
pub const SENIORITIES: &[&str] = &["executive", "director", "manager"];

pub const SUB_INDUSTRIES: &[&str] = &[
    "Automotive",
    "Consumer Discretionary",
    "Consumer Goods",
    "Consumer Electronics",
    "Household Appliances",
    "Photography",
    "Sporting Goods",
    "Apparel, Accessories & Luxury Goods",
    "Textiles",
    "Textiles, Apparel & Luxury Goods",
    "Consumer Services",
    "Education Services",
    "Specialized Consumer Services",
    "Casinos & Gaming",
    "Hotels, Restaurants & Leisure",
    "Leisure Facilities",
    "Restaurants",
    "Education",
    "Family Services",
    "Legal Services",
    "Advertising",
    "Broadcasting",
    "Media",
    "Movies & Entertainment",
    "Public Relations",
    "Publishing",
    "Distributors",
    "Retailing",
    "Home Improvement Retail",
    "Homefurnishing Retail",
    "Specialty Retail",
    "Consumer Staples",
    "Food Retail",
    "Beverages",
    "Agricultural Products",
    "Food",
    "Food Production",
    "Packaged Foods & Meats",
    "Tobacco",
    "Cosmetics",
    "Oil & Gas",
    "Banking & Mortgages",
    "Accounting",
    "Finance",
    "Financial Services",
    "Asset Management & Custody Banks",
    "Diversified Capital Markets",
    "Fundraising",
    "Investment Banking & Brokerage",
    "Payments",
    "Insurance",
    "Real Estate",
    "Eyewear",
    "Health & Wellness",
    "Health Care",
    "Health Care Services",
    "Biotechnology",
    "Life Sciences Tools & Services",
    "Pharmaceuticals",
    "Aerospace & Defense",
    "Capital Goods",
    "Civil Engineering",
    "Construction",
    "Construction & Engineering",
    "Mechanical Engineering",
    "Electrical",
    "Electrical Equipment",
    "Industrials & Manufacturing",
    "Industrial Machinery",
    "Machinery",
    "Trading Companies & Distributors",
    "Business Supplies",
    "Commercial Printing",
    "Corporate & Business",
    "Architecture",
    "Automation",
    "Consulting",
    "Design",
    "Human Resource & Employment Services",
    "Professional Services",
    "Research & Consulting Services",
    "Industrials",
    "Shipping & Logistics",
    "Airlines",
    "Marine",
    "Ground Transportation",
    "Transportation",
    "Semiconductors",
    "Cloud Services",
    "Internet",
    "Internet Software & Services",
    "Data Processing & Outsourced Services",
    "Graphic Design",
    "Communications",
    "Computer Networking",
    "Nanotechnology",
    "Computer Hardware",
    "Technology Hardware, Storage & Peripherals",
    "Building Materials",
    "Chemicals",
    "Commodity Chemicals",
    "Containers & Packaging",
    "Gold",
    "Metals & Mining",
    "Paper Products",
    "Integrated Telecommunication Services",
    "Wireless Telecommunication Services",
    "Renewable Energy",
    "Energy",
    "Utilities",
];

/// `true` when someone currently works at `company_name`: at least one
/// employment without an end date whose company contains the name,
/// ignoring case.
///
/// People can hold several positions at once, so ended employments are
/// skipped rather than treated as disqualifying.
pub fn filter_employment_prospector_v2(
    company_name: &str,
    employments: Option<&[EmploymentAttributes]>,
) -> bool {
    let needle = company_name.to_lowercase();
    employments
        .unwrap_or_default()
        .iter()
        .filter(|employment| employment.is_current())
        .any(|employment| {
            employment
                .company
                .as_deref()
                .is_some_and(|company| company.to_lowercase().contains(&needle))
        })
}
