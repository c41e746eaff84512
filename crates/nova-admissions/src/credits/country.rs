use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Credit system family a country's degrees are normalized under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CountryType {
    /// European systems already awarding ECTS credit points.
    EuEcts,
    /// India, Pakistan and Bangladesh, normalized by degree duration.
    IndiaSubcontinent,
    UsaCanada,
    Uk,
    /// Everything without a recognized conversion ratio.
    Other,
}

impl CountryType {
    pub const ALL: [CountryType; 5] = [
        CountryType::EuEcts,
        CountryType::IndiaSubcontinent,
        CountryType::UsaCanada,
        CountryType::Uk,
        CountryType::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CountryType::EuEcts => "EU_ECTS",
            CountryType::IndiaSubcontinent => "INDIA_SUBCONTINENT",
            CountryType::UsaCanada => "USA_CANADA",
            CountryType::Uk => "UK",
            CountryType::Other => "OTHER",
        }
    }
}

/// Catalog entry used to populate country selectors and resolve the credit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryOption {
    pub code: &'static str,
    pub name: &'static str,
    pub country_type: CountryType,
    pub region: &'static str,
}

const fn entry(
    code: &'static str,
    name: &'static str,
    country_type: CountryType,
    region: &'static str,
) -> CountryOption {
    CountryOption {
        code,
        name,
        country_type,
        region,
    }
}

use CountryType::{EuEcts, IndiaSubcontinent, Other, Uk, UsaCanada};

const EUROPE: &str = "Europe";
const ASIA: &str = "Asia";
const AFRICA: &str = "Africa";
const MIDDLE_EAST: &str = "Middle East";
const NORTH_AMERICA: &str = "North America";
const SOUTH_AMERICA: &str = "South America";
const OCEANIA: &str = "Oceania";

/// Static ISO 3166 alpha-2 catalog. Codes missing from it classify as [`CountryType::Other`].
pub const COUNTRY_CATALOG: &[CountryOption] = &[
    entry("AT", "Austria", EuEcts, EUROPE),
    entry("BE", "Belgium", EuEcts, EUROPE),
    entry("BG", "Bulgaria", EuEcts, EUROPE),
    entry("HR", "Croatia", EuEcts, EUROPE),
    entry("CY", "Cyprus", EuEcts, EUROPE),
    entry("CZ", "Czech Republic", EuEcts, EUROPE),
    entry("DK", "Denmark", EuEcts, EUROPE),
    entry("EE", "Estonia", EuEcts, EUROPE),
    entry("FI", "Finland", EuEcts, EUROPE),
    entry("FR", "France", EuEcts, EUROPE),
    entry("DE", "Germany", EuEcts, EUROPE),
    entry("GR", "Greece", EuEcts, EUROPE),
    entry("HU", "Hungary", EuEcts, EUROPE),
    entry("IE", "Ireland", EuEcts, EUROPE),
    entry("IT", "Italy", EuEcts, EUROPE),
    entry("LV", "Latvia", EuEcts, EUROPE),
    entry("LT", "Lithuania", EuEcts, EUROPE),
    entry("LU", "Luxembourg", EuEcts, EUROPE),
    entry("MT", "Malta", EuEcts, EUROPE),
    entry("NL", "Netherlands", EuEcts, EUROPE),
    entry("NO", "Norway", EuEcts, EUROPE),
    entry("PL", "Poland", EuEcts, EUROPE),
    entry("PT", "Portugal", EuEcts, EUROPE),
    entry("RO", "Romania", EuEcts, EUROPE),
    entry("SK", "Slovakia", EuEcts, EUROPE),
    entry("SI", "Slovenia", EuEcts, EUROPE),
    entry("ES", "Spain", EuEcts, EUROPE),
    entry("SE", "Sweden", EuEcts, EUROPE),
    entry("CH", "Switzerland", EuEcts, EUROPE),
    entry("GB", "United Kingdom", Uk, EUROPE),
    entry("IN", "India", IndiaSubcontinent, ASIA),
    entry("PK", "Pakistan", IndiaSubcontinent, ASIA),
    entry("BD", "Bangladesh", IndiaSubcontinent, ASIA),
    entry("US", "United States", UsaCanada, NORTH_AMERICA),
    entry("CA", "Canada", UsaCanada, NORTH_AMERICA),
    entry("AF", "Afghanistan", Other, ASIA),
    entry("AL", "Albania", Other, EUROPE),
    entry("DZ", "Algeria", Other, AFRICA),
    entry("AR", "Argentina", Other, SOUTH_AMERICA),
    entry("AM", "Armenia", Other, ASIA),
    entry("AU", "Australia", Other, OCEANIA),
    entry("AZ", "Azerbaijan", Other, ASIA),
    entry("BH", "Bahrain", Other, MIDDLE_EAST),
    entry("BY", "Belarus", Other, EUROPE),
    entry("BO", "Bolivia", Other, SOUTH_AMERICA),
    entry("BA", "Bosnia and Herzegovina", Other, EUROPE),
    entry("BR", "Brazil", Other, SOUTH_AMERICA),
    entry("BT", "Bhutan", Other, ASIA),
    entry("KH", "Cambodia", Other, ASIA),
    entry("CL", "Chile", Other, SOUTH_AMERICA),
    entry("CN", "China", Other, ASIA),
    entry("CO", "Colombia", Other, SOUTH_AMERICA),
    entry("EG", "Egypt", Other, AFRICA),
    entry("ET", "Ethiopia", Other, AFRICA),
    entry("GE", "Georgia", Other, ASIA),
    entry("GH", "Ghana", Other, AFRICA),
    entry("HK", "Hong Kong", Other, ASIA),
    entry("ID", "Indonesia", Other, ASIA),
    entry("IR", "Iran", Other, MIDDLE_EAST),
    entry("IQ", "Iraq", Other, MIDDLE_EAST),
    entry("IL", "Israel", Other, MIDDLE_EAST),
    entry("JP", "Japan", Other, ASIA),
    entry("JO", "Jordan", Other, MIDDLE_EAST),
    entry("KZ", "Kazakhstan", Other, ASIA),
    entry("KE", "Kenya", Other, AFRICA),
    entry("KW", "Kuwait", Other, MIDDLE_EAST),
    entry("LB", "Lebanon", Other, MIDDLE_EAST),
    entry("MY", "Malaysia", Other, ASIA),
    entry("MV", "Maldives", Other, ASIA),
    entry("MX", "Mexico", Other, NORTH_AMERICA),
    entry("MA", "Morocco", Other, AFRICA),
    entry("MM", "Myanmar", Other, ASIA),
    entry("NP", "Nepal", Other, ASIA),
    entry("NZ", "New Zealand", Other, OCEANIA),
    entry("NG", "Nigeria", Other, AFRICA),
    entry("OM", "Oman", Other, MIDDLE_EAST),
    entry("PE", "Peru", Other, SOUTH_AMERICA),
    entry("PH", "Philippines", Other, ASIA),
    entry("QA", "Qatar", Other, MIDDLE_EAST),
    entry("RU", "Russia", Other, EUROPE),
    entry("SA", "Saudi Arabia", Other, MIDDLE_EAST),
    entry("RS", "Serbia", Other, EUROPE),
    entry("SG", "Singapore", Other, ASIA),
    entry("ZA", "South Africa", Other, AFRICA),
    entry("KR", "South Korea", Other, ASIA),
    entry("LK", "Sri Lanka", Other, ASIA),
    entry("SY", "Syria", Other, MIDDLE_EAST),
    entry("TW", "Taiwan", Other, ASIA),
    entry("TH", "Thailand", Other, ASIA),
    entry("TR", "Turkey", Other, MIDDLE_EAST),
    entry("UA", "Ukraine", Other, EUROPE),
    entry("AE", "United Arab Emirates", Other, MIDDLE_EAST),
    entry("UZ", "Uzbekistan", Other, ASIA),
    entry("VN", "Vietnam", Other, ASIA),
    entry("YE", "Yemen", Other, MIDDLE_EAST),
    entry("ZW", "Zimbabwe", Other, AFRICA),
];

/// Look up a catalog entry by ISO code, ignoring case and surrounding whitespace.
pub fn find_country(code: &str) -> Option<&'static CountryOption> {
    let code = code.trim();
    COUNTRY_CATALOG
        .iter()
        .find(|country| country.code.eq_ignore_ascii_case(code))
}

/// Resolve the credit system for a country code. Total: unknown codes fall back to `Other`.
pub fn classify_country(code: &str) -> CountryType {
    find_country(code)
        .map(|country| country.country_type)
        .unwrap_or(CountryType::Other)
}

/// Catalog grouped by region, preserving catalog order inside each group.
pub fn countries_by_region() -> BTreeMap<&'static str, Vec<CountryOption>> {
    let mut grouped: BTreeMap<&'static str, Vec<CountryOption>> = BTreeMap::new();
    for country in COUNTRY_CATALOG {
        grouped.entry(country.region).or_default().push(*country);
    }
    grouped
}

pub fn countries_of_type(country_type: CountryType) -> Vec<CountryOption> {
    COUNTRY_CATALOG
        .iter()
        .filter(|country| country.country_type == country_type)
        .copied()
        .collect()
}
