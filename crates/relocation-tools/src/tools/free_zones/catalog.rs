use std::sync::OnceLock;

use thiserror::Error;

use super::domain::{FreeZoneCosts, FreeZoneRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FreeZoneLookupError {
    #[error("no free zone with id `{0}`")]
    NotFound(String),
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

const fn costs(license_from: u32, visa_from: u32, office_from: u32, package_from: u32) -> FreeZoneCosts {
    FreeZoneCosts {
        license_from,
        visa_from,
        office_from,
        package_from,
    }
}

fn standard() -> Vec<FreeZoneRecord> {
    vec![
        FreeZoneRecord {
            id: "dmcc".into(),
            name: "Dubai Multi Commodities Centre".into(),
            short_name: "DMCC".into(),
            location: "JLT, Dubai".into(),
            established: 2002,
            description: "World's leading free zone for commodities trade, awarded \"Global Free Zone of the Year\" multiple times.".into(),
            industries: strings(&["Trading", "Commodities", "Consulting", "Tech", "Finance"]),
            highlights: strings(&["#1 Global Free Zone", "Premium JLT Address", "Strong Business Network"]),
            costs: costs(15_000, 3_500, 12_000, 22_000),
            visa_allocation: "3-6 visas".into(),
            ownership: "100% Foreign".into(),
            office_options: strings(&["Flexi-desk", "Hot Desk", "Dedicated Desk", "Private Office", "Warehouse"]),
            processing_time: "3-5 days".into(),
            rating: 4.8,
            popular: true,
        },
        FreeZoneRecord {
            id: "difc".into(),
            name: "Dubai International Financial Centre".into(),
            short_name: "DIFC".into(),
            location: "DIFC, Dubai".into(),
            established: 2004,
            description: "Premier financial hub with independent legal framework based on English Common Law.".into(),
            industries: strings(&["Finance", "Banking", "Insurance", "Asset Management", "Legal", "Fintech"]),
            highlights: strings(&["Common Law Jurisdiction", "DIFC Courts", "Top Financial Hub"]),
            costs: costs(20_000, 4_000, 25_000, 45_000),
            visa_allocation: "2-6 visas".into(),
            ownership: "100% Foreign".into(),
            office_options: strings(&["Flexi-desk", "Private Office", "Co-working"]),
            processing_time: "5-7 days".into(),
            rating: 4.9,
            popular: true,
        },
        FreeZoneRecord {
            id: "dafza".into(),
            name: "Dubai Airport Free Zone".into(),
            short_name: "DAFZA".into(),
            location: "Near DXB Airport".into(),
            established: 1996,
            description: "Strategic location adjacent to Dubai International Airport, ideal for logistics and trade.".into(),
            industries: strings(&["Logistics", "Aviation", "Trading", "Pharma", "Electronics"]),
            highlights: strings(&["Airport Adjacent", "Excellent Logistics", "Tax Exemptions"]),
            costs: costs(12_000, 3_000, 15_000, 20_000),
            visa_allocation: "3-6 visas".into(),
            ownership: "100% Foreign".into(),
            office_options: strings(&["Flexi-desk", "Office", "Warehouse", "Land"]),
            processing_time: "3-5 days".into(),
            rating: 4.6,
            popular: true,
        },
        FreeZoneRecord {
            id: "jafza".into(),
            name: "Jebel Ali Free Zone".into(),
            short_name: "JAFZA".into(),
            location: "Jebel Ali, Dubai".into(),
            established: 1985,
            description: "Largest and oldest free zone in the Middle East, connected to Jebel Ali Port.".into(),
            industries: strings(&["Manufacturing", "Logistics", "Trading", "Heavy Industry", "Automotive"]),
            highlights: strings(&["Largest Free Zone", "Port Access", "Manufacturing Hub"]),
            costs: costs(15_000, 3_500, 18_000, 25_000),
            visa_allocation: "3-unlimited".into(),
            ownership: "100% Foreign".into(),
            office_options: strings(&["Office", "Warehouse", "Land", "Factory"]),
            processing_time: "3-7 days".into(),
            rating: 4.7,
            popular: true,
        },
        FreeZoneRecord {
            id: "ifza".into(),
            name: "International Free Zone Authority".into(),
            short_name: "IFZA".into(),
            location: "Dubai Silicon Oasis".into(),
            established: 2017,
            description: "Cost-effective free zone with streamlined processes, popular among startups and SMEs.".into(),
            industries: strings(&["Consulting", "E-commerce", "IT", "Trading", "Services"]),
            highlights: strings(&["Budget Friendly", "Fast Setup", "Flexible Packages"]),
            costs: costs(5_750, 3_000, 0, 11_500),
            visa_allocation: "2-6 visas".into(),
            ownership: "100% Foreign".into(),
            office_options: strings(&["Virtual Office", "Flexi-desk", "Private Office"]),
            processing_time: "2-3 days".into(),
            rating: 4.4,
            popular: true,
        },
        FreeZoneRecord {
            id: "rakez".into(),
            name: "Ras Al Khaimah Economic Zone".into(),
            short_name: "RAKEZ".into(),
            location: "RAK, UAE".into(),
            established: 2017,
            description: "Affordable alternative outside Dubai with excellent value and flexible regulations.".into(),
            industries: strings(&["Trading", "Consulting", "E-commerce", "Manufacturing", "Services"]),
            highlights: strings(&["Most Affordable", "No Office Required", "RAK Location"]),
            costs: costs(5_500, 2_500, 0, 9_500),
            visa_allocation: "2-3 visas".into(),
            ownership: "100% Foreign".into(),
            office_options: strings(&["Virtual Office", "Flexi-desk", "Warehouse"]),
            processing_time: "2-4 days".into(),
            rating: 4.3,
            popular: false,
        },
        FreeZoneRecord {
            id: "dso".into(),
            name: "Dubai Silicon Oasis".into(),
            short_name: "DSO".into(),
            location: "Silicon Oasis, Dubai".into(),
            established: 2004,
            description: "Technology-focused free zone with integrated tech park and residential community.".into(),
            industries: strings(&["Tech", "Software", "Electronics", "R&D", "Smart Tech"]),
            highlights: strings(&["Tech Focused", "Innovation Hub", "Integrated Community"]),
            costs: costs(10_000, 3_500, 12_000, 18_000),
            visa_allocation: "2-6 visas".into(),
            ownership: "100% Foreign".into(),
            office_options: strings(&["Flexi-desk", "Office", "Tech Lab"]),
            processing_time: "3-5 days".into(),
            rating: 4.5,
            popular: false,
        },
        FreeZoneRecord {
            id: "tecom".into(),
            name: "Dubai Internet City / Media City".into(),
            short_name: "TECOM".into(),
            location: "Media City, Dubai".into(),
            established: 1999,
            description: "Premier hub for technology, media, and creative industries in the heart of Dubai.".into(),
            industries: strings(&["Tech", "Media", "Marketing", "Advertising", "Digital"]),
            highlights: strings(&["Media & Tech Hub", "Premium Location", "Industry Network"]),
            costs: costs(15_000, 3_500, 20_000, 30_000),
            visa_allocation: "3-6 visas".into(),
            ownership: "100% Foreign".into(),
            office_options: strings(&["Flexi-desk", "Office", "Studio"]),
            processing_time: "3-5 days".into(),
            rating: 4.6,
            popular: false,
        },
        FreeZoneRecord {
            id: "adgm".into(),
            name: "Abu Dhabi Global Market".into(),
            short_name: "ADGM".into(),
            location: "Al Maryah Island, Abu Dhabi".into(),
            established: 2013,
            description: "International financial centre with Common Law jurisdiction, rivaling DIFC.".into(),
            industries: strings(&["Finance", "Asset Management", "Fintech", "Wealth Management"]),
            highlights: strings(&["Common Law", "Financial Hub", "Abu Dhabi Location"]),
            costs: costs(15_000, 4_000, 20_000, 35_000),
            visa_allocation: "2-6 visas".into(),
            ownership: "100% Foreign".into(),
            office_options: strings(&["Flexi-desk", "Private Office"]),
            processing_time: "5-10 days".into(),
            rating: 4.7,
            popular: false,
        },
        FreeZoneRecord {
            id: "shams".into(),
            name: "Sharjah Media City".into(),
            short_name: "SHAMS".into(),
            location: "Sharjah, UAE".into(),
            established: 2017,
            description: "Budget-friendly free zone in Sharjah, popular for freelancers and small businesses.".into(),
            industries: strings(&["Media", "E-commerce", "Consulting", "Trading", "Services"]),
            highlights: strings(&["Very Affordable", "Freelancer Friendly", "Quick Setup"]),
            costs: costs(5_750, 2_800, 0, 9_500),
            visa_allocation: "1-3 visas".into(),
            ownership: "100% Foreign".into(),
            office_options: strings(&["Virtual Office", "Flexi-desk"]),
            processing_time: "1-3 days".into(),
            rating: 4.2,
            popular: false,
        },
    ]
}

/// The reference catalogue, built once.
pub fn free_zones() -> &'static [FreeZoneRecord] {
    static CATALOG: OnceLock<Vec<FreeZoneRecord>> = OnceLock::new();
    CATALOG.get_or_init(standard)
}

pub fn find(id: &str) -> Result<&'static FreeZoneRecord, FreeZoneLookupError> {
    find_in(free_zones(), id)
}

/// Ids match case-insensitively after trimming.
pub fn find_in<'a>(
    records: &'a [FreeZoneRecord],
    id: &str,
) -> Result<&'a FreeZoneRecord, FreeZoneLookupError> {
    let id = id.trim();
    records
        .iter()
        .find(|record| record.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| FreeZoneLookupError::NotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn catalog_has_ten_unique_zones() {
        let ids: HashSet<_> = free_zones().iter().map(|zone| zone.id.as_str()).collect();
        assert_eq!(free_zones().len(), 10);
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn ratings_and_costs_are_sane() {
        for zone in free_zones() {
            assert!((0.0..=5.0).contains(&zone.rating), "{}", zone.id);
            assert!(zone.costs.package_from >= zone.costs.license_from, "{}", zone.id);
            assert!(!zone.industries.is_empty(), "{}", zone.id);
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find(" DMCC ").map(|zone| zone.short_name.as_str()), Ok("DMCC"));
        assert_eq!(
            find("nowhere"),
            Err(FreeZoneLookupError::NotFound("nowhere".into()))
        );
    }

    #[test]
    fn years_operating_counts_from_established() {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        let jafza = find("jafza").expect("jafza");
        assert_eq!(jafza.years_operating(as_of), 40);

        let before = NaiveDate::from_ymd_opt(1980, 1, 1).expect("valid date");
        assert_eq!(jafza.years_operating(before), 0);
    }
}
