//! CSV rendering of filtered zone lists and comparison tables.

use std::io;

use thiserror::Error;

use super::comparison::ComparisonTable;
use super::domain::FreeZoneRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv output: {0}")]
    Io(#[from] io::Error),
}

const LIST_HEADERS: [&str; 10] = [
    "id",
    "name",
    "location",
    "established",
    "industries",
    "package_from_aed",
    "license_from_aed",
    "visa_from_aed",
    "rating",
    "popular",
];

/// One row per zone; industries are joined with `;`.
pub fn write_zones<W: io::Write>(writer: W, zones: &[&FreeZoneRecord]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(LIST_HEADERS)?;

    for zone in zones {
        wtr.write_record([
            zone.id.clone(),
            zone.name.clone(),
            zone.location.clone(),
            zone.established.to_string(),
            zone.industries.join(";"),
            zone.costs.package_from.to_string(),
            zone.costs.license_from.to_string(),
            zone.costs.visa_from.to_string(),
            format!("{:.1}", zone.rating),
            zone.popular.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// A `feature` column followed by one column per compared zone.
pub fn write_comparison<W: io::Write>(
    writer: W,
    table: &ComparisonTable,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let header: Vec<&str> = std::iter::once("feature")
        .chain(table.columns.iter().map(|column| column.short_name.as_str()))
        .collect();
    wtr.write_record(&header)?;

    for row in &table.rows {
        let record: Vec<String> = std::iter::once(row.label.to_string())
            .chain(row.values.iter().map(|value| value.display()))
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::free_zones::{compare, filter_and_sort, free_zones, BudgetTier, IndustryFilter, SortKey};

    #[test]
    fn zone_list_has_header_and_rows() {
        let zones = filter_and_sort(
            free_zones(),
            &IndustryFilter::parse("Finance"),
            BudgetTier::All,
            SortKey::Price,
        );
        let mut buffer = Vec::new();
        write_zones(&mut buffer, &zones).expect("csv written");

        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id,name,location"));
        assert!(lines[1].starts_with("dmcc,Dubai Multi Commodities Centre,\"JLT, Dubai\",2002"));
    }

    #[test]
    fn comparison_is_feature_by_zone() {
        let table = compare(free_zones(), &["rakez", "shams"]);
        let mut buffer = Vec::new();
        write_comparison(&mut buffer, &table).expect("csv written");

        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "feature,RAKEZ,SHAMS");
        assert_eq!(lines[1], "Package From,\"AED 9,500\",\"AED 9,500\"");
        assert_eq!(lines.len(), 9);
    }
}
