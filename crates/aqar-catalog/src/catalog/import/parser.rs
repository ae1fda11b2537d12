use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::catalog::domain::{ListingStatus, Property, PropertyCategory};

use super::PropertyImportError;

pub(crate) struct ParsedRow {
    pub(crate) line: u64,
    pub(crate) property: Property,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<ParsedRow>, PropertyImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        // Quoted cells may span lines, so report where the record starts.
        let line = record.position().map_or(0, |position| position.line());
        let row: ListingRow = record.deserialize(Some(&headers))?;
        rows.push(row.into_parsed(line)?);
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "ID", default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Category", default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(rename = "City", default, deserialize_with = "empty_string_as_none")]
    city: Option<String>,
    #[serde(rename = "District", default, deserialize_with = "empty_string_as_none")]
    district: Option<String>,
    #[serde(rename = "Address", default, deserialize_with = "empty_string_as_none")]
    address: Option<String>,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Area")]
    area: String,
    #[serde(rename = "Bedrooms", default, deserialize_with = "empty_string_as_none")]
    bedrooms: Option<String>,
    #[serde(rename = "Bathrooms", default, deserialize_with = "empty_string_as_none")]
    bathrooms: Option<String>,
    #[serde(rename = "Featured", default, deserialize_with = "empty_string_as_none")]
    featured: Option<String>,
}

impl ListingRow {
    fn into_parsed(self, line: u64) -> Result<ParsedRow, PropertyImportError> {
        let invalid = |reason: String| PropertyImportError::InvalidRow { line, reason };

        if self.title.trim().is_empty() {
            return Err(invalid("title is empty".to_string()));
        }

        let category = self
            .category
            .as_deref()
            .map(str::parse::<PropertyCategory>)
            .transpose()
            .map_err(|err| invalid(err.to_string()))?;
        let status = self
            .status
            .as_deref()
            .map(str::parse::<ListingStatus>)
            .transpose()
            .map_err(|err| invalid(err.to_string()))?;

        let price = parse_amount(&self.price)
            .ok_or_else(|| invalid(format!("price '{}' is not a whole number", self.price)))?;
        let area = parse_area(&self.area)
            .ok_or_else(|| invalid(format!("area '{}' is not a number", self.area)))?;
        let bedrooms = parse_count(self.bedrooms.as_deref(), "bedrooms").map_err(invalid)?;
        let bathrooms = parse_count(self.bathrooms.as_deref(), "bathrooms").map_err(invalid)?;

        let property = Property {
            id: self.id.unwrap_or_else(|| format!("import-{line}")),
            title: self.title.trim().to_string(),
            category,
            status,
            city: self.city,
            district: self.district,
            address: self.address,
            price,
            area,
            bedrooms,
            bathrooms,
            is_featured: self.featured.as_deref().is_some_and(is_truthy),
            created_at: None,
        };

        Ok(ParsedRow { line, property })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts grouped amounts such as `650,000` or `650٬000`.
fn parse_amount(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '٬' | ' '))
        .collect();
    cleaned.parse().ok()
}

fn parse_area(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|area| area.is_finite() && *area >= 0.0)
}

fn parse_count(raw: Option<&str>, field: &str) -> Result<Option<u32>, String> {
    raw.map(|value| {
        value
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("{field} '{value}' is not a whole number"))
    })
    .transpose()
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "1" | "نعم"
    )
}

#[cfg(test)]
pub(crate) fn parse_amount_for_tests(raw: &str) -> Option<u64> {
    parse_amount(raw)
}
