//! Listing import from spreadsheet exports (ERP mirror-in).

mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::catalog::domain::Property;

#[derive(Debug)]
pub enum PropertyImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: u64, reason: String },
}

impl std::fmt::Display for PropertyImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyImportError::Io(err) => write!(f, "failed to read listing export: {}", err),
            PropertyImportError::Csv(err) => write!(f, "invalid listing CSV data: {}", err),
            PropertyImportError::InvalidRow { line, reason } => {
                write!(f, "listing export line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for PropertyImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PropertyImportError::Io(err) => Some(err),
            PropertyImportError::Csv(err) => Some(err),
            PropertyImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for PropertyImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for PropertyImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct PropertyImporter;

impl PropertyImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Property>, PropertyImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse every row; the first row carrying a given ID wins.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Property>, PropertyImportError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut properties = Vec::new();

        for row in parser::parse_rows(reader)? {
            if !seen.insert(row.property.id.clone()) {
                warn!(line = row.line, id = %row.property.id, "skipping duplicate listing row");
                continue;
            }
            properties.push(row.property);
        }

        debug!(imported = properties.len(), "parsed listing export");
        Ok(properties)
    }
}
