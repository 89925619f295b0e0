use crate::error::{Result, WidgetError};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of positional columns in `city_coordinates.csv`.
pub const CSV_ROW_LENGTH: usize = 4;

/// A selectable city with the coordinates sent to the forecast API.
///
/// Coordinates stay as the strings found in the catalog so the request
/// carries exactly what the file says.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CityRecord {
    pub latitude: String,
    pub longitude: String,
    pub name: String,
    pub country: String,
}

impl CityRecord {
    /// Selector label, e.g. "Amsterdam, Netherlands".
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// One `<option>` of the city selector.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CityOption {
    /// Catalog key rendered as the option value
    pub value: String,
    pub label: String,
}

/// Cities keyed by zero-based row index in file order (header excluded).
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct CityCatalog {
    cities: BTreeMap<usize, CityRecord>,
}

impl CityCatalog {
    /// Parse the catalog CSV.
    ///
    /// Expected columns (with header): `latitude,longitude,city,country`
    ///
    /// Quoting is disabled: the file is a controlled asset and values never
    /// contain commas. Blank lines are skipped and do not consume a key. A
    /// row with fewer than four fields fails the whole catalog; extra fields
    /// are ignored.
    ///
    /// # Example CSV
    /// ```text
    /// latitude,longitude,city,country
    /// 52.367,4.904,Amsterdam,Netherlands
    /// ```
    pub fn parse(csv_data: &str) -> Result<CityCatalog> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut cities = BTreeMap::new();
        for row in rdr.records() {
            let record = row.map_err(|e| WidgetError::CatalogLoad(e.to_string()))?;
            // Whitespace-only lines trim down to a single empty field.
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }

            let line = record.position().map_or(0, |p| p.line() as usize);
            if record.len() < CSV_ROW_LENGTH {
                return Err(WidgetError::MalformedRow {
                    line,
                    found: record.len(),
                });
            }
            if record.len() > CSV_ROW_LENGTH {
                log::debug!(
                    "catalog: ignoring {} extra field(s) on line {}",
                    record.len() - CSV_ROW_LENGTH,
                    line
                );
            }

            let city = CityRecord {
                latitude: record[0].to_string(),
                longitude: record[1].to_string(),
                name: record[2].to_string(),
                country: record[3].to_string(),
            };
            cities.insert(cities.len(), city);
        }

        log::info!("catalog: loaded {} cities", cities.len());
        Ok(CityCatalog { cities })
    }

    pub fn get(&self, key: usize) -> Option<&CityRecord> {
        self.cities.get(&key)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities in key order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CityRecord)> {
        self.cities.iter().map(|(key, city)| (*key, city))
    }

    /// Selector options in key order.
    pub fn options(&self) -> Vec<CityOption> {
        self.iter()
            .map(|(key, city)| CityOption {
                value: key.to_string(),
                label: city.label(),
            })
            .collect()
    }
}
