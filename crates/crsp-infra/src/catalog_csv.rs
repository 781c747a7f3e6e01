//! CSV loaders for the CRSP catalog resources.
//!
//! Both catalogs share the same dialect: comma-delimited, double-quote
//! quoted, header row present. `#`-prefixed lines are ordinary data, not
//! comments. Empty rows are skipped and ragged rows are tolerated; a
//! missing column simply yields `None` for that field in every row.
//! Numeric columns may carry thousands-separator commas; values that do
//! not parse become `None` rather than failing the row or the load.

use std::fs;
use std::path::Path;

use csv::StringRecord;

use crsp_types::{Motorcycle, Result, Vehicle};

/// Header-name to column-index lookup for one CSV file
struct ColumnMap {
    headers: StringRecord,
}

impl ColumnMap {
    fn new(headers: StringRecord) -> Self {
        Self { headers }
    }

    /// Field value by column name, blank normalized to `None`
    fn text(&self, record: &StringRecord, column: &str) -> Option<String> {
        let idx = self.headers.iter().position(|h| h == column)?;
        let value = record.get(idx)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Decimal field with thousands separators stripped
    fn price(&self, record: &StringRecord, column: &str) -> Option<f64> {
        self.text(record, column)
            .and_then(|s| s.replace(',', "").parse().ok())
    }

    /// Integer field with thousands separators stripped
    fn count(&self, record: &StringRecord, column: &str) -> Option<u32> {
        self.text(record, column)
            .and_then(|s| s.replace(',', "").parse().ok())
    }
}

fn reader_for(data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes())
}

/// Load vehicle records from CSV text
pub fn load_vehicles(data: &str) -> Result<Vec<Vehicle>> {
    let mut reader = reader_for(data);
    let columns = ColumnMap::new(reader.headers()?.clone());

    let mut vehicles = Vec::new();
    for result in reader.records() {
        let record = result?;
        vehicles.push(Vehicle {
            body_type: columns.text(&record, "BodyType"),
            crsp: columns.price(&record, "CRSP"),
            drive_configuration: columns.text(&record, "DriveConfiguration"),
            engine_capacity: columns.text(&record, "EngineCapacity"),
            fuel: columns.text(&record, "Fuel"),
            gvw: columns.count(&record, "GVW"),
            make: columns.text(&record, "Make"),
            model: columns.text(&record, "Model"),
            model_number: columns.text(&record, "ModelNumber"),
            seating: columns.count(&record, "Seating"),
            transmission: columns.text(&record, "Transmission"),
        });
    }

    log::info!("loaded {} vehicle records", vehicles.len());
    Ok(vehicles)
}

/// Load vehicle records from a CSV file
pub fn load_vehicles_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Vehicle>> {
    let data = fs::read_to_string(path)?;
    load_vehicles(&data)
}

/// Load motorcycle records from CSV text
pub fn load_motorcycles(data: &str) -> Result<Vec<Motorcycle>> {
    let mut reader = reader_for(data);
    let columns = ColumnMap::new(reader.headers()?.clone());

    let mut motorcycles = Vec::new();
    for result in reader.records() {
        let record = result?;
        motorcycles.push(Motorcycle {
            crsp: columns.price(&record, "CRSP"),
            engine_capacity: columns.count(&record, "EngineCapacity"),
            fuel: columns.text(&record, "Fuel"),
            make: columns.text(&record, "Make"),
            model: columns.text(&record, "Model"),
            model_number: columns.text(&record, "ModelNumber"),
            transmission: columns.text(&record, "Transmission"),
            seating: columns.count(&record, "Seating"),
        });
    }

    log::info!("loaded {} motorcycle records", motorcycles.len());
    Ok(motorcycles)
}

/// Load motorcycle records from a CSV file
pub fn load_motorcycles_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Motorcycle>> {
    let data = fs::read_to_string(path)?;
    load_motorcycles(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VEHICLE_HEADER: &str =
        "Make,Model,ModelNumber,BodyType,Fuel,Transmission,DriveConfiguration,EngineCapacity,Seating,GVW,CRSP";

    #[test]
    fn test_load_vehicles_basic() {
        let data = format!(
            "{VEHICLE_HEADER}\nToyota,Vitz,KSP130,Hatchback,Petrol,Automatic,2WD,1300,5,1565,\"1,500,000\"\n"
        );
        let vehicles = load_vehicles(&data).unwrap();

        assert_eq!(vehicles.len(), 1);
        let v = &vehicles[0];
        assert_eq!(v.make.as_deref(), Some("Toyota"));
        assert_eq!(v.model.as_deref(), Some("Vitz"));
        assert_eq!(v.crsp, Some(1_500_000.0));
        assert_eq!(v.gvw, Some(1565));
        assert_eq!(v.seating, Some(5));
    }

    #[test]
    fn test_unparsable_numbers_become_missing() {
        let data = format!("{VEHICLE_HEADER}\nToyota,Vitz,,,,,,1300,n/a,TBD,POA\n");
        let vehicles = load_vehicles(&data).unwrap();

        let v = &vehicles[0];
        assert_eq!(v.crsp, None);
        assert_eq!(v.gvw, None);
        assert_eq!(v.seating, None);
        // Engine capacity stays text and survives as-is
        assert_eq!(v.engine_capacity.as_deref(), Some("1300"));
    }

    #[test]
    fn test_blank_fields_become_none() {
        let data = format!("{VEHICLE_HEADER}\n,Vitz,,  ,Petrol,,,,,,\n");
        let vehicles = load_vehicles(&data).unwrap();

        let v = &vehicles[0];
        assert_eq!(v.make, None);
        assert_eq!(v.body_type, None);
        assert_eq!(v.fuel.as_deref(), Some("Petrol"));
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let data = format!("{VEHICLE_HEADER}\nToyota,Vitz\nNissan,Note,E12,Hatchback,Petrol,CVT,2WD,1200,5,1490,\"1,200,000\",extra\n");
        let vehicles = load_vehicles(&data).unwrap();

        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].fuel, None);
        assert_eq!(vehicles[1].crsp, Some(1_200_000.0));
    }

    #[test]
    fn test_empty_rows_are_skipped() {
        let data = format!("{VEHICLE_HEADER}\nToyota,Vitz,,,,,,,,,\n\n\nNissan,Note,,,,,,,,,\n");
        let vehicles = load_vehicles(&data).unwrap();
        assert_eq!(vehicles.len(), 2);
    }

    #[test]
    fn test_hash_prefixed_line_is_data() {
        let data = format!("{VEHICLE_HEADER}\n#Make,Special,,,,,,,,,\n");
        let vehicles = load_vehicles(&data).unwrap();

        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].make.as_deref(), Some("#Make"));
    }

    #[test]
    fn test_missing_column_yields_none() {
        let data = "Make,Model\nToyota,Vitz\n";
        let vehicles = load_vehicles(data).unwrap();

        assert_eq!(vehicles[0].make.as_deref(), Some("Toyota"));
        assert_eq!(vehicles[0].crsp, None);
        assert_eq!(vehicles[0].body_type, None);
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let data = "Make,Model,CRSP\n\"Mercedes, Benz\",C200,\"5,250,000\"\n";
        let vehicles = load_vehicles(data).unwrap();

        assert_eq!(vehicles[0].make.as_deref(), Some("Mercedes, Benz"));
        assert_eq!(vehicles[0].crsp, Some(5_250_000.0));
    }

    #[test]
    fn test_load_motorcycles_basic() {
        let data = "Make,Model,ModelNumber,Fuel,Transmission,EngineCapacity,Seating,CRSP\n\
                    Honda,CB125,JC75,Petrol,Manual,125,2,\"185,000\"\n";
        let bikes = load_motorcycles(data).unwrap();

        assert_eq!(bikes.len(), 1);
        let b = &bikes[0];
        assert_eq!(b.make.as_deref(), Some("Honda"));
        assert_eq!(b.engine_capacity, Some(125));
        assert_eq!(b.crsp, Some(185_000.0));
    }

    #[test]
    fn test_load_vehicles_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{VEHICLE_HEADER}").unwrap();
        writeln!(file, "Toyota,Fielder,NZE161,Wagon,Petrol,CVT,2WD,1500,5,1640,\"1,800,000\"")
            .unwrap();

        let vehicles = load_vehicles_from_path(file.path()).unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].model.as_deref(), Some("Fielder"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_vehicles_from_path("/nonexistent/vehicles.csv");
        assert!(result.is_err());
    }
}
