// 📂 Record Source - CSV → RawOrder
// Reads the delimited order file and yields raw string records

use crate::schema::OrderSchema;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// RAW ORDER
// ============================================================================

/// One row of the order file, every field still a string.
/// Immutable once read; normalization produces a typed copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOrder {
    #[serde(rename = "InvoiceNo")]
    pub invoice_no: String,

    #[serde(rename = "InvoiceDate")]
    pub invoice_date: String,

    #[serde(rename = "Quantity")]
    pub quantity: String,

    #[serde(rename = "UnitPrice")]
    pub unit_price: String,

    #[serde(rename = "CustomerID")]
    pub customer_id: String,

    #[serde(rename = "Country")]
    pub country: String,

    /// Provenance: 1-based physical line in the source file (header = 1).
    /// Not a CSV column; filled in by the reader.
    #[serde(skip)]
    pub line_number: usize,
}

// ============================================================================
// LOADERS
// ============================================================================

/// Strict load: open the file, validate the header against the standard
/// schema, deserialize every row. Any failure is propagated.
pub fn read_orders(csv_path: &Path) -> Result<Vec<RawOrder>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open order file {}", csv_path.display()))?;

    let headers = rdr.headers().context("Failed to read CSV header row")?;
    if let Err(errors) = OrderSchema::standard().validate_headers(headers) {
        let summary: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(anyhow!("Invalid order file header: {}", summary.join("; ")));
    }

    let mut orders = Vec::new();

    for (row_index, result) in rdr.deserialize().enumerate() {
        let mut order: RawOrder = result
            .with_context(|| format!("Failed to deserialize order at line {}", row_index + 2))?;

        // Header is line 1, first data row is line 2
        order.line_number = row_index + 2;
        orders.push(order);
    }

    Ok(orders)
}

/// Boundary-recovering load: on any read failure, emit a diagnostic to
/// stderr and return an empty data set. Downstream stages must tolerate
/// empty-result semantics (zero total, empty breakdown).
pub fn load_orders(csv_path: &Path) -> Vec<RawOrder> {
    match read_orders(csv_path) {
        Ok(orders) => orders,
        Err(e) => {
            eprintln!("❌ Failed to load order data: {:#}", e);
            Vec::new()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
InvoiceNo,InvoiceDate,Quantity,UnitPrice,CustomerID,Country
536365,12/01/2010 08:26,6,2.55,17850,United Kingdom
536366,12/01/2010 08:28,10,1.85,17850,United Kingdom
536367,12/12/2010 10:03,32,1.69,13047,USA
";

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("retail-revenue-{}-{}.csv", std::process::id(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_orders_parses_rows() {
        let path = write_temp("parses-rows", SAMPLE);
        let orders = read_orders(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].invoice_no, "536365");
        assert_eq!(orders[0].country, "United Kingdom");
        assert_eq!(orders[2].quantity, "32");
        assert_eq!(orders[2].country, "USA");
    }

    #[test]
    fn test_read_orders_sets_line_numbers() {
        let path = write_temp("line-numbers", SAMPLE);
        let orders = read_orders(&path).unwrap();
        std::fs::remove_file(&path).ok();

        // Header occupies line 1
        assert_eq!(orders[0].line_number, 2);
        assert_eq!(orders[2].line_number, 4);
    }

    #[test]
    fn test_read_orders_missing_file() {
        let result = read_orders(Path::new("/nonexistent/orders.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_orders_rejects_bad_header() {
        let path = write_temp("bad-header", "InvoiceNo,Quantity,Country\n1,2,UK\n");
        let result = read_orders(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("UnitPrice"));
    }

    #[test]
    fn test_load_orders_recovers_to_empty() {
        let orders = load_orders(Path::new("/nonexistent/orders.csv"));
        assert!(orders.is_empty());
    }
}
