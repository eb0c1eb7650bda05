// 📐 Order Schema - field names and target types for the input file
// Validates the CSV header once, before any row is normalized

use csv::StringRecord;

// ============================================================================
// FIELD TYPES
// ============================================================================

/// Target type a raw string field is normalized into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Stays a string (country, invoice date)
    Text,
    /// Whole-number identifier (invoice number, customer id)
    Integer,
    /// Decimal quantity or money amount
    Decimal,
}

impl FieldType {
    pub fn name(&self) -> &str {
        match self {
            FieldType::Text => "Text",
            FieldType::Integer => "Integer",
            FieldType::Decimal => "Decimal",
        }
    }
}

/// One column of the input schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

// ============================================================================
// SCHEMA ERRORS
// ============================================================================

#[derive(Debug, Clone)]
pub struct SchemaError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for SchemaError {}

// ============================================================================
// ORDER SCHEMA
// ============================================================================

/// The fixed column schema of a retail order file
pub struct OrderSchema {
    fields: Vec<FieldSpec>,
}

impl OrderSchema {
    /// Standard retail order columns
    pub fn standard() -> Self {
        OrderSchema {
            fields: vec![
                FieldSpec { name: "InvoiceNo", field_type: FieldType::Integer, required: true },
                FieldSpec { name: "InvoiceDate", field_type: FieldType::Text, required: true },
                FieldSpec { name: "Quantity", field_type: FieldType::Decimal, required: true },
                FieldSpec { name: "UnitPrice", field_type: FieldType::Decimal, required: true },
                FieldSpec { name: "CustomerID", field_type: FieldType::Integer, required: true },
                FieldSpec { name: "Country", field_type: FieldType::Text, required: true },
            ],
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Columns that are normalized into numbers
    pub fn numeric_fields(&self) -> Vec<&FieldSpec> {
        self.fields
            .iter()
            .filter(|f| f.field_type != FieldType::Text)
            .collect()
    }

    /// Check that every required column appears in the header row.
    /// Extra columns are tolerated; missing ones are reported per field.
    pub fn validate_headers(&self, headers: &StringRecord) -> Result<(), Vec<SchemaError>> {
        let mut errors = Vec::new();

        for field in &self.fields {
            if !field.required {
                continue;
            }

            let present = headers.iter().any(|h| h.trim() == field.name);
            if !present {
                errors.push(SchemaError {
                    field: field.name.to_string(),
                    message: format!(
                        "Required column missing from header ({})",
                        field.field_type.name()
                    ),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for OrderSchema {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn full_header() -> StringRecord {
        StringRecord::from(vec![
            "InvoiceNo",
            "InvoiceDate",
            "Quantity",
            "UnitPrice",
            "CustomerID",
            "Country",
        ])
    }

    #[test]
    fn test_validate_headers_complete() {
        let schema = OrderSchema::standard();
        assert!(schema.validate_headers(&full_header()).is_ok());
    }

    #[test]
    fn test_validate_headers_missing_column() {
        let schema = OrderSchema::standard();
        let headers = StringRecord::from(vec!["InvoiceNo", "InvoiceDate", "Quantity", "Country"]);

        let result = schema.validate_headers(&headers);
        assert!(result.is_err());

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "UnitPrice"));
        assert!(errors.iter().any(|e| e.field == "CustomerID"));
    }

    #[test]
    fn test_validate_headers_tolerates_extra_and_whitespace() {
        let schema = OrderSchema::standard();
        let headers = StringRecord::from(vec![
            "InvoiceNo",
            "StockCode",
            "Description",
            " InvoiceDate ",
            "Quantity",
            "UnitPrice",
            "CustomerID",
            "Country",
        ]);

        assert!(schema.validate_headers(&headers).is_ok());
    }

    #[test]
    fn test_numeric_fields() {
        let schema = OrderSchema::standard();
        let numeric: Vec<&str> = schema.numeric_fields().iter().map(|f| f.name).collect();

        assert_eq!(numeric, vec!["InvoiceNo", "Quantity", "UnitPrice", "CustomerID"]);
    }

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError {
            field: "Quantity".to_string(),
            message: "Required column missing from header (Decimal)".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Quantity: Required column missing from header (Decimal)"
        );
    }
}
