// Retail Revenue - Core Library
// CSV order ingestion, field normalization, per-country revenue aggregation

pub mod schema;
pub mod source;
pub mod normalize;
pub mod aggregate;
pub mod queries;
pub mod report;

// Re-export commonly used types
pub use schema::{FieldSpec, FieldType, OrderSchema, SchemaError};
pub use source::{load_orders, read_orders, RawOrder};
pub use normalize::{
    FieldWarning, MalformedFieldPolicy, NormalizeOutcome, Normalizer, Order, Rejection, Severity,
};
pub use aggregate::{
    AggregatorConfig, CountryRevenue, RevenueAggregator, RevenueLedger, RevenueSummary,
    RoundingMode, UpdateSemantics,
};
pub use queries::{
    all_invoice_numbers_present, first_order_on_date, has_orders_from, high_quantity_orders,
    HIGH_QUANTITY_THRESHOLD,
};
pub use report::{render_summary, summary_json};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
