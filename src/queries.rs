// 🔎 Order Queries - filter / find / some / every over the order set

use crate::normalize::Order;
use crate::source::RawOrder;

/// Reference threshold for a "high quantity" order
pub const HIGH_QUANTITY_THRESHOLD: f64 = 50.0;

/// All orders at or above the quantity threshold, in input order
pub fn high_quantity_orders(orders: &[Order], min_quantity: f64) -> Vec<&Order> {
    orders
        .iter()
        .filter(|order| order.quantity >= min_quantity)
        .collect()
}

/// First order whose invoice date contains the given date text.
/// The date is matched as a raw substring, so "12/12/2010" matches
/// "12/12/2010 10:03".
pub fn first_order_on_date<'a>(orders: &'a [Order], date: &str) -> Option<&'a Order> {
    orders.iter().find(|order| order.invoice_date.contains(date))
}

/// Whether any order came from the given country.
/// False over an empty order set.
pub fn has_orders_from(orders: &[Order], country: &str) -> bool {
    orders.iter().any(|order| order.country == country)
}

/// Whether every raw row carries a non-empty invoice number.
/// True over an empty record set.
pub fn all_invoice_numbers_present(records: &[RawOrder]) -> bool {
    records.iter().all(|record| !record.invoice_no.trim().is_empty())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn order(quantity: f64, invoice_date: &str, country: &str) -> Order {
        Order {
            invoice_no: 536365,
            invoice_date: invoice_date.to_string(),
            quantity,
            unit_price: 2.55,
            customer_id: 17850,
            country: country.to_string(),
            line_number: 2,
        }
    }

    fn raw(invoice_no: &str) -> RawOrder {
        RawOrder {
            invoice_no: invoice_no.to_string(),
            invoice_date: "12/01/2010 08:26".to_string(),
            quantity: "6".to_string(),
            unit_price: "2.55".to_string(),
            customer_id: "17850".to_string(),
            country: "United Kingdom".to_string(),
            line_number: 2,
        }
    }

    #[test]
    fn test_high_quantity_filter() {
        let orders = vec![
            order(6.0, "12/01/2010 08:26", "UK"),
            order(50.0, "12/01/2010 08:28", "UK"),
            order(120.0, "12/02/2010 09:00", "USA"),
        ];

        let high = high_quantity_orders(&orders, HIGH_QUANTITY_THRESHOLD);
        assert_eq!(high.len(), 2);
        assert_eq!(high[0].quantity, 50.0);
        assert_eq!(high[1].quantity, 120.0);
    }

    #[test]
    fn test_find_order_by_date_substring() {
        let orders = vec![
            order(6.0, "12/01/2010 08:26", "UK"),
            order(9.0, "12/12/2010 10:03", "USA"),
            order(4.0, "12/12/2010 14:41", "UK"),
        ];

        let found = first_order_on_date(&orders, "12/12/2010").unwrap();
        assert_eq!(found.quantity, 9.0);

        assert!(first_order_on_date(&orders, "01/05/2011").is_none());
    }

    #[test]
    fn test_has_orders_from_compares_country() {
        let orders = vec![
            order(6.0, "12/01/2010 08:26", "United Kingdom"),
            order(9.0, "12/12/2010 10:03", "United States of America"),
        ];

        assert!(has_orders_from(&orders, "United States of America"));
        assert!(!has_orders_from(&orders, "Portugal"));
    }

    #[test]
    fn test_every_invoice_number_present() {
        assert!(all_invoice_numbers_present(&[raw("536365"), raw("536366")]));
        assert!(!all_invoice_numbers_present(&[raw("536365"), raw("  ")]));
    }

    #[test]
    fn test_degenerate_empty_input_semantics() {
        // some over nothing is false, every over nothing is true
        assert!(!has_orders_from(&[], "USA"));
        assert!(all_invoice_numbers_present(&[]));
        assert!(high_quantity_orders(&[], HIGH_QUANTITY_THRESHOLD).is_empty());
        assert!(first_order_on_date(&[], "12/12/2010").is_none());
    }
}
