// 💰 Revenue Aggregator - per-country revenue fold + total revenue scalar
// Explicit accumulator, first-seen country ordering, two-decimal rounding

use crate::normalize::Order;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// CONFIG
// ============================================================================

/// When the running totals are rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round after every addition (reference behavior; small roundings
    /// compound and can differ from a single final rounding)
    #[default]
    PerStep,
    /// Round once, after the fold completes
    AtEnd,
}

/// How the per-country update step computes a line total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateSemantics {
    /// Insert and update both use the current order's quantity × unit price
    #[default]
    Corrected,
    /// Compatibility mode reproducing the reference defect: the update
    /// branch adds a not-a-number line total, so every country total is
    /// poisoned after that country's first order
    LegacyCompat,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregatorConfig {
    pub rounding: RoundingMode,
    pub semantics: UpdateSemantics,
}

// ============================================================================
// COUNTRY REVENUE
// ============================================================================

/// Accumulated revenue for one country.
/// At most one entity exists per distinct country value; the first order
/// for a country creates it, later orders mutate it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRevenue {
    pub country: String,
    pub revenue: f64,
}

/// Full aggregation result for one pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub total_revenue: f64,
    pub by_country: Vec<CountryRevenue>,
}

// ============================================================================
// REVENUE LEDGER (the fold accumulator)
// ============================================================================

/// Explicit accumulator for the per-country fold: an ordered entity list
/// plus a country → index map so lookup stays near-constant while
/// first-seen ordering is preserved.
#[derive(Debug, Clone, Default)]
pub struct RevenueLedger {
    entries: Vec<CountryRevenue>,
    index: HashMap<String, usize>,
}

impl RevenueLedger {
    pub fn new() -> Self {
        RevenueLedger::default()
    }

    /// One fold step. A pure function of the current order and the matching
    /// accumulator entry; nothing from prior iterations leaks in.
    pub fn fold(&mut self, order: &Order, config: AggregatorConfig) {
        match self.index.get(&order.country) {
            None => {
                let revenue = match config.rounding {
                    RoundingMode::PerStep => round_cents(order.line_total()),
                    RoundingMode::AtEnd => order.line_total(),
                };
                self.index.insert(order.country.clone(), self.entries.len());
                self.entries.push(CountryRevenue {
                    country: order.country.clone(),
                    revenue,
                });
            }
            Some(&position) => {
                let line_total = match config.semantics {
                    UpdateSemantics::Corrected => order.line_total(),
                    UpdateSemantics::LegacyCompat => f64::NAN,
                };
                let entry = &mut self.entries[position];
                entry.revenue = match config.rounding {
                    RoundingMode::PerStep => round_cents(entry.revenue + line_total),
                    RoundingMode::AtEnd => entry.revenue + line_total,
                };
            }
        }
    }

    /// Consume the ledger, yielding entities in first-seen-country order
    pub fn into_entries(self, config: AggregatorConfig) -> Vec<CountryRevenue> {
        match config.rounding {
            RoundingMode::PerStep => self.entries,
            RoundingMode::AtEnd => self
                .entries
                .into_iter()
                .map(|entry| CountryRevenue {
                    revenue: round_cents(entry.revenue),
                    country: entry.country,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// AGGREGATOR
// ============================================================================

pub struct RevenueAggregator {
    config: AggregatorConfig,
}

impl RevenueAggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        RevenueAggregator { config }
    }

    /// Scalar fold across all orders, independent of the per-country fold
    pub fn total_revenue(&self, orders: &[Order]) -> f64 {
        let total = orders.iter().fold(0.0_f64, |acc, order| {
            match self.config.rounding {
                RoundingMode::PerStep => round_cents(acc + order.line_total()),
                RoundingMode::AtEnd => acc + order.line_total(),
            }
        });

        match self.config.rounding {
            RoundingMode::PerStep => total,
            RoundingMode::AtEnd => round_cents(total),
        }
    }

    /// Per-country fold, processing orders in input order
    pub fn revenue_by_country(&self, orders: &[Order]) -> Vec<CountryRevenue> {
        let mut ledger = RevenueLedger::new();
        for order in orders {
            ledger.fold(order, self.config);
        }
        ledger.into_entries(self.config)
    }

    pub fn summarize(&self, orders: &[Order]) -> RevenueSummary {
        RevenueSummary {
            total_revenue: self.total_revenue(orders),
            by_country: self.revenue_by_country(orders),
        }
    }
}

impl Default for RevenueAggregator {
    fn default() -> Self {
        RevenueAggregator::new(AggregatorConfig::default())
    }
}

/// Two-decimal monetary rounding
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================
