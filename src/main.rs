use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

use retail_revenue::{
    load_orders, render_summary, summary_json, AggregatorConfig, MalformedFieldPolicy, Normalizer,
    RevenueAggregator, UpdateSemantics,
};

const DEFAULT_DATA_PATH: &str = "data/orders.csv";

struct Options {
    csv_path: PathBuf,
    policy: MalformedFieldPolicy,
    semantics: UpdateSemantics,
    json: bool,
}

fn parse_args() -> Options {
    let mut options = Options {
        csv_path: PathBuf::from(DEFAULT_DATA_PATH),
        policy: MalformedFieldPolicy::Reject,
        semantics: UpdateSemantics::Corrected,
        json: false,
    };

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--legacy-totals" => options.semantics = UpdateSemantics::LegacyCompat,
            "--zero-malformed" => options.policy = MalformedFieldPolicy::SubstituteZero,
            "--json" => options.json = true,
            path => options.csv_path = PathBuf::from(path),
        }
    }

    options
}

fn main() -> Result<()> {
    let options = parse_args();

    println!("🧾 Retail Revenue - per-country order aggregation");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load raw records (a missing file logs a diagnostic and yields an
    //    empty set; the run continues with vacuous results)
    println!("\n📂 Loading {}...", options.csv_path.display());
    let raw = load_orders(Path::new(&options.csv_path));
    println!("✓ Loaded {} raw records", raw.len());

    // 2. Normalize
    let normalizer = Normalizer::new(options.policy);
    let outcome = normalizer.normalize_all(&raw);
    println!(
        "✓ Normalized {} orders ({} rejected, {} warnings)",
        outcome.accepted_count(),
        outcome.rejected_count(),
        outcome.warnings.len()
    );
    for rejection in &outcome.rejections {
        eprintln!("⚠️  {}", rejection.summary());
    }
    for warning in &outcome.warnings {
        eprintln!(
            "⚠️  line {}: {} = {:?} ({})",
            warning.line_number, warning.field, warning.value, warning.message
        );
    }

    // 3. Aggregate
    let aggregator = RevenueAggregator::new(AggregatorConfig {
        semantics: options.semantics,
        ..AggregatorConfig::default()
    });
    let summary = aggregator.summarize(&outcome.orders);

    // 4. Report
    println!("\n💰 Revenue per country");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if options.json {
        println!("{}", summary_json(&summary)?);
    } else {
        print!("{}", render_summary(&summary));
    }

    Ok(())
}
