//! Walkthrough of the NaN-skipping reductions
//!
//! Run with `RUST_LOG=warn cargo run --example reductions_demo` to see the
//! all-NaN warning emitted by `sum`.

use nan_core::prelude::*;
use nan_core::{math, ordering, reduce, stats};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let readings = vec![12.5, f64::NAN, 11.0, 13.25, f64::NAN, 12.0];
    println!("readings: {readings:?}");
    println!("  sum     = {}", reduce::sum(readings.iter().copied()));
    println!("  mean    = {:?}", reduce::mean_count(readings.iter().copied()));
    println!("  extrema = {:?}", reduce::extrema(readings.iter().copied()));
    println!("  var     = {:.6}", stats::var(readings.iter().copied()));
    println!("  std     = {:.6}", stats::std(readings.iter().copied()));
    println!("  median  = {}", stats::median(readings.iter().copied()));

    println!("scalar ordering:");
    println!("  min(NaN, 0.0)  = {}", ordering::min(f64::NAN, 0.0));
    println!("  max(-0.0, 0.0) = {}", ordering::max(-0.0f64, 0.0));
    println!("  sqrt(-1.0)     = {}", math::sqrt(-1.0f64));

    // Accumulation mode can come from the environment, e.g. NAN_STATS_ACCUMULATION=compensated
    let accumulation: Accumulation = std::env::var("NAN_STATS_ACCUMULATION")
        .unwrap_or_else(|_| "sequential".to_string())
        .parse()?;
    let reducer = ReductionConfig::new().with_accumulation(accumulation).reducer();
    let tiny = [1.0, 1e100, 1.0, -1e100];
    println!(
        "{} sum of {tiny:?} = {}",
        NanPrimitives::<f64>::backend_name(&reducer),
        reducer.sum(tiny)
    );

    println!("all-NaN sum (expect a warning above or below):");
    println!("  sum = {}", reduce::sum([f64::NAN, f64::NAN]));

    Ok(())
}
