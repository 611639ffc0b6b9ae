//! Keyed search over sensor readings with gaps
//!
//! Run with `RUST_LOG=debug cargo run --example keyed_search_demo` to see the
//! empty-domain event.

use nan_search::{argmax_by, argmin, findmax, findmin, findmin_by};
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let temperatures = [21.5, f64::NAN, 19.0, 19.0, 23.25];
    let keyed = || temperatures.iter().copied().enumerate();

    let (coldest, at) = findmin(keyed())?;
    println!("coldest reading {coldest} at index {at}");
    let (hottest, at) = findmax(keyed())?;
    println!("hottest reading {hottest} at index {at}");
    let (deviation, at) = findmin_by(|t: f64| (t - 21.0).abs(), keyed())?;
    println!("closest to 21.0: off by {deviation} at index {at}");

    let mut stations = BTreeMap::new();
    stations.insert("north", Some(12.0));
    stations.insert("south", None);
    stations.insert("west", Some(f64::NAN));
    let first_gap = argmin(stations.iter().map(|(name, t)| (*name, *t)))?;
    println!("first station with no data: {first_gap}");

    let swing = argmax_by(|t: &f64| (t - 20.0).abs(), temperatures)?;
    println!("largest swing from 20.0: {swing}");

    if let Err(err) = findmin(std::iter::empty::<(usize, f64)>()) {
        println!("empty domain: {err}");
    }

    Ok(())
}
