use std::time::Instant;

use anyhow::{Context, Result};
use beacon_scan::Part2CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = Part2CLIArgs::parse();
    let sensors = beacon_scan::read_sensors(&args.input_path).with_context(|| {
        format!(
            "Failed to read sensors from given file({}).",
            args.input_path.display()
        )
    })?;

    let start = Instant::now();
    let point = beacon_scan::find_uncovered_point(&sensors, 0..=args.search_dim).with_context(
        || {
            format!(
                "Failed to find a position left uncovered within 0..={} on both axes.",
                args.search_dim
            )
        },
    )?;
    println!(
        "The distress beacon at {} has tuning frequency {}, found in {} ms.",
        point,
        beacon_scan::tuning_frequency(&point),
        start.elapsed().as_millis()
    );

    Ok(())
}
