use std::time::Instant;

use anyhow::{Context, Result};
use beacon_scan::Part1CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = Part1CLIArgs::parse();
    let sensors = beacon_scan::read_sensors(&args.input_path).with_context(|| {
        format!(
            "Failed to read sensors from given file({}).",
            args.input_path.display()
        )
    })?;

    let start = Instant::now();
    let excluded_n = beacon_scan::count_excluded_in_row(&sensors, args.row);
    println!(
        "There are {} position(s) in row {} that can't contain a beacon, counted in {} ms.",
        excluded_n,
        args.row,
        start.elapsed().as_millis()
    );

    Ok(())
}
