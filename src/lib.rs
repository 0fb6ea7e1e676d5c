use std::{
    collections::HashSet,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidSensorText(String),
    NonRasterizableSegment(Point, Point),
    NoUncoveredPosition,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidSensorText(s) => write!(f, "Invalid text({}) for sensor.", s),
            Error::NonRasterizableSegment(from, to) => write!(
                f,
                "Segment from {} to {} is neither axis-aligned nor diagonal, can't rasterize it.",
                from, to
            ),
            Error::NoUncoveredPosition => write!(f, "No uncovered position in the search area."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct Part1CLIArgs {
    pub row: i64,
    pub input_path: PathBuf,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    pub search_dim: i64,
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: i64,
    y: i64,
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn taxicab_distance_to(&self, other: &Point) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn line_to(&self, other: &Point) -> std::result::Result<Vec<Point>, Error> {
        let diff_x = other.x - self.x;
        let diff_y = other.y - self.y;
        if diff_x != 0 && diff_y != 0 && diff_x.abs() != diff_y.abs() {
            return Err(Error::NonRasterizableSegment(*self, *other));
        }

        let step_x = diff_x.signum();
        let step_y = diff_y.signum();
        let step_n = diff_x.abs().max(diff_y.abs());
        let mut points = Vec::with_capacity(usize::try_from(step_n).unwrap() + 1);
        for i in 0..=step_n {
            points.push(Point::new(self.x + step_x * i, self.y + step_y * i));
        }

        Ok(points)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sensor {
    position: Point,
    beacon: Point,
    radius: u64,
}

impl TryFrom<&str> for Sensor {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static SENSOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^Sensor at x=([-+]?\d+), y=([-+]?\d+): closest beacon is at x=([-+]?\d+), y=([-+]?\d+)$",
            )
            .unwrap()
        });

        if let Some(caps) = SENSOR_PATTERN.captures(value) {
            let coord = |ind: usize| {
                caps[ind]
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidSensorText(value.to_string()))
            };
            Ok(Sensor::new(
                Point::new(coord(1)?, coord(2)?),
                Point::new(coord(3)?, coord(4)?),
            ))
        } else {
            Err(Error::InvalidSensorText(value.to_string()))
        }
    }
}

impl Sensor {
    pub fn new(position: Point, beacon: Point) -> Self {
        let radius = position.taxicab_distance_to(&beacon);
        Self {
            position,
            beacon,
            radius,
        }
    }

    pub fn position(&self) -> &Point {
        &self.position
    }

    pub fn beacon(&self) -> &Point {
        &self.beacon
    }

    pub fn radius(&self) -> u64 {
        self.radius
    }

    pub fn in_range(&self, p: &Point) -> bool {
        self.position.taxicab_distance_to(p) <= self.radius
    }

    pub fn row_interval(&self, row: i64) -> Option<RangeInclusive<i64>> {
        let row_offset = self.position.y.abs_diff(row);
        if row_offset > self.radius {
            return None;
        }

        // A row grazing the diamond's tip still covers one cell.
        let half_width = i64::try_from(self.radius - row_offset).unwrap();
        Some((self.position.x - half_width)..=(self.position.x + half_width))
    }

    pub fn outside_boundary(&self) -> std::result::Result<Vec<Point>, Error> {
        let reach = i64::try_from(self.radius).unwrap() + 1;
        let top = Point::new(self.position.x, self.position.y - reach);
        let bottom = Point::new(self.position.x, self.position.y + reach);
        let left = Point::new(self.position.x - reach, self.position.y);
        let right = Point::new(self.position.x + reach, self.position.y);

        let mut points = top.line_to(&left)?;
        points.extend(top.line_to(&right)?);
        points.extend(left.line_to(&bottom)?);
        points.extend(right.line_to(&bottom)?);

        Ok(points)
    }
}

pub fn read_sensors<P: AsRef<Path>>(path: P) -> Result<Vec<Sensor>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut sensors = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if s.starts_with('#') {
            continue;
        }

        let sensor = Sensor::try_from(s.as_str()).with_context(|| {
            format!(
                "Failed to read sensor from line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        sensors.push(sensor);
    }

    Ok(sensors)
}

pub fn merged_row_intervals(sensors: &[Sensor], row: i64) -> Vec<RangeInclusive<i64>> {
    let mut intervals = sensors
        .iter()
        .filter_map(|s| s.row_interval(row))
        .collect::<Vec<_>>();
    intervals.sort_by_key(|interval| *interval.start());

    let mut merged: Vec<RangeInclusive<i64>> = Vec::new();
    for interval in intervals {
        match merged.last_mut() {
            // Adjacent intervals coalesce too, so a seam between merged
            // intervals always holds an uncovered position.
            Some(last) if *interval.start() <= *last.end() + 1 => {
                if interval.end() > last.end() {
                    *last = *last.start()..=*interval.end();
                }
            }
            _ => merged.push(interval),
        }
    }

    merged
}

pub fn count_excluded_in_row(sensors: &[Sensor], row: i64) -> u64 {
    let covered_n = merged_row_intervals(sensors, row)
        .iter()
        .map(|interval| interval.end().abs_diff(*interval.start()) + 1)
        .sum::<u64>();
    let beacon_n = sensors
        .iter()
        .map(Sensor::beacon)
        .filter(|b| b.y() == row)
        .collect::<HashSet<_>>()
        .len();

    covered_n - u64::try_from(beacon_n).unwrap()
}

pub fn find_uncovered_point(
    sensors: &[Sensor],
    limit: RangeInclusive<i64>,
) -> std::result::Result<Point, Error> {
    for row in limit.clone() {
        let mut x = *limit.start();
        for interval in merged_row_intervals(sensors, row) {
            if *interval.end() < x {
                continue;
            }

            if *interval.start() > x {
                break;
            }

            x = *interval.end() + 1;
            if x > *limit.end() {
                break;
            }
        }

        if x <= *limit.end() {
            return Ok(Point::new(x, row));
        }
    }

    Err(Error::NoUncoveredPosition)
}

pub fn tuning_frequency(p: &Point) -> i64 {
    const TUNING_FREQUENCY_MULTIPLIER: i64 = 4_000_000;

    p.x * TUNING_FREQUENCY_MULTIPLIER + p.y
}
