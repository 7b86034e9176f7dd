// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV decoding for per-parcel timestacks.
//!
//! The backend serves one CSV per parcel: a header naming metadata columns
//! (`Week`, `Date`, `Sensor`), quality-flag columns (`Cloud Cover`, `Haze`,
//! `Cloud shadow`), and per-point band columns (`P1NIR`, `P1R`, `P2NIR`, …).
//! The grid is unquoted, so decoding is a header-indexed comma split.
//!
//! Dates come as `day/month` with no year; the caller supplies the season
//! year.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::sample::{Observation, PointSample, QualityFlags};

const WEEK: &str = "Week";
const DATE: &str = "Date";
const SENSOR: &str = "Sensor";
const CLOUD_COVER: &str = "Cloud Cover";
const HAZE: &str = "Haze";
const CLOUD_SHADOW: &str = "Cloud shadow";

/// A timestack decoding failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestackError {
    /// The input has no header or no data rows.
    #[error("timestack is empty")]
    Empty,
    /// A required column is missing from the header.
    #[error("missing column `{0}`")]
    MissingColumn(String),
    /// A data row has the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    BadArity {
        /// 1-based line number.
        line: usize,
        /// Field count the header promises.
        expected: usize,
        /// Field count found.
        found: usize,
    },
    /// A numeric field failed to parse.
    #[error("line {line}: bad number in column `{column}`")]
    BadNumber {
        /// 1-based line number.
        line: usize,
        /// Offending column.
        column: String,
    },
    /// A date field failed to parse.
    #[error("line {line}: bad date `{value}`")]
    BadDate {
        /// 1-based line number.
        line: usize,
        /// Offending field text.
        value: String,
    },
}

/// Splits a `P<index><band>` header into its point index and band name.
fn split_point_column(header: &str) -> Option<(u32, &str)> {
    let rest = header.strip_prefix('P')?;
    let digits_end = rest.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let index = rest[..digits_end].parse().ok()?;
    Some((index, &rest[digits_end..]))
}

/// Decodes a timestack CSV into observations, row order preserved.
///
/// `year` is the season the day/month dates belong to.
pub fn decode_observations(csv: &str, year: i32) -> Result<Vec<Observation>, TimestackError> {
    let mut lines = csv
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next().ok_or(TimestackError::Empty)?;
    let header: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let column = |name: &str| -> Result<usize, TimestackError> {
        header
            .iter()
            .position(|h| *h == name)
            .ok_or_else(|| TimestackError::MissingColumn(name.to_string()))
    };
    let week_col = column(WEEK)?;
    let date_col = column(DATE)?;
    let sensor_col = column(SENSOR)?;
    let flag_cols = [column(CLOUD_COVER)?, column(HAZE)?, column(CLOUD_SHADOW)?];

    // Point columns grouped by index, preserving band order within a point.
    let mut point_cols: BTreeMap<u32, Vec<(String, usize)>> = BTreeMap::new();
    for (col, name) in header.iter().enumerate() {
        if let Some((index, band)) = split_point_column(name) {
            point_cols
                .entry(index)
                .or_default()
                .push((band.to_string(), col));
        }
    }

    let mut observations = Vec::new();
    for (line_idx, line) in lines {
        let line_no = line_idx + 1;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != header.len() {
            return Err(TimestackError::BadArity {
                line: line_no,
                expected: header.len(),
                found: fields.len(),
            });
        }

        let number = |col: usize| -> Result<f64, TimestackError> {
            fields[col]
                .parse()
                .map_err(|_| TimestackError::BadNumber {
                    line: line_no,
                    column: header[col].to_string(),
                })
        };

        let week: u32 = fields[week_col]
            .parse()
            .map_err(|_| TimestackError::BadNumber {
                line: line_no,
                column: WEEK.to_string(),
            })?;
        let date = parse_date(fields[date_col], year).ok_or_else(|| TimestackError::BadDate {
            line: line_no,
            value: fields[date_col].to_string(),
        })?;
        let flags = QualityFlags {
            cloud_cover: number(flag_cols[0])? != 0.0,
            haze: number(flag_cols[1])? != 0.0,
            cloud_shadow: number(flag_cols[2])? != 0.0,
        };

        let mut points = Vec::with_capacity(point_cols.len());
        for (index, bands) in &point_cols {
            let mut sampled = Vec::with_capacity(bands.len());
            for (band, col) in bands {
                sampled.push((band.clone(), number(*col)?));
            }
            points.push(PointSample {
                label: format!("P{index}"),
                bands: sampled,
            });
        }

        observations.push(Observation {
            week,
            date,
            sensor: fields[sensor_col].to_string(),
            flags,
            points,
        });
    }

    if observations.is_empty() {
        return Err(TimestackError::Empty);
    }
    Ok(observations)
}

/// Parses a `day/month` field against the season year.
fn parse_date(field: &str, year: i32) -> Option<NaiveDate> {
    let (day, month) = field.split_once('/')?;
    NaiveDate::from_ymd_opt(year, month.trim().parse().ok()?, day.trim().parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Week,Date,Sensor,Cloud Cover,Haze,Cloud shadow,P1NIR,P1R,P2NIR,P2R
23,4/6,S2A,0,0,0,5200,1300,5000,1250
24,11/6,S2B,1,0,0,4100,2000,4000,1900
";

    #[test]
    fn decodes_rows_points_and_flags() {
        let observations = decode_observations(CSV, 2019).expect("valid csv");
        assert_eq!(observations.len(), 2);

        let first = &observations[0];
        assert_eq!(first.week, 23);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2019, 6, 4).expect("date"));
        assert_eq!(first.sensor, "S2A");
        assert!(first.cloudfree());
        assert_eq!(first.points.len(), 2);
        assert_eq!(first.points[0].label, "P1");
        assert_eq!(first.points[0].band("NIR"), Some(5200.0));
        assert_eq!(first.points[1].band("R"), Some(1250.0));

        assert!(!observations[1].cloudfree());
        assert!(observations[1].flags.cloud_cover);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(decode_observations("", 2019), Err(TimestackError::Empty));
        // Header only, no rows.
        assert_eq!(
            decode_observations("Week,Date,Sensor,Cloud Cover,Haze,Cloud shadow\n", 2019),
            Err(TimestackError::Empty)
        );
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "Week,Date,Cloud Cover,Haze,Cloud shadow\n23,4/6,0,0,0\n";
        assert_eq!(
            decode_observations(csv, 2019),
            Err(TimestackError::MissingColumn("Sensor".to_string()))
        );
    }

    #[test]
    fn bad_date_is_reported_with_line() {
        let csv = "\
Week,Date,Sensor,Cloud Cover,Haze,Cloud shadow
23,31/2,S2A,0,0,0
";
        assert_eq!(
            decode_observations(csv, 2019),
            Err(TimestackError::BadDate {
                line: 2,
                value: "31/2".to_string()
            })
        );
    }

    #[test]
    fn bad_number_names_the_column() {
        let csv = "\
Week,Date,Sensor,Cloud Cover,Haze,Cloud shadow,P1NIR,P1R
23,4/6,S2A,0,0,0,n/a,1300
";
        assert_eq!(
            decode_observations(csv, 2019),
            Err(TimestackError::BadNumber {
                line: 2,
                column: "P1NIR".to_string()
            })
        );
    }

    #[test]
    fn short_row_is_an_arity_error() {
        let csv = "\
Week,Date,Sensor,Cloud Cover,Haze,Cloud shadow
23,4/6,S2A,0,0
";
        assert_eq!(
            decode_observations(csv, 2019),
            Err(TimestackError::BadArity {
                line: 2,
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn point_columns_sort_numerically() {
        let csv = "\
Week,Date,Sensor,Cloud Cover,Haze,Cloud shadow,P10NIR,P10R,P2NIR,P2R
23,4/6,S2A,0,0,0,1,2,3,4
";
        let observations = decode_observations(csv, 2019).expect("valid csv");
        let labels: Vec<&str> = observations[0]
            .points
            .iter()
            .map(|p| p.label.as_str())
            .collect();
        assert_eq!(labels, vec!["P2", "P10"]);
    }
}
