//! Mines ParisTech log format.
//!
//! One scan per line, whitespace separated:
//!
//! ```text
//! col 0      timestamp (µs)
//! col 2, 3   left / right wheel encoder ticks
//! col 24..   ray_count lidar ranges (mm, 0 = no detection)
//! ```
//!
//! Other columns are ignored.

use std::io::BufRead;
use std::path::Path;

use crate::error::{CoreSlamError, Result};

const TIMESTAMP_COLUMN: usize = 0;
const LEFT_TICKS_COLUMN: usize = 2;
const RIGHT_TICKS_COLUMN: usize = 3;
const FIRST_RANGE_COLUMN: usize = 24;

/// One line of a Mines log.
#[derive(Debug, Clone, PartialEq)]
pub struct MinesRecord {
    /// Raw timestamp in microseconds
    pub timestamp: i64,
    /// Left wheel encoder ticks
    pub left_ticks: i64,
    /// Right wheel encoder ticks
    pub right_ticks: i64,
    /// Lidar ranges in millimeters
    pub ranges: Vec<i32>,
}

/// A loaded Mines log.
#[derive(Debug, Clone, Default)]
pub struct MinesLog {
    records: Vec<MinesRecord>,
}

impl MinesLog {
    /// Load a log file, reading `ray_count` ranges per line.
    pub fn load(path: &Path, ray_count: usize) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let log = Self::from_reader(std::io::BufReader::new(file), ray_count)?;
        log::info!("Loaded {} scans from {}", log.len(), path.display());
        Ok(log)
    }

    /// Parse a log from any buffered reader. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R, ray_count: usize) -> Result<Self> {
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(Self::parse_line(&line, index + 1, ray_count)?);
        }
        Ok(Self { records })
    }

    /// Parse a single line. `line_number` is only used in errors.
    pub fn parse_line(line: &str, line_number: usize, ray_count: usize) -> Result<MinesRecord> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let needed = FIRST_RANGE_COLUMN + ray_count;
        if tokens.len() < needed {
            return Err(CoreSlamError::LogParse {
                line: line_number,
                message: format!("expected at least {} columns, got {}", needed, tokens.len()),
            });
        }

        let field = |column: usize| -> Result<i64> {
            tokens[column]
                .parse::<i64>()
                .map_err(|e| CoreSlamError::LogParse {
                    line: line_number,
                    message: format!("column {}: {}", column, e),
                })
        };

        let ranges = (FIRST_RANGE_COLUMN..needed)
            .map(|column| {
                let value = field(column)?;
                i32::try_from(value).map_err(|_| CoreSlamError::LogParse {
                    line: line_number,
                    message: format!("column {}: range {} out of bounds", column, value),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MinesRecord {
            timestamp: field(TIMESTAMP_COLUMN)?,
            left_ticks: field(LEFT_TICKS_COLUMN)?,
            right_ticks: field(RIGHT_TICKS_COLUMN)?,
            ranges,
        })
    }

    /// Records in file order.
    pub fn records(&self) -> &[MinesRecord] {
        &self.records
    }

    /// Number of scans.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the log holds no scans.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(timestamp: i64, left: i64, right: i64, ranges: &[i32]) -> String {
        let mut cols = vec![timestamp.to_string(), "0".into(), left.to_string(), right.to_string()];
        cols.extend((4..24).map(|_| "9".to_string()));
        cols.extend(ranges.iter().map(|r| r.to_string()));
        cols.join(" ")
    }

    #[test]
    fn test_parse_line() {
        let record = MinesLog::parse_line(&line(1_000_000, 12, -7, &[100, 0, 300]), 1, 3).unwrap();
        assert_eq!(record.timestamp, 1_000_000);
        assert_eq!(record.left_ticks, 12);
        assert_eq!(record.right_ticks, -7);
        assert_eq!(record.ranges, vec![100, 0, 300]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let record = MinesLog::parse_line(&line(5, 1, 2, &[10, 20, 30, 40]), 1, 3).unwrap();
        assert_eq!(record.ranges, vec![10, 20, 30]);
    }

    #[test]
    fn test_short_line_is_an_error() {
        let err = MinesLog::parse_line(&line(5, 1, 2, &[10]), 4, 3).unwrap_err();
        assert!(matches!(err, CoreSlamError::LogParse { line: 4, .. }));
    }

    #[test]
    fn test_garbage_is_an_error() {
        let text = line(5, 1, 2, &[10, 20, 30]).replace(" 20 ", " x ");
        assert!(MinesLog::parse_line(&text, 1, 3).is_err());
    }

    #[test]
    fn test_from_reader_skips_blank_lines() {
        let text = format!("{}\n\n{}\n", line(1, 0, 0, &[1, 2]), line(2, 5, 5, &[3, 4]));
        let log = MinesLog::from_reader(text.as_bytes(), 2).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[1].timestamp, 2);
    }
}
