//! Score-record import, statistics, and report generation.
//!
//! Records are `name, score` CSV lines. [`record_stats`] computes mean,
//! population standard deviation, and median (the median via
//! [`selection_sort`] on a copy of the scores), and [`write_report`] emits a
//! plain-text report with the records in decreasing score order, ordered by
//! [`sort_indices`] so the caller's record buffer is never reordered.

use std::io::{BufRead, Write};

use crate::algo::{selection_sort, sort_indices};
use crate::core::default_cmp;
use crate::error::TextError;

/// One imported record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Person's name, as found in the source (surrounding whitespace
    /// removed).
    pub name: String,
    /// Percentage score.
    pub score: f32,
}

/// Aggregate statistics over a record set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecordStats {
    /// Number of records.
    pub count: usize,
    /// Mean score.
    pub mean: f32,
    /// Population standard deviation.
    pub stddev: f32,
    /// Median score; the mean of the two middle values for even counts.
    pub median: f32,
}

/// Maps a percentage score to its letter grade.
///
/// Bands: A+ [90, 100], A [85, 90), A- [80, 85), B+ [77, 80), B [73, 77),
/// B- [70, 73), C+ [67, 70), C [63, 67), C- [60, 63), D+ [57, 60),
/// D [53, 57), D- [50, 53), F below 50.
///
/// # Examples
///
/// ```
/// use lexsift::record::letter_grade;
///
/// assert_eq!(letter_grade(91.0), "A+");
/// assert_eq!(letter_grade(84.9), "A-");
/// assert_eq!(letter_grade(49.9), "F");
/// ```
pub fn letter_grade(score: f32) -> &'static str {
    if score >= 90.0 {
        "A+"
    } else if score >= 85.0 {
        "A"
    } else if score >= 80.0 {
        "A-"
    } else if score >= 77.0 {
        "B+"
    } else if score >= 73.0 {
        "B"
    } else if score >= 70.0 {
        "B-"
    } else if score >= 67.0 {
        "C+"
    } else if score >= 63.0 {
        "C"
    } else if score >= 60.0 {
        "C-"
    } else if score >= 57.0 {
        "D+"
    } else if score >= 53.0 {
        "D"
    } else if score >= 50.0 {
        "D-"
    } else {
        "F"
    }
}

/// Imports records from `name, score` lines.
///
/// Lines that do not parse (no comma, or a non-numeric score) are skipped,
/// not errors.
///
/// # Errors
///
/// [`TextError::InputUnavailable`] if the source cannot be read.
pub fn import_records<R: BufRead>(source: R) -> Result<Vec<Record>, TextError> {
    let mut records = Vec::new();
    for line in source.lines() {
        let line = line?;
        let Some((name, score)) = line.split_once(',') else {
            continue;
        };
        let Ok(score) = score.trim().parse::<f32>() else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        records.push(Record {
            name: name.to_string(),
            score,
        });
    }
    Ok(records)
}

/// Computes count, mean, population standard deviation, and median.
///
/// Returns all-zero stats for an empty record set.
pub fn record_stats(records: &[Record]) -> RecordStats {
    if records.is_empty() {
        return RecordStats::default();
    }

    let n = records.len();
    let sum: f32 = records.iter().map(|r| r.score).sum();
    let mean = sum / n as f32;

    let var_sum: f32 = records
        .iter()
        .map(|r| {
            let diff = r.score - mean;
            diff * diff
        })
        .sum();
    let stddev = (var_sum / n as f32).sqrt();

    let mut scores: Vec<f32> = records.iter().map(|r| r.score).collect();
    selection_sort(&mut scores);
    let median = if n % 2 == 1 {
        scores[n / 2]
    } else {
        (scores[n / 2 - 1] + scores[n / 2]) / 2.0
    };

    RecordStats {
        count: n,
        mean,
        stddev,
        median,
    }
}

/// Writes a plain-text report: the stats header, a blank line, then
/// `name:score,grade` lines in decreasing score order.
///
/// The record buffer itself is not reordered; the descending order comes
/// from an index sort. An empty record set writes nothing.
///
/// # Errors
///
/// Write failures are surfaced as `std::io::Error`.
pub fn write_report<W: Write>(
    mut out: W,
    records: &[Record],
    stats: &RecordStats,
) -> std::io::Result<()> {
    if stats.count < 1 {
        return Ok(());
    }

    writeln!(out, "Record count: {}", stats.count)?;
    writeln!(out, "Average: {:.2}", stats.mean)?;
    writeln!(out, "Stddev: {:.2}", stats.stddev)?;
    writeln!(out, "Median: {:.2}", stats.median)?;
    writeln!(out)?;

    let by_score_desc = sort_indices(records, |a: &Record, b: &Record| {
        default_cmp(&b.score, &a.score)
    });
    for i in by_score_desc {
        let record = &records[i];
        writeln!(
            out,
            "{}:{:.1},{}",
            record.name,
            record.score,
            letter_grade(record.score)
        )?;
    }

    Ok(())
}
