//! Sweep report output: table, JSON or CSV.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use layout_core::Layout;
use serde::Serialize;

use crate::oracle::Measurement;
use crate::{CliError, Result};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawn table for terminals
    Table,
    /// Pretty-printed JSON array
    Json,
    /// CSV with a header row
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// A measurement plus its time relative to the matching AOS case.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    #[serde(flatten)]
    measurement: Measurement,
    /// `ns_per_iter / aos ns_per_iter` for the same pattern, strategy and size
    relative_to_aos: Option<f64>,
}

/// Pairs each measurement with its AOS baseline, if one was measured.
pub fn rows(measurements: &[Measurement]) -> Vec<ReportRow> {
    measurements
        .iter()
        .map(|m| {
            let baseline = measurements.iter().find(|b| {
                b.layout == Layout::Aos
                    && b.pattern == m.pattern
                    && b.strategy == m.strategy
                    && b.size == m.size
            });
            let relative_to_aos = baseline
                .filter(|b| b.ns_per_iter > 0.0)
                .map(|b| m.ns_per_iter / b.ns_per_iter);
            ReportRow {
                measurement: m.clone(),
                relative_to_aos,
            }
        })
        .collect()
}

/// Writes `measurements` to `out` in `format`.
pub fn write_report<W: Write>(
    measurements: &[Measurement],
    format: OutputFormat,
    mut out: W,
) -> Result<()> {
    let rows = rows(measurements);
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(&rows, out)?,
        OutputFormat::Table => write_table(&rows, out)?,
    }
    Ok(())
}

// csv cannot serialise flattened structs, so rows are written as records.
fn write_csv<W: Write>(rows: &[ReportRow], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "pattern",
        "layout",
        "strategy",
        "size",
        "iterations",
        "total_ns",
        "ns_per_iter",
        "items_per_sec",
        "relative_to_aos",
    ])?;

    for row in rows {
        let m = &row.measurement;
        writer.write_record([
            m.pattern.to_string(),
            m.layout.to_string(),
            m.strategy.to_string(),
            m.size.to_string(),
            m.iterations.to_string(),
            m.total_ns.to_string(),
            format!("{:.3}", m.ns_per_iter),
            format!("{:.0}", m.items_per_sec),
            row.relative_to_aos
                .map(|r| format!("{:.3}", r))
                .unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn write_table<W: Write>(rows: &[ReportRow], mut out: W) -> Result<()> {
    writeln!(out, "┌───────────────────────┬──────────┬──────────┬──────────────┬─────────────┬──────────┐")?;
    writeln!(out, "│ Pattern               │ Case     │     Size │      ns/iter │ Mitems/s    │   vs aos │")?;
    writeln!(out, "├───────────────────────┼──────────┼──────────┼──────────────┼─────────────┼──────────┤")?;

    for row in rows {
        let m = &row.measurement;
        let relative = row
            .relative_to_aos
            .map(|r| format!("{:.2}x", r))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "│ {:<21} │ {:<8} │ {:>8} │ {:>12.1} │ {:>11.1} │ {:>8} │",
            m.pattern.name(),
            format!("{}/{}", m.layout, m.strategy),
            m.size,
            m.ns_per_iter,
            m.items_per_sec / 1e6,
            relative
        )?;
    }

    writeln!(out, "└───────────────────────┴──────────┴──────────┴──────────────┴─────────────┴──────────┘")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_patterns::{Pattern, Strategy};

    fn measurement(layout: Layout, ns_per_iter: f64) -> Measurement {
        Measurement {
            pattern: Pattern::Read,
            layout,
            strategy: Strategy::Iter,
            size: 1000,
            iterations: 10,
            total_ns: (ns_per_iter * 10.0) as u64,
            ns_per_iter,
            items_per_sec: 1.0e9,
        }
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("Unknown format: xml"));
    }

    #[test]
    fn test_rows_relative_to_aos() {
        let measurements = vec![
            measurement(Layout::Aos, 200.0),
            measurement(Layout::Soa, 100.0),
        ];
        let rows = rows(&measurements);
        assert_eq!(rows[0].relative_to_aos, Some(1.0));
        assert_eq!(rows[1].relative_to_aos, Some(0.5));
    }

    #[test]
    fn test_rows_without_baseline() {
        let rows = rows(&[measurement(Layout::Soa, 100.0)]);
        assert_eq!(rows[0].relative_to_aos, None);
    }

    #[test]
    fn test_csv_report() {
        let mut out = Vec::new();
        write_report(
            &[measurement(Layout::Aos, 50.0), measurement(Layout::Soa, 25.0)],
            OutputFormat::Csv,
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("pattern,layout,strategy,size"));
        assert!(lines[2].starts_with("read,soa,iter,1000,10,250,25.000"));
        assert!(lines[2].ends_with(",0.500"));
    }

    #[test]
    fn test_json_report_flattens_measurement() {
        let mut out = Vec::new();
        write_report(&[measurement(Layout::Soa, 10.0)], OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["pattern"], "read");
        assert_eq!(value[0]["layout"], "soa");
        assert_eq!(value[0]["size"], 1000);
        assert!(value[0]["relative_to_aos"].is_null());
    }

    #[test]
    fn test_table_report() {
        let mut out = Vec::new();
        write_report(&[measurement(Layout::Aos, 10.0)], OutputFormat::Table, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("│ read "));
        assert!(text.contains("aos/iter"));
        assert!(text.contains("1.00x"));
    }
}
