use std::{io::Write, str::FromStr};

use serde::Serialize;

use crate::{
    compare::{self, Comparison},
    error::CompareError,
    extract::Measurements,
    format::{signed_thousands, thousands, thousands_f64},
    summary::Summary,
};

const TITLE: &str =
    "=== Gas Measurement Comparison: Local (Anvil) vs Tenderly Fork (Base Mainnet) ===";
const RULE_WIDTH: usize = 120;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(CompareError::UnknownFormat(other.to_string())),
        }
    }
}

/// Writes the comparison of `local` against `fork` to `out`.
///
/// Output is written as it is produced: when the summary cannot be computed
/// the rows (and any summary lines) before the failure are already written.
pub fn render<W: Write>(
    local: &Measurements,
    fork: &Measurements,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CompareError> {
    let pairs = compare::matched(local, fork);
    tracing::info!(
        local = local.len(),
        fork = fork.len(),
        matched = pairs.len(),
        "Comparing gas measurements"
    );
    let summary = Summary::new(&pairs);
    match format {
        OutputFormat::Table => {
            write_table(&pairs, out)?;
            write_summary(&summary, out)
        }
        OutputFormat::Json => write_json(&pairs, &summary, out),
    }
}

fn write_table<W: Write>(pairs: &[Comparison<'_>], out: &mut W) -> Result<(), CompareError> {
    writeln!(out, "{TITLE}\n")?;
    writeln!(
        out,
        "{:<60} | {:>12} | {:>12} | {:>12} | {:>8}",
        "Test Scenario", "Local Gas", "Fork Gas", "Difference", "% Diff"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for pair in pairs {
        writeln!(out, "{}", row(pair))?;
    }
    Ok(())
}

pub fn row(pair: &Comparison<'_>) -> String {
    format!(
        "{:<60} | {:>12} | {:>12} | {:>12} | {:>+7.2}%",
        pair.display_name(),
        thousands(pair.local),
        thousands(pair.fork),
        signed_thousands(pair.diff()),
        pair.display_pct(),
    )
}

fn write_summary<W: Write>(summary: &Summary, out: &mut W) -> Result<(), CompareError> {
    writeln!(out, "\n=== Summary Statistics ===")?;
    writeln!(out, "Tests compared: {}", summary.tests_compared())?;
    writeln!(
        out,
        "Average absolute difference: {} gas",
        thousands_f64(summary.avg_abs_difference()?)
    )?;
    writeln!(
        out,
        "Average percentage difference: {:.3}%",
        summary.avg_pct_difference()?
    )?;
    writeln!(
        out,
        "Max percentage difference: {:.3}%",
        summary.max_pct_difference()?
    )?;
    writeln!(
        out,
        "Min percentage difference: {:.3}%",
        summary.min_pct_difference()?
    )?;
    let consistent = if summary.consistent() { "True" } else { "False" };
    writeln!(out, "\n✅ All measurements within 2% variance: {consistent}")?;
    Ok(())
}

#[derive(Serialize)]
struct JsonRow<'a> {
    name: &'a str,
    local: u64,
    fork: u64,
    diff: i128,
    pct_diff: f64,
}

#[derive(Serialize)]
struct JsonSummary {
    tests_compared: usize,
    avg_abs_difference: f64,
    avg_pct_difference: f64,
    max_pct_difference: f64,
    min_pct_difference: f64,
    consistent: bool,
}

fn write_json<W: Write>(
    pairs: &[Comparison<'_>],
    summary: &Summary,
    out: &mut W,
) -> Result<(), CompareError> {
    for pair in pairs {
        let row = JsonRow {
            name: pair.name,
            local: pair.local,
            fork: pair.fork,
            diff: pair.diff(),
            pct_diff: pair.display_pct(),
        };
        serde_json::to_writer(&mut *out, &row)?;
        writeln!(out)?;
    }
    let summary = JsonSummary {
        tests_compared: summary.tests_compared(),
        avg_abs_difference: summary.avg_abs_difference()?,
        avg_pct_difference: summary.avg_pct_difference()?,
        max_pct_difference: summary.max_pct_difference()?,
        min_pct_difference: summary.min_pct_difference()?,
        consistent: summary.consistent(),
    };
    serde_json::to_writer(&mut *out, &summary)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row() {
        let pair = Comparison {
            name: "DEPOSIT",
            local: 100000,
            fork: 102000,
        };
        let expected = format!(
            "Deposit{} |      100,000 |      102,000 |       +2,000 |   +2.00%",
            " ".repeat(60 - "Deposit".len())
        );
        assert_eq!(row(&pair), expected);
    }

    #[test]
    fn test_row_negative_and_zero_local() {
        let pair = Comparison {
            name: "WITHDRAW",
            local: 50500,
            fork: 50000,
        };
        assert!(row(&pair).ends_with(" |       50,500 |       50,000 |         -500 |   -0.99%"));

        let pair = Comparison {
            name: "FEE",
            local: 0,
            fork: 10,
        };
        assert!(row(&pair).ends_with(" |            0 |           10 |          +10 |   +0.00%"));
    }

    #[test]
    fn test_output_format() -> Result<(), CompareError> {
        assert_eq!("table".parse::<OutputFormat>()?, OutputFormat::Table);
        assert_eq!("json".parse::<OutputFormat>()?, OutputFormat::Json);
        assert!(matches!(
            "csv".parse::<OutputFormat>(),
            Err(CompareError::UnknownFormat(_))
        ));
        Ok(())
    }
}
