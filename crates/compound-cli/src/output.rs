//! Output formatting utilities.

use std::io::Write;
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use compound_core::{PerformanceRecord, ProjectionSummary};

use crate::cli::OutputFormat;

/// A named performance series, as emitted in JSON.
#[derive(Debug, Serialize)]
pub struct NamedSeries<'a> {
    /// Asset label.
    pub asset: &'a str,
    /// Selected records.
    pub series: Vec<PerformanceRecord>,
}

/// CSV row with a leading asset column, used when several plans share stdout.
#[derive(Debug, Serialize)]
struct AssetRecord<'a> {
    asset: &'a str,
    month: u32,
    investment: f64,
    assets: f64,
    income: f64,
    capital: f64,
    total_return: f64,
}

impl<'a> AssetRecord<'a> {
    fn new(asset: &'a str, r: &PerformanceRecord) -> Self {
        Self {
            asset,
            month: r.month,
            investment: r.investment,
            assets: r.assets,
            income: r.income,
            capital: r.capital,
            total_return: r.total_return,
        }
    }
}

/// Table row for a performance record.
#[derive(Debug, Tabled)]
struct SeriesRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Investment")]
    investment: String,
    #[tabled(rename = "Assets")]
    assets: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Capital")]
    capital: String,
    #[tabled(rename = "Total Return")]
    total_return: String,
}

impl From<&PerformanceRecord> for SeriesRow {
    fn from(r: &PerformanceRecord) -> Self {
        Self {
            month: r.month,
            investment: format_amount(r.investment),
            assets: format_amount(r.assets),
            income: format_amount(r.income),
            capital: format_amount(r.capital),
            total_return: format_amount(r.total_return),
        }
    }
}

/// Table row for a projection summary.
#[derive(Debug, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Months")]
    months: usize,
    #[tabled(rename = "Investment")]
    investment: String,
    #[tabled(rename = "Assets")]
    assets: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Capital")]
    capital: String,
    #[tabled(rename = "Total Return")]
    total_return: String,
}

impl From<&ProjectionSummary> for SummaryRow {
    fn from(s: &ProjectionSummary) -> Self {
        Self {
            asset: s.asset.clone(),
            months: s.horizon_months,
            investment: format_amount(s.investment),
            assets: format_amount(s.assets),
            income: format_amount(s.income),
            capital: format_amount(s.capital),
            total_return: format_amount(s.total_return),
        }
    }
}

/// Formats a monetary amount with two decimals and thousands separators.
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Keeps every `step`-th month plus the final month.
pub fn select_months(series: &[PerformanceRecord], step: usize) -> Vec<PerformanceRecord> {
    let step = step.max(1);
    let last = series.len().saturating_sub(1);
    series
        .iter()
        .enumerate()
        .filter(|(i, r)| r.month as usize % step == 0 || *i == last)
        .map(|(_, r)| *r)
        .collect()
}

/// Prints every series in the requested format.
pub fn print_series(series: &[NamedSeries<'_>], format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            for named in series {
                if !quiet {
                    print_header(named.asset);
                }
                print_table(named.series.iter().map(SeriesRow::from));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(series)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for named in series {
                for record in &named.series {
                    wtr.serialize(AssetRecord::new(named.asset, record))?;
                }
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for named in series {
                if let Some(last) = named.series.last() {
                    println!("{}\t{}", named.asset, serde_json::to_string(last)?);
                }
            }
        }
    }
    Ok(())
}

/// Prints summaries in the requested format.
pub fn print_summaries(summaries: &[ProjectionSummary], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(summaries.iter().map(SummaryRow::from)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summaries)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for summary in summaries {
                wtr.serialize(summary)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for summary in summaries {
                println!("{}\t{:.2}", summary.asset, summary.assets);
            }
        }
    }
    Ok(())
}

fn print_table<T: Tabled>(rows: impl IntoIterator<Item = T>) {
    let rows: Vec<T> = rows.into_iter().collect();
    if rows.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();

    println!("{table}");
}

/// Writes a full series as CSV with the six-column header.
pub fn write_series_csv<W: Write>(writer: W, series: &[PerformanceRecord]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in series {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// File name for an asset's series inside an output directory.
pub fn series_file_name(asset: &str) -> String {
    let slug: String = asset
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "series.csv".to_string()
    } else {
        format!("{slug}.csv")
    }
}

/// Writes one CSV per asset into `dir`, returning the written paths.
pub fn write_series_dir(dir: &Path, series: &[(&str, &[PerformanceRecord])]) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(series.len());
    for (asset, records) in series {
        let path = dir.join(series_file_name(asset));
        let file = std::fs::File::create(&path)?;
        write_series_csv(file, records)?;
        tracing::debug!(path = %path.display(), rows = records.len(), "wrote series");
        written.push(path);
    }
    Ok(written)
}

/// Prints a section header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!();
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use compound_core::MonthlyReturn;

    fn series(months: u32) -> Vec<PerformanceRecord> {
        let mut out = vec![PerformanceRecord::opening(100.0)];
        for _ in 1..months {
            let next = out.last().unwrap().next(100.0, MonthlyReturn::default());
            out.push(next);
        }
        out
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.994), "999.99");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(-12_000.0), "-12,000.00");
    }

    #[test]
    fn test_select_months() {
        let picked = select_months(&series(30), 12);
        let months: Vec<u32> = picked.iter().map(|r| r.month).collect();
        assert_eq!(months, vec![12, 24, 30]);

        assert_eq!(select_months(&series(5), 1).len(), 5);
    }

    #[test]
    fn test_write_series_csv_header() {
        let mut buf = Vec::new();
        write_series_csv(&mut buf, &series(2)).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "month,investment,assets,income,capital,total_return"
        );
        assert_eq!(lines.next().unwrap(), "1,100.0,100.0,0.0,0.0,0.0");
        assert_eq!(lines.next().unwrap(), "2,200.0,200.0,0.0,0.0,0.0");
    }

    #[test]
    fn test_series_file_name() {
        assert_eq!(series_file_name("NASDAQ 100"), "nasdaq_100.csv");
        assert_eq!(series_file_name("S&P500"), "s_p500.csv");
        assert_eq!(series_file_name("!!"), "series.csv");
    }

    #[test]
    fn test_write_series_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data = series(3);
        let written = write_series_dir(dir.path(), &[("Fund A", data.as_slice())]).unwrap();

        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("fund_a.csv"));
        let text = std::fs::read_to_string(&written[0]).unwrap();
        assert_eq!(text.lines().count(), 4);
    }
}
