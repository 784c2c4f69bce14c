use crate::domain::model::KeywordReport;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    model: &'a str,
    results: &'a [KeywordReport],
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    keyword: &'a str,
    position: usize,
    variation: &'a str,
    error: bool,
}

pub fn render<W: Write>(
    format: OutputFormat,
    model: &str,
    reports: &[KeywordReport],
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(reports, out),
        OutputFormat::Json => render_json(model, Utc::now(), reports, out),
        OutputFormat::Csv => render_csv(reports, out),
    }
}

pub fn render_text<W: Write>(reports: &[KeywordReport], out: &mut W) -> Result<()> {
    writeln!(out, "Generated Variations for {} Keywords", reports.len())?;

    for report in reports {
        writeln!(out)?;
        writeln!(out, "▶ Queries for: '{}'", report.keyword)?;

        if let Some(message) = report.result.error_message() {
            writeln!(out, "  ✖ {}", message)?;
            continue;
        }

        let variations = report.variations();
        if variations.is_empty() {
            writeln!(out, "  (no variations returned)")?;
        }
        for (i, variation) in variations.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, variation)?;
        }
    }

    Ok(())
}

pub fn render_json<W: Write>(
    model: &str,
    generated_at: DateTime<Utc>,
    reports: &[KeywordReport],
    out: &mut W,
) -> Result<()> {
    let report = JsonReport {
        generated_at,
        model,
        results: reports,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn render_csv<W: Write>(reports: &[KeywordReport], out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    for report in reports {
        let error = report.result.is_error();
        for (i, variation) in report.variations().iter().enumerate() {
            writer.serialize(CsvRow {
                keyword: report.keyword.as_str(),
                position: i + 1,
                variation,
                error,
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}
