use std::collections::BTreeSet;
use std::io::{self, Write};

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::SamplesArgs;
use crate::dataset::{CleanRecord, load_dataset};

#[derive(Debug, Clone, Serialize)]
struct SampleRow {
    tool: String,
    f1_score: f64,
    precision: f64,
    recall: f64,
    accuracy: f64,
    true_positives: String,
    false_positives: String,
    false_negatives: String,
    true_negatives: String,
}

#[derive(Debug, Clone, Serialize)]
struct SampleDetail {
    tolid: String,
    rows: Vec<SampleRow>,
}

#[derive(Debug, Serialize)]
struct SamplesResponse {
    dataset: String,
    filter: Option<String>,
    sample_count: usize,
    samples: Vec<String>,
    selected: Option<SampleDetail>,
}

pub fn run(args: SamplesArgs) -> Result<()> {
    let dataset = load_dataset(&args.input)?;
    let filter = args.filter.as_deref().map(build_filter).transpose()?;
    let samples = collect_samples(&dataset.rows, filter.as_ref());
    info!(
        path = %dataset.path.display(),
        samples = samples.len(),
        "samples listed"
    );

    let selected = match args.tolid.as_deref().map(str::trim) {
        Some(tolid) if !tolid.is_empty() => {
            let detail = sample_detail(&dataset.rows, tolid);
            if detail.is_none() {
                warn!(tolid = %tolid, "no rows found for requested sample");
            }
            detail
        }
        _ => None,
    };

    let response = SamplesResponse {
        dataset: dataset.name.clone(),
        filter: args.filter.clone(),
        sample_count: samples.len(),
        samples,
        selected,
    };

    if args.json {
        write_json_response(&response)
    } else {
        write_text_response(&response)
    }
}

fn build_filter(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .with_context(|| format!("invalid sample filter: {pattern}"))
}

fn collect_samples(rows: &[CleanRecord], filter: Option<&Regex>) -> Vec<String> {
    let mut samples = BTreeSet::new();
    for row in rows {
        if !row.tolid.is_empty() {
            samples.insert(row.tolid.clone());
        }
    }

    samples
        .into_iter()
        .filter(|sample| filter.map(|filter| filter.is_match(sample)).unwrap_or(true))
        .collect()
}

fn sample_detail(rows: &[CleanRecord], tolid: &str) -> Option<SampleDetail> {
    let matching: Vec<SampleRow> = rows
        .iter()
        .filter(|row| row.tolid == tolid)
        .map(sample_row)
        .collect();

    if matching.is_empty() {
        return None;
    }

    Some(SampleDetail {
        tolid: tolid.to_string(),
        rows: matching,
    })
}

fn sample_row(row: &CleanRecord) -> SampleRow {
    SampleRow {
        tool: row.tool.clone(),
        f1_score: row.f1_score,
        precision: row.precision.unwrap_or(0.0),
        recall: row.recall.unwrap_or(0.0),
        accuracy: row.accuracy.unwrap_or(0.0),
        true_positives: count_or_zero(row.true_positives.as_deref()),
        false_positives: count_or_zero(row.false_positives.as_deref()),
        false_negatives: count_or_zero(row.false_negatives.as_deref()),
        true_negatives: count_or_zero(row.true_negatives.as_deref()),
    }
}

fn count_or_zero(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("0")
        .to_string()
}

fn write_json_response(response: &SamplesResponse) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, response)
        .context("failed to serialize samples output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn write_text_response(response: &SamplesResponse) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(output, "Dataset: {}", response.dataset)?;
    if let Some(filter) = &response.filter {
        writeln!(output, "Filter: {filter}")?;
    }
    writeln!(output, "Samples: {}", response.sample_count)?;
    for sample in &response.samples {
        writeln!(output, "\t{sample}")?;
    }

    if let Some(detail) = &response.selected {
        writeln!(output)?;
        writeln!(output, "Sample {} ({} rows)", detail.tolid, detail.rows.len())?;
        for row in &detail.rows {
            writeln!(
                output,
                "\t{}\tf1={:.3} precision={:.3} recall={:.3} accuracy={:.3}\tTP/FP/FN/TN={}/{}/{}/{}",
                row.tool,
                row.f1_score,
                row.precision,
                row.recall,
                row.accuracy,
                row.true_positives,
                row.false_positives,
                row.false_negatives,
                row.true_negatives
            )?;
        }
    }

    output.flush()?;
    Ok(())
}
