use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::cli::ExportArgs;
use crate::dataset::{CleanRecord, load_dataset};
use crate::util::ensure_directory;

pub const EXPORT_HEADERS: [&str; 11] = [
    "Sample ID",
    "Tolid",
    "Tool",
    "F1-score",
    "Precision",
    "Recall",
    "Accuracy",
    "True Positives (TP)",
    "False Positives (FP)",
    "False Negatives (FN)",
    "True Negatives (TN)",
];

pub fn run(args: ExportArgs) -> Result<()> {
    let tolid = args.tolid.trim().to_string();
    if tolid.is_empty() {
        bail!("tolid must not be empty");
    }

    let dataset = load_dataset(&args.input)?;
    let rows: Vec<&CleanRecord> = dataset
        .rows
        .iter()
        .filter(|row| row.tolid == tolid)
        .collect();

    if rows.is_empty() {
        bail!("no rows found for sample: {tolid}");
    }

    let out_path = args.out.unwrap_or_else(|| default_output_path(&tolid));
    write_sample_csv(&out_path, &rows)?;
    info!(
        path = %out_path.display(),
        tolid = %tolid,
        rows = rows.len(),
        "wrote sample export"
    );

    Ok(())
}

pub fn default_output_path(tolid: &str) -> PathBuf {
    PathBuf::from(format!("sample_{tolid}_results.csv"))
}

fn write_sample_csv(path: &Path, rows: &[&CleanRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create export file: {}", path.display()))?;

    writer
        .write_record(EXPORT_HEADERS)
        .context("failed to write export header")?;
    for row in rows {
        writer
            .write_record(export_record_fields(row))
            .with_context(|| format!("failed to write export row for tool: {}", row.tool))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to finalize export file: {}", path.display()))?;

    Ok(())
}

pub fn export_record_fields(row: &CleanRecord) -> Vec<String> {
    vec![
        row.id.clone(),
        row.tolid.clone(),
        row.tool.clone(),
        row.f1_score.to_string(),
        row.precision.unwrap_or(0.0).to_string(),
        row.recall.unwrap_or(0.0).to_string(),
        row.accuracy.unwrap_or(0.0).to_string(),
        count_or_zero(row.true_positives.as_deref()),
        count_or_zero(row.false_positives.as_deref()),
        count_or_zero(row.false_negatives.as_deref()),
        count_or_zero(row.true_negatives.as_deref()),
    ]
}

fn count_or_zero(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("0")
        .to_string()
}
