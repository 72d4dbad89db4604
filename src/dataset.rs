use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::util::sha256_file;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "ID", default)]
    pub id: Option<String>,
    #[serde(rename = "Tolid", default)]
    pub tolid: Option<String>,
    #[serde(rename = "Tool", default)]
    pub tool: Option<String>,
    #[serde(rename = "F1-score", default)]
    pub f1_score: Option<String>,
    #[serde(rename = "Precision", default)]
    pub precision: Option<String>,
    #[serde(rename = "Recall", default)]
    pub recall: Option<String>,
    #[serde(rename = "Accuracy", default)]
    pub accuracy: Option<String>,
    #[serde(rename = "True Positives (TP)", default)]
    pub true_positives: Option<String>,
    #[serde(rename = "False Positives (FP)", default)]
    pub false_positives: Option<String>,
    #[serde(rename = "False Negatives (FN)", default)]
    pub false_negatives: Option<String>,
    #[serde(rename = "True Negatives (TN)", default)]
    pub true_negatives: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub id: String,
    pub tolid: String,
    pub tool: String,
    pub f1_score: f64,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub accuracy: Option<f64>,
    pub true_positives: Option<String>,
    pub false_positives: Option<String>,
    pub false_negatives: Option<String>,
    pub true_negatives: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub path: PathBuf,
    pub name: String,
    pub sha256: String,
    pub rows: Vec<CleanRecord>,
    pub rows_total: usize,
    pub rows_kept: usize,
    pub rows_dropped: usize,
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open dataset: {}", path.display()))?;

    let mut records = Vec::new();
    for record in reader.deserialize::<RawRecord>() {
        let record =
            record.with_context(|| format!("failed to parse csv record: {}", path.display()))?;
        records.push(record);
    }

    let rows_total = records.len();
    let rows = clean_records(records);
    let rows_kept = rows.len();

    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(ToOwned::to_owned)
        .with_context(|| format!("invalid UTF-8 dataset filename: {}", path.display()))?;
    let sha256 = sha256_file(path)?;

    Ok(Dataset {
        path: path.to_path_buf(),
        name,
        sha256,
        rows,
        rows_total,
        rows_kept,
        rows_dropped: rows_total - rows_kept,
    })
}

pub fn clean_records(records: Vec<RawRecord>) -> Vec<CleanRecord> {
    let mut cleaned = Vec::with_capacity(records.len());

    for record in records {
        let Some(id) = non_empty(record.id) else {
            continue;
        };
        let Some(tool) = non_empty(record.tool) else {
            continue;
        };
        let Some(f1_raw) = non_empty(record.f1_score) else {
            continue;
        };

        cleaned.push(CleanRecord {
            id,
            tolid: non_empty(record.tolid).unwrap_or_default(),
            tool,
            f1_score: coerce_metric(&f1_raw),
            precision: record.precision.as_deref().map(coerce_metric),
            recall: record.recall.as_deref().map(coerce_metric),
            accuracy: record.accuracy.as_deref().map(coerce_metric),
            true_positives: record.true_positives,
            false_positives: record.false_positives,
            false_negatives: record.false_negatives,
            true_negatives: record.true_negatives,
        });
    }

    cleaned
}

pub fn coerce_metric(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
