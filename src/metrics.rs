use clap::ValueEnum;

use crate::model::ToolSummary;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Metric {
    F1Score,
    Precision,
    Recall,
    Accuracy,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::F1Score => "F1-score",
            Self::Precision => "Precision",
            Self::Recall => "Recall",
            Self::Accuracy => "Accuracy",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ComparisonMode {
    Absolute,
    Difference,
}

impl ComparisonMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Difference => "difference",
        }
    }
}

pub fn field_for_metric(metric: Metric, mode: ComparisonMode) -> &'static str {
    match (metric, mode) {
        (Metric::F1Score, ComparisonMode::Absolute) => "avg_tool_f1",
        (Metric::F1Score, ComparisonMode::Difference) => "avg_f1_diff",
        (Metric::Precision, ComparisonMode::Absolute) => "avg_tool_precision",
        (Metric::Precision, ComparisonMode::Difference) => "avg_precision_diff",
        (Metric::Recall, ComparisonMode::Absolute) => "avg_tool_recall",
        (Metric::Recall, ComparisonMode::Difference) => "avg_recall_diff",
        (Metric::Accuracy, ComparisonMode::Absolute) => "avg_tool_accuracy",
        (Metric::Accuracy, ComparisonMode::Difference) => "avg_accuracy_diff",
    }
}

pub fn value_for_metric(summary: &ToolSummary, metric: Metric, mode: ComparisonMode) -> f64 {
    match (metric, mode) {
        (Metric::F1Score, ComparisonMode::Absolute) => summary.avg_tool_f1,
        (Metric::F1Score, ComparisonMode::Difference) => summary.avg_f1_diff,
        (Metric::Precision, ComparisonMode::Absolute) => summary.avg_tool_precision,
        (Metric::Precision, ComparisonMode::Difference) => summary.avg_precision_diff,
        (Metric::Recall, ComparisonMode::Absolute) => summary.avg_tool_recall,
        (Metric::Recall, ComparisonMode::Difference) => summary.avg_recall_diff,
        (Metric::Accuracy, ComparisonMode::Absolute) => summary.avg_tool_accuracy,
        (Metric::Accuracy, ComparisonMode::Difference) => summary.avg_accuracy_diff,
    }
}

pub fn win_rate_field(metric: Metric) -> &'static str {
    match metric {
        Metric::F1Score => "f1_win_rate",
        Metric::Precision => "precision_win_rate",
        Metric::Recall => "recall_win_rate",
        Metric::Accuracy => "accuracy_win_rate",
    }
}

pub fn win_rate_value(summary: &ToolSummary, metric: Metric) -> f64 {
    match metric {
        Metric::F1Score => summary.f1_win_rate,
        Metric::Precision => summary.precision_win_rate,
        Metric::Recall => summary.recall_win_rate,
        Metric::Accuracy => summary.accuracy_win_rate,
    }
}

pub fn format_tool_name(tool: &str) -> String {
    tool.replace('_', " ")
}
