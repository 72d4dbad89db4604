use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRecord {
    pub dataset: String,
    pub tool: String,
    pub fcs_f1: f64,
    pub fcs_precision: f64,
    pub fcs_recall: f64,
    pub fcs_accuracy: f64,
    pub tool_f1: f64,
    pub tool_precision: f64,
    pub tool_recall: f64,
    pub tool_accuracy: f64,
    pub f1_diff: f64,
    pub precision_diff: f64,
    pub recall_diff: f64,
    pub accuracy_diff: f64,
    pub f1_ratio: f64,
    pub precision_ratio: f64,
    pub recall_ratio: f64,
    pub accuracy_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSummary {
    pub tool: String,
    pub count: usize,
    pub avg_f1_diff: f64,
    pub avg_precision_diff: f64,
    pub avg_recall_diff: f64,
    pub avg_accuracy_diff: f64,
    pub avg_tool_f1: f64,
    pub avg_tool_precision: f64,
    pub avg_tool_recall: f64,
    pub avg_tool_accuracy: f64,
    pub avg_fcs_f1: f64,
    pub f1_wins: usize,
    pub f1_losses: usize,
    pub f1_ties: usize,
    pub f1_win_rate: f64,
    pub precision_wins: usize,
    pub precision_losses: usize,
    pub precision_ties: usize,
    pub precision_win_rate: f64,
    pub recall_wins: usize,
    pub recall_losses: usize,
    pub recall_ties: usize,
    pub recall_win_rate: f64,
    pub accuracy_wins: usize,
    pub accuracy_losses: usize,
    pub accuracy_ties: usize,
    pub accuracy_win_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub path: String,
    pub name: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CompareCounts {
    pub rows_total: usize,
    pub rows_kept: usize,
    pub rows_dropped: usize,
    pub groups_total: usize,
    pub groups_compared: usize,
    pub groups_without_baseline: usize,
    pub groups_with_multiple_baselines: usize,
    pub groups_without_competitors: usize,
    pub pairs_skipped_non_finite: usize,
    pub comparisons_total: usize,
    pub tools_total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestTool {
    pub tool: String,
    pub avg_f1_diff: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyInsights {
    pub best_tools: Vec<BestTool>,
    pub tools_total: usize,
    pub tools_outperforming_baseline: usize,
    pub min_avg_f1_diff: f64,
    pub max_avg_f1_diff: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub manifest_version: u32,
    pub generated_at: String,
    pub dataset: DatasetInfo,
    pub baseline_aliases: Vec<String>,
    pub outcome: String,
    pub counts: CompareCounts,
    pub summaries: Vec<ToolSummary>,
    pub insights: Option<KeyInsights>,
    pub comparisons: Option<Vec<ComparisonRecord>>,
    pub warnings: Vec<String>,
}
