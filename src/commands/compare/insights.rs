use super::*;

pub fn build_insights(summaries: &[ToolSummary]) -> Option<KeyInsights> {
    if summaries.is_empty() {
        return None;
    }

    let best_tools = summaries
        .iter()
        .take(3)
        .map(|summary| BestTool {
            tool: summary.tool.clone(),
            avg_f1_diff: summary.avg_f1_diff,
        })
        .collect();

    let mut min_avg_f1_diff = f64::INFINITY;
    let mut max_avg_f1_diff = f64::NEG_INFINITY;
    for summary in summaries {
        min_avg_f1_diff = min_avg_f1_diff.min(summary.avg_f1_diff);
        max_avg_f1_diff = max_avg_f1_diff.max(summary.avg_f1_diff);
    }

    Some(KeyInsights {
        best_tools,
        tools_total: summaries.len(),
        tools_outperforming_baseline: summaries
            .iter()
            .filter(|summary| summary.avg_f1_diff > 0.0)
            .count(),
        min_avg_f1_diff,
        max_avg_f1_diff,
    })
}
