use super::*;

pub const TIE_THRESHOLD: f64 = 0.001;

#[derive(Debug, Clone, Copy, Default)]
struct MetricTally {
    diff_sum: f64,
    value_sum: f64,
    wins: usize,
    losses: usize,
    ties: usize,
}

impl MetricTally {
    fn record(&mut self, diff: f64, value: f64) {
        self.diff_sum += diff;
        self.value_sum += value;

        if diff.abs() < TIE_THRESHOLD {
            self.ties += 1;
        } else if diff > 0.0 {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }
}

pub fn aggregate(comparisons: &[ComparisonRecord]) -> Vec<ToolSummary> {
    let mut groups: Vec<(String, Vec<&ComparisonRecord>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for comparison in comparisons {
        let slot = match index.get(&comparison.tool) {
            Some(&slot) => slot,
            None => {
                index.insert(comparison.tool.clone(), groups.len());
                groups.push((comparison.tool.clone(), Vec::new()));
                groups.len() - 1
            }
        };
        groups[slot].1.push(comparison);
    }

    let mut summaries: Vec<ToolSummary> = groups
        .iter()
        .map(|(tool, group)| summarize_tool(tool, group))
        .collect();

    summaries.sort_by(|left, right| right.avg_f1_diff.total_cmp(&left.avg_f1_diff));
    summaries
}

fn summarize_tool(tool: &str, comparisons: &[&ComparisonRecord]) -> ToolSummary {
    let count = comparisons.len();
    let mut f1 = MetricTally::default();
    let mut precision = MetricTally::default();
    let mut recall = MetricTally::default();
    let mut accuracy = MetricTally::default();
    let mut fcs_f1_total = 0.0_f64;

    for comparison in comparisons {
        f1.record(comparison.f1_diff, comparison.tool_f1);
        precision.record(comparison.precision_diff, comparison.tool_precision);
        recall.record(comparison.recall_diff, comparison.tool_recall);
        accuracy.record(comparison.accuracy_diff, comparison.tool_accuracy);
        fcs_f1_total += comparison.fcs_f1;
    }

    ToolSummary {
        tool: tool.to_string(),
        count,
        avg_f1_diff: mean(f1.diff_sum, count),
        avg_precision_diff: mean(precision.diff_sum, count),
        avg_recall_diff: mean(recall.diff_sum, count),
        avg_accuracy_diff: mean(accuracy.diff_sum, count),
        avg_tool_f1: mean(f1.value_sum, count),
        avg_tool_precision: mean(precision.value_sum, count),
        avg_tool_recall: mean(recall.value_sum, count),
        avg_tool_accuracy: mean(accuracy.value_sum, count),
        avg_fcs_f1: mean(fcs_f1_total, count),
        f1_wins: f1.wins,
        f1_losses: f1.losses,
        f1_ties: f1.ties,
        f1_win_rate: win_rate(f1.wins, count),
        precision_wins: precision.wins,
        precision_losses: precision.losses,
        precision_ties: precision.ties,
        precision_win_rate: win_rate(precision.wins, count),
        recall_wins: recall.wins,
        recall_losses: recall.losses,
        recall_ties: recall.ties,
        recall_win_rate: win_rate(recall.wins, count),
        accuracy_wins: accuracy.wins,
        accuracy_losses: accuracy.losses,
        accuracy_ties: accuracy.ties,
        accuracy_win_rate: win_rate(accuracy.wins, count),
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}

pub fn win_rate(wins: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        wins as f64 / count as f64
    }
}
