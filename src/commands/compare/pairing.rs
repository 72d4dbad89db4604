use super::*;

pub const DEFAULT_BASELINE: &str = "FCS+TIARA";

#[derive(Debug, Clone)]
pub struct BaselineMatcher {
    aliases: Vec<String>,
    normalized: Vec<String>,
}

impl BaselineMatcher {
    pub fn new(aliases: &[String]) -> Self {
        let mut cleaned = Vec::new();
        let mut normalized = Vec::new();

        for alias in aliases {
            let alias = alias.trim();
            if alias.is_empty() {
                continue;
            }
            let lowered = alias.to_lowercase();
            if normalized.contains(&lowered) {
                continue;
            }
            cleaned.push(alias.to_string());
            normalized.push(lowered);
        }

        if cleaned.is_empty() {
            cleaned.push(DEFAULT_BASELINE.to_string());
            normalized.push(DEFAULT_BASELINE.to_lowercase());
        }

        Self {
            aliases: cleaned,
            normalized,
        }
    }

    pub fn is_baseline(&self, tool: &str) -> bool {
        let lowered = tool.to_lowercase();
        self.normalized.iter().any(|alias| alias == &lowered)
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

#[derive(Debug, Clone, Default)]
pub struct PairingCounts {
    pub groups_total: usize,
    pub groups_compared: usize,
    pub groups_without_baseline: usize,
    pub groups_with_multiple_baselines: usize,
    pub groups_without_competitors: usize,
    pub pairs_skipped_non_finite: usize,
}

pub fn group_key(row: &CleanRecord) -> String {
    format!("{}-{}", row.id, row.tolid)
}

pub fn compare_rows(
    rows: &[CleanRecord],
    matcher: &BaselineMatcher,
) -> (Vec<ComparisonRecord>, PairingCounts) {
    let mut groups: Vec<(String, Vec<&CleanRecord>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let key = group_key(row);
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, Vec::new()));
                groups.len() - 1
            }
        };
        groups[slot].1.push(row);
    }

    let mut counts = PairingCounts {
        groups_total: groups.len(),
        ..PairingCounts::default()
    };
    let mut comparisons = Vec::new();

    for (key, group_rows) in &groups {
        let baseline_rows: Vec<&CleanRecord> = group_rows
            .iter()
            .copied()
            .filter(|row| matcher.is_baseline(&row.tool))
            .collect();
        let competitors: Vec<&CleanRecord> = group_rows
            .iter()
            .copied()
            .filter(|row| !matcher.is_baseline(&row.tool))
            .collect();

        let baseline = match baseline_rows.as_slice() {
            [] => {
                counts.groups_without_baseline += 1;
                continue;
            }
            [single] => *single,
            _ => {
                counts.groups_with_multiple_baselines += 1;
                continue;
            }
        };

        if competitors.is_empty() {
            counts.groups_without_competitors += 1;
            continue;
        }

        if !baseline.f1_score.is_finite() {
            counts.pairs_skipped_non_finite += competitors.len();
            continue;
        }

        counts.groups_compared += 1;

        for candidate in competitors {
            if !candidate.f1_score.is_finite() {
                counts.pairs_skipped_non_finite += 1;
                continue;
            }
            comparisons.push(build_comparison(key, baseline, candidate));
        }
    }

    (comparisons, counts)
}

fn build_comparison(key: &str, baseline: &CleanRecord, candidate: &CleanRecord) -> ComparisonRecord {
    let fcs_f1 = baseline.f1_score;
    let fcs_precision = baseline.precision.unwrap_or(0.0);
    let fcs_recall = baseline.recall.unwrap_or(0.0);
    let fcs_accuracy = baseline.accuracy.unwrap_or(0.0);
    let tool_f1 = candidate.f1_score;
    let tool_precision = candidate.precision.unwrap_or(0.0);
    let tool_recall = candidate.recall.unwrap_or(0.0);
    let tool_accuracy = candidate.accuracy.unwrap_or(0.0);

    ComparisonRecord {
        dataset: key.to_string(),
        tool: candidate.tool.clone(),
        fcs_f1,
        fcs_precision,
        fcs_recall,
        fcs_accuracy,
        tool_f1,
        tool_precision,
        tool_recall,
        tool_accuracy,
        f1_diff: tool_f1 - fcs_f1,
        precision_diff: tool_precision - fcs_precision,
        recall_diff: tool_recall - fcs_recall,
        accuracy_diff: tool_accuracy - fcs_accuracy,
        f1_ratio: ratio_or_zero(tool_f1, fcs_f1),
        precision_ratio: ratio_or_zero(tool_precision, fcs_precision),
        recall_ratio: ratio_or_zero(tool_recall, fcs_recall),
        accuracy_ratio: ratio_or_zero(tool_accuracy, fcs_accuracy),
    }
}

pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
