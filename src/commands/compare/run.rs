use super::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum CompareOutcome {
    Ok,
    NoCleanRows,
    NoComparisons,
    EmptyAggregation,
}

impl CompareOutcome {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NoCleanRows => "no-clean-rows",
            Self::NoComparisons => "no-comparisons",
            Self::EmptyAggregation => "empty-aggregation",
        }
    }
}

pub fn run(args: CompareArgs) -> Result<()> {
    let dataset = load_dataset(&args.input)?;
    info!(
        path = %dataset.path.display(),
        rows_total = dataset.rows_total,
        rows_kept = dataset.rows_kept,
        rows_dropped = dataset.rows_dropped,
        "dataset loaded"
    );

    let matcher = BaselineMatcher::new(&args.baselines);
    let (comparisons, pairing) = compare_rows(&dataset.rows, &matcher);
    let summaries = aggregate(&comparisons);
    let insights = build_insights(&summaries);

    let mut warnings = Vec::new();
    let outcome = resolve_outcome(&dataset, &comparisons, &summaries, &mut warnings);

    let counts = CompareCounts {
        rows_total: dataset.rows_total,
        rows_kept: dataset.rows_kept,
        rows_dropped: dataset.rows_dropped,
        groups_total: pairing.groups_total,
        groups_compared: pairing.groups_compared,
        groups_without_baseline: pairing.groups_without_baseline,
        groups_with_multiple_baselines: pairing.groups_with_multiple_baselines,
        groups_without_competitors: pairing.groups_without_competitors,
        pairs_skipped_non_finite: pairing.pairs_skipped_non_finite,
        comparisons_total: comparisons.len(),
        tools_total: summaries.len(),
    };

    info!(
        groups = counts.groups_total,
        comparisons = counts.comparisons_total,
        tools = counts.tools_total,
        outcome = outcome.as_str(),
        "comparison pipeline completed"
    );

    let report = ComparisonReport {
        manifest_version: 1,
        generated_at: now_utc_string(),
        dataset: DatasetInfo {
            path: dataset.path.display().to_string(),
            name: dataset.name.clone(),
            sha256: dataset.sha256.clone(),
        },
        baseline_aliases: matcher.aliases().to_vec(),
        outcome: outcome.as_str().to_string(),
        counts,
        summaries,
        insights,
        comparisons: if args.with_comparisons {
            Some(comparisons)
        } else {
            None
        },
        warnings,
    };

    write_json_pretty(&args.report_path, &report)?;
    info!(path = %args.report_path.display(), "wrote comparison report");

    if args.json {
        write_json_output(&report)
    } else {
        write_text_output(&report, args.metric, args.comparison_type)
    }
}

fn resolve_outcome(
    dataset: &Dataset,
    comparisons: &[ComparisonRecord],
    summaries: &[ToolSummary],
    warnings: &mut Vec<String>,
) -> CompareOutcome {
    if dataset.rows.is_empty() {
        warn!("no rows survived cleaning; the input needs non-empty ID, Tool and F1-score columns");
        return CompareOutcome::NoCleanRows;
    }

    if comparisons.is_empty() {
        warn!("no valid comparison pairs found; check the baseline aliases against the Tool column");
        return CompareOutcome::NoComparisons;
    }

    if summaries.is_empty() {
        let message =
            "comparisons were produced but aggregation yielded no summaries".to_string();
        warn!("{message}");
        warnings.push(message);
        return CompareOutcome::EmptyAggregation;
    }

    CompareOutcome::Ok
}

fn write_json_output(report: &ComparisonReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, report)
        .context("failed to serialize comparison report")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn write_text_output(report: &ComparisonReport, metric: Metric, mode: ComparisonMode) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(
        output,
        "Dataset: {} ({} rows kept, {} dropped)",
        report.dataset.name, report.counts.rows_kept, report.counts.rows_dropped
    )?;
    writeln!(output, "Baseline: {}", report.baseline_aliases.join(", "))?;
    writeln!(output, "Outcome: {}", report.outcome)?;
    writeln!(
        output,
        "Comparisons: {} across {} groups",
        report.counts.comparisons_total, report.counts.groups_compared
    )?;

    if report.summaries.is_empty() {
        output.flush()?;
        return Ok(());
    }

    writeln!(output)?;
    writeln!(
        output,
        "{} comparison ({}): {} / {}",
        metric.as_str(),
        mode.as_str(),
        field_for_metric(metric, mode),
        win_rate_field(metric)
    )?;

    for (index, summary) in report.summaries.iter().enumerate() {
        writeln!(
            output,
            "{}.\t{}\t{}={:.3}\twin_rate={:.1}%\tn={}",
            index + 1,
            format_tool_name(&summary.tool),
            field_for_metric(metric, mode),
            value_for_metric(summary, metric, mode),
            win_rate_value(summary, metric) * 100.0,
            summary.count
        )?;
        writeln!(
            output,
            "\tf1: diff={:+.3} W/L/T={}/{}/{} avg_tool={:.3} avg_baseline={:.3}",
            summary.avg_f1_diff,
            summary.f1_wins,
            summary.f1_losses,
            summary.f1_ties,
            summary.avg_tool_f1,
            summary.avg_fcs_f1
        )?;
    }

    if let Some(insights) = &report.insights {
        writeln!(output)?;
        writeln!(output, "Best performing tools:")?;
        for best in &insights.best_tools {
            writeln!(
                output,
                "\t{}\t{:+.3}",
                format_tool_name(&best.tool),
                best.avg_f1_diff
            )?;
        }
        writeln!(
            output,
            "Tools outperforming baseline: {} of {}",
            insights.tools_outperforming_baseline, insights.tools_total
        )?;
        writeln!(
            output,
            "Avg F1 diff range: {:.3} to {:.3}",
            insights.min_avg_f1_diff, insights.max_avg_f1_diff
        )?;
    }

    output.flush()?;
    Ok(())
}
