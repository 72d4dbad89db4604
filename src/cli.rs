use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::metrics::{ComparisonMode, Metric};

#[derive(Parser, Debug)]
#[command(
    name = "f1bench",
    version,
    about = "Baseline comparison reporting for tool-evaluation CSVs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Compare(CompareArgs),
    Export(ExportArgs),
    Samples(SamplesArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long, default_value = "comparison_report.json")]
    pub report_path: PathBuf,

    #[arg(long = "baseline", default_value = "FCS+TIARA")]
    pub baselines: Vec<String>,

    #[arg(long, value_enum, default_value_t = Metric::F1Score)]
    pub metric: Metric,

    #[arg(long, value_enum, default_value_t = ComparisonMode::Difference)]
    pub comparison_type: ComparisonMode,

    #[arg(long, default_value_t = false)]
    pub with_comparisons: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub tolid: String,

    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SamplesArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub filter: Option<String>,

    #[arg(long)]
    pub tolid: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}
