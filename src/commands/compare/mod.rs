use std::collections::HashMap;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::CompareArgs;
use crate::dataset::{CleanRecord, Dataset, load_dataset};
use crate::metrics::{
    ComparisonMode, Metric, field_for_metric, format_tool_name, value_for_metric, win_rate_field,
    win_rate_value,
};
use crate::model::{
    BestTool, CompareCounts, ComparisonRecord, ComparisonReport, DatasetInfo, KeyInsights,
    ToolSummary,
};
use crate::util::{now_utc_string, write_json_pretty};

mod aggregation;
mod insights;
mod pairing;
mod run;

use self::aggregation::*;
use self::insights::*;
use self::pairing::*;

pub use self::run::run;
