//! The sweep pipeline: list, filter, classify, delete.

use chrono::NaiveDate;
use http::StatusCode;

use super::{
    SweepError,
    age::{NameFormatError, SuffixDateParser, exceeds_retention},
};
use crate::{catalog::CatalogClient, config::RunConfig, report};

/// Outcome of one delete call.
#[derive(Debug)]
pub struct DeletionResult {
    pub name: String,
    pub status: StatusCode,
}

/// Results from a single sweep run.
#[derive(Debug, Default)]
pub struct SweepRunResult {
    /// Number of catalog entries matching the partition prefix.
    pub filtered: usize,
    /// Names slated for deletion, lexicographically sorted.
    pub plan: Vec<String>,
    /// One entry per delete call issued (always empty in dry-run mode).
    pub deletions: Vec<DeletionResult>,
}

impl SweepRunResult {
    /// Number of indices actually deleted.
    pub fn deleted(&self) -> usize {
        self.deletions.len()
    }
}

/// Keeps only the names carrying the partition prefix.
///
/// An empty result is valid and flows through as zero deletions.
pub fn filter_indices(names: Vec<String>, prefix: &str) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .collect()
}

/// Builds the deletion plan: every filtered index strictly older than the
/// retention window, sorted so deletion order and report output are
/// reproducible across runs.
pub fn plan_deletions(
    names: &[String],
    parser: &SuffixDateParser,
    current_date: NaiveDate,
    retention_days: u32,
) -> Result<Vec<String>, NameFormatError> {
    let mut plan = Vec::new();
    for name in names {
        let created = parser.parse(name)?;
        if exceeds_retention(current_date, created, retention_days) {
            plan.push(name.clone());
        }
    }
    plan.sort_unstable();
    Ok(plan)
}

/// Runs one full sweep against the configured endpoint.
///
/// `current_date` is captured once by the caller so every age comparison
/// in the run shares the same "today", even when the run crosses midnight.
/// Any failure aborts the sweep on the spot; indices not yet processed are
/// left for the next invocation.
pub async fn run_sweep(
    config: &RunConfig,
    current_date: NaiveDate,
    out: &mut impl std::io::Write,
) -> Result<SweepRunResult, SweepError> {
    let client = CatalogClient::new(config);

    report::endpoint(out, config.endpoint.as_str())?;

    let names = client.list_indices().await?;
    let filtered = filter_indices(names, &config.prefix);
    report::filtered_count(out, filtered.len())?;

    let parser = SuffixDateParser::default();
    let plan = plan_deletions(&filtered, &parser, current_date, config.retention_days)?;

    tracing::info!(
        total = filtered.len(),
        stale = plan.len(),
        retention_days = config.retention_days,
        dry_run = config.dry_run,
        "Sweep plan computed"
    );

    report::deletion_plan(out, &plan)?;

    let mut deletions = Vec::with_capacity(plan.len());
    if config.dry_run {
        report::dry_run_notice(out)?;
    } else {
        for name in &plan {
            report::deleting(out, name)?;
            let status = client.delete_index(name).await?;
            report::delete_status(out, status)?;
            deletions.push(DeletionResult {
                name: name.clone(),
                status,
            });
        }
        report::deleted_count(out, deletions.len())?;
    }

    Ok(SweepRunResult {
        filtered: filtered.len(),
        plan,
        deletions,
    })
}
