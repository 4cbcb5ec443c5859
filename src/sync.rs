use crate::client::{GitHubClient, SheetsClient};
use crate::config::SyncConfig;
use crate::error::SyncResult;
use crate::logging::log_info;
use crate::rows;

/// Counters reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub fetched: usize,
    pub pull_requests_skipped: usize,
    pub rows_written: usize,
}

/// Execute one full sync: fetch, enrich, transform, overwrite the sheet.
/// Strictly sequential; the first error at any step aborts the run.
pub async fn run(config: &SyncConfig) -> SyncResult<SyncReport> {
    let github = GitHubClient::new(&config.github_token)?;
    let sheets = SheetsClient::new(&config.google_access_token)?;
    run_with_clients(config, &github, &sheets).await
}

/// Same procedure against caller-supplied clients, so tests can point both
/// at a mock server.
pub async fn run_with_clients(
    config: &SyncConfig,
    github: &GitHubClient,
    sheets: &SheetsClient,
) -> SyncResult<SyncReport> {
    log_info(&format!(
        "Fetching issues from {}/{}",
        config.owner, config.repo
    ));
    let issues = github.fetch_all_issues(&config.owner, &config.repo).await?;
    log_info(&format!("Fetched {} issues", issues.len()));

    let candidates = rows::non_pull_requests(&issues);
    let pull_requests_skipped = issues.len() - candidates.len();

    // Enrich before touching the sheet: an enrichment failure must abort the
    // run with the destination still untouched.
    let mut data_rows = Vec::with_capacity(candidates.len());
    for issue in &candidates {
        let metadata = github.project_metadata(&issue.node_id).await?;
        data_rows.push(rows::to_row(issue, &metadata));
    }

    let clear_range = format!("{}!A1:K", config.sheet_name);
    let append_range = format!("{}!A1", config.sheet_name);

    log_info(&format!(
        "Rewriting sheet '{}' with {} rows",
        config.sheet_name,
        data_rows.len()
    ));
    sheets
        .clear_range(&config.spreadsheet_id, &clear_range)
        .await?;
    sheets
        .append_rows(&config.spreadsheet_id, &append_range, &[rows::header_row()])
        .await?;
    // Append lands after the last populated row, so the data goes directly
    // beneath the header even though both calls address the same range.
    if !data_rows.is_empty() {
        sheets
            .append_rows(&config.spreadsheet_id, &append_range, &data_rows)
            .await?;
    }

    Ok(SyncReport {
        fetched: issues.len(),
        pull_requests_skipped,
        rows_written: data_rows.len(),
    })
}
