use crate::constants::SHEET_HEADER;
use crate::models::{Issue, ProjectMetadata};

/// Cell value when an issue carries no story-point estimate.
const NO_POINTS: &str = "N/A";

pub fn header_row() -> Vec<String> {
    SHEET_HEADER.iter().map(|s| s.to_string()).collect()
}

/// Drop pull requests from the listing, preserving API order for the rest.
pub fn non_pull_requests(issues: &[Issue]) -> Vec<&Issue> {
    issues.iter().filter(|i| !i.is_pull_request()).collect()
}

/// Map one issue and its board metadata into the fixed 11-column row.
pub fn to_row(issue: &Issue, metadata: &ProjectMetadata) -> Vec<String> {
    let labels = issue
        .labels
        .iter()
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let assignees = issue
        .assignees
        .iter()
        .map(|a| a.login.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let milestone_title = issue
        .milestone
        .as_ref()
        .map(|m| m.title.clone())
        .unwrap_or_default();
    let deadline = issue
        .milestone
        .as_ref()
        .and_then(|m| m.due_on.clone())
        .unwrap_or_default();

    vec![
        issue.number.to_string(),
        issue.state.clone(),
        "Issue".to_string(),
        issue.title.clone(),
        issue.html_url.clone(),
        labels,
        assignees,
        milestone_title,
        metadata.status.clone().unwrap_or_default(),
        metadata
            .story_points
            .map(format_points)
            .unwrap_or_else(|| NO_POINTS.to_string()),
        deadline,
    ]
}

// Board estimates are whole numbers in practice; keep "3" rather than "3.0",
// but don't truncate a genuine fraction.
fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{}", points as i64)
    } else {
        format!("{}", points)
    }
}
