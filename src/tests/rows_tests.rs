use crate::constants::SHEET_HEADER;
use crate::models::{Assignee, Issue, Label, Milestone, ProjectMetadata, PullRequestMarker};
use crate::rows::{header_row, non_pull_requests, to_row};

fn make_issue(number: u64, state: &str, title: &str, pull_request: bool) -> Issue {
    Issue {
        number,
        state: state.to_string(),
        title: title.to_string(),
        html_url: format!("https://github.com/owner/repo/issues/{}", number),
        node_id: format!("I_node{}", number),
        labels: vec![],
        assignees: vec![],
        milestone: None,
        pull_request: pull_request.then(|| PullRequestMarker { url: None }),
    }
}

#[test]
fn test_header_row_matches_fixed_layout() {
    let header = header_row();
    assert_eq!(header.len(), 11);
    assert_eq!(
        header,
        vec![
            "#",
            "Status",
            "Type",
            "Title",
            "URI",
            "Labels",
            "Assignees",
            "Milestone",
            "Status",
            "Story Points",
            "Deadline"
        ]
    );
    // Stable across calls: no schema drift between runs.
    assert_eq!(header_row(), header);
    assert_eq!(SHEET_HEADER.len(), 11);
}

#[test]
fn test_pull_requests_are_dropped_in_order() {
    let issues = vec![
        make_issue(1, "open", "A", false),
        make_issue(2, "closed", "B", true),
        make_issue(3, "open", "C", false),
        make_issue(4, "open", "D", true),
    ];

    let kept = non_pull_requests(&issues);
    let numbers: Vec<u64> = kept.iter().map(|i| i.number).collect();
    assert_eq!(numbers, vec![1, 3]);
    assert_eq!(kept.len(), issues.len() - 2);
}

#[test]
fn test_spec_example_one_data_row() {
    let issues = vec![
        make_issue(1, "open", "A", false),
        make_issue(2, "closed", "B", true),
    ];

    let kept = non_pull_requests(&issues);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].number, 1);

    let row = to_row(kept[0], &ProjectMetadata::default());
    assert_eq!(row[0], "1");
    assert_eq!(row[1], "open");
    assert_eq!(row[3], "A");
}

#[test]
fn test_row_with_full_metadata() {
    let mut issue = make_issue(42, "open", "Add pagination", false);
    issue.labels = vec![
        Label {
            name: "bug".to_string(),
        },
        Label {
            name: "backend".to_string(),
        },
    ];
    issue.assignees = vec![
        Assignee {
            login: "alice".to_string(),
        },
        Assignee {
            login: "bob".to_string(),
        },
    ];
    issue.milestone = Some(Milestone {
        title: "v1.0".to_string(),
        state: "open".to_string(),
        due_on: Some("2026-09-30T00:00:00Z".to_string()),
    });

    let metadata = ProjectMetadata {
        status: Some("In Progress".to_string()),
        story_points: Some(5.0),
    };

    let row = to_row(&issue, &metadata);
    assert_eq!(row.len(), 11);
    assert_eq!(row[0], "42");
    assert_eq!(row[1], "open");
    assert_eq!(row[2], "Issue");
    assert_eq!(row[3], "Add pagination");
    assert_eq!(row[4], "https://github.com/owner/repo/issues/42");
    assert_eq!(row[5], "bug, backend");
    assert_eq!(row[6], "alice, bob");
    assert_eq!(row[7], "v1.0");
    assert_eq!(row[8], "In Progress");
    assert_eq!(row[9], "5");
    assert_eq!(row[10], "2026-09-30T00:00:00Z");
}

#[test]
fn test_row_without_project_item_never_fails() {
    let issue = make_issue(7, "closed", "Orphan", false);
    let row = to_row(&issue, &ProjectMetadata::default());

    assert_eq!(row.len(), 11);
    assert_eq!(row[7], "");
    assert_eq!(row[8], "");
    assert_eq!(row[9], "N/A");
    assert_eq!(row[10], "");
}

#[test]
fn test_fractional_story_points_kept() {
    let issue = make_issue(8, "open", "Half", false);
    let metadata = ProjectMetadata {
        status: None,
        story_points: Some(0.5),
    };
    assert_eq!(to_row(&issue, &metadata)[9], "0.5");
}

#[test]
fn test_row_count_invariant() {
    let issues: Vec<Issue> = (1..=10)
        .map(|n| make_issue(n, "open", "x", n % 3 == 0))
        .collect();
    let pr_count = issues.iter().filter(|i| i.is_pull_request()).count();

    let rows: Vec<Vec<String>> = non_pull_requests(&issues)
        .iter()
        .map(|i| to_row(i, &ProjectMetadata::default()))
        .collect();

    assert_eq!(rows.len(), issues.len() - pr_count);
}

#[test]
fn test_issue_deserializes_from_listing_payload() {
    let json = r#"{
        "number": 12,
        "state": "open",
        "title": "Broken build",
        "html_url": "https://github.com/o/r/issues/12",
        "node_id": "I_abc",
        "labels": [{"name": "ci"}],
        "assignees": [{"login": "carol"}],
        "milestone": null
    }"#;

    let issue: Issue = serde_json::from_str(json).unwrap();
    assert_eq!(issue.number, 12);
    assert!(!issue.is_pull_request());
    assert_eq!(issue.labels[0].name, "ci");

    let pr_json = r#"{
        "number": 13,
        "state": "open",
        "title": "Fix build",
        "html_url": "https://github.com/o/r/pull/13",
        "node_id": "PR_abc",
        "labels": [],
        "assignees": [],
        "milestone": null,
        "pull_request": {"url": "https://api.github.com/repos/o/r/pulls/13"}
    }"#;

    let pr: Issue = serde_json::from_str(pr_json).unwrap();
    assert!(pr.is_pull_request());
}
