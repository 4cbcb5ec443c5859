pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const SHEETS_API_URL: &str = "https://sheets.googleapis.com";
pub const CONFIG_FILE: &str = ".gh-sheets-sync.json";
pub const USER_AGENT: &str = "gh-sheets-sync";

pub const ISSUES_PER_PAGE: u32 = 100;

// Fixed destination layout: 11 columns, header text must not drift between
// runs. The duplicate "Status" label (issue state vs. board status) is
// preserved from the original sheet layout.
pub const SHEET_HEADER: [&str; 11] = [
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
    "Deadline",
];

// Common GraphQL field selections
pub const PROJECT_ITEM_FIELDS: &str = r#"
    status: fieldValueByName(name: "Status") {
        ... on ProjectV2ItemFieldSingleSelectValue {
            name
        }
    }
    points: fieldValueByName(name: "Story Points") {
        ... on ProjectV2ItemFieldNumberValue {
            number
        }
    }
"#;
